mod session_store_test;
