mod call_spacing_test;
mod report_cache_test;
