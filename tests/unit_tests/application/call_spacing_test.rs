use std::time::Duration;

use lvc_reporter::application::services::CallSpacing;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn given_first_call_when_waiting_then_returns_immediately() {
    let spacing = CallSpacing::new(Duration::from_secs(4));
    let start = Instant::now();

    spacing.wait_turn().await;

    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn given_back_to_back_calls_when_waiting_then_second_is_spaced_by_interval() {
    let spacing = CallSpacing::new(Duration::from_secs(4));
    let start = Instant::now();

    spacing.wait_turn().await;
    spacing.wait_turn().await;

    assert!(start.elapsed() >= Duration::from_secs(4));
}

#[tokio::test(start_paused = true)]
async fn given_interval_already_elapsed_when_waiting_then_does_not_sleep_again() {
    let spacing = CallSpacing::new(Duration::from_secs(4));
    spacing.wait_turn().await;
    tokio::time::sleep(Duration::from_secs(10)).await;
    let start = Instant::now();

    spacing.wait_turn().await;

    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn given_zero_interval_when_waiting_repeatedly_then_never_sleeps() {
    let spacing = CallSpacing::new(Duration::ZERO);
    let start = Instant::now();

    for _ in 0..5 {
        spacing.wait_turn().await;
    }

    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(spacing.min_interval(), Duration::ZERO);
}
