use super::*;

use std::time::Duration;

use tokio::runtime::Handle;

fn controller() -> ScreenController {
    ScreenController::new(Store::new(
        RefreshableState::default(),
        RefreshableFeature::default(),
        Handle::current(),
    ))
}

async fn settle(controller: &mut ScreenController) {
    controller.refreshable.wait().await;
    controller.sync();
}

#[tokio::test(start_paused = true)]
async fn pull_release_refreshes_until_wait_elapses() {
    let mut controller = controller();

    controller.apply(UiIntent::PullReleased);
    assert!(controller.state().is_refreshing);
    assert!(controller.is_refresh_pending());

    tokio::time::sleep(Duration::from_millis(1500)).await;
    controller.sync();
    assert!(controller.state().is_refreshing);

    settle(&mut controller).await;
    assert!(!controller.state().is_refreshing);
    assert!(!controller.is_refresh_pending());
}

#[tokio::test(start_paused = true)]
async fn cancel_tapped_clears_flag_via_completion_guard() {
    let mut controller = controller();

    controller.apply(UiIntent::RefreshShortcut);
    controller.apply(UiIntent::CancelTapped);
    settle(&mut controller).await;

    assert!(!controller.state().is_refreshing);
    assert_eq!(controller.state().items, vec!["first", "second", "third"]);
}

#[tokio::test(start_paused = true)]
async fn cancel_when_idle_is_harmless() {
    let mut controller = controller();

    controller.apply(UiIntent::CancelTapped);

    assert_eq!(controller.sync(), 0);
    assert!(!controller.state().is_refreshing);
    assert!(!controller.is_refresh_pending());
}

#[tokio::test(start_paused = true)]
async fn repeated_pull_while_pending_does_not_restart_wait() {
    let mut controller = controller();

    controller.apply(UiIntent::PullReleased);
    tokio::time::sleep(Duration::from_millis(1000)).await;
    controller.apply(UiIntent::PullReleased);

    tokio::time::sleep(Duration::from_millis(1100)).await;
    settle(&mut controller).await;
    assert!(!controller.state().is_refreshing);
}
