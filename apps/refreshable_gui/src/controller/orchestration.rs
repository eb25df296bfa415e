//! Intent orchestration: routes UI intents through the store and the refresh completion driver.

use refresh_core::{
    Refreshable, RefreshableAction, RefreshableFeature, RefreshableState, Store, ViewAction,
};

use crate::controller::events::UiIntent;

pub struct ScreenController {
    store: Store<RefreshableFeature>,
    refreshable: Refreshable,
}

impl ScreenController {
    pub fn new(store: Store<RefreshableFeature>) -> Self {
        Self {
            store,
            refreshable: Refreshable::default(),
        }
    }

    pub fn state(&self) -> &RefreshableState {
        self.store.state()
    }

    /// Spinner state of the pull-to-refresh affordance.
    pub fn is_refresh_pending(&self) -> bool {
        self.refreshable.is_pending()
    }

    /// Reduces actions emitted by effects and completion guards since the last frame.
    pub fn sync(&mut self) -> usize {
        self.store.process_pending()
    }

    pub fn apply(&mut self, intent: UiIntent) {
        tracing::debug!(intent = intent.name(), "ui intent");
        match intent {
            UiIntent::PullReleased | UiIntent::RefreshShortcut => {
                let started = self.refreshable.trigger(
                    &mut self.store,
                    RefreshableAction::View(ViewAction::Refresh),
                    RefreshableAction::View(ViewAction::RefreshFinished),
                );
                if started {
                    tracing::info!(intent = intent.name(), "refresh started");
                }
            }
            UiIntent::CancelTapped => {
                let _ = self
                    .store
                    .send(RefreshableAction::View(ViewAction::CancelRefreshTapped));
                tracing::info!("refresh cancel requested");
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
