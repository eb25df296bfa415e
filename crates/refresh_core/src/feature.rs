//! The refreshable list feature: a static list plus an in-progress flag driven by a
//! cancellable timed wait.

use std::{sync::Arc, time::Duration};

use serde::Serialize;
use tracing::debug;

use crate::{
    clock::{Clock, ContinuousClock},
    effect::Effect,
    reducer::Reducer,
};

pub const DEFAULT_REFRESH_DURATION: Duration = Duration::from_secs(2);
pub const DEFAULT_ITEMS: [&str; 3] = ["first", "second", "third"];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RefreshableState {
    pub items: Vec<String>,
    pub is_refreshing: bool,
}

impl Default for RefreshableState {
    fn default() -> Self {
        Self::with_items(DEFAULT_ITEMS.iter().map(|item| item.to_string()).collect())
    }
}

impl RefreshableState {
    pub fn with_items(items: Vec<String>) -> Self {
        Self {
            items,
            is_refreshing: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshableAction {
    View(ViewAction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    RefreshFinished,
    Refresh,
    CancelRefreshTapped,
}

impl From<ViewAction> for RefreshableAction {
    fn from(action: ViewAction) -> Self {
        Self::View(action)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelId {
    RefreshRequest,
}

pub struct RefreshableFeature {
    clock: Arc<dyn Clock>,
    refresh_duration: Duration,
}

impl Default for RefreshableFeature {
    fn default() -> Self {
        Self::new(Arc::new(ContinuousClock), DEFAULT_REFRESH_DURATION)
    }
}

impl RefreshableFeature {
    pub fn new(clock: Arc<dyn Clock>, refresh_duration: Duration) -> Self {
        Self {
            clock,
            refresh_duration,
        }
    }

    pub fn refresh_duration(&self) -> Duration {
        self.refresh_duration
    }

    fn handle_view_action(
        &self,
        state: &mut RefreshableState,
        action: ViewAction,
    ) -> Effect<RefreshableAction, CancelId> {
        match action {
            ViewAction::RefreshFinished => {
                state.is_refreshing = false;
                Effect::none()
            }
            ViewAction::Refresh => {
                state.is_refreshing = true;
                let clock = Arc::clone(&self.clock);
                let duration = self.refresh_duration;
                Effect::run(move |_send| async move {
                    clock.sleep(duration).await;
                    debug!(?duration, "refresh wait elapsed");
                })
                .cancellable(CancelId::RefreshRequest)
            }
            // The flag is cleared by whoever awaits the refresh task, once it unwinds.
            ViewAction::CancelRefreshTapped => Effect::cancel(CancelId::RefreshRequest),
        }
    }
}

impl Reducer for RefreshableFeature {
    type State = RefreshableState;
    type Action = RefreshableAction;
    type CancelId = CancelId;

    fn reduce(
        &self,
        state: &mut RefreshableState,
        action: RefreshableAction,
    ) -> Effect<RefreshableAction, CancelId> {
        match action {
            RefreshableAction::View(view_action) => self.handle_view_action(state, view_action),
        }
    }
}

#[cfg(test)]
#[path = "tests/feature_tests.rs"]
mod tests;
