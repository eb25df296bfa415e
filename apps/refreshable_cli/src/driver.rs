//! Drives the refreshable store from a script and reports every state transition.

use refresh_core::{
    Refreshable, RefreshableAction, RefreshableFeature, RefreshableState, Store, ViewAction,
};
use serde::Serialize;
use tokio::time::Instant;
use tracing::info;

use crate::script::Step;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub step: String,
    pub elapsed_ms: u128,
    pub state: RefreshableState,
}

pub struct ScriptRunner {
    store: Store<RefreshableFeature>,
    refreshable: Refreshable,
    started: Instant,
    last_reported: Option<RefreshableState>,
}

impl ScriptRunner {
    pub fn new(store: Store<RefreshableFeature>) -> Self {
        Self {
            store,
            refreshable: Refreshable::default(),
            started: Instant::now(),
            last_reported: None,
        }
    }

    pub fn state(&self) -> &RefreshableState {
        self.store.state()
    }

    /// Runs every step, calling `emit` for the initial state and for each change after it.
    pub async fn run(&mut self, steps: &[Step], mut emit: impl FnMut(Transition)) {
        self.report("initial", &mut emit);
        for step in steps {
            let label = step.to_string();
            info!(step = %label, "script step");
            match *step {
                Step::Refresh => {
                    if !self.refreshable.trigger(
                        &mut self.store,
                        RefreshableAction::View(ViewAction::Refresh),
                        RefreshableAction::View(ViewAction::RefreshFinished),
                    ) {
                        info!("refresh already pending; step ignored");
                    }
                    self.report(&label, &mut emit);
                }
                Step::Cancel => {
                    let _ = self
                        .store
                        .send(RefreshableAction::View(ViewAction::CancelRefreshTapped));
                    self.report(&label, &mut emit);
                    self.settle(&label, &mut emit).await;
                }
                Step::Wait => self.settle(&label, &mut emit).await,
                Step::Sleep(duration) => {
                    tokio::time::sleep(duration).await;
                    self.store.process_pending();
                    self.report(&label, &mut emit);
                }
            }
        }
    }

    async fn settle(&mut self, label: &str, emit: &mut impl FnMut(Transition)) {
        self.refreshable.wait().await;
        self.store.process_pending();
        self.report(label, emit);
    }

    fn report(&mut self, step: &str, emit: &mut impl FnMut(Transition)) {
        let state = self.store.state();
        if self.last_reported.as_ref() == Some(state) {
            return;
        }
        self.last_reported = Some(state.clone());
        emit(Transition {
            step: step.to_string(),
            elapsed_ms: self.started.elapsed().as_millis(),
            state: state.clone(),
        });
    }
}

#[cfg(test)]
#[path = "tests/driver_tests.rs"]
mod tests;
