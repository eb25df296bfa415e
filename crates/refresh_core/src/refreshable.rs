//! Pull-to-refresh completion driver.
//!
//! A host gesture sends the refresh action, then waits for the resulting
//! effect work to finish before releasing its spinner. The finished action is
//! sent from a drop guard, so it fires on natural completion, on cancellation
//! and on runtime shutdown alike. The guard holds a reserved inbox slot, so a
//! busy inbox cannot swallow the finished action.

use std::fmt;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::{
    reducer::Reducer,
    store::{ActionSender, ReservedSend, Store},
};

/// Sends an action when dropped.
pub struct DeferredSend<A: fmt::Debug> {
    sender: ActionSender<A>,
    slot: Option<ReservedSend<A>>,
    action: Option<A>,
}

impl<A: fmt::Debug> DeferredSend<A> {
    pub fn new(sender: ActionSender<A>, action: A) -> Self {
        let slot = match sender.reserve() {
            Ok(slot) => Some(slot),
            Err(err) => {
                warn!(%err, "could not reserve inbox slot for deferred action");
                None
            }
        };
        Self {
            sender,
            slot,
            action: Some(action),
        }
    }
}

impl<A: fmt::Debug> Drop for DeferredSend<A> {
    fn drop(&mut self) {
        let Some(action) = self.action.take() else {
            return;
        };
        match self.slot.take() {
            Some(slot) => slot.send(action),
            None => {
                let _ = self.sender.send(action);
            }
        }
    }
}

#[derive(Default)]
pub struct Refreshable {
    pending: Option<JoinHandle<()>>,
}

impl Refreshable {
    /// Starts a refresh unless one is already pending. Returns whether it started.
    pub fn trigger<R: Reducer>(
        &mut self,
        store: &mut Store<R>,
        refresh: R::Action,
        finished: R::Action,
    ) -> bool {
        if self.is_pending() {
            debug!("refresh already pending; ignoring trigger");
            return false;
        }

        // A refresh that just completed may still have its finished action queued;
        // reduce it now so it cannot clear the flag of the refresh started below.
        store.process_pending();

        let guard = DeferredSend::new(store.sender(), finished);
        let task = store.send(refresh);
        self.pending = Some(store.runtime().spawn(async move {
            let _finished = guard;
            task.finish().await;
        }));
        true
    }

    /// True while the spinner should be shown.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.is_finished())
    }

    /// Waits until the pending refresh, if any, has sent its finished action.
    pub async fn wait(&mut self) {
        if let Some(pending) = self.pending.take() {
            let _ = pending.await;
        }
    }
}

#[cfg(test)]
#[path = "tests/refreshable_tests.rs"]
mod tests;
