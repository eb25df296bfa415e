//! Store runtime: owns feature state, runs reducers and executes their effects on tokio.

use std::{fmt, sync::Arc};

use tokio::{
    runtime::Handle,
    sync::{
        mpsc::{self, error::TrySendError, OwnedPermit},
        oneshot,
    },
    task::AbortHandle,
};
use tracing::{debug, warn};

use crate::{effect::Effect, error::StoreError, reducer::Reducer};

pub(crate) const INBOX_CAPACITY: usize = 256;

type Notifier = Arc<dyn Fn() + Send + Sync>;

/// Cloneable handle that feeds actions back into a store's inbox.
pub struct ActionSender<A> {
    tx: mpsc::Sender<A>,
    notify: Option<Notifier>,
}

impl<A> Clone for ActionSender<A> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            notify: self.notify.clone(),
        }
    }
}

impl<A: fmt::Debug> ActionSender<A> {
    pub fn send(&self, action: A) -> Result<(), StoreError> {
        match self.tx.try_send(action) {
            Ok(()) => {
                if let Some(notify) = &self.notify {
                    notify();
                }
                Ok(())
            }
            Err(TrySendError::Full(action)) => {
                warn!(?action, "store inbox is full; dropping action");
                Err(StoreError::InboxFull)
            }
            Err(TrySendError::Closed(action)) => {
                warn!(?action, "store inbox disconnected; dropping action");
                Err(StoreError::InboxDisconnected)
            }
        }
    }

    /// Claims one inbox slot up front so a later send cannot fail on capacity.
    pub fn reserve(&self) -> Result<ReservedSend<A>, StoreError> {
        match self.tx.clone().try_reserve_owned() {
            Ok(permit) => Ok(ReservedSend {
                permit,
                notify: self.notify.clone(),
            }),
            Err(TrySendError::Full(_)) => Err(StoreError::InboxFull),
            Err(TrySendError::Closed(_)) => Err(StoreError::InboxDisconnected),
        }
    }
}

/// An inbox slot claimed by [`ActionSender::reserve`].
pub struct ReservedSend<A> {
    permit: OwnedPermit<A>,
    notify: Option<Notifier>,
}

impl<A> ReservedSend<A> {
    pub fn send(self, action: A) {
        let _ = self.permit.send(action);
        if let Some(notify) = &self.notify {
            notify();
        }
    }
}

/// Handle to the effect work started by a single [`Store::send`].
#[must_use = "dropping a StoreTask does not cancel its effects, but the completion signal is lost"]
pub struct StoreTask {
    done: Vec<oneshot::Receiver<()>>,
}

impl StoreTask {
    /// Resolves once every task started by the send has finished or been cancelled.
    pub async fn finish(self) {
        for done in self.done {
            // Err means the task was aborted, which also counts as finished.
            let _ = done.await;
        }
    }

    #[cfg(test)]
    pub(crate) fn has_effects(&self) -> bool {
        !self.done.is_empty()
    }
}

struct RunningEffect<Id> {
    cancel_ids: Vec<Id>,
    handle: AbortHandle,
}

pub struct Store<R: Reducer> {
    state: R::State,
    reducer: R,
    runtime: Handle,
    inbox_tx: mpsc::Sender<R::Action>,
    inbox_rx: mpsc::Receiver<R::Action>,
    notify: Option<Notifier>,
    running: Vec<RunningEffect<R::CancelId>>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial_state: R::State, reducer: R, runtime: Handle) -> Self {
        let (inbox_tx, inbox_rx) = mpsc::channel(INBOX_CAPACITY);
        Self {
            state: initial_state,
            reducer,
            runtime,
            inbox_tx,
            inbox_rx,
            notify: None,
            running: Vec::new(),
        }
    }

    /// Installs a callback fired whenever an action lands in the inbox, e.g. a repaint request.
    pub fn with_notifier(mut self, notify: impl Fn() + Send + Sync + 'static) -> Self {
        self.notify = Some(Arc::new(notify));
        self
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn runtime(&self) -> &Handle {
        &self.runtime
    }

    pub fn sender(&self) -> ActionSender<R::Action> {
        ActionSender {
            tx: self.inbox_tx.clone(),
            notify: self.notify.clone(),
        }
    }

    pub fn send(&mut self, action: R::Action) -> StoreTask {
        debug!(?action, "store: reduce");
        let effect = self.reducer.reduce(&mut self.state, action);
        let mut done = Vec::new();
        self.execute(effect, &[], &mut done);
        StoreTask { done }
    }

    /// Reduces every action currently waiting in the inbox. Returns how many were handled.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.inbox_rx.try_recv() {
            let _ = self.send(action);
            processed += 1;
        }
        processed
    }

    /// Waits for the next inbox action and reduces it.
    pub async fn process_next(&mut self) {
        // The store holds a sender, so the inbox never closes while `self` is alive.
        if let Some(action) = self.inbox_rx.recv().await {
            let _ = self.send(action);
        }
    }

    pub fn cancel(&mut self, id: &R::CancelId) {
        let mut cancelled = 0usize;
        self.running.retain(|effect| {
            if effect.cancel_ids.contains(id) {
                effect.handle.abort();
                cancelled += 1;
                false
            } else {
                true
            }
        });
        debug!(?id, cancelled, "store: cancel");
    }

    /// Number of unfinished effect tasks registered under `id`.
    pub fn in_flight(&self, id: &R::CancelId) -> usize {
        self.running
            .iter()
            .filter(|effect| !effect.handle.is_finished() && effect.cancel_ids.contains(id))
            .count()
    }

    fn execute(
        &mut self,
        effect: Effect<R::Action, R::CancelId>,
        cancel_ids: &[R::CancelId],
        done: &mut Vec<oneshot::Receiver<()>>,
    ) {
        match effect {
            Effect::None => {}
            Effect::Run(operation) => {
                self.running.retain(|effect| !effect.handle.is_finished());

                let (done_tx, done_rx) = oneshot::channel();
                let work = operation(self.sender());
                let handle = self.runtime.spawn(async move {
                    work.await;
                    let _ = done_tx.send(());
                });
                self.running.push(RunningEffect {
                    cancel_ids: cancel_ids.to_vec(),
                    handle: handle.abort_handle(),
                });
                done.push(done_rx);
            }
            Effect::Cancellable { id, effect } => {
                let mut ids = cancel_ids.to_vec();
                ids.push(id);
                self.execute(*effect, &ids, done);
            }
            Effect::Cancel(id) => self.cancel(&id),
            Effect::Merge(effects) => {
                for effect in effects {
                    self.execute(effect, cancel_ids, done);
                }
            }
        }
    }
}

impl<R: Reducer> Drop for Store<R> {
    fn drop(&mut self) {
        for effect in self.running.drain(..) {
            effect.handle.abort();
        }
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
