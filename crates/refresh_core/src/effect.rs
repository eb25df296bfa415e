//! Effect descriptions returned by reducers and executed by the [`Store`](crate::store::Store).

use std::{fmt, future::Future};

use futures::future::BoxFuture;

use crate::store::ActionSender;

pub type Operation<A> = Box<dyn FnOnce(ActionSender<A>) -> BoxFuture<'static, ()> + Send>;

/// Asynchronous work a reducer asks the store to perform.
///
/// Effects are inert values: nothing runs until the store executes them.
/// Actions produced by an effect are fed back through the [`ActionSender`].
pub enum Effect<A, Id> {
    None,
    Run(Operation<A>),
    Cancellable { id: Id, effect: Box<Effect<A, Id>> },
    Cancel(Id),
    Merge(Vec<Effect<A, Id>>),
}

impl<A, Id> Effect<A, Id> {
    pub fn none() -> Self {
        Self::None
    }

    pub fn run<F, Fut>(operation: F) -> Self
    where
        A: 'static,
        Id: 'static,
        F: FnOnce(ActionSender<A>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::Run(Box::new(move |send| -> BoxFuture<'static, ()> {
            Box::pin(operation(send))
        }))
    }

    /// Marks every task started by this effect as cancellable under `id`.
    pub fn cancellable(self, id: Id) -> Self {
        match self {
            Self::None => Self::None,
            effect => Self::Cancellable {
                id,
                effect: Box::new(effect),
            },
        }
    }

    pub fn cancel(id: Id) -> Self {
        Self::Cancel(id)
    }

    pub fn merge(effects: impl IntoIterator<Item = Self>) -> Self {
        let effects: Vec<Self> = effects.into_iter().filter(|e| !e.is_none()).collect();
        if effects.is_empty() {
            Self::None
        } else {
            Self::Merge(effects)
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[cfg(test)]
impl<A, Id> Effect<A, Id>
where
    A: fmt::Debug + Send + 'static,
    Id: 'static,
{
    /// Feeds `action` back into the store once the effect runs.
    pub(crate) fn send(action: A) -> Self {
        Self::run(move |send| async move {
            let _ = send.send(action);
        })
    }
}

impl<A, Id: fmt::Debug> fmt::Debug for Effect<A, Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Run(_) => f.write_str("Run(..)"),
            Self::Cancellable { id, effect } => f
                .debug_struct("Cancellable")
                .field("id", id)
                .field("effect", effect)
                .finish(),
            Self::Cancel(id) => f.debug_tuple("Cancel").field(id).finish(),
            Self::Merge(effects) => f.debug_tuple("Merge").field(effects).finish(),
        }
    }
}
