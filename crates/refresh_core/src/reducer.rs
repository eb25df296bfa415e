use std::{fmt, hash::Hash};

use crate::effect::Effect;

/// Pure state transition: `(state, action) -> (state', effect)`.
///
/// Implementations must not perform I/O; all side effects are described by
/// the returned [`Effect`].
pub trait Reducer {
    type State;
    type Action: fmt::Debug + Send + 'static;
    type CancelId: fmt::Debug + Clone + Eq + Hash + Send + 'static;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
    ) -> Effect<Self::Action, Self::CancelId>;
}
