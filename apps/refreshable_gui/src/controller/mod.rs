//! Controller layer: UI intents and their translation into store actions.

pub mod events;
pub mod orchestration;
