pub mod clock;
pub mod config;
pub mod effect;
pub mod error;
pub mod feature;
pub mod reducer;
pub mod refreshable;
pub mod store;

pub use clock::{Clock, ContinuousClock, ImmediateClock};
pub use config::{load_settings, Settings};
pub use effect::Effect;
pub use error::{ConfigError, StoreError};
pub use feature::{
    CancelId, RefreshableAction, RefreshableFeature, RefreshableState, ViewAction,
};
pub use reducer::Reducer;
pub use refreshable::{DeferredSend, Refreshable};
pub use store::{ActionSender, ReservedSend, Store, StoreTask};
