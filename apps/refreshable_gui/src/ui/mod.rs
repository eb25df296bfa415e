//! UI layer: app shell, list rows and the pull-to-refresh gesture.

pub mod app;
pub mod pull;
pub mod rows;

pub use app::RefreshableApp;
