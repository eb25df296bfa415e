//! Effect runtime hosting for the GUI: the tokio side of the UI/effect bridge.

pub mod runtime;
