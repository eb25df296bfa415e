//! Intents raised by the view layer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiIntent {
    /// The pull gesture was released past its threshold.
    PullReleased,
    /// Keyboard shortcut (F5).
    RefreshShortcut,
    CancelTapped,
}

impl UiIntent {
    pub fn name(self) -> &'static str {
        match self {
            UiIntent::PullReleased => "pull_released",
            UiIntent::RefreshShortcut => "refresh_shortcut",
            UiIntent::CancelTapped => "cancel_tapped",
        }
    }
}
