use std::{fmt, str::FromStr, time::Duration};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Refresh,
    Cancel,
    /// Block until the pending refresh, if any, has completed.
    Wait,
    Sleep(Duration),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("script is empty")]
    Empty,
    #[error("unknown step '{0}' (expected refresh, cancel, wait or sleep:<ms>)")]
    UnknownStep(String),
    #[error("invalid sleep duration '{0}'")]
    InvalidSleep(String),
}

impl FromStr for Step {
    type Err = ScriptError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let step = raw.trim().to_ascii_lowercase();
        match step.as_str() {
            "refresh" => Ok(Step::Refresh),
            "cancel" => Ok(Step::Cancel),
            "wait" => Ok(Step::Wait),
            _ => match step.strip_prefix("sleep:") {
                Some(ms) => ms
                    .trim()
                    .parse::<u64>()
                    .map(|ms| Step::Sleep(Duration::from_millis(ms)))
                    .map_err(|_| ScriptError::InvalidSleep(ms.to_string())),
                None => Err(ScriptError::UnknownStep(raw.trim().to_string())),
            },
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Refresh => f.write_str("refresh"),
            Step::Cancel => f.write_str("cancel"),
            Step::Wait => f.write_str("wait"),
            Step::Sleep(duration) => write!(f, "sleep:{}", duration.as_millis()),
        }
    }
}

/// Parses a comma-separated step list such as `refresh,cancel,refresh,wait`.
pub fn parse_script(raw: &str) -> Result<Vec<Step>, ScriptError> {
    let steps = raw
        .split(',')
        .filter(|step| !step.trim().is_empty())
        .map(Step::from_str)
        .collect::<Result<Vec<_>, _>>()?;
    if steps.is_empty() {
        return Err(ScriptError::Empty);
    }
    Ok(steps)
}

#[cfg(test)]
#[path = "tests/script_tests.rs"]
mod tests;
