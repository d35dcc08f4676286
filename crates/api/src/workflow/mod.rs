//! Multi-step operations whose secondary effects are best-effort.
//!
//! The primary write is the unit of success. Secondary effects (emails,
//! remote image deletion) are reported as [`SideEffect`] values next to the
//! primary result and never turn a committed write into an error.

pub mod booking;
pub mod cleanup;

/// Outcome of a best-effort secondary effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    Done,
    Failed(String),
}

impl SideEffect {
    pub fn from_result<E: std::fmt::Display>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Done,
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn succeeded(&self) -> bool {
        matches!(self, Self::Done)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Done => None,
            Self::Failed(reason) => Some(reason),
        }
    }
}
