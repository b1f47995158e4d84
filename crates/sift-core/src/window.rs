//! Skip/take pagination over ordered row sequences.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SKIP: usize = 0;
pub const DEFAULT_TAKE: usize = 20;

/// A pagination window: drop `skip` items, then keep at most `take`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub skip: usize,
    pub take: usize,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            take: DEFAULT_TAKE,
        }
    }
}

impl Window {
    pub fn new(skip: usize, take: usize) -> Self {
        Self { skip, take }
    }

    /// Builds a window from optional inputs, falling back to the defaults.
    pub fn from_options(skip: Option<usize>, take: Option<usize>) -> Self {
        Self {
            skip: skip.unwrap_or(DEFAULT_SKIP),
            take: take.unwrap_or(DEFAULT_TAKE),
        }
    }

    /// Number of leading items a source must produce for the window to be full.
    pub fn end(&self) -> usize {
        self.skip.saturating_add(self.take)
    }

    pub fn apply<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items.into_iter().skip(self.skip).take(self.take).collect()
    }
}
