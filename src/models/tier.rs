/// The priority bucket a task sits in.
///
/// - `Now`: The active task. At most one.
/// - `Next`: The queued task. At most one, and only alongside a `Now`.
/// - `Soon`: Ordered list behind `Next`.
/// - `Later`: Ordered list kept apart from the high-priority chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Now,
    Next,
    Soon,
    Later,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Now => "now",
            Self::Next => "next",
            Self::Soon => "soon",
            Self::Later => "later",
        }
    }

    /// Tier of the task at `index` in the high-priority chain.
    pub(crate) fn of_high_priority(index: usize) -> Self {
        match index {
            0 => Self::Now,
            1 => Self::Next,
            _ => Self::Soon,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
