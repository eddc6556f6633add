use serde::{Deserialize, Serialize};

/// Widths at or above these thresholds promote the viewport to the next class.
pub const SMALL_MIN_WIDTH: f32 = 576.0;
pub const MEDIUM_MIN_WIDTH: f32 = 768.0;
pub const WIDE_MIN_WIDTH: f32 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    Narrow,
    Small,
    Medium,
    Wide,
}

impl ViewportClass {
    pub fn from_width(width: f32) -> Self {
        if width < SMALL_MIN_WIDTH {
            Self::Narrow
        } else if width < MEDIUM_MIN_WIDTH {
            Self::Small
        } else if width < WIDE_MIN_WIDTH {
            Self::Medium
        } else {
            Self::Wide
        }
    }

    /// Number of items simultaneously visible in this viewport class.
    pub fn items_per_view(self) -> usize {
        match self {
            Self::Narrow => 1,
            Self::Small => 2,
            Self::Medium => 3,
            Self::Wide => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Back,
    Forward,
}

impl Direction {
    /// Signed index delta applied by a move in this direction.
    pub fn step(self) -> i64 {
        match self {
            Self::Back => -1,
            Self::Forward => 1,
        }
    }
}

/// How a track offset change is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionMode {
    /// Eased slide over the fixed transition duration.
    Animated,
    /// Instant reposition, used to hide the jump across the clone boundary.
    Snap,
}
