//! Event context supplied alongside the rosters.

use serde::{Deserialize, Serialize};

/// Hours assumed left when the caller does not know.
pub const DEFAULT_HOURS_LEFT: f64 = 24.0;

/// Competitive format of the war.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WarFormat {
    /// Several attacks per participant against a shared target list.
    #[default]
    Standard,
    /// Exactly one attack per participant.
    League,
}

impl WarFormat {
    /// Attacks each participant may spend over the whole event.
    pub fn attack_limit(&self) -> u32 {
        match self {
            WarFormat::Standard => 2,
            WarFormat::League => 1,
        }
    }
}

impl std::fmt::Display for WarFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WarFormat::Standard => write!(f, "Standard"),
            WarFormat::League => write!(f, "League"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventContext {
    #[serde(default = "default_hours_left")]
    pub hours_left: f64,
    #[serde(default)]
    pub format: WarFormat,
}

fn default_hours_left() -> f64 {
    DEFAULT_HOURS_LEFT
}

impl Default for EventContext {
    fn default() -> Self {
        Self {
            hours_left: DEFAULT_HOURS_LEFT,
            format: WarFormat::Standard,
        }
    }
}

impl EventContext {
    pub fn new(hours_left: f64, format: WarFormat) -> Self {
        Self { hours_left, format }
    }

    pub fn league() -> Self {
        Self {
            format: WarFormat::League,
            ..Self::default()
        }
    }

    /// True once the remaining time is at or under `threshold_hours`.
    pub fn is_secure_win(&self, threshold_hours: f64) -> bool {
        self.hours_left <= threshold_hours
    }
}
