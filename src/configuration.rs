//! Config for the planner behaviors
//!
//! Configuration can be created programmatically using [`Configuration::new()`] or by reading
//! environment variables using [`Configuration::from_env()`].
//!
//! # Environment Variables
//!
//! All values are optional. Flags are case-insensitive and enabled by the value `"true"`.
//! Numbers that fail to parse keep their default.
//!
//! - `WAR_LOG` — Enable logging to a file (default: `false`)
//! - `WAR_SECURE_WIN_HOURS` — Hours left at which secure-win mode starts (default: `4`)
//! - `WAR_TOP_TIER_LEVEL` — Level counted as top tier by the mismatch detector (default: `16`)
//! - `WAR_MISMATCH_PROTOCOL` — Let a detected mismatch send the bottom of the roster to scout the
//!   top bases in standard wars (default: `false`)

use std::str::FromStr;

/// Hours left at or under which the standard strategy secures the win.
pub const DEFAULT_SECURE_WIN_HOURS: f64 = 4.0;

/// Current maximum level.
pub const DEFAULT_TOP_TIER_LEVEL: u32 = 16;

/// Configuration for planner behaviors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Configuration {
    pub(crate) log: bool,
    pub(crate) secure_win_hours: f64,
    pub(crate) top_tier_level: u32,
    pub(crate) mismatch_protocol: bool,
}

impl Configuration {
    /// Create a new configuration with default parameters.
    ///
    /// By default:
    /// - Logging to file is disabled.
    /// - Secure-win mode starts with 4 hours left.
    /// - Level 16 is top tier.
    /// - A mismatch is reported but does not change any assignment.
    pub fn new() -> Self {
        Self {
            log: false,
            secure_win_hours: DEFAULT_SECURE_WIN_HOURS,
            top_tier_level: DEFAULT_TOP_TIER_LEVEL,
            mismatch_protocol: false,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// See the [module documentation](self) for the recognized variables. Any other value
    /// (including unset) will result in using the default value for each field.
    pub fn from_env() -> Self {
        fn get_env_flag(var: &str, default: bool) -> bool {
            match std::env::var(var) {
                Ok(val) => val.eq_ignore_ascii_case("true"),
                Err(_) => default,
            }
        }

        fn get_env_value<T: FromStr>(var: &str, default: T) -> T {
            std::env::var(var)
                .ok()
                .and_then(|val| val.trim().parse().ok())
                .unwrap_or(default)
        }

        Self {
            log: get_env_flag("WAR_LOG", false),
            secure_win_hours: get_env_value("WAR_SECURE_WIN_HOURS", DEFAULT_SECURE_WIN_HOURS),
            top_tier_level: get_env_value("WAR_TOP_TIER_LEVEL", DEFAULT_TOP_TIER_LEVEL),
            mismatch_protocol: get_env_flag("WAR_MISMATCH_PROTOCOL", false),
        }
    }

    /// Enable or disable logging to file.
    pub fn with_log(mut self, value: bool) -> Self {
        self.log = value;
        self
    }

    /// Set the remaining hours at which secure-win mode starts.
    pub fn with_secure_win_hours(mut self, hours: f64) -> Self {
        self.secure_win_hours = hours;
        self
    }

    /// Set the level counted as top tier.
    pub fn with_top_tier_level(mut self, level: u32) -> Self {
        self.top_tier_level = level;
        self
    }

    /// Enable or disable the mismatch scout protocol.
    ///
    /// When enabled and the away side has more than two extra top-tier bases, the bottom of the
    /// home roster is sent to two-star or scout the top bases in standard wars.
    /// When disabled, the mismatch is only reported.
    pub fn with_mismatch_protocol(mut self, value: bool) -> Self {
        self.mismatch_protocol = value;
        self
    }

    pub fn log(&self) -> bool {
        self.log
    }

    pub fn secure_win_hours(&self) -> f64 {
        self.secure_win_hours
    }

    pub fn top_tier_level(&self) -> u32 {
        self.top_tier_level
    }

    pub fn mismatch_protocol(&self) -> bool {
        self.mismatch_protocol
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new()
    }
}
