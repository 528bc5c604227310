//! # War Planner
//!
//! Target assignment and hit-probability engine for team-vs-team wars.
//!
//! Given the home roster, the list of opposing bases and the war context, it recommends a target
//! for every attacker, with a confidence estimate and a rationale tag.
//!
//! It provides:
//! - A hit-probability model built from level differential, positional rank and attack history
//!   ([`hit_probability`])
//! - Assignment via the [`AssignmentStrategy`](crate::assignment_strategy::AssignmentStrategy)
//!   trait, with built-in `StandardStrategy` (two attacks each) and `LeagueStrategy` (one attack
//!   each)
//! - A mismatch detector flagging wars where the other side has far more top-tier bases
//! - The [`WarPlanner`](crate::planner::WarPlanner) orchestrator tying them together
//!
//! The engine is a pure function of its inputs: no I/O, no shared state, no failure modes.
//! Fetching war data and computing player skill metrics is up to the caller.
//!
//! # Documentation Overview
//!
//! - For the inputs and their default values, see [`roster`] and [`war_context`].
//! - For the planning entry point and its output, see the [`planner`] module.
//! - For how each format picks targets, see [`assignment_strategy`].
//! - For tunables (secure-win threshold, top-tier level, ...), see
//!   [`Configuration`](crate::configuration::Configuration).
//!
//! # Usage Example
//!
//! ```rust
//! use war_planner::prelude::*;
//!
//! let home = vec![
//!     Attacker::new("A", 15).with_skill_score(100.0),
//!     Attacker::new("B", 13),
//! ];
//! let away = vec![Target::new("X", 15, 1), Target::new("Y", 13, 2)];
//!
//! let planner = WarPlanner::new(Configuration::new());
//! let plan = planner.plan(&home, &away, None);
//!
//! let a = plan.for_attacker("A").unwrap();
//! assert_eq!(a.target_id.as_deref(), Some("Y"));
//! assert_eq!(a.rationale, Rationale::Cleanup);
//! assert_eq!(a.confidence, 95);
//! ```

pub mod assignment_strategy;
pub mod configuration;
pub mod hit_probability;
pub mod logger;
pub mod metrics;
pub mod mismatch;
pub mod planner;
pub mod recommendation;
pub mod roster;
pub mod snapshot;
pub mod war_context;

pub use anyhow;

/// Commonly used types and functions for quick access.
///
/// ```rust
/// use war_planner::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assignment_strategy::*;
    pub use crate::configuration::Configuration;
    pub use crate::hit_probability::hit_probability;
    pub use crate::mismatch::{detect_mismatch, Mismatch};
    pub use crate::planner::{get_recommendations, WarPlan, WarPlanner};
    pub use crate::recommendation::{Rationale, Recommendation};
    pub use crate::roster::{Attacker, Target};
    pub use crate::war_context::{EventContext, WarFormat};
}
