//! Lopsided matchup detection.
//!
//! The result is advisory. The planner reports it with every plan, but assignment only reacts to
//! it when the scout protocol is switched on in the
//! [`Configuration`](crate::configuration::Configuration).

use serde::Serialize;

use crate::roster::{Attacker, Target};

/// Top-tier lead the away side needs before the matchup counts as lopsided.
const MISMATCH_MARGIN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Mismatch {
    pub is_mismatch: bool,
    /// How many more top-tier bases the away side has. Zero when not a mismatch.
    pub magnitude: usize,
}

/// Compare top-tier counts on both sides.
///
/// A participant is top tier when its level is at or above `top_tier_level`. The matchup is a
/// mismatch when the away side has more than two extra top-tier bases.
pub fn detect_mismatch(home: &[Attacker], away: &[Target], top_tier_level: u32) -> Mismatch {
    let home_top = home.iter().filter(|a| a.level >= top_tier_level).count();
    let away_top = away.iter().filter(|t| t.level >= top_tier_level).count();

    if away_top > home_top + MISMATCH_MARGIN {
        Mismatch {
            is_mismatch: true,
            magnitude: away_top - home_top,
        }
    } else {
        Mismatch::default()
    }
}
