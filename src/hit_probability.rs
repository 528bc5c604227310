//! Probability that an attacker fully destroys a target.
//!
//! The estimate is built in a fixed order: a base value from the level differential, a
//! correction from the two positional ranks, a correction from the attacker's history, and only
//! then the floor and ceiling. Skill can lift a bad matchup but never below the floor, and no
//! matchup is ever rated above [`MAX_PROBABILITY`].

use crate::roster::{Attacker, Target};

/// Full certainty is never modeled.
pub const MAX_PROBABILITY: f64 = 0.95;

const FLOOR_EVEN_OR_BETTER: f64 = 0.20;
const FLOOR_REACH: f64 = 0.05;

const RANK_PENALTY_PER_STEP: f64 = 0.05;
const RANK_BONUS_PER_STEP: f64 = 0.02;
const RANK_BONUS_CAP: f64 = 0.20;

const SKILL_BASELINE: f64 = 0.30;
const SKILL_MIN_ADJUST: f64 = -0.25;
const SKILL_MAX_ADJUST: f64 = 0.40;

fn level_delta(attacker: &Attacker, target: &Target) -> i64 {
    attacker.level as i64 - target.level as i64
}

/// Base probability from the level differential alone.
pub fn base_probability(delta_level: i64) -> f64 {
    match delta_level {
        d if d >= 2 => 0.99,
        1 => 0.90,
        0 => 0.40,
        -1 => 0.10,
        _ => 0.01,
    }
}

fn rank_adjustment(attacker: &Attacker, target: &Target) -> f64 {
    let rank_diff = target.rank as i64 - attacker.positional_rank() as i64;
    if rank_diff < 0 {
        -(rank_diff.unsigned_abs() as f64) * RANK_PENALTY_PER_STEP
    } else if rank_diff > 0 {
        (rank_diff as f64 * RANK_BONUS_PER_STEP).min(RANK_BONUS_CAP)
    } else {
        0.0
    }
}

fn skill_adjustment(attacker: &Attacker) -> f64 {
    (attacker.success() - SKILL_BASELINE).clamp(SKILL_MIN_ADJUST, SKILL_MAX_ADJUST)
}

/// Lowest value [`hit_probability`] may return for this pairing.
pub fn probability_floor(attacker: &Attacker, target: &Target) -> f64 {
    if level_delta(attacker, target) >= 0 {
        FLOOR_EVEN_OR_BETTER
    } else {
        FLOOR_REACH
    }
}

/// Base plus rank and skill corrections, before the floor and ceiling.
pub fn raw_probability(attacker: &Attacker, target: &Target) -> f64 {
    base_probability(level_delta(attacker, target))
        + rank_adjustment(attacker, target)
        + skill_adjustment(attacker)
}

/// Estimated probability of a three-star hit, in `[floor, 0.95]`.
///
/// Uses the attacker's positional rank; an unranked attacker counts as ranked last.
pub fn hit_probability(attacker: &Attacker, target: &Target) -> f64 {
    let raw = raw_probability(attacker, target);
    let floor = probability_floor(attacker, target);
    // `max` first: a NaN raw value collapses onto the floor
    raw.max(floor).min(MAX_PROBABILITY)
}

/// Percentage shown to players.
pub fn confidence(probability: f64) -> u8 {
    (probability * 100.0).round().clamp(0.0, 100.0) as u8
}
