//! Ordering metrics. Neither value feeds the probability math.

use crate::roster::{Attacker, Target};

/// Level plus skill as a fraction, so skill only breaks ties between equal levels.
pub fn offensive_weight(attacker: &Attacker) -> f64 {
    attacker.level as f64 + attacker.skill() / 100.0
}

/// Level plus a bonus in `[0, 1)` that grows toward the top of the target list.
pub fn target_difficulty(target: &Target, total_targets: usize) -> f64 {
    let total = total_targets.max(1) as f64;
    target.level as f64 + (1.0 - target.rank as f64 / total)
}
