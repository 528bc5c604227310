//! Assignment strategies used by the planner to pair attackers with targets.
//!
//! This module defines the [`AssignmentStrategy`] trait and the two built-in formats:
//! - [`StandardStrategy`]: several attacks per participant. Each attacker, strongest first, picks
//!   the unclaimed target with the best expected star gain.
//! - [`LeagueStrategy`]: one attack per participant. Each target, hardest first, gets the weakest
//!   attacker that can still secure two stars on it.
//!
//! Both strategies are greedy and deterministic: identical inputs always give identical output.
//! A target is claimed by at most one recommendation per call, and every attacker of the home
//! roster gets exactly one recommendation. The claimed set lives on the stack of a single
//! [`assign`](AssignmentStrategy::assign) call, so strategies can be shared between threads.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::configuration::DEFAULT_SECURE_WIN_HOURS;
use crate::hit_probability::{confidence, hit_probability};
use crate::metrics::{offensive_weight, target_difficulty};
use crate::mismatch::detect_mismatch;
use crate::recommendation::{Rationale, Recommendation};
use crate::roster::{assign_positional_ranks, Attacker, Target};
use crate::war_context::{EventContext, WarFormat};

/// A way of turning rosters into recommendations for one war format.
pub trait AssignmentStrategy {
    /// Attacks each participant may spend in this format.
    ///
    /// Attackers at or above this count always get [`Rationale::Done`].
    fn attack_limit(&self) -> u32;

    /// Produce one recommendation per home attacker, ordered by descending offensive weight.
    ///
    /// Attackers without a positional rank are ranked on a local copy first.
    fn assign(
        &self,
        home: &[Attacker],
        away: &[Target],
        context: &EventContext,
    ) -> Vec<Recommendation>;
}

/// Copy of the roster with every attacker ranked.
fn ranked_roster(home: &[Attacker]) -> Vec<Attacker> {
    let mut home = home.to_vec();
    if home.iter().any(|a| a.rank.is_none()) {
        assign_positional_ranks(&mut home);
    }
    home
}

/// Indices of `home`, strongest attacker first. Ties keep roster order.
fn by_offensive_weight(home: &[Attacker]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..home.len()).collect();
    order.sort_by(|&a, &b| offensive_weight(&home[b]).total_cmp(&offensive_weight(&home[a])));
    order
}

/// Targets, hardest first. Ties keep list order.
fn by_difficulty(away: &[Target]) -> Vec<&Target> {
    let total = away.len();
    let mut targets: Vec<&Target> = away.iter().collect();
    targets.sort_by(|a, b| target_difficulty(b, total).total_cmp(&target_difficulty(a, total)));
    targets
}

// ---------------------------------------------------------------------------------------------
// Standard format
// ---------------------------------------------------------------------------------------------

/// Expected value multiplier for a target already sitting at one star.
const CLEANUP_BONUS: f64 = 1.5;
/// Late in the war, risking a third star on a two-star base is rarely worth it.
const SECURE_WIN_TWO_STAR_FACTOR: f64 = 0.2;
const SECURE_WIN_SURE_HIT_FACTOR: f64 = 2.0;
const SURE_HIT: f64 = 0.9;
const GOOD_MATCH: f64 = 0.5;
/// Penalty per level of overkill beyond a one-level dip.
const OVERKILL_PENALTY: f64 = 0.2;
const SCOUT_CONFIDENCE: u8 = 85;

/// Greedy per-attacker assignment for the multi-attack format.
#[derive(Debug, Clone, Copy)]
pub struct StandardStrategy {
    secure_win_hours: f64,
    scout_top_tier_level: Option<u32>,
}

struct Candidate<'a> {
    target: &'a Target,
    probability: f64,
    score: f64,
}

impl StandardStrategy {
    /// Standard strategy with the default secure-win threshold and no scout protocol.
    pub fn new() -> Self {
        Self {
            secure_win_hours: DEFAULT_SECURE_WIN_HOURS,
            scout_top_tier_level: None,
        }
    }

    /// Remaining hours at or under which secure-win adjustments apply.
    pub fn with_secure_win_hours(mut self, hours: f64) -> Self {
        self.secure_win_hours = hours;
        self
    }

    /// Send the bottom of the roster at the top bases when the away side has too many top-tier
    /// bases. `top_tier_level` is the level counted as top tier.
    pub fn with_mismatch_protocol(mut self, top_tier_level: u32) -> Self {
        self.scout_top_tier_level = Some(top_tier_level);
        self
    }

    fn score_target<'a>(
        attacker: &Attacker,
        target: &'a Target,
        secure_win: bool,
    ) -> Candidate<'a> {
        let probability = hit_probability(attacker, target);
        let mut expected = probability * target.stars_to_gain() as f64;
        if target.stars_earned == 1 {
            expected *= CLEANUP_BONUS;
        }
        if secure_win {
            if target.stars_earned == 2 {
                expected *= SECURE_WIN_TWO_STAR_FACTOR;
            }
            if probability > SURE_HIT {
                expected *= SECURE_WIN_SURE_HIT_FACTOR;
            }
        }

        let overkill = (attacker.level as i64 - target.level as i64 - 1).max(0) as f64;
        let mut penalty = overkill * OVERKILL_PENALTY;
        if secure_win {
            penalty *= 0.5;
        }

        Candidate {
            target,
            probability,
            score: expected - penalty,
        }
    }

    fn best_target<'a>(
        attacker: &Attacker,
        targets: &[&'a Target],
        claimed: &HashSet<&str>,
        secure_win: bool,
    ) -> Option<Candidate<'a>> {
        let mut best: Option<Candidate<'a>> = None;
        for &target in targets {
            if target.is_destroyed() || claimed.contains(target.id.as_str()) {
                continue;
            }
            let candidate = Self::score_target(attacker, target, secure_win);
            trace!(
                "{} on {}: p={:.2} score={:.3}",
                attacker.id,
                target.id,
                candidate.probability,
                candidate.score
            );
            // strict comparison: the harder target wins ties
            if best.as_ref().map_or(true, |b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }
        best
    }

    fn rationale(probability: f64, target: &Target, secure_win: bool) -> Rationale {
        if secure_win && !target.is_destroyed() && probability > SURE_HIT {
            return Rationale::Cleanup;
        }
        if probability > SURE_HIT {
            Rationale::Cleanup
        } else if probability > GOOD_MATCH {
            Rationale::Attack
        } else {
            Rationale::Reach
        }
    }

    /// Top bases reserved for scouting, when the matchup is lopsided.
    fn scout_targets<'a>(
        &self,
        home: &[Attacker],
        away: &'a [Target],
    ) -> Option<Vec<&'a Target>> {
        let top_tier_level = self.scout_top_tier_level?;
        let mismatch = detect_mismatch(home, away, top_tier_level);
        if !mismatch.is_mismatch {
            return None;
        }
        debug!(
            "mismatch of {} top-tier bases, bottom of the roster scouts",
            mismatch.magnitude
        );
        let mut by_rank: Vec<&Target> = away.iter().collect();
        by_rank.sort_by_key(|t| t.rank);
        by_rank.truncate(mismatch.magnitude);
        Some(by_rank)
    }

    fn scout<'a>(
        attacker: &Attacker,
        roster_size: usize,
        top_targets: &[&'a Target],
        claimed: &HashSet<&str>,
    ) -> Option<&'a Target> {
        let shift = top_targets.len();
        let is_bottom = attacker.positional_rank() as usize > roster_size.saturating_sub(shift);
        if !is_bottom {
            return None;
        }
        top_targets
            .iter()
            .copied()
            .find(|t| t.stars_earned < 2 && !claimed.contains(t.id.as_str()))
    }
}

impl Default for StandardStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl AssignmentStrategy for StandardStrategy {
    fn attack_limit(&self) -> u32 {
        WarFormat::Standard.attack_limit()
    }

    fn assign(
        &self,
        home: &[Attacker],
        away: &[Target],
        context: &EventContext,
    ) -> Vec<Recommendation> {
        let home = ranked_roster(home);
        let secure_win = context.is_secure_win(self.secure_win_hours);
        let limit = self.attack_limit();
        let targets = by_difficulty(away);
        let scout_targets = self.scout_targets(&home, away);

        let mut claimed: HashSet<&str> = HashSet::new();
        let mut recommendations = Vec::with_capacity(home.len());

        for index in by_offensive_weight(&home) {
            let attacker = &home[index];
            if attacker.attacks_used >= limit {
                recommendations.push(Recommendation::done(&attacker.id));
                continue;
            }

            if let Some(top) = &scout_targets {
                if let Some(target) = Self::scout(attacker, home.len(), top, &claimed) {
                    debug!("{} scouts {}", attacker.id, target.id);
                    claimed.insert(target.id.as_str());
                    recommendations.push(Recommendation::assigned(
                        &attacker.id,
                        &target.id,
                        Rationale::ScoutMismatch,
                        SCOUT_CONFIDENCE,
                    ));
                    continue;
                }
            }

            match Self::best_target(attacker, &targets, &claimed, secure_win) {
                Some(best) => {
                    let rationale = Self::rationale(best.probability, best.target, secure_win);
                    debug!(
                        "{} -> {} ({rationale:?}, p={:.2})",
                        attacker.id, best.target.id, best.probability
                    );
                    claimed.insert(best.target.id.as_str());
                    recommendations.push(Recommendation::assigned(
                        &attacker.id,
                        &best.target.id,
                        rationale,
                        confidence(best.probability),
                    ));
                }
                None => {
                    debug!("{} held in reserve, no target left", attacker.id);
                    recommendations.push(Recommendation::reserve(&attacker.id));
                }
            }
        }

        recommendations
    }
}

// ---------------------------------------------------------------------------------------------
// League format
// ---------------------------------------------------------------------------------------------

/// Proxy above which an attacker counts as a safe two star.
const SAFE_TWO_STAR: f64 = 0.85;
const PROXY_BASE: f64 = 0.90;
const PROXY_PENALTY_PER_LEVEL: f64 = 0.10;
const PROXY_LOW_SKILL_PENALTY: f64 = 0.20;
const PROXY_SKILL_THRESHOLD: f64 = 70.0;

/// Greedy per-target assignment for the single-attack format.
///
/// Favors a guaranteed two stars over a possible three: hard targets are visited first and take
/// the weakest attacker that is still safe, keeping strong attackers for later targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeagueStrategy;

impl LeagueStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Rough probability of at least two stars, used only to pick attackers.
    pub fn two_star_proxy(attacker: &Attacker, target: &Target) -> f64 {
        let mut proxy = PROXY_BASE;
        let level_gap = target.level as i64 - attacker.level as i64;
        if level_gap > 0 {
            proxy -= PROXY_PENALTY_PER_LEVEL * level_gap as f64;
        }
        if attacker.skill() < PROXY_SKILL_THRESHOLD {
            proxy -= PROXY_LOW_SKILL_PENALTY;
        }
        proxy
    }

    fn rationale(attacker: &Attacker, target: &Target, proxy: f64) -> Rationale {
        if proxy <= SAFE_TWO_STAR {
            Rationale::BestEffort
        } else if attacker.level == target.level {
            Rationale::PeerHit
        } else if attacker.level > target.level {
            Rationale::DipThreeStar
        } else {
            Rationale::SafeTwoStar
        }
    }
}

impl AssignmentStrategy for LeagueStrategy {
    fn attack_limit(&self) -> u32 {
        WarFormat::League.attack_limit()
    }

    fn assign(
        &self,
        home: &[Attacker],
        away: &[Target],
        _context: &EventContext,
    ) -> Vec<Recommendation> {
        let home = ranked_roster(home);
        let limit = self.attack_limit();
        let order = by_offensive_weight(&home);

        // pool of fresh attackers, strongest first
        let mut pool: Vec<usize> = order
            .iter()
            .copied()
            .filter(|&i| home[i].attacks_used == 0)
            .collect();
        let mut assigned: Vec<Option<(&Target, Rationale)>> = vec![None; home.len()];
        let mut claimed: HashSet<&str> = HashSet::new();

        for target in by_difficulty(away) {
            if pool.is_empty() {
                break;
            }
            if target.is_destroyed() || claimed.contains(target.id.as_str()) {
                continue;
            }

            let chosen = pool
                .iter()
                .enumerate()
                .map(|(slot, &i)| (slot, i, Self::two_star_proxy(&home[i], target)))
                .min_by(|(_, a, pa), (_, b, pb)| {
                    let a_safe = *pa > SAFE_TWO_STAR;
                    let b_safe = *pb > SAFE_TWO_STAR;
                    b_safe.cmp(&a_safe).then_with(|| {
                        offensive_weight(&home[*a]).total_cmp(&offensive_weight(&home[*b]))
                    })
                });

            if let Some((slot, index, proxy)) = chosen {
                let attacker = &home[index];
                let rationale = Self::rationale(attacker, target, proxy);
                trace!("{} on {}: proxy={proxy:.2}", attacker.id, target.id);
                debug!("{} -> {} ({rationale:?})", attacker.id, target.id);
                pool.remove(slot);
                claimed.insert(target.id.as_str());
                assigned[index] = Some((target, rationale));
            }
        }

        order
            .into_iter()
            .map(|i| {
                let attacker = &home[i];
                if attacker.attacks_used >= limit {
                    return Recommendation::done(&attacker.id);
                }
                match assigned[i] {
                    // displayed confidence comes from the full model, not the proxy
                    Some((target, rationale)) => Recommendation::assigned(
                        &attacker.id,
                        &target.id,
                        rationale,
                        confidence(hit_probability(attacker, target)),
                    ),
                    None => Recommendation::reserve(&attacker.id),
                }
            })
            .collect()
    }
}

/// Strategy for a war format, with the planner's tunables applied.
pub fn strategy_for(
    format: WarFormat,
    secure_win_hours: f64,
    mismatch_protocol: bool,
    top_tier_level: u32,
) -> Box<dyn AssignmentStrategy + Send + Sync> {
    match format {
        WarFormat::League => Box::new(LeagueStrategy::new()),
        WarFormat::Standard => {
            let strategy = StandardStrategy::new().with_secure_win_hours(secure_win_hours);
            if mismatch_protocol {
                Box::new(strategy.with_mismatch_protocol(top_tier_level))
            } else {
                Box::new(strategy)
            }
        }
    }
}
