//! Home and away roster records.
//!
//! Both sides are plain value types built by the caller from whatever store holds the war state.
//! Optional metrics are kept as `Option` so the engine can substitute its documented defaults
//! instead of rejecting the input:
//!
//! - missing skill score: [`DEFAULT_SKILL_SCORE`]
//! - missing or zero success rate: [`DEFAULT_SUCCESS_RATE`]
//! - missing rank: [`UNRANKED`], which sorts last in every priority order

use serde::{Deserialize, Serialize};

/// Skill score used when the attacker has none on record.
pub const DEFAULT_SKILL_SCORE: f64 = 50.0;

/// Full-destruction success rate used when the attacker has no history.
pub const DEFAULT_SUCCESS_RATE: f64 = 0.30;

/// Rank given to entities that were never ranked.
pub const UNRANKED: u32 = 999;

/// A home-side participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attacker {
    pub id: String,
    pub level: u32,
    #[serde(default)]
    pub skill_score: Option<f64>,
    #[serde(default)]
    pub success_rate: Option<f64>,
    #[serde(default)]
    pub attacks_used: u32,
    /// Positional rank inside the home roster, set by [`assign_positional_ranks`].
    #[serde(skip)]
    pub rank: Option<u32>,
}

impl Attacker {
    pub fn new(id: impl Into<String>, level: u32) -> Attacker {
        Attacker {
            id: id.into(),
            level,
            skill_score: None,
            success_rate: None,
            attacks_used: 0,
            rank: None,
        }
    }

    pub fn with_skill_score(mut self, score: f64) -> Self {
        self.skill_score = Some(score);
        self
    }

    pub fn with_success_rate(mut self, rate: f64) -> Self {
        self.success_rate = Some(rate);
        self
    }

    pub fn with_attacks_used(mut self, used: u32) -> Self {
        self.attacks_used = used;
        self
    }

    pub fn skill(&self) -> f64 {
        self.skill_score.unwrap_or(DEFAULT_SKILL_SCORE)
    }

    /// Zero is treated the same as missing: no recorded attempts yet.
    pub fn success(&self) -> f64 {
        match self.success_rate {
            Some(rate) if rate != 0.0 && !rate.is_nan() => rate,
            _ => DEFAULT_SUCCESS_RATE,
        }
    }

    pub fn positional_rank(&self) -> u32 {
        self.rank.unwrap_or(UNRANKED)
    }
}

/// An opposing base that may be attacked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: String,
    pub level: u32,
    #[serde(default = "unranked")]
    pub rank: u32,
    #[serde(default)]
    pub stars_earned: u8,
    #[serde(default)]
    pub destruction_pct: f64,
}

fn unranked() -> u32 {
    UNRANKED
}

impl Target {
    pub fn new(id: impl Into<String>, level: u32, rank: u32) -> Target {
        Target {
            id: id.into(),
            level,
            rank,
            stars_earned: 0,
            destruction_pct: 0.0,
        }
    }

    pub fn with_stars(mut self, stars: u8) -> Self {
        self.stars_earned = stars;
        self
    }

    pub fn with_destruction(mut self, pct: f64) -> Self {
        self.destruction_pct = pct;
        self
    }

    /// Three stars: nothing left to gain.
    pub fn is_destroyed(&self) -> bool {
        self.stars_earned >= 3
    }

    pub fn stars_to_gain(&self) -> u8 {
        3u8.saturating_sub(self.stars_earned)
    }
}

/// Annotate every attacker with its positional rank.
///
/// Ranks run `1..=N` over the roster sorted descending by `(level, skill score)`. The slice order
/// is left untouched; ties keep their input order.
pub fn assign_positional_ranks(home: &mut [Attacker]) {
    let mut order: Vec<usize> = (0..home.len()).collect();
    order.sort_by(|&a, &b| {
        let (a, b) = (&home[a], &home[b]);
        b.level
            .cmp(&a.level)
            .then_with(|| b.skill().total_cmp(&a.skill()))
    });
    for (position, index) in order.into_iter().enumerate() {
        home[index].rank = Some(position as u32 + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_substituted() {
        let attacker = Attacker::new("a", 14);
        assert_eq!(attacker.skill(), DEFAULT_SKILL_SCORE);
        assert_eq!(attacker.success(), DEFAULT_SUCCESS_RATE);
        assert_eq!(attacker.positional_rank(), UNRANKED);

        let zero = Attacker::new("b", 14).with_success_rate(0.0);
        assert_eq!(zero.success(), DEFAULT_SUCCESS_RATE);

        let known = Attacker::new("c", 14).with_success_rate(0.55);
        assert_eq!(known.success(), 0.55);
    }

    #[test]
    fn ranks_follow_level_then_skill() {
        let mut home = vec![
            Attacker::new("low", 12),
            Attacker::new("top_weak", 15).with_skill_score(40.0),
            Attacker::new("top_strong", 15).with_skill_score(90.0),
            Attacker::new("mid", 13),
        ];
        assign_positional_ranks(&mut home);

        let ranks: Vec<_> = home.iter().map(|a| (a.id.as_str(), a.rank)).collect();
        assert_eq!(
            ranks,
            vec![
                ("low", Some(4)),
                ("top_weak", Some(2)),
                ("top_strong", Some(1)),
                ("mid", Some(3)),
            ]
        );
    }

    #[test]
    fn ranking_an_empty_roster_is_a_no_op() {
        let mut home: Vec<Attacker> = vec![];
        assign_positional_ranks(&mut home);
        assert!(home.is_empty());
    }

    #[test]
    fn target_deserializes_with_defaults() {
        let target: Target = serde_json::from_str(r#"{"id":"x","level":15}"#).unwrap();
        assert_eq!(target.rank, UNRANKED);
        assert_eq!(target.stars_earned, 0);
        assert!(!target.is_destroyed());
        assert_eq!(target.stars_to_gain(), 3);
    }

    #[test]
    fn attacker_rank_is_never_read_from_input() {
        let attacker: Attacker =
            serde_json::from_str(r#"{"id":"a","level":15,"rank":1}"#).unwrap();
        assert_eq!(attacker.rank, None);
        assert_eq!(attacker.attacks_used, 0);
    }

    #[test]
    fn partial_destruction_is_not_a_star() {
        let target = Target::new("x", 15, 1).with_stars(2).with_destruction(99.0);
        assert!(!target.is_destroyed());
        assert_eq!(target.stars_to_gain(), 1);
    }

    #[test]
    fn records_compare_by_every_field() {
        let attacker = Attacker::new("a", 15);
        assert_eq!(attacker, Attacker::new("a", 15));
        assert_ne!(attacker, Attacker::new("a", 14));
        assert_ne!(attacker, Attacker::new("a", 15).with_attacks_used(1));

        let target = Target::new("x", 15, 1);
        assert_ne!(target, Target::new("x", 15, 1).with_stars(1));
        assert_ne!(target, Target::new("x", 15, 1).with_destruction(40.0));
    }
}
