//! Engine output.

use serde::{Deserialize, Serialize};

/// Why an attacker got (or did not get) a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rationale {
    /// Attack allowance spent.
    Done,
    /// Held back: nothing worth hitting right now.
    Reserve,
    /// Near-certain three star.
    Cleanup,
    /// Good matchup.
    Attack,
    /// High-risk hit above the attacker's weight.
    Reach,
    /// League: reliable two star.
    SafeTwoStar,
    /// League: reliable two star on a same-level base.
    PeerHit,
    /// League: lower base, good odds of a full clear.
    DipThreeStar,
    /// League: no safe attacker left for this base.
    BestEffort,
    /// Outmatched: scout or two-star a top base.
    ScoutMismatch,
}

impl std::fmt::Display for Rationale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Rationale::Done => "DONE",
            Rationale::Reserve => "HOLD for cleanup",
            Rationale::Cleanup => "CLEANUP (guaranteed 3 stars)",
            Rationale::Attack => "ATTACK (good match)",
            Rationale::Reach => "REACH (high risk)",
            Rationale::SafeTwoStar => "SAFE 2 STARS",
            Rationale::PeerHit => "PEER HIT (safe 2 stars)",
            Rationale::DipThreeStar => "DIP (go for 3 stars)",
            Rationale::BestEffort => "BEST EFFORT",
            Rationale::ScoutMismatch => "SCOUT / 2 STARS (mismatch)",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub attacker_id: String,
    pub target_id: Option<String>,
    pub rationale: Rationale,
    /// Percentage in `0..=100`.
    pub confidence: u8,
}

impl Recommendation {
    pub fn assigned(
        attacker_id: impl Into<String>,
        target_id: impl Into<String>,
        rationale: Rationale,
        confidence: u8,
    ) -> Self {
        Self {
            attacker_id: attacker_id.into(),
            target_id: Some(target_id.into()),
            rationale,
            confidence: confidence.min(100),
        }
    }

    pub fn done(attacker_id: impl Into<String>) -> Self {
        Self::idle(attacker_id, Rationale::Done)
    }

    pub fn reserve(attacker_id: impl Into<String>) -> Self {
        Self::idle(attacker_id, Rationale::Reserve)
    }

    fn idle(attacker_id: impl Into<String>, rationale: Rationale) -> Self {
        Self {
            attacker_id: attacker_id.into(),
            target_id: None,
            rationale,
            confidence: 0,
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.target_id {
            Some(target) => write!(
                f,
                "{} -> {}: {} ({}%)",
                self.attacker_id, target, self.rationale, self.confidence
            ),
            None => write!(f, "{}: {}", self.attacker_id, self.rationale),
        }
    }
}
