//! JSON war snapshots, as handed over by whatever tracks the war.
//!
//! ```json
//! {
//!   "home": [{ "id": "#P1", "level": 15, "skill_score": 82.5, "success_rate": 0.6, "attacks_used": 1 }],
//!   "away": [{ "id": "#E1", "level": 15, "rank": 1, "stars_earned": 2, "destruction_pct": 74.0 }],
//!   "context": { "hours_left": 3.5, "format": "Standard" }
//! }
//! ```
//!
//! Only `id` and `level` are required per entry; `context` may be omitted entirely.

use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::roster::{Attacker, Target};
use crate::war_context::EventContext;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub home: Vec<Attacker>,
    #[serde(default)]
    pub away: Vec<Target>,
    #[serde(default)]
    pub context: Option<EventContext>,
}

impl Snapshot {
    pub fn from_json(raw: &str) -> anyhow::Result<Snapshot> {
        serde_json::from_str(raw).context("invalid war snapshot")
    }
}

pub fn load_snapshot(path: impl AsRef<Path>) -> anyhow::Result<Snapshot> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read snapshot '{}'", path.display()))?;
    Snapshot::from_json(&raw).with_context(|| format!("in '{}'", path.display()))
}
