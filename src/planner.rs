//! Entry point of the engine.
//!
//! This module defines the [`WarPlanner`] type, which turns a roster snapshot into a war plan.
//! Its responsibilities include:
//!
//! - Ranking the home roster by `(level, skill score)`
//! - Reporting the advisory [`Mismatch`] signal
//! - Choosing the [`AssignmentStrategy`] matching the declared [`WarFormat`]
//! - Returning exactly one [`Recommendation`] per home attacker
//!
//! # Behavior
//!
//! Planning never fails. An empty away list leaves every attacker in reserve (or done), an empty
//! home roster gives an empty plan, and missing optional fields use the defaults documented in
//! [`roster`](crate::roster). Nothing is kept between calls: a planner can be shared freely and
//! called from several threads at once.

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::assignment_strategy::{strategy_for, AssignmentStrategy};
use crate::configuration::Configuration;
use crate::mismatch::{detect_mismatch, Mismatch};
use crate::recommendation::{Rationale, Recommendation};
use crate::roster::{assign_positional_ranks, Attacker, Target};
use crate::war_context::{EventContext, WarFormat};

/// Result of one planning call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarPlan {
    pub format: WarFormat,
    pub secure_win: bool,
    pub mismatch: Mismatch,
    pub recommendations: Vec<Recommendation>,
}

impl WarPlan {
    /// Recommendation for one attacker, if it is on the home roster.
    pub fn for_attacker(&self, attacker_id: &str) -> Option<&Recommendation> {
        self.recommendations
            .iter()
            .find(|r| r.attacker_id == attacker_id)
    }

    /// Attackers that still have a target to hit.
    pub fn assigned(&self) -> impl Iterator<Item = &Recommendation> {
        self.recommendations.iter().filter(|r| r.target_id.is_some())
    }

    pub fn count(&self, rationale: Rationale) -> usize {
        self.recommendations
            .iter()
            .filter(|r| r.rationale == rationale)
            .count()
    }
}

/// Builds war plans with a fixed [`Configuration`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WarPlanner {
    config: Configuration,
}

impl WarPlanner {
    pub fn new(config: Configuration) -> WarPlanner {
        WarPlanner { config }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Strategy used for `format` with this planner's configuration.
    pub fn strategy(&self, format: WarFormat) -> Box<dyn AssignmentStrategy + Send + Sync> {
        strategy_for(
            format,
            self.config.secure_win_hours,
            self.config.mismatch_protocol,
            self.config.top_tier_level,
        )
    }

    /// Plan the war. A missing context means a standard war with 24 hours left.
    #[instrument(skip_all, fields(home = home.len(), away = away.len()))]
    pub fn plan(
        &self,
        home: &[Attacker],
        away: &[Target],
        context: Option<EventContext>,
    ) -> WarPlan {
        let context = context.unwrap_or_default();

        let mut home = home.to_vec();
        assign_positional_ranks(&mut home);

        let mismatch = detect_mismatch(&home, away, self.config.top_tier_level);
        if mismatch.is_mismatch {
            info!(
                "away side has {} more top-tier bases (level {}+)",
                mismatch.magnitude, self.config.top_tier_level
            );
        }

        let secure_win = context.format == WarFormat::Standard
            && context.is_secure_win(self.config.secure_win_hours);
        debug!(?context, secure_win);

        let recommendations = self.strategy(context.format).assign(&home, away, &context);

        let plan = WarPlan {
            format: context.format,
            secure_win,
            mismatch,
            recommendations,
        };
        info!(
            "{} war: {} assigned, {} reserve, {} done",
            plan.format,
            plan.assigned().count(),
            plan.count(Rationale::Reserve),
            plan.count(Rationale::Done)
        );
        plan
    }

    /// Recommendations only, see [`plan`](Self::plan).
    pub fn recommend(
        &self,
        home: &[Attacker],
        away: &[Target],
        context: Option<EventContext>,
    ) -> Vec<Recommendation> {
        self.plan(home, away, context).recommendations
    }
}

/// Recommendations with the default [`Configuration`].
pub fn get_recommendations(
    home: &[Attacker],
    away: &[Target],
    context: Option<EventContext>,
) -> Vec<Recommendation> {
    WarPlanner::default().recommend(home, away, context)
}
