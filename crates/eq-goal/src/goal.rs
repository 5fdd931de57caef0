// goal.rs — Goal: one trackable objective and its scoring rules.
//
// Every goal shares the same data (name, points per event, last award) and
// differs only in how a recorded occurrence changes its state:
//   Simple    — one-shot: the first record completes it, later records award 0
//   Eternal   — never completes: every record awards the base points
//   Checklist — counts up to a target: the record that reaches the target
//               also awards the bonus, later records award 0
//
// The goal itself computes what an occurrence is worth, so the manager can
// score any kind of goal without knowing which kind it is.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind-specific state of a goal.
///
/// The `#[serde(tag = "type")]` attribute serializes this as
/// `{"type": "checklist", "target_count": 10, ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GoalKind {
    /// Completed by a single occurrence. Never reverts once completed.
    Simple { completed: bool },

    /// Repeatable without limit. Never complete.
    Eternal,

    /// Completed after `target_count` occurrences; the final one earns `bonus`.
    Checklist {
        target_count: u32,
        current_count: u32,
        bonus: u32,
    },
}

impl GoalKind {
    /// Stable snake_case name of the kind, matching the serialized tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            GoalKind::Simple { .. } => "simple",
            GoalKind::Eternal => "eternal",
            GoalKind::Checklist { .. } => "checklist",
        }
    }
}

/// Points earned by a single recorded occurrence.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Award {
    /// The goal's per-event points (0 if the occurrence made no progress).
    pub base: u32,
    /// Completion bonus, non-zero only on the occurrence that finished a checklist.
    pub bonus: u32,
}

impl Award {
    /// An occurrence that made no progress.
    pub const NONE: Award = Award { base: 0, bonus: 0 };

    fn base(points: u32) -> Self {
        Award {
            base: points,
            bonus: 0,
        }
    }

    /// Total points to add to the score.
    pub fn total(&self) -> u32 {
        self.base + self.bonus
    }
}

/// A goal tracked by the [`GoalManager`](crate::GoalManager).
///
/// Goals are created fully initialized and only change through
/// [`Goal::record_event`]. Inputs are assumed to be validated by the caller
/// (non-empty name, positive checklist target).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    goal_id: Uuid,
    name: String,
    points_per_event: u32,
    kind: GoalKind,
    #[serde(default)]
    last_award: Award,
}

impl Goal {
    fn new(name: impl Into<String>, points_per_event: u32, kind: GoalKind) -> Self {
        Self {
            goal_id: Uuid::new_v4(),
            name: name.into(),
            points_per_event,
            kind,
            last_award: Award::NONE,
        }
    }

    /// A one-shot goal.
    pub fn simple(name: impl Into<String>, points_per_event: u32) -> Self {
        Self::new(name, points_per_event, GoalKind::Simple { completed: false })
    }

    /// A goal that can be recorded forever.
    pub fn eternal(name: impl Into<String>, points_per_event: u32) -> Self {
        Self::new(name, points_per_event, GoalKind::Eternal)
    }

    /// A goal completed after `target_count` occurrences, paying `bonus` once on completion.
    pub fn checklist(
        name: impl Into<String>,
        points_per_event: u32,
        target_count: u32,
        bonus: u32,
    ) -> Self {
        Self::new(
            name,
            points_per_event,
            GoalKind::Checklist {
                target_count,
                current_count: 0,
                bonus,
            },
        )
    }

    pub fn goal_id(&self) -> Uuid {
        self.goal_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points_per_event(&self) -> u32 {
        self.points_per_event
    }

    pub fn kind(&self) -> &GoalKind {
        &self.kind
    }

    /// Record one occurrence of this goal.
    ///
    /// Recording against a completed goal is a no-op that awards 0 points.
    /// The resulting award is available from [`Goal::last_award`].
    pub fn record_event(&mut self) {
        self.last_award = match &mut self.kind {
            GoalKind::Simple { completed } => {
                if *completed {
                    Award::NONE
                } else {
                    *completed = true;
                    Award::base(self.points_per_event)
                }
            }
            GoalKind::Eternal => Award::base(self.points_per_event),
            GoalKind::Checklist {
                target_count,
                current_count,
                bonus,
            } => {
                if *current_count >= *target_count {
                    Award::NONE
                } else {
                    *current_count += 1;
                    Award {
                        base: self.points_per_event,
                        bonus: if *current_count == *target_count {
                            *bonus
                        } else {
                            0
                        },
                    }
                }
            }
        };
    }

    /// Whether the goal has reached its terminal state. Always false for eternal goals.
    pub fn is_complete(&self) -> bool {
        match &self.kind {
            GoalKind::Simple { completed } => *completed,
            GoalKind::Eternal => false,
            GoalKind::Checklist {
                target_count,
                current_count,
                ..
            } => current_count >= target_count,
        }
    }

    /// Award produced by the most recent [`Goal::record_event`] call.
    pub fn last_award(&self) -> Award {
        self.last_award
    }

    /// Points (including any bonus) earned by the most recent occurrence.
    pub fn points_awarded_by_last_event(&self) -> u32 {
        self.last_award.total()
    }

    /// Bonus earned by the most recent occurrence.
    pub fn bonus_awarded_by_last_event(&self) -> u32 {
        self.last_award.bonus
    }

    /// Single-line status, e.g. `[ ] Attend temple - Completed 3/10 times, 50 points each, 500 bonus points`.
    pub fn details(&self) -> String {
        let marker = if self.is_complete() { "[X]" } else { "[ ]" };
        match &self.kind {
            GoalKind::Simple { .. } => {
                format!("{} {} - {} points", marker, self.name, self.points_per_event)
            }
            GoalKind::Eternal => {
                format!("[∞] {} - {} points per entry", self.name, self.points_per_event)
            }
            GoalKind::Checklist {
                target_count,
                current_count,
                bonus,
            } => {
                if self.is_complete() {
                    format!(
                        "{} {} - Completed {}/{} times",
                        marker, self.name, current_count, target_count
                    )
                } else {
                    format!(
                        "{} {} - Completed {}/{} times, {} points each, {} bonus points",
                        marker, self.name, current_count, target_count, self.points_per_event, bonus
                    )
                }
            }
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.details())
    }
}
