// manager.rs — GoalManager: the ordered goal list and the running score.
//
// Goals are addressed by zero-based insertion index. Recording an event
// asks the goal what the occurrence was worth and adds exactly that to the
// score, so the manager never needs to know which kind of goal it holds.
// The bounds check happens before anything is mutated: a failed record
// leaves every goal and the score untouched.

use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::GoalError;
use crate::events::{EventDispatcher, QuestEvent};
use crate::goal::Goal;

/// Which persistence operation was acknowledged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PersistenceOp {
    Save,
    Load,
}

/// Acknowledgment returned by [`GoalManager::save_goals`] and [`GoalManager::load_goals`].
///
/// Save and load are placeholders: they acknowledge the request and report
/// how many goals are tracked, but nothing is written to or read from disk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersistenceAck {
    pub op: PersistenceOp,
    pub goal_count: usize,
}

impl fmt::Display for PersistenceAck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            PersistenceOp::Save => write!(f, "Goals saved."),
            PersistenceOp::Load => write!(f, "Goals loaded."),
        }
    }
}

/// Owns every goal for a session plus the accumulated score.
#[derive(Default)]
pub struct GoalManager {
    goals: Vec<Goal>,
    score: u64,
    dispatcher: EventDispatcher,
}

impl GoalManager {
    /// Create an empty manager with no event sinks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty manager that reports events to `dispatcher`.
    pub fn with_dispatcher(dispatcher: EventDispatcher) -> Self {
        Self {
            goals: Vec::new(),
            score: 0,
            dispatcher,
        }
    }

    /// Append a goal. Returns its zero-based index.
    pub fn create_goal(&mut self, goal: Goal) -> usize {
        let index = self.goals.len();
        tracing::info!(
            index,
            goal_id = %goal.goal_id(),
            kind = goal.kind().kind_name(),
            "goal created: {}",
            goal.name()
        );
        self.dispatcher.dispatch(&QuestEvent::goal_created(
            goal.goal_id(),
            index,
            goal.name(),
            goal.kind().kind_name(),
        ));
        self.goals.push(goal);
        index
    }

    /// Record one occurrence of the goal at `index` and add its award to the score.
    ///
    /// Returns the points added (0 if the goal was already complete).
    pub fn record_event(&mut self, index: usize) -> Result<u32, GoalError> {
        let len = self.goals.len();
        let goal = match self.goals.get_mut(index) {
            Some(goal) => goal,
            None => {
                tracing::warn!(index, len, "record_event: goal index out of range");
                return Err(GoalError::OutOfRange { index, len });
            }
        };

        let was_complete = goal.is_complete();
        goal.record_event();
        let award = goal.last_award();
        self.score += u64::from(award.total());

        tracing::info!(
            index,
            goal_id = %goal.goal_id(),
            points = award.base,
            bonus = award.bonus,
            score = self.score,
            "event recorded: {}",
            goal.name()
        );

        if was_complete {
            self.dispatcher.dispatch(&QuestEvent::AlreadyComplete {
                goal_id: goal.goal_id(),
                name: goal.name().to_string(),
                timestamp: Utc::now(),
            });
            return Ok(award.total());
        }

        self.dispatcher.dispatch(&QuestEvent::event_recorded(
            goal.goal_id(),
            goal.name(),
            award.base,
            award.bonus,
            self.score,
        ));
        if goal.is_complete() {
            self.dispatcher.dispatch(&QuestEvent::GoalCompleted {
                goal_id: goal.goal_id(),
                name: goal.name().to_string(),
                kind: goal.kind().kind_name().to_string(),
                bonus: award.bonus,
                timestamp: Utc::now(),
            });
        }

        Ok(award.total())
    }

    /// One line per goal in insertion order: `"<n>. <details>"`, numbered from 1.
    pub fn display_goals(&self) -> Vec<String> {
        self.goals
            .iter()
            .enumerate()
            .map(|(i, goal)| format!("{}. {}", i + 1, goal.details()))
            .collect()
    }

    pub fn display_score(&self) -> String {
        format!("Total Score: {}", self.score)
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn get(&self, index: usize) -> Option<&Goal> {
        self.goals.get(index)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Acknowledge a save request. Nothing is written; goals live only for the session.
    pub fn save_goals(&self) -> PersistenceAck {
        tracing::info!(goals = self.goals.len(), "save requested (not persisted)");
        self.dispatcher.dispatch(&QuestEvent::GoalsSaved {
            goal_count: self.goals.len(),
            timestamp: Utc::now(),
        });
        PersistenceAck {
            op: PersistenceOp::Save,
            goal_count: self.goals.len(),
        }
    }

    /// Acknowledge a load request. Nothing is read; the current goals are kept as they are.
    pub fn load_goals(&mut self) -> PersistenceAck {
        tracing::info!(goals = self.goals.len(), "load requested (not persisted)");
        self.dispatcher.dispatch(&QuestEvent::GoalsLoaded {
            goal_count: self.goals.len(),
            timestamp: Utc::now(),
        });
        PersistenceAck {
            op: PersistenceOp::Load,
            goal_count: self.goals.len(),
        }
    }
}
