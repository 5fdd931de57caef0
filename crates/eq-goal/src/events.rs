// events.rs — Event model and notification dispatch.
//
// The manager emits an event at every state change: goal created, event
// recorded, goal completed, save/load acknowledged. The engine never writes
// to the console itself; sinks decide how events are surfaced (a JSONL log
// file here, console messages in the CLI).
//
// Dispatch is synchronous and best-effort. A failing sink is logged and
// skipped, it never fails the operation that emitted the event.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::GoalError;

/// Events emitted by the [`GoalManager`](crate::GoalManager).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum QuestEvent {
    /// A goal was added to the manager.
    GoalCreated {
        goal_id: Uuid,
        index: usize,
        name: String,
        kind: String,
        timestamp: DateTime<Utc>,
    },

    /// An occurrence was recorded and scored.
    EventRecorded {
        goal_id: Uuid,
        name: String,
        points: u32,
        bonus: u32,
        total_score: u64,
        timestamp: DateTime<Utc>,
    },

    /// A goal reached its terminal state. Emitted once per goal.
    GoalCompleted {
        goal_id: Uuid,
        name: String,
        kind: String,
        bonus: u32,
        timestamp: DateTime<Utc>,
    },

    /// An occurrence was recorded against a goal that was already complete.
    AlreadyComplete {
        goal_id: Uuid,
        name: String,
        timestamp: DateTime<Utc>,
    },

    /// Goals were saved (acknowledgment only).
    GoalsSaved {
        goal_count: usize,
        timestamp: DateTime<Utc>,
    },

    /// Goals were loaded (acknowledgment only).
    GoalsLoaded {
        goal_count: usize,
        timestamp: DateTime<Utc>,
    },
}

impl QuestEvent {
    /// Get the event type name as a string.
    pub fn event_type(&self) -> &str {
        match self {
            QuestEvent::GoalCreated { .. } => "goal_created",
            QuestEvent::EventRecorded { .. } => "event_recorded",
            QuestEvent::GoalCompleted { .. } => "goal_completed",
            QuestEvent::AlreadyComplete { .. } => "already_complete",
            QuestEvent::GoalsSaved { .. } => "goals_saved",
            QuestEvent::GoalsLoaded { .. } => "goals_loaded",
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            QuestEvent::GoalCreated { timestamp, .. }
            | QuestEvent::EventRecorded { timestamp, .. }
            | QuestEvent::GoalCompleted { timestamp, .. }
            | QuestEvent::AlreadyComplete { timestamp, .. }
            | QuestEvent::GoalsSaved { timestamp, .. }
            | QuestEvent::GoalsLoaded { timestamp, .. } => *timestamp,
        }
    }

    /// Helper to create a GoalCreated event.
    pub fn goal_created(goal_id: Uuid, index: usize, name: &str, kind: &str) -> Self {
        QuestEvent::GoalCreated {
            goal_id,
            index,
            name: name.to_string(),
            kind: kind.to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Helper to create an EventRecorded event.
    pub fn event_recorded(
        goal_id: Uuid,
        name: &str,
        points: u32,
        bonus: u32,
        total_score: u64,
    ) -> Self {
        QuestEvent::EventRecorded {
            goal_id,
            name: name.to_string(),
            points,
            bonus,
            total_score,
            timestamp: Utc::now(),
        }
    }
}

/// Trait for receiving quest events.
pub trait NotificationSink: Send {
    /// Handle an event. Errors are logged but don't stop the engine.
    fn send(&self, event: &QuestEvent) -> Result<(), GoalError>;
}

/// Logs events as JSONL to a file.
pub struct LogSink {
    path: PathBuf,
}

impl LogSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read every event from a JSONL log, oldest first. Blank lines are skipped.
    pub fn read_all(path: impl AsRef<Path>) -> Result<Vec<QuestEvent>, GoalError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| GoalError::IoError {
            path: path.display().to_string(),
            source,
        })?;

        let mut events = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|source| GoalError::IoError {
                path: path.display().to_string(),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            events.push(serde_json::from_str(&line)?);
        }
        Ok(events)
    }
}

impl NotificationSink for LogSink {
    fn send(&self, event: &QuestEvent) -> Result<(), GoalError> {
        // Ensure parent directory exists.
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| GoalError::IoError {
                path: parent.display().to_string(),
                source,
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| GoalError::IoError {
                path: self.path.display().to_string(),
                source,
            })?;

        let json = serde_json::to_string(event)?;
        writeln!(file, "{}", json).map_err(|source| GoalError::IoError {
            path: self.path.display().to_string(),
            source,
        })?;

        Ok(())
    }
}

/// Dispatches events to multiple sinks.
///
/// Errors from individual sinks are logged (via tracing) but don't
/// prevent other sinks from receiving the event.
pub struct EventDispatcher {
    sinks: Vec<Box<dyn NotificationSink>>,
}

impl EventDispatcher {
    /// Create a new dispatcher with no sinks.
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Add a notification sink.
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Dispatch an event to all sinks.
    pub fn dispatch(&self, event: &QuestEvent) {
        for sink in &self.sinks {
            if let Err(e) = sink.send(event) {
                tracing::warn!(event_type = event.event_type(), "notification sink error: {}", e);
            }
        }
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
