//! # eq-goal
//!
//! Goal tracking and scoring engine for Eternal Quest.
//!
//! A [`Goal`] is one trackable objective. Its [`GoalKind`] decides how a
//! recorded occurrence is scored:
//!
//! - `Simple` — completed once, awards its points on the first record only
//! - `Eternal` — never completes, awards its points on every record
//! - `Checklist` — completes after a target count, with a one-time bonus
//!
//! ## Key components
//!
//! - [`Goal`] / [`GoalKind`] — goal data and per-kind scoring rules
//! - [`GoalManager`] — owns the ordered goal list and the running score
//! - [`QuestEvent`] — events emitted whenever the manager changes state
//! - [`EventDispatcher`] — dispatches events to notification sinks
//! - [`NotificationSink`] — trait for receiving events (JSONL log, console, etc.)
//! - [`QuestConfig`] — `.quest/` layout and settings for a project
//!
//! ## Quick Example
//!
//! ```rust
//! use eq_goal::{Goal, GoalManager};
//!
//! let mut manager = GoalManager::new();
//! let idx = manager.create_goal(Goal::checklist("Attend temple", 50, 2, 500));
//! manager.record_event(idx).unwrap();
//! manager.record_event(idx).unwrap();
//! assert_eq!(manager.score(), 600);
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod goal;
pub mod manager;

pub use config::{DisplaySettings, EventSettings, QuestConfig, QuestSettings};
pub use error::GoalError;
pub use events::{EventDispatcher, LogSink, NotificationSink, QuestEvent};
pub use goal::{Award, Goal, GoalKind};
pub use manager::{GoalManager, PersistenceAck, PersistenceOp};
