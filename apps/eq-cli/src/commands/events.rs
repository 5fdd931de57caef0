// events.rs — Event log subcommands: tail.

use std::path::PathBuf;

use clap::Subcommand;
use eq_goal::{LogSink, QuestConfig, QuestEvent};

#[derive(Subcommand)]
pub enum EventsCommands {
    /// Show recent engine events.
    Tail {
        /// Path to event log (defaults to .quest/events.jsonl).
        #[arg(long)]
        log: Option<PathBuf>,
        /// Number of events to show.
        #[arg(short, default_value = "10")]
        n: usize,
    },
}

pub fn execute(cmd: &EventsCommands, config: &QuestConfig) -> anyhow::Result<()> {
    match cmd {
        EventsCommands::Tail { log, n } => {
            let path = log.clone().unwrap_or_else(|| config.events_log.clone());

            if !path.exists() {
                println!("No event log found at {}", path.display());
                return Ok(());
            }

            let events = LogSink::read_all(&path)?;
            let start = events.len().saturating_sub(*n);
            let recent = &events[start..];

            if recent.is_empty() {
                println!("No events.");
                return Ok(());
            }

            println!("{:<20} {:<17} DETAIL", "TIMESTAMP", "EVENT");
            println!("{}", "-".repeat(72));

            for event in recent {
                println!(
                    "{:<20} {:<17} {}",
                    event.timestamp().format("%Y-%m-%d %H:%M:%S"),
                    event.event_type(),
                    describe(event),
                );
            }
        }
    }

    Ok(())
}

fn describe(event: &QuestEvent) -> String {
    match event {
        QuestEvent::GoalCreated {
            index, name, kind, ..
        } => format!("#{} {} ({})", index + 1, name, kind),
        QuestEvent::EventRecorded {
            name,
            points,
            bonus,
            total_score,
            ..
        } => {
            if *bonus > 0 {
                format!("{} +{} +{} bonus (score {})", name, points, bonus, total_score)
            } else {
                format!("{} +{} (score {})", name, points, total_score)
            }
        }
        QuestEvent::GoalCompleted { name, .. } => name.clone(),
        QuestEvent::AlreadyComplete { name, .. } => name.clone(),
        QuestEvent::GoalsSaved { goal_count, .. } | QuestEvent::GoalsLoaded { goal_count, .. } => {
            format!("{} goal(s)", goal_count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eq_goal::{EventDispatcher, Goal, GoalManager};
    use tempfile::TempDir;

    #[test]
    fn describe_includes_bonus_only_when_awarded() {
        assert_eq!(describe(&recorded(10, 0, 10)), "Run +10 (score 10)");
        assert_eq!(
            describe(&recorded(10, 30, 60)),
            "Run +10 +30 bonus (score 60)"
        );
    }

    fn recorded(points: u32, bonus: u32, total_score: u64) -> QuestEvent {
        let goal = Goal::eternal("Run", points);
        QuestEvent::event_recorded(goal.goal_id(), "Run", points, bonus, total_score)
    }

    #[test]
    fn tail_reads_session_log() {
        let project = TempDir::new().unwrap();
        let config = QuestConfig::for_project(project.path());

        let mut dispatcher = EventDispatcher::new();
        dispatcher.add_sink(Box::new(LogSink::new(&config.events_log)));
        let mut manager = GoalManager::with_dispatcher(dispatcher);
        manager.create_goal(Goal::simple("Read scriptures", 100));
        manager.record_event(0).unwrap();

        execute(&EventsCommands::Tail { log: None, n: 2 }, &config).unwrap();
        assert_eq!(LogSink::read_all(&config.events_log).unwrap().len(), 3);
    }

    #[test]
    fn tail_without_log_is_not_an_error() {
        let project = TempDir::new().unwrap();
        let config = QuestConfig::for_project(project.path());
        execute(&EventsCommands::Tail { log: None, n: 5 }, &config).unwrap();
    }
}
