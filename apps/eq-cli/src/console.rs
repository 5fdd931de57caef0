// console.rs — Renders engine events as console messages during `eq play`.

use eq_goal::{GoalError, NotificationSink, QuestEvent};

/// Prints a message for each scoring event.
pub struct ConsoleSink;

impl ConsoleSink {
    /// The message shown for an event, if any.
    pub fn message(event: &QuestEvent) -> Option<String> {
        match event {
            QuestEvent::EventRecorded { name, points, .. } => {
                Some(format!("Recorded '{}'. You earned {} points.", name, points))
            }
            QuestEvent::GoalCompleted {
                name, kind, bonus, ..
            } => {
                if kind == "checklist" {
                    Some(format!(
                        "Checklist complete! You earned a bonus of {} points.",
                        bonus
                    ))
                } else {
                    Some(format!("Goal '{}' completed!", name))
                }
            }
            QuestEvent::AlreadyComplete { name, .. } => {
                Some(format!("Goal '{}' is already complete.", name))
            }
            // Creation is silent; save/load print their acknowledgment directly.
            QuestEvent::GoalCreated { .. }
            | QuestEvent::GoalsSaved { .. }
            | QuestEvent::GoalsLoaded { .. } => None,
        }
    }
}

impl NotificationSink for ConsoleSink {
    fn send(&self, event: &QuestEvent) -> Result<(), GoalError> {
        if let Some(message) = Self::message(event) {
            println!("{}", message);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eq_goal::{EventDispatcher, Goal, GoalManager};
    use std::sync::{Arc, Mutex};

    struct Capture(Arc<Mutex<Vec<String>>>);

    impl NotificationSink for Capture {
        fn send(&self, event: &QuestEvent) -> Result<(), GoalError> {
            if let Some(m) = ConsoleSink::message(event) {
                self.0.lock().unwrap().push(m);
            }
            Ok(())
        }
    }

    fn messages_for(goal: Goal, records: usize) -> Vec<String> {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();
        dispatcher.add_sink(Box::new(Capture(lines.clone())));
        let mut manager = GoalManager::with_dispatcher(dispatcher);
        let idx = manager.create_goal(goal);
        for _ in 0..records {
            manager.record_event(idx).unwrap();
        }
        let out = lines.lock().unwrap().clone();
        out
    }

    #[test]
    fn simple_goal_messages() {
        assert_eq!(
            messages_for(Goal::simple("Read scriptures", 100), 2),
            vec![
                "Recorded 'Read scriptures'. You earned 100 points.",
                "Goal 'Read scriptures' completed!",
                "Goal 'Read scriptures' is already complete.",
            ]
        );
    }

    #[test]
    fn checklist_bonus_message() {
        assert_eq!(
            messages_for(Goal::checklist("Attend temple", 50, 1, 500), 1),
            vec![
                "Recorded 'Attend temple'. You earned 50 points.",
                "Checklist complete! You earned a bonus of 500 points.",
            ]
        );
    }

    #[test]
    fn eternal_goal_only_reports_points() {
        assert_eq!(
            messages_for(Goal::eternal("Pray daily", 25), 1),
            vec!["Recorded 'Pray daily'. You earned 25 points."]
        );
    }
}
