// scoring_flow.rs — End-to-end scoring session with a JSONL event log.
//
// Drives one manager through a session mixing all three goal kinds, then
// checks the score, the goal list, and the events written to the log.

use eq_goal::{EventDispatcher, Goal, GoalError, GoalManager, LogSink, QuestConfig, QuestEvent};
use tempfile::TempDir;

#[test]
fn mixed_session_scores_and_logs_events() {
    let project = TempDir::new().unwrap();
    let config = QuestConfig::load(project.path()).unwrap();

    let mut dispatcher = EventDispatcher::new();
    dispatcher.add_sink(Box::new(LogSink::new(&config.events_log)));
    let mut manager = GoalManager::with_dispatcher(dispatcher);

    let read = manager.create_goal(Goal::simple("Read scriptures", 100));
    let temple = manager.create_goal(Goal::checklist("Attend temple", 50, 10, 500));
    let pray = manager.create_goal(Goal::eternal("Pray daily", 25));

    // Simple: one award, then nothing.
    assert_eq!(manager.record_event(read).unwrap(), 100);
    assert_eq!(manager.record_event(read).unwrap(), 0);

    // Checklist: nine plain events, the tenth carries the bonus, the eleventh is empty.
    for _ in 0..9 {
        assert_eq!(manager.record_event(temple).unwrap(), 50);
    }
    assert_eq!(manager.record_event(temple).unwrap(), 550);
    assert_eq!(manager.record_event(temple).unwrap(), 0);

    // Eternal: seven events.
    for _ in 0..7 {
        manager.record_event(pray).unwrap();
    }

    // A bad index changes nothing.
    assert!(matches!(
        manager.record_event(3),
        Err(GoalError::OutOfRange { index: 3, len: 3 })
    ));

    assert_eq!(manager.score(), 100 + 1000 + 175);
    assert_eq!(
        manager.display_goals(),
        vec![
            "1. [X] Read scriptures - 100 points",
            "2. [X] Attend temple - Completed 10/10 times",
            "3. [∞] Pray daily - 25 points per entry",
        ]
    );
    assert_eq!(manager.display_score(), "Total Score: 1275");

    let events = LogSink::read_all(&config.events_log).unwrap();
    let count = |kind: &str| events.iter().filter(|e| e.event_type() == kind).count();
    assert_eq!(count("goal_created"), 3);
    assert_eq!(count("event_recorded"), 1 + 10 + 7);
    assert_eq!(count("goal_completed"), 2);
    assert_eq!(count("already_complete"), 2);

    let bonus_event = events
        .iter()
        .find(|e| matches!(e, QuestEvent::GoalCompleted { kind, .. } if kind == "checklist"))
        .unwrap();
    assert!(matches!(bonus_event, QuestEvent::GoalCompleted { bonus: 500, .. }));

    match events.last().unwrap() {
        QuestEvent::EventRecorded { total_score, .. } => assert_eq!(*total_score, 1275),
        other => panic!("unexpected last event: {:?}", other),
    }
}
