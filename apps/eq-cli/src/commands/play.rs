// play.rs — The interactive Eternal Quest menu.

use eq_goal::{
    DisplaySettings, EventDispatcher, Goal, GoalError, GoalManager, LogSink, QuestConfig,
};

use crate::console::ConsoleSink;
use crate::prompt::{read_at_least, read_integer, read_name, LinePrompter, Prompter};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateSimple,
    CreateEternal,
    CreateChecklist,
    RecordEvent,
    ShowGoals,
    ShowScore,
    Save,
    Load,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::CreateSimple),
            "2" => Some(MenuChoice::CreateEternal),
            "3" => Some(MenuChoice::CreateChecklist),
            "4" => Some(MenuChoice::RecordEvent),
            "5" => Some(MenuChoice::ShowGoals),
            "6" => Some(MenuChoice::ShowScore),
            "7" => Some(MenuChoice::Save),
            "8" => Some(MenuChoice::Load),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\
Eternal Quest
1. Create Simple Goal
2. Create Eternal Goal
3. Create Checklist Goal
4. Record Event
5. Show Goals
6. Show Score
7. Save Goals
8. Load Goals
0. Exit";

pub fn execute(config: &QuestConfig) -> anyhow::Result<()> {
    let mut dispatcher = EventDispatcher::new();
    dispatcher.add_sink(Box::new(ConsoleSink));
    if config.settings.events.log_to_file {
        dispatcher.add_sink(Box::new(LogSink::new(&config.events_log)));
    }

    let mut manager = GoalManager::with_dispatcher(dispatcher);
    let mut prompter = LinePrompter::new()?;
    run_menu(&mut manager, &mut prompter, &config.settings.display)
}

/// Run the menu until the user exits or input ends.
pub fn run_menu(
    manager: &mut GoalManager,
    prompter: &mut dyn Prompter,
    display: &DisplaySettings,
) -> anyhow::Result<()> {
    loop {
        println!();
        println!("{}", MENU);
        let Some(line) = prompter.read_line("Enter your choice: ")? else {
            break;
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            println!("Invalid choice. Try again.");
            continue;
        };

        let keep_going = match choice {
            MenuChoice::CreateSimple => create_goal(manager, prompter, choice)?,
            MenuChoice::CreateEternal => create_goal(manager, prompter, choice)?,
            MenuChoice::CreateChecklist => create_goal(manager, prompter, choice)?,
            MenuChoice::RecordEvent => record_event(manager, prompter, display)?,
            MenuChoice::ShowGoals => {
                show_goals(manager);
                true
            }
            MenuChoice::ShowScore => {
                println!("{}", manager.display_score());
                true
            }
            MenuChoice::Save => {
                println!("{}", manager.save_goals());
                true
            }
            MenuChoice::Load => {
                println!("{}", manager.load_goals());
                true
            }
            MenuChoice::Exit => false,
        };
        if !keep_going {
            break;
        }
    }

    tracing::info!(score = manager.score(), goals = manager.len(), "session ended");
    Ok(())
}

/// Collect the inputs for a new goal. Returns `false` if input ended midway.
fn create_goal(
    manager: &mut GoalManager,
    prompter: &mut dyn Prompter,
    choice: MenuChoice,
) -> anyhow::Result<bool> {
    let Some(name) = read_name(prompter, "Enter goal name: ")? else {
        return Ok(false);
    };

    let goal = match choice {
        MenuChoice::CreateSimple | MenuChoice::CreateEternal => {
            let Some(points) = read_at_least(prompter, "Enter points: ", 0)? else {
                return Ok(false);
            };
            if choice == MenuChoice::CreateSimple {
                Goal::simple(name, points)
            } else {
                Goal::eternal(name, points)
            }
        }
        _ => {
            let Some(points) = read_at_least(prompter, "Enter points per completion: ", 0)? else {
                return Ok(false);
            };
            let Some(target) = read_at_least(prompter, "Enter target count: ", 1)? else {
                return Ok(false);
            };
            let Some(bonus) = read_at_least(prompter, "Enter bonus on completion: ", 0)? else {
                return Ok(false);
            };
            Goal::checklist(name, points, target, bonus)
        }
    };

    manager.create_goal(goal);
    Ok(true)
}

/// Ask for a 1-based goal number and record an event against it.
fn record_event(
    manager: &mut GoalManager,
    prompter: &mut dyn Prompter,
    display: &DisplaySettings,
) -> anyhow::Result<bool> {
    let Some(ordinal) = read_integer(prompter, "Enter goal index to record: ")? else {
        return Ok(false);
    };

    // Ordinals below 1 never reach the manager.
    let index = match ordinal.checked_sub(1).map(usize::try_from) {
        Some(Ok(index)) => index,
        _ => {
            println!("Invalid goal index.");
            return Ok(true);
        }
    };

    match manager.record_event(index) {
        Ok(_) => {
            if display.show_score_after_record {
                println!("{}", manager.display_score());
            }
        }
        Err(GoalError::OutOfRange { .. }) => println!("Invalid goal index."),
        Err(e) => return Err(e.into()),
    }
    Ok(true)
}

fn show_goals(manager: &GoalManager) {
    if manager.is_empty() {
        println!("No goals yet.");
        return;
    }
    for line in manager.display_goals() {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;

    fn play(lines: &[&str]) -> (GoalManager, ScriptedPrompter) {
        let mut manager = GoalManager::new();
        let mut prompter = ScriptedPrompter::new(lines);
        run_menu(&mut manager, &mut prompter, &DisplaySettings::default()).unwrap();
        (manager, prompter)
    }

    #[test]
    fn parse_menu_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::CreateSimple));
        assert_eq!(MenuChoice::parse(" 4 "), Some(MenuChoice::RecordEvent));
        assert_eq!(MenuChoice::parse("0"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("9"), None);
        assert_eq!(MenuChoice::parse("quit"), None);
    }

    #[test]
    fn create_and_record_simple_goal() {
        let (manager, prompter) = play(&[
            "1", "Read scriptures", "100", // create
            "4", "1", // record
            "4", "1", // record again
            "0", "leftover",
        ]);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.score(), 100);
        assert!(manager.get(0).unwrap().is_complete());
        // Exit stops reading input.
        assert_eq!(prompter.remaining(), 1);
    }

    #[test]
    fn checklist_goal_through_menu() {
        let mut lines = vec!["3", "Attend temple", "50", "0", "10", "500"];
        for _ in 0..11 {
            lines.extend(["4", "1"]);
        }
        lines.push("0");

        let (manager, _) = play(&lines);
        assert_eq!(manager.score(), 1000);
        assert_eq!(
            manager.display_goals(),
            vec!["1. [X] Attend temple - Completed 10/10 times"]
        );
    }

    #[test]
    fn invalid_ordinals_do_not_score() {
        let (manager, _) = play(&[
            "2", "Pray daily", "25", // create eternal
            "4", "0", // below range
            "4", "-3", // negative
            "4", "2", // past the end
            "4", "x", "1", // bad number, then valid
            "0",
        ]);
        assert_eq!(manager.score(), 25);
    }

    #[test]
    fn invalid_inputs_are_reprompted() {
        let (manager, _) = play(&[
            "9", // unknown menu entry is ignored
            "1", "", "Walk", "ten", "-1", "10", // blank name, bad points
            "4", "1", "0",
        ]);
        assert_eq!(manager.get(0).unwrap().points_per_event(), 10);
        assert_eq!(manager.score(), 10);
    }

    #[test]
    fn end_of_input_ends_session() {
        let (manager, _) = play(&["1", "Half-entered goal"]);
        assert!(manager.is_empty());
    }

    #[test]
    fn save_and_load_keep_session_state() {
        let (manager, _) = play(&["2", "Pray daily", "25", "4", "1", "7", "8", "6", "0"]);
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.score(), 25);
    }
}
