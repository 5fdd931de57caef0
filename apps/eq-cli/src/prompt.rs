// prompt.rs — Line input for the interactive menu.
//
// The menu reads through the `Prompter` trait so tests can script input.
// `LinePrompter` is the terminal implementation backed by rustyline.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Source of user input lines.
pub trait Prompter {
    /// Show `prompt` and read one line. Returns `Ok(None)` at end of input.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

/// Reads from the terminal with readline-style editing and history.
pub struct LinePrompter {
    editor: DefaultEditor,
}

impl LinePrompter {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompter for LinePrompter {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Some(line))
            }
            // Ctrl-D / Ctrl-C end the session.
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Read a whole number, re-prompting until the input parses.
pub fn read_integer(prompter: &mut dyn Prompter, prompt: &str) -> anyhow::Result<Option<i64>> {
    loop {
        let Some(line) = prompter.read_line(prompt)? else {
            return Ok(None);
        };
        match line.trim().parse::<i64>() {
            Ok(n) => return Ok(Some(n)),
            Err(_) => println!("Invalid input. Please enter a valid number."),
        }
    }
}

/// Read a point value or count that must be at least `min`, re-prompting otherwise.
pub fn read_at_least(
    prompter: &mut dyn Prompter,
    prompt: &str,
    min: u32,
) -> anyhow::Result<Option<u32>> {
    loop {
        let Some(n) = read_integer(prompter, prompt)? else {
            return Ok(None);
        };
        match u32::try_from(n) {
            Ok(value) if value >= min => return Ok(Some(value)),
            _ => println!("Please enter a number between {} and {}.", min, u32::MAX),
        }
    }
}

/// Read a non-empty goal name.
pub fn read_name(prompter: &mut dyn Prompter, prompt: &str) -> anyhow::Result<Option<String>> {
    loop {
        let Some(line) = prompter.read_line(prompt)? else {
            return Ok(None);
        };
        let name = line.trim();
        if name.is_empty() {
            println!("Goal name cannot be empty.");
        } else {
            return Ok(Some(name.to_string()));
        }
    }
}

/// Replays a fixed list of lines, then reports end of input.
#[cfg(test)]
pub struct ScriptedPrompter {
    lines: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, _prompt: &str) -> anyhow::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
