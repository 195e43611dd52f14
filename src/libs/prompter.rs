// Interactive input, behind a trait so configuration resolution never touches
// the console directly.

use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;
use console::Term;
use dialoguer::Input;

use crate::libs::errors::{InstallerError, Result};

/// A source of numbered choices.
pub trait Prompter {
    /// Shows `choices` numbered from 1 and returns the number the user entered.
    /// The number is *not* validated here; callers map it and reject out-of-range
    /// values as `InvalidSelection`.
    fn choose(&self, title: &str, choices: &[&str]) -> Result<u32>;
}

/// Line prompt on the console.
///
/// With a terminal on both stdin and stderr the answer is edited through
/// `dialoguer`. Otherwise (piped answers, CI) one plain line is read from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePrompter;

impl Prompter for ConsolePrompter {
    fn choose(&self, title: &str, choices: &[&str]) -> Result<u32> {
        eprintln!("{}", title.bold());
        for (i, choice) in choices.iter().enumerate() {
            eprintln!("  {}) {}", (i + 1).to_string().cyan(), choice);
        }
        let prompt = format!("Enter a number [1-{}]", choices.len());

        if Term::stderr().is_term() && io::stdin().is_terminal() {
            return Input::<u32>::new()
                .with_prompt(prompt)
                .interact_text()
                .map_err(|e| InstallerError::Prompt(e.to_string()));
        }

        eprint!("{prompt}: ");
        let _ = io::stderr().flush();
        read_choice(&mut io::stdin().lock())
    }
}

/// Reads one answer line and parses it as a choice number.
fn read_choice(reader: &mut impl BufRead) -> Result<u32> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|e| InstallerError::Prompt(e.to_string()))?;
    if read == 0 {
        return Err(InstallerError::Prompt("no answer on stdin".to_string()));
    }

    let answer = line.trim();
    answer
        .parse::<u32>()
        .map_err(|_| InstallerError::Prompt(format!("'{answer}' is not a number")))
}

#[cfg(test)]
pub(crate) mod fakes {
    use super::Prompter;
    use crate::libs::errors::{InstallerError, Result};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays scripted answers and records every title it was asked.
    #[derive(Default)]
    pub struct ScriptedPrompter {
        answers: RefCell<VecDeque<u32>>,
        pub asked: RefCell<Vec<String>>,
    }

    impl ScriptedPrompter {
        pub fn answering(answers: &[u32]) -> Self {
            Self {
                answers: RefCell::new(answers.iter().copied().collect()),
                asked: RefCell::default(),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn choose(&self, title: &str, _choices: &[&str]) -> Result<u32> {
            self.asked.borrow_mut().push(title.to_string());
            self.answers
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| InstallerError::Prompt(format!("no scripted answer for '{title}'")))
        }
    }
}
