//! User input seam. The menu and handlers only talk to [`Prompter`].

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

pub trait Prompter {
    /// Zero-based index of the chosen item.
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize>;

    /// Re-asks until the answer is an integer within `lower..=upper`.
    fn number(&mut self, prompt: &str, lower: i64, upper: i64) -> Result<i64>;

    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

pub struct TermPrompter {
    theme: ColorfulTheme,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn check_number(raw: &str, lower: i64, upper: i64) -> std::result::Result<i64, String> {
    match raw.trim().parse::<i64>() {
        Ok(n) if (lower..=upper).contains(&n) => Ok(n),
        Ok(_) => Err(format!("Enter a number within the range ({lower}-{upper})")),
        Err(_) => Err("Please enter a valid number.".to_string()),
    }
}

impl Prompter for TermPrompter {
    fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?)
    }

    fn number(&mut self, prompt: &str, lower: i64, upper: i64) -> Result<i64> {
        let raw: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(move |s: &String| check_number(s, lower, upper).map(|_| ()))
            .interact_text()?;
        check_number(&raw, lower, upper).map_err(anyhow::Error::msg)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Debug)]
    pub enum Answer {
        Select(usize),
        Number(i64),
        Confirm(bool),
    }

    /// Replays canned answers; fails once the script runs dry or on a type mismatch.
    #[derive(Default)]
    pub struct ScriptedPrompter {
        answers: VecDeque<Answer>,
        pub prompts: Vec<String>,
    }

    impl ScriptedPrompter {
        pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
            Self {
                answers: answers.into_iter().collect(),
                prompts: Vec::new(),
            }
        }

        fn next(&mut self, prompt: &str) -> Result<Answer> {
            self.prompts.push(prompt.to_string());
            self.answers
                .pop_front()
                .ok_or_else(|| anyhow::anyhow!("script exhausted at {prompt:?}"))
        }
    }

    impl Prompter for ScriptedPrompter {
        fn select(&mut self, prompt: &str, items: &[&str]) -> Result<usize> {
            match self.next(prompt)? {
                Answer::Select(i) if i < items.len() => Ok(i),
                other => anyhow::bail!("unexpected answer {other:?} for select"),
            }
        }

        fn number(&mut self, prompt: &str, lower: i64, upper: i64) -> Result<i64> {
            match self.next(prompt)? {
                Answer::Number(n) if (lower..=upper).contains(&n) => Ok(n),
                other => anyhow::bail!("unexpected answer {other:?} for number"),
            }
        }

        fn confirm(&mut self, prompt: &str) -> Result<bool> {
            match self.next(prompt)? {
                Answer::Confirm(b) => Ok(b),
                other => anyhow::bail!("unexpected answer {other:?} for confirm"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::check_number;

    #[test]
    fn number_check_messages() {
        assert_eq!(check_number(" 7 ", 1, 10), Ok(7));
        assert_eq!(
            check_number("11", 1, 10),
            Err("Enter a number within the range (1-10)".to_string())
        );
        assert_eq!(check_number("x", 1, 4), Err("Please enter a valid number.".to_string()));
    }
}
