/**
 * The command-line user interface for practice runs.
 *
 * Author:  Ian Fisher (iafisher@fastmail.com)
 * Version: July 2026
 */
use std::io::Write;

use colored::*;

use super::common::Result;
use super::iohelper::{prettyprint, prettyprint_colored, prompt};
use super::quiz::PracticeResult;

pub struct CmdUI {
    number: usize,
}

impl CmdUI {
    pub fn new() -> Self {
        Self { number: 0 }
    }

    pub fn text(&mut self, text: &str) -> Result<()> {
        self.number += 1;
        my_print!("\n")?;
        let prefix = format!("  ({}) ", self.number);
        prettyprint_colored(&text, &prefix, None, Some(Color::Cyan))?;
        my_print!("\n")
    }

    pub fn prompt(&mut self) -> Result<Option<String>> {
        prompt("> ")
    }

    pub fn prompt_letter(&mut self) -> Result<Option<String>> {
        prompt("Enter a letter: ")
    }

    pub fn choices(&mut self, choices: &[String]) -> Result<()> {
        for (letter, choice) in "abcd".chars().zip(choices.iter()) {
            let prefix = format!("     ({}) ", letter);
            prettyprint(choice, &prefix)?;
        }
        my_print!("\n")
    }

    pub fn correct(&mut self) -> Result<()> {
        prettyprint(&format!("{}", "Correct!".green()), "")
    }

    pub fn incorrect(&mut self, correction: Option<&str>) -> Result<()> {
        if let Some(correction) = correction {
            let message = format!(
                "{} The correct answer was {}.",
                "Incorrect.".red(),
                correction.green(),
            );
            prettyprint(&message, "")
        } else {
            prettyprint(&format!("{}", "Incorrect.".red()), "")
        }
    }

    pub fn status(&mut self, text: &str) -> Result<()> {
        my_println!("{}", text)
    }

    pub fn warning(&mut self, text: &str) -> Result<()> {
        my_print!("\n")?;
        prettyprint_colored(
            &format!("Warning: {}", text), "  ", Some(Color::Red), None)?;
        my_print!("\n")
    }

    pub fn results(&mut self, results: &PracticeResult) -> Result<()> {
        if results.total > 0 {
            let score_as_str = format!("{:.1}%", results.score);

            my_print!("\n\n")?;
            my_print!("Score: ")?;
            my_print!("{}", score_as_str.cyan())?;
            my_print!(" out of ")?;
            my_print!("{}", format!("{}", results.total).cyan())?;
            if results.total == 1 {
                my_println!(" question")?;
            } else {
                my_println!(" questions")?;
            }
            my_print!("  {}", format!("{}", results.total_correct).green())?;
            my_print!(" correct\n")?;
            my_print!("  {}", format!("{}", results.total_incorrect).red())?;
            my_print!(" incorrect\n")?;
        }
        Ok(())
    }
}
