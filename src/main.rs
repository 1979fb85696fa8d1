/**
 * Practice the U.S. naturalization civics test from the command line.
 *
 * Author:  Ian Fisher (iafisher@fastmail.com)
 * Version: August 2026
 */
use std::io::Write;

use colored::*;
use structopt::StructOpt;

use civics_drill::{my_print, my_println};

use civics_drill::common::{self, Command, Options, PracticeOptions, QuizError,
                           ResetOptions, Result};
use civics_drill::coverage;
use civics_drill::curated::CurationTable;
use civics_drill::dataset::{Category, QuestionBank};
use civics_drill::iohelper::prompt;
use civics_drill::persistence;
use civics_drill::quiz::PracticeSession;
use civics_drill::ui::CmdUI;

fn main() {
    let options = Options::from_args();

    if options.no_color {
        colored::control::set_override(false);
    }

    let result = match options.cmd {
        Command::Practice(options) => {
            main_practice(options)
        },
        Command::Progress => {
            main_progress()
        },
        Command::Study => {
            main_study()
        },
        Command::Reset(options) => {
            main_reset(options)
        },
    };

    if let Err(e) = result {
        if !common::is_broken_pipe(&e) {
            eprintln!("{}: {}", "Error".red(), e);
            ::std::process::exit(2);
        }
    }
}

/// The main function for the `practice` subcommand.
fn main_practice(options: PracticeOptions) -> Result<()> {
    let full_bank = QuestionBank::load()?;

    // Progress always tracks the full bank, even for category-restricted runs, so
    // that a restricted run never truncates the stored counters.
    let (progress, progress_warnings) = persistence::load_progress(&full_bank);

    let bank = match options.category.as_ref() {
        Some(name) => {
            let category = Category::from_name(name)
                .ok_or_else(|| QuizError::CategoryNotFound(name.clone()))?;
            full_bank.restricted_to(category)?
        },
        None => full_bank,
    };

    let mut ui = CmdUI::new();
    for warning in progress_warnings.iter() {
        ui.warning(warning)?;
    }

    let (curations, curation_warnings) = CurationTable::validated(&bank);
    for warning in curation_warnings.iter() {
        ui.warning(warning)?;
    }

    let mut session = PracticeSession::new(&bank, curations, progress);
    let results = session.take(&mut ui, &options)?;
    ui.results(&results)?;
    Ok(())
}

/// The main function for the `progress` subcommand.
fn main_progress() -> Result<()> {
    let bank = QuestionBank::load()?;
    let (progress, warnings) = persistence::load_progress(&bank);

    let mut ui = CmdUI::new();
    for warning in warnings.iter() {
        ui.warning(warning)?;
    }

    let metrics = coverage::metrics(&progress, &bank);
    let total_correct: u64 = progress.values().map(|p| u64::from(p.correct)).sum();
    let accuracy = if metrics.total_asked > 0 {
        total_correct as f64 / metrics.total_asked as f64
    } else {
        0.0
    };

    my_print!("Coverage: ")?;
    my_println!("{}", metrics.coverage.cyan())?;
    my_print!("Overall accuracy: ")?;
    my_println!("{}", format!("{:.0}%", accuracy * 100.0).cyan())?;
    if metrics.unanswered.len() > 0 {
        my_println!("Still need to practice: {} questions", metrics.unanswered.len())?;
    }

    for &category in Category::ALL.iter() {
        let questions: Vec<_> = bank.questions().iter()
            .filter(|q| q.category == category)
            .collect();
        if questions.len() == 0 {
            continue;
        }

        my_println!("\n{}", category.name().white().bold())?;
        for question in questions.iter() {
            let record = progress.get(&question.id).cloned().unwrap_or_default();
            let stats = if record.asked == 0 {
                format!("{:>4}", "-").normal()
            } else {
                let percent = format!("{:>3.0}%", record.accuracy() * 100.0);
                if record.accuracy() >= 0.7 {
                    percent.green()
                } else if record.accuracy() >= 0.4 {
                    percent.yellow()
                } else {
                    percent.red()
                }
            };
            my_println!("  {}  {:>2}/{:>2}  {:>3}. {}",
                        stats, record.correct, record.asked, question.id,
                        question.text)?;
        }
    }

    Ok(())
}

/// The main function for the `study` subcommand.
fn main_study() -> Result<()> {
    let bank = QuestionBank::load()?;

    for &category in Category::ALL.iter() {
        let questions: Vec<_> = bank.questions().iter()
            .filter(|q| q.category == category)
            .collect();
        if questions.len() == 0 {
            continue;
        }

        my_println!("{}", category.name().white().bold())?;
        for question in questions.iter() {
            my_println!("\n  {}. {}", question.id, question.text)?;
            for answer in question.answers.iter() {
                my_println!("       - {}", answer)?;
            }
        }
        my_print!("\n")?;
    }

    Ok(())
}

/// The main function for the `reset` subcommand.
fn main_reset(options: ResetOptions) -> Result<()> {
    let path = persistence::get_progress_path();
    if !path.exists() {
        my_println!("No saved progress.")?;
        return Ok(());
    }

    if options.force || confirm("Are you sure you want to delete all progress? ") {
        persistence::delete_progress()?;
        my_println!("Progress deleted.")?;
    }
    Ok(())
}

/// Prompt the user with a yes-no question and return `true` if they enter yes.
fn confirm(message: &str) -> bool {
    match prompt(message) {
        Ok(Some(response)) => {
            response.trim_start().to_lowercase().starts_with("y")
        },
        _ => false,
    }
}
