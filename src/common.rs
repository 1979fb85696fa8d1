/**
 * Definitions of data structures used by several modules, such as `QuizError` and the
 * structs that hold command-line arguments.
 *
 * Author:  Ian Fisher (iafisher@fastmail.com)
 * Version: August 2026
 */
use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use structopt::StructOpt;

pub type Result<T> = ::std::result::Result<T, QuizError>;

#[derive(Debug)]
pub enum QuizError {
    /// For when the application directory cannot be created.
    CannotMakeAppDir,
    /// For corrupt question-bank data: duplicate ids, questions without answers.
    /// Detected at load time; the application refuses to start.
    DataIntegrity(String),
    /// For when the user requests a category that does not exist.
    CategoryNotFound(String),
    /// For JSON errors.
    Json(serde_json::Error),
    CannotWriteToFile(PathBuf),
    Io(io::Error),
    ReadlineInterrupted,
    ReadlineEof,
    ReadlineOther,
    EmptyBank,
    /// The scheduler's fallback loop exceeded its retry ceiling. This signals a bug
    /// in window management, not a user error.
    SchedulingExhausted,
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            QuizError::CannotMakeAppDir => {
                write!(f, "unable to create application directory")
            },
            QuizError::DataIntegrity(ref message) => {
                write!(f, "corrupt question bank ({})", message)
            },
            QuizError::CategoryNotFound(ref name) => {
                write!(f, "could not find category named '{}'", name)
            },
            QuizError::Json(ref err) => {
                write!(f, "could not parse JSON ({})", err)
            },
            QuizError::CannotWriteToFile(ref path) => {
                write!(f, "cannot write to file '{}'", path.to_string_lossy())
            },
            QuizError::Io(ref err) => {
                write!(f, "IO error ({})", err)
            },
            QuizError::ReadlineInterrupted => {
                Ok(())
            },
            QuizError::ReadlineEof => {
                Ok(())
            },
            QuizError::ReadlineOther => {
                write!(f, "error while reading input")
            },
            QuizError::EmptyBank => {
                write!(f, "no questions found")
            },
            QuizError::SchedulingExhausted => {
                write!(f, "could not select a question (internal error)")
            },
        }
    }
}

impl error::Error for QuizError {
    fn cause(&self) -> Option<&dyn error::Error> {
        match *self {
            QuizError::Json(ref err) => Some(err),
            QuizError::Io(ref err) => Some(err),
            _ => None,
        }
    }
}

pub fn is_broken_pipe(e: &QuizError) -> bool {
    if let QuizError::Io(e) = e {
        if let io::ErrorKind::BrokenPipe = e.kind() {
            return true;
        }
    }
    false
}

/// Holds the command-line configuration for the application.
#[derive(StructOpt)]
#[structopt(name = "civics-drill", about = "Practice the civics test from the command line.")]
pub struct Options {
    /// Do not emit colorized output.
    #[structopt(long = "no-color")]
    pub no_color: bool,
    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(StructOpt)]
pub enum Command {
    /// Practice questions.
    #[structopt(name = "practice")]
    Practice(PracticeOptions),
    /// Report coverage and per-question accuracy.
    #[structopt(name = "progress")]
    Progress,
    /// Print the full study guide.
    #[structopt(name = "study")]
    Study,
    /// Delete all saved progress.
    #[structopt(name = "reset")]
    Reset(ResetOptions),
}

#[derive(StructOpt)]
pub struct PracticeOptions {
    /// Limit the total number of questions.
    #[structopt(short = "n", default_value = "20")]
    pub num_to_ask: usize,
    /// Present each question with four answer choices.
    #[structopt(long = "choices")]
    pub choices: bool,
    /// Only ask questions from the given category.
    #[structopt(long = "category")]
    pub category: Option<String>,
}

#[derive(StructOpt)]
pub struct ResetOptions {
    /// Reset without prompting for confirmation.
    #[structopt(short = "f", long = "force")]
    pub force: bool,
}

impl PracticeOptions {
    #[allow(dead_code)]
    pub fn new() -> Self {
        PracticeOptions {
            num_to_ask: 20, choices: false, category: None,
        }
    }
}
