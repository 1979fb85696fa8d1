/**
 * The interactive practice session.
 *
 * Each round asks the scheduler for a question, presents it in free-text or
 * multiple-choice form, grades the response, and records the result. Progress is
 * saved after every graded answer; a failed save is reported as a warning and the
 * session continues on the in-memory state.
 *
 * Author:  Ian Fisher (iafisher@fastmail.com)
 * Version: August 2026
 */
use rand::thread_rng;

use super::choices;
use super::common::{PracticeOptions, QuizError, Result};
use super::curated::CurationTable;
use super::dataset::{Question, QuestionBank};
use super::matching;
use super::persistence::{self, ProgressMap};
use super::scheduler::{self, SessionState};
use super::ui::CmdUI;

/// Represents the results of a practice run.
#[derive(Debug)]
pub struct PracticeResult {
    pub total: usize,
    pub total_correct: usize,
    pub total_incorrect: usize,
    pub score: f64,
}

pub struct PracticeSession<'a> {
    bank: &'a QuestionBank,
    curations: CurationTable,
    progress: ProgressMap,
    state: SessionState,
}

/// What happened on a single round: a graded answer, or the user ending the
/// session with Ctrl+D.
enum Round {
    Graded(bool),
    Finished,
}

impl<'a> PracticeSession<'a> {
    pub fn new(
        bank: &'a QuestionBank, curations: CurationTable, progress: ProgressMap,
    ) -> Self {
        PracticeSession {
            bank,
            curations,
            progress,
            state: SessionState::new(),
        }
    }

    /// Run the practice loop and return the summary.
    pub fn take(
        &mut self, ui: &mut CmdUI, options: &PracticeOptions,
    ) -> Result<PracticeResult> {
        let mut rng = thread_rng();
        let mut total = 0;
        let mut total_correct = 0;

        for _ in 0..options.num_to_ask {
            let bank = self.bank;
            let question = scheduler::next_question(
                bank, &self.progress, &mut self.state, &mut rng)?;

            let round = if options.choices {
                self.ask_multiple_choice(ui, question)
            } else {
                self.ask_short_answer(ui, question)
            };

            match round {
                Ok(Round::Graded(correct)) => {
                    total += 1;
                    if correct {
                        total_correct += 1;
                    }
                    self.record(ui, question.id, correct)?;
                },
                Ok(Round::Finished) => {
                    break;
                },
                Err(QuizError::ReadlineInterrupted) => {
                    break;
                },
                Err(e) => {
                    return Err(e);
                },
            }
        }

        let total_incorrect = total - total_correct;
        let score = if total > 0 {
            (total_correct as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        Ok(PracticeResult { total, total_correct, total_incorrect, score })
    }

    /// Update the progress counters for a graded answer and persist them.
    fn record(&mut self, ui: &mut CmdUI, question_id: u32, correct: bool) -> Result<()> {
        self.progress.entry(question_id).or_default().record(correct);
        if let Err(e) = persistence::save_progress(&self.progress) {
            ui.warning(&format!("could not save progress ({})", e))?;
        }
        Ok(())
    }

    fn ask_short_answer(&self, ui: &mut CmdUI, question: &Question) -> Result<Round> {
        ui.text(&question.text)?;
        if let Some(guess) = ui.prompt()? {
            let correct = matching::is_correct(&guess, question);
            if correct {
                ui.correct()?;
            } else {
                ui.incorrect(Some(question.canonical_answer()))?;
            }
            Ok(Round::Graded(correct))
        } else {
            Ok(Round::Finished)
        }
    }

    fn ask_multiple_choice(&self, ui: &mut CmdUI, question: &Question) -> Result<Round> {
        let set = choices::choice_set(self.bank, question, &self.curations);

        ui.text(&question.text)?;
        ui.choices(&set.options)?;

        loop {
            if let Some(guess) = ui.prompt_letter()? {
                let guess = guess.to_lowercase();
                let index = match guess.as_str() {
                    "a" => 0,
                    "b" => 1,
                    "c" => 2,
                    "d" => 3,
                    _ => {
                        ui.status("Please enter a letter.")?;
                        continue;
                    },
                };

                let chosen = &set.options[index];
                let correct = set.is_correct_option(chosen);
                if correct {
                    ui.correct()?;
                } else {
                    ui.incorrect(Some(&set.correct))?;
                }
                return Ok(Round::Graded(correct));
            } else {
                return Ok(Round::Finished);
            }
        }
    }

    pub fn progress(&self) -> &ProgressMap {
        &self.progress
    }
}
