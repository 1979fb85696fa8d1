/**
 * The civics question bank: data structures, JSON loading and integrity checks.
 *
 * The bank ships with the binary as an embedded JSON document. It is loaded once at
 * startup and never mutated afterwards.
 *
 * Author:  Ian Fisher (iafisher@fastmail.com)
 * Version: July 2026
 */
use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;

use super::common::{QuizError, Result};

pub const BANK_JSON: &str = include_str!("../data/questions.json");

/// The section of the civics test a question belongs to.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "American Government")]
    AmericanGovernment,
    #[serde(rename = "American History")]
    AmericanHistory,
    #[serde(rename = "Integrated Civics")]
    IntegratedCivics,
    #[serde(rename = "Texas")]
    Texas,
}

impl Category {
    /// All categories, in the order used for reports and for tie-breaking in the
    /// scheduler's category balancing.
    pub const ALL: [Category; 4] = [
        Category::AmericanGovernment,
        Category::AmericanHistory,
        Category::IntegratedCivics,
        Category::Texas,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::AmericanGovernment => "American Government",
            Category::AmericanHistory => "American History",
            Category::IntegratedCivics => "Integrated Civics",
            Category::Texas => "Texas",
        }
    }

    /// Parse a category from a command-line argument, case-insensitively.
    pub fn from_name(name: &str) -> Option<Category> {
        let name = name.trim().to_lowercase();
        Category::ALL.iter().cloned().find(|c| c.name().to_lowercase() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Represents a question.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub category: Category,
    /// All acceptable answers. The first element is the canonical form of the answer
    /// for display.
    pub answers: Vec<String>,
}

impl Question {
    /// Return a new question. Only used to build fixtures in tests.
    #[allow(dead_code)]
    pub fn new(id: u32, text: &str, category: Category, answers: &[&str]) -> Self {
        Question {
            id,
            text: String::from(text),
            category,
            answers: answers.iter().map(|a| String::from(*a)).collect(),
        }
    }

    pub fn canonical_answer(&self) -> &str {
        &self.answers[0]
    }

    /// Return `true` if `candidate` equals one of the acceptable answers, ignoring
    /// case and surrounding whitespace.
    pub fn accepts(&self, candidate: &str) -> bool {
        let candidate = candidate.trim().to_lowercase();
        self.answers.iter().any(|a| a.trim().to_lowercase() == candidate)
    }
}

/// Represents the entire question bank.
#[derive(Deserialize, Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Load the embedded question bank.
    pub fn load() -> Result<QuestionBank> {
        QuestionBank::from_json(BANK_JSON)
    }

    /// Load a question bank from a string containing JSON data.
    pub fn from_json(data: &str) -> Result<QuestionBank> {
        let bank: QuestionBank = serde_json::from_str(data).map_err(QuizError::Json)?;
        bank.validate()?;
        Ok(bank)
    }

    /// Build a bank from a list of questions. Only used to build fixtures in tests.
    #[allow(dead_code)]
    pub fn from_questions(questions: Vec<Question>) -> Result<QuestionBank> {
        let bank = QuestionBank { questions };
        bank.validate()?;
        Ok(bank)
    }

    /// Check the integrity rules that the rest of the application relies on: at least
    /// one question, unique ids, and at least one answer per question.
    fn validate(&self) -> Result<()> {
        if self.questions.len() == 0 {
            return Err(QuizError::EmptyBank);
        }

        let mut seen = HashSet::new();
        for question in self.questions.iter() {
            if !seen.insert(question.id) {
                return Err(QuizError::DataIntegrity(
                    format!("duplicate question id {}", question.id)));
            }
            if question.answers.len() == 0 {
                return Err(QuizError::DataIntegrity(
                    format!("question {} has no answers", question.id)));
            }
            if question.answers.iter().any(|a| a.trim().len() == 0) {
                return Err(QuizError::DataIntegrity(
                    format!("question {} has a blank answer", question.id)));
            }
        }
        Ok(())
    }

    /// The questions in dataset order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn get(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Return a new bank containing only the questions of the given category, for
    /// category-restricted practice runs.
    pub fn restricted_to(&self, category: Category) -> Result<QuestionBank> {
        let questions = self.questions.iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect();
        QuestionBank::from_questions(questions)
    }
}
