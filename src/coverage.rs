/**
 * Aggregate statistics over per-question progress.
 *
 * Author:  Ian Fisher (iafisher@fastmail.com)
 * Version: July 2026
 */
use super::dataset::QuestionBank;
use super::persistence::ProgressMap;

#[derive(Debug, Clone, PartialEq)]
pub struct CoverageMetrics {
    /// Total number of times any question has been asked.
    pub total_asked: u64,
    /// How often each question would have been asked if practice were spread
    /// perfectly evenly across the bank.
    pub fair_share: f64,
    /// Ids of questions never asked, in dataset order.
    pub unanswered: Vec<u32>,
    /// Questions touched at least once, rendered as "X/Y".
    pub coverage: String,
}

pub fn metrics(progress: &ProgressMap, bank: &QuestionBank) -> CoverageMetrics {
    let total_asked: u64 = bank.questions().iter()
        .map(|q| progress.get(&q.id).map(|p| u64::from(p.asked)).unwrap_or(0))
        .sum();

    let total_questions = bank.len();
    let fair_share = if total_questions > 0 {
        total_asked as f64 / total_questions as f64
    } else {
        0.0
    };

    let unanswered: Vec<u32> = bank.questions().iter()
        .filter(|q| progress.get(&q.id).map(|p| p.asked).unwrap_or(0) == 0)
        .map(|q| q.id)
        .collect();

    let coverage = format!("{}/{}", total_questions - unanswered.len(), total_questions);

    CoverageMetrics { total_asked, fair_share, unanswered, coverage }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::dataset::{Category, Question, QuestionBank};
    use super::super::persistence::{fresh_progress, ProgressRecord};

    fn bank() -> QuestionBank {
        QuestionBank::from_questions(vec![
            Question::new(1, "a?", Category::AmericanGovernment, &["x"]),
            Question::new(2, "b?", Category::AmericanGovernment, &["y"]),
            Question::new(3, "c?", Category::AmericanHistory, &["z"]),
        ]).unwrap()
    }

    #[test]
    fn fresh_progress_has_zero_coverage() {
        let bank = bank();
        let m = metrics(&fresh_progress(&bank), &bank);

        assert_eq!(m.total_asked, 0);
        assert_eq!(m.fair_share, 0.0);
        assert_eq!(m.unanswered, vec![1, 2, 3]);
        assert_eq!(m.coverage, "0/3");
    }

    #[test]
    fn unanswered_questions_stay_in_dataset_order() {
        let bank = bank();
        let mut progress = fresh_progress(&bank);
        progress.insert(2, ProgressRecord { asked: 4, correct: 2 });

        let m = metrics(&progress, &bank);
        assert_eq!(m.total_asked, 4);
        assert!((m.fair_share - 4.0 / 3.0).abs() < 1e-9);
        assert_eq!(m.unanswered, vec![1, 3]);
        assert_eq!(m.coverage, "1/3");
    }
}
