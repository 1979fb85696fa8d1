/**
 * Choose the next question to ask based on past results.
 *
 * Selection runs in strict tiers:
 *
 * Tier 1: coverage guarantee. While any question has never been asked, pick the
 *         first such question in dataset order (skipping the recent window), so the
 *         bank is swept systematically instead of sampled with gaps.
 * Tier 2: weighted random selection with convergence equalization, scanning
 *         categories from least to most recently touched. Questions with weak
 *         accuracy weigh double, and questions lagging the fair-share average get
 *         boosted up to 2.5x.
 * Tier 3: fallback. When every question is blocked by the recent or session
 *         window, clear the session window and retry; if that isn't enough, clear
 *         the recent window too.
 *
 * Author:  Ian Fisher (iafisher@fastmail.com)
 * Version: August 2026
 */
use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

use rand::Rng;

use super::common::{QuizError, Result};
use super::coverage;
use super::dataset::{Category, Question, QuestionBank};
use super::persistence::{ProgressMap, ProgressRecord};

/// How many selections back a question is blocked from repeating.
pub const RECENT_WINDOW: usize = 25;

/// Idle time after which the session window is cleared.
pub const SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Each pass of the fallback tier strictly grows the candidate pool, so two passes
/// always suffice; anything past this ceiling means the window invariants broke.
const MAX_FALLBACK_RETRIES: u32 = 4;

/// Short-term selection history: the cross-run recent window and the per-session
/// no-repeat window.
#[derive(Debug)]
pub struct SessionState {
    recent: VecDeque<u32>,
    session: Vec<u32>,
    started: Instant,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState {
            recent: VecDeque::new(),
            session: Vec::new(),
            started: Instant::now(),
        }
    }

    /// End the current session: the session window is cleared, the recent window
    /// survives.
    pub fn end_session(&mut self) {
        self.session.clear();
        self.started = Instant::now();
    }

    fn check_timeout(&mut self) {
        if self.started.elapsed() > SESSION_TIMEOUT {
            self.end_session();
        }
    }

    fn remember(&mut self, id: u32) {
        self.recent.push_back(id);
        if self.recent.len() > RECENT_WINDOW {
            self.recent.pop_front();
        }
        self.session.push(id);
    }

    pub fn recent_contains(&self, id: u32) -> bool {
        self.recent.contains(&id)
    }

    pub fn recent(&self) -> &VecDeque<u32> {
        &self.recent
    }

    pub fn session(&self) -> &[u32] {
        &self.session
    }
}

/// The selection weight of a question once the coverage guarantee is exhausted.
///
/// Never-asked questions keep a strong multiplier as a safety net for questions
/// that become unblocked mid-session. Otherwise weak accuracy doubles the weight,
/// and a question below the fair-share average is boosted in proportion to its
/// deficit, capped at 2.5x.
pub fn selection_weight(record: &ProgressRecord, fair_share: f64) -> f64 {
    if record.asked == 0 {
        return 10.0;
    }

    let mut weight = if record.accuracy() < 0.5 { 2.0 } else { 1.0 };

    let deficit = fair_share - f64::from(record.asked);
    if deficit > 0.0 {
        let boost = 1.0 + (deficit / 2.0).min(1.5);
        weight *= boost;
    }

    weight
}

/// Select the next question and append it to both history windows.
pub fn next_question<'a, R: Rng>(
    bank: &'a QuestionBank,
    progress: &ProgressMap,
    state: &mut SessionState,
    rng: &mut R,
) -> Result<&'a Question> {
    state.check_timeout();

    for _ in 0..MAX_FALLBACK_RETRIES {
        // Tier 1: coverage guarantee.
        let metrics = coverage::metrics(progress, bank);
        let unanswered = metrics.unanswered.iter()
            .find(|id| !state.recent_contains(**id));
        if let Some(&id) = unanswered {
            let question = bank.get(id).ok_or(QuizError::SchedulingExhausted)?;
            state.remember(id);
            return Ok(question);
        }

        // Tier 2: weighted random selection, least-recent category first.
        let blocked: HashSet<u32> = state.recent.iter()
            .chain(state.session.iter())
            .cloned()
            .collect();

        let mut categories: Vec<(Category, Vec<&Question>)> = Category::ALL.iter()
            .map(|&category| {
                let questions: Vec<&Question> = bank.questions().iter()
                    .filter(|q| q.category == category)
                    .collect();
                (category, questions)
            })
            .filter(|(_, questions)| questions.len() > 0)
            .collect();

        // Stable sort: ties keep the fixed category order.
        categories.sort_by_key(|(_, questions)| {
            questions.iter().filter(|q| state.recent_contains(q.id)).count()
        });

        for (_, questions) in categories.iter() {
            let candidates: Vec<&Question> = questions.iter()
                .filter(|q| !blocked.contains(&q.id))
                .cloned()
                .collect();
            if candidates.len() == 0 {
                continue;
            }

            let weights: Vec<f64> = candidates.iter()
                .map(|q| {
                    let record = progress.get(&q.id).cloned().unwrap_or_default();
                    selection_weight(&record, metrics.fair_share)
                })
                .collect();
            let total_weight: f64 = weights.iter().sum();

            let mut draw = rng.gen::<f64>() * total_weight;
            for (&question, weight) in candidates.iter().zip(weights.iter()) {
                draw -= weight;
                if draw <= 0.0 {
                    state.remember(question.id);
                    return Ok(question);
                }
            }

            // Floating-point slack can leave the draw marginally positive after
            // the last candidate; it still wins.
            let last = candidates[candidates.len() - 1];
            state.remember(last.id);
            return Ok(last);
        }

        // Tier 3: everything is blocked. Clearing either window strictly grows
        // the candidate pool, so the loop terminates.
        if state.session.len() > 0 {
            state.end_session();
        } else {
            state.recent.clear();
        }
    }

    Err(QuizError::SchedulingExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::dataset::{Category, Question};
    use super::super::persistence::fresh_progress;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_bank() -> QuestionBank {
        QuestionBank::from_questions(vec![
            Question::new(1, "a?", Category::AmericanGovernment, &["xxx"]),
            Question::new(2, "b?", Category::AmericanHistory, &["yyy"]),
            Question::new(3, "c?", Category::IntegratedCivics, &["zzz"]),
        ]).unwrap()
    }

    #[test]
    fn unanswered_questions_come_first_in_dataset_order() {
        let bank = small_bank();
        let progress = fresh_progress(&bank);
        let mut state = SessionState::new();
        let mut rng = StdRng::seed_from_u64(99);

        let mut ids = Vec::new();
        for _ in 0..3 {
            ids.push(next_question(&bank, &progress, &mut state, &mut rng).unwrap().id);
        }
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn tier_one_ignores_the_random_seed() {
        let bank = small_bank();
        let progress = fresh_progress(&bank);
        for seed in 0..10 {
            let mut state = SessionState::new();
            let mut rng = StdRng::seed_from_u64(seed);
            let first = next_question(&bank, &progress, &mut state, &mut rng).unwrap();
            assert_eq!(first.id, 1);
        }
    }

    #[test]
    fn weight_prefers_weak_accuracy() {
        let strong = ProgressRecord { asked: 10, correct: 9 };
        let weak = ProgressRecord { asked: 10, correct: 2 };
        assert!(selection_weight(&weak, 0.0) > selection_weight(&strong, 0.0));
    }

    #[test]
    fn weight_boosts_underrepresented_questions() {
        // fair_share = 5: question 1 is over-asked and inaccurate, question 2 has
        // never been asked. The never-asked question must dominate.
        let over_asked = ProgressRecord { asked: 10, correct: 2 };
        let never_asked = ProgressRecord { asked: 0, correct: 0 };
        assert!(selection_weight(&never_asked, 5.0) > selection_weight(&over_asked, 5.0));

        // The deficit boost is capped at 2.5x.
        let lagging = ProgressRecord { asked: 1, correct: 1 };
        assert!((selection_weight(&lagging, 100.0) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn no_repeats_within_a_session() {
        let bank = QuestionBank::load().unwrap();
        let mut progress = fresh_progress(&bank);
        // Mark everything asked once so Tier 1 is out of the picture.
        for record in progress.values_mut() {
            record.record(true);
        }

        let mut state = SessionState::new();
        let mut rng = StdRng::seed_from_u64(7);

        let mut seen = Vec::new();
        for _ in 0..50 {
            let q = next_question(&bank, &progress, &mut state, &mut rng).unwrap();
            seen.push(q.id);
        }
        let mut deduped = seen.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), seen.len());
    }

    #[test]
    fn coverage_guarantee_sweeps_the_whole_bank() {
        let bank = QuestionBank::load().unwrap();
        let mut progress = fresh_progress(&bank);
        let mut state = SessionState::new();
        let mut rng = StdRng::seed_from_u64(3);

        for expected_id in 1..=(bank.len() as u32) {
            let q = next_question(&bank, &progress, &mut state, &mut rng).unwrap();
            assert_eq!(q.id, expected_id);
            // The grading step is what bumps the counters.
            progress.get_mut(&q.id).unwrap().record(false);
        }
    }

    #[test]
    fn exhaustion_clears_windows_instead_of_failing() {
        let bank = small_bank();
        let mut progress = fresh_progress(&bank);
        for record in progress.values_mut() {
            record.record(true);
        }

        let mut state = SessionState::new();
        let mut rng = StdRng::seed_from_u64(11);

        // Nine draws from a three-question bank force the fallback tier to clear
        // the session window repeatedly.
        for _ in 0..9 {
            let q = next_question(&bank, &progress, &mut state, &mut rng);
            assert!(q.is_ok());
        }
    }

    #[test]
    fn ending_a_session_keeps_the_recent_window() {
        let bank = small_bank();
        let progress = fresh_progress(&bank);
        let mut state = SessionState::new();
        let mut rng = StdRng::seed_from_u64(1);

        next_question(&bank, &progress, &mut state, &mut rng).unwrap();
        assert_eq!(state.session().len(), 1);
        assert_eq!(state.recent().len(), 1);

        state.end_session();
        assert_eq!(state.session().len(), 0);
        assert_eq!(state.recent().len(), 1);
    }
}
