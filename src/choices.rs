/**
 * Generation of wrong answers for four-way multiple choice.
 *
 * Candidates come from the curated table when it has at least three usable entries,
 * and otherwise from the other questions' answers in widening tiers: same category
 * and same answer type, same category and related type, any category and same type,
 * then anything left. Candidates must read plausibly against the question text (see
 * `is_suitable`), must not match any acceptable answer of the question, and must be
 * longer than two characters.
 *
 * Ordering is deterministic: both the candidate pool and the final four options are
 * sorted by a pseudo-random rank seeded on the question id, so the same question
 * always shows the same choices in the same order.
 *
 * Author:  Ian Fisher (iafisher@fastmail.com)
 * Version: August 2026
 */
use std::cmp::Ordering;
use std::collections::HashSet;

use super::classify::{classify, related_types};
use super::curated::CurationTable;
use super::dataset::{Question, QuestionBank};

/// The four options presented for a question, with the correct answer somewhere
/// among them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceSet {
    pub options: Vec<String>,
    pub correct: String,
}

impl ChoiceSet {
    pub fn is_correct_option(&self, option: &str) -> bool {
        option.trim().to_lowercase() == self.correct.trim().to_lowercase()
    }
}

/// Build the choice set for a question: the canonical answer plus three wrong
/// answers, in seeded pseudo-random order.
pub fn choice_set(
    bank: &QuestionBank, question: &Question, curations: &CurationTable,
) -> ChoiceSet {
    let correct = String::from(question.canonical_answer());
    let mut options = vec![correct.clone()];
    options.extend(generate_distractors(bank, question, &correct, curations));
    seeded_sort(seed_for(question), &mut options);
    ChoiceSet { options, correct }
}

/// Produce exactly three wrong answers for the question, disjoint from every
/// acceptable answer and from each other.
pub fn generate_distractors(
    bank: &QuestionBank, question: &Question, correct_answer: &str,
    curations: &CurationTable,
) -> Vec<String> {
    let seed = seed_for(question);

    // Curated wrong answers take precedence when enough of them survived
    // validation.
    if let Some(curated) = curations.lookup(question.id) {
        if curated.len() >= 3 {
            return curated[..3].to_vec();
        }
    }

    let correct_type = classify(correct_answer);
    let question_text = question.text.to_lowercase();

    let same_category = |q: &&Question| {
        q.category == question.category && q.id != question.id
    };
    let other_category = |q: &&Question| q.category != question.category;

    let usable = |answer: &&String| {
        !question.accepts(answer) && is_suitable(&question_text, answer)
    };

    // Tier 1: exact type match from the same category.
    let tier1: Vec<&String> = bank.questions().iter()
        .filter(same_category)
        .flat_map(|q| q.answers.iter())
        .filter(usable)
        .filter(|a| classify(a) == correct_type)
        .collect();

    let mut pool: Vec<&String> = tier1.clone();
    if tier1.len() < 3 {
        // Tier 2: related types from the same category.
        let related = related_types(correct_type);
        let tier2: Vec<&String> = bank.questions().iter()
            .filter(same_category)
            .flat_map(|q| q.answers.iter())
            .filter(usable)
            .filter(|a| related.contains(&classify(a)))
            .collect();
        pool.extend(tier2);

        if pool.len() < 3 {
            // Tier 3: exact type match from any other category.
            let tier3: Vec<&String> = bank.questions().iter()
                .filter(other_category)
                .flat_map(|q| q.answers.iter())
                .filter(usable)
                .filter(|a| classify(a) == correct_type)
                .collect();
            pool.extend(tier3);
        }

        if pool.len() < 3 {
            // Tier 4: anything plausible from the whole bank.
            let already: HashSet<&str> = pool.iter().map(|a| a.as_str()).collect();
            let tier4: Vec<&String> = bank.questions().iter()
                .flat_map(|q| q.answers.iter())
                .filter(usable)
                .filter(|a| !already.contains(a.as_str()))
                .collect();
            pool.extend(tier4);
        }
    }

    let mut pool = dedup_and_trim(pool);

    // Last resort for pathologically small or homogeneous banks: admit any answer
    // that isn't acceptable for this question, so the caller always gets a full
    // choice screen.
    if pool.len() < 3 {
        let fallback: Vec<&String> = bank.questions().iter()
            .flat_map(|q| q.answers.iter())
            .filter(|a| !question.accepts(a))
            .collect();
        let mut fallback = dedup_and_trim(fallback);
        let seen: HashSet<String> = pool.iter().map(|a| comparison_key(a)).collect();
        fallback.retain(|a| !seen.contains(&comparison_key(a)));
        pool.extend(fallback);
    }

    seeded_sort(seed, &mut pool);
    pool.truncate(3);
    pool
}

/// Drop duplicates (ignoring case and surrounding whitespace) and answers too short
/// to make credible options.
fn dedup_and_trim(pool: Vec<&String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for answer in pool {
        if answer.trim().len() <= 2 {
            continue;
        }
        if seen.insert(comparison_key(answer)) {
            result.push(answer.clone());
        }
    }
    result
}

fn comparison_key(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Reject candidates that would be obviously wrong to a human reading the question,
/// even when they pass the type classifier. Keyed on substrings of the lowercased
/// question text; the first matching rule decides.
fn is_suitable(question_text: &str, candidate: &str) -> bool {
    let ans = candidate.trim().to_lowercase();

    // Questions about a right or freedom only admit other rights and freedoms.
    if question_text.contains("right") || question_text.contains("freedom") {
        const RIGHTS: &[&str] = &[
            "speech", "religion", "assembly", "press", "petition", "freedom",
            "right", "liberty", "bear arms", "vote", "voting", "privacy",
            "due process",
        ];
        return RIGHTS.iter().any(|w| ans.contains(w));
    }

    // Counting questions only admit numeric-looking candidates.
    if question_text.contains("how many") || question_text.contains("how much") {
        return looks_numeric(&ans);
    }

    // "What is the X branch" questions only admit government entities.
    if question_text.contains("branch of government")
        || question_text.contains("branch of the government")
    {
        const BRANCHES: &[&str] = &[
            "supreme court", "senate", "house of representatives", "congress",
            "executive", "judicial", "legislative",
        ];
        return BRANCHES.iter().any(|w| ans.contains(w));
    }

    // "What does the X branch do" questions admit actions, not documents or dates.
    if (question_text.contains("does the") || question_text.contains("do"))
        && question_text.contains("branch")
    {
        const BAD: &[&str] = &[
            "amendment", "constitution", "declaration", "bill of rights", "year",
            "years",
        ];
        return !BAD.iter().any(|w| ans.contains(w));
    }

    // Questions about office-holders exclude documents and abstractions.
    if question_text.contains("president")
        || question_text.contains("senator")
        || question_text.contains("representative")
    {
        const BAD: &[&str] = &[
            "constitution", "amendment", "declaration", "bill", "congress",
            "republic", "union", "years", "year",
        ];
        return !BAD.iter().any(|w| ans.contains(w));
    }

    // Geography questions exclude government-process terms.
    if question_text.contains("capital")
        || question_text.contains("state")
        || question_text.contains("city")
        || question_text.contains("river")
        || question_text.contains("ocean")
        || question_text.contains("border")
    {
        const BAD: &[&str] = &[
            "amendment", "law", "act", "president", "senator", "year", "years",
        ];
        return !BAD.iter().any(|w| ans.contains(w));
    }

    // History-event questions exclude document names.
    if question_text.contains("war")
        || question_text.contains("fought")
        || question_text.contains("declared")
    {
        const BAD: &[&str] = &[
            "constitution", "amendment", "declaration of independence",
            "bill of rights", "year", "years",
        ];
        return !BAD.iter().any(|w| ans.contains(w));
    }

    const ALWAYS_BAD: &[&str] = &["constitution", "amendment"];
    !ALWAYS_BAD.iter().any(|w| ans.contains(w))
}

fn looks_numeric(answer: &str) -> bool {
    const NUMBER_WORDS: &[&str] = &[
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight",
        "nine", "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen",
        "sixteen", "seventeen", "eighteen", "nineteen", "twenty", "thirty", "forty",
        "fifty", "hundred", "thousand", "million",
    ];
    answer.chars().any(|c| c.is_ascii_digit())
        || NUMBER_WORDS.iter().any(|w| answer.contains(w))
}

fn seed_for(question: &Question) -> u64 {
    u64::from(question.id) * 12345
}

/// A deterministic stand-in for `Math.random`: the fractional part of a scaled sine
/// of the seed. Not uniform and not secure, but stable across runs, which is what
/// the choice screen needs.
fn seeded_random(seed: f64) -> f64 {
    let x = seed.sin() * 10000.0;
    x - x.floor()
}

fn rank(seed: u64, s: &str) -> f64 {
    let first = s.chars().next().map(|c| c as u32).unwrap_or(0);
    seeded_random(seed as f64 + f64::from(first))
}

fn seeded_sort(seed: u64, items: &mut Vec<String>) {
    items.sort_by(|a, b| {
        rank(seed, a).partial_cmp(&rank(seed, b)).unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::dataset::Category;

    fn bank() -> QuestionBank {
        QuestionBank::load().unwrap()
    }

    fn table(bank: &QuestionBank) -> CurationTable {
        CurationTable::validated(bank).0
    }

    #[test]
    fn curated_override_is_used_verbatim() {
        let bank = bank();
        let curations = table(&bank);
        let question = bank.get(5).unwrap();

        let mut distractors =
            generate_distractors(&bank, question, question.canonical_answer(), &curations);
        distractors.sort();
        assert_eq!(distractors, vec![
            String::from("the Constitution"),
            String::from("the Magna Carta"),
            String::from("the Mayflower Compact"),
        ]);
    }

    #[test]
    fn tiers_fill_in_without_curations() {
        let bank = bank();
        let empty = CurationTable::empty();
        for question in bank.questions().iter() {
            let distractors = generate_distractors(
                &bank, question, question.canonical_answer(), &empty);
            assert_eq!(distractors.len(), 3, "question {}", question.id);
        }
    }

    #[test]
    fn distractors_never_overlap_acceptable_answers() {
        let bank = bank();
        let empty = CurationTable::empty();
        for question in bank.questions().iter() {
            let distractors = generate_distractors(
                &bank, question, question.canonical_answer(), &empty);
            for d in distractors.iter() {
                assert!(!question.accepts(d),
                        "question {} got acceptable answer {:?}", question.id, d);
                assert!(d.trim().len() > 2);
            }

            let mut keys: Vec<String> =
                distractors.iter().map(|d| comparison_key(d)).collect();
            keys.sort();
            keys.dedup();
            assert_eq!(keys.len(), 3, "question {} repeated a distractor", question.id);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let bank = bank();
        let curations = table(&bank);
        for question in bank.questions().iter() {
            let first = choice_set(&bank, question, &curations);
            let second = choice_set(&bank, question, &curations);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn choice_sets_contain_the_correct_answer() {
        let bank = bank();
        let curations = table(&bank);
        for question in bank.questions().iter() {
            let set = choice_set(&bank, question, &curations);
            assert_eq!(set.options.len(), 4);
            assert_eq!(
                set.options.iter().filter(|o| set.is_correct_option(o)).count(),
                1,
                "question {}", question.id);
        }
    }

    #[test]
    fn lone_numeric_answer_falls_through_the_tiers() {
        // A tiny bank where the number question shares its category with nobody:
        // every tier comes up short and the generator must still produce three
        // options without erroring.
        let bank = QuestionBank::from_questions(vec![
            Question::new(1, "How old do citizens have to be to vote?",
                          Category::AmericanGovernment, &["18"]),
            Question::new(2, "Who was the first President?",
                          Category::AmericanHistory,
                          &["George Washington", "Washington"]),
            Question::new(3, "What is the capital of Texas?",
                          Category::Texas, &["Austin"]),
            Question::new(4, "Name one state that borders Mexico.",
                          Category::IntegratedCivics, &["California", "Arizona"]),
            Question::new(5, "Name one branch or part of the government.",
                          Category::AmericanGovernment, &["Congress"]),
        ]).unwrap();
        let question = bank.get(1).unwrap();

        let distractors = generate_distractors(
            &bank, question, "18", &CurationTable::empty());
        assert_eq!(distractors.len(), 3);
        assert!(!distractors.iter().any(|d| d == "18"));
    }

    #[test]
    fn suitability_rules_follow_the_question_text() {
        assert!(is_suitable("what is one right or freedom", "freedom of speech"));
        assert!(!is_suitable("what is one right or freedom", "the Supreme Court"));

        assert!(is_suitable("how many u.s. senators are there?", "435"));
        assert!(is_suitable("how many u.s. senators are there?", "twenty"));
        assert!(!is_suitable("how many u.s. senators are there?", "the Senate"));

        assert!(is_suitable("name one branch of government.", "the Senate"));
        assert!(!is_suitable("name one branch of government.", "the Mayflower"));

        assert!(!is_suitable("who is the president now?", "the Constitution"));
        assert!(is_suitable("who is the president now?", "Barack Obama"));

        assert!(!is_suitable("what is the capital of your state?",
                             "the 19th Amendment"));
        assert!(is_suitable("what is the capital of your state?", "Sacramento"));

        // Default rule: a small hard blocklist, everything else passes.
        assert!(is_suitable("who wrote the federalist papers?", "John Jay"));
        assert!(!is_suitable("who wrote the federalist papers?",
                             "the Constitution"));
    }

    #[test]
    fn seeded_rank_is_stable() {
        let a = rank(5 * 12345, "the Magna Carta");
        let b = rank(5 * 12345, "the Magna Carta");
        assert_eq!(a, b);
        assert!(a >= 0.0 && a < 1.0);
    }
}
