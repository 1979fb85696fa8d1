/**
 * Classification of answer strings into semantic types.
 *
 * The distractor generator uses these types to find wrong answers that look like the
 * right one (a number for a number, a city for a city). Classification is ordered
 * pattern matching: the first matching rule wins, and the rule order below is part of
 * the contract ("Supreme Court" must classify as a document-like term, not a concept).
 *
 * Author:  Ian Fisher (iafisher@fastmail.com)
 * Version: July 2026
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerType {
    Number,
    Duration,
    Water,
    State,
    City,
    Title,
    Document,
    Function,
    Tribe,
    Concept,
}

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
    "seventeen", "eighteen", "nineteen", "twenty", "thirty", "forty", "fifty",
    "hundred", "thousand",
];

const DURATION_WORDS: &[&str] = &[
    "year", "years", "month", "months", "week", "weeks", "day", "days", "hour",
    "hours", "minute", "minutes", "term", "terms",
];

const WATER_WORDS: &[&str] = &[
    "river", "ocean", "lake", "sea", "beach", "gulf", "strait", "canal",
];

const STATE_NOUNS: &[&str] = &["state", "territory", "district", "county", "region"];

const STATE_NAMES: &[&str] = &[
    "alabama", "alaska", "arizona", "arkansas", "california", "colorado",
    "connecticut", "delaware", "florida", "georgia", "hawaii", "idaho", "illinois",
    "indiana", "iowa", "kansas", "kentucky", "louisiana", "maine", "maryland",
    "massachusetts", "michigan", "minnesota", "mississippi", "missouri", "montana",
    "nebraska", "nevada", "new hampshire", "new jersey", "new mexico", "new york",
    "north carolina", "north dakota", "ohio", "oklahoma", "oregon", "pennsylvania",
    "rhode island", "south carolina", "south dakota", "tennessee", "texas", "utah",
    "vermont", "virginia", "washington", "west virginia", "wisconsin", "wyoming",
];

/// Government terms that rule out the proper-noun-shaped city heuristic.
const GOVERNMENT_WORDS: &[&str] = &[
    "amendment", "congress", "court", "bill", "law", "act", "declaration",
    "constitution", "republic", "union", "nation", "government", "senate", "house",
    "branch",
];

const FUNCTION_VERBS: &[&str] = &[
    "reviews", "makes", "defines", "protects", "resolves", "explains", "signs",
    "vetoes", "appoints", "advises", "enforces", "enacts",
];

const FUNCTION_NOUNS: &[&str] = &[
    "laws", "rights", "government", "powers", "treaties", "bills", "decisions",
    "disputes",
];

const DOCUMENT_WORDS: &[&str] = &[
    "bill", "act", "law", "amendment", "constitution", "declaration", "charter",
    "treaty", "document", "proclamation", "congress", "court", "branch", "senate",
    "house", "republic", "union",
];

const TITLE_WORDS: &[&str] = &[
    "president", "senator", "representative", "judge", "justice", "governor",
    "mayor", "ambassador", "general", "secretary", "attorney", "speaker", "chief",
];

const TRIBE_NAMES: &[&str] = &[
    "apache", "cherokee", "navajo", "sioux", "lakota", "crow", "choctaw", "seminole",
    "mohegan", "oneida", "huron", "shawnee", "blackfeet", "arawak", "chippewa",
];

/// Categorize an answer string. Total: always returns a value, with `Concept` as the
/// default for anything the more specific rules don't catch.
pub fn classify(answer: &str) -> AnswerType {
    let a = answer.trim().to_lowercase();

    // Numbers, including number words.
    if a.len() > 0 && a.chars().all(|c| c.is_ascii_digit()) {
        return AnswerType::Number;
    }
    if NUMBER_WORDS.contains(&a.as_str()) {
        return AnswerType::Number;
    }

    // Time durations (years, terms, etc).
    if contains_word(&a, DURATION_WORDS) {
        return AnswerType::Duration;
    }

    // Rivers and other water features.
    if contains_word(&a, WATER_WORDS) {
        return AnswerType::Water;
    }

    // U.S. states and territories.
    if contains_word(&a, STATE_NOUNS) || STATE_NAMES.contains(&a.as_str()) {
        return AnswerType::State;
    }

    // Cities and capitals: one or two capitalized words that aren't government terms.
    if proper_noun_shape(answer.trim()) && !contains_word(&a, GOVERNMENT_WORDS) {
        return AnswerType::City;
    }

    // Government actions and functions (what something does).
    if contains_word(&a, FUNCTION_VERBS) || contains_word(&a, FUNCTION_NOUNS) {
        return AnswerType::Function;
    }

    // Government documents and institutions.
    if contains_word(&a, DOCUMENT_WORDS) {
        return AnswerType::Document;
    }

    // Government roles and titles.
    if contains_word(&a, TITLE_WORDS) {
        return AnswerType::Title;
    }

    // Native American tribes.
    if contains_word(&a, TRIBE_NAMES) {
        return AnswerType::Tribe;
    }

    AnswerType::Concept
}

/// Types that are close enough to substitute for one another when too few exact
/// matches exist: geography, quantity and government clusters. Types without an entry
/// map to themselves.
pub fn related_types(answer_type: AnswerType) -> &'static [AnswerType] {
    match answer_type {
        AnswerType::City => &[AnswerType::State, AnswerType::Water, AnswerType::City],
        AnswerType::State => &[AnswerType::City, AnswerType::State, AnswerType::Water],
        AnswerType::Water => &[AnswerType::State, AnswerType::City, AnswerType::Water],
        AnswerType::Number => &[AnswerType::Duration, AnswerType::Number],
        AnswerType::Duration => &[AnswerType::Number, AnswerType::Duration],
        AnswerType::Title => {
            &[AnswerType::Document, AnswerType::Title, AnswerType::Function]
        },
        AnswerType::Document => &[AnswerType::Title, AnswerType::Document],
        AnswerType::Function => &[AnswerType::Title, AnswerType::Function],
        AnswerType::Tribe => &[AnswerType::City, AnswerType::State],
        AnswerType::Concept => &[AnswerType::Concept],
    }
}

/// Return `true` if any whole word of `text` appears in `words`. `text` must already
/// be lowercased.
fn contains_word(text: &str, words: &[&str]) -> bool {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .any(|token| token.len() > 0 && words.contains(&token))
}

/// Return `true` if `text` is one or two words, each an initial capital followed by
/// lowercase letters.
fn proper_noun_shape(text: &str) -> bool {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() == 0 || words.len() > 2 {
        return false;
    }
    words.iter().all(|word| {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) => {
                first.is_ascii_uppercase()
                    && chars.clone().count() > 0
                    && chars.all(|c| c.is_ascii_lowercase())
            },
            None => false,
        }
    })
}
