/**
 * Tolerant grading of free-text answers.
 *
 * Both the user's response and the acceptable answers pass through the same
 * normalization (lowercasing, Unicode normalization, punctuation and abbreviation
 * folding, month names and number words to digits), then a fuzzy word-set comparison
 * decides the match. The matcher is deterministic, and adding exact-match text to a
 * correct response never makes it incorrect.
 *
 * Author:  Ian Fisher (iafisher@fastmail.com)
 * Version: June 2026
 */
use unicode_normalization::UnicodeNormalization;

use super::dataset::Question;

/// Words too common to carry meaning in a comparison.
const IGNORE_WORDS: &[&str] = &["the", "a", "an", "and", "or", "is", "of", "in", "by"];

/// Share of an answer's content words the response must cover.
const PARTIAL_MATCH_THRESHOLD: f64 = 0.7;

/// Return `true` if `guess` matches any of the question's acceptable answers.
pub fn is_correct(guess: &str, question: &Question) -> bool {
    let guess = normalize(guess);
    question.answers.iter().any(|answer| fuzzy_match(&guess, &normalize(answer)))
}

/// Canonicalize an answer string for comparison.
pub fn normalize(text: &str) -> String {
    let text: String = text.to_lowercase().nfc().collect();
    let text: String = text.chars()
        .map(|c| if c == '.' || c == ',' || c == ';' || c == ':' || c == '-' {
            ' '
        } else {
            c
        })
        .collect();

    text.split_whitespace()
        .map(normalize_token)
        .collect::<Vec<String>>()
        .join(" ")
}

fn normalize_token(token: &str) -> String {
    if let Some(stripped) = strip_ordinal_suffix(token) {
        return String::from(stripped);
    }
    if let Some(expanded) = expand_abbreviation(token) {
        return String::from(expanded);
    }
    if let Some(month) = month_number(token) {
        return String::from(month);
    }
    if let Some(number) = number_word(token) {
        return String::from(number);
    }
    String::from(token)
}

/// "15th" -> "15", "21st" -> "21".
fn strip_ordinal_suffix(token: &str) -> Option<&str> {
    for suffix in &["st", "nd", "rd", "th"] {
        if token.ends_with(suffix) {
            let digits = &token[..token.len() - suffix.len()];
            if digits.len() > 0 && digits.chars().all(|c| c.is_ascii_digit()) {
                return Some(digits);
            }
        }
    }
    None
}

fn expand_abbreviation(token: &str) -> Option<&'static str> {
    let expanded = match token {
        "ct" => "court",
        "rep" => "representative",
        "sens" => "senators",
        "sen" => "senator",
        "pres" => "president",
        "amb" => "ambassador",
        "sec" => "secretary",
        "us" => "united states",
        "dept" => "department",
        "gov" => "government",
        "approx" => "approximately",
        "sr" => "senior",
        "jr" => "junior",
        "ave" => "avenue",
        "st" => "saint",
        _ => return None,
    };
    Some(expanded)
}

fn month_number(token: &str) -> Option<&'static str> {
    let number = match token {
        "january" | "jan" => "1",
        "february" | "feb" => "2",
        "march" | "mar" => "3",
        "april" | "apr" => "4",
        "may" => "5",
        "june" | "jun" => "6",
        "july" | "jul" => "7",
        "august" | "aug" => "8",
        "september" | "sept" | "sep" => "9",
        "october" | "oct" => "10",
        "november" | "nov" => "11",
        "december" | "dec" => "12",
        _ => return None,
    };
    Some(number)
}

fn number_word(token: &str) -> Option<&'static str> {
    let number = match token {
        "zero" => "0",
        "one" => "1",
        "two" => "2",
        "three" => "3",
        "four" => "4",
        "five" => "5",
        "six" => "6",
        "seven" => "7",
        "eight" => "8",
        "nine" => "9",
        "ten" => "10",
        "eleven" => "11",
        "twelve" => "12",
        "thirteen" => "13",
        "fourteen" => "14",
        "fifteen" => "15",
        "sixteen" => "16",
        "seventeen" => "17",
        "eighteen" => "18",
        "nineteen" => "19",
        "twenty" => "20",
        "thirty" => "30",
        "forty" => "40",
        "fifty" => "50",
        "hundred" => "100",
        "thousand" => "1000",
        _ => return None,
    };
    Some(number)
}

/// Compare two normalized strings, allowing word-order variation and partial
/// coverage of the expected answer's content words.
pub fn fuzzy_match(user: &str, expected: &str) -> bool {
    if user == expected {
        return true;
    }

    let user_words: Vec<&str> = content_words(user);
    let expected_words: Vec<&str> = content_words(expected);

    if user_words == expected_words {
        return true;
    }

    if expected_words.len() > 0 && user_words.len() > 0 {
        let matched = expected_words.iter()
            .filter(|word| {
                user_words.iter().any(|user_word| {
                    user_word.contains(*word) || word.contains(user_word)
                })
            })
            .count();

        if matched == expected_words.len() {
            return true;
        }
        if matched as f64 >= expected_words.len() as f64 * PARTIAL_MATCH_THRESHOLD {
            return true;
        }
    }

    // A single-word response matches if it is one of the expected content words
    // exactly ("Washington" for "George Washington").
    if user_words.len() == 1 {
        return expected_words.iter().any(|word| *word == user_words[0]);
    }

    false
}

fn content_words(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .filter(|word| !IGNORE_WORDS.contains(word))
        .collect()
}
