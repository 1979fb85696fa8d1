/**
 * Hand-authored wrong answers for multiple choice.
 *
 * The automatic distractor tiers produce usable wrong answers, but for most questions
 * a curated set reads better. The raw table below is validated against the question
 * bank at startup: an entry that duplicates one of the question's acceptable answers
 * is dropped with a warning instead of ever reaching the choice screen. Hand-authored
 * data drifts when question content changes, so the check lives here and not in the
 * lookup path.
 *
 * Author:  Ian Fisher (iafisher@fastmail.com)
 * Version: August 2026
 */
use std::collections::HashMap;

use super::dataset::QuestionBank;

/// Curated wrong answers, keyed by question id. Every entry has at least three
/// options, all the same semantic type as the correct answer.
fn raw_wrong_answers(question_id: u32) -> Option<&'static [&'static str]> {
    let entries: &[&str] = match question_id {
        // Documents and foundational concepts.
        1 => &["the Declaration of Independence", "the Bill of Rights", "the Articles of Confederation"],
        2 => &["lists all federal laws", "outlines the court system", "establishes the presidency"],
        3 => &["In God We Trust", "E Pluribus Unum", "Out of Many, One"],
        4 => &["a law from Congress", "a presidential executive order", "a Supreme Court ruling"],
        5 => &["the Constitution", "the Magna Carta", "the Mayflower Compact"],

        // Rights, freedoms and concepts.
        6 => &["freedom of association", "right to travel", "right to an attorney"],
        7 => &["26", "28", "30"],
        8 => &["proclaimed our freedom", "established our government", "asserted our liberty"],
        9 => &["equality and justice", "security and prosperity", "property and wealth"],
        10 => &["You must practice a religion", "Government provides religion", "Religion is mandatory"],
        11 => &["communist economy", "socialist economy", "command economy"],
        12 => &["Some leaders are exempt", "The President makes the rules", "Citizens can ignore laws"],

        // Government branches and structure.
        13 => &["the Senate", "the House of Representatives", "the Supreme Court"],
        14 => &["judicial review", "the veto power", "the electoral college"],
        15 => &["the Vice President", "the Secretary of State", "the Speaker of the House"],
        16 => &["the Senate", "the House of Representatives", "the Supreme Court"],
        17 => &["the Senate and the Supreme Court", "Congress and the Cabinet", "the House and the courts"],
        18 => &["99", "101", "98"],
        19 => &["four", "eight", "two"],
        20 => &["Dianne Feinstein", "Chuck Schumer", "Lindsey Graham"],
        21 => &["434", "436", "400"],
        22 => &["four", "six", "eight"],
        23 => &["Alexandria Ocasio-Cortez", "Adam Schiff", "Maxine Waters"],
        24 => &["all voters in their state", "all people of their district", "all registered voters"],
        25 => &["state history", "geographic size", "economic importance"],
        26 => &["six", "eight", "two"],
        27 => &["December", "October", "January"],

        // Government officials and positions.
        28 => &["Barack Obama", "George W. Bush", "Bill Clinton"],
        29 => &["Mike Pence", "Tim Walz", "Dick Cheney"],
        30 => &["the Senate President", "the President Pro Tempore", "Congress"],
        31 => &["the Senate President", "the President Pro Tempore", "the Chief Justice"],
        32 => &["the Secretary of Defense", "the Attorney General", "the Vice President"],
        33 => &["the Vice President", "Congress", "the Supreme Court"],
        34 => &["the Vice President", "Congress", "the Senate"],
        35 => &["makes the laws", "enforces the laws", "interprets the laws"],
        36 => &["Supreme Court Justice and Senator", "Congress Member and Governor", "Mayor and County Judge"],
        37 => &["makes federal laws", "enforces the laws", "collects taxes"],
        38 => &["the Federal Appeals Court", "the Court of Appeals", "the District Court"],
        39 => &["eight", "11", "10"],
        40 => &["Samuel Alito", "Clarence Thomas", "Elena Kagan"],

        // Powers and political parties.
        41 => &["to regulate commerce within a state", "to provide police protection", "to approve zoning"],
        42 => &["to declare war", "to print money", "to make treaties"],
        43 => &["Rick Perry", "Ron DeSantis", "Gavin Newsom"],
        44 => &["Houston", "Denver", "Sacramento"],
        45 => &["Green and Libertarian", "Independent and Socialist", "Federalist and Whig"],
        46 => &["Green", "Libertarian", "Socialist"],
        47 => &["Paul Ryan", "John Boehner", "Newt Gingrich"],

        // Rights, responsibilities, voting.
        48 => &["You must own property", "You must be male", "You must speak English"],
        49 => &["own property", "express your opinion", "practice any religion"],
        50 => &["own property", "practice your religion", "get a job"],
        51 => &["vote in elections", "hold political office", "serve on a jury"],
        52 => &["the Constitution", "our leaders", "the President"],
        53 => &["support the President", "vote in every election", "join a political party"],
        54 => &["sixteen", "21", "25"],
        55 => &["serve in the military", "attend town meetings", "write letters"],
        56 => &["May 15", "March 15", "June 15"],
        57 => &["before age 18", "at age 21", "at age 25"],

        // Colonial period and founding fathers.
        58 => &["social equality", "military power", "trade routes"],
        59 => &["Africans", "Europeans", "Asians"],
        60 => &["Native Americans", "Europeans", "Asians"],
        61 => &["because they wanted more territory", "because of French influence", "because they lacked trade"],
        62 => &["Benjamin Franklin", "John Adams", "James Madison"],
        63 => &["January 1, 1775", "December 25, 1774", "March 4, 1777"],
        64 => &["Ohio, Indiana, Illinois", "Kentucky, Tennessee, Alabama", "Florida, Missouri, Louisiana"],
        65 => &["the Bill of Rights was written", "the Declaration was adopted", "the Articles were signed"],
        66 => &["1745", "1789", "1791"],
        67 => &["George Washington", "Thomas Jefferson", "Benjamin Franklin"],
        68 => &["diplomat", "inventor", "military leader"],
        69 => &["Benjamin Franklin", "Thomas Jefferson", "John Adams"],
        70 => &["James Madison", "Benjamin Franklin", "Thomas Jefferson"],

        // Wars and conflicts.
        71 => &["Florida Territory", "Oregon Territory", "Alaska Territory"],
        72 => &["World War I", "Korean War", "Vietnam War"],
        73 => &["World War I", "World War II", "the Korean War"],
        74 => &["economic competition", "westward expansion", "Northern aggression"],
        75 => &["defeated the Confederacy", "abolished slavery", "freed Northern slaves"],
        76 => &["freed all slaves immediately", "freed slaves in the Border States", "freed slaves in Northern states"],
        77 => &["advocated for education", "led a labor movement", "fought for racial equality"],
        78 => &["the Civil War", "the Mexican-American War", "the War of 1812"],
        79 => &["Theodore Roosevelt", "William McKinley", "William Taft"],
        80 => &["Harry Truman", "John F. Kennedy", "Lyndon Johnson"],
        81 => &["Japan and Italy", "Germany and Japan", "Germany and Italy"],
        82 => &["the Korean War", "the Vietnam War", "the Gulf War"],

        // Modern history and movements.
        83 => &["Socialism", "Fascism", "Democracy"],
        84 => &["women's suffrage", "labor rights", "environmental rights"],
        85 => &["fought for women's rights", "fought for labor rights", "advocated for integration"],
        86 => &["the stock market crashed", "an earthquake struck California", "a president was assassinated"],
        87 => &["Pawnee", "Osage", "Kiowa"],

        // Geography and symbols.
        88 => &["Rio Grande", "Colorado River", "Snake River"],
        89 => &["Atlantic Ocean", "Arctic Ocean", "Indian Ocean"],
        90 => &["Pacific Ocean", "Arctic Ocean", "Southern Ocean"],
        91 => &["Palau", "Marshall Islands", "Micronesia"],
        92 => &["Wisconsin", "Illinois", "California"],
        93 => &["Nevada", "Colorado", "Utah"],
        94 => &["Los Angeles", "Chicago", "Houston"],
        95 => &["Bedloe's Island", "Governors Island", "Randall's Island"],
        96 => &["because there are 13 columns", "because of 50 states", "because of 13 presidents"],
        97 => &["because of 50 presidents", "because there were 50 territories", "for 50 original colonies"],
        98 => &["America the Beautiful", "Battle Hymn of the Republic", "God Bless America"],
        99 => &["June 4", "August 4", "November 11"],
        100 => &["Valentine's Day", "Mother's Day", "Easter"],

        // Texas.
        101 => &["Greg Abbott", "Dan Patrick", "John Carter"],
        102 => &["Kay Granger", "Lloyd Doggett", "Marc Veasey"],
        103 => &["Houston", "Dallas", "San Antonio"],
        104 => &["1836", "1861", "1876"],
        105 => &["Brazos River", "Colorado River", "Trinity River"],

        _ => return None,
    };
    Some(entries)
}

/// The curation table after validation against the question bank.
#[derive(Debug)]
pub struct CurationTable {
    entries: HashMap<u32, Vec<String>>,
}

impl CurationTable {
    /// Build the table, dropping any entry that duplicates an acceptable answer of
    /// its question. Returns the table along with warnings describing dropped
    /// entries, so callers can surface the data-hygiene problem without failing.
    pub fn validated(bank: &QuestionBank) -> (CurationTable, Vec<String>) {
        let mut entries = HashMap::new();
        let mut warnings = Vec::new();

        for question in bank.questions().iter() {
            if let Some(raw) = raw_wrong_answers(question.id) {
                let mut kept = Vec::new();
                for wrong in raw.iter() {
                    if question.accepts(wrong) {
                        warnings.push(format!(
                            "curated answer {:?} for question {} duplicates an \
                             acceptable answer and was dropped",
                            wrong, question.id));
                    } else {
                        kept.push(String::from(*wrong));
                    }
                }
                entries.insert(question.id, kept);
            }
        }

        (CurationTable { entries }, warnings)
    }

    /// An empty table, for tests that exercise the automatic tiers.
    #[allow(dead_code)]
    pub fn empty() -> CurationTable {
        CurationTable { entries: HashMap::new() }
    }

    pub fn lookup(&self, question_id: u32) -> Option<&[String]> {
        self.entries.get(&question_id).map(|v| v.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::dataset::{Category, Question, QuestionBank};

    #[test]
    fn full_table_is_clean_against_the_bank() {
        let bank = QuestionBank::load().unwrap();
        let (table, warnings) = CurationTable::validated(&bank);

        assert_eq!(warnings.len(), 0, "curation drift: {:?}", warnings);
        for question in bank.questions().iter() {
            let entry = table.lookup(question.id)
                .unwrap_or_else(|| panic!("no curation for question {}", question.id));
            assert!(entry.len() >= 3);
        }
    }

    #[test]
    fn colliding_entries_are_dropped_with_a_warning() {
        // Question 5's curation deliberately includes "the Constitution"; a bank
        // where that is an acceptable answer must see it filtered out.
        let bank = QuestionBank::from_questions(vec![
            Question::new(5, "What is the supreme law of the land?",
                          Category::AmericanGovernment, &["the Constitution"]),
        ]).unwrap();

        let (table, warnings) = CurationTable::validated(&bank);
        assert_eq!(warnings.len(), 1);
        let entry = table.lookup(5).unwrap();
        assert_eq!(entry, &["the Magna Carta".to_string(),
                            "the Mayflower Compact".to_string()]);
    }
}
