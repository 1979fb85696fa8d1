/**
 * Reading and writing per-question progress in the filesystem.
 *
 * Progress is a JSON map from question id to `{asked, correct}` counters, stored in
 * the application's data directory. Load failures are recovered by starting from
 * all-zero progress with a warning; they never block practice.
 *
 * Author:  Ian Fisher (iafisher@fastmail.com)
 * Version: July 2026
 */
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::common::{QuizError, Result};
use super::dataset::QuestionBank;

/// How often a question has been asked and answered correctly.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressRecord {
    pub asked: u32,
    pub correct: u32,
}

impl ProgressRecord {
    /// Record one graded answer.
    pub fn record(&mut self, correct: bool) {
        self.asked += 1;
        if correct {
            self.correct += 1;
        }
    }

    pub fn accuracy(&self) -> f64 {
        if self.asked == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.asked)
        }
    }
}

pub type ProgressMap = BTreeMap<u32, ProgressRecord>;

/// The on-disk representation of the progress map.
#[derive(Serialize, Deserialize, Debug)]
struct ProgressFile {
    saved_at: chrono::DateTime<chrono::Utc>,
    records: ProgressMap,
}

/// A fresh all-zero progress map covering every question in the bank.
pub fn fresh_progress(bank: &QuestionBank) -> ProgressMap {
    bank.questions().iter()
        .map(|q| (q.id, ProgressRecord::default()))
        .collect()
}

/// Load stored progress, or fall back to all-zero progress. The second element
/// lists warnings about recovered failures; an empty list means a clean load.
///
/// Stored progress whose id set doesn't match the bank (for example after the bank
/// grew) is discarded rather than patched, so the coverage guarantee starts over
/// from a consistent state.
pub fn load_progress(bank: &QuestionBank) -> (ProgressMap, Vec<String>) {
    let path = get_progress_path();
    let data = match fs::read_to_string(&path) {
        Ok(data) => data,
        Err(_) => {
            // Nothing stored yet is the normal first-run case, not a failure.
            return (fresh_progress(bank), Vec::new());
        },
    };

    let file: ProgressFile = match serde_json::from_str(&data) {
        Ok(file) => file,
        Err(err) => {
            return (fresh_progress(bank), vec![format!(
                "stored progress could not be read ({}); starting over", err)]);
        },
    };

    let expected: HashSet<u32> = bank.questions().iter().map(|q| q.id).collect();
    let stored: HashSet<u32> = file.records.keys().cloned().collect();
    if stored != expected {
        return (fresh_progress(bank), vec![String::from(
            "stored progress does not match the question bank; starting over")]);
    }

    for (id, record) in file.records.iter() {
        if record.correct > record.asked {
            return (fresh_progress(bank), vec![format!(
                "stored progress for question {} is inconsistent; starting over", id)]);
        }
    }

    (file.records, Vec::new())
}

/// Save the progress map, creating the application directory if necessary.
pub fn save_progress(records: &ProgressMap) -> Result<()> {
    require_app_dir_path()?;

    let file = ProgressFile {
        saved_at: chrono::Utc::now(),
        records: records.clone(),
    };
    let serialized = serde_json::to_string_pretty(&file).map_err(QuizError::Json)?;

    let path = get_progress_path();
    fs::write(&path, serialized)
        .or(Err(QuizError::CannotWriteToFile(path.clone())))?;
    Ok(())
}

/// Delete stored progress, if any.
pub fn delete_progress() -> Result<()> {
    let path = get_progress_path();
    if path.exists() {
        fs::remove_file(&path).map_err(QuizError::Io)?;
    }
    Ok(())
}

/// Return the path to the file where progress is stored.
pub fn get_progress_path() -> PathBuf {
    let mut path = get_app_dir_path();
    path.push("progress.json");
    path
}

/// Return the path to the application directory.
fn get_app_dir_path() -> PathBuf {
    let mut dirpath = dirs::data_dir().unwrap();
    dirpath.push("civics-drill");
    dirpath
}

/// Return the path to the application directory, creating it if it doesn't exist.
fn require_app_dir_path() -> Result<PathBuf> {
    let dirpath = get_app_dir_path();
    if !dirpath.as_path().exists() {
        fs::create_dir_all(&dirpath).or(Err(QuizError::CannotMakeAppDir))?;
    }
    Ok(dirpath)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_answers_keeps_the_invariant() {
        let mut record = ProgressRecord::default();
        record.record(true);
        record.record(false);
        record.record(true);

        assert_eq!(record.asked, 3);
        assert_eq!(record.correct, 2);
        assert!(record.correct <= record.asked);
        assert!((record.accuracy() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn progress_round_trips_through_json() {
        let mut records = ProgressMap::new();
        records.insert(1, ProgressRecord { asked: 10, correct: 2 });
        records.insert(2, ProgressRecord { asked: 0, correct: 0 });

        let file = ProgressFile { saved_at: chrono::Utc::now(), records };
        let serialized = serde_json::to_string(&file).unwrap();
        let restored: ProgressFile = serde_json::from_str(&serialized).unwrap();

        assert_eq!(restored.records, file.records);
        let twice = serde_json::to_string(&restored).unwrap();
        assert_eq!(serialized, twice);
    }
}
