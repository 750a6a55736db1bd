use crate::error::{WfResult, WordForgeError};
use crate::geometry::{score_table, MIN_WORD_LENGTH};
use crate::solver::trie::ScoreTrie;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Normalized adjacent-letter-pair frequencies over the dictionary.
pub type BigramTable = [[f64; 26]; 26];

/// Reads a newline-delimited word list, normalized to uppercase. Entries
/// containing anything outside A-Z (apostrophes, digits, accents) are
/// skipped rather than rejected.
pub fn read_words<P: AsRef<Path>>(path: P) -> WfResult<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        WordForgeError::Dictionary(format!("cannot open {}: {}", path.display(), e))
    })?;

    let mut words = Vec::new();
    let mut skipped = 0usize;
    for line in BufReader::new(file).lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        let upper = word.to_ascii_uppercase();
        if upper.bytes().all(|b| b.is_ascii_uppercase()) {
            words.push(upper);
        } else {
            skipped += 1;
        }
    }

    if words.is_empty() {
        return Err(WordForgeError::Dictionary(format!(
            "{} contains no usable words",
            path.display()
        )));
    }

    info!("Loaded {} words from {}", words.len(), path.display());
    if skipped > 0 {
        debug!("Skipped {} entries with non-alphabetic characters", skipped);
    }
    Ok(words)
}

/// Builds the score dictionary for a rows x cols board. Words outside the
/// 3..=cells length window are dropped; the rest carry their length's point
/// value.
pub fn build_trie(words: &[String], rows: usize, cols: usize) -> ScoreTrie {
    let max_len = rows * cols;
    let table = score_table(rows, cols);
    let mut trie = ScoreTrie::new();
    let mut kept = 0usize;
    for word in words {
        let len = word.len();
        if (MIN_WORD_LENGTH..=max_len).contains(&len) {
            trie.insert(word, table[len]);
            kept += 1;
        }
    }
    debug!("Dictionary trie holds {} words in {} nodes", kept, trie.node_count());
    trie
}

/// Counts adjacent letter pairs across the usable dictionary, symmetrically
/// ("AB" feeds both [A][B] and [B][A]), normalized by the total pair count.
pub fn bigram_table(words: &[String], rows: usize, cols: usize) -> BigramTable {
    let max_len = rows * cols;
    let mut counts = [[0u64; 26]; 26];
    let mut total = 0u64;
    for word in words {
        if word.len() < MIN_WORD_LENGTH || word.len() > max_len {
            continue;
        }
        for pair in word.as_bytes().windows(2) {
            let a = (pair[0] - b'A') as usize;
            let b = (pair[1] - b'A') as usize;
            counts[a][b] += 1;
            counts[b][a] += 1;
            total += 1;
        }
    }

    let mut table = [[0.0; 26]; 26];
    if total > 0 {
        for (freq_row, count_row) in table.iter_mut().zip(counts.iter()) {
            for (freq, &count) in freq_row.iter_mut().zip(count_row.iter()) {
                *freq = count as f64 / total as f64;
            }
        }
    }
    table
}
