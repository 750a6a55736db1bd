pub mod loader;
pub mod trie;

use self::loader::{build_trie, read_words};
use self::trie::{ScoreTrie, ROOT};
use crate::board::Boggler;
use crate::error::WfResult;
use crate::geometry::build_adjacency;
use std::path::Path;

/// Every word credited by one `solve` invocation (in discovery order, with
/// its point value) and the total score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreOutcome {
    pub total: u32,
    pub words: Vec<(String, u32)>,
}

/// Trie-guided word search over one board geometry. The dictionary and
/// adjacency lists are immutable after construction, so a solver is shared
/// freely across worker threads behind an `Arc`.
#[derive(Debug)]
pub struct Solver {
    rows: usize,
    cols: usize,
    adjacency: Vec<Vec<usize>>,
    dictionary: ScoreTrie,
}

impl Solver {
    pub fn build(rows: usize, cols: usize, words: &[String]) -> Self {
        Self::with_dictionary(rows, cols, build_trie(words, rows, cols))
    }

    pub fn from_dictionary_file<P: AsRef<Path>>(
        rows: usize,
        cols: usize,
        path: P,
    ) -> WfResult<Self> {
        let words = read_words(path)?;
        Ok(Self::build(rows, cols, &words))
    }

    pub fn with_dictionary(rows: usize, cols: usize, dictionary: ScoreTrie) -> Self {
        Self {
            rows,
            cols,
            adjacency: build_adjacency(rows, cols),
            dictionary,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    pub fn dictionary(&self) -> &ScoreTrie {
        &self.dictionary
    }

    /// Total score alone; the hot path for the search driver's inner loop.
    pub fn score<B: Boggler>(&self, board: &B) -> u32 {
        self.solve(board).total
    }

    /// Walks every simple adjacent-cell path that stays a dictionary prefix,
    /// crediting each word the first time it is completed. Deterministic for
    /// a fixed board and dictionary: starting cells go in row-major order,
    /// neighbors in adjacency-list order.
    pub fn solve<B: Boggler>(&self, board: &B) -> ScoreOutcome {
        debug_assert_eq!(board.rows(), self.rows);
        debug_assert_eq!(board.cols(), self.cols);

        let mut visited = vec![false; self.adjacency.len()];
        let mut found = ScoreTrie::new();
        let mut buf = String::new();
        let mut words = Vec::new();
        let mut total = 0;
        for start in 0..self.adjacency.len() {
            total += self.dfs(board, ROOT, start, &mut visited, &mut found, &mut buf, &mut words);
        }
        ScoreOutcome { total, words }
    }

    #[allow(clippy::too_many_arguments)]
    fn dfs<B: Boggler>(
        &self,
        board: &B,
        node: usize,
        p: usize,
        visited: &mut [bool],
        found: &mut ScoreTrie,
        buf: &mut String,
        words: &mut Vec<(String, u32)>,
    ) -> u32 {
        if visited[p] {
            return 0;
        }
        let letter = board.letter(p);

        // The pruning step: a path that is no longer a dictionary prefix
        // dies here, before the cell is even marked.
        let Some(subtrie) = self.dictionary.step(node, letter) else {
            return 0;
        };

        visited[p] = true;
        buf.push(letter as char);
        if letter == b'Q' {
            buf.push('U');
        }

        let mut score = 0;
        let value = self.dictionary.value_at(subtrie);
        if value > 0 && !found.has(buf) {
            found.insert(buf, value);
            words.push((buf.clone(), value));
            score += value;
        }

        for &q in &self.adjacency[p] {
            score += self.dfs(board, subtrie, q, visited, found, buf, words);
        }

        visited[p] = false;
        buf.pop();
        if letter == b'Q' {
            buf.pop();
        }
        score
    }
}
