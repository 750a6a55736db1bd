use crate::dice::{weighted_index, DiceSet, ALPHABET, ENGLISH_FREQUENCIES};
use crate::error::{WfResult, WordForgeError};
use fastrand::Rng;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Letter-at-position capability shared by both board representations.
/// The word-search engine depends on nothing else, so it never cares
/// whether letters are stored or derived from dice.
pub trait Boggler {
    fn rows(&self) -> usize;
    fn cols(&self) -> usize;

    /// Letter at linear index `k = row * cols + col`. `k` is caller-validated
    /// against `cells()`.
    fn letter(&self, k: usize) -> u8;

    fn cells(&self) -> usize {
        self.rows() * self.cols()
    }

    /// Board letters in row-major order as display tokens ('Q' renders as
    /// "Qu").
    fn letters_linear(&self) -> Vec<String> {
        (0..self.cells()).map(|k| letter_token(self.letter(k))).collect()
    }
}

pub fn letter_token(letter: u8) -> String {
    if letter == b'Q' {
        "Qu".to_string()
    } else {
        (letter as char).to_string()
    }
}

/// Serializes a board to the on-disk text format: a `rows cols` header, then
/// one line per row of column-aligned letter tokens.
pub fn board_text<B: Boggler>(board: &B) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", board.rows(), board.cols());
    for r in 0..board.rows() {
        for c in 0..board.cols() {
            let letter = board.letter(r * board.cols() + c);
            out.push(letter as char);
            if letter == b'Q' {
                out.push_str("u ");
            } else {
                out.push_str("  ");
            }
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}

/// A board that owns its letters outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBoard {
    rows: usize,
    cols: usize,
    letters: Vec<u8>,
}

impl LetterBoard {
    /// Parses the text format. Tokens are separated by runs of whitespace
    /// and matched case-insensitively; "QU" is a synonym for 'Q'.
    pub fn parse(text: &str) -> WfResult<Self> {
        let mut tokens = text.split_whitespace();
        let rows = parse_dim(tokens.next(), "rows")?;
        let cols = parse_dim(tokens.next(), "cols")?;
        if rows == 0 || cols == 0 {
            return Err(WordForgeError::BoardFormat(
                "board dimensions must be positive".to_string(),
            ));
        }
        let mut letters = Vec::with_capacity(rows * cols);
        for k in 0..rows * cols {
            let token = tokens.next().ok_or_else(|| {
                WordForgeError::BoardFormat(format!(
                    "expected {} letters, found only {}",
                    rows * cols,
                    k
                ))
            })?;
            letters.push(parse_letter(token)?);
        }
        Ok(Self { rows, cols, letters })
    }

    pub fn read_file<P: AsRef<Path>>(path: P) -> WfResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Self::parse(&text).map_err(|e| match e {
            WordForgeError::BoardFormat(msg) => {
                WordForgeError::BoardFormat(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Rebuilds a board from the linear token list used in improvement
    /// records.
    pub fn from_tokens(rows: usize, cols: usize, tokens: &[String]) -> WfResult<Self> {
        if tokens.len() != rows * cols {
            return Err(WordForgeError::BoardFormat(format!(
                "{} tokens cannot fill a {}x{} board",
                tokens.len(),
                rows,
                cols
            )));
        }
        let mut letters = Vec::with_capacity(tokens.len());
        for token in tokens {
            letters.push(parse_letter(token)?);
        }
        Ok(Self { rows, cols, letters })
    }

    /// Builds a board from a 2-D letter array, rejecting ragged rows and
    /// anything outside A-Z.
    pub fn from_rows(rows: &[Vec<u8>]) -> WfResult<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(WordForgeError::Validation("board array is empty".to_string()));
        }
        let cols = rows[0].len();
        let mut letters = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(WordForgeError::Validation("board array is ragged".to_string()));
            }
            for &b in row {
                if !b.is_ascii_uppercase() {
                    return Err(WordForgeError::Validation(format!(
                        "invalid letter '{}'",
                        b as char
                    )));
                }
                letters.push(b);
            }
        }
        Ok(Self { rows: rows.len(), cols, letters })
    }

    /// Rolls a rows x cols board with letters drawn from English letter
    /// frequencies.
    pub fn random(rows: usize, cols: usize, rng: &mut Rng) -> Self {
        let letters = (0..rows * cols)
            .map(|_| ALPHABET[weighted_index(rng, &ENGLISH_FREQUENCIES)])
            .collect();
        Self { rows, cols, letters }
    }
}

impl Boggler for LetterBoard {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn letter(&self, k: usize) -> u8 {
        self.letters[k]
    }
}

fn parse_dim(token: Option<&str>, what: &str) -> WfResult<usize> {
    let token = token
        .ok_or_else(|| WordForgeError::BoardFormat(format!("missing {} in header", what)))?;
    token.parse::<usize>().map_err(|_| {
        WordForgeError::BoardFormat(format!("{} header '{}' is not an integer", what, token))
    })
}

fn parse_letter(token: &str) -> WfResult<u8> {
    let upper = token.to_ascii_uppercase();
    if upper == "QU" {
        return Ok(b'Q');
    }
    match upper.as_bytes() {
        [b] if b.is_ascii_uppercase() => Ok(*b),
        _ => Err(WordForgeError::BoardFormat(format!(
            "invalid letter token '{}'",
            token
        ))),
    }
}

/// A board whose letters are derived: each cell holds a die identity and the
/// currently rolled face. Re-rolling a subset of cells touches only those
/// two arrays, so candidate mutations clone and roll back cheaply.
#[derive(Debug, Clone)]
pub struct DiceBoard {
    dice: Arc<DiceSet>,
    assignment: Vec<usize>,
    faces: Vec<u8>,
}

impl DiceBoard {
    /// Shuffle-and-roll constructor: a uniformly random permutation of dice
    /// across cells and a uniformly random face per cell.
    pub fn roll(dice: Arc<DiceSet>, rng: &mut Rng) -> Self {
        let mut assignment: Vec<usize> = (0..dice.len()).collect();
        rng.shuffle(&mut assignment);
        let faces = assignment
            .iter()
            .map(|&d| rng.u8(0..dice.dice[d].len() as u8))
            .collect();
        Self { dice, assignment, faces }
    }

    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    pub fn die_at(&self, k: usize) -> usize {
        self.assignment[k]
    }

    pub fn face_at(&self, k: usize) -> u8 {
        self.faces[k]
    }

    pub(crate) fn set_die(&mut self, k: usize, die: usize, face: u8) {
        self.assignment[k] = die;
        self.faces[k] = face;
    }
}

impl Boggler for DiceBoard {
    fn rows(&self) -> usize {
        self.dice.rows
    }

    fn cols(&self) -> usize {
        self.dice.cols
    }

    fn letter(&self, k: usize) -> u8 {
        self.dice.dice[self.assignment[k]].as_bytes()[self.faces[k] as usize]
    }
}
