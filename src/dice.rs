use crate::error::{WfResult, WordForgeError};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};

pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Relative frequency of each letter A-Z in English text.
pub const ENGLISH_FREQUENCIES: [f64; 26] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12703, 0.02228, 0.02015, 0.06094, 0.06966, 0.00153,
    0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056,
    0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

// The 16 Hasbro dice, 1992 edition.
const CLASSIC_1992: [&str; 16] = [
    "LRYTTE", "VTHRWE", "EGHWNE", "SEOTIS", "ANAEEG", "IDSYTT", "OATTOW", "MTOICU", "AFPKFS",
    "XLDERI", "HCPOAS", "ENSIEU", "YLDEVR", "ZNRNHL", "NMIQHU", "OBBAOJ",
];

// The 16 Hasbro dice, 1983 edition.
const CLASSIC_1983: [&str; 16] = [
    "AACIOT", "ABILTY", "ABJMOQ", "ACDEMP", "ACELRS", "ADENVZ", "AHMORS", "BIFORX", "DENOSW",
    "DKNOTU", "EEFHIY", "EGINTV", "EGKLUY", "EHINPS", "ELPSTU", "GILRUW",
];

// The 25 Boggle Master / Boggle Deluxe dice.
const MASTER: [&str; 25] = [
    "AAAFRS", "AAEEEE", "AAFIRS", "ADENNN", "AEEEEM", "AEEGMU", "AEGMNN", "AFIRSY", "BJKQXZ",
    "CCNSTW", "CEIILT", "CEILPT", "CEIPST", "DDLNOR", "DHHLOR", "DHHNOT", "DHLNOR", "EIIITT",
    "EMOTTT", "ENSSSU", "FIPRSY", "GORRVW", "HIPRRY", "NOOTUW", "OOOTTU",
];

// The 25 Big Boggle dice.
const BIG: [&str; 25] = [
    "AAAFRS", "AAEEEE", "AAFIRS", "ADENNN", "AEEEEM", "AEEGMU", "AEGMNN", "AFIRSY", "BJKQXZ",
    "CCENST", "CEIILT", "CEILPT", "CEIPST", "DDHNOT", "DHHLOR", "DHLNOR", "DHLNOR", "EIIITT",
    "EMOTTT", "ENSSSU", "FIPRSY", "GORRVW", "IPRRRY", "NOOTUW", "OOOTTU",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, clap::ValueEnum)]
#[strum(serialize_all = "kebab-case")]
pub enum DiceSetKind {
    #[strum(serialize = "classic-1992")]
    #[value(name = "classic-1992")]
    Classic1992,
    #[strum(serialize = "classic-1983")]
    #[value(name = "classic-1983")]
    Classic1983,
    Master,
    Big,
}

/// An immutable set of dice covering one board geometry. Shared read-only
/// across every board rolled from it.
#[derive(Debug, Clone, Deserialize)]
pub struct DiceSet {
    pub name: String,
    pub rows: usize,
    pub cols: usize,
    pub dice: Vec<String>,
}

impl DiceSet {
    pub fn builtin(kind: DiceSetKind) -> Self {
        let (rows, cols, dice): (usize, usize, &[&str]) = match kind {
            DiceSetKind::Classic1992 => (4, 4, &CLASSIC_1992),
            DiceSetKind::Classic1983 => (4, 4, &CLASSIC_1983),
            DiceSetKind::Master => (5, 5, &MASTER),
            DiceSetKind::Big => (5, 5, &BIG),
        };
        Self {
            name: kind.to_string(),
            rows,
            cols,
            dice: dice.iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> WfResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut set: DiceSet = serde_json::from_str(&content)?;
        for die in &mut set.dice {
            *die = die.to_ascii_uppercase();
        }
        set.validate()
            .map_err(|e| WordForgeError::Validation(format!("{}: {}", path.display(), e)))?;
        Ok(set)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.rows == 0 || self.cols == 0 {
            return Err("rows and cols must be positive".to_string());
        }
        if self.dice.len() != self.rows * self.cols {
            return Err(format!(
                "{} dice cannot fill a {}x{} board (need {})",
                self.dice.len(),
                self.rows,
                self.cols,
                self.rows * self.cols
            ));
        }
        for (i, die) in self.dice.iter().enumerate() {
            if die.is_empty() {
                return Err(format!("die {} has no faces", i));
            }
            if let Some(b) = die.bytes().find(|b| !b.is_ascii_uppercase()) {
                return Err(format!("die {} carries invalid face '{}'", i, b as char));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }
}

/// Samples an index from a relative weight distribution. Weights need not
/// sum to 1 but must be non-negative.
pub fn weighted_index(rng: &mut fastrand::Rng, weights: &[f64]) -> usize {
    let sum: f64 = weights.iter().sum();
    let r = rng.f64() * sum;
    let mut acc = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        acc += w;
        if acc > r {
            return i;
        }
    }
    weights.len() - 1
}
