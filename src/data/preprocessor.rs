// ============================================================
// Layer 4 — Text Normalizer
// ============================================================
// Cleans every free-text field before it is tagged.
//
// Source JSON often contains:
//   - the same Arabic letter+diacritic written precomposed in one
//     file and decomposed in another
//   - non-breaking spaces, tabs and newlines from copy-pasting
//   - runs of spaces from indentation
//
// Steps (applied in order):
//   1. Unicode decomposition (NFD by default, NFKD selectable)
//   2. Every run of Unicode whitespace becomes one plain space
//   3. Leading/trailing whitespace is trimmed
//
// normalize(normalize(x)) == normalize(x) for every input.
//
// Reference: Unicode Standard Annex #15 (Normalization Forms)
//            Rust Book §8 (Strings in Rust)

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Which decomposition the normalizer applies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnicodeForm {
    /// Canonical decomposition
    #[default]
    Nfd,
    /// Compatibility decomposition; also folds presentation forms
    /// and ligatures such as U+FDFA into their letters
    Nfkd,
}

impl FromStr for UnicodeForm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nfd"  => Ok(UnicodeForm::Nfd),
            "nfkd" => Ok(UnicodeForm::Nfkd),
            other  => Err(format!("unknown unicode form '{other}' (expected nfd or nfkd)")),
        }
    }
}

impl fmt::Display for UnicodeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnicodeForm::Nfd  => "nfd",
            UnicodeForm::Nfkd => "nfkd",
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer {
    form: UnicodeForm,
}

impl Normalizer {
    pub fn new(form: UnicodeForm) -> Self {
        Self { form }
    }

    /// Decompose, collapse whitespace runs to one space, trim.
    pub fn normalize(&self, text: &str) -> String {
        let decomposed: String = match self.form {
            UnicodeForm::Nfd  => text.nfd().collect(),
            UnicodeForm::Nfkd => text.nfkd().collect(),
        };

        // split_whitespace drops leading/trailing runs, so joining
        // the pieces with one space both collapses and trims
        decomposed.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Absent input normalizes to the empty string
    pub fn normalize_opt(&self, text: Option<&str>) -> String {
        text.map(|t| self.normalize(t)).unwrap_or_default()
    }
}
