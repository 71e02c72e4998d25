// ============================================================
// Layer 3 — Source Records
// ============================================================
// The three record kinds produced by the loaders. By the time
// a record exists its text fields are already normalized, and
// its constructor has checked the one invariant that makes the
// record usable:
//
//   AyahRecord   → Arabic text is non-empty
//   HadithRecord → Arabic or English text is non-empty
//   TafsirRecord → Arabic text is non-empty, and only entries
//                  with a non-empty commentary are kept
//
// A failed check yields CorpusError::MissingField and the loader
// drops that one record. Fields are private: records are never
// changed after construction.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::CorpusError;

/// Which JSON schema a source file follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Quran,
    Hadith,
    Tafsir,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SourceKind::Quran  => "quran",
            SourceKind::Hadith => "hadith",
            SourceKind::Tafsir => "tafsir",
        })
    }
}

/// Location of a verse: surah number and name, ayah number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseRef {
    pub surah_number: u32,
    pub surah_name:   String,
    pub ayah_number:  u32,
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Surah {}:{}", self.surah_number, self.ayah_number)?;
        if !self.surah_name.is_empty() {
            write!(f, " - {}", self.surah_name)?;
        }
        Ok(())
    }
}

/// One translation of an ayah; `language` is optional in the source data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub language: Option<String>,
    pub text:     String,
}

/// An Arabic word with its gloss, rendered as `arabic:gloss`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordGloss {
    pub arabic: String,
    pub gloss:  String,
}

// ─── AyahRecord ───────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AyahRecord {
    verse:        VerseRef,
    arabic:       String,
    translations: Vec<Translation>,
    words:        Vec<WordGloss>,
}

impl AyahRecord {
    pub fn new(
        verse:        VerseRef,
        arabic:       String,
        translations: Vec<Translation>,
        words:        Vec<WordGloss>,
    ) -> Result<Self, CorpusError> {
        if arabic.is_empty() {
            return Err(CorpusError::MissingField("arabicText"));
        }
        Ok(Self { verse, arabic, translations, words })
    }

    pub fn verse(&self) -> &VerseRef             { &self.verse }
    pub fn arabic(&self) -> &str                 { &self.arabic }
    pub fn translations(&self) -> &[Translation] { &self.translations }
    pub fn words(&self) -> &[WordGloss]          { &self.words }
}

// ─── HadithRecord ─────────────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HadithRecord {
    collection: String,
    arabic:     String,
    english:    String,
    narrator:   String,
    grade:      String,
    reference:  String,
}

/// Metadata fields of a hadith; each may be empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HadithMeta {
    pub narrator:  String,
    pub grade:     String,
    pub reference: String,
}

impl HadithRecord {
    pub fn new(
        collection: String,
        arabic:     String,
        english:    String,
        meta:       HadithMeta,
    ) -> Result<Self, CorpusError> {
        if arabic.is_empty() && english.is_empty() {
            return Err(CorpusError::MissingField("textArabic"));
        }
        Ok(Self {
            collection,
            arabic,
            english,
            narrator:  meta.narrator,
            grade:     meta.grade,
            reference: meta.reference,
        })
    }

    pub fn collection(&self) -> &str { &self.collection }
    pub fn arabic(&self) -> &str     { &self.arabic }
    pub fn english(&self) -> &str    { &self.english }
    pub fn narrator(&self) -> &str   { &self.narrator }
    pub fn grade(&self) -> &str      { &self.grade }
    pub fn reference(&self) -> &str  { &self.reference }
}

// ─── TafsirRecord ─────────────────────────────────────────────────────────────
/// One scholar's commentary on a verse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TafsirEntry {
    pub author:     String,
    pub commentary: String,
    pub key_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TafsirRecord {
    verse:   VerseRef,
    arabic:  String,
    entries: Vec<TafsirEntry>,
}

impl TafsirRecord {
    /// Entries with an empty commentary are skipped here.
    pub fn new(
        verse:   VerseRef,
        arabic:  String,
        entries: Vec<TafsirEntry>,
    ) -> Result<Self, CorpusError> {
        if arabic.is_empty() {
            return Err(CorpusError::MissingField("arabicText"));
        }
        let entries = entries
            .into_iter()
            .filter(|e| !e.commentary.is_empty())
            .collect();
        Ok(Self { verse, arabic, entries })
    }

    pub fn verse(&self) -> &VerseRef       { &self.verse }
    pub fn arabic(&self) -> &str           { &self.arabic }
    pub fn entries(&self) -> &[TafsirEntry] { &self.entries }
}

// ─── Record ───────────────────────────────────────────────────────────────────
/// Any record a source can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Ayah(AyahRecord),
    Hadith(HadithRecord),
    Tafsir(TafsirRecord),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse() -> VerseRef {
        VerseRef { surah_number: 1, surah_name: "Al-Fatihah".into(), ayah_number: 2 }
    }

    #[test]
    fn test_verse_ref_display() {
        assert_eq!(verse().to_string(), "Surah 1:2 - Al-Fatihah");
        let unnamed = VerseRef { surah_name: String::new(), ..verse() };
        assert_eq!(unnamed.to_string(), "Surah 1:2");
    }

    #[test]
    fn test_ayah_requires_arabic() {
        let err = AyahRecord::new(verse(), String::new(), vec![], vec![]).unwrap_err();
        assert!(matches!(err, CorpusError::MissingField("arabicText")));
    }

    #[test]
    fn test_hadith_needs_one_text() {
        assert!(HadithRecord::new("Bukhari".into(), String::new(), String::new(), HadithMeta::default()).is_err());
        assert!(HadithRecord::new("Bukhari".into(), String::new(), "text".into(), HadithMeta::default()).is_ok());
    }

    #[test]
    fn test_tafsir_skips_empty_commentary() {
        let entries = vec![
            TafsirEntry { author: "Ibn Kathir".into(), commentary: "c".into(), key_points: vec![] },
            TafsirEntry { author: "Unknown".into(), commentary: String::new(), key_points: vec![] },
        ];
        let rec = TafsirRecord::new(verse(), "arabic".into(), entries).unwrap();
        assert_eq!(rec.entries().len(), 1);
        assert_eq!(rec.entries()[0].author, "Ibn Kathir");
    }
}
