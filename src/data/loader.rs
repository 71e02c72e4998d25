// ============================================================
// Layer 4 — Record Loaders
// ============================================================
// Reads the three JSON schemas and turns them into records.
//
//   Quran  → { "surahs": [ { "number", "nameEnglish",
//                "ayahs": [ { "ayahNumber", "arabicText",
//                             "translations": [ { "language", "text" } ],
//                             "words": [ { "arabic", "meaning" } ] } ] } ] }
//
//   Hadith → { "collection",
//              "hadiths": [ { "textArabic", "textEnglish",
//                             "narrator", "grade", "reference" } ] }
//
//   Tafsir → { "surahNumber", "surahName",
//              "tafsir": [ { "ayahNumber", "arabicText",
//                            "tafsirSources": [ { "author", "commentary",
//                                                 "keyPoints": [..] } ] } ] }
//
// Failure handling:
//   - missing file            → CorpusError::MissingInput (whole source)
//   - top-level JSON mismatch → CorpusError::MalformedInput (whole source)
//   - missing record field    → that record is dropped, others continue
//   - wrongly typed field     → that record is dropped, others continue
//
// The file-level parse only reads the envelope; every surah, ayah,
// hadith and tafsir verse stays a serde_json::Value until the lazy
// iterator reaches it and parses it on its own.
//
// Reference: serde documentation (field attributes)
//            Rust Book §13 (Iterators)

use std::{fs, path::{Path, PathBuf}};

use serde::{
    de::{DeserializeOwned, IgnoredAny},
    Deserialize,
};
use serde_json::Value;

use crate::data::preprocessor::Normalizer;
use crate::domain::error::CorpusError;
use crate::domain::records::{
    AyahRecord, HadithMeta, HadithRecord, Record, SourceKind, TafsirEntry, TafsirRecord,
    Translation, VerseRef, WordGloss,
};
use crate::domain::traits::{RecordSource, Records};

// ─── Raw schemas ──────────────────────────────────────────────────────────────

/// Metadata values are usually strings but some exports use
/// plain numbers (e.g. `"reference": 1`). Anything else is
/// treated as absent rather than failing the whole file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LooseText {
    Text(String),
    Number(serde_json::Number),
    Other(IgnoredAny),
}

impl LooseText {
    fn as_text(&self) -> String {
        match self {
            LooseText::Text(s)   => s.clone(),
            LooseText::Number(n) => n.to_string(),
            LooseText::Other(_)  => String::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawQuran {
    surahs: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSurah {
    number:       Option<u32>,
    name_english: Option<String>,
    #[serde(default)]
    ayahs:        Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAyah {
    ayah_number:  Option<u32>,
    arabic_text:  Option<String>,
    #[serde(default)]
    translations: Option<Vec<RawTranslation>>,
    #[serde(default)]
    words:        Option<Vec<RawWord>>,
}

#[derive(Debug, Deserialize)]
struct RawTranslation {
    language: Option<String>,
    text:     Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawWord {
    arabic:  Option<String>,
    meaning: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawHadithFile {
    collection: String,
    hadiths:    Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHadith {
    text_arabic:  Option<String>,
    text_english: Option<String>,
    narrator:     Option<LooseText>,
    grade:        Option<LooseText>,
    reference:    Option<LooseText>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTafsirFile {
    #[serde(default)]
    surah_number: u32,
    surah_name:   Option<String>,
    tafsir:       Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTafsirVerse {
    ayah_number:    Option<u32>,
    arabic_text:    Option<String>,
    #[serde(default)]
    tafsir_sources: Option<Vec<RawTafsirSource>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTafsirSource {
    author:     Option<String>,
    commentary: Option<String>,
    #[serde(default)]
    key_points: Option<Vec<String>>,
}

/// Read and parse one JSON file into its raw schema
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CorpusError> {
    if !path.exists() {
        return Err(CorpusError::MissingInput(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|e| CorpusError::io(path, e))?;
    serde_json::from_slice(&bytes).map_err(|source| CorpusError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse one array element into its raw schema
fn parse_element<T: DeserializeOwned>(value: Value) -> Result<T, CorpusError> {
    serde_json::from_value(value).map_err(CorpusError::InvalidRecord)
}

/// Keep the elements that parsed and built cleanly, log the rest at debug level
fn keep_valid<T>(path: &Path, built: Result<T, CorpusError>) -> Option<T> {
    match built {
        Ok(item) => Some(item),
        Err(e) => {
            tracing::debug!("Dropping record from '{}': {}", path.display(), e);
            None
        }
    }
}

// ─── QuranSource ──────────────────────────────────────────────────────────────
pub struct QuranSource {
    path:       PathBuf,
    normalizer: Normalizer,
}

impl QuranSource {
    pub fn new(path: impl Into<PathBuf>, normalizer: Normalizer) -> Self {
        Self { path: path.into(), normalizer }
    }
}

impl RecordSource for QuranSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Quran
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn records(&self) -> Result<Records, CorpusError> {
        let quran: RawQuran = read_json(&self.path)?;
        let n    = self.normalizer;
        let path = self.path.clone();

        let surah_path = path.clone();
        let records = quran
            .surahs
            .into_iter()
            .filter_map(move |value| keep_valid::<RawSurah>(&surah_path, parse_element(value)))
            .flat_map(move |surah| {
                let surah_number = surah.number;
                let surah_name   = n.normalize_opt(surah.name_english.as_deref());
                let path         = path.clone();
                surah.ayahs.into_iter().filter_map(move |value| {
                    let built = parse_element(value)
                        .and_then(|ayah| build_ayah(&n, surah_number, &surah_name, ayah));
                    keep_valid(&path, built)
                })
            });

        Ok(Box::new(records))
    }
}

fn build_ayah(
    n:            &Normalizer,
    surah_number: Option<u32>,
    surah_name:   &str,
    ayah:         RawAyah,
) -> Result<Record, CorpusError> {
    let surah_number = surah_number.ok_or(CorpusError::MissingField("number"))?;
    let ayah_number  = ayah.ayah_number.ok_or(CorpusError::MissingField("ayahNumber"))?;

    let translations = ayah
        .translations
        .unwrap_or_default()
        .into_iter()
        .filter_map(|t| {
            let text = n.normalize_opt(t.text.as_deref());
            (!text.is_empty()).then(|| Translation {
                language: t.language.map(|l| n.normalize(&l)).filter(|l| !l.is_empty()),
                text,
            })
        })
        .collect();

    // A word needs both halves to be useful as a gloss pair
    let words = ayah
        .words
        .unwrap_or_default()
        .into_iter()
        .filter_map(|w| {
            let arabic = n.normalize_opt(w.arabic.as_deref());
            let gloss  = n.normalize_opt(w.meaning.as_deref());
            (!arabic.is_empty() && !gloss.is_empty()).then_some(WordGloss { arabic, gloss })
        })
        .collect();

    let verse = VerseRef {
        surah_number,
        surah_name: surah_name.to_string(),
        ayah_number,
    };
    let arabic = n.normalize_opt(ayah.arabic_text.as_deref());

    AyahRecord::new(verse, arabic, translations, words).map(Record::Ayah)
}

// ─── HadithSource ─────────────────────────────────────────────────────────────
pub struct HadithSource {
    path:       PathBuf,
    normalizer: Normalizer,
}

impl HadithSource {
    pub fn new(path: impl Into<PathBuf>, normalizer: Normalizer) -> Self {
        Self { path: path.into(), normalizer }
    }
}

impl RecordSource for HadithSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Hadith
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn records(&self) -> Result<Records, CorpusError> {
        let file: RawHadithFile = read_json(&self.path)?;
        let n          = self.normalizer;
        let path       = self.path.clone();
        let collection = n.normalize(&file.collection);

        let records = file.hadiths.into_iter().filter_map(move |value| {
            let h: RawHadith = keep_valid(&path, parse_element(value))?;
            let text = |field: &Option<LooseText>| {
                n.normalize_opt(field.as_ref().map(LooseText::as_text).as_deref())
            };
            let meta = HadithMeta {
                narrator:  text(&h.narrator),
                grade:     text(&h.grade),
                reference: text(&h.reference),
            };
            let built = HadithRecord::new(
                collection.clone(),
                n.normalize_opt(h.text_arabic.as_deref()),
                n.normalize_opt(h.text_english.as_deref()),
                meta,
            )
            .map(Record::Hadith);
            keep_valid(&path, built)
        });

        Ok(Box::new(records))
    }
}

// ─── TafsirSource ─────────────────────────────────────────────────────────────
pub struct TafsirSource {
    path:       PathBuf,
    normalizer: Normalizer,
}

impl TafsirSource {
    pub fn new(path: impl Into<PathBuf>, normalizer: Normalizer) -> Self {
        Self { path: path.into(), normalizer }
    }
}

impl RecordSource for TafsirSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Tafsir
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn records(&self) -> Result<Records, CorpusError> {
        let file: RawTafsirFile = read_json(&self.path)?;
        let n            = self.normalizer;
        let path         = self.path.clone();
        let surah_number = file.surah_number;
        let surah_name   = match n.normalize_opt(file.surah_name.as_deref()) {
            name if name.is_empty() => "Unknown".to_string(),
            name => name,
        };

        let records = file.tafsir.into_iter().filter_map(move |value| {
            let built = parse_element(value)
                .and_then(|verse| build_tafsir(&n, surah_number, &surah_name, verse));
            keep_valid(&path, built)
        });

        Ok(Box::new(records))
    }
}

fn build_tafsir(
    n:            &Normalizer,
    surah_number: u32,
    surah_name:   &str,
    verse:        RawTafsirVerse,
) -> Result<Record, CorpusError> {
    let ayah_number = verse.ayah_number.ok_or(CorpusError::MissingField("ayahNumber"))?;

    let entries = verse
        .tafsir_sources
        .unwrap_or_default()
        .into_iter()
        .map(|s| TafsirEntry {
            author: match n.normalize_opt(s.author.as_deref()) {
                a if a.is_empty() => "Unknown".to_string(),
                a => a,
            },
            commentary: n.normalize_opt(s.commentary.as_deref()),
            key_points: s
                .key_points
                .unwrap_or_default()
                .iter()
                .map(|k| n.normalize(k))
                .filter(|k| !k.is_empty())
                .collect(),
        })
        .collect();

    let verse_ref = VerseRef {
        surah_number,
        surah_name: surah_name.to_string(),
        ayah_number,
    };
    let arabic = n.normalize_opt(verse.arabic_text.as_deref());

    TafsirRecord::new(verse_ref, arabic, entries).map(Record::Tafsir)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn json_file(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    fn collect(source: &dyn RecordSource) -> Vec<Record> {
        source.records().unwrap().collect()
    }

    const QURAN: &str = r#"{
        "surahs": [{
            "number": 1,
            "nameEnglish": "Al-Fatihah",
            "ayahs": [
                { "ayahNumber": 1, "arabicText": "بِسْمِ  اللَّهِ",
                  "translations": [{ "language": "en", "text": "In the name of Allah" }],
                  "words": [{ "arabic": "بِسْمِ", "meaning": "In the name" }, { "arabic": "x" }] },
                { "ayahNumber": 2, "arabicText": "الْحَمْدُ لِلَّهِ" },
                { "ayahNumber": 3, "arabicText": "   " },
                { "arabicText": "no number" }
            ]
        }]
    }"#;

    #[test]
    fn test_quran_drops_invalid_ayahs() {
        let f       = json_file(QURAN);
        let records = collect(&QuranSource::new(f.path(), Normalizer::default()));
        assert_eq!(records.len(), 2);

        let Record::Ayah(first) = &records[0] else { panic!("expected ayah") };
        assert_eq!(first.verse().to_string(), "Surah 1:1 - Al-Fatihah");
        assert_eq!(first.translations().len(), 1);
        assert_eq!(first.translations()[0].language.as_deref(), Some("en"));
        assert_eq!(first.translations()[0].text, "In the name of Allah");
        // second word has no meaning and is skipped
        assert_eq!(first.words().len(), 1);
        // whitespace collapsed
        assert!(!first.arabic().contains("  "));
    }

    #[test]
    fn test_hadith_accepts_numeric_reference() {
        let f = json_file(r#"{
            "collection": "Sahih al-Bukhari",
            "hadiths": [
                { "textEnglish": "Actions are by intentions", "reference": 1, "grade": "Sahih" },
                { "narrator": "nobody" },
                { "textArabic": "إِنَّمَا الأَعْمَالُ", "reference": { "book": 1 } }
            ]
        }"#);
        let records = collect(&HadithSource::new(f.path(), Normalizer::default()));
        assert_eq!(records.len(), 2);

        let Record::Hadith(h) = &records[0] else { panic!("expected hadith") };
        assert_eq!(h.reference(), "1");
        assert_eq!(h.collection(), "Sahih al-Bukhari");
        assert_eq!(h.arabic(), "");

        let Record::Hadith(h) = &records[1] else { panic!("expected hadith") };
        assert_eq!(h.reference(), "");
    }

    #[test]
    fn test_tafsir_defaults() {
        let f = json_file(r#"{
            "tafsir": [{
                "ayahNumber": 1,
                "arabicText": "بِسْمِ اللَّهِ",
                "tafsirSources": [
                    { "commentary": "Begin with the name of Allah", "keyPoints": ["mercy", " "] },
                    { "author": "Ibn Kathir" }
                ]
            }]
        }"#);
        let records = collect(&TafsirSource::new(f.path(), Normalizer::default()));
        assert_eq!(records.len(), 1);

        let Record::Tafsir(t) = &records[0] else { panic!("expected tafsir") };
        assert_eq!(t.verse().surah_name, "Unknown");
        assert_eq!(t.verse().surah_number, 0);
        assert_eq!(t.entries().len(), 1);
        assert_eq!(t.entries()[0].author, "Unknown");
        assert_eq!(t.entries()[0].key_points, vec!["mercy".to_string()]);
    }

    #[test]
    fn test_wrongly_typed_ayah_drops_only_that_ayah() {
        let f = json_file(r#"{
            "surahs": [{
                "number": 1, "nameEnglish": "Al-Fatihah",
                "ayahs": [
                    { "ayahNumber": 1, "arabicText": "بِسْمِ اللَّهِ" },
                    { "ayahNumber": "2", "arabicText": "الْحَمْدُ لِلَّهِ" },
                    { "ayahNumber": 3, "arabicText": "الرَّحْمَٰنِ الرَّحِيمِ" }
                ]
            }]
        }"#);
        let records = collect(&QuranSource::new(f.path(), Normalizer::default()));
        assert_eq!(records.len(), 2);

        let numbers: Vec<u32> = records
            .iter()
            .map(|r| match r {
                Record::Ayah(a) => a.verse().ayah_number,
                other => panic!("expected ayah, got {other:?}"),
            })
            .collect();
        assert_eq!(numbers, vec![1, 3]);
    }

    #[test]
    fn test_wrongly_typed_surah_keeps_other_surahs() {
        let f = json_file(r#"{
            "surahs": [
                { "number": "one", "ayahs": [{ "ayahNumber": 1, "arabicText": "بِسْمِ" }] },
                { "number": 2, "nameEnglish": "Al-Baqarah",
                  "ayahs": [{ "ayahNumber": 1, "arabicText": "الم" }] }
            ]
        }"#);
        let records = collect(&QuranSource::new(f.path(), Normalizer::default()));
        assert_eq!(records.len(), 1);
        let Record::Ayah(a) = &records[0] else { panic!("expected ayah") };
        assert_eq!(a.verse().surah_number, 2);
    }

    #[test]
    fn test_wrongly_typed_key_points_drop_only_that_verse() {
        let f = json_file(r#"{
            "surahNumber": 1, "surahName": "Al-Fatihah",
            "tafsir": [
                { "ayahNumber": 1, "arabicText": "بِسْمِ اللَّهِ",
                  "tafsirSources": [{ "author": "Ibn Kathir", "commentary": "first" }] },
                { "ayahNumber": 2, "arabicText": "الْحَمْدُ لِلَّهِ",
                  "tafsirSources": [{ "author": "Ibn Kathir", "commentary": "second", "keyPoints": [1] }] },
                { "ayahNumber": 3, "arabicText": "الرَّحْمَٰنِ",
                  "tafsirSources": [{ "author": "Ibn Kathir", "commentary": "third" }] }
            ]
        }"#);
        let records = collect(&TafsirSource::new(f.path(), Normalizer::default()));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_wrongly_typed_hadith_text_drops_only_that_hadith() {
        let f = json_file(r#"{
            "collection": "Sahih Muslim",
            "hadiths": [
                { "textEnglish": "first" },
                { "textEnglish": ["not", "a", "string"] },
                "not even an object",
                { "textEnglish": "last" }
            ]
        }"#);
        let records = collect(&HadithSource::new(f.path(), Normalizer::default()));
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_missing_file_is_missing_input() {
        let source = QuranSource::new("/definitely/not/here.json", Normalizer::default());
        assert!(matches!(source.records(), Err(CorpusError::MissingInput(_))));
    }

    #[test]
    fn test_malformed_json_fails_whole_file() {
        let f      = json_file(r#"{ "collection": "x", "hadiths": [ "#);
        let source = HadithSource::new(f.path(), Normalizer::default());
        assert!(matches!(source.records(), Err(CorpusError::MalformedInput { .. })));
    }

    #[test]
    fn test_wrong_top_level_shape_is_malformed() {
        let f      = json_file(r#"{ "chapters": [] }"#);
        let source = QuranSource::new(f.path(), Normalizer::default());
        assert!(matches!(source.records(), Err(CorpusError::MalformedInput { .. })));
    }
}
