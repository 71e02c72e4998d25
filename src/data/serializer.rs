// ============================================================
// Layer 4 — Tagged Serializer
// ============================================================
// Renders a record into one or more TrainingExamples.
//
// Segment order per record kind:
//
//   Ayah   → ayah, translation, word_analysis, context
//   Hadith → hadith, translation, narrator, grade, reference, context
//   Tafsir → ayah, tafsir, author, key_points, context
//            (one example per commentary entry)
//
// Absent fields emit nothing. Multi-valued fields (translations,
// word glosses, key points) share one tag, joined with `|`.

use crate::domain::example::{ExampleBuilder, Tag, TrainingExample};
use crate::domain::records::{AyahRecord, HadithRecord, Record, TafsirRecord};

#[derive(Debug, Clone, Copy, Default)]
pub struct Serializer;

impl Serializer {
    pub fn new() -> Self {
        Self
    }

    /// Ayah and Hadith records give exactly one example; a Tafsir
    /// record gives one per commentary entry (possibly none).
    pub fn serialize(&self, record: &Record) -> Vec<TrainingExample> {
        match record {
            Record::Ayah(ayah)     => vec![self.ayah(ayah)],
            Record::Hadith(hadith) => vec![self.hadith(hadith)],
            Record::Tafsir(tafsir) => self.tafsir(tafsir),
        }
    }

    fn ayah(&self, r: &AyahRecord) -> TrainingExample {
        ExampleBuilder::new()
            .tag(Tag::Ayah, r.arabic())
            .joined(Tag::Translation, r.translations().iter().map(|t| t.text.as_str()))
            .joined(
                Tag::WordAnalysis,
                r.words().iter().map(|w| format!("{}:{}", w.arabic, w.gloss)),
            )
            .tag(Tag::Context, r.verse().to_string())
            .build()
    }

    fn hadith(&self, r: &HadithRecord) -> TrainingExample {
        ExampleBuilder::new()
            .tag(Tag::Hadith, r.arabic())
            .tag(Tag::Translation, r.english())
            .tag(Tag::Narrator, r.narrator())
            .tag(Tag::Grade, r.grade())
            .tag(Tag::Reference, r.reference())
            .tag(Tag::Context, r.collection())
            .build()
    }

    fn tafsir(&self, r: &TafsirRecord) -> Vec<TrainingExample> {
        let context = r.verse().to_string();
        r.entries()
            .iter()
            .map(|entry| {
                ExampleBuilder::new()
                    .tag(Tag::Ayah, r.arabic())
                    .tag(Tag::Tafsir, entry.commentary.as_str())
                    .tag(Tag::Author, entry.author.as_str())
                    .joined(Tag::KeyPoints, &entry.key_points)
                    .tag(Tag::Context, context.as_str())
                    .build()
            })
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::markup;
    use crate::domain::records::{
        HadithMeta, TafsirEntry, Translation, VerseRef, WordGloss,
    };

    fn verse(ayah: u32) -> VerseRef {
        VerseRef { surah_number: 1, surah_name: "Al-Fatihah".into(), ayah_number: ayah }
    }

    fn tags_of(example: &TrainingExample) -> Vec<Tag> {
        example.segments().iter().map(|s| s.tag).collect()
    }

    #[test]
    fn test_ayah_full_order() {
        let rec = AyahRecord::new(
            verse(1),
            "بِسْمِ اللَّهِ".into(),
            vec![
                Translation { language: Some("en".into()), text: "In the name of Allah".into() },
                Translation { language: Some("fr".into()), text: "Au nom d'Allah".into() },
            ],
            vec![WordGloss { arabic: "بِسْمِ".into(), gloss: "In the name".into() }],
        )
        .unwrap();

        let examples = Serializer::new().serialize(&Record::Ayah(rec));
        assert_eq!(examples.len(), 1);
        assert_eq!(
            tags_of(&examples[0]),
            vec![Tag::Ayah, Tag::Translation, Tag::WordAnalysis, Tag::Context]
        );
        assert_eq!(
            examples[0].inner(Tag::Translation),
            Some("In the name of Allah|Au nom d'Allah")
        );
        assert_eq!(examples[0].inner(Tag::WordAnalysis), Some("بِسْمِ:In the name"));
        assert_eq!(examples[0].inner(Tag::Context), Some("Surah 1:1 - Al-Fatihah"));
    }

    #[test]
    fn test_ayah_without_optional_fields() {
        let rec = AyahRecord::new(verse(2), "الْحَمْدُ".into(), vec![], vec![]).unwrap();
        let out = Serializer::new().serialize(&Record::Ayah(rec))[0].to_string();
        assert_eq!(out, "<ayah>الْحَمْدُ</ayah> <context>Surah 1:2 - Al-Fatihah</context>");
    }

    #[test]
    fn test_hadith_english_only_has_no_hadith_tag() {
        let meta = HadithMeta { narrator: "Umar".into(), grade: String::new(), reference: "1".into() };
        let rec  = HadithRecord::new("Bukhari".into(), String::new(), "Actions".into(), meta).unwrap();
        let out  = Serializer::new().serialize(&Record::Hadith(rec))[0].to_string();
        assert_eq!(
            out,
            "<translation>Actions</translation> <narrator>Umar</narrator> \
             <reference>1</reference> <context>Bukhari</context>"
        );
    }

    #[test]
    fn test_tafsir_one_example_per_entry() {
        let entries = vec![
            TafsirEntry { author: "Ibn Kathir".into(), commentary: "first".into(), key_points: vec!["a".into(), "b".into()] },
            TafsirEntry { author: "Al-Tabari".into(), commentary: "second".into(), key_points: vec![] },
        ];
        let rec      = TafsirRecord::new(verse(1), "بِسْمِ".into(), entries).unwrap();
        let examples = Serializer::new().serialize(&Record::Tafsir(rec));

        assert_eq!(examples.len(), 2);
        assert_eq!(
            tags_of(&examples[0]),
            vec![Tag::Ayah, Tag::Tafsir, Tag::Author, Tag::KeyPoints, Tag::Context]
        );
        assert_eq!(examples[0].inner(Tag::KeyPoints), Some("a|b"));
        assert!(!examples[1].contains(Tag::KeyPoints));
    }

    #[test]
    fn test_no_empty_tag_pairs() {
        let rec = HadithRecord::new("C".into(), "ar".into(), String::new(), HadithMeta::default()).unwrap();
        let out = Serializer::new().serialize(&Record::Hadith(rec))[0].to_string();
        for tag in Tag::ALL {
            assert!(!out.contains(&format!("{}{}", tag.open(), tag.close())));
        }
        assert_eq!(out, "<hadith>ar</hadith> <context>C</context>");
    }

    #[test]
    fn test_round_trip_through_non_greedy_extraction() {
        let arabic  = "قُلْ هُوَ اللَّهُ أَحَدٌ <1>";
        let english = "Say, He is Allah, the One & Only";
        let rec = AyahRecord::new(
            verse(1),
            arabic.into(),
            vec![Translation { language: None, text: english.into() }],
            vec![],
        )
        .unwrap();
        let out = Serializer::new().serialize(&Record::Ayah(rec))[0].to_string();

        assert_eq!(markup::extract(&out, Tag::Ayah).as_deref(), Some(arabic));
        assert_eq!(markup::extract(&out, Tag::Translation).as_deref(), Some(english));
        assert_eq!(markup::extract(&out, Tag::Context).as_deref(), Some("Surah 1:1 - Al-Fatihah"));
    }
}
