// ============================================================
// Layer 3 — Tag Vocabulary and TrainingExample
// ============================================================
// A training example is an ordered list of tag segments:
//
//   <ayah>…</ayah> <translation>…</translation> <context>…</context>
//
// The tag set is closed. The tokenizer extension step registers
// every `<tag>` / `</tag>` pair as a special token, so adding a
// tag here changes the downstream vocabulary too.
//
// Bodies are stored unescaped and escaped only when rendered,
// which keeps `<` and `>` out of the rendered body and lets a
// non-greedy `<tag>(.*?)</tag>` pattern always match uniquely.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::domain::markup;

/// Separator between values of a multi-valued field inside one tag
pub const MULTI_VALUE_SEPARATOR: &str = "|";

/// The closed tag vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Ayah,
    Translation,
    Hadith,
    Narrator,
    Grade,
    Reference,
    Tafsir,
    Author,
    KeyPoints,
    WordAnalysis,
    Context,
    Question,
}

impl Tag {
    /// Every tag, in a stable order (used for special-token registration)
    pub const ALL: [Tag; 12] = [
        Tag::Ayah,
        Tag::Translation,
        Tag::Hadith,
        Tag::Narrator,
        Tag::Grade,
        Tag::Reference,
        Tag::Tafsir,
        Tag::Author,
        Tag::KeyPoints,
        Tag::WordAnalysis,
        Tag::Context,
        Tag::Question,
    ];

    /// The bare tag name as it appears between the brackets
    pub fn name(self) -> &'static str {
        match self {
            Tag::Ayah         => "ayah",
            Tag::Translation  => "translation",
            Tag::Hadith       => "hadith",
            Tag::Narrator     => "narrator",
            Tag::Grade        => "grade",
            Tag::Reference    => "reference",
            Tag::Tafsir       => "tafsir",
            Tag::Author       => "author",
            Tag::KeyPoints    => "key_points",
            Tag::WordAnalysis => "word_analysis",
            Tag::Context      => "context",
            Tag::Question     => "question",
        }
    }

    pub fn open(self) -> String {
        format!("<{}>", self.name())
    }

    pub fn close(self) -> String {
        format!("</{}>", self.name())
    }

    /// Position of this tag in `Tag::ALL`
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One `<tag>body</tag>` piece of an example. `body` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub tag:  Tag,
    pub body: String,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{name}>{body}</{name}>",
            name = self.tag.name(),
            body = markup::escape(&self.body)
        )
    }
}

/// A single flat training string, kept as its ordered segments
/// until it is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingExample {
    segments: Vec<Segment>,
}

impl TrainingExample {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Body of the first segment with this tag, if any
    pub fn inner(&self, tag: Tag) -> Option<&str> {
        self.segments()
            .iter()
            .find(|s| s.tag == tag)
            .map(|s| s.body.as_str())
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.inner(tag).is_some()
    }

    /// A new example with a `<question>` segment in front of this one.
    /// `self` is left untouched.
    pub fn with_question(&self, question: impl Into<String>) -> TrainingExample {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.push(Segment { tag: Tag::Question, body: question.into() });
        segments.extend(self.segments.iter().cloned());
        TrainingExample { segments }
    }
}

impl fmt::Display for TrainingExample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Examples serialize as their rendered string, so a `&[TrainingExample]`
/// becomes a JSON array of strings.
impl Serialize for TrainingExample {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ─── ExampleBuilder ───────────────────────────────────────────────────────────
/// Ordered-list builder for examples. Empty bodies are dropped,
/// so an absent field never produces an empty tag pair.
#[derive(Debug, Default)]
pub struct ExampleBuilder {
    segments: Vec<Segment>,
}

impl ExampleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `<tag>body</tag>` unless `body` is empty
    pub fn tag(mut self, tag: Tag, body: impl Into<String>) -> Self {
        let body = body.into();
        if !body.is_empty() {
            self.segments.push(Segment { tag, body });
        }
        self
    }

    /// Append one tag holding every non-empty part joined with `|`
    pub fn joined<I, S>(self, tag: Tag, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let body = parts
            .into_iter()
            .filter(|p| !p.as_ref().is_empty())
            .map(|p| p.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(MULTI_VALUE_SEPARATOR);
        self.tag(tag, body)
    }

    pub fn build(self) -> TrainingExample {
        TrainingExample { segments: self.segments }
    }
}
