// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `prepare`, `split` and `export`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, PathBuf, UnicodeForm)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::{
    export_use_case::ExportConfig,
    prepare_use_case::PrepareConfig,
    split_use_case::SplitConfig,
};
use crate::data::{augmenter::AugmentConfig, preprocessor::UnicodeForm};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the tagged training corpus from Quran, Hadith and Tafsir JSON
    Prepare(PrepareArgs),

    /// Split a prepared corpus into train.json and validation.json
    Split(SplitArgs),

    /// Extend a tokenizer with the tag vocabulary and write the mobile vocab/config files
    Export(ExportArgs),
}

/// All arguments for the `prepare` command.
/// With no source flags at all, the default asset paths are used.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Quran JSON file (surahs → ayahs)
    #[arg(long)]
    pub quran: Option<PathBuf>,

    /// Hadith collection JSON file; repeat for several collections
    #[arg(long)]
    pub hadith: Vec<PathBuf>,

    /// Tafsir JSON file; repeat for several surahs
    #[arg(long)]
    pub tafsir: Vec<PathBuf>,

    /// Output JSON array; the inspection sample goes next to it as .txt
    #[arg(long, default_value = "training_data/islamic_training_data.json")]
    pub output: PathBuf,

    /// Ayah text must be longer than this many characters to get a question
    #[arg(long, default_value_t = 20)]
    pub ayah_min_chars: usize,

    /// Hadith text must be longer than this many characters to get a question
    #[arg(long, default_value_t = 30)]
    pub hadith_min_chars: usize,

    /// How many characters of the text the question quotes
    #[arg(long, default_value_t = 50)]
    pub preview_chars: usize,

    /// Number of examples written to the .txt inspection file
    #[arg(long, default_value_t = 100)]
    pub sample_limit: usize,

    /// Unicode decomposition applied to every text field (nfd or nfkd)
    #[arg(long, default_value = "nfd")]
    pub unicode_form: UnicodeForm,
}

impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        let defaults   = PrepareConfig::default();
        let no_sources = a.quran.is_none() && a.hadith.is_empty() && a.tafsir.is_empty();

        let (quran, hadith, tafsir) = if no_sources {
            (defaults.quran, defaults.hadith, defaults.tafsir)
        } else {
            (a.quran, a.hadith, a.tafsir)
        };

        PrepareConfig {
            quran,
            hadith,
            tafsir,
            output:       a.output,
            augment:      AugmentConfig {
                ayah_min_chars:   a.ayah_min_chars,
                hadith_min_chars: a.hadith_min_chars,
                preview_chars:    a.preview_chars,
            },
            sample_limit: a.sample_limit,
            unicode_form: a.unicode_form,
        }
    }
}

/// All arguments for the `split` command
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Prepared corpus (JSON array of strings)
    #[arg(long, default_value = "training_data/islamic_training_data.json")]
    pub input: PathBuf,

    /// Directory for train.json and validation.json
    #[arg(long, default_value = "training_data")]
    pub output_dir: PathBuf,

    /// Share of examples held out for validation
    #[arg(long, default_value_t = 0.1)]
    pub val_fraction: f64,

    /// Shuffle seed; the same seed always gives the same split
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

impl From<SplitArgs> for SplitConfig {
    fn from(a: SplitArgs) -> Self {
        SplitConfig {
            input:        a.input,
            output_dir:   a.output_dir,
            val_fraction: a.val_fraction,
            seed:         a.seed,
        }
    }
}

/// All arguments for the `export` command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// tokenizer.json of the fine-tuned model
    #[arg(long, default_value = "islamic_model/tokenizer.json")]
    pub tokenizer: PathBuf,

    /// Directory receiving tokenizer.json, the vocab file and model_config.json
    #[arg(long, default_value = "assets/models")]
    pub output_dir: PathBuf,

    /// File name of the converted on-device model, recorded in model_config.json
    #[arg(long, default_value = "islamic_model.tflite")]
    pub model_file: String,

    /// File name of the vocabulary JSON
    #[arg(long, default_value = "islamic_vocab.json")]
    pub vocab_file: String,

    /// Maximum sequence length recorded in model_config.json
    #[arg(long, default_value_t = 512)]
    pub max_seq_len: usize,
}

impl From<ExportArgs> for ExportConfig {
    fn from(a: ExportArgs) -> Self {
        ExportConfig {
            tokenizer:   a.tokenizer,
            output_dir:  a.output_dir,
            model_file:  a.model_file,
            vocab_file:  a.vocab_file,
            max_seq_len: a.max_seq_len,
        }
    }
}
