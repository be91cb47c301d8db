//! Inadmissibility classification of immigration case law.
//!
//! # Features
//!
//! - **Rules**: one case-insensitive, word-bounded pattern per inadmissibility
//!   category, plus a refugee-protection exclusion rule
//! - **Classifier**: ordered multi-label evaluation with the exclusion rule
//!   short-circuiting every category
//! - **Processor**: filter a corpus partition to immigration matters, classify
//!   each document and write `<dataset>_data.csv`
//!
//! # Example
//!
//! ```
//! use a34_classify::classify;
//! use a34_model::Category;
//!
//! let labels = classify("The applicant is a Convention refugee");
//! assert_eq!(labels.labels(), [Category::Refugee]);
//! ```

mod classifier;
mod error;
mod processor;
mod rules;

// === Error Types ===
pub use error::{ClassifyError, Result};

// === Classification ===
pub use classifier::classify;
pub use rules::{CATEGORY_RULES, CategoryRule, EXCLUSION_RULE};

// === Corpus Processing ===
pub use processor::{
    CORPUS_FILTER_PHRASE, ClassifyReport, documents_frame, label_frequencies, output_file_name,
    process_corpus, process_dataset,
};
