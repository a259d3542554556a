//! Text analysis for `Text` fields
//!
//! An [`Analyzer`] is a compiled term pipeline: input text is split into
//! unicode words once, then every configured stage rewrites the term list
//! in place, in declared order. Compiling happens at construction, so
//! stop-word sets and stemmers are built once per segment rather than per
//! document. For a fixed configuration the pipeline is deterministic, at
//! index time and at query time.

use std::collections::{HashMap, HashSet};

use rust_stemmers::{Algorithm, Stemmer};
use stop_words::LANGUAGE;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::{AnalyzerConfig, AnalyzerStage, Language};

/// A compiled term pipeline
pub struct Analyzer {
    stages: Vec<CompiledStage>,
}

enum CompiledStage {
    Lowercase,
    StopWords(HashSet<String>),
    Stem(Stemmer),
    Length { min: usize, max: usize },
}

impl Analyzer {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            stages: config.stages.iter().map(CompiledStage::compile).collect(),
        }
    }

    /// Split text into index terms and run them through the pipeline
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let mut terms: Vec<String> = text.unicode_words().map(str::to_owned).collect();
        for stage in &self.stages {
            stage.apply(&mut terms);
        }
        terms
    }

    /// Per-term occurrence counts for one document value
    pub fn term_frequencies(&self, text: &str) -> HashMap<String, u32> {
        let mut frequencies = HashMap::new();
        for term in self.analyze(text) {
            *frequencies.entry(term).or_insert(0) += 1;
        }
        frequencies
    }
}

impl CompiledStage {
    fn compile(stage: &AnalyzerStage) -> Self {
        match stage {
            AnalyzerStage::Lowercase => CompiledStage::Lowercase,
            AnalyzerStage::StopWords(language) => {
                let words = stop_words::get(stop_word_list(*language));
                CompiledStage::StopWords(words.into_iter().collect())
            }
            AnalyzerStage::Stem(language) => {
                CompiledStage::Stem(Stemmer::create(stem_algorithm(*language)))
            }
            AnalyzerStage::Length { min, max } => CompiledStage::Length {
                min: *min,
                max: *max,
            },
        }
    }

    fn apply(&self, terms: &mut Vec<String>) {
        match self {
            CompiledStage::Lowercase => {
                for term in terms.iter_mut() {
                    // Skip the common already-lowercase case
                    if term.chars().any(char::is_uppercase) {
                        *term = term.to_lowercase();
                    }
                }
            }
            CompiledStage::StopWords(words) => {
                terms.retain(|term| !words.contains(term));
            }
            CompiledStage::Stem(stemmer) => {
                for term in terms.iter_mut() {
                    let stemmed = stemmer.stem(term.as_str()).into_owned();
                    *term = stemmed;
                }
            }
            CompiledStage::Length { min, max } => {
                terms.retain(|term| term.len() >= *min && term.len() <= *max);
            }
        }
    }
}

fn stop_word_list(language: Language) -> LANGUAGE {
    match language {
        Language::English => LANGUAGE::English,
    }
}

fn stem_algorithm(language: Language) -> Algorithm {
    match language {
        Language::English => Algorithm::English,
    }
}
