use serde::{Deserialize, Serialize};

/// Index-level configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexConfig {
    /// A sealed segment with fewer live docids than this is eligible for merging
    pub merge_doc_threshold: u32,
    pub analyzer: AnalyzerConfig,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            merge_doc_threshold: 1_000_000,
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl IndexConfig {
    /// Set the merge eligibility threshold (live docids per sealed segment)
    pub fn with_merge_threshold(mut self, threshold: u32) -> Self {
        self.merge_doc_threshold = threshold;
        self
    }

    /// Replace the term pipeline applied to `Text` fields
    pub fn with_analyzer(mut self, analyzer: AnalyzerConfig) -> Self {
        self.analyzer = analyzer;
        self
    }
}

/// Term pipeline for `Text` field values
///
/// Stages run over the split words in declared order, so ordering is part
/// of the configuration: `[StopWords, Lowercase]` filters against the
/// original casing, `[Lowercase, StopWords]` against the folded form.
/// The same pipeline runs at index and query time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub stages: Vec<AnalyzerStage>,
}

impl Default for AnalyzerConfig {
    /// Case folding only. An index core should not drop terms unasked;
    /// stop-word and stemming stages are opt-in.
    fn default() -> Self {
        Self {
            stages: vec![AnalyzerStage::Lowercase],
        }
    }
}

impl AnalyzerConfig {
    /// A full-text pipeline for English corpora
    pub fn english_fulltext() -> Self {
        Self {
            stages: vec![
                AnalyzerStage::Lowercase,
                AnalyzerStage::StopWords(Language::English),
                AnalyzerStage::Stem(Language::English),
            ],
        }
    }
}

/// One rewrite step of the term pipeline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AnalyzerStage {
    /// Unicode case folding
    Lowercase,
    /// Drop the language's high-frequency words
    StopWords(Language),
    /// Reduce terms to their word stems
    Stem(Language),
    /// Keep only terms whose byte length lies within the inclusive bounds
    Length { min: usize, max: usize },
}

/// Languages with stop-word lists and stemmers available
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let config = IndexConfig::default();
        assert_eq!(config.merge_doc_threshold, 1_000_000);
        assert_eq!(config.analyzer.stages, vec![AnalyzerStage::Lowercase]);
    }

    #[test]
    fn test_merge_threshold_override() {
        let config = IndexConfig::default().with_merge_threshold(100);
        assert_eq!(config.merge_doc_threshold, 100);
    }

    #[test]
    fn test_english_fulltext_pipeline_order() {
        let analyzer = AnalyzerConfig::english_fulltext();
        assert_eq!(analyzer.stages.len(), 3);
        // Folding comes first so the stop-word stage sees folded terms
        assert_eq!(analyzer.stages[0], AnalyzerStage::Lowercase);
    }

    #[test]
    fn test_stage_serialization_round_trip() {
        let config = AnalyzerConfig {
            stages: vec![
                AnalyzerStage::Length { min: 2, max: 24 },
                AnalyzerStage::Stem(Language::English),
            ],
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: AnalyzerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
