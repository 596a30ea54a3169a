//! Oracle module - deterministic token assessment.
//!
//! The analyzer turns a [`DataPoint`](crate::types::DataPoint) into an
//! [`AnalysisResult`]: numeric labels (`features`), risk tags and level
//! (`risk`), composite score and sentiment (`scorer`), summary text
//! (`summary`) and the verification snapshot (`snapshot`). No stage performs
//! I/O or keeps state between calls.

pub mod types;
pub mod features;
pub mod risk;
pub mod scorer;
pub mod summary;
pub mod snapshot;
pub mod analyzer;

// Re-export main public types and the analyzer
pub use analyzer::QuantAnalyzer;
pub use types::{
    AnalysisResult, AnalyzerConfig, HolderConcentration, LiquidityDepth, Quant, RiskFactor,
    RiskLevel, Sentiment, Snapshot, Submission, TrendDirection, VolumeProfile,
};

// Re-export building blocks for callers that need a single stage
pub use features::{compute_features, FeatureSet};
pub use risk::{detect_risk_factors, risk_level, RiskCheck, RiskContext, RISK_CHECKS};

/// Analyzer builder for convenient construction with sensible defaults.
pub struct AnalyzerBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Set how old a capture timestamp may be before the snapshot replaces it.
    pub fn with_snapshot_max_age(mut self, seconds: u64) -> Self {
        self.config.snapshot_max_age_seconds = seconds;
        self
    }

    /// Set the risk factor cap. Values below 1 are raised to 1.
    pub fn with_max_risk_factors(mut self, max_factors: usize) -> Self {
        self.config.max_risk_factors = max_factors.max(1);
        self
    }

    /// Build the analyzer configuration.
    pub fn build_config(self) -> AnalyzerConfig {
        self.config
    }

    /// Build the analyzer.
    pub fn build(self) -> QuantAnalyzer {
        QuantAnalyzer::new(self.config)
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
