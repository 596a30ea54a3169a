//! quant-oracle - deterministic risk and sentiment scoring for Solana tokens
//!
//! This crate maps a flat market snapshot of one token ([`DataPoint`]) to a
//! structured assessment ([`AnalysisResult`]): sentiment, a 0-100 score, a
//! summary line, a verification snapshot and a quant breakdown.

pub mod types;
pub mod oracle;

// Re-export main types for convenience
pub use types::{DataPoint, Pubkey, RecentTrade, TopHolder, TradeSide};
pub use oracle::{AnalysisResult, AnalyzerBuilder, AnalyzerConfig, QuantAnalyzer, Submission};

/// Analyze a data point with the default configuration.
pub fn analyze(data_point: &DataPoint) -> AnalysisResult {
    QuantAnalyzer::default().analyze(data_point)
}
