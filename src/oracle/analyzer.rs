//! The quant analyzer - maps one data point to a full assessment.
//!
//! Stages run in a fixed order because the later ones (risk level, score,
//! sentiment, summary) consume the labels produced by the earlier ones.

use crate::oracle::features::compute_features;
use crate::oracle::risk::{detect_risk_factors, risk_level, RiskContext};
use crate::oracle::scorer::{composite_score, sentiment, ScoreInputs};
use crate::oracle::snapshot::build_snapshot;
use crate::oracle::summary::generate_summary;
use crate::oracle::types::{AnalysisResult, AnalyzerConfig, Quant, RiskFactor};
use crate::types::DataPoint;
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, instrument};

/// Stateless analyzer. Safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct QuantAnalyzer {
    config: AnalyzerConfig,
}

impl QuantAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze a data point as of now.
    pub fn analyze(&self, dp: &DataPoint) -> AnalysisResult {
        self.analyze_at(dp, Utc::now())
    }

    /// Analyze a data point as of `now`. Identical inputs give identical output.
    #[instrument(skip(self, dp), fields(mint = %dp.mint))]
    pub fn analyze_at(&self, dp: &DataPoint, now: DateTime<Utc>) -> AnalysisResult {
        let features = compute_features(dp);

        let ctx = RiskContext::new(dp, features.top10_pct);
        let risk_factors: Vec<RiskFactor> =
            detect_risk_factors(&ctx, self.config.max_risk_factors).into();
        let risk_level = risk_level(&risk_factors, features.buy_pressure);
        debug!("Risk level {} from {:?}", risk_level, risk_factors);

        let score = composite_score(&ScoreInputs {
            buy_pressure: features.buy_pressure,
            trend: features.trend_direction,
            volatility_score: features.volatility_score,
            risk_level,
            liquidity_depth: features.liquidity_depth,
        });
        let sentiment = sentiment(score, risk_level);

        let summary = generate_summary(dp, &features, &risk_factors, sentiment, score);

        let max_age = i64::try_from(self.config.snapshot_max_age_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);
        let snapshot = build_snapshot(dp, features.top10_pct, now, max_age);

        info!(
            "Analyzed {} ({}): {} score={} risk={}",
            dp.symbol, dp.mint, sentiment, score, risk_level
        );

        AnalysisResult {
            sentiment,
            score,
            summary,
            snapshot,
            quant: Quant {
                risk_level,
                risk_factors,
                buy_pressure: features.buy_pressure,
                volatility_score: features.volatility_score,
                liquidity_depth: features.liquidity_depth,
                holder_concentration: features.holder_concentration,
                trend_direction: features.trend_direction,
                volume_profile: features.volume_profile,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::types::{
        HolderConcentration, LiquidityDepth, RiskLevel, Sentiment, TrendDirection, VolumeProfile,
    };

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1_750_000_000_000).unwrap()
    }

    #[test]
    fn test_empty_point_is_total() {
        let result = QuantAnalyzer::default().analyze_at(&DataPoint::default(), fixed_now());

        // 4 negative tags -> high; 50 + 0 - 10 (down) - 10 (high) - 10 (dry) = 20
        assert_eq!(result.quant.risk_level, RiskLevel::High);
        assert_eq!(result.quant.trend_direction, TrendDirection::Down);
        assert_eq!(result.score, 20);
        assert_eq!(result.sentiment, Sentiment::Bearish);
        assert_eq!(result.snapshot.timestamp, fixed_now().timestamp_millis());
        assert!(result.summary.ends_with('.'));
    }

    #[test]
    fn test_risk_factor_cap_from_config() {
        let analyzer = QuantAnalyzer::new(AnalyzerConfig {
            max_risk_factors: 2,
            ..Default::default()
        });
        let result = analyzer.analyze_at(&DataPoint::default(), fixed_now());

        assert_eq!(
            result.quant.risk_factors,
            vec![RiskFactor::LowLiquidity, RiskFactor::BondingCurveRisk]
        );
        // Two negative tags with neutral buy pressure
        assert_eq!(result.quant.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_healthy_token() {
        let dp = DataPoint {
            mint: "HealthyMint".to_string(),
            symbol: "HLT".to_string(),
            buys_24h: Some(80),
            sells_24h: Some(20),
            liquidity: Some(2_000_000.0),
            market_cap: Some(5_000_000.0),
            volume_24h: Some(1_000_000.0),
            top10_holding: Some(15.0),
            holder_count: Some(600),
            twitter: Some("x".to_string()),
            website: Some("https://hlt.example".to_string()),
            price_change_1h: Some(4.0),
            price_change_24h: Some(8.0),
            bonding_complete: Some(true),
            ..Default::default()
        };

        let result = QuantAnalyzer::default().analyze_at(&dp, fixed_now());

        assert_eq!(result.quant.risk_level, RiskLevel::Low);
        assert_eq!(result.quant.liquidity_depth, LiquidityDepth::Deep);
        assert_eq!(result.quant.holder_concentration, HolderConcentration::Distributed);
        assert_eq!(result.quant.volume_profile, VolumeProfile::Rising);
        // 50 + 14.5 + 10 + 10 + 5 = 89.5
        assert_eq!(result.score, 90);
        assert_eq!(result.sentiment, Sentiment::Bullish);
        assert!(!result.summary.contains("Risks:"));
    }
}
