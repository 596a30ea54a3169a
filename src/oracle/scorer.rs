//! Composite score and sentiment.
//!
//! The score starts neutral at 50 and is nudged by buy pressure, trend,
//! volatility, risk level and liquidity. Sentiment is then read off the score
//! with a risk-aware dampener.

use crate::oracle::types::{LiquidityDepth, RiskLevel, Sentiment, TrendDirection};
use tracing::debug;

/// Inputs to the composite score.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs {
    pub buy_pressure: u8,
    pub trend: TrendDirection,
    pub volatility_score: u8,
    pub risk_level: RiskLevel,
    pub liquidity_depth: LiquidityDepth,
}

/// Calculate the composite 0-100 score.
pub fn composite_score(inputs: &ScoreInputs) -> u8 {
    let mut score = 50.0;

    score += (f64::from(inputs.buy_pressure) - 50.0) * 0.5;

    score += match inputs.trend {
        TrendDirection::Up => 10.0,
        TrendDirection::Down => -10.0,
        TrendDirection::Reversal => -5.0,
        TrendDirection::Sideways => 0.0,
    };

    if inputs.volatility_score > 70 {
        score -= 5.0;
    }

    score += match inputs.risk_level {
        RiskLevel::Critical => -20.0,
        RiskLevel::High => -10.0,
        RiskLevel::Medium => 0.0,
        RiskLevel::Low => 10.0,
    };

    score += match inputs.liquidity_depth {
        LiquidityDepth::Deep => 5.0,
        LiquidityDepth::Dry => -10.0,
        LiquidityDepth::Moderate | LiquidityDepth::Shallow => 0.0,
    };

    let final_score = score.round().clamp(0.0, 100.0) as u8;
    debug!("Composite score: raw={:.1} -> {}", score, final_score);
    final_score
}

/// A high score under a high risk level stays neutral rather than bullish.
pub fn sentiment(score: u8, risk_level: RiskLevel) -> Sentiment {
    if risk_level == RiskLevel::Critical || score < 35 {
        Sentiment::Bearish
    } else if score > 65 && risk_level != RiskLevel::High {
        Sentiment::Bullish
    } else {
        Sentiment::Neutral
    }
}
