//! Summary text.
//!
//! Fragments are emitted in a fixed order, joined with ". " and closed with a
//! period. Optional fragments are skipped when their source data is missing.

use crate::oracle::features::FeatureSet;
use crate::oracle::types::{RiskFactor, Sentiment};
use crate::types::{safe, DataPoint};

/// Format a USD amount with a one-decimal B/M/K suffix.
pub fn compact(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{}", value.round() as i64)
    }
}

/// Build the summary for one analysis.
pub fn generate_summary(
    dp: &DataPoint,
    features: &FeatureSet,
    risk_factors: &[RiskFactor],
    sentiment: Sentiment,
    score: u8,
) -> String {
    let mut parts = Vec::new();

    parts.push(format!("{} outlook with score {}/100", sentiment.label(), score));

    if let Some(change) = dp.price_change_1h.filter(|c| c.is_finite()) {
        let direction = if change >= 0.0 { "up" } else { "down" };
        parts.push(format!("Price {} {:.1}% in 1h", direction, change.abs()));
    }

    let market_cap = safe(dp.market_cap);
    if market_cap > 0.0 {
        parts.push(format!(
            "Market cap ${} with ${} 24h volume",
            compact(market_cap),
            compact(safe(dp.volume_24h))
        ));
    }

    parts.push(format!(
        "Top 10 holders own {:.1}% ({})",
        features.top10_pct,
        features.holder_concentration.as_str().replace('_', " ")
    ));

    parts.push(format!(
        "Liquidity {} at ${}",
        features.liquidity_depth,
        compact(safe(dp.liquidity))
    ));

    parts.push(format!(
        "{} buys vs {} sells ({}% buy pressure)",
        dp.buys_24h.unwrap_or(0),
        dp.sells_24h.unwrap_or(0),
        features.buy_pressure
    ));

    let risks: Vec<&str> = risk_factors
        .iter()
        .filter(|f| f.is_negative())
        .map(RiskFactor::as_str)
        .collect();
    if !risks.is_empty() {
        parts.push(format!("Risks: {}", risks.join(", ")));
    }

    if !dp.bonding_complete.unwrap_or(false) {
        parts.push(format!(
            "Bonding curve {:.0}% complete",
            safe(dp.bonding_progress)
        ));
    }

    format!("{}.", parts.join(". "))
}
