//! Numeric feature labels.
//!
//! Each function here is pure and total: it maps raw market numbers to a
//! bounded score or a closed label and never fails. [`compute_features`]
//! gathers them all for one data point.

use crate::oracle::types::{HolderConcentration, LiquidityDepth, TrendDirection, VolumeProfile};
use crate::types::{safe, safe_count, DataPoint};
use tracing::debug;

/// Liquidity tier floors (USD, inclusive).
pub const DEEP_LIQUIDITY_USD: f64 = 1_000_000.0;
pub const MODERATE_LIQUIDITY_USD: f64 = 250_000.0;
pub const SHALLOW_LIQUIDITY_USD: f64 = 50_000.0;

/// All numeric labels for one data point.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSet {
    pub top10_pct: f64,
    pub buy_pressure: u8,
    pub volatility_score: u8,
    pub liquidity_depth: LiquidityDepth,
    pub holder_concentration: HolderConcentration,
    pub trend_direction: TrendDirection,
    pub volume_profile: VolumeProfile,
}

/// Compute every feature label for a data point.
pub fn compute_features(dp: &DataPoint) -> FeatureSet {
    let buys = safe_count(dp.buys_24h);
    let sells = safe_count(dp.sells_24h);
    let volume = safe(dp.volume_24h);
    let market_cap = safe(dp.market_cap);
    let top10_pct = top10_pct(dp);

    let features = FeatureSet {
        top10_pct,
        buy_pressure: buy_pressure(buys, sells),
        volatility_score: volatility_score(volume, market_cap),
        liquidity_depth: liquidity_depth(safe(dp.liquidity)),
        holder_concentration: holder_concentration(top10_pct),
        trend_direction: trend_direction(
            finite(dp.price_change_1h),
            finite(dp.price_change_24h),
            buys,
            sells,
        ),
        volume_profile: volume_profile(volume, market_cap),
    };

    debug!("Computed features: {:?}", features);
    features
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Share of supply held by the ten largest wallets.
///
/// The service's precomputed aggregate wins; otherwise the first ten ranked
/// holders are summed.
pub fn top10_pct(dp: &DataPoint) -> f64 {
    if let Some(pct) = finite(dp.top10_holding) {
        return pct;
    }

    match &dp.top_holders {
        Some(holders) => holders.iter().take(10).map(|h| safe(h.pct)).sum(),
        None => 0.0,
    }
}

/// Buy share of 24h trades on a 0-100 scale.
///
/// The `+ 1` in the denominator damps the score when activity is near zero.
pub fn buy_pressure(buys: f64, sells: f64) -> u8 {
    if buys + sells == 0.0 {
        return 50;
    }

    let pressure = (buys / (buys + sells + 1.0) * 100.0).round();
    pressure.clamp(0.0, 100.0) as u8
}

/// Turnover-based volatility on a 10-95 scale.
pub fn volatility_score(volume_24h: f64, market_cap: f64) -> u8 {
    if market_cap <= 0.0 {
        return 50;
    }

    let ratio = volume_24h / market_cap.max(1.0);
    let score = if ratio < 0.05 {
        (10.0 + ratio * 300.0).clamp(10.0, 25.0)
    } else if ratio < 0.2 {
        (25.0 + (ratio - 0.05) * 166.0).clamp(25.0, 50.0)
    } else if ratio < 0.5 {
        (50.0 + (ratio - 0.2) * 83.0).clamp(50.0, 75.0)
    } else {
        (75.0 + (ratio - 0.5) * 40.0).clamp(75.0, 95.0)
    };

    score.round() as u8
}

pub fn liquidity_depth(liquidity: f64) -> LiquidityDepth {
    if liquidity >= DEEP_LIQUIDITY_USD {
        LiquidityDepth::Deep
    } else if liquidity >= MODERATE_LIQUIDITY_USD {
        LiquidityDepth::Moderate
    } else if liquidity >= SHALLOW_LIQUIDITY_USD {
        LiquidityDepth::Shallow
    } else {
        LiquidityDepth::Dry
    }
}

pub fn holder_concentration(top10_pct: f64) -> HolderConcentration {
    if top10_pct > 80.0 {
        HolderConcentration::WhaleDominated
    } else if top10_pct > 50.0 {
        HolderConcentration::Concentrated
    } else if top10_pct > 20.0 {
        HolderConcentration::Moderate
    } else {
        HolderConcentration::Distributed
    }
}

/// Direction of price movement.
///
/// Price changes take precedence; the buy/sell ratio is only consulted when
/// both are absent. With no trades at all that ratio is 0, which reads as
/// `Down`.
pub fn trend_direction(
    change_1h: Option<f64>,
    change_24h: Option<f64>,
    buys: f64,
    sells: f64,
) -> TrendDirection {
    if change_1h.is_some() || change_24h.is_some() {
        let c1h = change_1h.unwrap_or(0.0);
        let c24h = change_24h.unwrap_or(0.0);

        if (c1h > 5.0 && c24h < -10.0) || (c1h < -5.0 && c24h > 10.0) {
            return TrendDirection::Reversal;
        }

        let combined = c1h * 0.6 + c24h * 0.4;
        return if combined > 3.0 {
            TrendDirection::Up
        } else if combined < -3.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Sideways
        };
    }

    let total = buys + sells;
    let ratio = if total > 0.0 { buys / total } else { 0.0 };

    if ratio > 0.6 {
        TrendDirection::Up
    } else if ratio < 0.4 {
        TrendDirection::Down
    } else {
        TrendDirection::Sideways
    }
}

pub fn volume_profile(volume_24h: f64, market_cap: f64) -> VolumeProfile {
    if market_cap <= 0.0 {
        return VolumeProfile::Dead;
    }

    let ratio = volume_24h / market_cap.max(1.0);
    if ratio > 0.5 {
        VolumeProfile::Surging
    } else if ratio > 0.15 {
        VolumeProfile::Rising
    } else if ratio > 0.03 {
        VolumeProfile::Stable
    } else if ratio > 0.005 {
        VolumeProfile::Declining
    } else {
        VolumeProfile::Dead
    }
}
