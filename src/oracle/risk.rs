//! Risk factor detection and risk level derivation.
//!
//! Detection walks a fixed, ordered checklist of independent predicates. Each
//! matching check contributes one tag; the result is deduplicated in
//! first-seen order, backfilled with a single fallback tag when nothing
//! matched, and capped.

use crate::oracle::types::{RiskFactor, RiskLevel};
use crate::types::{has_social, safe, safe_count, DataPoint};
use nonempty::NonEmpty;
use tracing::debug;

/// Below this liquidity (USD) a token is flagged and the fallback tag is `low_liquidity`.
pub const LOW_LIQUIDITY_USD: f64 = 50_000.0;

/// Inputs every check can read.
pub struct RiskContext<'a> {
    pub dp: &'a DataPoint,
    pub top10_pct: f64,
    pub liquidity: f64,
    pub volume_24h: f64,
    pub buys: f64,
    pub sells: f64,
    pub holders: f64,
}

impl<'a> RiskContext<'a> {
    pub fn new(dp: &'a DataPoint, top10_pct: f64) -> Self {
        Self {
            dp,
            top10_pct,
            liquidity: safe(dp.liquidity),
            volume_24h: safe(dp.volume_24h),
            buys: safe_count(dp.buys_24h),
            sells: safe_count(dp.sells_24h),
            holders: safe_count(dp.holder_count),
        }
    }
}

/// One row of the checklist.
pub struct RiskCheck {
    pub factor: RiskFactor,
    pub applies: fn(&RiskContext<'_>) -> bool,
}

/// Ordered checklist. Order determines the order of reported tags.
pub static RISK_CHECKS: &[RiskCheck] = &[
    RiskCheck {
        factor: RiskFactor::LowLiquidity,
        applies: |c| c.liquidity < LOW_LIQUIDITY_USD,
    },
    RiskCheck {
        factor: RiskFactor::WhaleDominance,
        applies: |c| c.top10_pct > 80.0,
    },
    RiskCheck {
        factor: RiskFactor::HighConcentration,
        applies: |c| c.top10_pct > 50.0 && c.top10_pct <= 80.0,
    },
    RiskCheck {
        factor: RiskFactor::CreatorHoldsMajority,
        applies: |c| c.dp.creator_holding.is_some_and(|pct| pct > 30.0),
    },
    RiskCheck {
        factor: RiskFactor::SingleHolderMajority,
        applies: |c| {
            c.dp.top_holders
                .as_ref()
                .and_then(|holders| holders.first())
                .is_some_and(|top| safe(top.pct) > 50.0)
        },
    },
    RiskCheck {
        factor: RiskFactor::BondingCurveRisk,
        applies: |c| {
            !c.dp.bonding_complete.unwrap_or(false) && safe(c.dp.bonding_progress) < 30.0
        },
    },
    RiskCheck {
        factor: RiskFactor::NoSocialPresence,
        applies: |c| {
            !has_social(&c.dp.website) && !has_social(&c.dp.twitter) && !has_social(&c.dp.telegram)
        },
    },
    RiskCheck {
        factor: RiskFactor::NoWebsite,
        applies: |c| !has_social(&c.dp.website),
    },
    RiskCheck {
        factor: RiskFactor::DevWalletActive,
        applies: |c| c.dp.snipers_holding.is_some_and(|pct| pct > 20.0),
    },
    RiskCheck {
        factor: RiskFactor::WashTrading,
        applies: |c| c.dp.insiders_holding.is_some_and(|pct| pct > 15.0),
    },
    RiskCheck {
        factor: RiskFactor::RapidSellOff,
        applies: |c| c.sells > c.buys * 2.0 && c.sells > 20.0,
    },
    RiskCheck {
        factor: RiskFactor::DeadVolume,
        applies: |c| c.volume_24h < 1_000.0 && c.holders > 100.0,
    },
    RiskCheck {
        factor: RiskFactor::DecliningHolders,
        applies: |c| c.dp.price_change_24h.is_some_and(|pct| pct < -20.0),
    },
    RiskCheck {
        factor: RiskFactor::HealthyDistribution,
        applies: |c| c.top10_pct <= 30.0 && c.holders > 200.0,
    },
    RiskCheck {
        factor: RiskFactor::VerifiedSocials,
        applies: |c| has_social(&c.dp.twitter) || has_social(&c.dp.telegram),
    },
    RiskCheck {
        factor: RiskFactor::OrganicVolume,
        applies: |c| c.volume_24h > 50_000.0 && c.buys > c.sells * 0.8,
    },
    RiskCheck {
        factor: RiskFactor::GrowingHolders,
        applies: |c| c.holders > 500.0,
    },
    RiskCheck {
        factor: RiskFactor::StrongCommunity,
        applies: |c| has_social(&c.dp.twitter),
    },
];

/// Run the checklist and return 1..=`max_factors` unique tags.
pub fn detect_risk_factors(ctx: &RiskContext, max_factors: usize) -> NonEmpty<RiskFactor> {
    let mut factors: Vec<RiskFactor> = Vec::new();
    for check in RISK_CHECKS {
        if (check.applies)(ctx) && !factors.contains(&check.factor) {
            factors.push(check.factor);
        }
    }

    factors.truncate(max_factors.max(1));

    match NonEmpty::from_vec(factors) {
        Some(factors) => {
            debug!("Detected {} risk factors", factors.len());
            factors
        }
        None => {
            let fallback = fallback_factor(ctx.liquidity);
            debug!("No risk factors matched, using fallback {}", fallback);
            NonEmpty::new(fallback)
        }
    }
}

/// The single tag reported when no check matched.
///
/// With the current checklist an illiquid token always trips `low_liquidity`
/// first, so only the liquid branch is reached from [`detect_risk_factors`].
pub fn fallback_factor(liquidity: f64) -> RiskFactor {
    if liquidity >= LOW_LIQUIDITY_USD {
        RiskFactor::OrganicVolume
    } else {
        RiskFactor::LowLiquidity
    }
}

/// Derive the risk level from the tag list and buy pressure. First match wins.
pub fn risk_level<'a>(
    factors: impl IntoIterator<Item = &'a RiskFactor>,
    buy_pressure: u8,
) -> RiskLevel {
    let mut negative = 0usize;
    let mut critical = false;
    for factor in factors {
        if factor.is_negative() {
            negative += 1;
        }
        critical |= factor.is_critical();
    }

    if critical || negative >= 5 {
        RiskLevel::Critical
    } else if negative >= 3 || buy_pressure < 25 {
        RiskLevel::High
    } else if negative >= 1 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
