//! Output types for the quant oracle.
//!
//! Every categorical label is a closed enum so the mapping functions stay
//! exhaustive. Labels serialize as the `snake_case` strings the submission
//! endpoint expects.

use crate::types::Pubkey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall market stance for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "bullish",
            Sentiment::Bearish => "bearish",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Capitalized label used in summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Bullish => "Bullish",
            Sentiment::Bearish => "Bearish",
            Sentiment::Neutral => "Neutral",
        }
    }
}

/// Risk severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiquidityDepth {
    Deep,
    Moderate,
    Shallow,
    Dry,
}

impl LiquidityDepth {
    pub fn as_str(&self) -> &'static str {
        match self {
            LiquidityDepth::Deep => "deep",
            LiquidityDepth::Moderate => "moderate",
            LiquidityDepth::Shallow => "shallow",
            LiquidityDepth::Dry => "dry",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolderConcentration {
    WhaleDominated,
    Concentrated,
    Moderate,
    Distributed,
}

impl HolderConcentration {
    pub fn as_str(&self) -> &'static str {
        match self {
            HolderConcentration::WhaleDominated => "whale_dominated",
            HolderConcentration::Concentrated => "concentrated",
            HolderConcentration::Moderate => "moderate",
            HolderConcentration::Distributed => "distributed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Sideways,
    Reversal,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
            TrendDirection::Sideways => "sideways",
            TrendDirection::Reversal => "reversal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeProfile {
    Surging,
    Rising,
    Stable,
    Declining,
    Dead,
}

impl VolumeProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeProfile::Surging => "surging",
            VolumeProfile::Rising => "rising",
            VolumeProfile::Stable => "stable",
            VolumeProfile::Declining => "declining",
            VolumeProfile::Dead => "dead",
        }
    }
}

/// The fixed risk-factor vocabulary: 20 negative tags followed by 8 positive ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    // Negative
    LowLiquidity,
    WhaleDominance,
    HighConcentration,
    CreatorHoldsMajority,
    SingleHolderMajority,
    BondingCurveRisk,
    NoSocialPresence,
    NoWebsite,
    DevWalletActive,
    WashTrading,
    RapidSellOff,
    DeadVolume,
    DecliningHolders,
    RugPattern,
    HoneypotRisk,
    MintAuthorityActive,
    FreezeAuthorityActive,
    PumpAndDump,
    BundledSupply,
    FreshWalletCluster,
    // Positive
    HealthyDistribution,
    StrongCommunity,
    OrganicVolume,
    LockedLiquidity,
    VerifiedSocials,
    ActiveDevelopment,
    GrowingHolders,
    SmartMoneyInflow,
}

impl RiskFactor {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskFactor::LowLiquidity => "low_liquidity",
            RiskFactor::WhaleDominance => "whale_dominance",
            RiskFactor::HighConcentration => "high_concentration",
            RiskFactor::CreatorHoldsMajority => "creator_holds_majority",
            RiskFactor::SingleHolderMajority => "single_holder_majority",
            RiskFactor::BondingCurveRisk => "bonding_curve_risk",
            RiskFactor::NoSocialPresence => "no_social_presence",
            RiskFactor::NoWebsite => "no_website",
            RiskFactor::DevWalletActive => "dev_wallet_active",
            RiskFactor::WashTrading => "wash_trading",
            RiskFactor::RapidSellOff => "rapid_sell_off",
            RiskFactor::DeadVolume => "dead_volume",
            RiskFactor::DecliningHolders => "declining_holders",
            RiskFactor::RugPattern => "rug_pattern",
            RiskFactor::HoneypotRisk => "honeypot_risk",
            RiskFactor::MintAuthorityActive => "mint_authority_active",
            RiskFactor::FreezeAuthorityActive => "freeze_authority_active",
            RiskFactor::PumpAndDump => "pump_and_dump",
            RiskFactor::BundledSupply => "bundled_supply",
            RiskFactor::FreshWalletCluster => "fresh_wallet_cluster",
            RiskFactor::HealthyDistribution => "healthy_distribution",
            RiskFactor::StrongCommunity => "strong_community",
            RiskFactor::OrganicVolume => "organic_volume",
            RiskFactor::LockedLiquidity => "locked_liquidity",
            RiskFactor::VerifiedSocials => "verified_socials",
            RiskFactor::ActiveDevelopment => "active_development",
            RiskFactor::GrowingHolders => "growing_holders",
            RiskFactor::SmartMoneyInflow => "smart_money_inflow",
        }
    }

    /// Returns the whole vocabulary.
    pub fn all() -> Vec<RiskFactor> {
        vec![
            RiskFactor::LowLiquidity,
            RiskFactor::WhaleDominance,
            RiskFactor::HighConcentration,
            RiskFactor::CreatorHoldsMajority,
            RiskFactor::SingleHolderMajority,
            RiskFactor::BondingCurveRisk,
            RiskFactor::NoSocialPresence,
            RiskFactor::NoWebsite,
            RiskFactor::DevWalletActive,
            RiskFactor::WashTrading,
            RiskFactor::RapidSellOff,
            RiskFactor::DeadVolume,
            RiskFactor::DecliningHolders,
            RiskFactor::RugPattern,
            RiskFactor::HoneypotRisk,
            RiskFactor::MintAuthorityActive,
            RiskFactor::FreezeAuthorityActive,
            RiskFactor::PumpAndDump,
            RiskFactor::BundledSupply,
            RiskFactor::FreshWalletCluster,
            RiskFactor::HealthyDistribution,
            RiskFactor::StrongCommunity,
            RiskFactor::OrganicVolume,
            RiskFactor::LockedLiquidity,
            RiskFactor::VerifiedSocials,
            RiskFactor::ActiveDevelopment,
            RiskFactor::GrowingHolders,
            RiskFactor::SmartMoneyInflow,
        ]
    }

    /// Positive tags never count toward the risk level.
    pub fn is_positive(&self) -> bool {
        matches!(
            self,
            RiskFactor::HealthyDistribution
                | RiskFactor::StrongCommunity
                | RiskFactor::OrganicVolume
                | RiskFactor::LockedLiquidity
                | RiskFactor::VerifiedSocials
                | RiskFactor::ActiveDevelopment
                | RiskFactor::GrowingHolders
                | RiskFactor::SmartMoneyInflow
        )
    }

    pub fn is_negative(&self) -> bool {
        !self.is_positive()
    }

    /// Any one of these forces a critical risk level.
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            RiskFactor::RugPattern | RiskFactor::HoneypotRisk | RiskFactor::SingleHolderMajority
        )
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display_via_as_str!(
    Sentiment,
    RiskLevel,
    LiquidityDepth,
    HolderConcentration,
    TrendDirection,
    VolumeProfile,
    RiskFactor,
);

/// Numeric fields echoed from the data point for downstream verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub price: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub liquidity: f64,
    pub holder_count: f64,
    /// Rounded to one decimal
    pub top10_holder_pct: f64,
    pub buys_24h: f64,
    pub sells_24h: f64,
    pub bonding_progress: f64,
    /// Unix epoch milliseconds
    pub timestamp: i64,
}

/// Structured risk assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quant {
    pub risk_level: RiskLevel,
    /// 1 to 8 unique tags in detection order
    pub risk_factors: Vec<RiskFactor>,
    /// 0-100
    pub buy_pressure: u8,
    /// 10-95
    pub volatility_score: u8,
    pub liquidity_depth: LiquidityDepth,
    pub holder_concentration: HolderConcentration,
    pub trend_direction: TrendDirection,
    pub volume_profile: VolumeProfile,
}

/// Final output of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    /// Composite score (0-100)
    pub score: u8,
    pub summary: String,
    pub snapshot: Snapshot,
    pub quant: Quant,
}

impl AnalysisResult {
    /// Wrap the result into the payload accepted by the submission endpoint.
    pub fn into_submission(self, mint: impl Into<Pubkey>) -> Submission {
        Submission {
            mint: mint.into(),
            sentiment: self.sentiment,
            score: self.score,
            summary: self.summary,
            snapshot: self.snapshot,
            quant: self.quant,
        }
    }
}

/// Payload shape `{mint, sentiment, score, summary, snapshot, quant}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub mint: Pubkey,
    pub sentiment: Sentiment,
    pub score: u8,
    pub summary: String,
    pub snapshot: Snapshot,
    pub quant: Quant,
}

/// Analyzer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Snapshot timestamps older than this are replaced with the analysis time
    pub snapshot_max_age_seconds: u64,
    /// Cap on the number of reported risk factors (at least 1)
    pub max_risk_factors: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            snapshot_max_age_seconds: 300,
            max_risk_factors: 8,
        }
    }
}
