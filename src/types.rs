//! Core input types for the quant oracle.
//!
//! A [`DataPoint`] is the flat snapshot of one token at one instant, as served
//! by the remote data service. Every field is optional on the wire: a missing
//! key deserializes to `None` and the analyzer falls back to a fixed value.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A simple public key representation (base58 string, no Solana dependency)
pub type Pubkey = String;

/// One token at one instant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataPoint {
    // --- Identity ---
    /// The mint address of the token
    pub mint: Pubkey,
    pub name: String,
    pub symbol: String,
    /// Metadata URI
    pub uri: Option<String>,
    /// Creator wallet
    pub creator: Option<Pubkey>,

    // --- Pricing ---
    pub price_usd: Option<f64>,
    pub price_sol: Option<f64>,
    /// Percentage price changes
    pub price_change_5m: Option<f64>,
    pub price_change_1h: Option<f64>,
    pub price_change_6h: Option<f64>,
    pub price_change_24h: Option<f64>,

    // --- Market metrics (USD) ---
    pub market_cap: Option<f64>,
    /// Fully diluted value
    pub fdv: Option<f64>,
    pub total_supply: Option<f64>,
    pub liquidity: Option<f64>,
    pub liquidity_sol: Option<f64>,

    // --- Volume (USD) ---
    pub volume_5m: Option<f64>,
    pub volume_1h: Option<f64>,
    pub volume_6h: Option<f64>,
    pub volume_24h: Option<f64>,

    // --- Activity ---
    #[serde(deserialize_with = "lenient_count")]
    pub trades_5m: Option<u64>,
    #[serde(deserialize_with = "lenient_count")]
    pub trades_1h: Option<u64>,
    #[serde(deserialize_with = "lenient_count")]
    pub trades_24h: Option<u64>,
    #[serde(deserialize_with = "lenient_count")]
    pub buys_1h: Option<u64>,
    #[serde(deserialize_with = "lenient_count")]
    pub sells_1h: Option<u64>,
    #[serde(deserialize_with = "lenient_count")]
    pub buys_24h: Option<u64>,
    #[serde(deserialize_with = "lenient_count")]
    pub sells_24h: Option<u64>,
    #[serde(deserialize_with = "lenient_count")]
    pub unique_traders_24h: Option<u64>,
    #[serde(deserialize_with = "lenient_count")]
    pub holder_count: Option<u64>,

    // --- Bonding curve ---
    /// Whether the token has graduated from its bonding curve
    pub bonding_complete: Option<bool>,
    /// Bonding curve progress percentage (0-100)
    pub bonding_progress: Option<f64>,

    // --- Live stream ---
    pub is_live: Option<bool>,
    #[serde(deserialize_with = "lenient_count")]
    pub viewer_count: Option<u64>,

    // --- Socials ---
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub telegram: Option<String>,
    pub discord: Option<String>,

    // --- DEX flags ---
    pub dex_paid: Option<bool>,
    pub dex_listed: Option<bool>,
    pub raydium_pool: Option<Pubkey>,

    // --- Holder tiers (percentage of supply) ---
    pub top_holders: Option<Vec<TopHolder>>,
    pub top10_holding: Option<f64>,
    pub snipers_holding: Option<f64>,
    pub insiders_holding: Option<f64>,
    pub bundlers_holding: Option<f64>,
    pub fresh_wallets_holding: Option<f64>,
    pub creator_holding: Option<f64>,

    pub recent_trades: Option<Vec<RecentTrade>>,

    // --- Capture ---
    /// Capture time, unix epoch milliseconds
    #[serde(deserialize_with = "lenient_millis")]
    pub timestamp: Option<i64>,
    /// Time-to-live in seconds
    #[serde(deserialize_with = "lenient_count")]
    pub ttl: Option<u64>,
}

/// An entry of the ranked top-holders list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TopHolder {
    pub address: Pubkey,
    /// Absolute token amount
    pub amount: Option<f64>,
    /// Percentage of total supply
    pub pct: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

/// A recent swap on the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentTrade {
    #[serde(default)]
    pub signature: String,
    #[serde(default)]
    pub wallet: Pubkey,
    /// `None` when the service could not classify the swap
    #[serde(default)]
    pub side: Option<TradeSide>,
    #[serde(default)]
    pub sol_amount: Option<f64>,
    #[serde(default)]
    pub token_amount: Option<f64>,
    /// Unix epoch milliseconds
    #[serde(default, deserialize_with = "lenient_millis")]
    pub timestamp: Option<i64>,
}

impl DataPoint {
    /// Parse a data point from the service's JSON payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        serde_json::from_str(payload).context("Failed to parse data point JSON")
    }

    /// Capture time as a UTC instant, if present and representable.
    pub fn captured_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp.and_then(DateTime::from_timestamp_millis)
    }

    /// When this data point stops being valid (capture time + ttl).
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let captured = self.captured_at()?;
        let ttl = chrono::Duration::try_seconds(i64::try_from(self.ttl?).ok()?)?;
        captured.checked_add_signed(ttl)
    }

    /// True once the ttl has elapsed. A data point without ttl never expires.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expiry| now >= expiry)
    }
}

/// Accept any JSON number for a count. Floats are truncated; negative or
/// non-numeric values read as absent instead of failing the whole payload.
fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| {
        v.as_u64().or_else(|| {
            v.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && *f <= u64::MAX as f64)
                .map(|f| f.trunc() as u64)
        })
    }))
}

/// Epoch milliseconds written as an integer or a float.
fn lenient_millis<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| {
        v.as_i64().or_else(|| {
            v.as_f64()
                .filter(|f| f.is_finite() && f.abs() <= i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        })
    }))
}

/// Treat non-finite and absent values alike.
pub fn safe(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Count field as f64, absent counts are zero.
pub fn safe_count(value: Option<u64>) -> f64 {
    value.unwrap_or(0) as f64
}

/// A social link is present only when it is a non-blank string.
pub fn has_social(link: &Option<String>) -> bool {
    link.as_deref().is_some_and(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_camel_case_and_missing_fields() {
        let dp = DataPoint::from_json(
            r#"{
                "mint": "So1anaMint111",
                "name": "Test",
                "symbol": "TST",
                "priceChange1h": 4.5,
                "volume24h": 1200.0,
                "buys24h": 10,
                "top10Holding": 33.3,
                "bondingComplete": true,
                "topHolders": [{"address": "w1", "pct": 12.0}]
            }"#,
        )
        .unwrap();

        assert_eq!(dp.mint, "So1anaMint111");
        assert_eq!(dp.price_change_1h, Some(4.5));
        assert_eq!(dp.volume_24h, Some(1200.0));
        assert_eq!(dp.buys_24h, Some(10));
        assert_eq!(dp.sells_24h, None);
        assert_eq!(dp.top10_holding, Some(33.3));
        assert_eq!(dp.bonding_complete, Some(true));
        assert_eq!(dp.top_holders.as_ref().map(Vec::len), Some(1));
        assert!(dp.market_cap.is_none());
    }

    #[test]
    fn test_from_json_tolerates_loose_numbers_and_trades() {
        let dp = DataPoint::from_json(
            r#"{
                "holderCount": 1420.0,
                "buys24h": -5,
                "sells24h": "many",
                "viewerCount": null,
                "timestamp": 1760000000000.0,
                "ttl": 30.9,
                "recentTrades": [
                    {"signature": "sig1", "side": null},
                    {"signature": "sig2"},
                    {"signature": "sig3", "side": "sell", "timestamp": 1760000000000}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(dp.holder_count, Some(1420));
        assert_eq!(dp.buys_24h, None);
        assert_eq!(dp.sells_24h, None);
        assert_eq!(dp.viewer_count, None);
        assert_eq!(dp.timestamp, Some(1_760_000_000_000));
        assert_eq!(dp.ttl, Some(30));

        let trades = dp.recent_trades.unwrap();
        assert_eq!(trades.len(), 3);
        assert_eq!(trades[0].side, None);
        assert_eq!(trades[1].side, None);
        assert_eq!(trades[2].side, Some(TradeSide::Sell));
        assert_eq!(trades[2].timestamp, Some(1_760_000_000_000));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(DataPoint::from_json("not json").is_err());
    }

    #[test]
    fn test_safe_fallbacks() {
        assert_eq!(safe(None), 0.0);
        assert_eq!(safe(Some(f64::NAN)), 0.0);
        assert_eq!(safe(Some(f64::INFINITY)), 0.0);
        assert_eq!(safe(Some(-3.5)), -3.5);
        assert_eq!(safe_count(None), 0.0);
        assert_eq!(safe_count(Some(42)), 42.0);
    }

    #[test]
    fn test_has_social() {
        assert!(!has_social(&None));
        assert!(!has_social(&Some("  ".to_string())));
        assert!(has_social(&Some("https://x.com/token".to_string())));
    }

    #[test]
    fn test_expiry() {
        let dp = DataPoint {
            timestamp: Some(1_700_000_000_000),
            ttl: Some(60),
            ..Default::default()
        };
        let captured = dp.captured_at().unwrap();

        assert_eq!(dp.expires_at(), Some(captured + chrono::Duration::seconds(60)));
        assert!(!dp.is_expired(captured + chrono::Duration::seconds(59)));
        assert!(dp.is_expired(captured + chrono::Duration::seconds(60)));

        let no_ttl = DataPoint { ttl: None, ..dp };
        assert!(!no_ttl.is_expired(captured + chrono::Duration::days(365)));
    }
}
