//! Verification snapshot.
//!
//! The submission endpoint checks these ten numbers against live data, so
//! they are echoed from the data point without further rounding (except the
//! top-10 share, kept to one decimal).

use crate::oracle::types::Snapshot;
use crate::types::{safe, safe_count, DataPoint};
use chrono::{DateTime, Duration, Utc};
use tracing::warn;

/// Build the snapshot for `dp` as seen at `now`.
///
/// The capture timestamp is kept only while it is younger than `max_age`;
/// a stale or missing one is replaced with `now`.
pub fn build_snapshot(
    dp: &DataPoint,
    top10_pct: f64,
    now: DateTime<Utc>,
    max_age: Duration,
) -> Snapshot {
    Snapshot {
        price: safe(dp.price_usd),
        market_cap: safe(dp.market_cap),
        volume_24h: safe(dp.volume_24h),
        liquidity: safe(dp.liquidity),
        holder_count: safe_count(dp.holder_count),
        top10_holder_pct: (top10_pct * 10.0).round() / 10.0,
        buys_24h: safe_count(dp.buys_24h),
        sells_24h: safe_count(dp.sells_24h),
        bonding_progress: safe(dp.bonding_progress),
        timestamp: snapshot_timestamp(dp.timestamp, now, max_age),
    }
}

fn snapshot_timestamp(captured_ms: Option<i64>, now: DateTime<Utc>, max_age: Duration) -> i64 {
    let now_ms = now.timestamp_millis();
    match captured_ms {
        Some(ts) if now_ms.saturating_sub(ts) < max_age.num_milliseconds() => ts,
        Some(ts) => {
            warn!(
                "Capture timestamp {} is {}s old, substituting analysis time",
                ts,
                now_ms.saturating_sub(ts) / 1000
            );
            now_ms
        }
        None => now_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp_millis(1_750_000_000_000).unwrap()
    }

    fn five_minutes() -> Duration {
        Duration::seconds(300)
    }

    #[test]
    fn test_fields_echo_data_point() {
        let dp = DataPoint {
            price_usd: Some(0.0042),
            market_cap: Some(4_200_000.0),
            volume_24h: Some(810_000.0),
            liquidity: Some(120_000.0),
            holder_count: Some(1_234),
            buys_24h: Some(900),
            sells_24h: Some(450),
            bonding_progress: Some(100.0),
            ..Default::default()
        };

        let snapshot = build_snapshot(&dp, 27.349, now(), five_minutes());

        assert_eq!(snapshot.price, 0.0042);
        assert_eq!(snapshot.market_cap, 4_200_000.0);
        assert_eq!(snapshot.volume_24h, 810_000.0);
        assert_eq!(snapshot.liquidity, 120_000.0);
        assert_eq!(snapshot.holder_count, 1_234.0);
        assert_eq!(snapshot.top10_holder_pct, 27.3);
        assert_eq!(snapshot.buys_24h, 900.0);
        assert_eq!(snapshot.sells_24h, 450.0);
        assert_eq!(snapshot.bonding_progress, 100.0);
    }

    #[test]
    fn test_missing_fields_are_zero() {
        let snapshot = build_snapshot(&DataPoint::default(), 0.0, now(), five_minutes());

        assert_eq!(snapshot.price, 0.0);
        assert_eq!(snapshot.holder_count, 0.0);
        assert_eq!(snapshot.timestamp, now().timestamp_millis());
    }

    #[test]
    fn test_fresh_timestamp_is_kept() {
        let captured = now().timestamp_millis() - 299_999;
        let dp = DataPoint {
            timestamp: Some(captured),
            ..Default::default()
        };

        let snapshot = build_snapshot(&dp, 0.0, now(), five_minutes());
        assert_eq!(snapshot.timestamp, captured);
    }

    #[test]
    fn test_stale_timestamp_is_replaced() {
        let dp = DataPoint {
            timestamp: Some(now().timestamp_millis() - 300_000),
            ..Default::default()
        };

        let snapshot = build_snapshot(&dp, 0.0, now(), five_minutes());
        assert_eq!(snapshot.timestamp, now().timestamp_millis());
    }

    #[test]
    fn test_future_timestamp_counts_as_fresh() {
        let captured = now().timestamp_millis() + 10_000;
        let dp = DataPoint {
            timestamp: Some(captured),
            ..Default::default()
        };

        let snapshot = build_snapshot(&dp, 0.0, now(), five_minutes());
        assert_eq!(snapshot.timestamp, captured);
    }
}
