//! Demo entry point for the quant oracle.
//!
//! Usage: `quant-oracle [datapoint.json] [config.json]`
//!
//! Without arguments a built-in sample token is analyzed. The resulting
//! submission payload is printed as JSON.

use anyhow::{Context, Result};
use chrono::Utc;
use quant_oracle::{AnalyzerBuilder, AnalyzerConfig, DataPoint, TopHolder};
use std::fs;
use tracing::{info, warn, Level};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let data_point = match args.next() {
        Some(path) => load_data_point(&path)?,
        None => {
            info!("No data point given, analyzing built-in sample");
            sample_data_point()
        }
    };
    let config = match args.next() {
        Some(path) => load_config(&path)?,
        None => AnalyzerConfig::default(),
    };

    let now = Utc::now();
    if data_point.is_expired(now) {
        warn!(
            "Data point for {} expired at {:?}",
            data_point.mint,
            data_point.expires_at()
        );
    }

    let analyzer = AnalyzerBuilder::from_config(config).build();
    let result = analyzer.analyze_at(&data_point, now);
    let submission = result.into_submission(data_point.mint.clone());

    println!("{}", serde_json::to_string_pretty(&submission)?);
    Ok(())
}

fn load_data_point(path: &str) -> Result<DataPoint> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data point from {}", path))?;
    DataPoint::from_json(&content)
}

fn load_config(path: &str) -> Result<AnalyzerConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid config in {}", path))
}

fn sample_data_point() -> DataPoint {
    DataPoint {
        mint: "DemoToken1111111111111111111111111111111pump".to_string(),
        name: "Demo Token".to_string(),
        symbol: "DEMO".to_string(),
        price_usd: Some(0.00512),
        price_change_1h: Some(6.2),
        price_change_24h: Some(-14.0),
        market_cap: Some(5_120_000.0),
        liquidity: Some(310_000.0),
        volume_24h: Some(1_450_000.0),
        buys_24h: Some(1_840),
        sells_24h: Some(1_210),
        holder_count: Some(2_310),
        bonding_complete: Some(true),
        bonding_progress: Some(100.0),
        twitter: Some("https://x.com/demotoken".to_string()),
        telegram: Some("https://t.me/demotoken".to_string()),
        top_holders: Some(vec![
            TopHolder {
                address: "PoolVault111111111111111111111111111111111".to_string(),
                amount: Some(182_000_000.0),
                pct: Some(18.2),
            },
            TopHolder {
                address: "Whale2222222222222222222222222222222222222".to_string(),
                amount: Some(41_000_000.0),
                pct: Some(4.1),
            },
        ]),
        snipers_holding: Some(6.5),
        timestamp: Some(Utc::now().timestamp_millis()),
        ttl: Some(120),
        ..Default::default()
    }
}
