//! Basic example demonstrating the forecasting models
//!
//! Run with: RUST_LOG=debug cargo run --example basic -p forecast-facade

use forecast_facade::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forecast_core=info".into()),
        )
        .init();

    println!("=== Forecast Model Examples ===\n");

    // Sporadic demand for a slow-moving item
    let demand = vec![
        0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 2.0, 0.0, 4.0, 0.0, 0.0, 0.0, 5.0, 0.0, 1.0, 0.0,
    ];
    println!("Demand history: {:?}\n", demand);

    // 1. Every registered model at default parameters
    println!("1. Default parameters (horizon 4)");
    for kind in ModelKind::all() {
        let values = forecast(kind.as_str(), &demand, 4)?;
        println!(
            "   {:32} {:?}",
            kind.as_str(),
            values.iter().map(|x| format!("{:.3}", x)).collect::<Vec<_>>()
        );
    }

    // 2. Configured from JSON
    println!("\n2. Configured request");
    let request = ForecastRequest::from_json(
        r#"{"horizon": 8, "model": "seasonal_window_average", "season_length": 4, "window_size": 2}"#,
    )?;
    let values = request.run(&demand)?;
    println!("   {:?} -> {:?}", request.model, values);

    // 3. Direct function calls
    println!("\n3. Direct calls");
    println!("   tsb(0.2, 0.1):     {:?}", tsb(&demand, 2, 0.2, 0.1)?);
    println!("   croston_sba:       {:?}", croston_sba(&demand, 2)?);
    println!("   window_average(32): {:?}", window_average(&demand, 2, 32)?);

    println!("\n=== Examples Complete ===");
    Ok(())
}
