//! Performance benchmarks for the forecasting models

use std::time::Instant;

use forecast_facade::prelude::*;
use forecast_facade::{optimize_ses, ses_forecast_mse};

fn generate_intermittent(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            if i % 3 == 0 || i % 7 == 0 {
                5.0 + 3.0 * (t * 0.1).sin()
            } else {
                0.0
            }
        })
        .collect()
}

fn bench<F>(name: &str, iterations: u32, mut f: F)
where
    F: FnMut(),
{
    // Warmup
    for _ in 0..3 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations;

    println!(
        "{:34} {:>10.2?} total, {:>10.2?}/iter ({} iters)",
        name, elapsed, per_iter, iterations
    );
}

fn main() {
    println!("=== Forecast Model Benchmarks ===\n");

    let data_1k = generate_intermittent(1_000);
    let data_10k = generate_intermittent(10_000);

    println!("--- Smoothing primitive (10K points) ---");
    bench("ses_forecast_mse", 1000, || {
        let _ = ses_forecast_mse(&data_10k, 0.1);
    });
    bench("optimize_ses", 100, || {
        let _ = optimize_ses(&data_10k, AlphaBounds::default());
    });

    println!("\n--- Models (1K points, horizon 12) ---");
    for kind in ModelKind::all() {
        let model = ModelConfig::from(*kind)
            .build()
            .expect("default configuration is valid");
        bench(kind.as_str(), 200, || {
            let _ = model.forecast(&data_1k, 12);
        });
    }

    println!("\n=== Benchmarks Complete ===");
}
