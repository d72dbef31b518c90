use esg_signal::{EsgClient, ModelDiagnostics, RetryConfig};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    esg_signal::init_tracing();

    // A client tuned for a slow deployment: short timeouts and retries turned on.
    let mut builder = EsgClient::builder()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(3))
        .retry_config(RetryConfig::enabled());
    if let Ok(raw) = std::env::var(esg_signal::core::client::BASE_URL_ENV) {
        builder = builder.base_url(raw.parse()?);
    }
    let client = builder.build()?;

    let diag = ModelDiagnostics::load(&client).await;
    let m = &diag.metrics;

    println!("--- Model ---");
    println!("Trained: {}", m.trained.map_or("unknown", |t| if t { "yes" } else { "no" }));
    if let Some(at) = m.trained_at_utc() {
        println!("Trained at: {}", at.format("%Y-%m-%d %H:%M UTC"));
    }
    for (name, value) in [("RMSE", m.rmse), ("MAE", m.mae), ("R²", m.r2)] {
        match value {
            Some(v) => println!("{name:>5}: {v:.3}"),
            None => println!("{name:>5}: n/a"),
        }
    }
    if let (Some(train), Some(test)) = (m.n_train, m.n_test) {
        println!("Split: {train} train / {test} test rows");
    }
    println!();

    println!("--- Feature importance ---");
    let mut ranked = diag.importance_or_features();
    ranked.sort_by(|a, b| b.importance.total_cmp(&a.importance));
    for f in ranked {
        let bar = "#".repeat((f.importance * 50.0).round().max(0.0) as usize);
        println!("{:<24} {:>6.3} {bar}", f.feature, f.importance);
    }

    Ok(())
}
