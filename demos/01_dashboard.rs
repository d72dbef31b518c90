use esg_signal::{Dashboard, EsgClient, FetchOutcome, filter_companies};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    esg_signal::init_tracing();

    // 1. Point the client at the service named by ESG_API_URL (or the local default).
    let client = EsgClient::from_env()?;
    let status = client.service_status().await;
    println!(
        "Service at {}: healthy={} ready={}",
        client.base_url(),
        status.healthy,
        status.ready
    );

    // 2. Search the company directory.
    let companies = client.company_list().await?;
    println!("{} companies listed", companies.len());
    let term = std::env::args().nth(1).unwrap_or_default();
    let hits = filter_companies(&companies, &term);
    let Some(first) = hits.first() else {
        println!("No company matches {term:?}");
        return Ok(());
    };
    println!("Showing {} ({} matches for {term:?})", first.company, hits.len());
    println!();

    // 3. Select it and load the score card.
    let dashboard = Dashboard::new(client.clone(), first.to_selection());
    match dashboard.select_company(first.to_selection()).await {
        Ok(FetchOutcome::Applied) => {}
        Ok(FetchOutcome::Discarded) => println!("(response superseded)"),
        Err(e) => println!("Failed to load company data: {e}"),
    }
    let view = dashboard.snapshot().await;
    let card = &view.scorecard;

    println!("--- {} [{}] ---", card.name, card.sector);
    println!("ESG score: {} ({} risk)", card.esg_score, card.risk_level);
    println!(
        "  E {} / S {} / G {}",
        card.environmental_score, card.social_score, card.governance_score
    );
    println!(
        "Industry benchmark: {} ({:?})",
        view.industry_benchmark, view.benchmark_position
    );
    println!();

    // 4. History and model accuracy.
    println!("--- Actual vs predicted ---");
    for p in &view.trend {
        println!(
            "  {:>8}: actual {:>6} predicted {:>6}",
            p.label,
            p.actual.map_or_else(|| "-".into(), |v| format!("{v:.1}")),
            p.predicted.map_or_else(|| "-".into(), |v| format!("{v:.1}")),
        );
    }
    match &view.summary {
        Some(s) => println!(
            "MAE {:.2}  RMSE {:.2}  latest residual {:+.2} ({})",
            s.mae,
            s.rmse,
            s.latest_residual(),
            s.latest.label
        ),
        None => println!("No year has both an actual and a predicted score."),
    }
    for m in &view.by_year {
        let r2 = m.r2.map_or_else(|| "n/a".into(), |v| format!("{v:.3}"));
        println!("  {}: error {:+.2}  cumulative R² {r2}", m.label, m.error);
    }

    Ok(())
}
