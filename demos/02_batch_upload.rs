use esg_signal::{BatchPredictions, BatchUpload, EsgClient, EsgError, PredictionField};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    esg_signal::init_tracing();

    let client = EsgClient::from_env()?;

    // 1. A single prediction; out-of-range values are clamped as they are set.
    let mut input = esg_signal::PredictionInput::new();
    for (field, value) in [
        (PredictionField::EnvironmentalScore, 72.0),
        (PredictionField::SocialScore, 64.0),
        (PredictionField::GovernanceScore, 81.0),
        (PredictionField::CarbonEmissions, 1_250_000.0),
        (PredictionField::EmployeeSatisfaction, 140.0),
        (PredictionField::BoardDiversity, 33.0),
        (PredictionField::Controversies, 8.0),
    ] {
        let stored = input.set(field, value);
        if stored != value {
            println!("{field} clamped from {value} to {stored}");
        }
    }
    let result = client.predict(&input).await?;
    match result.predicted_esg_score {
        Some(score) => println!("Predicted ESG score: {score:.2}"),
        None => println!("The service returned no prediction."),
    }
    println!();

    // 2. A batch prediction from a CSV file given on the command line.
    let Some(path) = std::env::args().nth(1) else {
        println!("Pass a CSV path to run a batch prediction.");
        return Ok(());
    };
    let upload = match BatchUpload::from_path(&path) {
        Ok(u) => u,
        Err(e @ EsgError::MissingColumns(_)) => {
            println!("{path}: {e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    println!("Uploading {} ({} bytes)", upload.file_name(), upload.len());

    let batch = client.predict_csv(upload).await?;
    let columns = batch.columns();
    println!(
        "{}",
        columns
            .iter()
            .map(|c| BatchPredictions::column_label(c))
            .collect::<Vec<_>>()
            .join(" | ")
    );
    for row in batch.rows.iter().take(10) {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| BatchPredictions::cell(row, c))
            .collect();
        println!("{}", cells.join(" | "));
    }
    if batch.len() > 10 {
        println!("... {} more rows", batch.len() - 10);
    }

    if let Some(acc) = batch.accuracy() {
        println!("Against known scores: MAE {:.2}  RMSE {:.2}", acc.mae, acc.rmse);
    }

    Ok(())
}
