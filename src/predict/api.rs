use reqwest::multipart::Form;
use serde_json::Value;

use crate::{
    core::{
        EsgClient, EsgError,
        client::constants::{PATH_PREDICT, PATH_PREDICT_CSV},
        net,
    },
    predict::{
        input::PredictionInput,
        model::{BatchPredictions, PredictionResult},
        upload::BatchUpload,
    },
};

const NOT_A_ROW_LIST: &str = "batch prediction did not return a list of rows";

pub(super) async fn predict_single(
    client: &EsgClient,
    input: &PredictionInput,
) -> Result<PredictionResult, EsgError> {
    let url = client.endpoint(PATH_PREDICT)?;
    let req = client.http().post(url).json(input);
    net::fetch_json(client, req, "predict", "single").await
}

pub(super) async fn predict_batch(
    client: &EsgClient,
    upload: BatchUpload,
) -> Result<BatchPredictions, EsgError> {
    let url = client.endpoint(PATH_PREDICT_CSV)?;
    let key = upload.file_name().to_string();
    let form = Form::new().part("file", upload.into_part()?);
    let req = client.http().post(url).multipart(form);

    let body: Value = net::fetch_json(client, req, "predict_csv", &key).await?;
    match body {
        Value::Array(items) => Ok(BatchPredictions {
            rows: items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(row) => Some(row),
                    _ => None,
                })
                .collect(),
        }),
        Value::Object(obj) => match obj.get("error").and_then(Value::as_str) {
            Some(msg) => Err(EsgError::Backend(msg.to_string())),
            None => Err(EsgError::Data(NOT_A_ROW_LIST.into())),
        },
        _ => Err(EsgError::Data(NOT_A_ROW_LIST.into())),
    }
}
