use serde::Deserialize;

use crate::core::wire::{de_lenient_string, de_lenient_vec};

#[derive(Deserialize)]
pub(crate) struct CompanyListEnvelope {
    #[serde(default, deserialize_with = "de_lenient_vec")]
    pub(crate) companies: Vec<CompanyNode>,
}

#[derive(Deserialize)]
pub(crate) struct CompanyNode {
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) company: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) industry: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    pub(crate) region: Option<String>,
}
