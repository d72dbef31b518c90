use crate::{
    companies::{model::CompanyListing, wire::CompanyListEnvelope},
    core::{EsgClient, EsgError, client::constants::PATH_COMPANY_LIST, net},
};

pub(super) async fn fetch_company_list(client: &EsgClient) -> Result<Vec<CompanyListing>, EsgError> {
    let env: CompanyListEnvelope = net::get_json(client, PATH_COMPANY_LIST).await?;

    // Entries without a name cannot be looked up later, so they are dropped.
    Ok(env
        .companies
        .into_iter()
        .filter_map(|n| {
            Some(CompanyListing {
                company: n.company?,
                industry: n.industry,
                region: n.region,
            })
        })
        .collect())
}
