use crate::{
    company_info::{
        model::{CompanyEsgInfo, PeerScore, TrendVsRest},
        wire::{CompanyInfoEnvelope, PeerNode, TrendNode},
    },
    core::{EsgClient, EsgError, client::constants::PATH_COMPANY_INFO, net},
    metrics::TrendPoint,
};

pub(super) async fn fetch_company_info(
    client: &EsgClient,
    company: &str,
    compare_with: Option<&str>,
) -> Result<CompanyEsgInfo, EsgError> {
    let mut url = client.endpoint(PATH_COMPANY_INFO)?;
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("company", company);
        if let Some(other) = compare_with {
            qp.append_pair("compare_with", other);
        }
    }

    let env: CompanyInfoEnvelope =
        net::fetch_json(client, client.http().get(url), "company_esg_info", company).await?;

    if let Some(msg) = env.error {
        return Err(EsgError::Backend(msg));
    }

    Ok(CompanyEsgInfo {
        company: env.company,
        trend: assemble_trend(env.trend),
        industry_comparison: env.industry_comparison.into_iter().map(peer_score).collect(),
        rest_comparison: env
            .rest_of_companies_comparison
            .into_iter()
            .map(peer_score)
            .collect(),
        trend_vs_rest: env
            .trend_comparison_with_rest
            .into_iter()
            .map(|n| TrendVsRest {
                year: n.year,
                selected_actual: n.selected_company_actual,
                selected_predicted: n.selected_company_predicted,
                rest_actual_avg: n.rest_companies_actual_avg,
                rest_predicted_avg: n.rest_companies_predicted_avg,
            })
            .collect(),
        compare_trend: assemble_trend(env.compare_company_trend),
    })
}

/// Sort oldest first and label each point.
///
/// The sort is stable and a missing year sorts as 0. Points without a usable year are
/// labelled by their 1-based position after sorting.
pub(crate) fn assemble_trend(mut nodes: Vec<TrendNode>) -> Vec<TrendPoint> {
    nodes.sort_by_key(|n| n.year.unwrap_or(0));
    nodes
        .into_iter()
        .enumerate()
        .map(|(i, n)| {
            let label = match n.year {
                Some(y) if y != 0 => y.to_string(),
                _ => format!("Point {}", i + 1),
            };
            TrendPoint {
                label,
                year: n.year,
                actual: n.actual_esg_score,
                predicted: n.predicted_esg_score,
            }
        })
        .collect()
}

fn peer_score(n: PeerNode) -> PeerScore {
    PeerScore {
        name: n.company.unwrap_or_default(),
        environmental: n.environmental_score,
        social: n.social_score,
        governance: n.governance_score,
        overall: n.actual_esg_score.or(n.predicted_esg_score),
    }
}
