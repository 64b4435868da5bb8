//! Fetch wrapper for the remote plan API.
//!
//! The core never talks to the network; this module turns a shared
//! plan URL into the raw JSON body the normalizer consumes. Fetch
//! failures surface immediately with no records and no retries.

use anyhow::{bail, Context, Result};
use url::Url;

const API_URL: &str = "https://teamapi.coros.com/training/plan/detail";

/// The API rejects the default client UA; present a mobile browser.
const USER_AGENT: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 14_0 like Mac OS X) AppleWebKit/605.1.15";

/// Extract the plan id and region from a shared plan URL.
///
/// Share links carry the parameters either in the query string or
/// behind the fragment router (`...#/detail?planId=...`); both forms
/// are accepted. The region defaults to "1" when absent.
fn plan_params(plan_url: &str) -> Result<(String, String)> {
    let parsed = Url::parse(plan_url).with_context(|| format!("Invalid plan URL: {plan_url}"))?;

    let mut plan_id = None;
    let mut region = None;

    let fragment_query = parsed
        .fragment()
        .and_then(|f| f.split_once('?'))
        .map(|(_, q)| q.to_string());
    let pairs = parsed
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .chain(
            fragment_query
                .iter()
                .flat_map(|q| url::form_urlencoded::parse(q.as_bytes()))
                .map(|(k, v)| (k.into_owned(), v.into_owned())),
        );

    for (key, value) in pairs {
        match key.as_str() {
            "planId" => plan_id = Some(value),
            "region" => region = Some(value),
            _ => {}
        }
    }

    let Some(plan_id) = plan_id else {
        bail!("Could not find a planId in the URL. Paste the full shared plan link.");
    };
    Ok((plan_id, region.unwrap_or_else(|| "1".to_string())))
}

/// Fetch the raw plan detail JSON for a shared plan URL.
pub async fn fetch_plan(plan_url: &str) -> Result<String> {
    let (plan_id, region) = plan_params(plan_url)?;

    let client = reqwest::Client::new();
    let response = client
        .get(API_URL)
        .query(&[
            ("supportRestExercise", "1"),
            ("id", plan_id.as_str()),
            ("region", region.as_str()),
        ])
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .context("Failed to reach the plan API")?;

    let response = response
        .error_for_status()
        .context("Plan API returned an error")?;

    response
        .text()
        .await
        .context("Failed to read the plan API response")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_and_region_from_the_query() {
        let (id, region) =
            plan_params("https://t.example.com/plan/detail?planId=12345&region=2").unwrap();
        assert_eq!(id, "12345");
        assert_eq!(region, "2");
    }

    #[test]
    fn region_defaults_to_one() {
        let (id, region) = plan_params("https://t.example.com/plan?planId=9").unwrap();
        assert_eq!(id, "9");
        assert_eq!(region, "1");
    }

    #[test]
    fn reads_parameters_behind_the_fragment_router() {
        let (id, region) =
            plan_params("https://t.example.com/app#/detail?planId=77&region=3").unwrap();
        assert_eq!(id, "77");
        assert_eq!(region, "3");
    }

    #[test]
    fn missing_plan_id_is_an_error() {
        assert!(plan_params("https://t.example.com/plan?region=1").is_err());
        assert!(plan_params("not a url").is_err());
    }
}
