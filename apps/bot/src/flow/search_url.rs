//! Builds the external mediclock-job search URL for a validated selection.

use crate::catalog::{occupation, prefecture};
use crate::config::FlowVariant;
use crate::errors::AppError;

const BASE_URL: &str = "https://mediclock-job.com/job";

/// Assembles the search URL for an (occupation, prefecture) pair.
///
/// Parameter order is fixed and the output is byte-for-byte reproducible:
/// the URL is embedded verbatim in a user-facing link button, and the target
/// site's form expects the duplicated empty `keyword` and the empty salary
/// brackets exactly as its own search page emits them.
pub fn build_search_url(
    variant: FlowVariant,
    occupation_key: &str,
    prefecture_key: &str,
) -> Result<String, AppError> {
    let occupation = occupation(occupation_key).ok_or_else(|| {
        AppError::InvalidSelection(format!("unknown occupation key '{occupation_key}'"))
    })?;
    let prefecture = prefecture(variant, prefecture_key).ok_or_else(|| {
        AppError::InvalidSelection(format!("unknown prefecture key '{prefecture_key}'"))
    })?;

    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.append_pair("keyword", "");
    query.append_pair("keyword", "");
    query.append_pair("occupation_id", &occupation.id.to_string());
    query.append_pair("pref_id[]", &prefecture.id.to_string());
    query.append_pair("salary[1][min]", "");
    query.append_pair("salary[2][min]", "");
    query.append_pair("salary[3][min]", "");
    query.append_pair("salary[4][min]", "");
    query.append_pair("utm_source", "line");
    query.append_pair("utm_medium", "bot");
    query.append_pair("utm_campaign", "job_search");
    query.append_pair("utm_content", &format!("{occupation_key}-{prefecture_key}"));

    Ok(format!("{}?{}", BASE_URL, query.finish()))
}
