use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub const UNKNOWN_BUSINESS: &str = "Unknown Business";
pub const NO_DESCRIPTION: &str = "No description found";

/// One scraped website, as returned by `/api/scrape` and echoed back by the
/// frontend as `business_data` on `/api/chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default)]
    pub emails: BTreeSet<String>,
    #[serde(default)]
    pub phones: BTreeSet<String>,
    #[serde(default)]
    pub scrape_time: f64,
}

fn default_name() -> String {
    UNKNOWN_BUSINESS.to_string()
}

fn default_description() -> String {
    NO_DESCRIPTION.to_string()
}
