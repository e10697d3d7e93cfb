use serde::Deserialize;

/// Query for one page of `GET /jobs`. `None` filters are not sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub limit: u32,
    pub title: Option<String>,
    pub platform: Option<String>,
}

/// One job posting as served by the backend. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobRecord {
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date_posted: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobPage {
    pub jobs: Vec<JobRecord>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScrapeAck {
    pub message: String,
}

/// Raw `/jobs` body. `jobs` is required; `total` defaults to 0.
#[derive(Debug, Deserialize)]
pub(crate) struct JobsEnvelope {
    #[serde(default)]
    pub jobs: Option<Vec<JobRecord>>,
    #[serde(default)]
    pub total: Option<u64>,
}
