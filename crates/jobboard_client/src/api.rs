use std::time::Duration;

use futures_util::StreamExt;
use jobboard_logging::{board_debug, board_warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

use crate::types::JobsEnvelope;
use crate::{ApiError, JobPage, ListParams, ScrapeAck, ShapeError};

const JSON_MEDIA_TYPE: &str = "application/json";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

/// The two calls the dashboard makes against the job backend.
#[async_trait::async_trait]
pub trait JobApi: Send + Sync {
    async fn list_jobs(&self, params: &ListParams) -> Result<JobPage, ApiError>;

    async fn trigger_scrape(&self) -> Result<ScrapeAck, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestJobApi {
    base: Url,
    client: reqwest::Client,
    settings: FetchSettings,
}

impl ReqwestJobApi {
    pub fn new(base_url: &str, settings: FetchSettings) -> Result<Self, ApiError> {
        let base = Url::parse(base_url).map_err(|err| ApiError::InvalidUrl(err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!("{base_url} cannot be a base url")));
        }
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok(Self {
            base,
            client,
            settings,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `base` with `segment` appended, keeping any path prefix of the base.
    fn endpoint(&self, segment: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        url
    }

    pub fn jobs_url(&self, params: &ListParams) -> Url {
        let mut url = self.endpoint("jobs");
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("page", &params.page.to_string())
                .append_pair("limit", &params.limit.to_string());
            if let Some(title) = params.title.as_deref() {
                query.append_pair("title", title);
            }
            if let Some(platform) = params.platform.as_deref() {
                query.append_pair("platform", platform);
            }
        }
        url
    }

    /// Checks status and content type, then reads the body within `max_bytes`.
    async fn read_json_body(&self, response: reqwest::Response) -> Result<Vec<u8>, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        match content_type.as_deref() {
            Some(ct) if is_json(ct) => {}
            Some(ct) => {
                return Err(ShapeError::UnexpectedContentType {
                    content_type: ct.to_string(),
                }
                .into())
            }
            None => return Err(ShapeError::MissingContentType.into()),
        }

        let max_bytes = self.settings.max_bytes;
        if response
            .content_length()
            .is_some_and(|declared| declared > max_bytes)
        {
            return Err(ShapeError::TooLarge { max_bytes }.into());
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(ApiError::from_reqwest)?;
            if bytes.len() as u64 + chunk.len() as u64 > max_bytes {
                return Err(ShapeError::TooLarge { max_bytes }.into());
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl JobApi for ReqwestJobApi {
    async fn list_jobs(&self, params: &ListParams) -> Result<JobPage, ApiError> {
        let url = self.jobs_url(params);
        board_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        let body = self.read_json_body(response).await?;

        let envelope: JobsEnvelope =
            serde_json::from_slice(&body).map_err(|err| ShapeError::Malformed {
                message: err.to_string(),
            })?;
        let jobs = envelope
            .jobs
            .ok_or(ShapeError::MissingField { field: "jobs" })?;
        Ok(JobPage {
            jobs,
            total: envelope.total.unwrap_or(0),
        })
    }

    async fn trigger_scrape(&self) -> Result<ScrapeAck, ApiError> {
        let url = self.endpoint("scrape");
        board_debug!("POST {}", url);

        let result: Result<Vec<u8>, ApiError> = async {
            let response = self
                .client
                .post(url)
                .header(ACCEPT, JSON_MEDIA_TYPE)
                .send()
                .await
                .map_err(ApiError::from_reqwest)?;
            self.read_json_body(response).await
        }
        .await;

        let body = result.map_err(ApiError::into_scrape)?;
        // Only status and content type decide success; the message is informational.
        let message = serde_json::from_slice::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| value.get("message")?.as_str().map(str::to_string))
            .unwrap_or_else(|| {
                board_warn!("Scrape acknowledged without a readable message");
                String::new()
            });
        Ok(ScrapeAck { message })
    }
}

fn is_json(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .eq_ignore_ascii_case(JSON_MEDIA_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(title: Option<&str>, platform: Option<&str>) -> ListParams {
        ListParams {
            page: 2,
            limit: 10,
            title: title.map(str::to_string),
            platform: platform.map(str::to_string),
        }
    }

    #[test]
    fn jobs_url_omits_unset_filters() {
        let api = ReqwestJobApi::new("http://localhost:8000", FetchSettings::default()).unwrap();
        assert_eq!(
            api.jobs_url(&params(None, None)).as_str(),
            "http://localhost:8000/jobs?page=2&limit=10"
        );
        assert_eq!(
            api.jobs_url(&params(Some("data engineer"), Some("LinkedIn")))
                .as_str(),
            "http://localhost:8000/jobs?page=2&limit=10&title=data+engineer&platform=LinkedIn"
        );
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let api = ReqwestJobApi::new("https://api.example.com/v1/", FetchSettings::default())
            .unwrap();
        assert_eq!(
            api.jobs_url(&params(None, Some("Dice"))).as_str(),
            "https://api.example.com/v1/jobs?page=2&limit=10&platform=Dice"
        );
        assert_eq!(
            api.endpoint("scrape").as_str(),
            "https://api.example.com/v1/scrape"
        );
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(
            ReqwestJobApi::new("not a url", FetchSettings::default()),
            Err(ApiError::InvalidUrl(_))
        ));
        assert!(matches!(
            ReqwestJobApi::new("mailto:jobs@example.com", FetchSettings::default()),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn json_detection_ignores_parameters_and_case() {
        assert!(is_json("application/json"));
        assert!(is_json("Application/JSON; charset=utf-8"));
        assert!(!is_json("text/html"));
        assert!(!is_json("application/jsonp"));
    }
}
