use async_trait::async_trait;

use crate::error::FetchError;
use crate::model::{project_videos, TrendingResponse, VideoSummary};

/// Fixed trending endpoint of the video API
pub const TRENDING_ENDPOINT: &str = "https://apis.ccbp.in/videos/trending";

/// Remote collaborator serving the trending list
#[async_trait]
pub trait VideoApi: Send + Sync {
    /// Fetches the trending videos, authenticated with `token` as bearer
    async fn trending_videos(&self, token: Option<String>) -> Result<Vec<VideoSummary>, FetchError>;
}

/// `VideoApi` over HTTP
pub struct HttpVideoApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpVideoApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// GET on the endpoint with `Authorization: Bearer <token>`.
    /// A missing token is sent as an empty bearer value.
    pub fn build_request(&self, token: Option<&str>) -> reqwest::Result<reqwest::Request> {
        self.client
            .get(&self.endpoint)
            .bearer_auth(token.unwrap_or_default())
            .build()
    }
}

#[async_trait]
impl VideoApi for HttpVideoApi {
    async fn trending_videos(&self, token: Option<String>) -> Result<Vec<VideoSummary>, FetchError> {
        let request = self
            .build_request(token.as_deref())
            .map_err(FetchError::Transport)?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(FetchError::Body)?;
        parse_trending(&body)
    }
}

/// Decodes a trending response body into display models
pub fn parse_trending(body: &[u8]) -> Result<Vec<VideoSummary>, FetchError> {
    let response: TrendingResponse = serde_json::from_slice(body)?;
    Ok(project_videos(response.videos))
}
