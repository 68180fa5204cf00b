use async_trait::async_trait;

use crate::error::TransportError;
use crate::query::GraphqlRequest;

/// Status and body of an HTTP exchange. Interpreting either is left to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// Both endpoints answer 200 on success; anything else is a failure.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Port for the two HTTP calls the API manager makes.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Client-credentials grant with HTTP basic auth.
    async fn request_token(
        &self,
        url: &str,
        client_id: &str,
        client_secret: &str,
    ) -> Result<RawResponse, TransportError>;

    /// GraphQL query with a bearer token.
    async fn post_query(
        &self,
        url: &str,
        token: &str,
        request: &GraphqlRequest,
    ) -> Result<RawResponse, TransportError>;
}

/// [`Transport`] over `reqwest`, using the client's default timeouts.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    async fn finish(res: reqwest::Response) -> Result<RawResponse, TransportError> {
        let status = res.status().as_u16();
        let body = res.text().await?;
        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request_token(
        &self,
        url: &str,
        client_id: &str,
        client_secret: &str,
    ) -> Result<RawResponse, TransportError> {
        let res = self
            .http
            .post(url)
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;
        Self::finish(res).await
    }

    async fn post_query(
        &self,
        url: &str,
        token: &str,
        request: &GraphqlRequest,
    ) -> Result<RawResponse, TransportError> {
        let res = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;
        Self::finish(res).await
    }
}
