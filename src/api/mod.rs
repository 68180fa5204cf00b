//! Warcraft Logs API manager: authentication, the two report queries and the
//! snapshot of the most recent listing.

pub mod listing;
pub mod transport;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AuthenticationError, FetchError, PartialDataWarning};
use crate::model::Report;
use crate::query::GraphqlRequest;
use crate::response::envelope::{DetailResponse, GraphqlResponse, ListingResponse, TokenResponse};

pub use listing::{RECENT_LIMIT, ReportListing};
pub use transport::{HttpTransport, RawResponse, Transport};

#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

pub struct ApiManager<T: Transport = HttpTransport> {
    transport: T,
    credentials: Credentials,
    api_url: String,
    auth_url: String,
    token: RwLock<Option<String>>,
    reports: RwLock<Arc<ReportListing>>,
}

impl ApiManager<HttpTransport> {
    pub fn new(config: &Config) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }
}

impl<T: Transport> ApiManager<T> {
    pub fn with_transport(config: &Config, transport: T) -> Self {
        ApiManager {
            transport,
            credentials: Credentials {
                client_id: config.client_id.clone(),
                client_secret: config.client_secret.clone(),
            },
            api_url: config.api_url.clone(),
            auth_url: config.auth_url.clone(),
            token: RwLock::new(None),
            reports: RwLock::new(Arc::new(ReportListing::default())),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Exchanges the client credentials for a bearer token.
    ///
    /// A failed attempt drops any previous token, so later fetches fail with
    /// [`FetchError::NotAuthenticated`] until this succeeds again.
    pub async fn authenticate(&self) -> Result<(), AuthenticationError> {
        let result = self.request_token().await;
        let mut token = self.token.write().await;
        match result {
            Ok(new_token) => {
                *token = Some(new_token);
                info!("authenticated against Warcraft Logs");
                Ok(())
            }
            Err(err) => {
                *token = None;
                warn!(error = %err, "authentication against Warcraft Logs failed");
                Err(err)
            }
        }
    }

    async fn request_token(&self) -> Result<String, AuthenticationError> {
        let res = self
            .transport
            .request_token(
                &self.auth_url,
                &self.credentials.client_id,
                &self.credentials.client_secret,
            )
            .await
            .map_err(AuthenticationError::Transport)?;

        if !res.is_success() {
            debug!(status = res.status, body = %res.body, "token endpoint rejected credentials");
            return Err(AuthenticationError::Status(res.status));
        }

        let token: TokenResponse = serde_json::from_str(&res.body)?;
        Ok(token.access_token)
    }

    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Current listing snapshot. Iterating it never observes a concurrent
    /// fetch half-way.
    pub async fn reports(&self) -> Arc<ReportListing> {
        self.reports.read().await.clone()
    }

    /// Fetches the guild's most recent reports and replaces the listing
    /// snapshot with them.
    pub async fn fetch_recent_reports(
        &self,
        guild_id: i64,
    ) -> Result<Arc<ReportListing>, FetchError> {
        // Covers the NO_GUILD sentinel; it must never reach the API.
        if guild_id < 0 {
            return Err(FetchError::InvalidGuild(guild_id));
        }

        let body = self.query(&GraphqlRequest::reports(guild_id)).await?;
        let response: ListingResponse = serde_json::from_str(&body)?;
        log_graphql_errors(&response);

        let entries = response.into_entries().unwrap_or_else(|| {
            warn!(warning = %PartialDataWarning::MissingListing, guild_id);
            Vec::new()
        });

        let reports = entries
            .iter()
            .map(Report::from_api_object)
            .filter(|report| {
                if report.id.is_empty() {
                    warn!(warning = %PartialDataWarning::ReportWithoutCode, guild_id);
                }
                !report.id.is_empty()
            });
        let listing = Arc::new(ReportListing::from_reports(reports));
        info!(guild_id, count = listing.len(), "fetched recent reports");

        *self.reports.write().await = listing.clone();
        Ok(listing)
    }

    /// Fetches one report in full. `Ok(None)` when the API has no report
    /// with that code.
    pub async fn fetch_report(&self, report_id: &str) -> Result<Option<Report>, FetchError> {
        let report_id = report_id.trim();
        if report_id.is_empty() {
            return Err(FetchError::InvalidReportId);
        }

        let body = self.query(&GraphqlRequest::report(report_id)).await?;
        let response: DetailResponse = serde_json::from_str(&body)?;
        log_graphql_errors(&response);

        match response.into_report() {
            Some(obj) => {
                let report = Report::from_api_object(&obj);
                info!(report_id, fights = report.fights.len(), "fetched report");
                Ok(Some(report))
            }
            None => {
                info!(report_id, "no report found");
                Ok(None)
            }
        }
    }

    async fn query(&self, request: &GraphqlRequest) -> Result<String, FetchError> {
        let token = self
            .token
            .read()
            .await
            .clone()
            .ok_or(FetchError::NotAuthenticated)?;

        let res = self
            .transport
            .post_query(&self.api_url, &token, request)
            .await
            .map_err(FetchError::Transport)?;

        if !res.is_success() {
            debug!(status = res.status, body = %res.body, "query rejected");
            return Err(FetchError::Status(res.status));
        }
        Ok(res.body)
    }
}

fn log_graphql_errors<D>(response: &GraphqlResponse<D>) {
    for message in response.error_messages() {
        warn!(error = message, "GraphQL error in response");
    }
}
