/// Failure of the underlying HTTP exchange, before any status is known.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transport error: {0}")]
    Other(String),
}

/// Credential exchange against the token endpoint failed.
///
/// Every data call fails with [`FetchError::NotAuthenticated`] until a later
/// `authenticate` succeeds.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("token request failed: {0}")]
    Transport(#[source] TransportError),

    #[error("token endpoint returned status {0}")]
    Status(u16),

    #[error("token response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A data call failed. Recoverable: the user may simply retry the command.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("not authenticated against the API")]
    NotAuthenticated,

    #[error("no valid guild id configured (got {0})")]
    InvalidGuild(i64),

    #[error("report code must not be empty")]
    InvalidReportId,

    #[error("request failed: {0}")]
    Transport(#[source] TransportError),

    #[error("API returned status {0}")]
    Status(u16),

    #[error("response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Non-fatal data problems. These are logged and never returned; the
/// affected fields keep their defaults.
#[derive(Debug, thiserror::Error)]
pub enum PartialDataWarning {
    #[error("report payload is malformed, using defaults: {0}")]
    MalformedReport(serde_json::Error),

    #[error("attribute has the wrong type, ignored: {0}")]
    MalformedField(serde_json::Error),

    #[error("ranking data is malformed, ranks left unset: {0}")]
    MalformedRankings(serde_json::Error),

    #[error("listing response has no reports path")]
    MissingListing,

    #[error("listing entry without a report code skipped")]
    ReportWithoutCode,

    #[error("no ranking entry for raid {raid:?}")]
    RaidNotRanked { raid: String },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Authentication(#[from] AuthenticationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

pub type Result<T> = std::result::Result<T, Error>;
