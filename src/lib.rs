//! Warcraft Logs report client: fetches guild report listings and single
//! reports from the v2 API and maps them to display-ready domain objects.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod query;
pub mod render;
pub mod response;

pub use api::{ApiManager, ReportListing};
pub use config::Config;
pub use error::{AuthenticationError, Error, FetchError, Result};
pub use model::{Character, Fight, Report};
