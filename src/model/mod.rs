//! Display-ready domain objects built from the raw API payload.

pub mod character;
pub mod fight;
pub mod report;
pub mod util;

pub use character::Character;
pub use fight::Fight;
pub use report::Report;
pub use util::{format_duration, report_id_from_url};
