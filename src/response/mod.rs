//! Raw payload schema of the Warcraft Logs API.
//!
//! Every attribute is optional: the API omits fields depending on the query
//! and on whether a report is "limited". Defaults are applied afterwards by
//! the domain model, never here.

pub mod envelope;
pub mod lenient;
pub mod rankings;
pub mod report;
