//! Plain-text rendering of reports for the command line.

use std::fmt::Write;

use crate::api::{RECENT_LIMIT, ReportListing};
use crate::error::{Error, FetchError};
use crate::model::Report;

pub fn report_summary(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.title);
    let _ = writeln!(out, "Date: {}", report.start_time.format("%d.%m.%Y"));
    if !report.raid.is_empty() {
        let _ = writeln!(out, "Raid: {}", report.raid);
    }
    let _ = writeln!(out, "Time spent: {}", report.duration_str());
    let _ = writeln!(out, "Kills: {}", report.fights.len());

    if report.is_limited() {
        let _ = writeln!(out, "Limited report, only kills");
    } else {
        let _ = writeln!(out, "Deaths: {}", report.deaths);
        let _ = writeln!(out, "Speed %: {}", report.speed_rank);
        if report.execution_rank > 0.0 {
            let _ = writeln!(out, "Execution %: {}", report.execution_rank);
        }
    }

    if !report.characters.is_empty() {
        let _ = writeln!(out, "\nCharacters:");
        for c in &report.characters {
            let _ = writeln!(out, "  {c}");
        }
    }

    let _ = writeln!(out, "\nSummary: {}", report.summary_url());
    let _ = writeln!(out, "Rankings: {}", report.rankings_url());
    out
}

/// Numbered list of the most recent reports, with the id to pass to
/// `report <ID>`.
pub fn listing_summary(listing: &ReportListing) -> String {
    let mut out = String::new();
    for (i, r) in listing.recent(RECENT_LIMIT).iter().enumerate() {
        let _ = writeln!(out, "{}. {} [{}]", i + 1, r.title, r.id);
        if !r.raid.is_empty() {
            let _ = writeln!(out, "   {}", r.raid);
        }
        let _ = writeln!(out, "   Started: {}", r.start_time.format("%d.%m, %H:%M"));
    }
    out
}

/// One distinct line per failure kind, safe to show to a user.
pub fn failure_message(err: &Error) -> &'static str {
    match err {
        Error::Config(_) => "The bot is not configured correctly.",
        Error::Authentication(_) => "Could not log in to Warcraft Logs, try again later.",
        Error::Fetch(FetchError::NotAuthenticated) => "Not logged in to Warcraft Logs.",
        Error::Fetch(FetchError::InvalidGuild(_)) => "No guild is configured, cannot list reports.",
        Error::Fetch(FetchError::InvalidReportId) => "That is not a report code.",
        Error::Fetch(FetchError::Status(_)) => "Warcraft Logs refused the request, try again later.",
        Error::Fetch(FetchError::Transport(_)) => "Could not reach Warcraft Logs, try again later.",
        Error::Fetch(FetchError::Decode(_)) => "Got an unreadable answer from Warcraft Logs.",
    }
}
