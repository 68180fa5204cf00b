use std::fmt;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::PartialDataWarning;
use crate::model::character::Character;
use crate::model::fight::Fight;
use crate::model::util::format_duration;
use crate::response::rankings::RawRankings;
use crate::response::report::RawReport;

const SITE_URL: &str = "https://vanilla.warcraftlogs.com/reports";

fn timestamp_from_ms(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(ms as i64)
}

fn shift(base: DateTime<Utc>, offset: Duration) -> DateTime<Utc> {
    TimeDelta::from_std(offset)
        .ok()
        .and_then(|delta| base.checked_add_signed(delta))
        .unwrap_or(base)
}

fn warn(warning: PartialDataWarning) {
    tracing::warn!(%warning, "partial report data");
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: String,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub segment_count: u32,
    pub raid: String,
    pub characters: Vec<Character>,
    pub fights: Vec<Fight>,
    pub deaths: u32,
    /// Percent, 0 when the report has no rankings.
    pub execution_rank: f64,
    pub speed_rank: f64,
}

impl Default for Report {
    fn default() -> Self {
        let now = Utc::now();
        Report {
            id: String::new(),
            title: String::new(),
            start_time: now,
            end_time: now,
            segment_count: 0,
            raid: String::new(),
            characters: Vec::new(),
            fights: Vec::new(),
            deaths: 0,
            execution_rank: 0.0,
            speed_rank: 0.0,
        }
    }
}

impl Report {
    /// Builds a report from one `report` object of the API.
    ///
    /// Never fails: anything missing or malformed is logged and the
    /// corresponding field keeps its default.
    pub fn from_api_object(obj: &Value) -> Self {
        match RawReport::deserialize(obj) {
            Ok(raw) => Report::from_raw(&raw),
            Err(err) => {
                warn(PartialDataWarning::MalformedReport(err));
                Report::default()
            }
        }
    }

    pub fn from_raw(raw: &RawReport) -> Self {
        let mut report = Report::default();
        report.apply(raw);
        report
    }

    /// Overwrites the fields present in `raw`, leaving the rest untouched.
    pub fn apply(&mut self, raw: &RawReport) {
        if let Some(code) = &raw.code {
            self.id = code.clone();
        }
        if let Some(title) = &raw.title {
            self.title = title.clone();
        }
        if let Some(segments) = raw.segments {
            self.segment_count = segments;
        }

        if let Some(ranked) = &raw.ranked_characters {
            self.characters = ranked.iter().map(Character::from_raw).collect();
            self.backfill_unknown_classes(raw);
        }

        if let Some(fights) = &raw.fights {
            self.fights = fights.iter().map(Fight::from_raw).collect();
        }

        if let Some(name) = raw.zone.as_ref().and_then(|z| z.name.as_ref()) {
            self.raid = name.clone();
        }

        self.apply_times(raw);

        if let Some(rankings) = &raw.rankings {
            self.apply_rankings(rankings);
        }
    }

    /// See [`Character::backfill_class`]. Only runs when the payload carries
    /// an actor list.
    fn backfill_unknown_classes(&mut self, raw: &RawReport) {
        let Some(actors) = raw.master_data.as_ref().and_then(|m| m.actors.as_ref()) else {
            return;
        };
        for character in &mut self.characters {
            character.backfill_class(actors);
        }
    }

    fn apply_times(&mut self, raw: &RawReport) {
        let Some(report_start) = raw.start_time.and_then(timestamp_from_ms) else {
            return;
        };

        match (self.earliest_start(), self.latest_end()) {
            (Some(first), Some(last)) => {
                self.start_time = shift(report_start, first);
                self.end_time = shift(report_start, last);
            }
            _ => {
                self.start_time = report_start;
                if let Some(end) = raw.end_time.and_then(timestamp_from_ms) {
                    self.end_time = end;
                }
            }
        }
    }

    fn apply_rankings(&mut self, rankings: &Value) {
        let rankings = match RawRankings::deserialize(rankings) {
            Ok(r) => r,
            Err(err) => {
                warn(PartialDataWarning::MalformedRankings(err));
                return;
            }
        };

        match rankings.for_raid(&self.raid) {
            Some(Ok(ranking)) => {
                self.speed_rank = ranking.speed.rank_percent;
                self.execution_rank = ranking.execution.rank_percent;
                self.deaths = ranking.deaths;
            }
            Some(Err(err)) => warn(PartialDataWarning::MalformedRankings(err)),
            None => warn(PartialDataWarning::RaidNotRanked {
                raid: self.raid.clone(),
            }),
        }
    }

    pub fn earliest_start(&self) -> Option<Duration> {
        self.fights.iter().map(|f| f.start_time).min()
    }

    pub fn latest_end(&self) -> Option<Duration> {
        self.fights.iter().map(|f| f.end_time).max()
    }

    pub fn duration(&self) -> Duration {
        (self.end_time - self.start_time)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    pub fn duration_str(&self) -> String {
        format_duration(self.duration().as_secs())
    }

    /// Limited reports only carry kills, no rankings or deaths.
    pub fn is_limited(&self) -> bool {
        self.speed_rank <= 0.0
    }

    pub fn summary_url(&self) -> String {
        format!("{SITE_URL}/{}", self.id)
    }

    pub fn rankings_url(&self) -> String {
        format!("{SITE_URL}/{}#boss=-2&wipes=2&view=rankings", self.id)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.title, self.id)
    }
}
