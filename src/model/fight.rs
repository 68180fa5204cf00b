use std::fmt;
use std::time::Duration;

use crate::model::util::format_duration;
use crate::response::report::RawFight;

/// Converts a millisecond offset from the API. Negative, NaN or values too
/// large for a `Duration` become zero.
fn offset_from_ms(ms: f64) -> Duration {
    Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::ZERO)
}

/// One kill within a report. Times are offsets from the report start.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Fight {
    pub name: String,
    pub start_time: Duration,
    pub end_time: Duration,
}

impl Fight {
    pub fn from_raw(raw: &RawFight) -> Self {
        let mut fight = Fight::default();
        if let Some(name) = &raw.name {
            fight.name = name.clone();
        }
        if let Some(ms) = raw.start_time {
            fight.start_time = offset_from_ms(ms);
        }
        if let Some(ms) = raw.end_time {
            fight.end_time = offset_from_ms(ms);
        }
        fight
    }

    pub fn duration(&self) -> Duration {
        self.end_time.saturating_sub(self.start_time)
    }

    pub fn duration_str(&self) -> String {
        format_duration(self.duration().as_secs())
    }
}

impl fmt::Display for Fight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.name, self.duration_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_millisecond_offsets() {
        let fight = Fight::from_raw(&RawFight {
            name: Some("Ragnaros".into()),
            kill: Some(true),
            start_time: Some(60_000.0),
            end_time: Some(185_500.0),
        });
        assert_eq!(fight.start_time, Duration::from_secs(60));
        assert_eq!(fight.duration().as_secs(), 125);
        assert_eq!(fight.duration_str(), "2m5s");
    }

    #[test]
    fn inverted_offsets_give_zero_duration() {
        let fight = Fight::from_raw(&RawFight {
            start_time: Some(10_000.0),
            end_time: Some(5_000.0),
            ..RawFight::default()
        });
        assert_eq!(fight.duration(), Duration::ZERO);
        assert_eq!(fight.duration_str(), "0s");
    }

    #[test]
    fn out_of_range_offsets_become_zero() {
        let fight = Fight::from_raw(&RawFight {
            start_time: Some(-5.0),
            end_time: Some(1e300),
            ..RawFight::default()
        });
        assert_eq!(fight.start_time, Duration::ZERO);
        assert_eq!(fight.end_time, Duration::ZERO);
        assert_eq!(offset_from_ms(f64::NAN), Duration::ZERO);
        assert_eq!(offset_from_ms(f64::INFINITY), Duration::ZERO);
    }

    #[test]
    fn missing_fields_keep_defaults() {
        let fight = Fight::from_raw(&RawFight::default());
        assert_eq!(fight, Fight::default());
    }
}
