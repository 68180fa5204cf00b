/// Short human form of a duration: `1h2m`, `2m5s` or `45s`.
///
/// Above an hour the seconds are dropped.
pub fn format_duration(secs: u64) -> String {
    if secs > 3600 {
        format!("{}h{}m", secs / 3600, (secs % 3600) / 60)
    } else if secs > 60 {
        format!("{}m{}s", secs / 60, secs % 60)
    } else {
        format!("{secs}s")
    }
}

/// Extracts the report code from a report URL such as
/// `https://www.warcraftlogs.com/reports/ABC123#fight=1`.
pub fn report_id_from_url(url: &str) -> Option<&str> {
    let (_, tail) = url.rsplit_once("reports/")?;
    let id = tail.split('#').next().unwrap_or_default();
    if id.is_empty() { None } else { Some(id) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_durations_by_magnitude() {
        assert_eq!(format_duration(45), "45s");
        assert_eq!(format_duration(125), "2m5s");
        assert_eq!(format_duration(3725), "1h2m");
        assert_eq!(format_duration(0), "0s");
    }

    #[test]
    fn boundaries_stay_in_the_smaller_unit() {
        assert_eq!(format_duration(60), "60s");
        assert_eq!(format_duration(3600), "60m0s");
    }

    #[test]
    fn extracts_id_from_report_url() {
        assert_eq!(report_id_from_url("https://x/reports/ABC123#fight=1"), Some("ABC123"));
        assert_eq!(
            report_id_from_url("https://vanilla.warcraftlogs.com/reports/xYz9"),
            Some("xYz9")
        );
    }

    #[test]
    fn rejects_urls_without_report_path() {
        assert_eq!(report_id_from_url("https://x/guild/123"), None);
        assert_eq!(report_id_from_url(""), None);
        assert_eq!(report_id_from_url("https://x/reports/#fight=1"), None);
    }
}
