use crate::model::Report;

/// Number of entries a listing is meant to be shown with.
pub const RECENT_LIMIT: usize = 5;

/// Immutable id → report mapping of one "recent reports" fetch, in API order
/// (most recent first).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportListing {
    reports: Vec<Report>,
}

impl ReportListing {
    /// A later report with an id already seen replaces the earlier one in
    /// its original position.
    pub fn from_reports<I>(reports: I) -> Self
    where
        I: IntoIterator<Item = Report>,
    {
        let mut listing: Vec<Report> = Vec::new();
        for report in reports {
            match listing.iter_mut().find(|r| r.id == report.id) {
                Some(slot) => *slot = report,
                None => listing.push(report),
            }
        }
        ReportListing { reports: listing }
    }

    pub fn get(&self, id: &str) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Report> {
        self.reports.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.reports.iter().map(|r| r.id.as_str())
    }

    /// At most `n` entries, most recent first.
    pub fn recent(&self, n: usize) -> &[Report] {
        &self.reports[..n.min(self.reports.len())]
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: &str, title: &str) -> Report {
        Report {
            id: id.to_string(),
            title: title.to_string(),
            ..Report::default()
        }
    }

    #[test]
    fn keeps_api_order() {
        let listing = ReportListing::from_reports(vec![report("b", "B"), report("a", "A")]);
        assert_eq!(listing.ids().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(listing.get("a").map(|r| r.title.as_str()), Some("A"));
        assert!(!listing.contains("c"));
    }

    #[test]
    fn duplicate_ids_collapse_to_last_value() {
        let listing = ReportListing::from_reports(vec![
            report("a", "old"),
            report("b", "B"),
            report("a", "new"),
        ]);
        assert_eq!(listing.len(), 2);
        assert_eq!(listing.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(listing.get("a").unwrap().title, "new");
    }

    #[test]
    fn recent_is_capped() {
        let reports = (0..7).map(|i| report(&i.to_string(), "r"));
        let listing = ReportListing::from_reports(reports);
        assert_eq!(listing.recent(RECENT_LIMIT).len(), 5);
        assert_eq!(listing.recent(RECENT_LIMIT)[0].id, "0");
        assert!(ReportListing::default().recent(RECENT_LIMIT).is_empty());
    }
}
