use serde::Deserialize;
use serde_json::Value;

// GraphQL response wrapper
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData<T> {
    pub report_data: Option<T>,
}

/// `reportData.reports` of the listing query.
#[derive(Debug, Deserialize)]
pub struct ListingData {
    pub reports: Option<ReportPage>,
}

#[derive(Debug, Deserialize)]
pub struct ReportPage {
    /// Kept untyped so each entry is decoded (and may fail) on its own.
    pub data: Option<Vec<Value>>,
}

/// `reportData.report` of the detail query; null when no report has the code.
#[derive(Debug, Deserialize)]
pub struct DetailData {
    pub report: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

pub type ListingResponse = GraphqlResponse<ReportData<ListingData>>;
pub type DetailResponse = GraphqlResponse<ReportData<DetailData>>;

impl ListingResponse {
    /// Report entries, or `None` when any step of the path is missing.
    pub fn into_entries(self) -> Option<Vec<Value>> {
        self.data?.report_data?.reports?.data
    }
}

impl DetailResponse {
    /// The report object, or `None` when the API found no report.
    pub fn into_report(self) -> Option<Value> {
        self.data?
            .report_data?
            .report
            .filter(|v| !v.is_null())
    }
}

impl<T> GraphqlResponse<T> {
    pub fn error_messages(&self) -> Vec<&str> {
        self.errors
            .iter()
            .flatten()
            .map(|e| e.message.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn listing_path_is_walked() {
        let resp: ListingResponse = serde_json::from_value(json!({
            "data": { "reportData": { "reports": { "data": [{ "code": "a" }, { "code": "b" }] } } }
        }))
        .unwrap();
        assert_eq!(resp.into_entries().unwrap().len(), 2);
    }

    #[test]
    fn listing_without_data_has_no_entries() {
        let resp: ListingResponse =
            serde_json::from_value(json!({ "errors": [{ "message": "boom" }] })).unwrap();
        assert_eq!(resp.error_messages(), vec!["boom"]);
        assert!(resp.into_entries().is_none());
    }

    #[test]
    fn null_report_means_not_found() {
        let resp: DetailResponse =
            serde_json::from_value(json!({ "data": { "reportData": { "report": null } } }))
                .unwrap();
        assert!(resp.into_report().is_none());
    }
}
