//! GraphQL documents sent verbatim to the Warcraft Logs v2 client endpoint.

use serde::Serialize;
use serde_json::{Value, json};

/// Single report detail. Variables: `report_id: String`.
pub const REPORT_QUERY: &str = r#"
query($report_id:String){
    reportData{
        report(code:$report_id){
            code,
            title,
            startTime,
            endTime,
            segments,
            zone{
                name
            },
            rankedCharacters{
                classID,
                name
            },
            fights(killType: Kills){
                kill,
                name,
                startTime,
                endTime
            }
        }
    }
}"#;

/// Five most recent reports of a guild. Variables: `guild_id: Int`.
pub const REPORTS_QUERY: &str = r#"
query($guild_id:Int){
    reportData{
        reports(guildID:$guild_id, limit: 5){
            data{
                code,
                title,
                startTime,
                endTime,
                segments
                zone{
                    name
                },
            }
        }
    }
}"#;

/// Request body accepted by the client endpoint.
#[derive(Debug, Serialize)]
pub struct GraphqlRequest {
    pub query: &'static str,
    pub variables: Value,
}

impl GraphqlRequest {
    pub fn reports(guild_id: i64) -> Self {
        GraphqlRequest {
            query: REPORTS_QUERY,
            variables: json!({ "guild_id": guild_id }),
        }
    }

    pub fn report(report_id: &str) -> Self {
        GraphqlRequest {
            query: REPORT_QUERY,
            variables: json!({ "report_id": report_id }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_query_and_variables() {
        let body = serde_json::to_value(GraphqlRequest::report("ABC123")).unwrap();
        assert_eq!(body["query"], REPORT_QUERY);
        assert_eq!(body["variables"]["report_id"], "ABC123");

        let body = serde_json::to_value(GraphqlRequest::reports(726684)).unwrap();
        assert_eq!(body["variables"]["guild_id"], 726684);
    }

    #[test]
    fn detail_query_only_asks_for_kills() {
        assert!(REPORT_QUERY.contains("fights(killType: Kills)"));
        assert!(REPORTS_QUERY.contains("limit: 5"));
    }
}
