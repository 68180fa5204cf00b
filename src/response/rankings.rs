use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The `rankings` blob of a report. Entries stay untyped until one is picked
/// by raid name, so a broken entry for another raid cannot hide a good one.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRankings {
    pub data: Vec<Value>,
}

/// A ranking entry. Every field is required: an entry without its numbers
/// is useless, and the caller treats a failed decode as "no rankings".
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRanking {
    pub encounter: RawEncounter,
    pub speed: RankPercent,
    pub execution: RankPercent,
    pub deaths: u32,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEncounter {
    pub name: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankPercent {
    pub rank_percent: f64,
}

impl RawRankings {
    /// First entry whose encounter name equals `raid` exactly, decoded.
    /// `None` when no entry matches.
    pub fn for_raid(&self, raid: &str) -> Option<Result<RawRanking, serde_json::Error>> {
        self.data
            .iter()
            .find(|entry| entry.pointer("/encounter/name").and_then(Value::as_str) == Some(raid))
            .map(|entry| RawRanking::deserialize(entry))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn rankings(data: Value) -> RawRankings {
        serde_json::from_value(json!({ "data": data })).unwrap()
    }

    #[test]
    fn malformed_entries_for_other_raids_are_ignored() {
        let r = rankings(json!([
            { "encounter": { "name": "Molten Core" },
              "speed": { "rankPercent": 87.5 }, "execution": { "rankPercent": 64 }, "deaths": 4 },
            { "encounter": { "name": "Onyxia's Lair" }, "speed": { "rankPercent": null } },
            "garbage"
        ]));
        let mc = r.for_raid("Molten Core").unwrap().unwrap();
        assert_eq!(mc.speed.rank_percent, 87.5);
        assert_eq!(mc.deaths, 4);
        assert!(r.for_raid("Onyxia's Lair").unwrap().is_err());
        assert!(r.for_raid("Naxxramas").is_none());
    }
}
