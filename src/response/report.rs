use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::response::lenient;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReport {
    #[serde(default, deserialize_with = "lenient::field")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub title: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "lenient::field")]
    pub start_time: Option<f64>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub end_time: Option<f64>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub segments: Option<u32>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub zone: Option<RawZone>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub ranked_characters: Option<Vec<RawCharacter>>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub fights: Option<Vec<RawFight>>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub master_data: Option<RawMasterData>,
    /// Untyped JSON scalar on the remote schema; decoded separately so a bad
    /// ranking blob cannot sink the whole report.
    pub rankings: Option<Value>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawZone {
    #[serde(default, deserialize_with = "lenient::field")]
    pub name: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawCharacter {
    #[serde(default, deserialize_with = "lenient::field")]
    pub name: Option<String>,
    #[serde(rename = "classID", default, deserialize_with = "lenient::field")]
    pub class_id: Option<i64>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFight {
    #[serde(default, deserialize_with = "lenient::field")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub kill: Option<bool>,
    /// Milliseconds from the start of the report.
    #[serde(default, deserialize_with = "lenient::field")]
    pub start_time: Option<f64>,
    #[serde(default, deserialize_with = "lenient::field")]
    pub end_time: Option<f64>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMasterData {
    #[serde(default, deserialize_with = "lenient::list")]
    pub actors: Option<Vec<RawActor>>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawActor {
    #[serde(default, deserialize_with = "lenient::field")]
    pub name: Option<String>,
    /// Class name for player actors, e.g. "Warrior".
    #[serde(default, deserialize_with = "lenient::field")]
    pub sub_type: Option<String>,
}
