use std::fmt;

use crate::response::report::{RawActor, RawCharacter};

/// Class id before any payload has set one.
pub const UNSET_CLASS_ID: i64 = -1;

/// Class id the API reports for some ranked characters it could not classify.
pub const UNKNOWN_CLASS_ID: i64 = 0;

const CLASS_NAMES: &[(i64, &str)] = &[
    (1, "Paladin"),
    (2, "Druid"),
    (3, "Hunter"),
    (4, "Mage"),
    (7, "Priest"),
    (8, "Rogue"),
    (9, "Shaman"),
    (10, "Warlock"),
    (11, "Warrior"),
];

pub fn class_name(id: i64) -> Option<&'static str> {
    CLASS_NAMES
        .iter()
        .find(|(class_id, _)| *class_id == id)
        .map(|(_, name)| *name)
}

/// Class id for an actor `subType` such as "Warrior".
pub fn class_id_for_sub_type(sub_type: &str) -> Option<i64> {
    CLASS_NAMES
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(sub_type))
        .map(|(id, _)| *id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub player_class_id: i64,
}

impl Default for Character {
    fn default() -> Self {
        Character {
            name: String::new(),
            player_class_id: UNSET_CLASS_ID,
        }
    }
}

impl Character {
    pub fn from_raw(raw: &RawCharacter) -> Self {
        let mut character = Character::default();
        if let Some(name) = &raw.name {
            character.name = name.clone();
        }
        match raw.class_id {
            Some(id) => character.player_class_id = id,
            None => tracing::debug!(name = %character.name, "ranked character has no classID"),
        }
        character
    }

    pub fn player_class(&self) -> String {
        match class_name(self.player_class_id) {
            Some(name) => name.to_string(),
            None => format!("UNKNOWN CLASS ID: {}", self.player_class_id),
        }
    }

    /// Upstream quirk: some ranked characters come back with class id 0 even
    /// though the report's actor list knows their class. Resolves the class
    /// from the actor with the same name. Returns whether the id changed.
    pub fn backfill_class(&mut self, actors: &[RawActor]) -> bool {
        if self.player_class_id != UNKNOWN_CLASS_ID {
            return false;
        }
        let resolved = actors
            .iter()
            .filter(|a| a.name.as_deref() == Some(self.name.as_str()))
            .find_map(|a| a.sub_type.as_deref().and_then(class_id_for_sub_type));

        match resolved {
            Some(id) => {
                tracing::debug!(name = %self.name, class_id = id, "resolved class id from actor");
                self.player_class_id = id;
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.player_class())
    }
}
