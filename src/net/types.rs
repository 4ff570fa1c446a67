#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Game state snapshot returned by `POST /start_game` and `POST /reset`.
///
/// Every field is optional and rendered independently; the server may also
/// include fields this client does not display (they are ignored). A
/// snapshot is consumed once and fully replaces the previously displayed
/// one — nothing is merged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<PlayerHand>>,
    // The documented key is camelCase; some server builds emit snake_case.
    #[serde(
        default,
        rename = "lastPlayedCard",
        alias = "last_played_card",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_played_card: Option<String>,
}

/// One player's name and current hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHand {
    pub name: String,
    #[serde(default)]
    pub cards: Vec<String>,
}
