#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use crate::net::types::GameSnapshot;

/// Table display state: the most recent snapshot returned by the server.
///
/// `None` until the first successful response. Failed requests never touch
/// it; successful ones replace it wholesale, so when requests overlap the
/// last response to resolve wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableState {
    pub snapshot: Option<GameSnapshot>,
}

impl TableState {
    /// Replace the displayed snapshot with a newly resolved one.
    pub fn apply(&mut self, snapshot: GameSnapshot) {
        self.snapshot = Some(snapshot);
    }
}

/// One rendered block in the display region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayBlock {
    Message(String),
    Player(String),
    LastPlayedCard(String),
}

/// Project a snapshot into the ordered blocks the display region shows.
///
/// Order is fixed: message, then one block per player, then the last played
/// card. An absent field contributes no block, and an empty player list
/// contributes none either. Pure and deterministic, so re-rendering the
/// same snapshot always yields the same display.
pub fn display_blocks(snapshot: &GameSnapshot) -> Vec<DisplayBlock> {
    let mut blocks = Vec::new();

    if let Some(message) = &snapshot.message {
        blocks.push(DisplayBlock::Message(message.clone()));
    }

    if let Some(players) = &snapshot.players {
        for player in players {
            blocks.push(DisplayBlock::Player(format!(
                "{}: {}",
                player.name,
                player.cards.join(", ")
            )));
        }
    }

    if let Some(card) = &snapshot.last_played_card {
        blocks.push(DisplayBlock::LastPlayedCard(format!("Last Played Card: {card}")));
    }

    blocks
}
