//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Who controls each mark. The first-listed side always plays Circle and moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans.
    #[serde(rename = "pvp")]
    #[strum(to_string = "pvp")]
    PlayerVsPlayer,
    /// Human moves first against the engine.
    #[default]
    #[serde(rename = "pve")]
    #[strum(to_string = "pve")]
    PlayerVsEngine,
    /// Engine moves first against a human.
    #[serde(rename = "evp")]
    #[strum(to_string = "evp")]
    EngineVsPlayer,
}

impl GameMode {
    /// Returns display name.
    pub fn name(self) -> &'static str {
        match self {
            GameMode::PlayerVsPlayer => "Player vs Player",
            GameMode::PlayerVsEngine => "Player vs Engine",
            GameMode::EngineVsPlayer => "Engine vs Player",
        }
    }
}
