//! Players, their score sheets and the live game state
use crate::category::Category;
use crate::constants::DEFAULT_PLAYER_PREFIX;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stable identifier of a player for the player's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Score sheet of one player.
///
/// A category missing from the map has not been played yet. `None` is the
/// skip marker (played, deliberately forfeited) and serializes as `null`.
pub type Scores = BTreeMap<Category, Option<u32>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub scores: Scores,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            scores: Scores::new(),
        }
    }

    /// Stored value of a category; skip markers and unplayed slots read as `None`.
    #[must_use]
    pub fn value(&self, category: Category) -> Option<u32> {
        self.scores.get(&category).copied().flatten()
    }

    #[must_use]
    pub fn is_skipped(&self, category: Category) -> bool {
        matches!(self.scores.get(&category), Some(None))
    }

    #[must_use]
    pub fn has_entry(&self, category: Category) -> bool {
        self.scores.contains_key(&category)
    }

    /// Apply a score update to this sheet.
    pub fn apply(&mut self, category: Category, input: ScoreInput) {
        match input {
            ScoreInput::Clear => {
                self.scores.remove(&category);
            }
            ScoreInput::Skip => {
                self.scores.insert(category, None);
            }
            ScoreInput::Value(value) => {
                self.scores.insert(category, Some(value));
            }
        }
    }
}

/// The three ways a category slot can be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreInput {
    /// Remove the entry entirely, back to "not yet played"
    Clear,
    /// Mark the category as played and forfeited
    Skip,
    /// Record a scored value
    Value(u32),
}

/// Ordered list of players; order is the display and turn order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(default)]
    pub players: Vec<Player>,
}

impl GameState {
    #[must_use]
    pub fn find(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    #[must_use]
    pub fn position(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Default display name for the player at a zero-based position.
#[must_use]
pub fn default_player_name(index: usize) -> String {
    format!("{DEFAULT_PLAYER_PREFIX} {}", index + 1)
}

/// Produces UUID-shaped player and history identifiers.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    rng: SmallRng,
}

impl IdGenerator {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Next random identifier in the version 4 UUID text layout.
    pub fn next_id(&mut self) -> String {
        let raw: u128 = self.rng.r#gen();
        let versioned = (raw & !(0xF_u128 << 76)) | (0x4_u128 << 76);
        let bits = (versioned & !(0x3_u128 << 62)) | (0x2_u128 << 62);
        let hex = format!("{bits:032x}");
        format!(
            "{}-{}-{}-{}-{}",
            &hex[0..8],
            &hex[8..12],
            &hex[12..16],
            &hex[16..20],
            &hex[20..32]
        )
    }

    pub fn next_player_id(&mut self) -> PlayerId {
        PlayerId::new(self.next_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_distinguishes_clear_skip_and_value() {
        let mut player = Player::new(PlayerId::from("p1"), "Player 1");
        player.apply(Category::Ones, ScoreInput::Value(3));
        player.apply(Category::Twos, ScoreInput::Skip);
        assert_eq!(player.value(Category::Ones), Some(3));
        assert!(player.is_skipped(Category::Twos));
        assert!(player.has_entry(Category::Twos));
        assert_eq!(player.value(Category::Twos), None);

        player.apply(Category::Twos, ScoreInput::Clear);
        assert!(!player.has_entry(Category::Twos));
        assert!(!player.is_skipped(Category::Twos));
    }

    #[test]
    fn skip_marker_serializes_as_null() {
        let mut player = Player::new(PlayerId::from("p1"), "Ada");
        player.apply(Category::Yatzy, ScoreInput::Skip);
        player.apply(Category::Chance, ScoreInput::Value(22));
        let json = serde_json::to_value(&player).unwrap();
        assert_eq!(json["id"], "p1");
        assert!(json["scores"]["yatzy"].is_null());
        assert_eq!(json["scores"]["chance"], 22);
        assert!(json["scores"].get("ones").is_none());
    }

    #[test]
    fn missing_scores_field_defaults_to_empty() {
        let player: Player = serde_json::from_str(r#"{"id":"x","name":"Bo"}"#).unwrap();
        assert!(player.scores.is_empty());
    }

    #[test]
    fn generated_ids_are_uuid_shaped_and_unique() {
        let mut ids = IdGenerator::from_seed(7);
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
        let groups: Vec<&str> = a.split('-').collect();
        assert_eq!(
            groups.iter().map(|g| g.len()).collect::<Vec<_>>(),
            vec![8, 4, 4, 4, 12]
        );
        assert!(groups[2].starts_with('4'));
        assert!(matches!(groups[3].chars().next(), Some('8' | '9' | 'a' | 'b')));
    }

    #[test]
    fn default_names_are_one_based() {
        assert_eq!(default_player_name(0), "Player 1");
        assert_eq!(default_player_name(3), "Player 4");
    }
}
