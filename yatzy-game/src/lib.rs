//! Yatzy Score Board Engine
//!
//! Platform-agnostic core of the Yatzy score board: the score model, the
//! per-category value whitelists, totals and bonus, the observable game store,
//! the history archive with its rankings, and the celebration particle model.
//! Nothing here touches a browser; storage is reached through
//! [`KeyValueStore`] and time through [`Clock`].

pub mod calculator;
pub mod category;
pub mod clock;
pub mod confetti;
pub mod constants;
pub mod history;
pub mod language;
pub mod persistence;
pub mod player;
pub mod store;
pub mod values;

// Re-export commonly used types
pub use calculator::{
    BonusRule, PlayerTotals, bonus, bottom_section_total, top_section_total, total, totals,
};
pub use category::{Category, Section};
pub use clock::{Clock, FixedClock, SystemClock};
pub use confetti::{ConfettiBurst, ConfettiColor, PALETTE, Particle};
pub use history::{
    GameHistoryEntry, HighScore, PlayerResult, PlayerStanding, RankedPlayer, current_ranking,
    high_scores, overall_ranking,
};
pub use language::Language;
pub use persistence::{
    KeyValueStore, MemoryStore, NullStore, PersistError, Persistence, ReadOnlyError,
};
pub use player::{
    GameState, IdGenerator, Player, PlayerId, ScoreInput, Scores, default_player_name,
};
pub use store::{GameStore, StoreError, Subscription};
pub use values::{
    EntryMode, PossibleValues, ValueError, entry_mode, is_celebration, possible_values, validate,
};
