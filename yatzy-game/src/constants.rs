//! Centralized keys and tuning constants for the Yatzy score board.
//!
//! Storage keys are part of the persisted layout; changing them orphans
//! every saved game in the field.

// Storage keys -------------------------------------------------------------
pub const GAME_STATE_KEY: &str = "yatzy-game-state";
pub const GAME_HISTORY_KEY: &str = "yatzy-game-history";
pub const LANGUAGE_KEY: &str = "yatzy-language";

// Scoring ------------------------------------------------------------------
pub const BONUS_THRESHOLD: u32 = 63;
pub const BONUS_AWARD: u32 = 35;
pub const DICE_PER_ROLL: u32 = 5;
pub const YATZY_VALUE: u32 = 50;
pub const SMALL_STRAIGHT_VALUE: u32 = 15;
pub const LARGE_STRAIGHT_VALUE: u32 = 20;

// Players ------------------------------------------------------------------
pub const DEFAULT_PLAYER_PREFIX: &str = "Player";

// Confetti tuning ----------------------------------------------------------
pub const CONFETTI_COUNT: usize = 300;
pub const CONFETTI_GRAVITY: f64 = 0.7;
pub const CONFETTI_TERMINAL_VELOCITY: f64 = 5.0;
pub const CONFETTI_DRAG: f64 = 0.075;
pub const CONFETTI_SPREAD_X: f64 = 50.0;
pub const CONFETTI_LAUNCH_X: f64 = 25.0;
pub const CONFETTI_LAUNCH_Y: f64 = 50.0;
pub const CONFETTI_SPIN_FREQUENCY: f64 = 0.1;

// Audio --------------------------------------------------------------------
pub const CELEBRATION_CLIP_MS: i32 = 8_000;
