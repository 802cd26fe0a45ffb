pub mod confirm_dialog;
pub mod footer;
pub mod header;
pub mod history_panel;
pub mod modal;
pub mod player_dialog;
pub mod ranking;
pub mod score_entry;
pub mod scoreboard;
