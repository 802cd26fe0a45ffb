//! Named scenario catalog and the invariants each one checks.
use anyhow::{Context, Result, ensure};
use thiserror::Error;
use yatzy_game::{
    BonusRule, Category, GameState, Player, PlayerId, ScoreInput, bonus, top_section_total, total,
};

use super::simulation::{SimulationPlan, SimulationSummary, StorageMode};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown scenario: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone)]
pub struct TestScenario {
    pub key: &'static str,
    pub description: &'static str,
    pub plan: SimulationPlan,
}

impl TestScenario {
    fn new(key: &'static str, description: &'static str, plan: SimulationPlan) -> Self {
        Self {
            key,
            description,
            plan,
        }
    }
}

#[must_use]
pub fn catalog() -> Vec<TestScenario> {
    vec![
        TestScenario::new(
            "full-game",
            "Complete rounds with random legal values, archived to history",
            SimulationPlan::new()
                .with_expectation(sheets_are_complete)
                .with_expectation(totals_match_independent_sums)
                .with_expectation(illegal_values_are_rejected)
                .with_expectation(archive_matches_final_sheet)
                .with_expectation(new_game_keeps_players),
        ),
        TestScenario::new(
            "bonus-threshold",
            "Top-section bonus is granted exactly at the threshold",
            SimulationPlan::new()
                .with_skip_rate(0.0)
                .with_expectation(bonus_matches_rule)
                .with_expectation(bonus_boundary_holds),
        ),
        TestScenario::new(
            "skip-markers",
            "Skipped categories stay distinct from unplayed ones and score zero",
            SimulationPlan::new()
                .with_skip_rate(0.5)
                .with_expectation(skips_survive_reload)
                .with_expectation(totals_match_independent_sums),
        ),
        TestScenario::new(
            "storage-failure",
            "Rejected writes leave the session playable and nothing persisted",
            SimulationPlan::new()
                .with_storage(StorageMode::ReadOnly)
                .with_expectation(sheets_are_complete)
                .with_expectation(listeners_saw_every_change)
                .with_expectation(nothing_was_persisted),
        ),
        TestScenario::new(
            "corrupt-storage",
            "Unreadable blobs start a fresh game that overwrites them",
            SimulationPlan::new()
                .with_storage(StorageMode::Corrupt)
                .with_expectation(started_fresh)
                .with_expectation(reload_matches_final_state)
                .with_expectation(history_restarted),
        ),
        TestScenario::new(
            "persistence-roundtrip",
            "Saved state and history hydrate back unchanged",
            SimulationPlan::new()
                .with_players(2, 6)
                .with_expectation(reload_matches_final_state)
                .with_expectation(blob_is_readable_json)
                .with_expectation(archive_matches_final_sheet),
        ),
    ]
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog()
        .into_iter()
        .map(|s| (s.key, s.description))
        .collect()
}

/// Resolve a scenario by key.
///
/// # Errors
///
/// Returns [`CatalogError::Unknown`] when no scenario has that key.
pub fn get_scenario(key: &str) -> Result<TestScenario, CatalogError> {
    catalog()
        .into_iter()
        .find(|s| s.key == key)
        .ok_or_else(|| CatalogError::Unknown(key.to_string()))
}

fn playable_categories() -> impl Iterator<Item = Category> {
    Category::ALL.into_iter().filter(|c| !c.is_derived())
}

fn sheets_are_complete(summary: &SimulationSummary) -> Result<()> {
    for player in &summary.final_state.players {
        for category in playable_categories() {
            ensure!(
                player.has_entry(category),
                "{} never played {category}",
                player.name
            );
        }
        ensure!(
            !player.has_entry(Category::Bonus),
            "{} has a stored bonus entry",
            player.name
        );
    }
    Ok(())
}

fn independent_total(player: &Player, rule: &BonusRule) -> u32 {
    let top: u32 = Category::TOP.iter().filter_map(|c| player.value(*c)).sum();
    let bottom: u32 = Category::BOTTOM.iter().filter_map(|c| player.value(*c)).sum();
    let award = if top >= rule.threshold { rule.award } else { 0 };
    top + award + bottom
}

fn totals_match_independent_sums(summary: &SimulationSummary) -> Result<()> {
    for player in &summary.final_state.players {
        let expected = independent_total(player, &summary.rule);
        let actual = total(player, &summary.rule);
        ensure!(
            actual == expected,
            "{} totals {actual}, expected {expected}",
            player.name
        );
    }
    Ok(())
}

fn illegal_values_are_rejected(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        summary.rejected == summary.illegal_attempts,
        "{} of {} illegal values were rejected",
        summary.rejected,
        summary.illegal_attempts
    );
    Ok(())
}

fn archive_matches_final_sheet(summary: &SimulationSummary) -> Result<()> {
    let any_points = summary
        .final_state
        .players
        .iter()
        .any(|p| total(p, &summary.rule) > 0);
    let Some(entry) = summary.archived.as_ref() else {
        ensure!(!any_points, "round with points was not archived");
        return Ok(());
    };
    ensure!(any_points, "pointless round was archived");
    ensure!(
        entry.results.len() == summary.final_state.players.len(),
        "archive lists {} results for {} players",
        entry.results.len(),
        summary.final_state.players.len()
    );
    for (result, player) in entry.results.iter().zip(&summary.final_state.players) {
        ensure!(result.player_name == player.name, "archive lost player order");
        ensure!(
            result.total == total(player, &summary.rule),
            "archived total of {} differs from the sheet",
            player.name
        );
    }
    if summary.storage == StorageMode::Healthy {
        let newest = summary.history.first().context("history is empty")?;
        ensure!(newest == entry, "history head differs from the archived entry");
    }
    Ok(())
}

fn new_game_keeps_players(summary: &SimulationSummary) -> Result<()> {
    let before: Vec<&PlayerId> = summary.final_state.players.iter().map(|p| &p.id).collect();
    let after: Vec<&PlayerId> = summary.after_new_game.players.iter().map(|p| &p.id).collect();
    ensure!(before == after, "new game changed the player list");
    ensure!(
        summary.after_new_game.players.iter().all(|p| p.scores.is_empty()),
        "new game left scores behind"
    );
    Ok(())
}

fn bonus_matches_rule(summary: &SimulationSummary) -> Result<()> {
    for player in &summary.final_state.players {
        let top = top_section_total(player);
        let expected = (top >= summary.rule.threshold).then_some(summary.rule.award);
        ensure!(
            bonus(player, &summary.rule) == expected,
            "{} with top {top} got bonus {:?}",
            player.name,
            bonus(player, &summary.rule)
        );
    }
    Ok(())
}

/// Three of each face sums to exactly 63.
fn bonus_boundary_holds(summary: &SimulationSummary) -> Result<()> {
    let rule = BonusRule::default();
    let mut player = Player::new(PlayerId::from("boundary"), "Boundary");
    for category in Category::TOP {
        let face = category.face_value().context("top category without a face")?;
        player.apply(category, ScoreInput::Value(face * 3));
    }
    ensure!(
        bonus(&player, &rule) == Some(rule.award),
        "seed {}: bonus missing at the threshold",
        summary.seed
    );
    player.apply(Category::Ones, ScoreInput::Value(2));
    ensure!(
        bonus(&player, &rule).is_none(),
        "seed {}: bonus granted one point short",
        summary.seed
    );
    Ok(())
}

fn skips_survive_reload(summary: &SimulationSummary) -> Result<()> {
    let count = |state: &GameState| -> usize {
        state
            .players
            .iter()
            .flat_map(|p| p.scores.values())
            .filter(|v| v.is_none())
            .count()
    };
    ensure!(
        count(&summary.final_state) == summary.skips,
        "{} skip markers recorded for {} skips",
        count(&summary.final_state),
        summary.skips
    );
    ensure!(
        summary.reloaded_state == summary.final_state,
        "skip markers changed across reload"
    );
    Ok(())
}

fn listeners_saw_every_change(summary: &SimulationSummary) -> Result<()> {
    let added = summary.final_state.players.len() - summary.initial_players;
    let expected = added + summary.moves;
    ensure!(
        summary.publishes >= expected,
        "{} notifications for {expected} changes",
        summary.publishes
    );
    Ok(())
}

fn nothing_was_persisted(summary: &SimulationSummary) -> Result<()> {
    ensure!(summary.stored_blob.is_none(), "state blob written to read-only storage");
    ensure!(summary.history.is_empty(), "history written to read-only storage");
    ensure!(
        summary.reloaded_state.players.len() == 1
            && summary.reloaded_state.players[0].scores.is_empty(),
        "reload after failed writes should start a fresh game"
    );
    Ok(())
}

fn started_fresh(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        summary.initial_players == 1,
        "corrupt save hydrated {} players",
        summary.initial_players
    );
    Ok(())
}

fn reload_matches_final_state(summary: &SimulationSummary) -> Result<()> {
    ensure!(
        summary.reloaded_state == summary.final_state,
        "reloaded state differs from the live state"
    );
    Ok(())
}

fn history_restarted(summary: &SimulationSummary) -> Result<()> {
    let expected = usize::from(summary.archived.is_some());
    ensure!(
        summary.history.len() == expected,
        "history holds {} entries, expected {expected}",
        summary.history.len()
    );
    Ok(())
}

fn blob_is_readable_json(summary: &SimulationSummary) -> Result<()> {
    let blob = summary.stored_blob.as_deref().context("no state blob stored")?;
    let parsed: GameState = serde_json::from_str(blob).context("state blob is not valid JSON")?;
    ensure!(parsed == summary.final_state, "stored blob differs from the live state");
    Ok(())
}
