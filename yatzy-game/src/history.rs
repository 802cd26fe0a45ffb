//! Archived games and the rankings derived from them
use crate::calculator::{BonusRule, total};
use crate::player::{Player, PlayerId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Final total of one player at the moment a game was cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResult {
    pub player_name: String,
    pub total: u32,
}

/// Immutable archive record written when a game with points is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistoryEntry {
    pub id: String,
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
    pub results: Vec<PlayerResult>,
}

impl GameHistoryEntry {
    /// Snapshot every player's current total.
    #[must_use]
    pub fn snapshot(id: String, now: DateTime<Utc>, players: &[Player], rule: &BonusRule) -> Self {
        Self {
            id,
            date: now.date_naive(),
            timestamp: now,
            results: players
                .iter()
                .map(|p| PlayerResult {
                    player_name: p.name.clone(),
                    total: total(p, rule),
                })
                .collect(),
        }
    }

    /// Whether the game is worth archiving at all.
    #[must_use]
    pub fn has_points(&self) -> bool {
        self.results.iter().any(|r| r.total > 0)
    }

    /// Highest total of the game, if anyone played.
    #[must_use]
    pub fn winning_total(&self) -> Option<u32> {
        self.results.iter().map(|r| r.total).max()
    }
}

/// Position of a player in the running game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPlayer {
    /// One-based; tied players share a rank
    pub rank: usize,
    pub player_id: PlayerId,
    pub name: String,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScore {
    pub player_name: String,
    pub total: u32,
    pub date: NaiveDate,
}

/// Aggregate record of one player name across the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStanding {
    pub player_name: String,
    pub games: u32,
    pub wins: u32,
    pub best: u32,
    pub points: u64,
}

impl PlayerStanding {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.points as f64 / f64::from(self.games)
        }
    }
}

/// Competition ranking ("1, 2, 2, 4") of the current players by total.
#[must_use]
pub fn current_ranking(players: &[Player], rule: &BonusRule) -> Vec<RankedPlayer> {
    let mut scored: Vec<(usize, &Player, u32)> = players
        .iter()
        .enumerate()
        .map(|(idx, p)| (idx, p, total(p, rule)))
        .collect();
    scored.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));

    let mut ranked = Vec::with_capacity(scored.len());
    let mut previous: Option<u32> = None;
    let mut rank = 0;
    for (position, (_, player, player_total)) in scored.into_iter().enumerate() {
        if previous != Some(player_total) {
            rank = position + 1;
            previous = Some(player_total);
        }
        ranked.push(RankedPlayer {
            rank,
            player_id: player.id.clone(),
            name: player.name.clone(),
            total: player_total,
        });
    }
    ranked
}

/// Best single-game results across the archive, highest first.
#[must_use]
pub fn high_scores(history: &[GameHistoryEntry], limit: usize) -> Vec<HighScore> {
    let mut scores: Vec<HighScore> = history
        .iter()
        .flat_map(|entry| {
            entry.results.iter().map(|r| HighScore {
                player_name: r.player_name.clone(),
                total: r.total,
                date: entry.date,
            })
        })
        .filter(|s| s.total > 0)
        .collect();
    // Stable sort keeps newest-first order among equal totals.
    scores.sort_by(|a, b| b.total.cmp(&a.total));
    scores.truncate(limit);
    scores
}

/// Per-name standings across every archived game, best first.
///
/// Every player holding the top total of a game is credited with a win.
#[must_use]
pub fn overall_ranking(history: &[GameHistoryEntry]) -> Vec<PlayerStanding> {
    let mut by_name: HashMap<&str, PlayerStanding> = HashMap::new();
    for entry in history {
        let winning = entry.winning_total();
        for result in &entry.results {
            let standing = by_name
                .entry(result.player_name.as_str())
                .or_insert_with(|| PlayerStanding {
                    player_name: result.player_name.clone(),
                    games: 0,
                    wins: 0,
                    best: 0,
                    points: 0,
                });
            standing.games += 1;
            standing.points += u64::from(result.total);
            standing.best = standing.best.max(result.total);
            if winning == Some(result.total) && result.total > 0 {
                standing.wins += 1;
            }
        }
    }

    let mut standings: Vec<PlayerStanding> = by_name.into_values().collect();
    standings.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then(b.best.cmp(&a.best))
            .then(a.player_name.cmp(&b.player_name))
    });
    standings
}
