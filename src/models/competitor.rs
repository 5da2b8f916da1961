//! Competitor and per-round history entries.

use crate::models::game::Opponent;
use crate::models::points::Points;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a competitor (used in matches and lookups).
pub type CompetitorId = Uuid;

/// Rating given to a competitor when none is supplied.
pub const DEFAULT_RATING: i32 = 1200;

/// Side of the board a competitor played on. The first side of a match is White.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    White,
    Black,
}

/// One game from a competitor's point of view.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub round: u32,
    pub opponent: Opponent,
    pub points: Points,
    pub color: Color,
}

impl HistoryEntry {
    pub fn is_bye(&self) -> bool {
        self.opponent == Opponent::Bye
    }
}

/// A competitor in the tournament.
///
/// `score`, `buchholz`, `opponents` and `history` are derived from the round
/// history by [`crate::recompute`] and are overwritten on every pass.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    pub rating: i32,
    pub score: Points,
    /// Sum of the current scores of every opponent faced (byes excluded).
    pub buchholz: Points,
    /// Opponents faced, one entry per game. Never holds a bye.
    pub opponents: Vec<CompetitorId>,
    pub history: Vec<HistoryEntry>,
    pub active: bool,
}

impl Competitor {
    /// Create an active competitor with empty derived state.
    pub fn new(name: impl Into<String>, rating: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            rating,
            score: Points::ZERO,
            buchholz: Points::ZERO,
            opponents: Vec::new(),
            history: Vec::new(),
            active: true,
        }
    }

    /// Copy with every derived field cleared; identity, name, rating and the
    /// active flag are kept.
    pub fn reset(&self) -> Self {
        Self {
            score: Points::ZERO,
            buchholz: Points::ZERO,
            opponents: Vec::new(),
            history: Vec::new(),
            ..self.clone()
        }
    }

    pub fn has_had_bye(&self) -> bool {
        self.history.iter().any(HistoryEntry::is_bye)
    }

    pub fn has_played(&self, other: CompetitorId) -> bool {
        self.opponents.contains(&other)
    }

    /// Number of games recorded, byes included.
    pub fn games_played(&self) -> usize {
        self.history.len()
    }

    pub(crate) fn record(&mut self, round: u32, opponent: Opponent, points: Points, color: Color) {
        self.score += points;
        if let Opponent::Competitor(id) = opponent {
            self.opponents.push(id);
        }
        self.history.push(HistoryEntry {
            round,
            opponent,
            points,
            color,
        });
    }
}
