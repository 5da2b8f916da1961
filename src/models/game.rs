//! Match (game), its result, and Round.

use crate::models::competitor::CompetitorId;
use crate::models::points::Points;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Second side of a match: another competitor, or a bye.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Opponent {
    Competitor(CompetitorId),
    Bye,
}

impl Opponent {
    pub fn competitor(self) -> Option<CompetitorId> {
        match self {
            Opponent::Competitor(id) => Some(id),
            Opponent::Bye => None,
        }
    }
}

/// Outcome of a match, serialized as the usual score line.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum MatchResult {
    #[serde(rename = "1-0")]
    FirstWins,
    #[serde(rename = "0.5-0.5")]
    Draw,
    #[serde(rename = "0-1")]
    SecondWins,
    #[default]
    #[serde(rename = "pending")]
    Pending,
}

impl MatchResult {
    pub fn is_pending(self) -> bool {
        self == MatchResult::Pending
    }

    /// Points for (first, second); `None` while pending.
    pub fn points(self) -> Option<(Points, Points)> {
        match self {
            MatchResult::FirstWins => Some((Points::ONE, Points::ZERO)),
            MatchResult::Draw => Some((Points::HALF, Points::HALF)),
            MatchResult::SecondWins => Some((Points::ZERO, Points::ONE)),
            MatchResult::Pending => None,
        }
    }
}

/// A single game between two competitors, or one competitor and a bye.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub round: u32,
    pub first: CompetitorId,
    pub second: Opponent,
    pub result: MatchResult,
}

impl GameMatch {
    /// A pending game between two competitors.
    pub fn new(round: u32, first: CompetitorId, second: CompetitorId) -> Self {
        Self {
            id: Uuid::new_v4(),
            round,
            first,
            second: Opponent::Competitor(second),
            result: MatchResult::Pending,
        }
    }

    /// A bye: recorded straight away as a win for `competitor`.
    pub fn bye(round: u32, competitor: CompetitorId) -> Self {
        Self {
            id: Uuid::new_v4(),
            round,
            first: competitor,
            second: Opponent::Bye,
            result: MatchResult::FirstWins,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.second == Opponent::Bye
    }

    pub fn involves(&self, id: CompetitorId) -> bool {
        self.first == id || self.second == Opponent::Competitor(id)
    }
}

/// One round of play: its number (1-based) and its matches in board order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub number: u32,
    pub matches: Vec<GameMatch>,
}

impl Round {
    pub fn new(number: u32, matches: Vec<GameMatch>) -> Self {
        Self { number, matches }
    }

    /// True once no match is pending.
    pub fn is_complete(&self) -> bool {
        self.matches.iter().all(|m| !m.result.is_pending())
    }

    pub fn get_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub(crate) fn get_match_mut(&mut self, id: MatchId) -> Option<&mut GameMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    pub fn bye_match(&self) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.is_bye())
    }
}
