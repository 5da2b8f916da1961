//! Tournament aggregate, its status, and TournamentError.

use crate::models::competitor::{Competitor, CompetitorId};
use crate::models::game::{GameMatch, MatchId, Round};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of rounds a new tournament is configured for.
pub const DEFAULT_TOTAL_ROUNDS: u32 = 5;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Need at least 2 competitors to start.
    NotEnoughCompetitors,
    /// A tournament must be configured for at least one round.
    InvalidRoundCount,
    /// The current round still has pending matches.
    IncompleteResults,
    CompetitorNotFound(CompetitorId),
    RoundNotFound(u32),
    /// Results can only change in the round currently being played.
    RoundClosed(u32),
    MatchNotFound(MatchId),
    /// Byes are always an automatic win and cannot be edited.
    ByeResultFixed,
    /// Writing the standings export failed.
    Export(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::NotEnoughCompetitors => write!(f, "Need at least 2 competitors to start"),
            TournamentError::InvalidRoundCount => write!(f, "Tournament needs at least one round"),
            TournamentError::IncompleteResults => {
                write!(f, "Finish all matches in the current round first")
            }
            TournamentError::CompetitorNotFound(id) => write!(f, "Competitor {} not found", id),
            TournamentError::RoundNotFound(n) => write!(f, "Round {} not found", n),
            TournamentError::RoundClosed(n) => {
                write!(f, "Round {} is closed; only the current round can be edited", n)
            }
            TournamentError::MatchNotFound(id) => write!(f, "Match {} not found", id),
            TournamentError::ByeResultFixed => write!(f, "A bye result cannot be changed"),
            TournamentError::Export(msg) => write!(f, "Standings export failed: {}", msg),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Lifecycle phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// Roster can be edited; no rounds yet.
    #[default]
    Setup,
    /// Rounds are being played.
    InProgress,
    /// All configured rounds have been played.
    Finished,
}

/// Full tournament state: roster, round history, and phase.
///
/// Fields are only changed through the methods below and the lifecycle
/// functions in [`crate::logic`]; hosts read them through accessors.
#[derive(Clone, Debug, Serialize)]
pub struct Tournament {
    pub(crate) id: TournamentId,
    pub(crate) name: String,
    pub(crate) total_rounds: u32,
    /// 0 before the first round is generated.
    pub(crate) current_round: u32,
    /// Kept in standings order once play has started.
    pub(crate) competitors: Vec<Competitor>,
    /// Ascending by number, no gaps.
    pub(crate) rounds: Vec<Round>,
    pub(crate) status: TournamentStatus,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) started_at: Option<DateTime<Utc>>,
    pub(crate) finished_at: Option<DateTime<Utc>>,
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new("")
    }
}

impl Tournament {
    /// Create a new tournament in Setup with no competitors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            total_rounds: DEFAULT_TOTAL_ROUNDS,
            current_round: 0,
            competitors: Vec::new(),
            rounds: Vec::new(),
            status: TournamentStatus::Setup,
            created_at: Utc::now(),
            started_at: None,
            finished_at: None,
        }
    }

    pub fn id(&self) -> TournamentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    pub fn status(&self) -> TournamentStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn round(&self, number: u32) -> Option<&Round> {
        self.rounds.iter().find(|r| r.number == number)
    }

    /// Roster in standings order (insertion order while in Setup).
    pub fn standings(&self) -> &[Competitor] {
        &self.competitors
    }

    pub fn competitor(&self, id: CompetitorId) -> Option<&Competitor> {
        self.competitors.iter().find(|c| c.id == id)
    }

    /// Matches of the round currently being played (empty before start).
    pub fn current_round_matches(&self) -> &[GameMatch] {
        self.round(self.current_round)
            .map(|r| r.matches.as_slice())
            .unwrap_or(&[])
    }

    /// True when there is no current round or it has no pending match.
    pub fn is_current_round_complete(&self) -> bool {
        self.round(self.current_round).map_or(true, Round::is_complete)
    }

    /// Add a competitor (only valid in Setup). Returns the new id.
    pub fn add_competitor(
        &mut self,
        name: impl Into<String>,
        rating: i32,
    ) -> Result<CompetitorId, TournamentError> {
        if self.status != TournamentStatus::Setup {
            return Err(TournamentError::InvalidState);
        }
        let competitor = Competitor::new(name, rating);
        let id = competitor.id;
        self.competitors.push(competitor);
        Ok(id)
    }

    /// Change a competitor's name and rating (only valid in Setup).
    pub fn edit_competitor(
        &mut self,
        id: CompetitorId,
        name: impl Into<String>,
        rating: i32,
    ) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Setup {
            return Err(TournamentError::InvalidState);
        }
        let c = self
            .competitors
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(TournamentError::CompetitorNotFound(id))?;
        c.name = name.into();
        c.rating = rating;
        Ok(())
    }

    /// Remove a competitor by id (only valid in Setup).
    pub fn remove_competitor(&mut self, id: CompetitorId) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Setup {
            return Err(TournamentError::InvalidState);
        }
        let idx = self
            .competitors
            .iter()
            .position(|c| c.id == id)
            .ok_or(TournamentError::CompetitorNotFound(id))?;
        self.competitors.remove(idx);
        Ok(())
    }
}
