//! Data structures for the Swiss tournament: competitors, matches, rounds, tournament state.

mod competitor;
mod game;
mod points;
mod tournament;

pub use competitor::{Color, Competitor, CompetitorId, HistoryEntry, DEFAULT_RATING};
pub use game::{GameMatch, MatchId, MatchResult, Opponent, Round};
pub use points::Points;
pub use tournament::{
    Tournament, TournamentError, TournamentId, TournamentStatus, DEFAULT_TOTAL_ROUNDS,
};
