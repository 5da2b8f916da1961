//! Swiss-system tournament core: standings, pairings, and the tournament lifecycle.

pub mod logic;
pub mod models;

pub use logic::{
    advance_round, generate_round, recompute, record_result, standings_csv, start_tournament,
    write_standings_csv, Advance,
};
pub use models::{
    Color, Competitor, CompetitorId, GameMatch, HistoryEntry, MatchId, MatchResult, Opponent,
    Points, Round, Tournament, TournamentError, TournamentId, TournamentStatus, DEFAULT_RATING,
    DEFAULT_TOTAL_ROUNDS,
};
