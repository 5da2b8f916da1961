//! Setup phase: start the tournament (Setup -> InProgress) and pair round 1.

use crate::logic::rounds::advance_round;
use crate::models::{Tournament, TournamentError, TournamentStatus};
use chrono::Utc;

/// Start the tournament: requires Setup, at least 2 competitors and at least one round.
/// Sets name and round count, moves to InProgress and generates round 1.
pub fn start_tournament(
    tournament: &mut Tournament,
    name: impl Into<String>,
    total_rounds: u32,
) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::Setup {
        return Err(TournamentError::InvalidState);
    }
    if tournament.competitors.len() < 2 {
        return Err(TournamentError::NotEnoughCompetitors);
    }
    if total_rounds == 0 {
        return Err(TournamentError::InvalidRoundCount);
    }

    tournament.name = name.into();
    tournament.total_rounds = total_rounds;
    tournament.current_round = 0;
    tournament.status = TournamentStatus::InProgress;
    tournament.started_at = Some(Utc::now());
    log::info!(
        "Tournament '{}' started with {} competitors over {} rounds",
        tournament.name,
        tournament.competitors.len(),
        total_rounds
    );

    advance_round(tournament)?;
    Ok(())
}
