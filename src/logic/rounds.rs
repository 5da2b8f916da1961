//! Round play: advancing to the next round and recording match results.

use crate::logic::pairing::generate_round;
use crate::logic::standings::recompute;
use crate::models::{MatchId, MatchResult, Round, Tournament, TournamentError, TournamentStatus};
use chrono::Utc;
use serde::Serialize;

/// What [`advance_round`] did.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advance {
    /// A new round with this number was paired and is now current.
    Round(u32),
    /// The last configured round was already played; the tournament is finished.
    Finished,
}

/// Move to the next round.
///
/// The current round must have no pending match. Past the last configured
/// round the tournament becomes Finished and no round is generated; otherwise
/// standings are recomputed, the next round is paired from them and the
/// ranked roster is stored.
pub fn advance_round(tournament: &mut Tournament) -> Result<Advance, TournamentError> {
    if tournament.status != TournamentStatus::InProgress {
        return Err(TournamentError::InvalidState);
    }
    if !tournament.is_current_round_complete() {
        return Err(TournamentError::IncompleteResults);
    }

    let next = tournament.current_round + 1;
    if next > tournament.total_rounds {
        tournament.status = TournamentStatus::Finished;
        tournament.finished_at = Some(Utc::now());
        log::info!(
            "Tournament '{}' finished after {} rounds",
            tournament.name,
            tournament.total_rounds
        );
        return Ok(Advance::Finished);
    }

    let ranked = recompute(&tournament.competitors, &tournament.rounds);
    let matches = generate_round(next, &ranked);
    log::info!("Round {} paired: {} matches", next, matches.len());

    tournament.competitors = ranked;
    tournament.rounds.push(Round::new(next, matches));
    tournament.current_round = next;
    Ok(Advance::Round(next))
}

/// Set the result of one match and recompute standings over the whole history.
///
/// Only matches of the current round can be edited, including setting a
/// result back to pending. Earlier rounds are closed and bye matches are fixed.
pub fn record_result(
    tournament: &mut Tournament,
    round_number: u32,
    match_id: MatchId,
    result: MatchResult,
) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::InProgress {
        return Err(TournamentError::InvalidState);
    }
    let round = tournament
        .rounds
        .iter_mut()
        .find(|r| r.number == round_number)
        .ok_or(TournamentError::RoundNotFound(round_number))?;
    if round.number != tournament.current_round {
        return Err(TournamentError::RoundClosed(round_number));
    }
    let m = round
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.is_bye() {
        return Err(TournamentError::ByeResultFixed);
    }
    m.result = result;
    log::debug!("Round {}: match {} set to {:?}", round_number, match_id, result);

    tournament.competitors = recompute(&tournament.competitors, &tournament.rounds);
    Ok(())
}
