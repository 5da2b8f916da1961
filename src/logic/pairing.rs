//! Pairing: greedy Swiss pairing of the next round from the current standings.

use crate::models::{Competitor, GameMatch};

/// Generate the matches for round `round_number`.
///
/// `ranked` must already be in standings order (see [`crate::recompute`]); it is not re-ranked.
///
/// 1. Keep only active competitors.
/// 2. Odd field: the lowest-ranked competitor without a bye so far gets the bye
///    (the lowest-ranked overall if everyone has had one). The bye comes first in the list.
/// 3. Repeatedly take the highest remaining competitor and pair them with the
///    highest remaining one they have not played yet, or with the next one
///    down if they have played everybody left.
///
/// Greedy and non-backtracking: everyone is paired, but a rematch-free round
/// is not guaranteed even when one exists.
pub fn generate_round(round_number: u32, ranked: &[Competitor]) -> Vec<GameMatch> {
    let mut pool: Vec<&Competitor> = ranked.iter().filter(|c| c.active).collect();
    let mut matches = Vec::with_capacity(pool.len() / 2 + 1);

    if pool.len() % 2 == 1 {
        let idx = pool
            .iter()
            .rposition(|c| !c.has_had_bye())
            .unwrap_or(pool.len() - 1);
        let bye = pool.remove(idx);
        log::debug!("Round {}: bye goes to {}", round_number, bye.name);
        matches.push(GameMatch::bye(round_number, bye.id));
    }

    while !pool.is_empty() {
        let anchor = pool.remove(0);
        if pool.is_empty() {
            // Unreachable with an even pool; never strand a competitor.
            matches.push(GameMatch::bye(round_number, anchor.id));
            break;
        }
        let idx = match pool.iter().position(|c| !anchor.has_played(c.id)) {
            Some(idx) => idx,
            None => {
                log::debug!(
                    "Round {}: {} has played everyone left, forcing a rematch",
                    round_number,
                    anchor.name
                );
                0
            }
        };
        let partner = pool.remove(idx);
        matches.push(GameMatch::new(round_number, anchor.id, partner.id));
    }

    matches
}
