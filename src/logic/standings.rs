//! Standings: scores, Buchholz and ranking, rebuilt from the full round history.

use crate::models::{Color, Competitor, CompetitorId, Opponent, Points, Round};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Recompute every competitor's derived state from `rounds` and return the roster ranked.
///
/// 1. Clear score, Buchholz, opponents and history on a copy of each competitor.
/// 2. Walk rounds in order; every non-pending match awards its points and adds
///    a history entry to both sides (only the first side for a bye). Byes are
///    never listed as opponents.
/// 3. Buchholz = sum of the final scores of the opponents faced.
/// 4. Stable sort by (score, Buchholz, rating), descending.
///
/// Competitors still tied on all three keys keep their relative input order.
/// The inputs are not modified; two calls with the same inputs give the same output.
pub fn recompute(competitors: &[Competitor], rounds: &[Round]) -> Vec<Competitor> {
    let mut ranked: Vec<Competitor> = competitors.iter().map(Competitor::reset).collect();
    let index: HashMap<CompetitorId, usize> = ranked
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id, i))
        .collect();

    let mut ordered: Vec<&Round> = rounds.iter().collect();
    ordered.sort_by_key(|r| r.number);

    for round in ordered {
        for m in &round.matches {
            let Some((first_points, second_points)) = m.result.points() else {
                continue;
            };
            match m.second {
                Opponent::Bye => {
                    if let Some(&i) = index.get(&m.first) {
                        ranked[i].record(round.number, Opponent::Bye, Points::ONE, Color::White);
                    }
                }
                Opponent::Competitor(second) => {
                    if let Some(&i) = index.get(&m.first) {
                        ranked[i].record(round.number, m.second, first_points, Color::White);
                    }
                    if let Some(&i) = index.get(&second) {
                        ranked[i].record(
                            round.number,
                            Opponent::Competitor(m.first),
                            second_points,
                            Color::Black,
                        );
                    }
                }
            }
        }
    }

    let scores: HashMap<CompetitorId, Points> = ranked.iter().map(|c| (c.id, c.score)).collect();
    for c in &mut ranked {
        c.buchholz = c
            .opponents
            .iter()
            .filter_map(|id| scores.get(id).copied())
            .sum();
    }

    ranked.sort_by_key(|c| Reverse((c.score, c.buchholz, c.rating)));
    ranked
}
