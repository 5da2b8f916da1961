//! Standings export as CSV (place, name, rating, games, Buchholz, score).

use crate::models::{Competitor, TournamentError};
use serde::Serialize;
use std::io;

#[derive(Serialize)]
struct StandingsRow<'a> {
    place: usize,
    name: &'a str,
    rating: i32,
    games: usize,
    buchholz: f64,
    score: f64,
}

/// Write `ranked` as CSV with a header row. Places follow the slice order.
pub fn write_standings_csv<W: io::Write>(
    ranked: &[Competitor],
    writer: W,
) -> Result<(), TournamentError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (i, c) in ranked.iter().enumerate() {
        wtr.serialize(StandingsRow {
            place: i + 1,
            name: &c.name,
            rating: c.rating,
            games: c.games_played(),
            buchholz: c.buchholz.as_f64(),
            score: c.score.as_f64(),
        })
        .map_err(|e| TournamentError::Export(e.to_string()))?;
    }
    wtr.flush().map_err(|e| TournamentError::Export(e.to_string()))?;
    Ok(())
}

/// Standings CSV as a string.
pub fn standings_csv(ranked: &[Competitor]) -> Result<String, TournamentError> {
    let mut buf = Vec::new();
    write_standings_csv(ranked, &mut buf)?;
    String::from_utf8(buf).map_err(|e| TournamentError::Export(e.to_string()))
}
