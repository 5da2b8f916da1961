//! Tournament business logic: standings, pairing, setup, round play, export.

mod export;
mod pairing;
mod rounds;
mod setup;
mod standings;

pub use export::{standings_csv, write_standings_csv};
pub use pairing::generate_round;
pub use rounds::{advance_round, record_result, Advance};
pub use setup::start_tournament;
pub use standings::recompute;
