//! Single binary web host: in-memory Swiss tournaments behind a JSON REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 127.0.0.1), PORT (e.g. 8080).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use swiss_tournament::{
    advance_round, record_result, standings_csv, start_tournament, CompetitorId, MatchId,
    MatchResult, Tournament, TournamentError, TournamentId, DEFAULT_RATING, DEFAULT_TOTAL_ROUNDS,
};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// How often idle tournaments are swept.
const EVICTION_PERIOD: Duration = Duration::from_secs(30 * 60);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
struct CompetitorBody {
    name: String,
    #[serde(default = "default_rating")]
    rating: i32,
}

fn default_rating() -> i32 {
    DEFAULT_RATING
}

#[derive(Deserialize)]
struct StartBody {
    name: Option<String>,
    #[serde(default = "default_total_rounds")]
    total_rounds: u32,
}

fn default_total_rounds() -> u32 {
    DEFAULT_TOTAL_ROUNDS
}

#[derive(Deserialize)]
struct RecordResultBody {
    result: MatchResult,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and competitor id.
#[derive(Deserialize)]
struct CompetitorPath {
    id: TournamentId,
    competitor_id: CompetitorId,
}

/// Path segments: tournament id, round number and match id.
#[derive(Deserialize)]
struct MatchPath {
    id: TournamentId,
    round: u32,
    match_id: MatchId,
}

fn bad_request(e: TournamentError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Look up a tournament, refresh its last activity, and hand it to `f`.
fn with_tournament<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&mut entry.tournament)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Reply with the whole tournament on success, or the rejection reason.
fn respond<T>(t: &Tournament, result: Result<T, TournamentError>) -> HttpResponse {
    match result {
        Ok(_) => HttpResponse::Ok().json(t),
        Err(e) => bad_request(e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament",
    })
}

/// Create a new tournament in Setup (client stores the returned id).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Option<Json<CreateTournamentBody>>) -> HttpResponse {
    let name = body.map(|b| b.into_inner().name).unwrap_or_default();
    let tournament = Tournament::new(name);
    let response = HttpResponse::Ok().json(&tournament);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!("Created tournament {}", tournament.id());
    g.insert(
        tournament.id(),
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    response
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| HttpResponse::Ok().json(t))
}

/// Add a competitor (Setup only).
#[post("/api/tournaments/{id}/competitors")]
async fn api_add_competitor(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<CompetitorBody>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        let result = t.add_competitor(body.name.trim(), body.rating);
        respond(t, result)
    })
}

/// Edit a competitor's name and rating (Setup only).
#[put("/api/tournaments/{id}/competitors/{competitor_id}")]
async fn api_edit_competitor(
    state: AppState,
    path: Path<CompetitorPath>,
    body: Json<CompetitorBody>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        let result = t.edit_competitor(path.competitor_id, body.name.trim(), body.rating);
        respond(t, result)
    })
}

/// Remove a competitor (Setup only).
#[delete("/api/tournaments/{id}/competitors/{competitor_id}")]
async fn api_remove_competitor(state: AppState, path: Path<CompetitorPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        let result = t.remove_competitor(path.competitor_id);
        respond(t, result)
    })
}

/// Start the tournament (Setup -> InProgress) and pair round 1.
#[post("/api/tournaments/{id}/start")]
async fn api_start_tournament(
    state: AppState,
    path: Path<TournamentPath>,
    body: Option<Json<StartBody>>,
) -> HttpResponse {
    let (name, total_rounds) = match body {
        Some(b) => (b.name.clone(), b.total_rounds),
        None => (None, DEFAULT_TOTAL_ROUNDS),
    };
    with_tournament(&state, path.id, |t| {
        let name = name.unwrap_or_else(|| t.name().to_string());
        let result = start_tournament(t, name, total_rounds);
        respond(t, result)
    })
}

/// Pair the next round, or finish the tournament after the last one.
#[post("/api/tournaments/{id}/rounds/advance")]
async fn api_advance_round(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match advance_round(t) {
        Ok(advance) => HttpResponse::Ok().json(serde_json::json!({
            "advance": advance,
            "tournament": t,
        })),
        Err(e) => bad_request(e),
    })
}

/// Set one match result; standings are recomputed.
#[put("/api/tournaments/{id}/rounds/{round}/matches/{match_id}")]
async fn api_record_result(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<RecordResultBody>,
) -> HttpResponse {
    with_tournament(&state, path.id, |t| {
        let result = record_result(t, path.round, path.match_id, body.result);
        respond(t, result)
    })
}

#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| HttpResponse::Ok().json(t.standings()))
}

#[get("/api/tournaments/{id}/standings.csv")]
async fn api_standings_csv(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| match standings_csv(t.standings()) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
    })
}

/// Bind address from HOST / PORT, falling back to 0.0.0.0:8080.
fn bind_address() -> (String, u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    (host, port)
}

/// Drop tournaments nobody has touched within `INACTIVITY_TIMEOUT`. Returns how many went.
fn evict_idle(state: &AppState) -> usize {
    let Ok(mut g) = state.write() else {
        return 0;
    };
    let before = g.len();
    g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
    before - g.len()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let (host, port) = bind_address();
    log::info!("Swiss tournament host listening on http://{}:{}", host, port);

    let state: AppState = Data::new(RwLock::new(HashMap::new()));

    let sweeper = state.clone();
    actix_web::rt::spawn(async move {
        let mut ticks = actix_web::rt::time::interval(EVICTION_PERIOD);
        loop {
            ticks.tick().await;
            let evicted = evict_idle(&sweeper);
            if evicted > 0 {
                log::info!("Evicted {} idle tournament(s)", evicted);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_add_competitor)
            .service(api_edit_competitor)
            .service(api_remove_competitor)
            .service(api_start_tournament)
            .service(api_advance_round)
            .service(api_record_result)
            .service(api_standings_csv)
            .service(api_standings)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
