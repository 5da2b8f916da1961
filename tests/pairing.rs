//! Integration tests for pairing: byes, rematch avoidance, and round shape.

use std::collections::HashSet;
use swiss_tournament::{
    generate_round, recompute, Color, Competitor, CompetitorId, GameMatch, HistoryEntry,
    MatchResult, Opponent, Points, Round,
};

fn field(n: usize) -> Vec<Competitor> {
    (0..n)
        .map(|i| Competitor::new(format!("p{}", i + 1), 1500 - 100 * i as i32))
        .collect()
}

fn with_bye(mut c: Competitor) -> Competitor {
    c.history.push(HistoryEntry {
        round: 1,
        opponent: Opponent::Bye,
        points: Points::ONE,
        color: Color::White,
    });
    c
}

fn pair_of(m: &GameMatch) -> (CompetitorId, Option<CompetitorId>) {
    (m.first, m.second.competitor())
}

fn assert_no_duplicates(matches: &[GameMatch]) {
    let mut seen = HashSet::new();
    for m in matches {
        assert!(seen.insert(m.first));
        if let Some(id) = m.second.competitor() {
            assert!(seen.insert(id));
        }
    }
}

#[test]
fn even_field_pairs_neighbours_in_rank_order() {
    let players = field(4);

    let matches = generate_round(1, &players);

    assert_eq!(matches.len(), 2);
    assert_eq!(pair_of(&matches[0]), (players[0].id, Some(players[1].id)));
    assert_eq!(pair_of(&matches[1]), (players[2].id, Some(players[3].id)));
    for m in &matches {
        assert_eq!(m.round, 1);
        assert_eq!(m.result, MatchResult::Pending);
    }
}

#[test]
fn odd_field_gives_lowest_ranked_a_bye() {
    let players = field(5);

    let matches = generate_round(1, &players);

    assert_eq!(matches.len(), 3);
    let byes: Vec<_> = matches.iter().filter(|m| m.is_bye()).collect();
    assert_eq!(byes.len(), 1);
    assert_eq!(byes[0].first, players[4].id);
    assert_eq!(byes[0].result, MatchResult::FirstWins);
    assert_no_duplicates(&matches);
}

#[test]
fn bye_skips_competitors_who_already_had_one() {
    let mut players = field(3);
    players[2] = with_bye(players[2].clone());

    let matches = generate_round(2, &players);

    let bye = matches.iter().find(|m| m.is_bye()).unwrap();
    assert_eq!(bye.first, players[1].id);
    let game = matches.iter().find(|m| !m.is_bye()).unwrap();
    assert_eq!(pair_of(game), (players[0].id, Some(players[2].id)));
}

#[test]
fn bye_falls_back_to_lowest_ranked_when_everyone_had_one() {
    let players: Vec<Competitor> = field(3).into_iter().map(with_bye).collect();

    let matches = generate_round(4, &players);

    let bye = matches.iter().find(|m| m.is_bye()).unwrap();
    assert_eq!(bye.first, players[2].id);
}

#[test]
fn avoids_rematch_when_another_opponent_is_left() {
    let mut players = field(4);
    let (a, b) = (players[0].id, players[1].id);
    players[0].opponents.push(b);
    players[1].opponents.push(a);

    let matches = generate_round(2, &players);

    assert_eq!(pair_of(&matches[0]), (players[0].id, Some(players[2].id)));
    assert_eq!(pair_of(&matches[1]), (players[1].id, Some(players[3].id)));
}

#[test]
fn forces_rematch_rather_than_stranding_anyone() {
    let mut players = field(2);
    let (a, b) = (players[0].id, players[1].id);
    players[0].opponents.push(b);
    players[1].opponents.push(a);

    let matches = generate_round(3, &players);

    assert_eq!(matches.len(), 1);
    assert_eq!(pair_of(&matches[0]), (a, Some(b)));
}

#[test]
fn inactive_competitors_are_not_paired() {
    let mut players = field(3);
    players[1].active = false;

    let matches = generate_round(1, &players);

    assert_eq!(matches.len(), 1);
    assert!(!matches[0].is_bye());
    assert!(!matches.iter().any(|m| m.involves(players[1].id)));
}

#[test]
fn every_match_gets_its_own_id() {
    let players = field(9);

    let matches = generate_round(1, &players);

    let ids: HashSet<_> = matches.iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), matches.len());
    assert_no_duplicates(&matches);
}

#[test]
fn empty_field_yields_no_matches() {
    assert!(generate_round(1, &[]).is_empty());
}

#[test]
fn second_round_of_four_has_no_rematch() {
    let players = field(4);
    let mut round_1 = generate_round(1, &players);
    for m in &mut round_1 {
        m.result = MatchResult::FirstWins;
    }
    let rounds = vec![Round::new(1, round_1.clone())];

    let ranked = recompute(&players, &rounds);
    let round_2 = generate_round(2, &ranked);

    assert_eq!(round_2.len(), 2);
    for m in &round_2 {
        let second = m.second.competitor().unwrap();
        assert!(!round_1
            .iter()
            .any(|old| old.involves(m.first) && old.involves(second)));
    }
}

#[test]
fn pairs_by_proximity_of_standing() {
    let players = field(6);

    let matches = generate_round(1, &players);

    let p1 = matches.iter().find(|m| m.involves(players[0].id)).unwrap();
    assert!(p1.involves(players[1].id));
    let p3 = matches.iter().find(|m| m.involves(players[2].id)).unwrap();
    assert!(p3.involves(players[3].id));
}
