//! Integration tests for the elimination bracket: construction, advancement,
//! corrections.

use tournament_bracket_web::{
    allocate_seeds, apply_match_result, bracket_capacity, build_bracket, Bracket, MatchStatus,
    Participant, TournamentError,
};

fn participants(n: usize) -> Vec<Participant> {
    (0..n).map(|i| Participant::new(format!("P{i}"))).collect()
}

fn bracket_of(n: usize) -> (Vec<Participant>, Bracket) {
    let ps = participants(n);
    let bracket = build_bracket(allocate_seeds(&ps).unwrap()).unwrap();
    (ps, bracket)
}

#[test]
fn capacity_c_yields_c_minus_1_matches_and_one_final() {
    for n in [2, 3, 4, 5, 8, 9, 16] {
        let (_, bracket) = bracket_of(n);
        let c = bracket_capacity(n);
        assert_eq!(bracket.matches.len(), c - 1, "n={n}");
        assert_eq!(bracket.round_count() as usize, c.trailing_zeros() as usize, "n={n}");
        assert_eq!(bracket.round(1).count(), c / 2, "n={n}");
        let finals: Vec<_> = bracket.matches.iter().filter(|m| m.next.is_none()).collect();
        assert_eq!(finals.len(), 1, "n={n}");
        assert_eq!(finals[0].round, bracket.round_count(), "n={n}");
    }
}

#[test]
fn every_non_final_match_feeds_exactly_one_successor_slot() {
    let (_, bracket) = bracket_of(8);
    for m in &bracket.matches {
        let Some(next) = m.next else { continue };
        let target = bracket.get_match(next.match_id).unwrap();
        assert_eq!(target.round, m.round + 1);
        assert_eq!(target.index, m.index / 2);
    }
}

#[test]
fn bye_matches_complete_at_build_time_without_scores() {
    let (ps, bracket) = bracket_of(3);
    // seed 1 sits opposite the bye in a capacity-4 bracket
    let bye_match = bracket
        .round(1)
        .find(|m| m.slot_b.is_bye() || m.slot_a.is_bye())
        .unwrap();
    assert_eq!(bye_match.status, MatchStatus::Completed);
    assert_eq!(bye_match.winner_participant(), Some(ps[0].id));
    assert_eq!(bye_match.score_a, None);
    assert_eq!(bye_match.score_b, None);
    // and the winner is already waiting in the final
    let final_match = bracket.final_match().unwrap();
    assert_eq!(final_match.slot(bye_match.next.unwrap().slot).participant(), Some(ps[0].id));
}

#[test]
fn playing_every_match_of_a_full_bracket_crowns_one_champion() {
    let (_, mut bracket) = bracket_of(8);
    for round in 1..=bracket.round_count() {
        let ids: Vec<_> = bracket
            .round(round)
            .filter(|m| m.status == MatchStatus::Pending)
            .map(|m| m.id)
            .collect();
        for id in ids {
            apply_match_result(&mut bracket, id, 2, 1).unwrap();
        }
    }
    assert!(bracket.is_complete());
    assert!(bracket.champion().is_some());
    assert_eq!(
        bracket.matches.iter().filter(|m| m.status == MatchStatus::Pending).count(),
        0
    );
}

#[test]
fn champion_is_none_until_the_final_completes() {
    let (_, mut bracket) = bracket_of(4);
    assert_eq!(bracket.champion(), None);
    let ids: Vec<_> = bracket.round(1).map(|m| m.id).collect();
    for id in ids {
        apply_match_result(&mut bracket, id, 1, 0).unwrap();
    }
    assert_eq!(bracket.champion(), None);
    let final_id = bracket.final_match().unwrap().id;
    apply_match_result(&mut bracket, final_id, 3, 2).unwrap();
    assert!(bracket.champion().is_some());
}

#[test]
fn winner_advances_into_the_wired_slot() {
    let (ps, mut bracket) = bracket_of(4);
    let first = bracket.round(1).next().unwrap();
    let (first_id, next) = (first.id, first.next.unwrap());
    let report = apply_match_result(&mut bracket, first_id, 5, 3).unwrap();
    // slot A of match 0 feeds slot A of the final; winner was our seed 1
    let target = bracket.get_match(next.match_id).unwrap();
    assert_eq!(target.slot(next.slot).participant(), Some(ps[0].id));
    let changed_ids: Vec<_> = report.changed.iter().map(|m| m.id).collect();
    assert!(changed_ids.contains(&first_id));
    assert!(changed_ids.contains(&next.match_id));
    assert!(report.stale.is_empty());
}

#[test]
fn rejected_results_leave_the_bracket_untouched() {
    let (_, mut bracket) = bracket_of(4);
    let first_id = bracket.round(1).next().unwrap().id;
    let final_id = bracket.final_match().unwrap().id;
    let before = bracket.clone();

    let unknown = uuid::Uuid::new_v4();
    assert_eq!(
        apply_match_result(&mut bracket, unknown, 1, 0),
        Err(TournamentError::MatchNotFound(unknown))
    );
    assert_eq!(
        apply_match_result(&mut bracket, final_id, 1, 0),
        Err(TournamentError::IncompleteMatch(final_id))
    );
    assert_eq!(
        apply_match_result(&mut bracket, first_id, -1, 0),
        Err(TournamentError::InvalidScore)
    );
    // over-u32 scores are rejected, not wrapped into a small value
    assert_eq!(
        apply_match_result(&mut bracket, first_id, (1_i64 << 32) + 1, 2),
        Err(TournamentError::InvalidScore)
    );
    assert_eq!(
        apply_match_result(&mut bracket, first_id, 2, 2),
        Err(TournamentError::UnsupportedDraw)
    );
    assert_eq!(bracket, before);
}

#[test]
fn scores_cannot_be_recorded_against_a_bye() {
    let (_, mut bracket) = bracket_of(3);
    let bye_id = bracket
        .round(1)
        .find(|m| m.slot_a.is_bye() || m.slot_b.is_bye())
        .unwrap()
        .id;
    assert_eq!(
        apply_match_result(&mut bracket, bye_id, 1, 0),
        Err(TournamentError::IncompleteMatch(bye_id))
    );
}

#[test]
fn correcting_a_winner_resets_and_flags_downstream_matches() {
    let (ps, mut bracket) = bracket_of(4);
    let round1: Vec<_> = bracket.round(1).map(|m| m.id).collect();
    let final_id = bracket.final_match().unwrap().id;

    apply_match_result(&mut bracket, round1[0], 2, 0).unwrap(); // P0 beats P3
    apply_match_result(&mut bracket, round1[1], 2, 1).unwrap(); // P1 beats P2
    apply_match_result(&mut bracket, final_id, 3, 1).unwrap(); // P0 champion
    assert_eq!(bracket.champion(), Some(ps[0].id));

    // Correction: the opener actually went to P3.
    let report = apply_match_result(&mut bracket, round1[0], 0, 1).unwrap();
    assert_eq!(report.stale, vec![final_id]);
    let changed_ids: Vec<_> = report.changed.iter().map(|m| m.id).collect();
    assert!(changed_ids.contains(&round1[0]));
    assert!(changed_ids.contains(&final_id));

    let final_match = bracket.final_match().unwrap();
    assert_eq!(final_match.status, MatchStatus::Pending);
    assert_eq!(final_match.score_a, None);
    assert_eq!(final_match.score_b, None);
    assert_eq!(final_match.slot_a.participant(), Some(ps[3].id));
    assert_eq!(final_match.slot_b.participant(), Some(ps[1].id));
    assert_eq!(bracket.champion(), None);

    // The untouched semi keeps its result.
    let other = bracket.get_match(round1[1]).unwrap();
    assert_eq!(other.status, MatchStatus::Completed);
}

#[test]
fn rescoring_with_the_same_winner_does_not_disturb_downstream() {
    let (ps, mut bracket) = bracket_of(4);
    let round1: Vec<_> = bracket.round(1).map(|m| m.id).collect();
    let final_id = bracket.final_match().unwrap().id;

    apply_match_result(&mut bracket, round1[0], 2, 0).unwrap();
    apply_match_result(&mut bracket, round1[1], 2, 1).unwrap();
    apply_match_result(&mut bracket, final_id, 3, 1).unwrap();

    let report = apply_match_result(&mut bracket, round1[0], 4, 2).unwrap();
    assert!(report.stale.is_empty());
    assert_eq!(report.changed.len(), 1);
    assert_eq!(report.changed[0].id, round1[0]);
    assert_eq!(report.changed[0].score_a, Some(4));
    assert_eq!(bracket.champion(), Some(ps[0].id));
}

#[test]
fn correction_flags_the_whole_downstream_chain() {
    let (_, mut bracket) = bracket_of(8);
    for round in 1..=3 {
        let ids: Vec<_> = bracket
            .round(round)
            .filter(|m| m.status == MatchStatus::Pending)
            .map(|m| m.id)
            .collect();
        for id in ids {
            apply_match_result(&mut bracket, id, 1, 0).unwrap();
        }
    }
    let first = bracket.round(1).next().unwrap().id;
    let report = apply_match_result(&mut bracket, first, 0, 7).unwrap();
    // the semifinal and the final had both consumed the old winner
    assert_eq!(report.stale.len(), 2);
    assert_eq!(bracket.champion(), None);
}
