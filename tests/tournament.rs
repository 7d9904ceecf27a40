//! Integration tests for the tournament container: registration guards and
//! the knockout lifecycle.

use tournament_bracket_web::{
    record_bracket_result, start_group_stage, start_knockout, MatchStatus, Participant,
    ScoringRules, Tournament, TournamentError, TournamentState,
};

fn tournament_with(n: usize) -> Tournament {
    let ps: Vec<Participant> = (0..n).map(|i| Participant::new(format!("P{i}"))).collect();
    Tournament::with_participants("Cup", ps, ScoringRules::default())
}

#[test]
fn participant_names_are_unique_case_insensitive() {
    let mut t = Tournament::new("Cup", ScoringRules::default());
    t.add_participant("Alice").unwrap();
    assert_eq!(
        t.add_participant("alice"),
        Err(TournamentError::DuplicateParticipantName)
    );
    assert_eq!(t.add_participant("  "), Err(TournamentError::InvalidState));
    t.add_participant("  Bob  ").unwrap();
    assert_eq!(t.participants[1].name, "Bob");
}

#[test]
fn avatars_are_stored_on_registration() {
    let mut t = Tournament::new("Cup", ScoringRules::default());
    t.add_participant_with_avatar("Alice", Some("avatars/alice.png".to_string()))
        .unwrap();
    t.add_participant("Bob").unwrap();
    assert_eq!(t.participants[0].avatar.as_deref(), Some("avatars/alice.png"));
    assert_eq!(t.participants[1].avatar, None);
    // name uniqueness is unaffected by the avatar
    assert_eq!(
        t.add_participant_with_avatar("ALICE", Some("avatars/other.png".to_string())),
        Err(TournamentError::DuplicateParticipantName)
    );
}

#[test]
fn registration_closes_once_the_tournament_starts() {
    let mut t = tournament_with(4);
    start_knockout(&mut t).unwrap();
    assert_eq!(t.add_participant("Late"), Err(TournamentError::InvalidState));
    let id = t.participants[0].id;
    assert_eq!(t.remove_participant(id), Err(TournamentError::InvalidState));
}

#[test]
fn knockout_needs_at_least_two_participants() {
    let mut t = tournament_with(1);
    assert_eq!(
        start_knockout(&mut t),
        Err(TournamentError::InvalidParticipantCount { provided: 1 })
    );
    assert_eq!(t.state, TournamentState::Setup);
}

#[test]
fn group_stage_needs_two_members_per_group() {
    let mut t = tournament_with(5);
    assert_eq!(
        start_group_stage(&mut t, 3),
        Err(TournamentError::InvalidGroupCount { requested: 3, participants: 5 })
    );
    assert_eq!(
        start_group_stage(&mut t, 0),
        Err(TournamentError::InvalidGroupCount { requested: 0, participants: 5 })
    );
}

#[test]
fn playing_out_the_bracket_completes_the_tournament() {
    let mut t = tournament_with(4);
    start_knockout(&mut t).unwrap();
    assert_eq!(t.state, TournamentState::Knockout);
    assert_eq!(t.champion(), None);

    loop {
        let pending: Vec<_> = {
            let bracket = t.bracket.as_ref().unwrap();
            bracket
                .matches
                .iter()
                .filter(|m| m.status == MatchStatus::Pending)
                .map(|m| m.id)
                .collect()
        };
        if pending.is_empty() {
            break;
        }
        for id in pending {
            record_bracket_result(&mut t, id, 2, 1).unwrap();
        }
    }
    assert_eq!(t.state, TournamentState::Completed);
    assert!(t.champion().is_some());
}

#[test]
fn correcting_a_semi_reopens_a_completed_tournament() {
    let mut t = tournament_with(4);
    start_knockout(&mut t).unwrap();
    let semis: Vec<_> = t.bracket.as_ref().unwrap().round(1).map(|m| m.id).collect();
    let final_id = t.bracket.as_ref().unwrap().final_match().unwrap().id;
    record_bracket_result(&mut t, semis[0], 2, 0).unwrap();
    record_bracket_result(&mut t, semis[1], 2, 1).unwrap();
    record_bracket_result(&mut t, final_id, 1, 0).unwrap();
    assert_eq!(t.state, TournamentState::Completed);

    let report = record_bracket_result(&mut t, semis[0], 0, 2).unwrap();
    assert_eq!(report.stale, vec![final_id]);
    assert_eq!(t.state, TournamentState::Knockout);
    assert_eq!(t.champion(), None);
}

#[test]
fn the_final_itself_can_be_corrected_after_completion() {
    let mut t = tournament_with(2);
    start_knockout(&mut t).unwrap();
    let final_id = t.bracket.as_ref().unwrap().final_match().unwrap().id;
    record_bracket_result(&mut t, final_id, 2, 1).unwrap();
    assert_eq!(t.state, TournamentState::Completed);
    let champion = t.champion().unwrap();

    record_bracket_result(&mut t, final_id, 1, 2).unwrap();
    assert_eq!(t.state, TournamentState::Completed);
    assert!(t.champion().is_some());
    assert_ne!(t.champion().unwrap(), champion);
}

#[test]
fn results_are_rejected_before_a_bracket_exists() {
    let mut t = tournament_with(4);
    let id = uuid::Uuid::new_v4();
    assert_eq!(
        record_bracket_result(&mut t, id, 1, 0),
        Err(TournamentError::InvalidState)
    );
}
