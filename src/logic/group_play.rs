//! Group stage: round-robin scheduling and result recording.

use crate::models::{
    Group, GroupMatch, MatchId, MatchStatus, Participant, Tournament, TournamentError,
    TournamentState,
};

/// Schedule a full round robin: every pair of members meets exactly once,
/// n * (n - 1) / 2 matches in registration order.
pub fn generate_round_robin_matches(members: &[Participant]) -> Vec<GroupMatch> {
    let mut matches = Vec::with_capacity(members.len() * members.len().saturating_sub(1) / 2);
    for i in 0..members.len() {
        for j in i + 1..members.len() {
            matches.push(GroupMatch::new(members[i].id, members[j].id));
        }
    }
    matches
}

/// Record (or correct) a group match result. Draws are legal in group play.
/// Returns a clone of the updated match for persistence.
pub fn record_group_result(
    group: &mut Group,
    match_id: MatchId,
    score_a: i64,
    score_b: i64,
) -> Result<GroupMatch, TournamentError> {
    // Range check before any mutation: negative or over-u32 scores are
    // rejected outright, never clamped or wrapped.
    let score_a = u32::try_from(score_a).map_err(|_| TournamentError::InvalidScore)?;
    let score_b = u32::try_from(score_b).map_err(|_| TournamentError::InvalidScore)?;
    let m = group
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    m.score_a = Some(score_a);
    m.score_b = Some(score_b);
    m.status = MatchStatus::Completed;
    Ok(m.clone())
}

/// Tournament-level entry point: find the group holding the match and record
/// the result there. Only valid while the group stage is running.
pub fn record_group_stage_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    score_a: i64,
    score_b: i64,
) -> Result<GroupMatch, TournamentError> {
    if tournament.state != TournamentState::GroupStage {
        return Err(TournamentError::InvalidState);
    }
    let group = tournament
        .groups
        .iter_mut()
        .find(|g| g.matches.iter().any(|m| m.id == match_id))
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    record_group_result(group, match_id, score_a, score_b)
}
