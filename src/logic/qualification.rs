//! Qualification: promote top group finishers into the playoff bracket.

use crate::logic::elimination::build_bracket;
use crate::logic::seeding::allocate_seeds;
use crate::logic::standings::compute_group_standings;
use crate::models::{
    Group, Participant, ScoringRules, Tournament, TournamentError, TournamentState,
};

/// Select the top `qualifiers_per_group` finishers of every group, tagged with
/// their origin group, concatenated in group registration order.
///
/// Fails with `GroupIncomplete` before reading any standings if any group
/// still has an unplayed match; nothing is promoted from partial results.
pub fn extract_qualifiers(
    groups: &[Group],
    qualifiers_per_group: usize,
    rules: &ScoringRules,
) -> Result<Vec<Participant>, TournamentError> {
    for g in groups {
        if !g.is_complete() {
            return Err(TournamentError::GroupIncomplete(g.id));
        }
    }
    let mut qualified = Vec::with_capacity(groups.len() * qualifiers_per_group);
    for g in groups {
        for entry in compute_group_standings(g, rules)
            .iter()
            .take(qualifiers_per_group)
        {
            let member = g
                .members
                .iter()
                .find(|p| p.id == entry.participant_id)
                .ok_or(TournamentError::ParticipantNotFound(entry.participant_id))?;
            qualified.push(member.qualified_from(g.id));
        }
    }
    Ok(qualified)
}

/// Build the playoff stage from completed groups.
///
/// The qualifier list flows through the same seed allocation and bracket
/// construction as a knockout-only tournament, so a non-power-of-two qualifier
/// count gets the normal BYE treatment. Idempotent: once the playoff exists,
/// calling again returns the stored qualifier list without rebuilding.
pub fn promote_qualifiers(
    tournament: &mut Tournament,
    qualifiers_per_group: usize,
) -> Result<Vec<Participant>, TournamentError> {
    if let Some(existing) = &tournament.qualifiers {
        return Ok(existing.clone());
    }
    if tournament.state != TournamentState::GroupStage {
        return Err(TournamentError::InvalidState);
    }
    let qualified = extract_qualifiers(
        &tournament.groups,
        qualifiers_per_group,
        &tournament.scoring,
    )?;
    let slots = allocate_seeds(&qualified)?;
    let bracket = build_bracket(slots)?;
    tournament.bracket = Some(bracket);
    tournament.qualifiers = Some(qualified.clone());
    tournament.state = TournamentState::Knockout;
    Ok(qualified)
}
