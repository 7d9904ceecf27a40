//! Setup phase: start the tournament as a knockout or a group stage.

use crate::logic::elimination::build_bracket;
use crate::logic::group_play::generate_round_robin_matches;
use crate::logic::seeding::allocate_seeds;
use crate::models::{Group, Tournament, TournamentError, TournamentState};

/// Start a knockout-only tournament: seed the registered participants in
/// registration order and build the bracket. Setup -> Knockout.
pub fn start_knockout(tournament: &mut Tournament) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::Setup {
        return Err(TournamentError::InvalidState);
    }
    let slots = allocate_seeds(&tournament.participants)?;
    tournament.bracket = Some(build_bracket(slots)?);
    tournament.state = TournamentState::Knockout;
    Ok(())
}

/// Start a group stage: deal participants into `group_count` groups in
/// registration order and schedule a round robin in each. Setup -> GroupStage.
pub fn start_group_stage(
    tournament: &mut Tournament,
    group_count: usize,
) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::Setup {
        return Err(TournamentError::InvalidState);
    }
    let participants = tournament.participants.len();
    if group_count == 0 || participants < group_count * 2 {
        return Err(TournamentError::InvalidGroupCount {
            requested: group_count,
            participants,
        });
    }

    let mut buckets: Vec<Vec<_>> = vec![Vec::new(); group_count];
    for (i, p) in tournament.participants.iter().enumerate() {
        buckets[i % group_count].push(p.clone());
    }

    tournament.groups = buckets
        .into_iter()
        .enumerate()
        .map(|(i, members)| {
            let mut group = Group::new(group_label(i), members);
            group.matches = generate_round_robin_matches(&group.members);
            group
        })
        .collect();
    tournament.state = TournamentState::GroupStage;
    Ok(())
}

/// "Group A" .. "Group Z", then numbered beyond that.
fn group_label(index: usize) -> String {
    if index < 26 {
        format!("Group {}", (b'A' + index as u8) as char)
    } else {
        format!("Group {}", index + 1)
    }
}
