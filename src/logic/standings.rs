//! Group standings: fold played matches into a ranked table.

use crate::models::{Group, MatchStatus, ScoringRules, StandingEntry};
use std::collections::HashMap;

/// Compute the standings table for one group.
///
/// Pure function of the group's match list: every call recomputes from the
/// full history (completed matches only), so corrections can never leave a
/// drifted accumulator behind.
///
/// Ordering, descending: points, then goal difference, then goals for. Rows
/// still tied after that keep registration order (the sort is stable), never
/// a randomized rank.
pub fn compute_group_standings(group: &Group, rules: &ScoringRules) -> Vec<StandingEntry> {
    let mut entries: Vec<StandingEntry> =
        group.members.iter().map(StandingEntry::new).collect();
    let index: HashMap<_, _> = group
        .members
        .iter()
        .enumerate()
        .map(|(i, p)| (p.id, i))
        .collect();

    for m in &group.matches {
        if m.status != MatchStatus::Completed {
            continue;
        }
        let (Some(score_a), Some(score_b)) = (m.score_a, m.score_b) else {
            continue;
        };
        let (Some(&ia), Some(&ib)) = (index.get(&m.participant_a), index.get(&m.participant_b))
        else {
            continue;
        };
        entries[ia].goals_for += score_a;
        entries[ia].goals_against += score_b;
        entries[ib].goals_for += score_b;
        entries[ib].goals_against += score_a;
        if score_a > score_b {
            entries[ia].wins += 1;
            entries[ib].losses += 1;
        } else if score_b > score_a {
            entries[ib].wins += 1;
            entries[ia].losses += 1;
        } else {
            entries[ia].draws += 1;
            entries[ib].draws += 1;
        }
    }

    for e in &mut entries {
        e.points =
            e.wins * rules.win_points + e.draws * rules.draw_points + e.losses * rules.loss_points;
    }

    entries.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference().cmp(&a.goal_difference()))
            .then(b.goals_for.cmp(&a.goals_for))
    });
    entries
}
