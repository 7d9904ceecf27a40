//! Elimination bracket: build the match tree, apply results, advance winners.
//!
//! The successor graph is wired once at build time (match `i` of a round feeds
//! slot A of match `i/2` in the next round when `i` is even, slot B when odd).
//! Result application walks that graph: winners are written forward, and a
//! corrected result invalidates everything downstream that consumed the old
//! winner.

use crate::models::{
    Bracket, BracketMatch, MatchId, MatchStatus, NextSlot, Slot, SlotSide, Tournament,
    TournamentError, TournamentState,
};
use serde::{Deserialize, Serialize};

/// Outcome of one result application.
///
/// `changed` carries a clone of every match this call touched (the reported
/// match plus all cascaded advancements), in touch order, so the caller can
/// persist them atomically. `stale` lists matches that had already been played
/// but were invalidated by a correction; they are reset to Pending and
/// surfaced here for a human to decide on a replay, never silently dropped.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ResultReport {
    pub changed: Vec<BracketMatch>,
    pub stale: Vec<MatchId>,
}

/// Ids touched during one application, in order, deduplicated.
#[derive(Default)]
struct Touched {
    changed: Vec<MatchId>,
    stale: Vec<MatchId>,
}

impl Touched {
    fn mark_changed(&mut self, id: MatchId) {
        if !self.changed.contains(&id) {
            self.changed.push(id);
        }
    }

    fn mark_stale(&mut self, id: MatchId) {
        if !self.stale.contains(&id) {
            self.stale.push(id);
        }
    }

    fn into_report(self, bracket: &Bracket) -> ResultReport {
        let changed = self
            .changed
            .iter()
            .filter_map(|&id| bracket.get_match(id).cloned())
            .collect();
        ResultReport {
            changed,
            stale: self.stale,
        }
    }
}

/// Build the full match tree from an allocator slot assignment.
///
/// A capacity-C assignment produces C-1 matches across log2(C) rounds, with
/// exactly one final. Matches decided purely by BYE placement are completed
/// here, cascading through adjacent byes, without scores.
pub fn build_bracket(slots: Vec<Slot>) -> Result<Bracket, TournamentError> {
    let capacity = slots.len();
    if capacity < 2 || !capacity.is_power_of_two() {
        return Err(TournamentError::InvalidParticipantCount { provided: capacity });
    }

    let mut rounds: Vec<Vec<BracketMatch>> = Vec::new();
    let first: Vec<BracketMatch> = slots
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| BracketMatch::new(1, i, pair[0], pair[1]))
        .collect();
    rounds.push(first);
    let mut round_no = 1;
    while rounds[rounds.len() - 1].len() > 1 {
        round_no += 1;
        let count = rounds[rounds.len() - 1].len() / 2;
        let next: Vec<BracketMatch> = (0..count)
            .map(|i| BracketMatch::new(round_no, i, Slot::Empty, Slot::Empty))
            .collect();
        rounds.push(next);
    }

    // Wire each match to its successor slot.
    for r in 0..rounds.len() - 1 {
        let next_ids: Vec<MatchId> = rounds[r + 1].iter().map(|m| m.id).collect();
        for (i, m) in rounds[r].iter_mut().enumerate() {
            m.next = Some(NextSlot {
                match_id: next_ids[i / 2],
                slot: if i % 2 == 0 { SlotSide::A } else { SlotSide::B },
            });
        }
    }

    let mut bracket = Bracket {
        capacity,
        matches: rounds.into_iter().flatten().collect(),
    };

    // Resolve BYE placements, cascading into later rounds.
    let mut touched = Touched::default();
    for pos in 0..capacity / 2 {
        try_auto_complete(&mut bracket, pos, &mut touched)?;
    }
    Ok(bracket)
}

/// Apply a reported result to a match and advance the winner.
///
/// Validates everything before mutating, so a rejected call leaves the bracket
/// untouched. Re-applying to a completed match is a correction: the downstream
/// chain that consumed the previous winner is reset and re-seeded, and matches
/// that had already been played along it are flagged stale in the report.
pub fn apply_match_result(
    bracket: &mut Bracket,
    match_id: MatchId,
    score_a: i64,
    score_b: i64,
) -> Result<ResultReport, TournamentError> {
    let pos = bracket
        .position_of(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    // Range check before any mutation: negative or over-u32 scores are
    // rejected outright, never clamped or wrapped.
    let score_a = u32::try_from(score_a).map_err(|_| TournamentError::InvalidScore)?;
    let score_b = u32::try_from(score_b).map_err(|_| TournamentError::InvalidScore)?;
    let (winner_side, winner_id) = {
        let m = &bracket.matches[pos];
        // Both opponents must be real before a score can be recorded; a BYE
        // match resolves automatically and never takes a result.
        let a = m.slot_a.participant().ok_or(TournamentError::IncompleteMatch(match_id))?;
        let b = m.slot_b.participant().ok_or(TournamentError::IncompleteMatch(match_id))?;
        if score_a == score_b {
            return Err(TournamentError::UnsupportedDraw);
        }
        if score_a > score_b {
            (SlotSide::A, a)
        } else {
            (SlotSide::B, b)
        }
    };

    let mut touched = Touched::default();
    {
        let m = &mut bracket.matches[pos];
        m.score_a = Some(score_a);
        m.score_b = Some(score_b);
        m.status = MatchStatus::Completed;
        m.winner = Some(winner_side);
        touched.mark_changed(match_id);
    }
    if let Some(next) = bracket.matches[pos].next {
        set_slot(bracket, next.match_id, next.slot, Slot::Taken(winner_id), &mut touched)?;
    }
    Ok(touched.into_report(bracket))
}

/// Tournament-level entry point: apply a bracket result and complete the
/// tournament once the final is decided.
pub fn record_bracket_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    score_a: i64,
    score_b: i64,
) -> Result<ResultReport, TournamentError> {
    if tournament.state != TournamentState::Knockout
        && tournament.state != TournamentState::Completed
    {
        return Err(TournamentError::InvalidState);
    }
    let bracket = tournament
        .bracket
        .as_mut()
        .ok_or(TournamentError::InvalidState)?;
    let report = apply_match_result(bracket, match_id, score_a, score_b)?;
    tournament.state = if bracket.champion().is_some() {
        TournamentState::Completed
    } else {
        // A correction to the final can re-open a completed tournament.
        TournamentState::Knockout
    };
    Ok(report)
}

/// Write a winner (or an Empty reset) into one slot of a downstream match.
///
/// If the target match had already been resolved with a different opponent,
/// it is reset to Pending, its own propagated winner is retracted further
/// down, and it is flagged stale when it had real scores.
fn set_slot(
    bracket: &mut Bracket,
    match_id: MatchId,
    side: SlotSide,
    value: Slot,
    touched: &mut Touched,
) -> Result<(), TournamentError> {
    let pos = bracket
        .position_of(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if *bracket.matches[pos].slot(side) == value {
        // Same opponent as before; nothing downstream depended on a change.
        return Ok(());
    }
    let next = {
        let m = &mut bracket.matches[pos];
        match side {
            SlotSide::A => m.slot_a = value,
            SlotSide::B => m.slot_b = value,
        }
        touched.mark_changed(match_id);
        if m.status == MatchStatus::Completed {
            let played = m.score_a.is_some() || m.score_b.is_some();
            m.status = MatchStatus::Pending;
            m.score_a = None;
            m.score_b = None;
            m.winner = None;
            if played {
                touched.mark_stale(match_id);
            }
            m.next
        } else {
            None
        }
    };
    // Retract the old winner from the rest of the chain.
    if let Some(next) = next {
        set_slot(bracket, next.match_id, next.slot, Slot::Empty, touched)?;
    }
    try_auto_complete(bracket, pos, touched)
}

/// Complete a match decided purely by BYE placement and advance the survivor.
/// Two adjacent byes advance a BYE, so chains resolve in cascade.
fn try_auto_complete(
    bracket: &mut Bracket,
    pos: usize,
    touched: &mut Touched,
) -> Result<(), TournamentError> {
    let m = &bracket.matches[pos];
    if m.status == MatchStatus::Completed {
        return Ok(());
    }
    let winner_side = match (m.slot_a, m.slot_b) {
        (Slot::Taken(_), Slot::Bye) => SlotSide::A,
        (Slot::Bye, Slot::Taken(_)) => SlotSide::B,
        (Slot::Bye, Slot::Bye) => SlotSide::A,
        _ => return Ok(()),
    };
    let (advancing, next, id) = {
        let m = &mut bracket.matches[pos];
        m.status = MatchStatus::Completed;
        m.winner = Some(winner_side);
        (*m.slot(winner_side), m.next, m.id)
    };
    touched.mark_changed(id);
    if let Some(next) = next {
        set_slot(bracket, next.match_id, next.slot, advancing, touched)?;
    }
    Ok(())
}
