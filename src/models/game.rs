//! Match data structures: bracket matches (single elimination) and group matches (round robin).

use crate::models::participant::ParticipantId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Which of the two opponent positions in a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotSide {
    #[default]
    A,
    B,
}

/// One opponent position in a bracket match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Not yet known; filled by the winner of an earlier match.
    #[default]
    Empty,
    /// Placeholder opponent; the other slot advances without playing.
    Bye,
    Taken(ParticipantId),
}

impl Slot {
    pub fn participant(&self) -> Option<ParticipantId> {
        match self {
            Slot::Taken(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }
}

/// Whether a match still awaits a result.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    Completed,
}

/// Where a match's winner is written: which match, which slot.
/// Computed once at build time; the successor graph is explicit and is never
/// re-derived from formatted match names.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct NextSlot {
    pub match_id: MatchId,
    pub slot: SlotSide,
}

/// A single elimination-bracket match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketMatch {
    pub id: MatchId,
    /// Round number, 1 = earliest.
    pub round: u32,
    /// Match index within the round (0-based).
    pub index: usize,
    pub slot_a: Slot,
    pub slot_b: Slot,
    /// None until a result is reported. BYE auto-completions stay scoreless.
    pub score_a: Option<u32>,
    pub score_b: Option<u32>,
    pub status: MatchStatus,
    /// Which side won; None while Pending.
    pub winner: Option<SlotSide>,
    /// None only for the final.
    pub next: Option<NextSlot>,
}

impl BracketMatch {
    pub fn new(round: u32, index: usize, slot_a: Slot, slot_b: Slot) -> Self {
        Self {
            id: Uuid::new_v4(),
            round,
            index,
            slot_a,
            slot_b,
            score_a: None,
            score_b: None,
            status: MatchStatus::Pending,
            winner: None,
            next: None,
        }
    }

    pub fn slot(&self, side: SlotSide) -> &Slot {
        match side {
            SlotSide::A => &self.slot_a,
            SlotSide::B => &self.slot_b,
        }
    }

    /// The slot value that advances out of this match (None while Pending).
    pub fn winner_slot(&self) -> Option<Slot> {
        self.winner.map(|side| *self.slot(side))
    }

    /// The winning participant, if completed and the winner is real (not a BYE).
    pub fn winner_participant(&self) -> Option<ParticipantId> {
        self.winner_slot().and_then(|s| s.participant())
    }
}

/// A round-robin group match. Both opponents are always known; draws are legal.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupMatch {
    pub id: MatchId,
    pub participant_a: ParticipantId,
    pub participant_b: ParticipantId,
    pub score_a: Option<u32>,
    pub score_b: Option<u32>,
    pub status: MatchStatus,
}

impl GroupMatch {
    pub fn new(participant_a: ParticipantId, participant_b: ParticipantId) -> Self {
        Self {
            id: Uuid::new_v4(),
            participant_a,
            participant_b,
            score_a: None,
            score_b: None,
            status: MatchStatus::Pending,
        }
    }
}
