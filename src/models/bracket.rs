//! Single-elimination bracket: the full match tree plus lookup helpers.
//!
//! Construction and result application live in `logic::elimination`; this type
//! only owns the data and read-side accessors.

use crate::models::game::{BracketMatch, MatchId, MatchStatus};
use crate::models::participant::ParticipantId;
use serde::{Deserialize, Serialize};

/// All matches of one elimination stage, round 1 first, in slot-index order
/// within each round. A bracket of capacity C holds exactly C - 1 matches.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    /// Bracket capacity: smallest power of two >= participant count.
    pub capacity: usize,
    pub matches: Vec<BracketMatch>,
}

impl Bracket {
    /// Number of rounds (log2 of capacity).
    pub fn round_count(&self) -> u32 {
        self.capacity.trailing_zeros()
    }

    /// Matches of one round, 1-based.
    pub fn round(&self, round: u32) -> impl Iterator<Item = &BracketMatch> {
        self.matches.iter().filter(move |m| m.round == round)
    }

    pub fn get_match(&self, id: MatchId) -> Option<&BracketMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub(crate) fn position_of(&self, id: MatchId) -> Option<usize> {
        self.matches.iter().position(|m| m.id == id)
    }

    /// The final: the only match with no successor.
    pub fn final_match(&self) -> Option<&BracketMatch> {
        self.matches.iter().find(|m| m.next.is_none())
    }

    /// Winner of the final; None until the final is completed.
    pub fn champion(&self) -> Option<ParticipantId> {
        self.final_match().and_then(|m| m.winner_participant())
    }

    /// True when every match has been resolved.
    pub fn is_complete(&self) -> bool {
        self.matches.iter().all(|m| m.status == MatchStatus::Completed)
    }
}
