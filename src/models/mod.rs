//! Data structures for tournaments: participants, matches, groups, brackets.

mod bracket;
mod game;
mod group;
mod participant;
mod tournament;

pub use bracket::Bracket;
pub use game::{BracketMatch, GroupMatch, MatchId, MatchStatus, NextSlot, Slot, SlotSide};
pub use group::{Group, GroupId, ScoringRules, StandingEntry};
pub use participant::{Participant, ParticipantId};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentState};
