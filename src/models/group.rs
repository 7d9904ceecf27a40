//! Round-robin group: members, scheduled matches, standings configuration.

use crate::models::game::{GroupMatch, MatchId, MatchStatus};
use crate::models::participant::{Participant, ParticipantId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a group.
pub type GroupId = Uuid;

/// Points awarded per result in group play. Default: win 3, draw 1, loss 0.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoringRules {
    pub win_points: u32,
    pub draw_points: u32,
    pub loss_points: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            win_points: 3,
            draw_points: 1,
            loss_points: 0,
        }
    }
}

/// One row of a group standings table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub participant_id: ParticipantId,
    pub name: String,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl StandingEntry {
    pub fn new(participant: &Participant) -> Self {
        Self {
            participant_id: participant.id,
            name: participant.name.clone(),
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

/// A round-robin group: every pair of members meets exactly once.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    /// Members in registration order (the final standings tie-break).
    pub members: Vec<Participant>,
    pub matches: Vec<GroupMatch>,
}

impl Group {
    pub fn new(name: impl Into<String>, members: Vec<Participant>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            members,
            matches: Vec::new(),
        }
    }

    /// True when every scheduled match has a recorded result.
    pub fn is_complete(&self) -> bool {
        self.matches.iter().all(|m| m.status == MatchStatus::Completed)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut GroupMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }
}
