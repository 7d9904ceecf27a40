//! Tournament container and TournamentState.

use crate::models::bracket::Bracket;
use crate::models::game::MatchId;
use crate::models::group::{Group, GroupId, ScoringRules};
use crate::models::participant::{Participant, ParticipantId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// A bracket needs at least 2 participants.
    InvalidParticipantCount { provided: usize },
    /// No match with this id in the bracket or any group.
    MatchNotFound(MatchId),
    /// A result was reported before both opponents are known.
    IncompleteMatch(MatchId),
    /// Scores must both be present and non-negative.
    InvalidScore,
    /// Single elimination needs a decisive winner; equal scores are rejected.
    UnsupportedDraw,
    /// A group still has unplayed matches; qualifiers cannot be extracted.
    GroupIncomplete(GroupId),
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Participant not found in the registry.
    ParticipantNotFound(ParticipantId),
    /// A participant with this name already exists (names are unique, case-insensitive).
    DuplicateParticipantName,
    /// Group stage needs at least one group and at least 2 members per group.
    InvalidGroupCount { requested: usize, participants: usize },
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidParticipantCount { provided } => {
                write!(f, "Need at least 2 participants to build a bracket (got {})", provided)
            }
            TournamentError::MatchNotFound(id) => write!(f, "Match {} not found", id),
            TournamentError::IncompleteMatch(id) => {
                write!(f, "Match {} is still missing an opponent", id)
            }
            TournamentError::InvalidScore => write!(f, "Scores must be non-negative integers"),
            TournamentError::UnsupportedDraw => {
                write!(f, "Draws are not allowed in elimination play; resubmit with a tiebreak score")
            }
            TournamentError::GroupIncomplete(id) => {
                write!(f, "Group {} has unfinished matches", id)
            }
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::ParticipantNotFound(_) => write!(f, "Participant not found"),
            TournamentError::DuplicateParticipantName => {
                write!(f, "A participant with this name already exists")
            }
            TournamentError::InvalidGroupCount { requested, participants } => {
                write!(
                    f,
                    "Cannot split {} participants into {} groups of at least 2",
                    participants, requested
                )
            }
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// Registering participants; nothing scheduled yet.
    #[default]
    Setup,
    /// Round-robin groups in progress.
    GroupStage,
    /// Elimination bracket in progress (either knockout-only, or the playoff
    /// built from group qualifiers).
    Knockout,
    /// Final played; champion available.
    Completed,
}

/// Full tournament state: participants, groups, bracket, and phase.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// Registered participants, in registration order. The list is fixed once
    /// the tournament leaves Setup.
    pub participants: Vec<Participant>,
    pub groups: Vec<Group>,
    /// The elimination stage (knockout-only, or playoff after group play).
    pub bracket: Option<Bracket>,
    /// Qualifiers produced by promotion, kept so promotion stays idempotent.
    pub qualifiers: Option<Vec<Participant>>,
    pub scoring: ScoringRules,
    pub state: TournamentState,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Create a new tournament in Setup state with no participants.
    pub fn new(name: impl Into<String>, scoring: ScoringRules) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            participants: Vec::new(),
            groups: Vec::new(),
            bracket: None,
            qualifiers: None,
            scoring,
            state: TournamentState::Setup,
            created_at: Utc::now(),
        }
    }

    /// Create a tournament with initial participants. Still in Setup until started.
    pub fn with_participants(
        name: impl Into<String>,
        participants: Vec<Participant>,
        scoring: ScoringRules,
    ) -> Self {
        Self {
            participants,
            ..Self::new(name, scoring)
        }
    }

    pub fn get_participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    /// Add a participant (only valid in Setup). Names must be unique (case-insensitive).
    pub fn add_participant(&mut self, name: impl Into<String>) -> Result<(), TournamentError> {
        self.add_participant_with_avatar(name, None)
    }

    /// Add a participant with an optional avatar reference (only valid in Setup).
    pub fn add_participant_with_avatar(
        &mut self,
        name: impl Into<String>,
        avatar: Option<String>,
    ) -> Result<(), TournamentError> {
        if self.state != TournamentState::Setup {
            return Err(TournamentError::InvalidState);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::InvalidState);
        }
        let is_duplicate = self
            .participants
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicateParticipantName);
        }
        let participant = match avatar {
            Some(avatar) => Participant::with_avatar(name_trimmed, avatar),
            None => Participant::new(name_trimmed),
        };
        self.participants.push(participant);
        Ok(())
    }

    /// Remove a participant by id (only valid in Setup).
    pub fn remove_participant(&mut self, participant_id: ParticipantId) -> Result<(), TournamentError> {
        if self.state != TournamentState::Setup {
            return Err(TournamentError::InvalidState);
        }
        let idx = self
            .participants
            .iter()
            .position(|p| p.id == participant_id)
            .ok_or(TournamentError::ParticipantNotFound(participant_id))?;
        self.participants.remove(idx);
        Ok(())
    }

    /// Winner of the elimination stage; None until the final is completed.
    pub fn champion(&self) -> Option<ParticipantId> {
        self.bracket.as_ref().and_then(|b| b.champion())
    }
}
