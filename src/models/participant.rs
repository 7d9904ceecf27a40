//! Participant data structure.

use crate::models::group::GroupId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a participant (used in matches and lookups).
pub type ParticipantId = Uuid;

/// A tournament participant. Immutable once placed into a bracket slot.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Optional avatar reference (URL or storage key); display-only.
    pub avatar: Option<String>,
    /// Set when this participant qualified out of a group into a playoff.
    pub origin_group: Option<GroupId>,
}

impl Participant {
    /// Create a new participant with the given name. No avatar, no origin group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            avatar: None,
            origin_group: None,
        }
    }

    pub fn with_avatar(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            avatar: Some(avatar.into()),
            ..Self::new(name)
        }
    }

    /// Clone of this participant tagged with the group it qualified from.
    pub fn qualified_from(&self, group: GroupId) -> Self {
        Self {
            origin_group: Some(group),
            ..self.clone()
        }
    }
}
