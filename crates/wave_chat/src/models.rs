//! Domain representation of conversations and members.
//!
//! These are the caller-facing shapes. They never expose wire envelope
//! fields (`_embedded` wrappers, `_links` blocks); see [`crate::wire`] for
//! the wire shapes and the mapping between the two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

/// A conversation between two or more users.
///
/// `id`, `state`, `sequence_number` and `timestamp` are server-owned: they
/// are populated on read and stripped from every create/update request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    pub id: Option<String>,
    pub name: Option<String>,
    pub display_name: Option<String>,
    pub image_url: Option<Url>,
    pub state: Option<ConversationState>,
    pub sequence_number: Option<u64>,
    pub properties: Option<ConversationProperties>,
    pub timestamp: Option<ConversationTimestamps>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConversationState {
    Active,
    Inactive,
    Deleted,
}

/// Caller-controlled conversation properties.
///
/// `custom_data` is an opaque caller-defined map: the client copies it
/// verbatim in both directions and never renames its keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationProperties {
    pub ttl: Option<u64>,
    pub kind: Option<String>,
    pub custom_sort_key: Option<String>,
    pub custom_data: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConversationTimestamps {
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

/// A user's membership of a conversation.
///
/// `id`, `initiator` and `timestamp` are server-owned. `invited_by` is
/// server-reported on read; on create it is sent under the wire name
/// `member_id_inviting` (the read and create schemas name the same
/// relationship differently).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Member {
    pub id: Option<String>,
    pub state: Option<MemberState>,
    pub user: Option<MemberUser>,
    pub channel: Option<Channel>,
    pub media: Option<Media>,
    pub knocking_id: Option<String>,
    pub invited_by: Option<String>,
    pub initiator: Option<Initiator>,
    pub timestamp: Option<MemberTimestamps>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MemberState {
    Invited,
    Joined,
    Left,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// The channel a member communicates over, tagged by channel type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Channel {
    App {
        #[serde(skip_serializing_if = "Option::is_none")]
        user: Option<String>,
    },
    Phone {
        #[serde(skip_serializing_if = "Option::is_none")]
        number: Option<String>,
    },
    Sip {
        #[serde(skip_serializing_if = "Option::is_none")]
        uri: Option<String>,
    },
    Websocket {
        #[serde(skip_serializing_if = "Option::is_none")]
        uri: Option<String>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Media {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_settings: Option<AudioSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earmuffed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
}

/// Who initiated a membership change, as reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Initiator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invited: Option<InitiatorInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined: Option<InitiatorInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitiatorInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_system: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MemberTimestamps {
    pub invited: Option<DateTime<Utc>>,
    pub joined: Option<DateTime<Utc>>,
    pub left: Option<DateTime<Utc>>,
}

/// A member state transition.
///
/// The client does not validate which transitions are legal; a "leave" is a
/// transition to [`MemberState::Left`], not a deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberUpdate {
    pub state: MemberState,
    pub reason: Option<Reason>,
}

impl MemberUpdate {
    #[must_use]
    pub const fn new(state: MemberState) -> Self {
        Self {
            state,
            reason: None,
        }
    }

    #[must_use]
    pub fn with_reason(mut self, reason: Reason) -> Self {
        self.reason = Some(reason);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reason {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
