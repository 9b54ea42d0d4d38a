//! Wire representation and transcoding.
//!
//! The structs here are the statically declared field mapping between the
//! JSON exchanged with the server and the domain types in
//! [`crate::models`]: one struct per resource and direction. Request
//! structs deliberately have no fields for server-owned data (id,
//! sequence number, timestamps, conversation state), so those can never
//! leak into a create/update body.
//!
//! `custom_data` is the one documented exception to the mapping: it is a
//! caller-defined map moved between wire and domain unchanged, keys and
//! all.
//!
//! Transcoding is pure and infallible: unknown wire fields are dropped,
//! absent optional fields stay absent, and no function here performs I/O.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use crate::{
    models::{
        Channel, Conversation, ConversationProperties, ConversationState, ConversationTimestamps,
        Initiator, Media, Member, MemberState, MemberTimestamps, MemberUpdate, MemberUser, Reason,
    },
    page::Collection,
};

#[derive(Debug, Deserialize)]
pub(crate) struct WireConversation {
    id: Option<String>,
    name: Option<String>,
    display_name: Option<String>,
    image_url: Option<String>,
    state: Option<ConversationState>,
    sequence_number: Option<u64>,
    properties: Option<WireConversationProperties>,
    timestamp: Option<WireConversationTimestamps>,
}

#[derive(Debug, Deserialize)]
struct WireConversationProperties {
    ttl: Option<u64>,
    #[serde(rename = "type")]
    kind: Option<String>,
    custom_sort_key: Option<String>,
    custom_data: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct WireConversationTimestamps {
    created: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WireConversationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<WireConversationPropertiesRequest>,
}

#[derive(Debug, Serialize)]
struct WireConversationPropertiesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<u64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_sort_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_data: Option<Map<String, Value>>,
}

pub(crate) fn conversation_from_wire(wire: WireConversation) -> Conversation {
    Conversation {
        id: wire.id,
        name: wire.name,
        display_name: wire.display_name,
        image_url: wire.image_url.and_then(|url| Url::parse(&url).ok()),
        state: wire.state,
        sequence_number: wire.sequence_number,
        properties: wire.properties.map(|properties| ConversationProperties {
            ttl: properties.ttl,
            kind: properties.kind,
            custom_sort_key: properties.custom_sort_key,
            custom_data: properties.custom_data,
        }),
        timestamp: wire.timestamp.map(|timestamp| ConversationTimestamps {
            created: timestamp.created,
            updated: timestamp.updated,
        }),
    }
}

pub(crate) fn conversation_to_wire(conversation: &Conversation) -> WireConversationRequest {
    WireConversationRequest {
        name: conversation.name.clone(),
        display_name: conversation.display_name.clone(),
        image_url: conversation.image_url.as_ref().map(Url::to_string),
        properties: conversation
            .properties
            .as_ref()
            .map(|properties| WireConversationPropertiesRequest {
                ttl: properties.ttl,
                kind: properties.kind.clone(),
                custom_sort_key: properties.custom_sort_key.clone(),
                custom_data: properties.custom_data.clone(),
            }),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireMember {
    id: Option<String>,
    state: Option<MemberState>,
    #[serde(rename = "_embedded")]
    embedded: Option<WireMemberEmbedded>,
    channel: Option<Channel>,
    media: Option<Media>,
    knocking_id: Option<String>,
    invited_by: Option<String>,
    initiator: Option<Initiator>,
    timestamp: Option<WireMemberTimestamps>,
}

#[derive(Debug, Deserialize)]
struct WireMemberEmbedded {
    user: Option<MemberUser>,
}

#[derive(Debug, Deserialize)]
struct WireMemberTimestamps {
    invited: Option<DateTime<Utc>>,
    joined: Option<DateTime<Utc>>,
    left: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WireMemberRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<MemberUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<MemberState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<Channel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<Media>,
    #[serde(skip_serializing_if = "Option::is_none")]
    knocking_id: Option<String>,
    /// Create-side wire name for the relationship the read schema reports
    /// as `invited_by`.
    #[serde(skip_serializing_if = "Option::is_none")]
    member_id_inviting: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WireMemberUpdateRequest {
    state: MemberState,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<Reason>,
}

/// Flattens the embedded user sub-object into the top-level `user` field.
pub(crate) fn member_from_wire(wire: WireMember) -> Member {
    Member {
        id: wire.id,
        state: wire.state,
        user: wire.embedded.and_then(|embedded| embedded.user),
        channel: wire.channel,
        media: wire.media,
        knocking_id: wire.knocking_id,
        invited_by: wire.invited_by,
        initiator: wire.initiator,
        timestamp: wire.timestamp.map(|timestamp| MemberTimestamps {
            invited: timestamp.invited,
            joined: timestamp.joined,
            left: timestamp.left,
        }),
    }
}

pub(crate) fn member_to_wire(member: &Member) -> WireMemberRequest {
    WireMemberRequest {
        user: member.user.clone(),
        state: member.state,
        channel: member.channel.clone(),
        media: member.media.clone(),
        knocking_id: member.knocking_id.clone(),
        member_id_inviting: member.invited_by.clone(),
    }
}

pub(crate) fn member_update_to_wire(update: &MemberUpdate) -> WireMemberUpdateRequest {
    WireMemberUpdateRequest {
        state: update.state,
        reason: update.reason.clone(),
    }
}

impl Collection for Conversation {
    const EMBEDDED: &'static str = "conversations";

    type Wire = WireConversation;

    fn from_wire(wire: Self::Wire) -> Self {
        conversation_from_wire(wire)
    }
}

impl Collection for Member {
    const EMBEDDED: &'static str = "members";

    type Wire = WireMember;

    fn from_wire(wire: Self::Wire) -> Self {
        member_from_wire(wire)
    }
}
