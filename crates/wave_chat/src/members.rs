use futures::Stream;

use crate::{
    ChatClient, Page, Result,
    models::{Member, MemberUpdate},
    params::ListParams,
    stream,
    wire::{self, WireMember},
};

/// Member resource operations, bound to one conversation.
///
/// There is no delete: a member leaving is a state transition via
/// [`Self::update`], not a removal.
pub struct MembersHandler {
    pub(crate) client: ChatClient,
    pub(crate) conversation_id: String,
}

impl MembersHandler {
    fn path(&self) -> String {
        format!("/v1/conversations/{}/members", self.conversation_id)
    }

    /// Adds a member (or a knocking pre-member) to the conversation.
    /// `invited_by` is sent under its create-side wire name
    /// `member_id_inviting`; server-owned fields are stripped.
    pub async fn create(&self, member: &Member) -> Result<Member> {
        let wire: WireMember = self
            .client
            .post_json(&self.path(), &wire::member_to_wire(member))
            .await?;

        Ok(wire::member_from_wire(wire))
    }

    pub async fn get(&self, member_id: &str) -> Result<Member> {
        let wire: WireMember = self
            .client
            .get_json(&format!("{}/{member_id}", self.path()), &[])
            .await?;

        Ok(wire::member_from_wire(wire))
    }

    /// The calling user's own membership: [`Self::get`] with the fixed
    /// identifier `me`, nothing more.
    pub async fn me(&self) -> Result<Member> {
        self.get("me").await
    }

    /// Transitions the member to a new state. Which transitions are legal
    /// is the server's contract, not this client's.
    pub async fn update(&self, member_id: &str, update: &MemberUpdate) -> Result<Member> {
        let wire: WireMember = self
            .client
            .patch_json(
                &format!("{}/{member_id}", self.path()),
                &wire::member_update_to_wire(update),
            )
            .await?;

        Ok(wire::member_from_wire(wire))
    }

    /// Fetches one page of members; exactly one round trip.
    pub async fn page(&self, params: &ListParams) -> Result<Page<Member>> {
        self.client.fetch_page(&self.path(), &params.to_query()).await
    }

    /// Lazily enumerates all members of the conversation, following `next`
    /// cursors until the server stops returning them.
    #[must_use]
    pub fn all(&self, params: ListParams) -> impl Stream<Item = Result<Member>> + use<> {
        stream::paginate(self.client.clone(), self.path(), params)
    }
}
