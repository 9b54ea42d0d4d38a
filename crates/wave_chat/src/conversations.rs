use futures::Stream;

use crate::{
    ChatClient, Page, Result,
    models::Conversation,
    params::ListParams,
    stream,
    wire::{self, WireConversation},
};

const CONVERSATIONS: &str = "/v1/conversations";

/// Conversation resource operations.
pub struct ConversationsHandler {
    pub(crate) client: ChatClient,
}

impl ConversationsHandler {
    /// Creates a conversation. Server-owned fields on `conversation` (id,
    /// state, sequence number, timestamps) are stripped from the request.
    pub async fn create(&self, conversation: &Conversation) -> Result<Conversation> {
        let wire: WireConversation = self
            .client
            .post_json(CONVERSATIONS, &wire::conversation_to_wire(conversation))
            .await?;

        Ok(wire::conversation_from_wire(wire))
    }

    pub async fn get(&self, id: &str) -> Result<Conversation> {
        let wire: WireConversation = self
            .client
            .get_json(&format!("{CONVERSATIONS}/{id}"), &[])
            .await?;

        Ok(wire::conversation_from_wire(wire))
    }

    /// Replaces the caller-controlled fields of a conversation, with the
    /// same server-owned stripping as [`Self::create`].
    pub async fn update(&self, id: &str, conversation: &Conversation) -> Result<Conversation> {
        let wire: WireConversation = self
            .client
            .put_json(
                &format!("{CONVERSATIONS}/{id}"),
                &wire::conversation_to_wire(conversation),
            )
            .await?;

        Ok(wire::conversation_from_wire(wire))
    }

    /// Deletes a conversation. Resolves with no value on an empty success
    /// response.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("{CONVERSATIONS}/{id}")).await
    }

    /// Fetches one page of conversations; exactly one round trip.
    pub async fn page(&self, params: &ListParams) -> Result<Page<Conversation>> {
        self.client
            .fetch_page(CONVERSATIONS, &params.to_query())
            .await
    }

    /// Lazily enumerates all conversations matching `params`, following
    /// `next` cursors until the server stops returning them. See
    /// [`crate::stream::paginate`] for the pacing and cancellation
    /// contract.
    #[must_use]
    pub fn all(&self, params: ListParams) -> impl Stream<Item = Result<Conversation>> + use<> {
        stream::paginate(self.client.clone(), CONVERSATIONS.to_owned(), params)
    }
}
