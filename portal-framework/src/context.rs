use portal_protocol::storage::{StateMap, StateValue};
use tokio::io::AsyncWrite;

use crate::{send_message_to_client, Result, ServerToClientMessage, StorageScope};

/// Handle given to a route while it processes an action.
///
/// `storage` starts as the state the client sent with the action and tracks
/// every `store` made since, so a follow-up render sees the new values.
pub struct Context<'a> {
    pub storage: StateMap,

    redirected_to: Option<String>,
    stream: &'a mut (dyn AsyncWrite + Unpin + Send),
}

impl<'a> Context<'a> {
    pub fn new(storage: StateMap, stream: &'a mut (dyn AsyncWrite + Unpin + Send)) -> Self {
        Context {
            storage,
            redirected_to: None,
            stream,
        }
    }

    pub async fn store(
        &mut self,
        scope: StorageScope,
        key: impl ToString,
        value: impl Into<StateValue>,
    ) -> Result<()> {
        let key = key.to_string();
        let value = value.into();
        self.storage.insert(key.clone(), value.clone());
        send_message_to_client(
            &mut *self.stream,
            ServerToClientMessage::Store { scope, key, value },
        )
        .await?;
        Ok(())
    }

    /// Asks the client to navigate to `path`.
    pub async fn redirect(&mut self, path: impl ToString) -> Result<()> {
        let path = path.to_string();
        self.redirected_to = Some(path.clone());
        send_message_to_client(&mut *self.stream, ServerToClientMessage::RedirectTo { path })
            .await?;
        Ok(())
    }

    pub fn redirected_to(&self) -> Option<&str> {
        self.redirected_to.as_deref()
    }
}
