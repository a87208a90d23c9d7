use async_trait::async_trait;
use portal_protocol::storage::StateMap;

use crate::{Action, Context, Document, Params, Result};

pub enum Render {
    Document(Document),
    RedirectTo(String),
}

#[async_trait]
pub trait Route: Send + Sync {
    /// Path pattern this route answers, e.g. `/admin/:section`.
    fn path(&self) -> &'static str;

    async fn action<'a>(
        &self,
        action: &Action,
        params: &Params,
        context: &mut Context<'a>,
    ) -> Result<()>;

    async fn render(&self, params: &Params, storage: &StateMap) -> Render;
}
