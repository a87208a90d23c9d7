use portal::{Action, Context, Params, Render, Result, Route, StateMap};

use kv_log_macro as log;

use super::login::LOGIN_PATH;

pub struct IndexRoute;

#[async_trait::async_trait]
impl Route for IndexRoute {
    fn path(&self) -> &'static str {
        "/"
    }

    async fn action<'a>(
        &self,
        action: &Action,
        _params: &Params,
        _context: &mut Context<'a>,
    ) -> Result<()> {
        log::error!("Unknown action: {:?}", action);
        Ok(())
    }

    async fn render(&self, _params: &Params, _storage: &StateMap) -> Render {
        Render::RedirectTo(LOGIN_PATH.to_string())
    }
}
