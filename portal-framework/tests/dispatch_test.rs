//! Request dispatch tests
//!
//! These drive `portal::handle_connection` over the real wire codec:
//! - Load renders or redirects, with path params
//! - Unknown paths answer with NotFound
//! - Actions that store are followed by a re-render that sees the new state
//! - Actions that redirect are not followed by a render
//! - Failing actions answer with InternalServerError and keep the connection

mod common;

use async_trait::async_trait;
use common::{
    assert_error, assert_redirect, assert_render, connect, receive_messages, send_action,
    send_load,
};
use maplit::hashmap;
use portal::{
    Action, Application, Context, Document, Node, Params, Render, Route, StateMap, StateValue,
    StorageScope, TextProps,
};
use portal_protocol::messages::{ErrorCode, ServerToClientMessage};

#[derive(Clone, Copy)]
struct TestApp;

impl Application for TestApp {
    fn routes(&self) -> Vec<Box<dyn Route>> {
        vec![
            Box::new(GreetingRoute),
            Box::new(SectionRoute),
            Box::new(ToggleRoute),
            Box::new(ForwardRoute),
            Box::new(FailingRoute),
        ]
    }
}

fn text(text: impl ToString) -> Node {
    Node::Text(TextProps {
        text: text.to_string(),
        classes: vec![],
    })
}

fn document(node: Node) -> Render {
    Render::Document(Document {
        node,
        stylesheet: Default::default(),
    })
}

struct GreetingRoute;

#[async_trait]
impl Route for GreetingRoute {
    fn path(&self) -> &'static str {
        "/"
    }

    async fn action<'a>(
        &self,
        _action: &Action,
        _params: &Params,
        _context: &mut Context<'a>,
    ) -> portal::Result<()> {
        Ok(())
    }

    async fn render(&self, _params: &Params, storage: &StateMap) -> Render {
        let name = storage.get("name").map(|v| v.string()).unwrap_or("guest");
        document(text(format!("Hello, {}", name)))
    }
}

struct SectionRoute;

#[async_trait]
impl Route for SectionRoute {
    fn path(&self) -> &'static str {
        "/admin/:section"
    }

    async fn action<'a>(
        &self,
        _action: &Action,
        _params: &Params,
        _context: &mut Context<'a>,
    ) -> portal::Result<()> {
        Ok(())
    }

    async fn render(&self, params: &Params, _storage: &StateMap) -> Render {
        match params.get("section").map(String::as_str) {
            Some("centers") => document(text("Centers")),
            _ => Render::RedirectTo("/".to_string()),
        }
    }
}

struct ToggleRoute;

#[async_trait]
impl Route for ToggleRoute {
    fn path(&self) -> &'static str {
        "/toggle"
    }

    async fn action<'a>(
        &self,
        action: &Action,
        _params: &Params,
        context: &mut Context<'a>,
    ) -> portal::Result<()> {
        if action.name == "flip" {
            let shown = context.storage.get("shown").map(|v| v.boolean()).unwrap_or(false);
            context.store(StorageScope::Local, "shown", !shown).await?;
        }
        Ok(())
    }

    async fn render(&self, _params: &Params, storage: &StateMap) -> Render {
        let shown = storage.get("shown").map(|v| v.boolean()).unwrap_or(false);
        document(text(if shown { "shown" } else { "hidden" }))
    }
}

struct ForwardRoute;

#[async_trait]
impl Route for ForwardRoute {
    fn path(&self) -> &'static str {
        "/forward"
    }

    async fn action<'a>(
        &self,
        action: &Action,
        _params: &Params,
        context: &mut Context<'a>,
    ) -> portal::Result<()> {
        if let Some(target) = action.arg("to") {
            context.redirect(target).await?;
        }
        Ok(())
    }

    async fn render(&self, _params: &Params, _storage: &StateMap) -> Render {
        document(text("forward"))
    }
}

struct FailingRoute;

#[async_trait]
impl Route for FailingRoute {
    fn path(&self) -> &'static str {
        "/failing"
    }

    async fn action<'a>(
        &self,
        _action: &Action,
        _params: &Params,
        _context: &mut Context<'a>,
    ) -> portal::Result<()> {
        Err("storage unavailable".into())
    }

    async fn render(&self, _params: &Params, _storage: &StateMap) -> Render {
        document(text("failing"))
    }
}

#[tokio::test]
async fn test_load_renders_with_client_storage() {
    let mut client = connect(TestApp);

    let storage = hashmap! { "name".to_string() => StateValue::from("Nimal") };
    send_load(&mut client, "/", storage).await;

    assert_render(&receive_messages(&mut client, 1).await, text("Hello, Nimal"));
}

#[tokio::test]
async fn test_load_extracts_path_params() {
    let mut client = connect(TestApp);

    send_load(&mut client, "/admin/centers", StateMap::new()).await;
    assert_render(&receive_messages(&mut client, 1).await, text("Centers"));

    send_load(&mut client, "/admin/unknown", StateMap::new()).await;
    assert_redirect(&receive_messages(&mut client, 1).await, "/");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let mut client = connect(TestApp);

    send_load(&mut client, "/nowhere", StateMap::new()).await;
    assert_error(
        &receive_messages(&mut client, 1).await,
        ErrorCode::NotFound,
        "/nowhere",
    );

    send_action(
        &mut client,
        "/nowhere",
        Action::named("anything", vec![]),
        StateMap::new(),
    )
    .await;
    assert_error(
        &receive_messages(&mut client, 1).await,
        ErrorCode::NotFound,
        "/nowhere",
    );
}

#[tokio::test]
async fn test_store_is_followed_by_render_of_updated_state() {
    let mut client = connect(TestApp);

    send_action(
        &mut client,
        "/toggle",
        Action::named("flip", vec![]),
        StateMap::new(),
    )
    .await;

    let messages = receive_messages(&mut client, 2).await;
    assert_eq!(
        messages[0],
        ServerToClientMessage::Store {
            scope: StorageScope::Local,
            key: "shown".to_string(),
            value: StateValue::Boolean(true),
        }
    );
    assert_render(&messages[1..], text("shown"));
}

#[tokio::test]
async fn test_redirect_is_not_followed_by_render() {
    let mut client = connect(TestApp);

    let action = Action::new(
        "go",
        hashmap! { "to".to_string() => "/admin/centers".to_string() },
        vec![],
    );
    send_action(&mut client, "/forward", action, StateMap::new()).await;

    assert_redirect(&receive_messages(&mut client, 1).await, "/admin/centers");
}

#[tokio::test]
async fn test_failing_action_reports_error_and_keeps_connection() {
    let mut client = connect(TestApp);

    send_action(
        &mut client,
        "/failing",
        Action::named("explode", vec![]),
        StateMap::new(),
    )
    .await;
    assert_error(
        &receive_messages(&mut client, 1).await,
        ErrorCode::InternalServerError,
        "storage unavailable",
    );

    send_load(&mut client, "/", StateMap::new()).await;
    assert_render(&receive_messages(&mut client, 1).await, text("Hello, guest"));
}

#[tokio::test]
async fn test_requests_are_answered_in_order() {
    let mut client = connect(TestApp);

    send_load(&mut client, "/", StateMap::new()).await;
    send_load(&mut client, "/admin/centers", StateMap::new()).await;

    let messages = receive_messages(&mut client, 2).await;
    assert_render(&messages[..1], text("Hello, guest"));
    assert_render(&messages[1..], text("Centers"));
}
