//! Common test utilities shared across integration tests

use std::time::Duration;

use portal::{Action, Application, Node, StateMap};
use portal_protocol::messages::{ClientToServerMessage, ErrorCode, ServerToClientMessage};
use portal_protocol::network::{receive_server_message, send_message_to_server};
use tokio::io::DuplexStream;

/// Serve `app` on one end of an in-memory stream and hand back the other end.
pub fn connect(app: impl Application) -> DuplexStream {
    let (client, mut server) = tokio::io::duplex(256 * 1024);
    tokio::spawn(async move {
        let _ = portal::handle_connection(app, &mut server).await;
    });
    client
}

pub async fn send_load(client: &mut DuplexStream, path: &str, storage: StateMap) {
    send_message_to_server(
        client,
        ClientToServerMessage::Load {
            path: path.to_string(),
            storage,
        },
    )
    .await
    .expect("Failed to send load");
}

pub async fn send_action(
    client: &mut DuplexStream,
    path: &str,
    action: Action,
    storage: StateMap,
) {
    send_message_to_server(
        client,
        ClientToServerMessage::Action {
            path: path.to_string(),
            action,
            storage,
        },
    )
    .await
    .expect("Failed to send action");
}

/// Receive exactly `count` messages, then check nothing else arrives soon after.
pub async fn receive_messages(
    client: &mut DuplexStream,
    count: usize,
) -> Vec<ServerToClientMessage> {
    let mut messages = Vec::with_capacity(count);
    for _ in 0..count {
        let message = tokio::time::timeout(Duration::from_secs(5), receive_server_message(client))
            .await
            .expect("Timed out waiting for message")
            .expect("Failed to receive message")
            .expect("Connection closed");
        messages.push(message);
    }

    let extra =
        tokio::time::timeout(Duration::from_millis(50), receive_server_message(client)).await;
    assert!(extra.is_err(), "Unexpected extra message: {:?}", extra);

    messages
}

/// Assert that messages contain a single Render with expected node
#[allow(dead_code)]
pub fn assert_render(messages: &[ServerToClientMessage], expected_node: Node) {
    assert_eq!(messages.len(), 1);
    let ServerToClientMessage::Render { document } = &messages[0] else {
        panic!("Expected Render message, got: {:?}", messages[0]);
    };
    assert_eq!(document.node, expected_node);
}

/// Assert that messages contain a single Error with expected code
#[allow(dead_code)]
pub fn assert_error(
    messages: &[ServerToClientMessage],
    expected_code: ErrorCode,
    contains_text: &str,
) {
    assert_eq!(messages.len(), 1);
    let ServerToClientMessage::Error { code, message } = &messages[0] else {
        panic!("Expected Error message, got: {:?}", messages[0]);
    };
    assert_eq!(*code, expected_code);
    assert!(message.contains(contains_text));
}

/// Assert that messages contain a single RedirectTo with expected path
#[allow(dead_code)]
pub fn assert_redirect(messages: &[ServerToClientMessage], expected_path: &str) {
    assert_eq!(messages.len(), 1);
    let ServerToClientMessage::RedirectTo { path } = &messages[0] else {
        panic!("Expected RedirectTo message, got: {:?}", messages[0]);
    };
    assert_eq!(path, expected_path);
}
