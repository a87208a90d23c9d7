mod application;
mod context;
mod route;
mod router;

use kv_log_macro as log;

use std::future::Future;

use tokio::{
    io::{AsyncRead, AsyncWrite},
    net::{TcpListener, ToSocketAddrs},
    task,
};

use portal_protocol::{
    messages::{ClientToServerMessage, ErrorCode},
    network::{receive_client_message, send_message_to_client},
};

pub use application::{Application, BoxedRoute};
pub use context::Context;
pub use portal_protocol::{
    action::Action,
    document::Document,
    messages::ServerToClientMessage,
    node::{
        ButtonProps, CheckboxProps, ContainerProps, InputProps, Node, SelectOption, SelectProps,
        TextProps,
    },
    storage::{StateMap, StateValue, StorageScope},
    stylesheet::{
        Alignment, Colour, Direction, FontWeight, Length, Size, StyleRule, Stylesheet,
        StylesheetClass,
    },
    ServerTlsConfig,
};
pub use route::{Render, Route};
pub use router::{Params, RoutePattern};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Accepts TLS connections on `address` and serves each on its own task.
pub async fn run(
    application: impl Application,
    address: impl ToSocketAddrs,
    tls_config: ServerTlsConfig,
) -> Result<()> {
    let acceptor = tls_config.build_acceptor()?;
    let listener = TcpListener::bind(address).await?;

    log::info!("Listening", {
        address: format!("{}", listener.local_addr()?)
    });

    loop {
        let (stream, peer) = listener.accept().await?;
        let acceptor = acceptor.clone();

        spawn_and_log_error(async move {
            log::info!("New connection", { address: peer.to_string() });
            let mut stream = acceptor.accept(stream).await?;
            handle_connection(application, &mut stream).await
        });
    }
}

/// Serves one client until it closes the stream.
///
/// Requests are handled strictly in order. A missing route or a failing action
/// is reported to the client as an `Error` message and the connection stays
/// open; transport and framing errors end it.
pub async fn handle_connection<S>(application: impl Application, stream: &mut S) -> Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin + Send,
{
    while let Some(request) = receive_client_message(stream).await? {
        match request {
            ClientToServerMessage::Action {
                path,
                action,
                storage,
            } => {
                log::info!("Received action", { path: path, action: action.name });

                let Some((route, params)) = application.route(&path) else {
                    route_not_found(stream, &path).await?;
                    continue;
                };

                let (result, redirected, storage) = {
                    let mut context = Context::new(storage, &mut *stream);
                    let result = route.action(&action, &params, &mut context).await;
                    (result, context.redirected_to().is_some(), context.storage)
                };

                match result {
                    Err(err) => {
                        log::error!("Action failed", {
                            path: path,
                            action: action.name,
                            error: err.to_string()
                        });
                        send_message_to_client(
                            stream,
                            ServerToClientMessage::Error {
                                code: ErrorCode::InternalServerError,
                                message: err.to_string(),
                            },
                        )
                        .await?;
                    }
                    Ok(()) if !redirected => {
                        let render = route.render(&params, &storage).await;
                        send_render(stream, render).await?;
                    }
                    Ok(()) => {}
                }
            }

            ClientToServerMessage::Load { path, storage } => {
                log::info!("Received load", { path: path });

                match application.route(&path) {
                    Some((route, params)) => {
                        let render = route.render(&params, &storage).await;
                        send_render(stream, render).await?;
                    }
                    None => route_not_found(stream, &path).await?,
                }
            }
        }
    }

    Ok(())
}

async fn send_render<S>(stream: &mut S, render: Render) -> Result<()>
where
    S: AsyncWrite + Unpin + Send,
{
    let message = match render {
        Render::Document(document) => ServerToClientMessage::Render { document },
        Render::RedirectTo(path) => ServerToClientMessage::RedirectTo { path },
    };
    send_message_to_client(stream, message).await?;
    Ok(())
}

async fn route_not_found<S>(stream: &mut S, path: &str) -> Result<()>
where
    S: AsyncWrite + Unpin + Send,
{
    log::error!("No route found", { path: path });
    send_message_to_client(
        stream,
        ServerToClientMessage::Error {
            code: ErrorCode::NotFound,
            message: format!("No route found for {}", path),
        },
    )
    .await?;
    Ok(())
}

fn spawn_and_log_error<F>(fut: F) -> task::JoinHandle<()>
where
    F: Future<Output = Result<()>> + Send + 'static,
{
    task::spawn(async move {
        if let Err(e) = fut.await {
            log::error!("Connection error {}", e);
        }
    })
}
