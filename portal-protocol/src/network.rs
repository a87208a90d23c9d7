use serde::{de::DeserializeOwned, Serialize};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::messages::{ClientToServerMessage, ServerToClientMessage};

use kv_log_macro as log;

/// Frames larger than this are rejected before any payload is read.
pub const MAX_MESSAGE_SIZE: u32 = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("Message size {size} bytes exceeds maximum {max} bytes")]
    MessageTooLarge { size: u32, max: u32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_cbor::Error> for NetworkError {
    fn from(err: serde_cbor::Error) -> Self {
        NetworkError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NetworkError>;

fn validate_message_size(length: u32) -> Result<()> {
    if length > MAX_MESSAGE_SIZE {
        log::error!("Message size {} exceeds maximum {}", length, MAX_MESSAGE_SIZE);
        return Err(NetworkError::MessageTooLarge {
            size: length,
            max: MAX_MESSAGE_SIZE,
        });
    }
    Ok(())
}

async fn send_message<W, T>(stream: &mut W, message: &T) -> Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
    T: Serialize,
{
    let bytes = serde_cbor::to_vec(message)?;
    let length = u32::try_from(bytes.len()).map_err(|_| NetworkError::MessageTooLarge {
        size: u32::MAX,
        max: MAX_MESSAGE_SIZE,
    })?;
    validate_message_size(length)?;

    stream.write_all(&length.to_le_bytes()).await?;
    stream.write_all(&bytes).await?;
    stream.flush().await?;

    Ok(())
}

/// Reads one frame. A clean end of stream or a zero-length frame both mean
/// the peer has nothing more to say.
async fn receive_message<R, T>(stream: &mut R) -> Result<Option<T>>
where
    R: AsyncRead + Unpin + ?Sized,
    T: DeserializeOwned,
{
    let mut length_bytes = [0u8; 4];
    match stream.read_exact(&mut length_bytes).await {
        Ok(_) => {}
        Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(err) => return Err(err.into()),
    }

    let length = u32::from_le_bytes(length_bytes);
    log::trace!("Incoming message", { length: length });

    if length == 0 {
        log::debug!("Received empty message");
        return Ok(None);
    }

    validate_message_size(length)?;

    let mut bytes = vec![0u8; length as usize];
    stream.read_exact(&mut bytes).await?;

    Ok(Some(serde_cbor::from_slice(&bytes)?))
}

pub async fn send_message_to_server<W>(stream: &mut W, request: ClientToServerMessage) -> Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    log::debug!("Sending request", { request: request.summary() });
    send_message(stream, &request).await
}

pub async fn send_message_to_client<W>(
    stream: &mut W,
    response: ServerToClientMessage,
) -> Result<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    log::debug!("Sending response", { response: response.summary() });
    send_message(stream, &response).await
}

pub async fn receive_server_message<R>(stream: &mut R) -> Result<Option<ServerToClientMessage>>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let response = receive_message::<_, ServerToClientMessage>(stream).await?;
    if let Some(response) = &response {
        log::debug!("Received response", { response: response.summary() });
    }
    Ok(response)
}

pub async fn receive_client_message<R>(stream: &mut R) -> Result<Option<ClientToServerMessage>>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let request = receive_message::<_, ClientToServerMessage>(stream).await?;
    if let Some(request) = &request {
        log::debug!("Received request", { request: request.summary() });
    }
    Ok(request)
}
