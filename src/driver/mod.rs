//! Demonstration driver: runs queue operations and renders the results as JSON.

use crate::error::QueueError;
use crate::message::{Message, MAX_PAYLOAD};
use crate::queue::PriorityMessageQueue;
pub mod dto;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error("could not encode response as json: {0}")]
    Encode(#[from] serde_json::Error),
}

fn message_response(message: &Message) -> dto::MessageResponse {
    dto::MessageResponse {
        id: message.id(),
        command: message.command(),
        priority: message.priority(),
        error_code: message.error_code(),
        data: String::from_utf8_lossy(message.payload()).into_owned(),
    }
}

pub fn enqueue_handler(
    queue: &mut PriorityMessageQueue,
    req: dto::EnqueueRequest,
) -> Result<String, DriverError> {
    if let Err(e) = queue.enqueue(
        req.id,
        req.command,
        req.priority,
        req.error_code,
        req.data.as_bytes(),
    ) {
        log::error!("Error enqueueing message {}: {e}", req.id);
        return Err(e.into());
    }

    let resp = dto::EnqueueResponse {
        id: req.id,
        queued: queue.len(),
    };

    Ok(serde_json::to_string(&resp)?)
}

/// Renders the next message without removing it, or `None` when the queue is empty.
pub fn peek_handler(queue: &PriorityMessageQueue) -> Result<Option<String>, DriverError> {
    let message = match queue.peek() {
        Ok(m) => m,
        Err(QueueError::EmptyQueue) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    Ok(Some(serde_json::to_string(&message_response(message))?))
}

pub fn dequeue_handler(queue: &mut PriorityMessageQueue) -> Result<Option<String>, DriverError> {
    let mut data = [0u8; MAX_PAYLOAD];
    let (meta, written) = match queue.pop(&mut data) {
        Ok(v) => v,
        Err(QueueError::EmptyQueue) => return Ok(None),
        Err(e) => {
            log::error!("Error reading message: {e}");
            return Err(e.into());
        }
    };

    let resp = dto::MessageResponse {
        id: meta.id,
        command: meta.command,
        priority: meta.priority,
        error_code: meta.error_code,
        data: String::from_utf8_lossy(&data[..written]).into_owned(),
    };

    Ok(Some(serde_json::to_string(&resp)?))
}
