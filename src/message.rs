use crate::error::{QueueError, Result};

/// Largest payload, in bytes, the queue accepts.
pub const MAX_PAYLOAD: usize = 1024;

/// Everything about a message except its payload. Only `priority` affects ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageMeta {
    pub id: u32,
    pub command: u8,
    /// 0 is served first, 255 last.
    pub priority: u8,
    pub error_code: u8,
}

/// An owned message record. The payload is always a private copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    meta: MessageMeta,
    payload: Vec<u8>,
}

impl Message {
    pub fn new(meta: MessageMeta, payload: &[u8]) -> Result<Message> {
        if payload.len() > MAX_PAYLOAD {
            log::warn!(
                "Rejecting message {}: payload of {} bytes is over the limit",
                meta.id,
                payload.len()
            );
            return Err(QueueError::PayloadTooLarge {
                len: payload.len(),
                max: MAX_PAYLOAD,
            });
        }

        Ok(Message {
            meta,
            payload: payload.to_vec(),
        })
    }

    pub fn meta(&self) -> MessageMeta {
        self.meta
    }

    pub fn id(&self) -> u32 {
        self.meta.id
    }

    pub fn command(&self) -> u8 {
        self.meta.command
    }

    pub fn priority(&self) -> u8 {
        self.meta.priority
    }

    pub fn error_code(&self) -> u8 {
        self.meta.error_code
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn payload_size(&self) -> usize {
        self.payload.len()
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(priority: u8) -> MessageMeta {
        MessageMeta {
            id: 7,
            command: 1,
            priority,
            error_code: 0,
        }
    }

    #[test]
    fn it_copies_the_payload() {
        let mut buf = b"hello".to_vec();
        let msg = Message::new(meta(3), &buf).unwrap();
        buf[0] = b'j';

        assert_eq!(msg.payload(), b"hello");
        assert_eq!(msg.payload_size(), 5);
        assert_eq!(msg.priority(), 3);
        assert_eq!(msg.id(), 7);
    }

    #[test]
    fn it_accepts_empty_and_max_payloads() {
        assert_eq!(Message::new(meta(0), &[]).unwrap().payload_size(), 0);

        let full = vec![0xAB; MAX_PAYLOAD];
        let msg = Message::new(meta(0), &full).unwrap();
        assert_eq!(msg.into_payload(), full);
    }

    #[test]
    fn it_rejects_oversized_payloads() {
        let err = Message::new(meta(0), &vec![0; MAX_PAYLOAD + 1]).unwrap_err();
        assert_eq!(
            err,
            QueueError::PayloadTooLarge {
                len: MAX_PAYLOAD + 1,
                max: MAX_PAYLOAD
            }
        );
    }
}
