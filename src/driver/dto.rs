use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct EnqueueRequest {
    pub id: u32,
    pub command: u8,
    pub priority: u8,
    pub error_code: u8,
    pub data: String,
}

#[derive(Serialize, Deserialize)]
pub struct EnqueueResponse {
    pub id: u32,
    pub queued: usize,
}

#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub id: u32,
    pub command: u8,
    pub priority: u8,
    pub error_code: u8,
    pub data: String,
}
