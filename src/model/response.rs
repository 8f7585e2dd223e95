use crate::model::draw::Draw;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body returned by the quantum random number server.
///
/// Only `success` is typed up front; `length` and `data` are checked after it.
#[derive(Debug, Deserialize)]
pub struct QrngResponse {
    pub success: bool,
    #[serde(default)]
    pub length: Option<Value>,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: &str) -> Self {
        StatusResponse {
            status: "Success".to_string(),
            message: message.to_string(),
        }
    }

    pub fn failed(message: &str) -> Self {
        StatusResponse {
            status: "Failed".to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DrawResponse {
    pub status: String,
    pub numbers: Draw,
    pub display: String,
}

#[derive(Debug, Serialize)]
pub struct DisplayResponse {
    pub status: String,
    pub phase: String,
    pub display: String,
    pub numbers: Option<Draw>,
}
