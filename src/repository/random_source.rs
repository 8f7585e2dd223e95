use crate::config::config::Config;
use crate::error::{DrawError, Result};
use crate::model::draw::CANDIDATE_COUNT;
use crate::model::response::QrngResponse;
use async_trait::async_trait;
use log::{error, info};
use reqwest::Client;
use serde_json::Value;

/// Supplier of the random keys a draw is selected from.
#[async_trait]
pub trait RandomSource: Send + Sync {
    /// Exactly 49 random bytes, or the reason none could be obtained.
    async fn fetch_keys(&self) -> Result<Vec<u8>>;
}

pub struct QrngClient {
    client: Client,
    url: String,
}

impl QrngClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.random_source_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(QrngClient {
            client,
            url: config.random_source_url.clone(),
        })
    }

    async fn call_web_api(&self) -> Result<String> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DrawError::Transport(status.to_string()));
        }

        let body = response.text().await?;
        info!("JSON response: {}", body);
        Ok(body)
    }
}

#[async_trait]
impl RandomSource for QrngClient {
    async fn fetch_keys(&self) -> Result<Vec<u8>> {
        let body = self.call_web_api().await.map_err(|e| {
            error!("Error during HTTP request to {}: {}", self.url, e);
            e
        })?;

        parse_random_numbers(&body).map_err(|e| {
            error!("Error during parsing response from Web API: {}", e);
            e
        })
    }
}

/// Validates a server response and returns its `data` array in order.
///
/// `success` is checked first, then the declared `length`, then the actual
/// length of `data`, then that every value fits in a byte.
pub fn parse_random_numbers(body: &str) -> Result<Vec<u8>> {
    let response: QrngResponse = serde_json::from_str(body)?;

    if !response.success {
        return Err(DrawError::RemoteRejected);
    }

    let length = response
        .length
        .ok_or_else(|| DrawError::Decode("missing field `length`".to_string()))?;
    let length = length
        .as_i64()
        .ok_or_else(|| DrawError::Decode(format!("field `length` is not an integer: {}", length)))?;
    if length != CANDIDATE_COUNT as i64 {
        return Err(DrawError::LengthMismatch {
            field: "length",
            expected: CANDIDATE_COUNT,
            actual: length,
        });
    }

    let data = match response.data {
        Some(Value::Array(data)) => data,
        Some(other) => {
            return Err(DrawError::Decode(format!(
                "field `data` is not an array: {}",
                other
            )))
        }
        None => return Err(DrawError::Decode("missing field `data`".to_string())),
    };
    if data.len() != CANDIDATE_COUNT {
        return Err(DrawError::LengthMismatch {
            field: "data",
            expected: CANDIDATE_COUNT,
            actual: data.len() as i64,
        });
    }

    let keys = data
        .iter()
        .map(|value| {
            value
                .as_u64()
                .and_then(|v| u8::try_from(v).ok())
                .ok_or_else(|| {
                    DrawError::Decode(format!("value {} is not an 8-bit integer", value))
                })
        })
        .collect::<Result<Vec<u8>>>()?;

    info!("Random numbers were read from the Web API response.");
    Ok(keys)
}
