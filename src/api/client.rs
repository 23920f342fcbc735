use super::types::*;
use crate::{Error, Result, config::BackendConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send_chat(&self, message: &str, history: &[ChatTurn]) -> Result<String>;
}

pub struct PlantCareClient {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl PlantCareClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Liveness probe; the document shape is the backend's business.
    pub async fn health(&self) -> Result<Value> {
        self.get_json("/api/health").await
    }

    pub async fn capabilities(&self) -> Result<Value> {
        self.get_json("/api/capabilities").await
    }

    /// Uploads a plant photo together with the user's recent care actions.
    pub async fn analyze_plant(
        &self,
        image: Vec<u8>,
        file_name: &str,
        user_actions: &str,
    ) -> Result<PlantAnalysis> {
        let url = format!("{}/api/analyze-plant", self.base_url);

        debug!("Uploading {} image bytes to {}", image.len(), url);

        let part = Part::bytes(image)
            .file_name(file_name.to_string())
            .mime_str("image/jpeg")?;
        let form = Form::new()
            .part("image", part)
            .text("user_actions", user_actions.to_string());

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;
        if status != StatusCode::OK {
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: AnalyzeResponse = serde_json::from_str(&body)?;
        if envelope.success {
            Ok(envelope.analysis)
        } else {
            Err(Error::backend(envelope.error.unwrap_or_else(|| {
                "No se pudo analizar la planta".to_string()
            })))
        }
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);

        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;
        if status != StatusCode::OK {
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    // Connect failures are checked before timeouts so a connect-phase
    // timeout counts as unreachable, not as a slow response.
    fn classify(&self, e: reqwest::Error) -> Error {
        if e.is_connect() {
            Error::BackendUnreachable {
                url: self.base_url.clone(),
            }
        } else if e.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            Error::Network(e)
        }
    }
}

#[async_trait]
impl ChatBackend for PlantCareClient {
    async fn send_chat(&self, message: &str, history: &[ChatTurn]) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest {
            message: message.to_string(),
            history: history.to_vec(),
        };

        debug!("Sending chat message to {}", url);

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;
        if status != StatusCode::OK {
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = serde_json::from_str(&body)?;
        if chat.success {
            Ok(chat
                .response
                .unwrap_or_else(|| "Sin respuesta".to_string()))
        } else {
            Err(Error::backend(
                chat.error.unwrap_or_else(|| "Error desconocido".to_string()),
            ))
        }
    }
}
