use serde::{Deserialize, Serialize};

/// One prior exchange entry sent along with a chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: String, content: String) -> Self {
        Self { role, content }
    }

    pub fn user(content: String) -> Self {
        Self::new("user".to_string(), content)
    }

    pub fn assistant(content: String) -> Self {
        Self::new("assistant".to_string(), content)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub success: bool,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Envelope returned by the plant-analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub analysis: PlantAnalysis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantAnalysis {
    #[serde(default)]
    pub plant_name: Option<String>,
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub health_score: Option<f32>,
    #[serde(default)]
    pub diagnosis: Option<Diagnosis>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// The backend sends either a plain-text diagnosis or a structured one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Diagnosis {
    Text(String),
    Structured {
        #[serde(default)]
        summary: Option<String>,
        #[serde(default)]
        visual_problems: Option<String>,
        #[serde(default)]
        identified_issues: Vec<String>,
    },
}
