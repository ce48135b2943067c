use serde::{Deserialize, Serialize};

/// JSON body for `POST /knowledge`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Answer returned by the knowledge endpoint. The service may attach extra
/// fields; only the echoed query and the generated answer matter here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub answer: String,
}

/// Status reported by `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub ai_enabled: bool,
}
