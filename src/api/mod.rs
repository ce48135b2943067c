mod client;
mod types;

pub use client::{KnowledgeApi, SailisiClient};
pub use types::{AnswerResponse, HealthResponse, QueryRequest};
