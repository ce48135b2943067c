use async_trait::async_trait;
use sailisi_probe::{
    Error, Result,
    api::{AnswerResponse, HealthResponse, KnowledgeApi},
};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted stand-in for the Sailisi API used by the probe driver tests.
pub struct MockKnowledgeApi {
    health: Option<HealthResponse>,
    answers: Mutex<VecDeque<Option<String>>>,
    asked: Mutex<Vec<String>>,
}

impl MockKnowledgeApi {
    pub fn healthy(message: &str, ai_enabled: bool) -> Self {
        Self {
            health: Some(HealthResponse {
                message: message.to_string(),
                ai_enabled,
            }),
            answers: Mutex::new(VecDeque::new()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            health: None,
            answers: Mutex::new(VecDeque::new()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Queues a successful answer for the next knowledge query.
    pub fn with_answer(self, answer: &str) -> Self {
        self.answers
            .lock()
            .unwrap()
            .push_back(Some(answer.to_string()));
        self
    }

    /// Queues a failure for the next knowledge query.
    pub fn with_failure(self) -> Self {
        self.answers.lock().unwrap().push_back(None);
        self
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl KnowledgeApi for MockKnowledgeApi {
    async fn health(&self) -> Result<HealthResponse> {
        self.health
            .clone()
            .ok_or_else(|| Error::unreachable("connection refused"))
    }

    async fn ask(&self, query: &str) -> Result<AnswerResponse> {
        self.asked.lock().unwrap().push(query.to_string());

        match self.answers.lock().unwrap().pop_front() {
            Some(Some(answer)) => Ok(AnswerResponse {
                query: query.to_string(),
                answer,
            }),
            Some(None) => Err(Error::timeout("deadline elapsed")),
            None => Err(Error::unreachable("connection refused")),
        }
    }
}
