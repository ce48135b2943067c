use crate::api::KnowledgeApi;
use crate::display::preview;
use tracing::warn;

pub const QA_QUESTIONS: [&str; 3] = ["供应商有哪些？", "设备故障如何处理？", "如何提高生产效率？"];

const ANSWER_PREVIEW_CHARS: usize = 150;

#[derive(Debug, Clone, Copy)]
pub struct SmartQaReport {
    pub health_ok: bool,
    pub answered: usize,
    pub failed: usize,
}

/// Exercises the knowledge endpoint with a fixed question list. Stops early
/// only when the health check fails; a failed question is reported and the
/// remaining questions are still asked.
pub async fn run(api: &dyn KnowledgeApi) -> SmartQaReport {
    println!("🧪 Probing smart QA service");
    println!("{}", "=".repeat(50));

    match api.health().await {
        Ok(health) => {
            println!("✅ health check: ok");
            println!("   AI enabled: {}", health.ai_enabled);
            println!("   message: {}", health.message);
        }
        Err(e) => {
            println!("❌ health check failed: {}", e);
            return SmartQaReport {
                health_ok: false,
                answered: 0,
                failed: 0,
            };
        }
    }

    let mut answered = 0;
    let mut failed = 0;

    for (i, question) in QA_QUESTIONS.iter().enumerate() {
        match api.ask(question).await {
            Ok(answer) => {
                println!("\n📝 question {}: ok", i + 1);
                println!("   query: {}", answer.query);
                println!("   answer: {}", preview(&answer.answer, ANSWER_PREVIEW_CHARS));
                answered += 1;
            }
            Err(e) => {
                warn!("Question {} failed: {}", i + 1, e);
                println!("\n❌ question {} failed: {}", i + 1, e);
                failed += 1;
            }
        }
    }

    SmartQaReport {
        health_ok: true,
        answered,
        failed,
    }
}
