use crate::api::KnowledgeApi;
use crate::display::preview;
use tracing::info;

pub const INTRO_QUERY: &str = "你好，请介绍一下自己";

const ANSWER_PREVIEW_CHARS: usize = 100;

/// Basic connectivity check: health first, then a single knowledge query.
/// Returns `false` as soon as either call fails; the caller only uses the
/// result for a printed summary.
pub async fn run(api: &dyn KnowledgeApi) -> bool {
    println!("🧪 Probing Sailisi API connection");
    println!("{}", "=".repeat(40));

    match api.health().await {
        Ok(health) => {
            println!("✅ health check: ok");
            println!(
                "   response: {}",
                serde_json::to_string(&health).unwrap_or_default()
            );
        }
        Err(e) => {
            println!("❌ health check failed: {}", e);
            return false;
        }
    }

    match api.ask(INTRO_QUERY).await {
        Ok(answer) => {
            info!("Knowledge query answered");
            println!("✅ knowledge query: ok");
            println!("   query: {}", answer.query);
            println!("   answer: {}", preview(&answer.answer, ANSWER_PREVIEW_CHARS));
        }
        Err(e) => {
            println!("❌ knowledge query failed: {}", e);
            return false;
        }
    }

    true
}
