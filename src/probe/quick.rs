use crate::Error;
use crate::api::KnowledgeApi;
use tracing::warn;

pub const SUPPLIER_QUERY: &str = "供应商有哪些？";

#[derive(Debug, Clone, Copy)]
pub struct QuickReport {
    pub knowledge_ok: bool,
    pub health_ok: bool,
}

/// Fires one knowledge query and one health check, printing the raw JSON of
/// each response. The two calls are independent; either may fail without
/// affecting the other.
pub async fn run(api: &dyn KnowledgeApi) -> QuickReport {
    let knowledge_ok = match api.ask(SUPPLIER_QUERY).await {
        Ok(answer) => {
            println!("status: 200");
            match serde_json::to_string_pretty(&answer) {
                Ok(body) => println!("response:\n{}", body),
                Err(e) => warn!("Failed to render response: {}", e),
            }
            true
        }
        Err(Error::Status(status)) => {
            println!("status: {}", status.as_u16());
            false
        }
        Err(e) => {
            println!("❌ request failed: {}", e);
            false
        }
    };

    let health_ok = match api.health().await {
        Ok(health) => {
            let body = serde_json::to_string(&health).unwrap_or_default();
            println!("\nhealth check: {}", body);
            true
        }
        Err(e) => {
            println!("\n❌ health check failed: {}", e);
            false
        }
    };

    QuickReport {
        knowledge_ok,
        health_ok,
    }
}
