//! Builds a small registry from mixed sources and prepares a remote
//! execution request for one of its prompts.
//!
//! Run with `cargo run --example basic_registry`.

use promptbook_registry::prelude::*;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let greeting = json!({
        "promptbookUrl": "https://promptbook.example/greeting.ptbk.md",
        "title": "Greeting",
        "parameters": [{ "name": "name", "isInput": true }],
        "promptTemplates": []
    });
    let farewell = r#"{
        "promptbookUrl": "https://promptbook.example/farewell.ptbk.md",
        "title": "Farewell"
    }"#;

    let registry = PromptbookRegistry::from_sources(
        vec![
            ("greeting", PromptbookSource::from(greeting)),
            ("farewell", PromptbookSource::from(farewell)),
        ],
        Some(ExecutorSettings::default().with_max_execution_attempts(3)),
    )?;

    println!("Registered promptbooks:");
    for url in registry.list_promptbooks() {
        println!("  {}", url);
    }

    let promptbook = registry.get_promptbook_by_url("https://promptbook.example/greeting.ptbk.md")?;
    println!("Found: {}", promptbook.title().unwrap_or("(untitled)"));

    if let Err(e) = registry.get_promptbook_by_url("https://promptbook.example/missing.ptbk.md") {
        println!("\n{}\n", e);
    }

    let prompt = Prompt::new("Greeting", "Write a warm greeting for {name}")
        .promptbook_url("https://promptbook.example/greeting.ptbk.md")
        .parameter("name", "Alice");
    let request = RemoteExecutionRequest::new(ClientId::generate(), prompt);
    println!("Request on the wire: {}", request.to_json()?);

    Ok(())
}
