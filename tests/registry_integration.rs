//! Integration tests for building and querying a promptbook registry
//! through the public API.

use pretty_assertions::assert_eq;
use promptbook_registry::prelude::*;
use promptbook_registry::{NoopValidator, PromptbookString};
use serde_json::json;
use std::sync::Arc;

fn definition(url: &str, title: &str) -> serde_json::Value {
    json!({
        "promptbookUrl": url,
        "title": title,
        "parameters": [{ "name": "topic", "isInput": true }],
        "promptTemplates": []
    })
}

#[test]
fn test_two_promptbooks_example() {
    let a = json!({ "promptbookUrl": "https://x/a" });
    let b = json!({ "promptbookUrl": "https://x/b" });

    let registry = PromptbookRegistry::from_sources(
        vec![("a", a.clone()), ("b", b.clone())],
        None,
    )
    .unwrap();

    assert_eq!(registry.list_promptbooks(), vec!["https://x/a", "https://x/b"]);
    assert_eq!(
        registry.get_promptbook_by_url("https://x/a").unwrap().as_value(),
        &a
    );

    let err = registry.get_promptbook_by_url("https://x/c").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("https://x/c"));
    assert!(message.contains("- https://x/a"));
    assert!(message.contains("- https://x/b"));
    assert_eq!(err.available, vec!["https://x/a", "https://x/b"]);
}

#[test]
fn test_every_definition_is_retrievable() {
    let urls = ["https://x/one", "https://x/two", "https://x/three"];
    let sources: Vec<_> = urls
        .iter()
        .map(|url| (url.to_string(), definition(url, url)))
        .collect();

    let registry = PromptbookRegistry::from_sources(sources, None).unwrap();

    assert_eq!(registry.list_promptbooks(), urls);
    for url in urls {
        let stored = registry.get_promptbook_by_url(url).unwrap();
        assert_eq!(stored.as_value(), &definition(url, url));
    }
}

#[test]
fn test_anonymous_promptbook_aborts_construction() {
    let result = PromptbookRegistry::from_sources(
        vec![
            ("named", definition("https://x/a", "Named")),
            ("nameless", json!({ "title": "Anonymous" })),
            ("after", definition("https://x/b", "After")),
        ],
        None,
    );

    match result {
        Err(LibraryError::MissingIdentity { name }) => assert_eq!(name, "nameless"),
        other => panic!("Expected MissingIdentity, got {:?}", other),
    }
}

#[test]
fn test_blank_url_counts_as_anonymous() {
    let result =
        PromptbookRegistry::from_sources(vec![("blank", json!({ "promptbookUrl": "" }))], None);

    match result {
        Err(LibraryError::MissingIdentity { name }) => assert_eq!(name, "blank"),
        other => panic!("Expected MissingIdentity, got {:?}", other),
    }
}

#[test]
fn test_missing_identity_message_names_entry() {
    let err = PromptbookRegistry::from_sources(vec![("draft", json!({}))], None).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("\"draft\""));
    assert!(message.contains("does not have defined URL"));
}

#[test]
fn test_later_duplicate_wins() {
    let registry = PromptbookRegistry::from_sources(
        vec![
            ("first", definition("https://x/a", "First")),
            ("second", definition("https://x/a", "Second")),
        ],
        None,
    )
    .unwrap();

    assert_eq!(registry.list_promptbooks(), vec!["https://x/a"]);
    assert_eq!(
        registry.get_promptbook_by_url("https://x/a").unwrap().title(),
        Some("Second")
    );
}

#[test]
fn test_duplicate_rejected_when_asked() {
    let result = PromptbookRegistry::builder()
        .duplicate_policy(DuplicatePolicy::Reject)
        .build(vec![
            ("first", definition("https://x/a", "First")),
            ("second", definition("https://x/a", "Second")),
        ]);
    assert!(matches!(result, Err(LibraryError::DuplicateUrl { .. })));
}

#[test]
fn test_text_and_json_sources_build_identical_registries() {
    let parsed = vec![
        ("a", definition("https://x/a", "A")),
        ("b", definition("https://x/b", "B")),
    ];
    let textual: Vec<_> = parsed
        .iter()
        .map(|(name, value)| (*name, PromptbookString::new(value.to_string())))
        .collect();

    let from_json = PromptbookRegistry::from_sources(parsed.clone(), None).unwrap();
    let from_text = PromptbookRegistry::from_sources(textual, None).unwrap();

    assert_eq!(from_json.list_promptbooks(), from_text.list_promptbooks());
    for url in from_json.list_promptbooks() {
        assert_eq!(
            from_json.get_promptbook_by_url(&url).unwrap(),
            from_text.get_promptbook_by_url(&url).unwrap()
        );
    }
}

#[test]
fn test_malformed_text_propagates_conversion_error() {
    let result = PromptbookRegistry::from_sources(
        vec![("broken", PromptbookSource::from("{ not json"))],
        None,
    );
    assert!(matches!(result, Err(LibraryError::Conversion(_))));
}

#[test]
fn test_invalid_definition_propagates_validation_error() {
    let result = PromptbookRegistry::from_sources(
        vec![("bad", json!({ "promptbookUrl": "not a url", "parameters": "x" }))],
        None,
    );
    match result {
        Err(LibraryError::Validation(e)) => assert_eq!(e.issues.len(), 2),
        other => panic!("Expected validation error, got {:?}", other),
    }

    // The same definition passes with validation turned off, but still
    // needs a URL to be registered.
    let registry = PromptbookRegistry::builder()
        .validator(NoopValidator)
        .build(vec![("bad", json!({ "promptbookUrl": "not a url", "parameters": "x" }))])
        .unwrap();
    assert!(registry.contains("not a url"));
}

#[test]
fn test_always_responsible_for_prompt() {
    let registry =
        PromptbookRegistry::from_sources(vec![("a", definition("https://x/a", "A"))], None)
            .unwrap();

    assert!(registry.is_responsible_for_prompt(&Prompt::new("t", "c")));
    assert!(registry.is_responsible_for_prompt(
        &Prompt::new("t", "c").promptbook_url("https://elsewhere/z")
    ));
}

#[test]
fn test_registry_behind_trait_object() {
    let registry: Box<dyn PromptbookLibrary> = Box::new(
        PromptbookRegistry::from_sources(vec![("a", definition("https://x/a", "A"))], None)
            .unwrap(),
    );
    assert_eq!(registry.list_promptbooks(), vec!["https://x/a"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_reads() {
    let registry = Arc::new(
        PromptbookRegistry::from_sources(
            vec![
                ("a", definition("https://x/a", "A")),
                ("b", definition("https://x/b", "B")),
            ],
            Some(ExecutorSettings::default().verbose(true)),
        )
        .unwrap(),
    );

    let mut handles = Vec::new();
    for i in 0..16 {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            let url = if i % 2 == 0 { "https://x/a" } else { "https://x/b" };
            let promptbook = registry.get_promptbook_by_url(url).unwrap();
            assert_eq!(promptbook.promptbook_url(), Some(url));
            registry.list_promptbooks().len()
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), 2);
    }
    assert_eq!(registry.settings().and_then(|s| s.is_verbose), Some(true));
}
