//! Integration tests for the curator
//!
//! These tests verify:
//! - The documented save/optimize scenarios end to end
//! - Export/import round trips between separate curators
//! - The JSON command surface driving a full editing session
//! - Persistence across controller restarts

use std::time::Duration;

use proptest::prelude::*;
use prompt_curator_core::{
    commands,
    playground::SimulatedProvider,
    transform::{self, ChangeKind},
    Category, CuratorConfig, CuratorController, CuratorError, PromptDraft, PromptMetadata,
    PromptStore,
};
use serde_json::json;

fn curator() -> CuratorController {
    CuratorController::new(
        PromptStore::new(),
        Box::new(SimulatedProvider::new(Duration::ZERO)),
    )
}

#[test]
fn test_first_save_scenario() {
    println!("\n=== Test: First save gets a default title ===");

    let mut c = curator();
    c.set_buffer("Write an essay");
    let prompt = c
        .save_current(PromptMetadata {
            title:    None,
            category: Category::General,
            tags_raw: "ai, essay".to_string(),
        })
        .unwrap();

    assert_eq!(prompt.title, "Prompt 1");
    assert_eq!(prompt.tags, vec!["ai", "essay"]);
    assert_eq!(c.store().list().position(|p| p.id == prompt.id), Some(0));
}

#[test]
fn test_optimize_scenarios() {
    println!("\n=== Test: Optimize wraps plain text and skips structured text ===");

    let (text, changes) = transform::optimize("Summarize this article");
    assert!(text.lines().any(|l| l == "Task: Summarize this article"));
    assert!(changes.iter().any(|c| c.kind == ChangeKind::Structured));
    assert!(changes.iter().any(|c| c.kind == ChangeKind::Added));
    assert!(changes.iter().any(|c| c.kind == ChangeKind::Improved));

    let structured = "Context: X\n\nTask: Y";
    assert_eq!(transform::optimize(structured), (structured.to_string(), vec![]));
}

#[test]
fn test_export_into_second_curator() {
    println!("\n=== Test: Export from one curator, import into another ===");

    let mut source = PromptStore::new();
    source.save(PromptDraft::new("alpha").with_tags("x, y")).unwrap();
    source
        .save(PromptDraft::new("beta").with_category(Category::Technical))
        .unwrap();

    let mut target = PromptStore::new();
    target.save(PromptDraft::new("already here")).unwrap();
    let existing: Vec<_> = target.list().cloned().collect();

    let exported = source.export().unwrap();
    assert_eq!(target.import(&exported).unwrap(), 2);

    let all: Vec<_> = target.list().cloned().collect();
    let expected: Vec<_> = existing.into_iter().chain(source.list().cloned()).collect();
    assert_eq!(all, expected);
}

#[test]
fn test_bad_import_leaves_store_alone() {
    println!("\n=== Test: Malformed import is rejected atomically ===");

    let mut store = PromptStore::new();
    store.save(PromptDraft::new("keep")).unwrap();
    let before = store.clone();

    for payload in [
        "",
        "42",
        r#"{"prompts": []}"#,
        r#"[{"id": "1", "title": "t", "content": "c", "category": "general"}]"#,
        r#"[null]"#,
    ] {
        let err = store.import(payload).unwrap_err();
        assert!(matches!(err, CuratorError::ImportError(_)), "payload {:?}", payload);
        assert_eq!(store, before);
    }
}

#[test]
fn test_command_session() {
    println!("\n=== Test: Full editing session over commands ===");

    let mut c = curator();

    let seeded = commands::dispatch(&mut c, "templates.use", json!({"id": "step-by-step"})).unwrap();
    assert!(seeded["buffer"].as_str().unwrap().contains("[DESCRIBE PROBLEM]"));

    commands::dispatch(&mut c, "editor.format", json!({})).unwrap();
    let optimized = commands::dispatch(&mut c, "editor.optimize", json!({})).unwrap();
    assert_eq!(optimized["alreadyOptimized"], json!(false));
    commands::dispatch(&mut c, "editor.accept", json!({})).unwrap();

    let saved = commands::dispatch(
        &mut c,
        "prompts.save",
        json!({"title": "Solver", "category": "general", "tagsRaw": "steps"}),
    )
    .unwrap();
    assert_eq!(saved["title"], json!("Solver"));

    let found = commands::dispatch(&mut c, "prompts.search", json!({"term": "STEPS"})).unwrap();
    assert_eq!(found["prompts"][0]["id"], saved["id"]);

    let ran = commands::dispatch(&mut c, "playground.run", json!({"provider": "claude"})).unwrap();
    assert_eq!(ran["provider"], json!("Anthropic Claude"));

    let id = saved["id"].as_str().unwrap().to_string();
    commands::dispatch(&mut c, "prompts.delete", json!({ "id": id })).unwrap();
    commands::dispatch(&mut c, "prompts.delete", json!({ "id": id })).unwrap();
    assert!(c.store().is_empty());

    let notes = commands::dispatch(&mut c, "notifications.drain", json!({})).unwrap();
    assert!(!notes["notifications"].as_array().unwrap().is_empty());
}

#[test]
fn test_persistence_across_restarts() {
    println!("\n=== Test: Store survives a controller restart ===");

    let dir = tempfile::tempdir().unwrap();
    let config = CuratorConfig {
        data_dir: dir.path().to_path_buf(),
        persist: true,
        ..CuratorConfig::ephemeral()
    };

    let mut first = CuratorController::from_config(&config).unwrap();
    first.set_buffer("durable");
    first.save_current(PromptMetadata::default()).unwrap();
    let exported = first.store().export().unwrap();
    first.import(&exported).unwrap();
    let snapshot: Vec<_> = first.store().list().cloned().collect();
    drop(first);

    let second = CuratorController::from_config(&config).unwrap();
    let reloaded: Vec<_> = second.store().list().cloned().collect();
    assert_eq!(reloaded, snapshot);
    assert_eq!(reloaded.len(), 2);
}

#[test]
fn test_configured_playground_waits_and_takes_settings() {
    println!("\n=== Test: Configured Playground honors its delay and settings ===");

    let config = CuratorConfig {
        playground_delay: Duration::from_millis(10),
        ..CuratorConfig::ephemeral()
    };
    let mut c = CuratorController::from_config(&config).unwrap();
    c.set_buffer("Explain borrowing");

    let start = std::time::Instant::now();
    let ran = commands::dispatch(
        &mut c,
        "playground.run",
        json!({"provider": "openai", "model": "gpt-4", "temperature": 0.3, "maxTokens": 300}),
    )
    .unwrap();
    assert!(start.elapsed() >= Duration::from_millis(10));
    assert_eq!(ran["model"], json!("gpt-4"));

    let rejected = commands::call(
        &mut c,
        "playground.run",
        json!({"provider": "openai", "temperature": 3.5}),
    );
    assert_eq!(rejected["error"], json!(true));
    assert_eq!(rejected["category"], json!("validation"));
}

proptest! {
    #[test]
    fn prop_round_trip_appends_in_order(contents in proptest::collection::vec("[a-z][a-z ]{0,15}", 0..6)) {
        let mut store = PromptStore::new();
        for content in &contents {
            store.save(PromptDraft::new(content.clone())).unwrap();
        }
        let original: Vec<_> = store.list().cloned().collect();

        let exported = store.export().unwrap();
        store.import(&exported).unwrap();

        let all: Vec<_> = store.list().cloned().collect();
        prop_assert_eq!(all.len(), original.len() * 2);
        prop_assert_eq!(&all[..original.len()], &original[..]);
        prop_assert_eq!(&all[original.len()..], &original[..]);
    }

    #[test]
    fn prop_format_idempotent(text in "[-•:. a-z0-9\n\t]{0,80}") {
        let once = transform::format(&text);
        prop_assert_eq!(transform::format(&once), once);
    }
}
