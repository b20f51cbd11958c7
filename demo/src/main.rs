// ./demo/src/main.rs
use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use application::DocumentStore;
use domain::{Author, Document, SearchRequest};
use infrastructure::InMemoryDocumentStore;

// Application entry point
fn main() {
    // --- Logger Initialization ---
    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
    info!("Logger initialized successfully.");

    if let Err(e) = run() {
        error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

/// Walks the registry through its three operations: save a document without
/// an id, look it up under the generated id, then search for it with every
/// criterion populated.
fn run() -> Result<(), Box<dyn std::error::Error>> {
    // --- Dependency Injection ---
    let store: Arc<dyn DocumentStore> = Arc::new(InMemoryDocumentStore::new());
    info!("In-memory document store initialized.");

    // --- Save ---
    let author = Author {
        id: "1".to_string(),
        name: "John Doe".to_string(),
    };
    let document = Document {
        id: None,
        title: "Sample Title".to_string(),
        content: "Sample Content".to_string(),
        author: Some(author),
        created: Utc::now(),
    };
    let saved = store.save(document)?;
    println!("Saved document:\n{}", serde_json::to_string_pretty(&saved)?);

    // --- Point lookup under the generated id ---
    if let Some(id) = saved.id.clone() {
        if let Some(found) = store.find_by_id(&id)? {
            println!("Found document:\n{}", serde_json::to_string_pretty(&found)?);
        }
    }

    // --- Search with every criterion populated ---
    let request = SearchRequest {
        title_prefixes: vec!["Sample".to_string()],
        contains_contents: vec!["Content".to_string()],
        author_ids: vec!["1".to_string()],
        created_from: Some(Utc::now() - Duration::hours(1)),
        created_to: Some(Utc::now() + Duration::hours(1)),
    };
    let results = store.search(&request)?;
    info!(hits = results.len(), "Search finished.");
    println!("Search results:\n{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
