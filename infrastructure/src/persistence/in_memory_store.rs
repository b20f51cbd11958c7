// ./infrastructure/src/persistence/in_memory_store.rs
use application::{DocumentStore, RegistryError};
use dashmap::DashMap;
use domain::{Document, DocumentId, SearchRequest};
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

/// DashMap-backed document store.
///
/// The map lives behind an `Arc`, so cloning the store yields another handle
/// onto the same document set; that is how one instance is shared with
/// concurrent callers. Documents returned from any operation are independent
/// copies of the stored entry, never views into it.
///
/// `search` scans every entry, keeps the ones the request matches, and sorts
/// by `(created, id)` so that equal stores answer equal requests with equal
/// output. Per-entry visibility is atomic: a reader racing a save observes
/// the old document or the new one, never a torn mix. A scan overlapping a
/// save may or may not include the saved entry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    // Document ID -> Document
    documents: Arc<DashMap<DocumentId, Document>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            documents: Arc::new(DashMap::new()),
        }
    }

    /// Number of documents currently held.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Fresh high-entropy identifier: a random UUID rendered as text.
fn generate_id() -> DocumentId {
    DocumentId::new(Uuid::new_v4().to_string())
}

impl DocumentStore for InMemoryDocumentStore {
    #[instrument(skip(self, document))]
    fn save(&self, mut document: Document) -> Result<Document, RegistryError> {
        let id = match document.id.take() {
            Some(id) if !id.is_empty() => id,
            _ => generate_id(),
        };
        debug!(doc_id = %id.as_str(), "Saving document to in-memory store");
        document.id = Some(id.clone());
        // Upsert: a prior entry under the same id is wholly replaced.
        self.documents.insert(id, document.clone());
        Ok(document)
    }

    #[instrument(skip(self))]
    fn find_by_id(&self, id: &DocumentId) -> Result<Option<Document>, RegistryError> {
        debug!(doc_id = %id.as_str(), "Getting document from in-memory store");
        // Clone out of the map so the caller holds a snapshot, not a guard.
        Ok(self.documents.get(id).map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self, request))]
    fn search(&self, request: &SearchRequest) -> Result<Vec<Document>, RegistryError> {
        let mut matches: Vec<Document> = self
            .documents
            .iter()
            .filter(|entry| request.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        // Deterministic output: creation time first, id as the tie-breaker.
        matches.sort_unstable_by(|a, b| a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id)));
        debug!(hits = matches.len(), "Search scan over in-memory store finished");
        Ok(matches)
    }
}
