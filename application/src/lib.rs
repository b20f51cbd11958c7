use domain::{Document, DocumentId, SearchRequest};
use thiserror::Error;
use tracing::{debug, instrument};

// --- Registry Errors ---

/// Failures a storage backend may surface through the [`DocumentStore`] seam.
///
/// "Id not found" is never an error (lookups report absence as `Ok(None)`),
/// and the in-memory backend has no failure path at all. The variant exists
/// so that backends with real I/O can fail through the same trait.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

// --- Storage interface (trait) ---

/// Interface for storing, retrieving and searching documents.
///
/// One instance owns the canonical copy of every stored document; values
/// handed back are independent snapshots. Implementations must tolerate
/// concurrent calls from independent threads: saves to different ids never
/// lose an entry, and a reader racing a save observes either the old or the
/// new document, never a partially-written one.
pub trait DocumentStore: Send + Sync {
    /// Upserts a document. A document arriving without an id (or with an
    /// empty one) is assigned a fresh unique id first; the entry under that
    /// id is then inserted or wholly replaced (last write wins, no field
    /// merge). Returns the id-populated document as a new value.
    fn save(&self, document: Document) -> Result<Document, RegistryError>;

    /// Retrieves a document by its id. Absence is a normal outcome, reported
    /// as `Ok(None)`.
    fn find_by_id(&self, id: &DocumentId) -> Result<Option<Document>, RegistryError>;

    /// Scans the stored documents and returns the ones matching `request`.
    /// Result order is implementation-defined; implementations that sort by
    /// an explicit key should say so.
    fn search(&self, request: &SearchRequest) -> Result<Vec<Document>, RegistryError>;

    /// Saves several documents. No atomicity across entries: each document
    /// is saved independently, and a failure leaves the earlier ones in
    /// place.
    #[instrument(skip(self, documents))]
    fn save_all(&self, documents: Vec<Document>) -> Result<Vec<Document>, RegistryError> {
        debug!(count = documents.len(), "Saving batch via sequential saves");
        // Default implementation saves one by one (can be overridden for optimization)
        let mut saved = Vec::with_capacity(documents.len());
        for document in documents {
            saved.push(self.save(document)?);
        }
        Ok(saved)
    }
}
