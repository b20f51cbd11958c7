pub mod in_memory_store;

// Re-export the store type
pub use in_memory_store::InMemoryDocumentStore;
