use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize}; // For document fields & search criteria

// --- Document ID ---

/// Identifier a document is stored under. The store generates one on first
/// save when the caller did not supply it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: String) -> Self {
        Self(id)
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    /// An empty id counts as "not assigned yet", same as an absent one.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}
impl From<DocumentId> for String {
    fn from(doc_id: DocumentId) -> Self {
        doc_id.0
    }
}

// --- Value objects ---

/// Document author, embedded by value. `id` is the join key the
/// author-based search criterion compares against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
}

/// The stored entity: a plain data record with field-wise equality.
///
/// `id` may be absent on the way in; every document returned from a store
/// operation carries one. `author` may be absent too; such documents never
/// satisfy an author criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub id: Option<DocumentId>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub author: Option<Author>,
    pub created: DateTime<Utc>,
}

// --- Search request + matcher ---

/// Multi-criteria search request. Every field is optional: an empty list or
/// absent bound contributes no constraint, so the default request matches
/// every document. Criteria combine with AND across fields and OR within a
/// field's list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRequest {
    pub title_prefixes: Vec<String>,
    pub contains_contents: Vec<String>,
    pub author_ids: Vec<String>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Decides whether `document` satisfies this request.
    ///
    /// Pure predicate over the raw field contents: prefix and substring
    /// comparisons are case-sensitive with no normalization, and both
    /// timestamp bounds are inclusive.
    pub fn matches(&self, document: &Document) -> bool {
        if !self.title_prefixes.is_empty()
            && !self
                .title_prefixes
                .iter()
                .any(|prefix| document.title.starts_with(prefix.as_str()))
        {
            return false;
        }

        if !self.contains_contents.is_empty()
            && !self
                .contains_contents
                .iter()
                .any(|needle| document.content.contains(needle.as_str()))
        {
            return false;
        }

        if !self.author_ids.is_empty() {
            // A document without an author cannot be a member of any author set.
            match &document.author {
                Some(author) => {
                    if !self.author_ids.contains(&author.id) {
                        return false;
                    }
                }
                None => return false,
            }
        }

        if let Some(from) = self.created_from {
            if document.created < from {
                return false;
            }
        }
        if let Some(to) = self.created_to {
            if document.created > to {
                return false;
            }
        }

        true
    }
}
