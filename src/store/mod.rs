//! Persistent document store
//!
//! Documents are kept in a single versioned JSON file, most recently
//! updated first. Titles are derived from content, never stored
//! independently, so they always reflect the latest text.

use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum words in a title derived from a plain first line.
const TITLE_WORD_LIMIT: usize = 5;

/// A stored markdown document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier, assigned at creation.
    pub id: String,
    /// Derived from content on every write.
    pub title: String,
    pub content: String,
    /// Unix epoch milliseconds.
    pub created_at: u64,
    /// Unix epoch milliseconds; equals `created_at` until the first update.
    pub updated_at: u64,
}

/// On-disk shape of the store file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreFile {
    /// Schema version for forward compatibility
    #[serde(default)]
    version: u32,
    /// Documents, most recently updated first
    documents: Vec<Document>,
    /// Id of the document last open in the editor
    #[serde(skip_serializing_if = "Option::is_none")]
    current: Option<String>,
}

/// Document collection bound to a JSON file on disk.
#[derive(Debug)]
pub struct DocumentStore {
    path: PathBuf,
    data: StoreFile,
}

impl DocumentStore {
    pub const CURRENT_VERSION: u32 = 1;

    /// Open the store at `path`. A missing or unreadable file yields an
    /// empty store rather than an error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|err| {
                tracing::warn!(?path, %err, "document store unreadable, starting empty");
                StoreFile::default()
            }),
            Err(_) => StoreFile::default(),
        };
        Self { path, data }
    }

    /// Open the store at the default per-user location.
    pub fn open_default() -> anyhow::Result<Self> {
        let path = crate::config_paths::documents_path()
            .ok_or_else(|| anyhow::anyhow!("no data directory available"))?;
        Ok(Self::open(path))
    }

    /// Write the store back to disk.
    pub fn save(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut data = self.data.clone();
        data.version = Self::CURRENT_VERSION;
        let contents = serde_json::to_string_pretty(&data)?;
        std::fs::write(&self.path, contents)
    }

    /// Documents, most recently updated first.
    pub fn list(&self) -> &[Document] {
        &self.data.documents
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.data.documents.iter().find(|d| d.id == id)
    }

    /// Create a new document from `content` and make it current.
    pub fn create(&mut self, content: &str) -> &Document {
        let now = now_epoch_millis();
        let document = Document {
            id: Uuid::new_v4().to_string(),
            title: derive_title(content),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.data.current = Some(document.id.clone());
        self.data.documents.insert(0, document);
        &self.data.documents[0]
    }

    /// Replace a document's content, re-deriving its title and moving it
    /// to the front. Returns `None` for an unknown id.
    pub fn update(&mut self, id: &str, content: &str) -> Option<&Document> {
        let idx = self.data.documents.iter().position(|d| d.id == id)?;
        let mut document = self.data.documents.remove(idx);
        document.title = derive_title(content);
        document.content = content.to_string();
        document.updated_at = now_epoch_millis();
        self.data.documents.insert(0, document);
        Some(&self.data.documents[0])
    }

    /// Delete a document. Clears the current marker if it pointed here.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.data.documents.len();
        self.data.documents.retain(|d| d.id != id);
        let removed = self.data.documents.len() != before;
        if removed && self.data.current.as_deref() == Some(id) {
            self.data.current = None;
        }
        removed
    }

    /// The document last open in the editor, if any.
    pub fn current(&self) -> Option<&Document> {
        let id = self.data.current.as_deref()?;
        self.get(id)
    }

    /// Mark a document as current. Returns false for an unknown id.
    pub fn set_current(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.data.current = Some(id.to_string());
        true
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Derive a display title from document content.
///
/// The first heading line wins; otherwise the first non-empty line,
/// truncated to a few words; an empty document is "Untitled".
pub fn derive_title(content: &str) -> String {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix('#') {
            let heading = rest.trim_start_matches('#').trim();
            if !heading.is_empty() {
                return heading.to_string();
            }
            continue;
        }
        let words: Vec<&str> = trimmed.split_whitespace().collect();
        if words.len() > TITLE_WORD_LIMIT {
            return format!("{}...", words[..TITLE_WORD_LIMIT].join(" "));
        }
        return words.join(" ");
    }
    "Untitled".to_string()
}

fn now_epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
