//! Document store accessor for the server's XML configuration file.
//!
//! The configuration document is the server's user database: an ordered
//! tree whose `<Users>` element holds one `<User>` record per account. The
//! store loads the whole document, answers existence queries, appends new
//! records, and re-serializes with stable indentation. Mutation is
//! append-only; prior siblings and content are never reordered.

pub mod errors;
pub mod record;

pub use errors::StoreError;
pub use record::AccountRecord;

/// Re-export the XML tree types appearing in this module's API.
pub use xmltree::{Element, XMLNode};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use xmltree::EmitterConfig;

use crate::Result;

/// Name of the element holding the account records, looked up among the
/// root's children. Located by name, never by child position: hand-edited
/// documents do not keep the collection at a fixed index.
const USERS_ELEMENT: &str = "Users";

/// Name of one account record element inside the Users collection.
const USER_ELEMENT: &str = "User";

/// Attribute carrying the account name on a record element.
const NAME_ATTR: &str = "Name";

/// Handle to the configuration document at a fixed path.
pub struct DocumentStore {
    path: PathBuf,
}

/// A parsed configuration document, mutated in memory and persisted as a
/// whole.
#[derive(Debug)]
pub struct ConfigDocument {
    root: Element,
}

impl DocumentStore {
    /// Create a store handle for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and parse the document.
    pub fn load(&self) -> Result<ConfigDocument> {
        let bytes = fs::read(&self.path).map_err(|source| StoreError::DocumentRead {
            path: self.path.clone(),
            source,
        })?;
        let root = Element::parse(bytes.as_slice()).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        Ok(ConfigDocument { root })
    }

    /// Re-serialize `document` with stable indentation and overwrite the
    /// original path.
    pub fn persist(&self, document: &ConfigDocument) -> Result<()> {
        let mut out = Vec::new();
        document
            .root
            .write_with_config(&mut out, EmitterConfig::new().perform_indent(true))
            .map_err(|source| StoreError::Serialize {
                reason: source.to_string(),
            })?;
        fs::write(&self.path, &out).map_err(|source| StoreError::DocumentWrite {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "configuration document persisted");
        Ok(())
    }

    /// Load the document and check whether `username` is already present.
    pub fn contains_account(&self, username: &str) -> Result<bool> {
        Ok(self.load()?.contains_account(username))
    }

    /// Load the document, append `record` to the Users collection, and
    /// persist. The on-disk file is untouched when insertion fails.
    pub fn insert_account(&self, record: &AccountRecord) -> Result<()> {
        let mut document = self.load()?;
        document.insert_account(record)?;
        self.persist(&document)
    }
}

impl ConfigDocument {
    /// Check whether an account named `username` exists, comparing
    /// uppercased names for equality.
    ///
    /// Exact match by policy: a containment match would also reject "bob"
    /// when only "BOBBY" exists. A document without a Users collection
    /// contains no accounts.
    pub fn contains_account(&self, username: &str) -> bool {
        let wanted = username.to_uppercase();
        let Some(users) = self.root.get_child(USERS_ELEMENT) else {
            return false;
        };
        users
            .children
            .iter()
            .filter_map(XMLNode::as_element)
            .filter(|el| el.name == USER_ELEMENT)
            .filter_map(|el| el.attributes.get(NAME_ATTR))
            .any(|name| name.to_uppercase() == wanted)
    }

    /// Append `record` as the last child of the Users collection.
    ///
    /// Fails with [`StoreError::MissingUsersSection`] when the document has
    /// no `<Users>` element among the root's children.
    pub fn insert_account(&mut self, record: &AccountRecord) -> Result<()> {
        let users = self
            .root
            .get_mut_child(USERS_ELEMENT)
            .ok_or(StoreError::MissingUsersSection)?;
        users.children.push(XMLNode::Element(record.to_element()));
        debug!(name = record.name(), "account record appended");
        Ok(())
    }

    /// Root element of the document tree.
    pub fn root(&self) -> &Element {
        &self.root
    }
}
