//! Chat message entity bound into list rows.

use serde::{Deserialize, Serialize};

/// Who wrote a message
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    #[serde(default, alias = "photoURL")]
    pub photo_url: Option<String>,
}

/// A single chat message. Immutable once built.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub author: Author,
    pub body: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl Message {
    pub fn new(name: impl Into<String>, body: impl Into<String>, timestamp: i64) -> Self {
        Self {
            author: Author {
                name: name.into(),
                photo_url: None,
            },
            body: body.into(),
            timestamp,
        }
    }

    pub fn with_photo(mut self, url: impl Into<String>) -> Self {
        self.author.photo_url = Some(url.into());
        self
    }

    /// The avatar URL, ignoring blank strings
    pub fn photo_url(&self) -> Option<&str> {
        self.author
            .photo_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }
}
