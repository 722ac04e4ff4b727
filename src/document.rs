use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A research document: a caller-assigned id, one or more authors, a title,
/// a body of free text and the time it was published.
///
/// Field equality is structural. Repositories only ever compare documents by `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    id: u32,
    authors: Vec<String>,
    title: String,
    body: String,
    published: DateTime<Utc>,
}

impl Document {
    /// Create a document with a single (main) author, published now.
    pub fn new(
        id: u32,
        main_author: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id,
            authors: vec![main_author.into()],
            title: title.into(),
            body: body.into(),
            published: Utc::now().trunc_subsecs(0),
        }
    }

    /// Replace the publish timestamp. Sub-second precision is dropped.
    pub fn with_published(mut self, published: DateTime<Utc>) -> Self {
        self.set_published(published);
        self
    }

    /// Caller-assigned identity.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Replace the id.
    pub fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    /// Authors in display order.
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Mutable access to the author list (add, rename, reorder or remove authors).
    pub fn authors_mut(&mut self) -> &mut Vec<String> {
        &mut self.authors
    }

    /// Authors joined for display, e.g. `"Jarrod Otis, Eldred Wilson"`.
    pub fn authors_display(&self) -> String {
        self.authors.join(", ")
    }

    /// The title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Replace the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// The document text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Replace the document text.
    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Publish time, whole seconds.
    pub fn published(&self) -> DateTime<Utc> {
        self.published
    }

    /// Replace the publish time. Sub-second precision is dropped.
    pub fn set_published(&mut self, published: DateTime<Utc>) {
        self.published = published.trunc_subsecs(0);
    }
}
