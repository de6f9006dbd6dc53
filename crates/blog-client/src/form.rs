//! The new-post form.

use blog_shared::PostRequest;

/// Raw form input as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub author: String,
    pub content: String,
    /// Comma separated.
    pub tags: String,
}

impl PostForm {
    /// Title and content must be non-blank before a create request is issued.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    /// Split on commas, trim, drop empties.
    pub fn parse_tags(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Build the create request. A blank author is left out so the server default applies.
    pub fn to_request(&self) -> PostRequest {
        let request = PostRequest::new(self.title.trim(), self.content.trim())
            .with_tags(Self::parse_tags(&self.tags));

        match self.author.trim() {
            "" => request,
            author => request.with_author(author),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
