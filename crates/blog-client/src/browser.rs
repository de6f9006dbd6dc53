//! Post browser state machine.
//!
//! Phases: `Loading` while a list request is in flight, `Error` when a load
//! failed, `Ready` with the posts sorted newest first. Each load is stamped
//! with a generation; only the completion of the newest load is applied.

use std::time::{Duration, Instant};

use blog_core::domain::Post;

use crate::api::PostsApi;
use crate::error::ClientError;
use crate::form::PostForm;

/// How long the success notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

pub const LOAD_ERROR: &str = "Error loading posts";
pub const CREATE_SUCCESS: &str = "Post created successfully!";
pub const CREATE_FAILED: &str = "Failed to create post";
pub const FORM_INCOMPLETE: &str = "Title and content are required";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Error(String),
    Ready(Vec<Post>),
}

/// Banner shown above the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Dismisses itself once `expires_at` has passed.
    Success { message: String, expires_at: Instant },
    /// Stays until dismissed or replaced.
    Error { message: String },
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success { message, .. } | Notice::Error { message } => message,
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        matches!(self, Notice::Success { expires_at, .. } if now >= *expires_at)
    }
}

/// Issued by [`PostBrowser::begin_load`]; hand it back to [`PostBrowser::finish_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
pub struct PostBrowser {
    phase: Phase,
    generation: u64,
    notice: Option<Notice>,
    form: PostForm,
}

impl Default for PostBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl PostBrowser {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            generation: 0,
            notice: None,
            form: PostForm::default(),
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Posts of the ready phase, newest first; empty in any other phase.
    pub fn posts(&self) -> &[Post] {
        match &self.phase {
            Phase::Ready(posts) => posts,
            _ => &[],
        }
    }

    pub fn form(&self) -> &PostForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut PostForm {
        &mut self.form
    }

    /// The notice still visible at `now`.
    pub fn notice(&self, now: Instant) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| !n.is_expired(now))
    }

    /// Drop a notice whose display time has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Clear a load error banner. The list stays empty until the next load.
    pub fn dismiss_error(&mut self) {
        if matches!(self.phase, Phase::Error(_)) {
            self.phase = Phase::Ready(Vec::new());
        }
    }

    /// Start a load: enter the loading phase and supersede every earlier load.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.phase = Phase::Loading;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Apply a load result. Returns false, leaving state untouched, when the ticket was superseded.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Post>, ClientError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "Discarding superseded load"
            );
            return false;
        }

        self.phase = match result {
            Ok(mut posts) => {
                posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                Phase::Ready(posts)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching posts");
                Phase::Error(LOAD_ERROR.to_string())
            }
        };
        true
    }

    /// Fetch the collection and apply it.
    pub async fn load<A>(&mut self, api: &A)
    where
        A: PostsApi + ?Sized,
    {
        let ticket = self.begin_load();
        let result = api.list_posts().await;
        self.finish_load(ticket, result);
    }

    /// Submit the form. On success the form is cleared, a success notice is
    /// shown and the list is re-fetched; the created post is returned.
    pub async fn submit<A>(&mut self, api: &A, now: Instant) -> Option<Post>
    where
        A: PostsApi + ?Sized,
    {
        if !self.form.is_complete() {
            self.notice = Some(Notice::Error {
                message: FORM_INCOMPLETE.to_string(),
            });
            return None;
        }

        match api.create_post(&self.form.to_request()).await {
            Ok(post) => {
                tracing::info!(post_id = %post.id, "Post created");
                self.form.clear();
                self.notice = Some(Notice::Success {
                    message: CREATE_SUCCESS.to_string(),
                    expires_at: now + NOTICE_TTL,
                });
                self.load(api).await;
                Some(post)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error creating post");
                self.notice = Some(Notice::Error {
                    message: CREATE_FAILED.to_string(),
                });
                None
            }
        }
    }
}
