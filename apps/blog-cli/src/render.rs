//! Plain-text rendering of the post browser.

use std::fmt::Write;
use std::time::Instant;

use blog_client::{Notice, Phase, PostBrowser};
use blog_core::domain::{Post, timestamp};

/// Characters of content shown in the list before truncating.
pub const PREVIEW_CHARS: usize = 150;

pub fn preview(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

fn tags_line(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("[{t}]"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One list entry.
pub fn post_summary(post: &Post) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", post.title);
    let _ = writeln!(out, "By: {}", post.author);
    let _ = writeln!(out, "Created: {}", post.created_at.format("%Y-%m-%d"));
    let _ = writeln!(out, "{}", preview(&post.content));
    if !post.tags.is_empty() {
        let _ = writeln!(out, "{}", tags_line(&post.tags));
    }
    out
}

pub fn post_detail(post: &Post) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", post.title);
    let _ = writeln!(out, "id: {}", post.id);
    let _ = writeln!(out, "By: {}", post.author);
    let _ = writeln!(out, "Created: {}", timestamp::format(&post.created_at));
    let _ = writeln!(out, "Updated: {}", timestamp::format(&post.updated_at));
    if !post.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}", tags_line(&post.tags));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", post.content);
    out
}

/// The whole screen: the visible notice, then the current phase.
pub fn browser(browser: &PostBrowser, now: Instant) -> String {
    let mut out = String::new();

    match browser.notice(now) {
        Some(Notice::Success { message, .. }) => {
            let _ = writeln!(out, "[ok] {message}\n");
        }
        Some(Notice::Error { message }) => {
            let _ = writeln!(out, "[error] {message}\n");
        }
        None => {}
    }

    match browser.phase() {
        Phase::Loading => {
            let _ = writeln!(out, "Loading posts...");
        }
        Phase::Error(message) => {
            let _ = writeln!(out, "{message}");
        }
        Phase::Ready(posts) if posts.is_empty() => {
            let _ = writeln!(out, "No posts available.");
        }
        Phase::Ready(posts) => {
            let _ = writeln!(out, "Blog Posts\n");
            let entries: Vec<String> = posts.iter().map(post_summary).collect();
            out.push_str(&entries.join("\n"));
        }
    }
    out
}
