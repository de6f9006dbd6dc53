//! CLI argument definitions using clap
//!
//! Commands:
//! - blog list
//! - blog show <id>
//! - blog create --title <title> --content <content> [--author <author>] [--tags <a,b>]
//! - blog update <id> --title <title> --content <content> [--author <author>] [--tags <a,b>]
//! - blog delete <id>

use blog_client::PostForm;
use blog_client::api::DEFAULT_API_URL;
use clap::{Args, Parser, Subcommand};

/// Browse and publish blog posts
#[derive(Parser, Debug)]
#[command(name = "blog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the posts API
    #[arg(long, global = true, env = "BLOG_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every post, newest first
    List,

    /// Show one post
    Show {
        /// Post id
        id: String,
    },

    /// Create a post, then show the refreshed list
    Create(PostArgs),

    /// Replace the fields of an existing post
    Update {
        /// Post id
        id: String,

        #[command(flatten)]
        post: PostArgs,
    },

    /// Delete a post
    Delete {
        /// Post id
        id: String,
    },
}

/// Form fields of a post.
#[derive(Args, Debug, Clone, Default)]
pub struct PostArgs {
    /// Post title
    #[arg(long, default_value = "")]
    pub title: String,

    /// Post body
    #[arg(long, default_value = "")]
    pub content: String,

    /// Author name; the server uses "Anonymous" when blank
    #[arg(long, default_value = "")]
    pub author: String,

    /// Comma separated tags
    #[arg(long, default_value = "")]
    pub tags: String,
}

impl From<PostArgs> for PostForm {
    fn from(args: PostArgs) -> Self {
        Self {
            title: args.title,
            author: args.author,
            content: args.content,
            tags: args.tags,
        }
    }
}
