//! Command execution.

use std::time::Instant;

use anyhow::{Context, bail};
use blog_client::{HttpPostsApi, Notice, Phase, PostBrowser, PostForm, PostsApi};

use crate::cli::{Cli, Command};
use crate::render;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let api = HttpPostsApi::new(&cli.api_url)?;
    tracing::debug!(api = %api.base_url(), "Using posts API");

    match cli.command {
        Command::List => list(&api).await,
        Command::Show { id } => {
            let post = api
                .get_post(&id)
                .await
                .with_context(|| format!("Failed to fetch post {id}"))?;
            print!("{}", render::post_detail(&post));
            Ok(())
        }
        Command::Create(args) => create(&api, args.into()).await,
        Command::Update { id, post } => {
            let form = PostForm::from(post);
            let updated = api
                .update_post(&id, &form.to_request())
                .await
                .with_context(|| format!("Failed to update post {id}"))?;
            print!("{}", render::post_detail(&updated));
            Ok(())
        }
        Command::Delete { id } => {
            api.delete_post(&id)
                .await
                .with_context(|| format!("Failed to delete post {id}"))?;
            println!("Deleted post {id}");
            Ok(())
        }
    }
}

async fn list<A>(api: &A) -> anyhow::Result<()>
where
    A: PostsApi + ?Sized,
{
    let mut browser = PostBrowser::new();
    browser.load(api).await;
    print!("{}", render::browser(&browser, Instant::now()));

    if let Phase::Error(message) = browser.phase() {
        bail!("{message}");
    }
    Ok(())
}

async fn create<A>(api: &A, form: PostForm) -> anyhow::Result<()>
where
    A: PostsApi + ?Sized,
{
    let mut browser = PostBrowser::new();
    *browser.form_mut() = form;

    let now = Instant::now();
    let created = browser.submit(api, now).await;
    if created.is_none() {
        let message = browser
            .notice(now)
            .map(Notice::message)
            .unwrap_or("Failed to create post")
            .to_string();
        bail!(message);
    }

    print!("{}", render::browser(&browser, now));
    if let Phase::Error(message) = browser.phase() {
        bail!("Post created but the list could not be reloaded: {message}");
    }
    Ok(())
}
