//! Feed, submission, comments and votes.

use anyhow::Result;
use scroller_api::PostDraft;
use scroller_models::{PostStatus, VoteKind};

use crate::cli::CreateArgs;
use crate::commands::Ctx;
use crate::output;

pub async fn feed(ctx: &Ctx, user: Option<String>) -> Result<()> {
    let posts = ctx
        .api
        .get_posts(PostStatus::Approved, user.as_deref())
        .await?;

    if posts.is_empty() {
        println!("No posts yet.");
        return Ok(());
    }
    println!("{}", output::posts_table(&posts));
    Ok(())
}

pub async fn create(ctx: &Ctx, args: CreateArgs) -> Result<()> {
    let Some(user) = ctx.core.session.current().user else {
        output::notify_error("Login Required", "Please login or register to create posts.");
        return Ok(());
    };

    let mut draft = PostDraft::new(args.topic, args.title, args.content);
    if let Some(url) = args.image_url {
        draft = draft.with_image_url(url);
    }
    if let Some(path) = args.image_file {
        draft = draft.with_image_file(path);
    }

    let post = ctx.api.add_post(&draft, &user).await?;
    println!(
        "Post submitted for approval: {} ({})",
        post.title, post.id
    );
    Ok(())
}

pub async fn comment(ctx: &Ctx, post_id: String, content: String) -> Result<()> {
    let Some(user) = ctx.core.session.current().user else {
        output::notify_error("Login Required", "Please login or register to comment.");
        return Ok(());
    };

    ctx.api.add_comment(&post_id, &content, &user).await?;
    println!("Comment added.");
    Ok(())
}

pub async fn vote(ctx: &Ctx, post_id: String, kind: VoteKind) -> Result<()> {
    let verb = match kind {
        VoteKind::Like => "like",
        VoteKind::Dislike => "dislike",
    };

    if !ctx.core.session.is_authenticated() {
        output::notify_error(
            "Login Required",
            &format!("Please login or register to {verb} posts."),
        );
        return Ok(());
    }

    let posts = ctx.api.get_posts(PostStatus::Approved, None).await?;
    let Some(post) = posts.iter().find(|p| p.id == post_id) else {
        output::notify_error("Not found", &format!("No approved post with id {post_id}."));
        return Ok(());
    };

    let Some((likes, dislikes)) =
        ctx.core
            .votes
            .apply(&post_id, kind, post.likes, post.dislikes)
    else {
        println!("Already voted {verb} on this post.");
        return Ok(());
    };

    // The server performs its own increment; the counts shown are the
    // optimistic local ones, independent of the response.
    match kind {
        VoteKind::Like => ctx.api.like_post(&post_id).await?,
        VoteKind::Dislike => ctx.api.dislike_post(&post_id).await?,
    };

    println!("{}: {} likes / {} dislikes", post.title, likes, dislikes);
    Ok(())
}
