//! Moderation commands, gated on the admin flag.

use anyhow::Result;
use scroller_core::moderation;
use scroller_models::PostStatus;

use crate::cli::AdminCommands;
use crate::commands::Ctx;
use crate::output;

pub async fn run(ctx: &Ctx, command: AdminCommands) -> Result<()> {
    if !ctx.core.session.is_admin() {
        output::notify_error("Admin only", "This command requires an admin session.");
        return Ok(());
    }

    match command {
        AdminCommands::Pending => {
            let posts = ctx.api.get_posts(PostStatus::Pending, None).await?;
            if posts.is_empty() {
                println!("No posts awaiting approval.");
            } else {
                println!("{}", output::posts_table(&posts));
            }
        }
        AdminCommands::Approve { post_id } => {
            let post = ctx
                .api
                .update_post_status(&post_id, PostStatus::Approved)
                .await?;
            println!("Approved: {} ({})", post.title, post.id);
        }
        AdminCommands::Reject { post_id } => {
            if ctx.api.delete_post(&post_id).await? {
                println!("Rejected and deleted post {post_id}.");
            } else {
                output::notify_error("Not found", &format!("No post with id {post_id}."));
            }
        }
        AdminCommands::Users => {
            let posts = all_posts(ctx).await?;
            let summaries = moderation::summarize_authors(&posts);
            if summaries.is_empty() {
                println!("No authors yet.");
            } else {
                println!("{}", output::users_table(&summaries));
            }
        }
        AdminCommands::Comments => {
            let posts = all_posts(ctx).await?;
            let rows = moderation::flatten_comments(&posts);
            if rows.is_empty() {
                println!("No comments yet.");
            } else {
                println!("{}", output::comments_table(&rows));
            }
        }
    }
    Ok(())
}

/// The dashboard views are derived from both feeds; there is no dedicated
/// endpoint for them.
async fn all_posts(ctx: &Ctx) -> Result<Vec<scroller_models::Post>> {
    let mut posts = ctx.api.get_posts(PostStatus::Approved, None).await?;
    posts.extend(ctx.api.get_posts(PostStatus::Pending, None).await?);
    Ok(posts)
}
