//! Saved-post commands.

use anyhow::Result;
use scroller_models::PostStatus;

use crate::commands::Ctx;
use crate::output;

pub fn toggle(ctx: &mut Ctx, post_id: String) -> Result<()> {
    ctx.core.saved_posts.toggle_saved_post(&post_id)?;
    // The notification was deferred until after the commit; show it now.
    ctx.drain_notifications();
    Ok(())
}

pub async fn list(ctx: &Ctx) -> Result<()> {
    let ids = ctx.core.saved_posts.saved_ids()?;
    if ids.is_empty() {
        println!("No saved posts.");
        return Ok(());
    }

    let posts = ctx.api.get_posts(PostStatus::Approved, None).await?;
    let saved: Vec<_> = posts
        .into_iter()
        .filter(|post| ids.contains(&post.id))
        .collect();

    if !saved.is_empty() {
        println!("{}", output::posts_table(&saved));
    }

    // Bookmarks whose posts are no longer in the approved feed.
    let found: Vec<&str> = saved.iter().map(|p| p.id.as_str()).collect();
    for id in ids.iter().filter(|id| !found.contains(&id.as_str())) {
        println!("{} (no longer available)", id);
    }
    Ok(())
}
