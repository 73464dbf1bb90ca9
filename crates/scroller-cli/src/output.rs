//! Terminal output helpers: notifications, tables and grammar highlights.

use colored::Colorize;
use comfy_table::{Table, presets::UTF8_FULL};
use scroller_ai::Segment;
use scroller_core::Notification;
use scroller_models::Post;

/// Print a transient notification the way the web UI shows a toast.
pub fn notify(notification: &Notification) {
    println!(
        "{} {}",
        notification.title.bold(),
        notification.description
    );
}

/// Print an error notification. State is left unchanged by the caller.
pub fn notify_error(title: &str, description: &str) {
    eprintln!("{} {}", title.red().bold(), description);
}

pub fn posts_table(posts: &[Post]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "id", "title", "topic", "author", "likes", "dislikes", "comments", "status",
    ]);
    for post in posts {
        table.add_row(vec![
            post.id.clone(),
            post.title.clone(),
            post.topic.clone(),
            post.author.name.clone(),
            post.likes.to_string(),
            post.dislikes.to_string(),
            post.comments.len().to_string(),
            post.status.as_str().to_string(),
        ]);
    }
    table
}

pub fn users_table(summaries: &[scroller_core::moderation::UserSummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["email", "name", "posts", "last post"]);
    for summary in summaries {
        table.add_row(vec![
            summary.email.clone(),
            summary.name.clone(),
            summary.post_count.to_string(),
            summary.last_post_date.clone(),
        ]);
    }
    table
}

pub fn comments_table(rows: &[scroller_core::moderation::CommentRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["id", "author", "comment", "post"]);
    for row in rows {
        table.add_row(vec![
            row.comment.id.clone(),
            row.comment.author.name.clone(),
            row.comment.content.clone(),
            row.post_title.clone(),
        ]);
    }
    table
}

/// Render reconciled grammar segments inline: flagged phrases are
/// highlighted, everything else passes through untouched.
pub fn render_segments(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => text.clone(),
            Segment::Annotated { text, .. } => text.yellow().underline().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_segments_preserves_plain_text() {
        colored::control::set_override(false);
        let segments = vec![
            Segment::Plain("a ".to_string()),
            Segment::Annotated {
                text: "b".to_string(),
                corrected: "B".to_string(),
                explanation: "caps".to_string(),
            },
            Segment::Plain(" c".to_string()),
        ];
        assert_eq!(render_segments(&segments), "a b c");
        colored::control::unset_override();
    }
}
