//! Dashboard aggregations for the admin views.
//!
//! The backend exposes no user-list or comment-list endpoints; both admin
//! tabs are derived client-side from the approved + pending feeds.

use std::collections::HashMap;

use scroller_models::{Comment, Post};

/// One row of the admin users tab: an author aggregated across their posts.
#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub email: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub post_count: usize,
    /// Opaque backend timestamp of the newest post, compared lexically.
    pub last_post_date: String,
}

/// One row of the admin comments tab: a comment with its owning post.
#[derive(Debug, Clone)]
pub struct CommentRow {
    pub comment: Comment,
    pub post_id: String,
    pub post_title: String,
}

/// Aggregate post authors by email. Name and avatar come from the first
/// post seen for that author; posts without an author email are skipped.
pub fn summarize_authors(posts: &[Post]) -> Vec<UserSummary> {
    let mut by_email: HashMap<&str, UserSummary> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for post in posts {
        let Some(email) = post.author.email.as_deref() else {
            continue;
        };

        match by_email.get_mut(email) {
            Some(summary) => {
                summary.post_count += 1;
                if post.created_at > summary.last_post_date {
                    summary.last_post_date = post.created_at.clone();
                }
            }
            None => {
                order.push(email);
                by_email.insert(
                    email,
                    UserSummary {
                        email: email.to_string(),
                        name: post.author.name.clone(),
                        avatar_url: post.author.avatar_url.clone(),
                        post_count: 1,
                        last_post_date: post.created_at.clone(),
                    },
                );
            }
        }
    }

    order
        .into_iter()
        .filter_map(|email| by_email.remove(email))
        .collect()
}

/// Flatten every comment across the given posts, keeping feed order.
pub fn flatten_comments(posts: &[Post]) -> Vec<CommentRow> {
    posts
        .iter()
        .flat_map(|post| {
            post.comments.iter().map(|comment| CommentRow {
                comment: comment.clone(),
                post_id: post.id.clone(),
                post_title: post.title.clone(),
            })
        })
        .collect()
}
