//! Post, comment and vote endpoints.

use std::path::PathBuf;

use scroller_models::{Author, Comment, Post, PostStatus, User};
use serde::Serialize;
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::{ApiError, Result};

/// Placeholder image host used when a draft carries no image of its own.
const PLACEHOLDER_IMAGE_BASE: &str = "https://placehold.co/600x400.png";

/// A post submission before it is sent to the backend. The backend fills in
/// id, author, timestamps, counters and the initial pending status.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub topic: String,
    pub title: String,
    pub content: String,
    pub image_url: String,
    /// Local file to upload first; the resulting URL replaces `image_url`.
    pub image_file: Option<PathBuf>,
}

impl PostDraft {
    pub fn new(
        topic: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let image_url = format!(
            "{}?text={}",
            PLACEHOLDER_IMAGE_BASE,
            urlencoding::encode(&title)
        );
        Self {
            topic: topic.into(),
            title,
            content: content.into(),
            image_url,
            image_file: None,
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    pub fn with_image_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.image_file = Some(path.into());
        self
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewPostBody<'a> {
    topic: &'a str,
    title: &'a str,
    content: &'a str,
    image_url: &'a str,
    author: Author,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewCommentBody<'a> {
    content: &'a str,
    author_name: Option<&'a str>,
    author_email: Option<&'a str>,
}

#[derive(Serialize)]
struct StatusBody {
    status: PostStatus,
}

impl ApiClient {
    /// Fetch the ordered feed for a status, optionally scoped to one author.
    pub async fn get_posts(&self, status: PostStatus, user_id: Option<&str>) -> Result<Vec<Post>> {
        let mut query: Vec<(&str, &str)> = vec![("status", status.as_str())];
        if let Some(user_id) = user_id {
            query.push(("userId", user_id));
        }

        let response = self
            .client
            .get(self.url("/posts"))
            .query(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::status(
                response.status().as_u16(),
                "Failed to fetch posts",
            ));
        }

        Ok(response.json().await?)
    }

    /// Submit a new post with a denormalized author snapshot built from
    /// `user`. A draft carrying a local image file is uploaded first and the
    /// returned URL substituted for the image field. The two steps have no
    /// compensating action: a failed create can leave an orphaned upload.
    pub async fn add_post(&self, draft: &PostDraft, user: &User) -> Result<Post> {
        let image_url = match &draft.image_file {
            Some(path) => self.upload_image(path, &draft.image_url).await?,
            None => draft.image_url.clone(),
        };

        let body = NewPostBody {
            topic: &draft.topic,
            title: &draft.title,
            content: &draft.content,
            image_url: &image_url,
            author: Author::snapshot_of(user),
        };

        let response = self
            .client
            .post(self.url("/posts"))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::status(
                status,
                format!("Failed to create post: {} {}", status, text),
            ));
        }

        Ok(response.json().await?)
    }

    /// Upload a local image, returning the URL the backend stored it under.
    /// The backend answers with `{"url": ...}` but a plain-text body is
    /// tolerated; an empty body keeps the fallback URL.
    async fn upload_image(&self, path: &std::path::Path, fallback_url: &str) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime = mime_guess::from_path(path).first_or_octet_stream();

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime.essence_str())?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("/uploads"))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::status(
                status,
                format!("Failed to upload image: {} {}", status, text),
            ));
        }

        let body = response.text().await.unwrap_or_default();
        if let Ok(json) = serde_json::from_str::<Value>(&body)
            && let Some(url) = json.get("url").and_then(Value::as_str)
        {
            tracing::debug!(url, "Image uploaded");
            return Ok(url.to_string());
        }
        if !body.trim().is_empty() {
            return Ok(body);
        }
        Ok(fallback_url.to_string())
    }

    /// Add a comment carrying the author's name and email snapshot.
    pub async fn add_comment(&self, post_id: &str, content: &str, user: &User) -> Result<Comment> {
        let body = NewCommentBody {
            content,
            author_name: user.display_name.as_deref(),
            author_email: user.email.as_deref(),
        };

        let response = self
            .client
            .post(self.url(&format!("/posts/{}/comments", post_id)))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            // The error body is intentionally not parsed for this endpoint.
            return Err(ApiError::status(
                response.status().as_u16(),
                "Failed to add comment",
            ));
        }

        Ok(response.json().await?)
    }

    /// Moderate a post: move it between pending and approved.
    pub async fn update_post_status(&self, post_id: &str, status: PostStatus) -> Result<Post> {
        let response = self
            .client
            .put(self.url(&format!("/posts/{}/status", post_id)))
            .json(&StatusBody { status })
            .send()
            .await?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::status(
                code,
                format!("Failed to update status: {} {}", code, text),
            ));
        }

        Ok(response.json().await?)
    }

    /// Delete a post. Returns whether the backend acknowledged the delete.
    pub async fn delete_post(&self, post_id: &str) -> Result<bool> {
        let response = self
            .client
            .delete(self.url(&format!("/posts/{}", post_id)))
            .send()
            .await?;
        Ok(response.status().is_success())
    }

    /// Record a like. The server performs the increment.
    pub async fn like_post(&self, post_id: &str) -> Result<Post> {
        self.vote(post_id, "like", "Failed to like post").await
    }

    /// Record a dislike. The server performs the increment.
    pub async fn dislike_post(&self, post_id: &str) -> Result<Post> {
        self.vote(post_id, "dislike", "Failed to dislike post").await
    }

    async fn vote(&self, post_id: &str, verb: &str, failure: &str) -> Result<Post> {
        let response = self
            .client
            .post(self.url(&format!("/posts/{}/{}", post_id, verb)))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::status(response.status().as_u16(), failure));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_user() -> User {
        User {
            id: Some(1),
            email: Some("ada@example.com".to_string()),
            display_name: Some("Ada".to_string()),
            photo_url: None,
            role: None,
        }
    }

    fn post_json(id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "author": {"name": "Ada", "email": "ada@example.com", "avatarUrl": null},
            "topic": "Rust",
            "title": "Hello",
            "imageUrl": "http://img",
            "content": "body",
            "createdAt": "2024-01-01T00:00:00Z",
            "status": "approved",
            "likes": 0,
            "dislikes": 0,
            "comments": []
        })
    }

    #[tokio::test]
    async fn get_posts_sends_status_and_user_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .and(query_param("status", "approved"))
            .and(query_param("userId", "7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vec![post_json("p1")]))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let posts = client
            .get_posts(PostStatus::Approved, Some("7"))
            .await
            .unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "p1");
    }

    #[tokio::test]
    async fn get_posts_failure_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let err = client.get_posts(PostStatus::Approved, None).await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert_eq!(err.to_string(), "Failed to fetch posts");
    }

    #[tokio::test]
    async fn add_post_with_file_uses_uploaded_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/uploads"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"url": "http://cdn/img-1.png"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(201).set_body_json(post_json("p2")))
            .mount(&server)
            .await;

        let mut file = tempfile::NamedTempFile::with_suffix(".png").unwrap();
        file.write_all(b"fake image bytes").unwrap();

        let draft = PostDraft::new("Rust", "Hello", "body").with_image_file(file.path());
        let client = ApiClient::new(server.uri());
        client.add_post(&draft, &sample_user()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let create = requests
            .iter()
            .find(|r| r.url.path() == "/posts")
            .expect("create request");
        let body: serde_json::Value = serde_json::from_slice(&create.body).unwrap();
        assert_eq!(body["imageUrl"], "http://cdn/img-1.png");
        assert_eq!(body["author"]["name"], "Ada");
    }

    #[tokio::test]
    async fn upload_failure_composes_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/uploads"))
            .respond_with(ResponseTemplate::new(500).set_body_string("disk full"))
            .mount(&server)
            .await;

        let mut file = tempfile::NamedTempFile::with_suffix(".png").unwrap();
        file.write_all(b"bytes").unwrap();

        let draft = PostDraft::new("t", "t", "c").with_image_file(file.path());
        let client = ApiClient::new(server.uri());
        let err = client.add_post(&draft, &sample_user()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to upload image: 500 disk full");
    }

    #[tokio::test]
    async fn add_post_without_file_keeps_draft_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(201).set_body_json(post_json("p3")))
            .mount(&server)
            .await;

        let draft = PostDraft::new("Rust", "Hello world", "body");
        let client = ApiClient::new(server.uri());
        client.add_post(&draft, &sample_user()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        let image_url = body["imageUrl"].as_str().unwrap();
        assert!(image_url.starts_with("https://placehold.co/600x400.png?text="));
        assert!(image_url.contains("Hello%20world"));
    }

    #[tokio::test]
    async fn add_comment_failure_is_generic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/posts/p1/comments"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"error": "too long"})),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let err = client
            .add_comment("p1", "hello", &sample_user())
            .await
            .unwrap_err();
        // Body is not parsed for this endpoint.
        assert_eq!(err.to_string(), "Failed to add comment");
    }

    #[tokio::test]
    async fn delete_post_maps_http_ok_to_bool() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/posts/p1"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/posts/p2"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        assert!(client.delete_post("p1").await.unwrap());
        assert!(!client.delete_post("p2").await.unwrap());
    }
}
