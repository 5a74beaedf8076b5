//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a post. Missing or empty fields take server defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
}

/// Request to update a post. Missing or empty fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
}

/// Query string for `GET /api/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// A post as returned by the API. Timestamps are RFC 3339 strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub category: String,
    pub author: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A listing of posts along with the category navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub categories: Vec<String>,
    /// Set on category listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Set on search results, lowercased as matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_fields_are_optional() {
        let req: CreatePostRequest = serde_json::from_str(r#"{"title":"Hi"}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("Hi"));
        assert!(req.body.is_none());
        assert!(req.author.is_none());
    }

    #[test]
    fn test_list_response_omits_unset_context() {
        let list = PostListResponse {
            posts: Vec::new(),
            categories: vec!["Home".to_string()],
            category: None,
            search: None,
        };
        let value = serde_json::to_value(&list).unwrap();
        assert!(value.get("category").is_none());
        assert!(value.get("search").is_none());
    }
}
