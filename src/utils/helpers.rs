use actix_web::{HttpResponse, http::StatusCode, http::header::ContentType};
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn self_link(href: impl Into<String>) -> Self {
        Self {
            rel: "self".to_string(),
            href: href.into(),
        }
    }
}

/// Response envelope. A success carries `data` (and optionally `links`), a
/// failure carries only `errors`.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_links(data: T, links: Vec<Link>) -> Self {
        Self {
            data: Some(data),
            links,
            errors: Vec::new(),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self::errors(vec![message])
    }

    pub fn errors(messages: Vec<String>) -> Self {
        Self {
            data: None,
            links: Vec::new(),
            errors: messages,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Serializes the envelope up front so an encoding failure becomes a bare
    /// 500 rather than a partial body.
    pub fn to_response(&self, status: StatusCode) -> HttpResponse {
        match serde_json::to_vec(self) {
            Ok(body) => HttpResponse::build(status)
                .content_type(ContentType::json())
                .body(body),
            Err(e) => {
                error!("Failed to serialize response envelope: {}", e);
                HttpResponse::InternalServerError().finish()
            }
        }
    }
}
