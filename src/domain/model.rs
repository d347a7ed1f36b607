use crate::utils::error::{ReactionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl ReactionKind {
    /// URL 中的動作片段
    pub fn path_segment(self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Dislike => "dislike",
        }
    }

    /// 回應中帶計數的欄位
    pub fn count_field(self) -> &'static str {
        match self {
            ReactionKind::Like => "likes",
            ReactionKind::Dislike => "dislikes",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for ReactionKind {
    type Err = ReactionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "like" => Ok(ReactionKind::Like),
            "dislike" => Ok(ReactionKind::Dislike),
            other => Err(ReactionError::InvalidConfigValueError {
                field: "kind".to_string(),
                value: other.to_string(),
                reason: "Expected `like` or `dislike`".to_string(),
            }),
        }
    }
}

/// One activation's worth of work. Lives only as long as its network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionRequest {
    pub article_slug: String,
    pub kind: ReactionKind,
}

impl ReactionRequest {
    pub fn new(article_slug: impl Into<String>, kind: ReactionKind) -> Self {
        Self {
            article_slug: article_slug.into(),
            kind,
        }
    }

    /// Path segments below the server root: `article/{slug}/{like|dislike}/`.
    pub fn path_segments(&self) -> [&str; 4] {
        ["article", self.article_slug.as_str(), self.kind.path_segment(), ""]
    }

    pub fn path(&self) -> String {
        format!("/{}", self.path_segments().join("/"))
    }
}

/// Count text as it should appear in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionCount {
    pub kind: ReactionKind,
    pub text: String,
}

impl ReactionCount {
    pub fn from_response(kind: ReactionKind, body: &serde_json::Value) -> Result<Self> {
        let field = kind.count_field();
        let text = match body.get(field) {
            None => {
                return Err(ReactionError::MissingFieldError {
                    field: field.to_string(),
                })
            }
            // null 清空文字，與 jQuery `.text(null)` 相同
            Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Number(n)) => render_number(n),
            Some(serde_json::Value::Bool(b)) => b.to_string(),
            Some(other) => {
                return Err(ReactionError::UnrenderableFieldError {
                    field: field.to_string(),
                    value: other.to_string(),
                })
            }
        };

        Ok(Self { kind, text })
    }
}

/// Integral values print without a fraction (`5.0` shows as `5`).
fn render_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
