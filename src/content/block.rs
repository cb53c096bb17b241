// src/content/block.rs

use crate::content::ContentError;
use serde::{Deserialize, Serialize};

pub const HOMEPAGE_TITLE: &str = "Empower Your Home Search with AI";
pub const HOMEPAGE_DESCRIPTION: &str = "MorTru revolutionizes home buying by empowering homebuyers with AI-driven search tools, enabling mortgage lenders to provide personalized financing options, and helping real estate agents match qualified buyers with their perfect homes through our intelligent mortgage matching platform.";
/// Shorter copy the CMS API attaches to its error payload.
pub const HOMEPAGE_SHORT_DESCRIPTION: &str =
    "MorTru revolutionizes home buying with AI-driven tools and intelligent mortgage matching.";

/// A title plus body text, rendered as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub title: String,
    pub description: String,
}

impl ContentBlock {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Copy compiled into the binary and shown until (or instead of) the CMS version.
    pub fn homepage_default() -> Self {
        Self::new(HOMEPAGE_TITLE, HOMEPAGE_DESCRIPTION)
    }
}

// Wire shape of the CMS response. Every field is optional so that an error payload
// and a partial payload both decode and can be rejected explicitly.
#[derive(Debug, Deserialize)]
struct CmsPayload {
    error: Option<String>,
    title: Option<String>,
    description: Option<String>,
}

/// Turns a raw CMS response into a content block.
///
/// Any non-2xx status fails, and so does a body carrying an `error` field, even when
/// that body also has a title and description. A body missing either field is
/// rejected rather than partially applied.
pub fn decode_response(status: u16, body: &str) -> Result<ContentBlock, ContentError> {
    if !(200..300).contains(&status) {
        return Err(ContentError::Status(status));
    }

    let payload: CmsPayload =
        serde_json::from_str(body).map_err(|e| ContentError::Malformed(e.to_string()))?;

    if let Some(err) = payload.error {
        return Err(ContentError::Payload(err));
    }

    match (payload.title, payload.description) {
        (Some(title), Some(description)) => Ok(ContentBlock { title, description }),
        _ => Err(ContentError::Malformed(
            "missing title or description".to_string(),
        )),
    }
}
