mod block;
mod content_error;
pub mod resolver;
mod source;

pub use block::{decode_response, ContentBlock, HOMEPAGE_SHORT_DESCRIPTION};
pub use content_error::ContentError;
pub use resolver::{resolve, Resolution};
pub use source::{ContentSource, HttpContentSource};
