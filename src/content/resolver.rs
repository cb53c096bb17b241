// src/content/resolver.rs

use crate::content::{ContentBlock, ContentSource};
use tracing::{debug, warn};

pub const FALLBACK_NOTICE: &str = "Failed to load latest content. Displaying default content.";

/// What a view should show: one whole block, plus an optional inline notice.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub displayed: ContentBlock,
    pub error_notice: Option<&'static str>,
}

/// Swaps fallback content for remote content, at most once.
///
/// The resolver starts out showing the fallback. The first call to [`activate`]
/// issues exactly one fetch; later calls return the settled state without touching
/// the source again. Failures of any kind keep the fallback and set
/// [`FALLBACK_NOTICE`]; nothing is returned to the caller as an error.
///
/// [`activate`]: ContentResolver::activate
pub struct ContentResolver<'a> {
    source: &'a dyn ContentSource,
    current: Resolution,
    activated: bool,
}

impl<'a> ContentResolver<'a> {
    pub fn new(fallback: ContentBlock, source: &'a dyn ContentSource) -> Self {
        Self {
            source,
            current: Resolution {
                displayed: fallback,
                error_notice: None,
            },
            activated: false,
        }
    }

    pub fn activate(&mut self) -> &Resolution {
        if self.activated {
            return &self.current;
        }
        self.activated = true;

        match self.source.fetch() {
            Ok(block) => {
                debug!(title = %block.title, "remote content loaded");
                self.current = Resolution {
                    displayed: block,
                    error_notice: None,
                };
            }
            Err(err) => {
                warn!(error = %err, "failed to load remote content, keeping fallback");
                self.current.error_notice = Some(FALLBACK_NOTICE);
            }
        }

        &self.current
    }

    pub fn current(&self) -> &Resolution {
        &self.current
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn into_resolution(self) -> Resolution {
        self.current
    }
}

/// One-shot form of [`ContentResolver`]: activate once and hand back the result.
pub fn resolve(fallback: ContentBlock, source: &dyn ContentSource) -> Resolution {
    let mut resolver = ContentResolver::new(fallback, source);
    resolver.activate();
    resolver.into_resolution()
}
