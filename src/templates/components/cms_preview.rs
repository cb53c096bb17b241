// templates/components/cms_preview.rs

use crate::content::{ContentBlock, Resolution};
use maud::{html, Markup};

pub const CMS_FRAGMENT_PATH: &str = "/fragments/cms/homepage";

/// First paint: the fallback block, which asks for the resolved block once it has loaded
/// and swaps itself out for the response.
pub fn cms_preview(fallback: &ContentBlock) -> Markup {
    html! {
        section
            id="cms-preview"
            class="section cms-preview"
            aria-labelledby="cms-title"
            hx-get=(CMS_FRAGMENT_PATH)
            hx-trigger="load"
            hx-swap="outerHTML"
        {
            (block_body(fallback, None))
        }
    }
}

/// The settled block, with the inline notice when the fallback had to stay.
pub fn cms_block(resolution: &Resolution) -> Markup {
    html! {
        section id="cms-preview" class="section cms-preview" aria-labelledby="cms-title" {
            (block_body(&resolution.displayed, resolution.error_notice))
        }
    }
}

fn block_body(block: &ContentBlock, notice: Option<&str>) -> Markup {
    html! {
        h2 id="cms-title" class="section-title" { (block.title) }
        @if let Some(notice) = notice {
            p class="notice notice-error fade-in" role="status" { (notice) }
        }
        p class="lead fade-in-up delay-200" { (block.description) }
    }
}
