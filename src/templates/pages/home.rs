// templates/pages/home.rs

use crate::content::ContentBlock;
use crate::templates::{components::cms_preview, site_layout, PageContext};
use maud::{html, Markup};

pub fn home_page(ctx: &PageContext, fallback: &ContentBlock) -> Markup {
    site_layout(
        ctx,
        "Discover the True Value of Real Estate",
        html! {
            div class="container" {
                (cms_preview(fallback))
            }
        },
    )
}
