use maud::{html, Markup};

pub mod cms_preview;
pub mod contact_form;
pub mod error;
pub mod hero;
pub mod nav;
pub mod persona_sections;
pub mod search_demo;
pub mod theme_switcher;

pub use cms_preview::{cms_block, cms_preview};
pub use contact_form::contact_form;
pub use error::error_page;
pub use hero::{cta_banner, hero};
pub use nav::site_nav;
pub use persona_sections::{faq_list, features_grid, how_it_works, testimonials};
pub use search_demo::{search_demo, SearchView};
pub use theme_switcher::theme_switcher;

/// Titled section wrapper shared by most page blocks.
pub fn section(id: &str, title: &str, body: Markup) -> Markup {
    let title_id = format!("{id}-title");
    html! {
        section id=(id) class="section" aria-labelledby=(title_id) {
            h2 id=(title_id) class="section-title" { (title) }
            (body)
        }
    }
}

/// Decorative icon placeholder; the stylesheet maps `icon-<name>` to artwork.
pub fn icon(name: &str) -> Markup {
    html! {
        span class={ "icon icon-" (name) } aria-hidden="true" {}
    }
}
