use crate::domain::ThemeSettings;
use crate::templates::components::{site_nav, theme_switcher};
use chrono::{Datelike, Utc};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde_json::json;

const SITE_DESCRIPTION: &str = "MorTru provides accurate, transparent, and comprehensive real estate data to help you make informed decisions.";
const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

/// Per-request inputs every page needs from the layout.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub path: String,
    pub theme: ThemeSettings,
}

fn structured_data() -> String {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": "MorTru",
        "url": "https://www.mortru.com",
        "logo": "https://www.mortru.com/logo.png",
        "sameAs": [
            "https://www.facebook.com/mortru",
            "https://www.twitter.com/mortru",
            "https://www.linkedin.com/company/mortru"
        ]
    })
    .to_string()
}

pub fn site_layout(ctx: &PageContext, title: &str, content: Markup) -> Markup {
    let year = Utc::now().year();

    html! {
        (DOCTYPE)
        html lang="en" class={ "theme-" (ctx.theme.mode.name()) } style=(ctx.theme.root_style()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | MorTru" }
                meta name="description" content=(SITE_DESCRIPTION);
                meta name="keywords" content="real estate, property valuation, market insights, home buying, real estate data";
                meta property="og:type" content="website";
                meta property="og:locale" content="en_US";
                meta property="og:site_name" content="MorTru";
                meta property="og:url" content="https://www.mortru.com";
                meta property="og:image" content="https://www.mortru.com/og-image.jpg";
                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:site" content="@mortru";
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_SRC) defer {}
                script type="application/ld+json" { (PreEscaped(structured_data())) }
            }
            body {
                a href="#main-content" class="skip-link" { "Skip to main content" }
                header class="site-header" {
                    nav class="container nav-bar" {
                        (site_nav(&ctx.path))
                        (theme_switcher(&ctx.theme, &ctx.path))
                    }
                }
                main id="main-content" aria-label="Main content" {
                    article { (content) }
                }
                footer class="site-footer" aria-label="Footer" {
                    div class="container" {
                        p { "© " (year) " MorTru. All rights reserved." }
                    }
                }
            }
        }
    }
}
