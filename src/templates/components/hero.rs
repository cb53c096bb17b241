use maud::{html, Markup};

pub fn hero(title: &str, description: &str, cta_text: &str) -> Markup {
    html! {
        section class="hero" aria-labelledby="hero-title" {
            h1 id="hero-title" class="fade-in-up" { (title) }
            p class="lead fade-in-up delay-200" { (description) }
            a href="/connect" class="btn btn-primary fade-in-up delay-400" aria-label=(cta_text) {
                (cta_text)
            }
        }
    }
}

pub fn cta_banner(title: &str, description: &str, cta_text: &str) -> Markup {
    html! {
        section class="cta" {
            h2 { (title) }
            p class="lead" { (description) }
            a href="/connect" class="btn btn-inverse" { (cta_text) }
        }
    }
}
