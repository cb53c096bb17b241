// templates/components/persona_sections.rs

use crate::domain::Persona;
use crate::templates::components::{icon, section};
use maud::{html, Markup};

pub fn features_grid(persona: Persona) -> Markup {
    section(
        "features",
        "Why Choose MorTru?",
        html! {
            div class="grid grid-3" {
                @for feature in persona.features() {
                    div class="card feature" {
                        (icon(feature.icon))
                        h3 { (feature.title) }
                        p class="muted" { (feature.description) }
                    }
                }
            }
        },
    )
}

pub fn testimonials(persona: Persona) -> Markup {
    section(
        "testimonials",
        "What Our Users Say",
        html! {
            div class="grid grid-3" {
                @for t in persona.testimonials() {
                    figure class="card testimonial" {
                        blockquote class="muted" { "\u{201c}" (t.quote) "\u{201d}" }
                        figcaption {
                            span class="avatar" aria-hidden="true" {}
                            div {
                                p class="author" { (t.author) }
                                p class="muted small" { (t.role) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn how_it_works(persona: Persona) -> Markup {
    section(
        "how-it-works",
        "How MorTru Works",
        html! {
            ol class="steps" {
                @for step in persona.steps() {
                    li class="step" {
                        div class="step-icon" { (icon(step.icon)) }
                        div {
                            h3 { (step.title) }
                            p class="muted" { (step.description) }
                        }
                    }
                }
            }
        },
    )
}

/// Accordion built on `<details>`, so it opens and closes without script.
pub fn faq_list(persona: Persona) -> Markup {
    section(
        "faq",
        "Frequently Asked Questions",
        html! {
            div class="faq" {
                @for (i, faq) in persona.faqs().iter().enumerate() {
                    details class="faq-item" {
                        summary aria-controls={ "faq-answer-" (i) } { (faq.question) }
                        div id={ "faq-answer-" (i) } class="faq-answer" {
                            p class="muted" { (faq.answer) }
                        }
                    }
                }
            }
        },
    )
}
