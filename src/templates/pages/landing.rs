// templates/pages/landing.rs

use crate::domain::Persona;
use crate::templates::components::{
    cta_banner, faq_list, features_grid, hero, how_it_works, search_demo, testimonials,
    SearchView,
};
use crate::templates::{site_layout, PageContext};
use maud::{html, Markup};

/// Full landing page for one persona, top to bottom.
pub fn landing_page(ctx: &PageContext, persona: Persona, view: SearchView) -> Markup {
    let copy = persona.landing();

    site_layout(
        ctx,
        copy.page_title,
        html! {
            div class={ "landing landing-" (persona.slug()) } {
                (hero(copy.hero_title, copy.hero_description, copy.hero_cta))
                (features_grid(persona))
                (testimonials(persona))
                (how_it_works(persona))
                (search_demo(view, &persona.path()))
                (faq_list(persona))
                (cta_banner(copy.cta_title, copy.cta_description, copy.cta_text))
            }
        },
    )
}
