// templates/components/search_demo.rs

use crate::domain::property::demo_properties;
use crate::domain::{filter_properties, format_price, FilterCriteria, PropertyRecord};
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchView {
    #[default]
    Map,
    List,
}

impl SearchView {
    pub fn parse(s: Option<&str>) -> Self {
        match s {
            Some("list") => SearchView::List,
            _ => SearchView::Map,
        }
    }
}

const DEMO_MIN_PRICE: u64 = 300_000;

pub fn search_demo(view: SearchView, page_path: &str) -> Markup {
    let criteria = FilterCriteria {
        min_price: Some(DEMO_MIN_PRICE),
        ..Default::default()
    };
    let properties = filter_properties(&demo_properties(), &criteria);

    html! {
        section id="search-demo" class="section muted-bg" aria-labelledby="search-demo-title" {
            h2 id="search-demo-title" class="section-title" { "Experience MorTru in Action" }
            div class="search-demo card" {
                div class="search-bar" {
                    input
                        type="text"
                        placeholder="Enter location, ZIP code, or address"
                        aria-label="Search for properties";
                    div class="view-toggle" {
                        (view_link(page_path, SearchView::Map, view, "Switch to map view", "Map"))
                        (view_link(page_path, SearchView::List, view, "Switch to list view", "List"))
                    }
                }
                div class="search-results" {
                    @match view {
                        SearchView::Map => {
                            div class="map-placeholder" role="img" aria-label="Map view of properties" {}
                        }
                        SearchView::List => {
                            @for property in &properties {
                                (property_row(property))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn view_link(page_path: &str, target: SearchView, current: SearchView, label: &str, text: &str) -> Markup {
    let param = match target {
        SearchView::Map => "map",
        SearchView::List => "list",
    };
    let (pressed, class) = if target == current {
        ("true", "btn btn-small btn-primary")
    } else {
        ("false", "btn btn-small btn-outline")
    };

    html! {
        a href={ (page_path) "?view=" (param) "#search-demo" }
            class=(class)
            aria-pressed=(pressed)
            aria-label=(label)
        { (text) }
    }
}

fn property_row(property: &PropertyRecord) -> Markup {
    // A listing without a usable area still renders; it just has no per-sqft figure.
    let per_sqft = match property.price_per_sqft() {
        Ok(value) => format!("{}/sqft", format_price(value)),
        Err(_) => "Price per sqft unavailable".to_string(),
    };

    html! {
        div class="property-row" data-property-id=(property.id) {
            div {
                h3 { (property.address) }
                p class="price" { (format_price(property.price as f64)) }
                p class="muted small" {
                    (property.bedrooms) " beds • " (format!("{}", property.bathrooms)) " baths • " (property.sqft) " sqft"
                }
                p class="muted small per-sqft" { (per_sqft) }
            }
            div class="thumb" role="img" aria-label={ "Property at " (property.address) } {}
        }
    }
}
