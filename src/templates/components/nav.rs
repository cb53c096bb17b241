use maud::{html, Markup};

pub struct NavItem {
    pub name: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { name: "Home", description: "Back to homepage", href: "/" },
    NavItem { name: "Homebuyers", description: "Find your dream home", href: "/homeowner" },
    NavItem { name: "Lenders", description: "Optimize lending process", href: "/mortgage-company" },
    NavItem { name: "Agents", description: "Grow your business", href: "/real-estate-agent" },
    NavItem { name: "Connect", description: "Get in touch", href: "/connect" },
];

pub fn site_nav(current_path: &str) -> Markup {
    html! {
        a href="/" class="logo" { "MorTru" }
        details class="site-nav" {
            summary aria-label="Toggle navigation menu" { "Menu" }
            ul {
                @for item in &NAV_ITEMS {
                    li {
                        a href=(item.href)
                            title=(item.description)
                            aria-current=[(item.href == current_path).then_some("page")]
                        { (item.name) }
                    }
                }
            }
        }
    }
}
