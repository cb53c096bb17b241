pub mod site;

pub use site::{site_layout, PageContext};
