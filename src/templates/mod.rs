pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{cms_block, error_page};
pub use layouts::{site_layout, PageContext};
