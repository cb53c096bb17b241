pub mod contact;
pub mod pagination;
pub mod persona;
pub mod pricing;
pub mod property;
pub mod theme;

pub use persona::Persona;
pub use pricing::{format_price, price_per_area, InvalidAreaError};
pub use property::{filter_properties, FilterCriteria, PropertyRecord};
pub use theme::ThemeSettings;
