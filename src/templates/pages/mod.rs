pub mod connect;
pub mod home;
pub mod landing;

pub use connect::connect_page;
pub use home::home_page;
pub use landing::landing_page;
