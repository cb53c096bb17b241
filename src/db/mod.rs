pub mod cms;
pub mod connection;

pub use connection::Database;
