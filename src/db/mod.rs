// Database access: connection setup and the version query

pub mod connection;
pub mod error;
pub mod query;

pub use connection::connect;
pub use error::DbError;
pub use query::{fetch_version, VERSION_QUERY};
