mod error;
mod helpers;
mod models;
mod mysql_client_wrapper;
mod quoting;
mod schema_dump;
mod schema_reader;

pub use error::*;
pub use models::*;
pub use mysql_client_wrapper::MysqlConnectionWrapper;
pub use schema_dump::*;
pub use schema_reader::SchemaReader;

pub(crate) fn default<T: Default>() -> T {
    T::default()
}
