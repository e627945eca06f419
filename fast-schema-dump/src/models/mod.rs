mod check_constraint;
mod column;
mod foreign_key;
mod index;
mod schema;
mod table;

pub use check_constraint::*;
pub use column::*;
pub use foreign_key::*;
pub use index::*;
pub use schema::*;
pub use table::*;
