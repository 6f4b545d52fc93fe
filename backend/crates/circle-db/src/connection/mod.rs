pub mod database;
pub(crate) mod row;
