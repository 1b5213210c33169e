pub mod fixtures;
pub mod test_db;
