pub mod competitor;
pub mod csv_write;
pub mod seed;
