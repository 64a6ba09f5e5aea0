pub mod bucket;
pub mod payload;
