pub mod footer;
pub mod header;
pub mod to_top;
