pub mod a001_product;
pub mod a002_attendant;
pub mod common;
