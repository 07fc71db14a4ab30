pub mod listing;
pub mod product;
