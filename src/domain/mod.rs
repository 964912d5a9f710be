pub mod article;
pub mod product;
pub mod validate;
