pub mod config;
pub mod domain;
pub mod dto;

pub use domain::category::{Category, CategoryId};
pub use domain::product::{Product, ProductId};
pub use domain::product_image::{ProductImage, ProductImageId};
