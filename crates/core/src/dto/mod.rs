//! DTO shapes for the HTTP boundary and the conversion functions between
//! them and the storage entities. Conversions are hand-written, total over
//! every field, and pure; server-generated identifiers are passed in by the
//! caller rather than minted here.

pub mod category;
pub mod product;
pub mod product_image;

pub use category::{
    categories_to_results, category_from_create, category_from_update, category_to_get_by_id,
    category_to_result, CreateCategoryDto, GetByIdCategoryDto, ResultCategoryDto,
    UpdateCategoryDto,
};
pub use product::{
    product_from_create, product_from_update, product_to_get_by_id, product_to_result,
    products_to_results, CreateProductDto, GetByIdProductDto, ResultProductDto, UpdateProductDto,
};
pub use product_image::{
    product_image_from_create, product_image_from_update, product_image_to_get_by_id,
    product_image_to_result, product_images_to_results, CreateProductImageDto,
    GetByIdProductImageDto, ResultProductImageDto, UpdateProductImageDto,
};
