use serde::{Deserialize, Serialize};

use crate::domain::product::ProductId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductImageId(pub String);

/// Up to three image references attached to a product. `product_id` is not
/// checked against the product table; the read boundary attaches the related
/// product record when one exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: ProductImageId,
    pub image1: Option<String>,
    pub image2: Option<String>,
    pub image3: Option<String>,
    pub product_id: ProductId,
}
