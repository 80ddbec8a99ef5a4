use crate::connection::DbPool;
use crate::repositories::RepositoryError;

/// Canonical demo rows loaded by `catalog seed` and the integration tests.
struct CategorySeed {
    id: &'static str,
    name: &'static str,
}

struct ProductSeed {
    id: &'static str,
    name: &'static str,
    price: &'static str,
    description: Option<&'static str>,
    image_url: Option<&'static str>,
    category_id: &'static str,
}

struct ProductImageSeed {
    id: &'static str,
    image1: Option<&'static str>,
    image2: Option<&'static str>,
    image3: Option<&'static str>,
    product_id: &'static str,
}

const SEED_CATEGORIES: &[CategorySeed] = &[
    CategorySeed { id: "cat-electronics", name: "Electronics" },
    CategorySeed { id: "cat-garden", name: "Garden & Outdoor" },
    CategorySeed { id: "cat-tools", name: "Power Tools" },
];

const SEED_PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        id: "prod-drill-18v",
        name: "Cordless Drill 18V",
        price: "129.99",
        description: Some("Compact drill with two batteries"),
        image_url: Some("https://cdn.example/drill.png"),
        category_id: "cat-tools",
    },
    ProductSeed {
        id: "prod-headphones",
        name: "Wireless Headphones",
        price: "89.50",
        description: None,
        image_url: None,
        category_id: "cat-electronics",
    },
    ProductSeed {
        id: "prod-mower",
        name: "Electric Lawn Mower",
        price: "349.00",
        description: Some("38cm cutting width"),
        image_url: None,
        category_id: "cat-garden",
    },
];

const SEED_PRODUCT_IMAGES: &[ProductImageSeed] = &[
    ProductImageSeed {
        id: "img-drill-gallery",
        image1: Some("https://cdn.example/drill-front.png"),
        image2: Some("https://cdn.example/drill-side.png"),
        image3: None,
        product_id: "prod-drill-18v",
    },
    ProductImageSeed {
        id: "img-mower-gallery",
        image1: Some("https://cdn.example/mower.png"),
        image2: None,
        image3: None,
        product_id: "prod-mower",
    },
];

/// Deterministic demo catalog with a load / verify / clean contract.
pub struct DemoCatalog;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub products: usize,
    pub product_images: usize,
}

#[derive(Clone, Debug)]
pub struct VerificationReport {
    pub all_present: bool,
    pub checks: Vec<(&'static str, bool)>,
}

impl DemoCatalog {
    /// Loads the demo rows. Re-running replaces in place, so seeding stays
    /// idempotent across invocations.
    pub async fn load(pool: &DbPool) -> Result<SeedSummary, RepositoryError> {
        for category in SEED_CATEGORIES {
            sqlx::query("INSERT OR REPLACE INTO category (id, name) VALUES (?, ?)")
                .bind(category.id)
                .bind(category.name)
                .execute(pool)
                .await?;
        }

        for product in SEED_PRODUCTS {
            sqlx::query(
                "INSERT OR REPLACE INTO product (id, name, price, description, image_url, category_id)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(product.id)
            .bind(product.name)
            .bind(product.price)
            .bind(product.description)
            .bind(product.image_url)
            .bind(product.category_id)
            .execute(pool)
            .await?;
        }

        for image in SEED_PRODUCT_IMAGES {
            sqlx::query(
                "INSERT OR REPLACE INTO product_image (id, image1, image2, image3, product_id)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(image.id)
            .bind(image.image1)
            .bind(image.image2)
            .bind(image.image3)
            .bind(image.product_id)
            .execute(pool)
            .await?;
        }

        Ok(SeedSummary {
            categories: SEED_CATEGORIES.len(),
            products: SEED_PRODUCTS.len(),
            product_images: SEED_PRODUCT_IMAGES.len(),
        })
    }

    pub async fn verify(pool: &DbPool) -> Result<VerificationReport, RepositoryError> {
        let mut checks = Vec::new();

        checks.push((
            "category_rows",
            count(pool, "SELECT COUNT(*) FROM category").await? >= SEED_CATEGORIES.len() as i64,
        ));
        checks.push((
            "product_rows",
            count(pool, "SELECT COUNT(*) FROM product").await? >= SEED_PRODUCTS.len() as i64,
        ));
        checks.push((
            "product_image_rows",
            count(pool, "SELECT COUNT(*) FROM product_image").await?
                >= SEED_PRODUCT_IMAGES.len() as i64,
        ));
        checks.push((
            "drill_image_links_to_product",
            count(
                pool,
                "SELECT COUNT(*) FROM product_image pi
                 JOIN product p ON p.id = pi.product_id
                 WHERE pi.id = 'img-drill-gallery'",
            )
            .await?
                == 1,
        ));

        let all_present = checks.iter().all(|(_, passed)| *passed);
        Ok(VerificationReport { all_present, checks })
    }

    pub async fn clean(pool: &DbPool) -> Result<(), RepositoryError> {
        for image in SEED_PRODUCT_IMAGES {
            sqlx::query("DELETE FROM product_image WHERE id = ?")
                .bind(image.id)
                .execute(pool)
                .await?;
        }
        for product in SEED_PRODUCTS {
            sqlx::query("DELETE FROM product WHERE id = ?").bind(product.id).execute(pool).await?;
        }
        for category in SEED_CATEGORIES {
            sqlx::query("DELETE FROM category WHERE id = ?")
                .bind(category.id)
                .execute(pool)
                .await?;
        }

        Ok(())
    }
}

async fn count(pool: &DbPool, query: &str) -> Result<i64, RepositoryError> {
    Ok(sqlx::query_scalar::<_, i64>(query).fetch_one(pool).await?)
}
