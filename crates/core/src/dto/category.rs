use serde::{Deserialize, Serialize};

use crate::domain::category::{Category, CategoryId};

#[derive(Clone, Debug, Deserialize)]
pub struct CreateCategoryDto {
    /// Caller-supplied identifier; when absent the server generates one.
    pub category_id: Option<String>,
    pub name: String,
}

/// Full-replacement input; the identifier is embedded in the body.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCategoryDto {
    pub category_id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultCategoryDto {
    pub category_id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GetByIdCategoryDto {
    pub category_id: String,
    pub name: String,
}

pub fn category_from_create(dto: CreateCategoryDto, generated_id: CategoryId) -> Category {
    let id = dto.category_id.map(CategoryId).unwrap_or(generated_id);
    Category { id, name: dto.name }
}

pub fn category_from_update(dto: UpdateCategoryDto) -> Category {
    Category { id: CategoryId(dto.category_id), name: dto.name }
}

pub fn category_to_result(category: &Category) -> ResultCategoryDto {
    ResultCategoryDto { category_id: category.id.0.clone(), name: category.name.clone() }
}

pub fn category_to_get_by_id(category: &Category) -> GetByIdCategoryDto {
    GetByIdCategoryDto { category_id: category.id.0.clone(), name: category.name.clone() }
}

pub fn categories_to_results(categories: &[Category]) -> Vec<ResultCategoryDto> {
    categories.iter().map(category_to_result).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_prefers_caller_supplied_identifier() {
        let category = category_from_create(
            CreateCategoryDto {
                category_id: Some("c1".to_string()),
                name: "Electronics".to_string(),
            },
            CategoryId("generated".to_string()),
        );

        assert_eq!(category.id, CategoryId("c1".to_string()));
        assert_eq!(category.name, "Electronics");
    }

    #[test]
    fn create_falls_back_to_generated_identifier() {
        let category = category_from_create(
            CreateCategoryDto { category_id: None, name: "Electronics".to_string() },
            CategoryId("generated".to_string()),
        );

        assert_eq!(category.id, CategoryId("generated".to_string()));
    }

    #[test]
    fn update_carries_embedded_identifier() {
        let category = category_from_update(UpdateCategoryDto {
            category_id: "c1".to_string(),
            name: "Home Electronics".to_string(),
        });

        assert_eq!(category.id, CategoryId("c1".to_string()));
        assert_eq!(category.name, "Home Electronics");
    }

    #[test]
    fn result_and_get_by_id_cover_every_field() {
        let category =
            Category { id: CategoryId("c1".to_string()), name: "Electronics".to_string() };

        let result = category_to_result(&category);
        assert_eq!(result.category_id, "c1");
        assert_eq!(result.name, "Electronics");

        let get_by_id = category_to_get_by_id(&category);
        assert_eq!(get_by_id.category_id, "c1");
        assert_eq!(get_by_id.name, "Electronics");
    }

    #[test]
    fn sequence_mapping_preserves_order_and_length() {
        let categories = vec![
            Category { id: CategoryId("c1".to_string()), name: "Electronics".to_string() },
            Category { id: CategoryId("c2".to_string()), name: "Garden".to_string() },
        ];

        let results = categories_to_results(&categories);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].category_id, "c1");
        assert_eq!(results[1].category_id, "c2");
    }
}
