use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use catalog_core::domain::category::CategoryId;
use catalog_db::repositories::CategoryRepository;
use catalog_core::dto::{
    categories_to_results, category_from_create, category_from_update, category_to_get_by_id,
    category_to_result, CreateCategoryDto, GetByIdCategoryDto, ResultCategoryDto,
    UpdateCategoryDto,
};

use super::{ApiError, AppState};

pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateCategoryDto>,
) -> Result<(StatusCode, Json<ResultCategoryDto>), ApiError> {
    let category = category_from_create(dto, CategoryId(Uuid::new_v4().to_string()));
    state.categories.insert(category.clone()).await?;

    info!(
        event_name = "catalog.category.created",
        category_id = %category.id.0,
        "category created"
    );
    Ok((StatusCode::CREATED, Json(category_to_result(&category))))
}

pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResultCategoryDto>>, ApiError> {
    let categories = state.categories.find_all().await?;
    Ok(Json(categories_to_results(&categories)))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GetByIdCategoryDto>, ApiError> {
    let category = state
        .categories
        .find_by_id(&CategoryId(id.clone()))
        .await?
        .ok_or_else(|| ApiError::not_found(&id))?;

    Ok(Json(category_to_get_by_id(&category)))
}

pub async fn update(
    State(state): State<AppState>,
    Json(dto): Json<UpdateCategoryDto>,
) -> Result<Json<ResultCategoryDto>, ApiError> {
    let category = category_from_update(dto);
    state.categories.replace_by_id(category.clone()).await?;

    info!(
        event_name = "catalog.category.updated",
        category_id = %category.id.0,
        "category replaced"
    );
    Ok(Json(category_to_result(&category)))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.categories.delete_by_id(&CategoryId(id.clone())).await?;

    info!(event_name = "catalog.category.deleted", category_id = %id, "category delete issued");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::Json;

    use catalog_core::dto::{CreateCategoryDto, UpdateCategoryDto};

    use super::{create, get_by_id, list, remove, update};
    use crate::api::{in_memory_state, ApiError};

    fn create_dto(id: Option<&str>, name: &str) -> CreateCategoryDto {
        CreateCategoryDto { category_id: id.map(str::to_string), name: name.to_string() }
    }

    #[tokio::test]
    async fn create_read_update_delete_scenario() {
        let state = in_memory_state();

        let (status, Json(created)) =
            create(State(state.clone()), Json(create_dto(Some("c1"), "Electronics")))
                .await
                .expect("create succeeds");
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.category_id, "c1");
        assert_eq!(created.name, "Electronics");

        let Json(found) = get_by_id(State(state.clone()), Path("c1".to_string()))
            .await
            .expect("read succeeds");
        assert_eq!(found.category_id, "c1");
        assert_eq!(found.name, "Electronics");

        let Json(updated) = update(
            State(state.clone()),
            Json(UpdateCategoryDto {
                category_id: "c1".to_string(),
                name: "Home Electronics".to_string(),
            }),
        )
        .await
        .expect("update succeeds");
        assert_eq!(updated.name, "Home Electronics");

        let Json(found) = get_by_id(State(state.clone()), Path("c1".to_string()))
            .await
            .expect("read after update succeeds");
        assert_eq!(found.name, "Home Electronics");

        let status = remove(State(state.clone()), Path("c1".to_string()))
            .await
            .expect("delete succeeds");
        assert_eq!(status, StatusCode::NO_CONTENT);

        let result = get_by_id(State(state), Path("c1".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn create_generates_an_identifier_when_absent() {
        let state = in_memory_state();

        let (_, Json(created)) = create(State(state.clone()), Json(create_dto(None, "Garden")))
            .await
            .expect("create succeeds");
        assert!(!created.category_id.is_empty());

        let Json(found) = get_by_id(State(state), Path(created.category_id.clone()))
            .await
            .expect("generated id is readable");
        assert_eq!(found.name, "Garden");
    }

    #[tokio::test]
    async fn update_of_missing_category_is_not_found() {
        let state = in_memory_state();

        let result = update(
            State(state),
            Json(UpdateCategoryDto {
                category_id: "ghost".to_string(),
                name: "Nothing".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_is_idempotent_and_silent_on_miss() {
        let state = in_memory_state();
        create(State(state.clone()), Json(create_dto(Some("c1"), "Electronics")))
            .await
            .expect("create succeeds");

        for _ in 0..2 {
            let status = remove(State(state.clone()), Path("c1".to_string()))
                .await
                .expect("delete never errors on miss");
            assert_eq!(status, StatusCode::NO_CONTENT);
        }
    }

    #[tokio::test]
    async fn list_reflects_creates_and_deletes() {
        let state = in_memory_state();
        create(State(state.clone()), Json(create_dto(Some("c1"), "Electronics")))
            .await
            .expect("create c1");
        create(State(state.clone()), Json(create_dto(Some("c2"), "Garden")))
            .await
            .expect("create c2");
        remove(State(state.clone()), Path("c1".to_string())).await.expect("delete c1");

        let Json(all) = list(State(state)).await.expect("list succeeds");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].category_id, "c2");
    }
}
