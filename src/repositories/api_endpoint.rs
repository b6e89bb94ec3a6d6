use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::entity::api_endpoint::{self, ActiveModel, Column, Entity as ApiEndpointEntity};
use crate::error::{AppError, AppResult};
use crate::models::{ApiEndpoint, EndpointFields};

/// Endpoint repository for database operations
pub struct ApiEndpointRepository;

impl ApiEndpointRepository {
    /// Insert an endpoint owned by `interface_id`.
    /// A missing owner surfaces as a foreign key violation.
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        interface_id: i64,
        fields: &EndpointFields,
    ) -> AppResult<ApiEndpoint> {
        let now = OffsetDateTime::now_utc();
        let model = ActiveModel {
            api_id: Set(interface_id),
            http_method: Set(fields.http_method.clone()),
            path: Set(fields.path.clone()),
            description: Set(fields.description.clone()),
            request_example: Set(fields.request_example.clone()),
            response_example: Set(fields.response_example.clone()),
            is_active: Set(fields.is_active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(db).await?;
        Ok(result.into())
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: i64,
    ) -> AppResult<Option<ApiEndpoint>> {
        let model = ApiEndpointEntity::find_by_id(id).one(db).await?;
        Ok(model.map(Into::into))
    }

    pub async fn list_by_interface<C: ConnectionTrait>(
        db: &C,
        interface_id: i64,
    ) -> AppResult<Vec<ApiEndpoint>> {
        let models = ApiEndpointEntity::find()
            .filter(Column::ApiId.eq(interface_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: i64,
        fields: &EndpointFields,
    ) -> AppResult<ApiEndpoint> {
        let model = ApiEndpointEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Api endpoint {}", id)))?;

        let mut active: ActiveModel = model.into();
        active.http_method = Set(fields.http_method.clone());
        active.path = Set(fields.path.clone());
        active.description = Set(fields.description.clone());
        active.request_example = Set(fields.request_example.clone());
        active.response_example = Set(fields.response_example.clone());
        active.is_active = Set(fields.is_active);
        active.updated_at = Set(OffsetDateTime::now_utc());

        let result = active.update(db).await?;
        Ok(result.into())
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> AppResult<bool> {
        let result = ApiEndpointEntity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Remove every endpoint owned by an interface, returning how many went
    pub async fn delete_by_interface<C: ConnectionTrait>(
        db: &C,
        interface_id: i64,
    ) -> AppResult<u64> {
        let result = ApiEndpointEntity::delete_many()
            .filter(Column::ApiId.eq(interface_id))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }
}

// Conversion from SeaORM model to our domain model
impl From<api_endpoint::Model> for ApiEndpoint {
    fn from(m: api_endpoint::Model) -> Self {
        Self {
            id: m.id,
            api_interface_id: m.api_id,
            http_method: m.http_method,
            path: m.path,
            description: m.description,
            request_example: m.request_example,
            response_example: m.response_example,
            is_active: m.is_active,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
