use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::entity::api_interface::{self, ActiveModel, Column, Entity as ApiInterfaceEntity};
use crate::error::{AppError, AppResult};
use crate::models::{ApiInterface, InterfaceFields, LARGE_INTERFACE_THRESHOLD};

/// Interface repository for database operations.
///
/// Functions take any `ConnectionTrait` so they compose inside a transaction.
pub struct ApiInterfaceRepository;

impl ApiInterfaceRepository {
    /// Insert a new interface with both timestamps set to now
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        fields: &InterfaceFields,
    ) -> AppResult<ApiInterface> {
        let now = OffsetDateTime::now_utc();
        let model = ActiveModel {
            name: Set(fields.name.clone()),
            interface_type: Set(fields.interface_type.clone()),
            base_url: Set(fields.base_url.clone()),
            description: Set(fields.description.clone()),
            auth_type: Set(fields.auth_type.clone()),
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
    ) -> AppResult<Option<ApiInterface>> {
        let model = ApiInterfaceEntity::find_by_id(id).one(db).await?;
        Ok(model.map(Into::into))
    }

    /// `None` looks up an interface stored without a name
    pub async fn find_by_name<C: ConnectionTrait>(
        db: &C,
        name: Option<&str>,
    ) -> AppResult<Option<ApiInterface>> {
        let condition = match name {
            Some(name) => Column::Name.eq(name),
            None => Column::Name.is_null(),
        };

        let model = ApiInterfaceEntity::find()
            .filter(condition)
            .order_by_asc(Column::Id)
            .one(db)
            .await?;

        Ok(model.map(Into::into))
    }

    pub async fn list<C: ConnectionTrait>(db: &C) -> AppResult<Vec<ApiInterface>> {
        let models = ApiInterfaceEntity::find()
            .order_by_asc(Column::Id)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    /// Interfaces with more than `LARGE_INTERFACE_THRESHOLD` endpoints.
    /// Counted per row with a correlated subquery, so it always reflects the
    /// endpoint table as of this statement.
    pub async fn list_large<C: ConnectionTrait>(db: &C) -> AppResult<Vec<ApiInterface>> {
        let endpoint_count_exceeds = Expr::cust(format!(
            "(SELECT COUNT(*) FROM api_endpoints WHERE api_endpoints.api_id = api_interfaces.id) > {}",
            LARGE_INTERFACE_THRESHOLD
        ));

        let models = ApiInterfaceEntity::find()
            .filter(endpoint_count_exceeds)
            .order_by_asc(Column::Id)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    pub async fn exists<C: ConnectionTrait>(db: &C, id: i64) -> AppResult<bool> {
        let count = ApiInterfaceEntity::find_by_id(id).count(db).await?;
        Ok(count > 0)
    }

    /// Overwrite every mutable attribute and refresh `updated_at`
    pub async fn update<C: ConnectionTrait>(
        db: &C,
        id: i64,
        fields: &InterfaceFields,
    ) -> AppResult<ApiInterface> {
        let model = ApiInterfaceEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Api interface {}", id)))?;

        let mut active: ActiveModel = model.into();
        active.name = Set(fields.name.clone());
        active.interface_type = Set(fields.interface_type.clone());
        active.base_url = Set(fields.base_url.clone());
        active.description = Set(fields.description.clone());
        active.auth_type = Set(fields.auth_type.clone());
        active.is_active = Set(fields.is_active);
        active.updated_at = Set(OffsetDateTime::now_utc());

        let result = active.update(db).await?;
        Ok(result.into())
    }

    /// Delete the interface row only; owned endpoints must already be gone
    pub async fn delete<C: ConnectionTrait>(db: &C, id: i64) -> AppResult<bool> {
        let result = ApiInterfaceEntity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected > 0)
    }
}

// Conversion from SeaORM model to our domain model
impl From<api_interface::Model> for ApiInterface {
    fn from(m: api_interface::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            interface_type: m.interface_type,
            base_url: m.base_url,
            description: m.description,
            auth_type: m.auth_type,
            is_active: m.is_active,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
