use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "api_endpoints")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub api_id: i64,
    pub http_method: Option<String>,
    pub path: Option<String>,
    pub description: Option<String>,
    pub request_example: Option<Json>,
    pub response_example: Option<Json>,
    pub is_active: bool,
    pub created_at: TimeDateTimeWithTimeZone,
    pub updated_at: TimeDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::api_interface::Entity",
        from = "Column::ApiId",
        to = "super::api_interface::Column::Id",
        on_delete = "Cascade"
    )]
    ApiInterface,
}

impl Related<super::api_interface::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApiInterface.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
