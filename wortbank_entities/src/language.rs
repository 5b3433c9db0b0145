use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A supported language, e.g. German or Swedish.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "language")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// `de`, `sv`, `zh`
    #[sea_orm(column_type = "String(StringLen::N(5))", unique)]
    pub code: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub name: String,
    pub is_rtl: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::word::Entity")]
    Word,
}

impl Related<super::word::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Word.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
