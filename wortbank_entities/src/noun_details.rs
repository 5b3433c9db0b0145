use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Noun-only attributes of a word.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "noun_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Lower-case gender code: `m`, `f` or `n`.
    #[sea_orm(column_type = "String(StringLen::N(5))", nullable)]
    pub gender: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub definite_form: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub plural_form: Option<String>,
    pub word_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::word::Entity",
        from = "Column::WordId",
        to = "super::word::Column::Id",
        on_delete = "Cascade"
    )]
    Word,
}

impl Related<super::word::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Word.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
