use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Values of the `coreWordType` database enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "coreWordType")]
pub enum CoreWordType {
    #[sea_orm(string_value = "null")]
    Null,
    #[sea_orm(string_value = "noun")]
    Noun,
    #[sea_orm(string_value = "verb")]
    Verb,
    #[sea_orm(string_value = "adjective")]
    Adjective,
    #[sea_orm(string_value = "adverb")]
    Adverb,
    #[sea_orm(string_value = "pronoun")]
    Pronoun,
    #[sea_orm(string_value = "preposition")]
    Preposition,
    #[sea_orm(string_value = "conjunction")]
    Conjunction,
    #[sea_orm(string_value = "interjection")]
    Interjection,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "word")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub text: String,
    /// Romanisation for Chinese entries.
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub pinyin: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub definition: String,
    #[sea_orm(column_name = "type")]
    pub word_type: Option<CoreWordType>,
    pub created_at: Option<DateTime>,
    pub language_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::language::Entity",
        from = "Column::LanguageId",
        to = "super::language::Column::Id",
        on_delete = "Cascade"
    )]
    Language,
    #[sea_orm(has_one = "super::noun_details::Entity")]
    NounDetails,
}

impl Related<super::language::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Language.def()
    }
}

impl Related<super::noun_details::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NounDetails.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
