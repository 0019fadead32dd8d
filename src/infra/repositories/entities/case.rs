//! Case database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Case;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub case_number: String,
    pub client_name: String,
    pub case_type: String,
    pub hearing_date: String,
    pub status: String,
    pub document: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Case {
    fn from(model: Model) -> Self {
        Case {
            id: model.id,
            case_number: model.case_number,
            client_name: model.client_name,
            case_type: model.case_type,
            hearing_date: model.hearing_date,
            status: model.status,
            document: model.document,
        }
    }
}
