use sea_orm::entity::prelude::*;

/// Locker owned by an offering. Like loans, `number` is system-wide unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lockers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub number: i64,
    pub account_number: i64,
    pub branch_code: i64,
    pub offering_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::offerings::Entity",
        from = "Column::OfferingId",
        to = "super::offerings::Column::Id",
        on_delete = "Cascade"
    )]
    Offering,
}

impl Related<super::offerings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Offering.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
