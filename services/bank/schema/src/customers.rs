use sea_orm::entity::prelude::*;

/// Customer account row. Profile columns stay null between registration and
/// profile completion; a null `name` marks the profile as incomplete.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: Option<String>,
    pub account_number: Option<i64>,
    pub account_type: Option<String>,
    pub contact_number: Option<i64>,
    pub pan_number: Option<i64>,
    pub branch_name: Option<String>,
    pub branch_code: Option<i64>,
    pub branch_ifsc: Option<String>,
    pub card_number: Option<i64>,
    pub card_credit_limit: Option<i64>,
    pub card_expiry_date: Option<Date>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::offerings::Entity")]
    Offering,
}

impl Related<super::offerings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Offering.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
