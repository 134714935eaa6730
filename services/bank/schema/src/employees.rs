use sea_orm::entity::prelude::*;

/// Employee account row. Same two-phase lifecycle as customers: profile
/// columns are null until the employee completes their profile.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: Option<String>,
    pub salary: Option<i32>,
    pub title: Option<String>,
    pub joining_date: Option<Date>,
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
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
