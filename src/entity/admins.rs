use sea_orm::{entity::prelude::*, Set};

/// Join table between a business and the users administering it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "admins")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "USER_ID")]
    pub user_id: i64,
    #[sea_orm(primary_key, auto_increment = false, column_name = "BUSINESS_ID")]
    pub business_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn new(user_id: i64, business_id: i64) -> Self {
        Self {
            user_id: Set(user_id),
            business_id: Set(business_id),
        }
    }
}
