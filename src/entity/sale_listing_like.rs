use sea_orm::{entity::prelude::*, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sale_listing_like")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "SALE_ITEM_ID")]
    pub sale_item_id: i64,
    #[sea_orm(primary_key, auto_increment = false, column_name = "USER_ID")]
    pub user_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn new(sale_item_id: i64, user_id: i64) -> Self {
        Self {
            sale_item_id: Set(sale_item_id),
            user_id: Set(user_id),
        }
    }
}
