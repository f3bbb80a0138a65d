use sea_orm::{entity::prelude::*, Set};

use crate::record::InventoryItem;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "ID")]
    pub id: i64,
    #[sea_orm(column_name = "BEST_BEFORE")]
    pub best_before: Date,
    #[sea_orm(column_name = "CREATED")]
    pub created: Date,
    #[sea_orm(column_name = "EXPIRES")]
    pub expires: Date,
    #[sea_orm(column_name = "MANUFACTURED")]
    pub manufactured: Date,
    #[sea_orm(column_name = "PRICE_PER_ITEM")]
    pub price_per_item: i64,
    /// Product code, not the product row.
    #[sea_orm(column_name = "PRODUCT_ID")]
    pub product_id: String,
    #[sea_orm(column_name = "QUANTITY")]
    pub quantity: i64,
    #[sea_orm(column_name = "SELL_BY")]
    pub sell_by: Date,
    #[sea_orm(column_name = "TOTAL_PRICE")]
    pub total_price: i64,
    #[sea_orm(column_name = "BUSINESS_ID")]
    pub business_id: i64,
    /// Row of the product this item stocks.
    #[sea_orm(column_name = "ROW_ID")]
    pub row_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn from_record(id: i64, business_id: i64, product_row: i64, item: &InventoryItem) -> Self {
        Self {
            id: Set(id),
            best_before: Set(item.best_before),
            created: Set(item.created),
            expires: Set(item.expires),
            manufactured: Set(item.manufactured),
            price_per_item: Set(item.price_per_item),
            product_id: Set(item.product_code.clone()),
            quantity: Set(item.quantity),
            sell_by: Set(item.sell_by),
            total_price: Set(item.total_price),
            business_id: Set(business_id),
            row_id: Set(product_row),
        }
    }
}
