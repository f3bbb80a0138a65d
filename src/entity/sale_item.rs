use sea_orm::{entity::prelude::*, Set};

use crate::record::SaleListing;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sale_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "ID")]
    pub id: i64,
    #[sea_orm(column_name = "CLOSES")]
    pub closes: Date,
    #[sea_orm(column_name = "CREATED")]
    pub created: DateTime,
    #[sea_orm(column_name = "MORE_INFO")]
    pub more_info: String,
    #[sea_orm(column_name = "PRICE")]
    pub price: i64,
    #[sea_orm(column_name = "QUANTITY")]
    pub quantity: i64,
    #[sea_orm(column_name = "INVENTORY_ITEM_ID")]
    pub inventory_item_id: i64,
    #[sea_orm(column_name = "SOLD")]
    pub sold: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn from_record(
        id: i64,
        inventory_item_id: i64,
        listing: &SaleListing,
        created: DateTime,
    ) -> Self {
        Self {
            id: Set(id),
            closes: Set(listing.closes),
            created: Set(created),
            more_info: Set(listing.description.to_owned()),
            price: Set(listing.price),
            quantity: Set(listing.quantity),
            inventory_item_id: Set(inventory_item_id),
            sold: Set(listing.sold),
        }
    }
}
