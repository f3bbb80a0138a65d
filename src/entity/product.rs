use sea_orm::{entity::prelude::*, Set};

use crate::record::Product;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "ROW_ID")]
    pub row_id: i64,
    #[sea_orm(column_name = "CREATED")]
    pub created: Date,
    #[sea_orm(column_name = "DESCRIPTION")]
    pub description: String,
    #[sea_orm(column_name = "MANUFACTURER")]
    pub manufacturer: String,
    #[sea_orm(column_name = "NAME")]
    pub name: String,
    #[sea_orm(column_name = "PRODUCT_ID")]
    pub product_id: String,
    #[sea_orm(column_name = "RECOMMENDED_RETAIL_PRICE")]
    pub recommended_retail_price: i64,
    #[sea_orm(column_name = "BUSINESS_ID")]
    pub business_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// The owning business is also recorded as the manufacturer.
    pub fn from_record(
        row_id: i64,
        business_id: i64,
        manufacturer: &str,
        product: &Product,
        created: Date,
    ) -> Self {
        Self {
            row_id: Set(row_id),
            created: Set(created),
            description: Set(product.description.clone()),
            manufacturer: Set(manufacturer.to_owned()),
            name: Set(product.name.clone()),
            product_id: Set(product.code.clone()),
            recommended_retail_price: Set(product.recommended_retail_price),
            business_id: Set(business_id),
        }
    }
}
