use sea_orm::{entity::prelude::*, Set};

use crate::record::Address;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "address")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "ID")]
    pub id: i64,
    #[sea_orm(column_name = "CITY")]
    pub city: String,
    #[sea_orm(column_name = "COUNTRY")]
    pub country: String,
    #[sea_orm(column_name = "POSTCODE")]
    pub postcode: String,
    #[sea_orm(column_name = "REGION")]
    pub region: String,
    #[sea_orm(column_name = "STREET_NAME")]
    pub street_name: String,
    #[sea_orm(column_name = "STREET_NUMBER")]
    pub street_number: String,
    #[sea_orm(column_name = "SUBURB")]
    pub suburb: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn from_record(id: i64, address: &Address) -> Self {
        Self {
            id: Set(id),
            city: Set(address.city.clone()),
            country: Set(address.country.clone()),
            postcode: Set(address.postcode.clone()),
            region: Set(address.region.clone()),
            street_name: Set(address.street_name.clone()),
            street_number: Set(address.street_number.clone()),
            suburb: Set(address.suburb.clone()),
        }
    }
}
