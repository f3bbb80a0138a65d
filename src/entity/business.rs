use sea_orm::{entity::prelude::*, Set};

use crate::record::Business;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "business")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "ID")]
    pub id: i64,
    #[sea_orm(column_name = "BUSINESS_TYPE")]
    pub business_type: String,
    #[sea_orm(column_name = "DESCRIPTION")]
    pub description: String,
    #[sea_orm(column_name = "NAME")]
    pub name: String,
    #[sea_orm(column_name = "PRIMARY_ADMIN_ID")]
    pub primary_admin_id: i64,
    #[sea_orm(column_name = "REGISTRATION_DATE")]
    pub registration_date: Date,
    #[sea_orm(column_name = "ADDRESS_ID")]
    pub address_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn from_record(
        id: i64,
        admin_id: i64,
        address_id: i64,
        business: &Business,
        registered: Date,
    ) -> Self {
        Self {
            id: Set(id),
            business_type: Set(business.business_type.as_str().to_owned()),
            description: Set(business.description.clone()),
            name: Set(business.name.clone()),
            primary_admin_id: Set(admin_id),
            registration_date: Set(registered),
            address_id: Set(address_id),
        }
    }
}
