use sea_orm::{entity::prelude::*, Set};

use crate::record::User;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "ID")]
    pub id: i64,
    #[sea_orm(column_name = "FIRST_NAME")]
    pub first_name: String,
    #[sea_orm(column_name = "MIDDLE_NAME")]
    pub middle_name: String,
    #[sea_orm(column_name = "LAST_NAME")]
    pub last_name: String,
    #[sea_orm(column_name = "NICKNAME")]
    pub nickname: String,
    #[sea_orm(column_name = "BIO")]
    pub bio: String,
    #[sea_orm(column_name = "EMAIL")]
    pub email: String,
    #[sea_orm(column_name = "DATE_OF_BIRTH")]
    pub date_of_birth: Date,
    #[sea_orm(column_name = "ADDRESS_ID")]
    pub address_id: i64,
    #[sea_orm(column_name = "PASSWORD")]
    pub password: String,
    #[sea_orm(column_name = "ROLE")]
    pub role: String,
    #[sea_orm(column_name = "CREATED")]
    pub created: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn from_record(id: i64, address_id: i64, user: &User, created: Date) -> Self {
        Self {
            id: Set(id),
            first_name: Set(user.first_name.clone()),
            middle_name: Set(user.middle_name.clone()),
            last_name: Set(user.last_name.clone()),
            nickname: Set(user.nickname.clone()),
            bio: Set(user.bio.clone()),
            email: Set(user.email.clone()),
            date_of_birth: Set(user.date_of_birth),
            address_id: Set(address_id),
            password: Set(user.password().to_owned()),
            role: Set(user.role.as_str().to_owned()),
            created: Set(created),
        }
    }
}
