use sea_orm::{entity::prelude::*, Set};

use crate::record::MarketplaceCard;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "marketplace_card")]
pub struct Model {
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_name = "MARKETPLACE_CARD_ID"
    )]
    pub marketplace_card_id: i64,
    #[sea_orm(column_name = "CREATOR_ID")]
    pub creator_id: i64,
    #[sea_orm(column_name = "SECTION")]
    pub section: String,
    #[sea_orm(column_name = "TITLE")]
    pub title: String,
    #[sea_orm(column_name = "DESCRIPTION")]
    pub description: String,
    #[sea_orm(column_name = "CREATED")]
    pub created: Date,
    #[sea_orm(column_name = "DISPLAY_PERIOD_END")]
    pub display_period_end: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn from_record(
        id: i64,
        creator_id: i64,
        card: &MarketplaceCard,
        created: Date,
        display_period_end: Date,
    ) -> Self {
        Self {
            marketplace_card_id: Set(id),
            creator_id: Set(creator_id),
            section: Set(card.section.as_str().to_owned()),
            title: Set(card.title.clone()),
            description: Set(card.description.clone()),
            created: Set(created),
            display_period_end: Set(display_period_end),
        }
    }
}
