use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QuerySelect,
};

pub mod address;
pub mod admins;
pub mod business;
pub mod inventory_item;
pub mod marketplace_card;
pub mod product;
pub mod sale_item;
pub mod sale_listing_like;
pub mod user;

#[derive(Debug, FromQueryResult)]
struct MaxId {
    max_id: Option<i64>,
}

/// Largest value of `column` in the live table of `E`, `None` when the table is empty.
pub async fn max_id<E, C>(db: &DatabaseConnection, column: C) -> Result<Option<i64>, DbErr>
where
    E: EntityTrait,
    C: ColumnTrait + 'static,
{
    let row = E::find()
        .select_only()
        .column_as(Expr::col(column).max(), "max_id")
        .into_model::<MaxId>()
        .one(db)
        .await?;
    Ok(row.and_then(|row| row.max_id))
}
