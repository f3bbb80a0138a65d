use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use sea_orm::{ActiveModelTrait, DbBackend, EntityName, EntityTrait, QueryTrait};
use tracing::debug;

use crate::{
    allocator::{IdAllocator, IdFamily, LikeWindow},
    entity::{
        address, admins, business, inventory_item, marketplace_card, product, sale_item,
        sale_listing_like, user,
    },
    error::{Result, SeedError},
    rand::rand_i64,
    record::{Business, Catalog, MarketplaceCard, User},
};

pub const PRODUCTS_PER_BUSINESS: usize = 5;
pub const MAX_LIKES_PER_LISTING: i64 = 3;
/// Cards are backdated up to this many days.
pub const CARD_MAX_AGE_DAYS: i64 = 14;
pub const CARD_DISPLAY_DAYS: i64 = 21;

/// Renders `rows` as a single `INSERT ... VALUES (...), (...);`.
///
/// Returns `None` for an empty slice of rows rather than a statement with no
/// values.
pub fn compose<A>(backend: DbBackend, rows: Vec<A>) -> Option<String>
where
    A: ActiveModelTrait,
{
    if rows.is_empty() {
        return None;
    }
    let count = rows.len();
    let table = <A::Entity as Default>::default().table_name().to_owned();
    let statement = <A::Entity as EntityTrait>::insert_many(rows).build(backend);
    debug!("Composed {} rows for {}", count, table);
    Some(format!("{};", statement))
}

#[derive(Debug, Default)]
pub struct UserRows {
    pub addresses: Vec<address::ActiveModel>,
    pub users: Vec<user::ActiveModel>,
}

#[derive(Debug)]
pub struct UserStatements {
    pub addresses: Option<String>,
    pub users: Option<String>,
}

impl UserRows {
    /// Allocates one address id and one user id per user, in order.
    pub fn assemble(users: &[User], ids: &mut IdAllocator, created: NaiveDate) -> Self {
        let mut rows = Self::default();
        for record in users {
            let address_id = ids.allocate(IdFamily::Address);
            let user_id = ids.allocate(IdFamily::User);
            rows.addresses.push(address::ActiveModel::from_record(address_id, &record.address));
            rows.users.push(user::ActiveModel::from_record(user_id, address_id, record, created));
        }
        rows
    }

    pub fn compose(self, backend: DbBackend) -> UserStatements {
        UserStatements {
            addresses: compose(backend, self.addresses),
            users: compose(backend, self.users),
        }
    }
}

#[derive(Debug, Default)]
pub struct BusinessRows {
    pub addresses: Vec<address::ActiveModel>,
    pub businesses: Vec<business::ActiveModel>,
    pub admins: Vec<admins::ActiveModel>,
    pub products: Vec<product::ActiveModel>,
    pub inventory: Vec<inventory_item::ActiveModel>,
    pub sale_items: Vec<sale_item::ActiveModel>,
    pub likes: Vec<sale_listing_like::ActiveModel>,
}

#[derive(Debug)]
pub struct BusinessStatements {
    pub addresses: Option<String>,
    pub businesses: Option<String>,
    pub admins: Option<String>,
    pub products: Option<String>,
    pub inventory: Option<String>,
    pub sale_items: Option<String>,
    pub likes: Option<String>,
}

impl BusinessRows {
    /// Each business takes the next `PRODUCTS_PER_BUSINESS` catalog entries in
    /// order and gets 0..=3 likes per sale listing from users in `likes`.
    pub fn assemble<R: Rng + ?Sized>(
        businesses: &[Business],
        catalog: &Catalog,
        ids: &mut IdAllocator,
        likes: &LikeWindow,
        rng: &mut R,
        now: NaiveDateTime,
    ) -> Result<Self> {
        let needed = businesses.len() * PRODUCTS_PER_BUSINESS;
        if catalog.len() < needed {
            return Err(SeedError::CatalogExhausted {
                businesses: businesses.len(),
                needed,
                available: catalog.len(),
            });
        }
        let today = now.date();
        let mut rows = Self::default();
        for (record, slots) in businesses
            .iter()
            .zip(catalog.entries().chunks(PRODUCTS_PER_BUSINESS))
        {
            let address_id = ids.allocate(IdFamily::Address);
            let business_id = ids.allocate(IdFamily::Business);
            let admin_id = ids.allocate(IdFamily::BusinessAdmin);
            rows.addresses.push(address::ActiveModel::from_record(address_id, &record.address));
            rows.businesses.push(business::ActiveModel::from_record(
                business_id,
                admin_id,
                address_id,
                record,
                today,
            ));
            rows.admins.push(admins::ActiveModel::new(admin_id, business_id));

            for entry in slots {
                let row_id = ids.allocate(IdFamily::Product);
                let item_id = ids.allocate(IdFamily::InventoryItem);
                let sale_item_id = ids.allocate(IdFamily::SaleItem);
                rows.products.push(product::ActiveModel::from_record(
                    row_id,
                    business_id,
                    &record.name,
                    &entry.product,
                    today,
                ));
                rows.inventory.push(inventory_item::ActiveModel::from_record(
                    item_id,
                    business_id,
                    row_id,
                    &entry.item,
                ));
                rows.sale_items.push(sale_item::ActiveModel::from_record(
                    sale_item_id,
                    item_id,
                    &entry.listing,
                    now,
                ));
                for _ in 0..rand_i64(rng, 0, MAX_LIKES_PER_LISTING) {
                    if let Some(user_id) = likes.sample(rng) {
                        rows.likes.push(sale_listing_like::ActiveModel::new(sale_item_id, user_id));
                    }
                }
            }
        }
        Ok(rows)
    }

    pub fn compose(self, backend: DbBackend) -> BusinessStatements {
        BusinessStatements {
            addresses: compose(backend, self.addresses),
            businesses: compose(backend, self.businesses),
            admins: compose(backend, self.admins),
            products: compose(backend, self.products),
            inventory: compose(backend, self.inventory),
            sale_items: compose(backend, self.sale_items),
            likes: compose(backend, self.likes),
        }
    }
}

#[derive(Debug, Default)]
pub struct CardRows {
    pub cards: Vec<marketplace_card::ActiveModel>,
}

impl CardRows {
    /// Cards are backdated by 0..=14 days and stay on display for 21 days.
    pub fn assemble<R: Rng + ?Sized>(
        cards: &[MarketplaceCard],
        ids: &mut IdAllocator,
        rng: &mut R,
        today: NaiveDate,
    ) -> Self {
        let mut rows = Self::default();
        for card in cards {
            let age = rand_i64(rng, 0, CARD_MAX_AGE_DAYS);
            let created = today - Duration::days(age);
            let display_period_end = today + Duration::days(CARD_DISPLAY_DAYS - age);
            let id = ids.allocate(IdFamily::MarketplaceCard);
            let creator_id = ids.allocate(IdFamily::CardCreator);
            rows.cards.push(marketplace_card::ActiveModel::from_record(
                id,
                creator_id,
                card,
                created,
                display_period_end,
            ));
        }
        rows
    }

    pub fn compose(self, backend: DbBackend) -> Option<String> {
        compose(backend, self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        rand::new_rng,
        record::{fixtures, ListingPrice, Role},
        resource::Pools,
    };
    use rand::rngs::StdRng;
    use sea_orm::ActiveValue;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2022, 5, 17)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn value<T: Clone + Into<sea_orm::Value>>(v: &ActiveValue<T>) -> T {
        match v {
            ActiveValue::Set(v) | ActiveValue::Unchanged(v) => v.clone(),
            ActiveValue::NotSet => panic!("value not set"),
        }
    }

    fn users(rng: &mut StdRng, pools: &Pools, n: usize) -> Vec<User> {
        (0..n)
            .map(|_| User::rand_fake_new(rng, pools, Role::User).unwrap())
            .collect()
    }

    fn businesses(rng: &mut StdRng, pools: &Pools, n: usize) -> (Vec<Business>, Catalog) {
        let businesses = (0..n)
            .map(|_| Business::rand_fake_new(rng, pools).unwrap())
            .collect();
        let catalog =
            Catalog::rand_fake_new(rng, pools, n * PRODUCTS_PER_BUSINESS, ListingPrice::PerItem)
                .unwrap();
        (businesses, catalog)
    }

    #[test]
    fn zero_rows_compose_to_nothing() {
        let rows: Vec<address::ActiveModel> = Vec::new();
        assert_eq!(compose(DbBackend::MySql, rows), None);

        let statements = UserRows::default().compose(DbBackend::MySql);
        assert!(statements.addresses.is_none());
        assert!(statements.users.is_none());
    }

    #[test]
    fn statement_names_the_table_and_columns() {
        let pools = fixtures::pools();
        let mut rng = new_rng(Some(2));
        let users = users(&mut rng, &pools, 3);
        let mut ids = IdAllocator::default();
        let sql = UserRows::assemble(&users, &mut ids, now().date())
            .compose(DbBackend::MySql)
            .addresses
            .unwrap();
        let header = concat!(
            "INSERT INTO `address` (`ID`, `CITY`, `COUNTRY`, `POSTCODE`, `REGION`, ",
            "`STREET_NAME`, `STREET_NUMBER`, `SUBURB`) VALUES ("
        );
        assert!(sql.starts_with(header));
        assert!(sql.ends_with(");"));
        assert_eq!(sql.matches("), (").count(), 2);
    }

    #[test]
    fn user_rows_take_consecutive_ids() {
        let pools = fixtures::pools();
        let mut rng = new_rng(Some(2));
        let users = users(&mut rng, &pools, 4);
        let mut ids = IdAllocator::default();
        let rows = UserRows::assemble(&users, &mut ids, now().date());
        let user_ids: Vec<i64> = rows.users.iter().map(|u| value(&u.id)).collect();
        let address_ids: Vec<i64> = rows.users.iter().map(|u| value(&u.address_id)).collect();
        assert_eq!(user_ids, vec![2, 3, 4, 5]);
        assert_eq!(address_ids, vec![2, 3, 4, 5]);
        assert_eq!(ids.peek(IdFamily::User), 6);
    }

    #[test]
    fn quotes_in_free_text_are_escaped_for_every_dialect() {
        let pools = fixtures::pools();
        let mut rng = new_rng(Some(2));
        let mut user = User::rand_fake_new(&mut rng, &pools, Role::User).unwrap();
        user.last_name = "O'Brien".to_owned();
        user.bio = "It's me'); DROP TABLE user; --".to_owned();
        let render = |backend: DbBackend| {
            let mut ids = IdAllocator::default();
            UserRows::assemble(&[user.clone()], &mut ids, now().date())
                .compose(backend)
                .users
                .unwrap()
        };

        let mysql = render(DbBackend::MySql);
        assert!(mysql.contains(r"'O\'Brien'"));
        assert!(mysql.contains(r"'It\'s me\'); DROP TABLE user; --'"));

        let postgres = render(DbBackend::Postgres);
        assert!(postgres.contains(r"E'O\'Brien'"));
        assert!(postgres.contains(r"E'It\'s me\'); DROP TABLE user; --'"));

        let sqlite = render(DbBackend::Sqlite);
        assert!(sqlite.contains("'O''Brien'"));
        assert!(sqlite.contains("'It''s me''); DROP TABLE user; --'"));

        for sql in [mysql, postgres, sqlite] {
            assert!(!sql.contains("'O'Brien'"));
            assert!(!sql.contains("me')"));
        }
    }

    #[test]
    fn each_business_consumes_five_catalog_slots_in_order() {
        let pools = fixtures::pools();
        let mut rng = new_rng(Some(31));
        let (businesses, catalog) = businesses(&mut rng, &pools, 4);
        let mut ids = IdAllocator::default();
        let window = LikeWindow::from_ids(2..12);
        let rows = BusinessRows::assemble(&businesses, &catalog, &mut ids, &window, &mut rng, now())
            .unwrap();

        assert_eq!(rows.products.len(), 20);
        assert_eq!(rows.inventory.len(), 20);
        assert_eq!(rows.sale_items.len(), 20);
        for (i, product) in rows.products.iter().enumerate() {
            let entry = &catalog.entries()[i];
            assert_eq!(value(&product.product_id), entry.product.code);
            assert_eq!(value(&product.row_id), i as i64 + 1);
            assert_eq!(
                value(&product.business_id),
                (i / PRODUCTS_PER_BUSINESS) as i64 + 1
            );
            assert_eq!(
                value(&product.manufacturer),
                businesses[i / PRODUCTS_PER_BUSINESS].name
            );
        }
        for (i, (item, sale)) in rows.inventory.iter().zip(&rows.sale_items).enumerate() {
            let entry = &catalog.entries()[i];
            assert_eq!(value(&item.row_id), i as i64 + 1);
            assert_eq!(value(&item.total_price), entry.item.total_price);
            assert_eq!(value(&sale.inventory_item_id), value(&item.id));
            assert_eq!(value(&sale.closes), value(&item.expires));
            assert!(!value(&sale.sold));
        }
        assert_eq!(ids.peek(IdFamily::Product), 21);
        assert_eq!(ids.peek(IdFamily::Business), 5);
        assert_eq!(ids.peek(IdFamily::BusinessAdmin), 6);
    }

    #[test]
    fn likes_point_into_the_window() {
        let pools = fixtures::pools();
        let mut rng = new_rng(Some(5));
        let (businesses, catalog) = businesses(&mut rng, &pools, 20);
        let mut ids = IdAllocator::default();
        let window = LikeWindow::from_run(2, 50).unwrap();
        let rows = BusinessRows::assemble(&businesses, &catalog, &mut ids, &window, &mut rng, now())
            .unwrap();
        assert!(rows.likes.len() <= 100 * MAX_LIKES_PER_LISTING as usize);
        for like in &rows.likes {
            assert!((51..=100).contains(&value(&like.user_id)));
            assert!((1..=100).contains(&value(&like.sale_item_id)));
        }
    }

    #[test]
    fn short_catalog_is_rejected() {
        let pools = fixtures::pools();
        let mut rng = new_rng(Some(5));
        let (businesses, _) = businesses(&mut rng, &pools, 2);
        let catalog = Catalog::rand_fake_new(&mut rng, &pools, 9, ListingPrice::PerItem).unwrap();
        let mut ids = IdAllocator::default();
        let err = BusinessRows::assemble(
            &businesses,
            &catalog,
            &mut ids,
            &LikeWindow::from_ids(2..3),
            &mut rng,
            now(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SeedError::CatalogExhausted {
                needed: 10,
                available: 9,
                ..
            }
        ));
    }

    #[test]
    fn recomposing_with_the_same_seed_is_byte_identical() {
        let pools = fixtures::pools();
        let run = || {
            let mut rng = new_rng(Some(99));
            let (businesses, catalog) = businesses(&mut rng, &pools, 3);
            let mut ids = IdAllocator::default();
            let window = LikeWindow::from_ids(2..30);
            let statements =
                BusinessRows::assemble(&businesses, &catalog, &mut ids, &window, &mut rng, now())
                    .unwrap()
                    .compose(DbBackend::MySql);
            (
                statements.businesses,
                statements.products,
                statements.inventory,
                statements.sale_items,
                statements.likes,
            )
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn cards_stay_on_display_for_three_weeks() {
        let pools = fixtures::pools();
        let mut rng = new_rng(Some(12));
        let cards: Vec<MarketplaceCard> = (0..30)
            .map(|_| MarketplaceCard::rand_fake_new(&mut rng, &pools).unwrap())
            .collect();
        let mut ids = IdAllocator::default();
        let today = now().date();
        let rows = CardRows::assemble(&cards, &mut ids, &mut rng, today);
        for (i, card) in rows.cards.iter().enumerate() {
            let created = value(&card.created);
            let end = value(&card.display_period_end);
            assert_eq!(end - created, Duration::days(CARD_DISPLAY_DAYS));
            assert!(today - created <= Duration::days(CARD_MAX_AGE_DAYS));
            assert_eq!(value(&card.marketplace_card_id), i as i64 + 1);
            assert_eq!(value(&card.creator_id), i as i64 + 10);
        }
        let sql = rows.compose(DbBackend::MySql).unwrap();
        let header = concat!(
            "INSERT INTO `marketplace_card` (`MARKETPLACE_CARD_ID`, `CREATOR_ID`, `SECTION`, ",
            "`TITLE`, `DESCRIPTION`, `CREATED`, `DISPLAY_PERIOD_END`) VALUES "
        );
        assert!(sql.starts_with(header));
    }
}
