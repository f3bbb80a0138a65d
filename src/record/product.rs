use chrono::NaiveDate;
use rand::Rng;
use tracing::debug;

use crate::{
    error::{Result, SeedError},
    rand::{rand_date, rand_i64},
    resource::{PoolKind, Pools},
};

pub const SALE_LISTING_DESCRIPTION: &str = "Buy me now, I am a cool product. Buy Me please!";

/// How a sale listing is priced from its inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ListingPrice {
    /// Listing price is the item's price per item, whatever the quantity.
    #[default]
    PerItem,
    /// Listing price is price per item times the listing quantity.
    Total,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    /// First and last character of the name plus three digits. Not unique.
    pub code: String,
    pub description: String,
    pub recommended_retail_price: i64,
}

impl Product {
    pub fn rand_fake_new<R: Rng + ?Sized>(rng: &mut R, pools: &Pools) -> Result<Self> {
        let name = pools.choose(PoolKind::ProductNames, rng)?.trim().to_owned();
        let code = product_code(&name, rand_i64(rng, 100, 999))?;
        let description = format!(
            "The {} {}. Buy it today.",
            pools.choose(PoolKind::Adjectives, rng)?.trim(),
            name
        );
        Ok(Self {
            name,
            code,
            description,
            recommended_retail_price: rand_i64(rng, 5, 300),
        })
    }
}

fn product_code(name: &str, suffix: i64) -> Result<String> {
    let first = name.chars().next().ok_or(SeedError::EmptyProductName)?;
    let last = name.chars().last().ok_or(SeedError::EmptyProductName)?;
    Ok(format!("{first}{last}{suffix}"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub product_code: String,
    pub manufactured: NaiveDate,
    pub created: NaiveDate,
    pub best_before: NaiveDate,
    pub expires: NaiveDate,
    pub sell_by: NaiveDate,
    pub price_per_item: i64,
    pub quantity: i64,
    pub total_price: i64,
}

impl InventoryItem {
    pub fn rand_fake_new<R: Rng + ?Sized>(rng: &mut R, product: &Product) -> Self {
        let best_before = rand_date(rng, 2022..=2025);
        let created = rand_date(rng, 2020..=2022);
        let manufactured = rand_date(rng, 2018..=2020);
        let price_per_item = rand_i64(rng, 5, 250);
        let quantity = rand_i64(rng, 500, 1000);
        Self {
            product_code: product.code.clone(),
            manufactured,
            created,
            best_before,
            expires: best_before,
            sell_by: best_before,
            price_per_item,
            quantity,
            total_price: price_per_item * quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleListing {
    pub closes: NaiveDate,
    pub quantity: i64,
    pub price: i64,
    pub sold: bool,
    pub description: &'static str,
}

impl SaleListing {
    pub fn rand_fake_new<R: Rng + ?Sized>(
        rng: &mut R,
        item: &InventoryItem,
        pricing: ListingPrice,
    ) -> Self {
        let quantity = rand_i64(rng, 1, 250);
        let price = match pricing {
            ListingPrice::PerItem => item.price_per_item,
            ListingPrice::Total => item.price_per_item * quantity,
        };
        Self {
            closes: item.expires,
            quantity,
            price,
            sold: false,
            description: SALE_LISTING_DESCRIPTION,
        }
    }
}

/// One product with the inventory item and sale listing generated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub product: Product,
    pub item: InventoryItem,
    pub listing: SaleListing,
}

/// Pre-generated catalog that businesses consume in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn rand_fake_new<R: Rng + ?Sized>(
        rng: &mut R,
        pools: &Pools,
        size: usize,
        pricing: ListingPrice,
    ) -> Result<Self> {
        let mut entries = Vec::with_capacity(size);
        for _ in 0..size {
            let product = Product::rand_fake_new(rng, pools)?;
            let item = InventoryItem::rand_fake_new(rng, &product);
            let listing = SaleListing::rand_fake_new(rng, &item, pricing);
            entries.push(CatalogEntry {
                product,
                item,
                listing,
            });
        }
        debug!(
            "Generated catalog of {} products ({:?} pricing)",
            size, pricing
        );
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
