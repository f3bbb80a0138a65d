use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use sea_orm::{DbBackend, EntityTrait, IdenStatic, Iterable};
use tracing::info;

use crate::{
    entity::{
        address, admins, business, inventory_item, marketplace_card, product, sale_item,
        sale_listing_like, user,
    },
    error::Result,
    output::write_statement,
    resource::PoolKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Dialect {
    Mysql,
    Postgres,
    Sqlite,
}

impl From<Dialect> for DbBackend {
    fn from(dialect: Dialect) -> Self {
        match dialect {
            Dialect::Mysql => DbBackend::MySql,
            Dialect::Postgres => DbBackend::Postgres,
            Dialect::Sqlite => DbBackend::Sqlite,
        }
    }
}

/// Settings shared by every generating subcommand.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub backend: DbBackend,
    pub seed: Option<u64>,
    pub resources: PathBuf,
    pub out_dir: PathBuf,
    pub state: PathBuf,
}

impl From<&crate::Args> for RunConfig {
    fn from(args: &crate::Args) -> Self {
        Self {
            backend: args.dialect.into(),
            seed: args.seed,
            resources: args.resources.clone(),
            out_dir: args.out_dir.clone(),
            state: args.state.clone(),
        }
    }
}

/// One output file and the statement it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    UserAddress,
    UserAccount,
    BusinessAddress,
    BusinessAccount,
    BusinessAdmin,
    BusinessProduct,
    BusinessInventory,
    BusinessSaleListing,
    LikedSaleListing,
    AdminAddress,
    AdminAccount,
    MarketplaceCard,
}

impl Family {
    pub const SEED: [Family; 11] = [
        Family::UserAddress,
        Family::UserAccount,
        Family::BusinessAddress,
        Family::BusinessAccount,
        Family::BusinessAdmin,
        Family::BusinessProduct,
        Family::BusinessInventory,
        Family::BusinessSaleListing,
        Family::LikedSaleListing,
        Family::AdminAddress,
        Family::AdminAccount,
    ];

    pub const CARDS: [Family; 1] = [Family::MarketplaceCard];
}

const ADDRESS_POOLS: &[PoolKind] = &[
    PoolKind::StreetNames,
    PoolKind::StreetTypes,
    PoolKind::Suburbs,
    PoolKind::CityNames,
    PoolKind::RegionNames,
    PoolKind::Countries,
];

const USER_POOLS: &[PoolKind] = &[
    PoolKind::FirstNames,
    PoolKind::LastNames,
    PoolKind::Adjectives,
    PoolKind::Intro,
    PoolKind::Bio,
];

const BUSINESS_POOLS: &[PoolKind] = &[PoolKind::BusinessNames];

const PRODUCT_POOLS: &[PoolKind] = &[PoolKind::ProductNames, PoolKind::Adjectives];

const CARD_POOLS: &[PoolKind] = &[PoolKind::ProductNames, PoolKind::CardAdjectives];

#[derive(Debug, Clone)]
pub struct FamilyConfig {
    pub family: Family,
    pub inputs: Vec<PoolKind>,
    pub output: PathBuf,
    pub table: String,
    pub columns: Vec<String>,
}

impl FamilyConfig {
    fn new<E: EntityTrait>(
        family: Family,
        inputs: &[&[PoolKind]],
        out_dir: &Path,
        file_name: &str,
    ) -> Self {
        Self {
            family,
            inputs: inputs.concat(),
            output: out_dir.join(file_name),
            table: E::default().table_name().to_owned(),
            columns: E::Column::iter()
                .map(|column| column.as_str().to_owned())
                .collect(),
        }
    }
}

/// Every family the tool can produce, keyed by family.
#[derive(Debug, Clone)]
pub struct Families {
    families: HashMap<Family, FamilyConfig>,
}

impl Families {
    pub fn new(out_dir: &Path) -> Self {
        let user: &[&[PoolKind]] = &[USER_POOLS, ADDRESS_POOLS];
        let business: &[&[PoolKind]] = &[BUSINESS_POOLS, ADDRESS_POOLS];
        let products: &[&[PoolKind]] = &[PRODUCT_POOLS];
        let configs = [
            FamilyConfig::new::<address::Entity>(
                Family::UserAddress,
                user,
                out_dir,
                "userAddress.sql",
            ),
            FamilyConfig::new::<user::Entity>(
                Family::UserAccount,
                user,
                out_dir,
                "userAccounts.sql",
            ),
            FamilyConfig::new::<address::Entity>(
                Family::BusinessAddress,
                business,
                out_dir,
                "businessAddress.sql",
            ),
            FamilyConfig::new::<business::Entity>(
                Family::BusinessAccount,
                business,
                out_dir,
                "businessAccounts.sql",
            ),
            FamilyConfig::new::<admins::Entity>(
                Family::BusinessAdmin,
                &[],
                out_dir,
                "businessAdmins.sql",
            ),
            FamilyConfig::new::<product::Entity>(
                Family::BusinessProduct,
                products,
                out_dir,
                "businessProducts.sql",
            ),
            FamilyConfig::new::<inventory_item::Entity>(
                Family::BusinessInventory,
                products,
                out_dir,
                "businessInventory.sql",
            ),
            FamilyConfig::new::<sale_item::Entity>(
                Family::BusinessSaleListing,
                products,
                out_dir,
                "businessSaleListings.sql",
            ),
            FamilyConfig::new::<sale_listing_like::Entity>(
                Family::LikedSaleListing,
                &[],
                out_dir,
                "likedSaleListings.sql",
            ),
            FamilyConfig::new::<address::Entity>(
                Family::AdminAddress,
                user,
                out_dir,
                "adminAddress.sql",
            ),
            FamilyConfig::new::<user::Entity>(
                Family::AdminAccount,
                user,
                out_dir,
                "adminAccounts.sql",
            ),
            FamilyConfig::new::<marketplace_card::Entity>(
                Family::MarketplaceCard,
                &[CARD_POOLS],
                out_dir,
                "marketplaceCards.sql",
            ),
        ];
        Self {
            families: configs
                .into_iter()
                .map(|config| (config.family, config))
                .collect(),
        }
    }

    pub fn get(&self, family: Family) -> &FamilyConfig {
        &self.families[&family]
    }

    /// Resource pools needed to generate all of `families`, without repeats.
    pub fn inputs(&self, families: &[Family]) -> Vec<PoolKind> {
        let mut kinds: Vec<PoolKind> = Vec::new();
        for family in families {
            for kind in &self.get(*family).inputs {
                if !kinds.contains(kind) {
                    kinds.push(*kind);
                }
            }
        }
        kinds
    }

    pub fn write(&self, family: Family, statement: Option<String>) -> Result<()> {
        let config = self.get(family);
        info!(
            "{:?} -> {} ({})",
            family,
            config.table,
            config.columns.join(", ")
        );
        write_statement(&config.output, statement.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_family_is_configured() {
        let families = Families::new(Path::new("scripts"));
        for family in Family::SEED.iter().chain(Family::CARDS.iter()) {
            let config = families.get(*family);
            assert!(config.output.starts_with("scripts"));
            assert!(!config.columns.is_empty());
        }
    }

    #[test]
    fn tables_and_columns_come_from_the_entities() {
        let families = Families::new(Path::new("out"));
        let users = families.get(Family::UserAccount);
        assert_eq!(users.table, "user");
        assert_eq!(users.output, Path::new("out").join("userAccounts.sql"));
        assert_eq!(
            users.columns,
            [
                "ID",
                "FIRST_NAME",
                "MIDDLE_NAME",
                "LAST_NAME",
                "NICKNAME",
                "BIO",
                "EMAIL",
                "DATE_OF_BIRTH",
                "ADDRESS_ID",
                "PASSWORD",
                "ROLE",
                "CREATED",
            ]
        );
        assert_eq!(
            families.get(Family::LikedSaleListing).table,
            "sale_listing_like"
        );
    }

    #[test]
    fn inputs_are_deduplicated() {
        let families = Families::new(Path::new("scripts"));
        let kinds = families.inputs(&Family::SEED);
        assert_eq!(kinds.len(), 13);
        assert!(!kinds.contains(&PoolKind::CardAdjectives));
        let cards = families.inputs(&Family::CARDS);
        assert_eq!(
            cards,
            vec![PoolKind::ProductNames, PoolKind::CardAdjectives]
        );
    }
}
