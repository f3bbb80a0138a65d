use std::{fmt, fs, io::ErrorKind, ops::Range, path::Path};

use rand::Rng;
use sea_orm::{Database, DatabaseConnection};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    entity::{
        address, business, inventory_item, marketplace_card, max_id, product, sale_item, user,
    },
    error::{Result, SeedError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdFamily {
    User,
    Address,
    Business,
    /// Cursor over existing user ids handed to businesses as primary admin.
    BusinessAdmin,
    Product,
    InventoryItem,
    SaleItem,
    MarketplaceCard,
    /// Cursor over existing user ids handed to cards as creator.
    CardCreator,
}

impl IdFamily {
    pub const ALL: [IdFamily; 9] = [
        IdFamily::User,
        IdFamily::Address,
        IdFamily::Business,
        IdFamily::BusinessAdmin,
        IdFamily::Product,
        IdFamily::InventoryItem,
        IdFamily::SaleItem,
        IdFamily::MarketplaceCard,
        IdFamily::CardCreator,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IdFamily::User => "userId",
            IdFamily::Address => "addressId",
            IdFamily::Business => "businessId",
            IdFamily::BusinessAdmin => "businessAdminId",
            IdFamily::Product => "productId",
            IdFamily::InventoryItem => "inventoryItemId",
            IdFamily::SaleItem => "saleItemId",
            IdFamily::MarketplaceCard => "marketplaceCardId",
            IdFamily::CardCreator => "cardCreatorId",
        }
    }
}

/// Next free id per family. Users and global admins share the user counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdAllocator {
    user: i64,
    address: i64,
    business: i64,
    business_admin: i64,
    product: i64,
    inventory_item: i64,
    sale_item: i64,
    marketplace_card: i64,
    card_creator: i64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self {
            user: 2,
            address: 2,
            business: 1,
            business_admin: 2,
            product: 1,
            inventory_item: 1,
            sale_item: 1,
            marketplace_card: 1,
            card_creator: 10,
        }
    }
}

impl IdAllocator {
    fn slot_mut(&mut self, family: IdFamily) -> &mut i64 {
        match family {
            IdFamily::User => &mut self.user,
            IdFamily::Address => &mut self.address,
            IdFamily::Business => &mut self.business,
            IdFamily::BusinessAdmin => &mut self.business_admin,
            IdFamily::Product => &mut self.product,
            IdFamily::InventoryItem => &mut self.inventory_item,
            IdFamily::SaleItem => &mut self.sale_item,
            IdFamily::MarketplaceCard => &mut self.marketplace_card,
            IdFamily::CardCreator => &mut self.card_creator,
        }
    }

    pub fn peek(&self, family: IdFamily) -> i64 {
        match family {
            IdFamily::User => self.user,
            IdFamily::Address => self.address,
            IdFamily::Business => self.business,
            IdFamily::BusinessAdmin => self.business_admin,
            IdFamily::Product => self.product,
            IdFamily::InventoryItem => self.inventory_item,
            IdFamily::SaleItem => self.sale_item,
            IdFamily::MarketplaceCard => self.marketplace_card,
            IdFamily::CardCreator => self.card_creator,
        }
    }

    /// Returns the next free id of `family` and moves the counter past it.
    pub fn allocate(&mut self, family: IdFamily) -> i64 {
        let slot = self.slot_mut(family);
        let id = *slot;
        *slot += 1;
        id
    }

    /// Moves the counter of `family` forward to `next`. Never moves it back.
    pub fn raise(&mut self, family: IdFamily, next: i64) {
        let slot = self.slot_mut(family);
        if next > *slot {
            debug!("Raising {} from {} to {}", family.as_str(), slot, next);
            *slot = next;
        }
    }

    /// Loads the counters saved by the previous run, or the defaults if there is none.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("No id state at {}, starting from defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SeedError::StateRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&content).map_err(|source| SeedError::StateParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SeedError::Output {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| SeedError::Output {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Counters from the state file, raised to the live store when `db_url` is given.
    pub async fn restore(state: &Path, db_url: Option<&str>) -> Result<Self> {
        let mut ids = Self::load(state)?;
        if let Some(db_url) = db_url {
            let db = Database::connect(db_url).await?;
            ids.reconcile(&db).await?;
            info!("Reconciled id counters with the live store");
        }
        Ok(ids)
    }

    /// Raises every table-backed counter to the live store's `max(id) + 1`.
    pub async fn reconcile(&mut self, db: &DatabaseConnection) -> Result<()> {
        let maxima = [
            (
                IdFamily::User,
                max_id::<user::Entity, _>(db, user::Column::Id).await?,
            ),
            (
                IdFamily::Address,
                max_id::<address::Entity, _>(db, address::Column::Id).await?,
            ),
            (
                IdFamily::Business,
                max_id::<business::Entity, _>(db, business::Column::Id).await?,
            ),
            (
                IdFamily::Product,
                max_id::<product::Entity, _>(db, product::Column::RowId).await?,
            ),
            (
                IdFamily::InventoryItem,
                max_id::<inventory_item::Entity, _>(db, inventory_item::Column::Id).await?,
            ),
            (
                IdFamily::SaleItem,
                max_id::<sale_item::Entity, _>(db, sale_item::Column::Id).await?,
            ),
            (
                IdFamily::MarketplaceCard,
                max_id::<marketplace_card::Entity, _>(
                    db,
                    marketplace_card::Column::MarketplaceCardId,
                )
                .await?,
            ),
        ];
        for (family, max) in maxima {
            if let Some(max) = max {
                self.raise(family, max + 1);
            }
        }
        Ok(())
    }
}

impl fmt::Display for IdAllocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for family in IdFamily::ALL {
            writeln!(f, "Current {} = {}", family.as_str(), self.peek(family))?;
        }
        Ok(())
    }
}

/// Inclusive range of user ids that synthetic likes are attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeWindow {
    first: i64,
    last: i64,
}

impl LikeWindow {
    /// Users inserted by run number `run` when every run inserts `size` users.
    /// Runs are counted from 1.
    pub fn from_run(run: u32, size: u32) -> Result<Self> {
        if run == 0 || size == 0 {
            return Err(SeedError::EmptyRunWindow { run, size });
        }
        let last = i64::from(size) * i64::from(run);
        Ok(Self {
            first: last - i64::from(size) + 1,
            last,
        })
    }

    /// Users allocated during the current run.
    pub fn from_ids(ids: Range<i64>) -> Self {
        Self {
            first: ids.start,
            last: ids.end - 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first > self.last
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<i64> {
        if self.is_empty() {
            None
        } else {
            Some(rng.gen_range(self.first..=self.last))
        }
    }
}
