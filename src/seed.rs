use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use rand::Rng;
use tracing::info;

use crate::{
    allocator::{IdAllocator, IdFamily, LikeWindow},
    compose::{BusinessRows, UserRows, PRODUCTS_PER_BUSINESS},
    config::{Families, Family, RunConfig},
    rand::new_rng,
    record::{Business, Catalog, ListingPrice, Role, User},
    resource::Pools,
};

#[derive(Debug, Clone)]
pub struct Config {
    run: RunConfig,
    user_count: u32,
    business_count: u32,
    admin_count: u32,
    run_counter: Option<u32>,
    window_size: u32,
    listing_price: ListingPrice,
    db_url: Option<String>,
}

impl From<&super::Args> for Config {
    fn from(args: &super::Args) -> Self {
        match &args.command {
            super::SubCommandArgs::Seed {
                users,
                businesses,
                admins,
                run_counter,
                window_size,
                listing_price,
                db_url,
            } => Self {
                run: args.into(),
                user_count: *users,
                business_count: *businesses,
                admin_count: *admins,
                run_counter: *run_counter,
                window_size: *window_size,
                listing_price: *listing_price,
                db_url: db_url.clone(),
            },
            _ => unreachable!(),
        }
    }
}

/// Generates users, businesses with their catalog, and global admins, writes
/// one statement file per family and saves the advanced id counters.
pub async fn execute<T: Into<Config>>(config: T) -> Result<IdAllocator> {
    let config = config.into();
    let families = Families::new(&config.run.out_dir);
    let pools = Pools::load(&config.run.resources, &families.inputs(&Family::SEED))
        .context("Failed to load resource pools")?;
    let ids = IdAllocator::restore(&config.run.state, config.db_url.as_deref())
        .await
        .context("Failed to restore id counters")?;
    let mut rng = new_rng(config.run.seed);
    let ids = generate(
        &config,
        &pools,
        &families,
        ids,
        &mut rng,
        Local::now().naive_local(),
    )?;
    ids.save(&config.run.state)
        .context("Failed to save id counters")?;
    Ok(ids)
}

fn generate<R: Rng>(
    config: &Config,
    pools: &Pools,
    families: &Families,
    mut ids: IdAllocator,
    rng: &mut R,
    now: NaiveDateTime,
) -> Result<IdAllocator> {
    let backend = config.run.backend;
    let today = now.date();

    // users
    let users = (0..config.user_count)
        .map(|_| User::rand_fake_new(rng, pools, Role::User))
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to generate users")?;
    let first_user = ids.peek(IdFamily::User);
    let statements = UserRows::assemble(&users, &mut ids, today).compose(backend);
    families.write(Family::UserAddress, statements.addresses)?;
    families.write(Family::UserAccount, statements.users)?;
    info!("{} users generated", users.len());

    // businesses
    let businesses = (0..config.business_count)
        .map(|_| Business::rand_fake_new(rng, pools))
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to generate businesses")?;
    let catalog = Catalog::rand_fake_new(
        rng,
        pools,
        businesses.len() * PRODUCTS_PER_BUSINESS,
        config.listing_price,
    )
    .context("Failed to generate products")?;
    let window = match config.run_counter {
        Some(run) => LikeWindow::from_run(run, config.window_size)
            .context("Failed to derive the like window")?,
        None => LikeWindow::from_ids(first_user..ids.peek(IdFamily::User)),
    };
    let statements = BusinessRows::assemble(&businesses, &catalog, &mut ids, &window, rng, now)
        .context("Failed to assemble business rows")?
        .compose(backend);
    families.write(Family::BusinessAddress, statements.addresses)?;
    families.write(Family::BusinessAccount, statements.businesses)?;
    families.write(Family::BusinessAdmin, statements.admins)?;
    families.write(Family::BusinessProduct, statements.products)?;
    families.write(Family::BusinessInventory, statements.inventory)?;
    families.write(Family::BusinessSaleListing, statements.sale_items)?;
    families.write(Family::LikedSaleListing, statements.likes)?;
    info!(
        "{} businesses generated with {} products",
        businesses.len(),
        catalog.len()
    );

    // global admins
    let admins = (0..config.admin_count)
        .map(|_| User::rand_fake_new(rng, pools, Role::GlobalAdmin))
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to generate admins")?;
    let statements = UserRows::assemble(&admins, &mut ids, today).compose(backend);
    families.write(Family::AdminAddress, statements.addresses)?;
    families.write(Family::AdminAccount, statements.users)?;
    info!("{} global admins generated", admins.len());

    Ok(ids)
}
