use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use rand::Rng;
use tracing::info;

use crate::{
    allocator::IdAllocator,
    compose::CardRows,
    config::{Families, Family, RunConfig},
    rand::new_rng,
    record::MarketplaceCard,
    resource::Pools,
};

#[derive(Debug, Clone)]
pub struct Config {
    run: RunConfig,
    card_count: u32,
    db_url: Option<String>,
}

impl From<&super::Args> for Config {
    fn from(args: &super::Args) -> Self {
        let (card_count, db_url) = match &args.command {
            super::SubCommandArgs::Cards { cards, db_url } => (*cards, db_url.clone()),
            _ => unreachable!(),
        };
        Self {
            run: args.into(),
            card_count,
            db_url,
        }
    }
}

pub async fn execute<T: Into<Config>>(config: T) -> Result<IdAllocator> {
    let config = config.into();
    let families = Families::new(&config.run.out_dir);
    let pools = Pools::load(&config.run.resources, &families.inputs(&Family::CARDS))
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
        Local::now().naive_local().date(),
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
    today: NaiveDate,
) -> Result<IdAllocator> {
    let cards = (0..config.card_count)
        .map(|_| MarketplaceCard::rand_fake_new(rng, pools))
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to generate marketplace cards")?;
    let statement = CardRows::assemble(&cards, &mut ids, rng, today).compose(config.run.backend);
    families.write(Family::MarketplaceCard, statement)?;
    info!("{} marketplace cards generated", cards.len());
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{allocator::IdFamily, record::fixtures};
    use sea_orm::DbBackend;
    use std::fs;

    #[test]
    fn cards_continue_the_saved_counters() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            run: RunConfig {
                backend: DbBackend::Postgres,
                seed: Some(8),
                resources: dir.path().join("resources"),
                out_dir: dir.path().to_path_buf(),
                state: dir.path().join("seed_state.toml"),
            },
            card_count: 6,
            db_url: None,
        };
        let families = Families::new(dir.path());
        let mut ids = IdAllocator::default();
        ids.raise(IdFamily::MarketplaceCard, 500);
        let mut rng = new_rng(Some(8));
        let today = NaiveDate::from_ymd_opt(2022, 6, 1).unwrap();
        let ids = generate(&config, &fixtures::pools(), &families, ids, &mut rng, today).unwrap();

        assert_eq!(ids.peek(IdFamily::MarketplaceCard), 506);
        assert_eq!(ids.peek(IdFamily::CardCreator), 16);
        let sql = fs::read_to_string(&families.get(Family::MarketplaceCard).output).unwrap();
        assert!(sql.starts_with("INSERT INTO \"marketplace_card\""));
        assert!(sql.contains("(500, 10, "));
        assert!(sql.ends_with(");"));
    }
}
