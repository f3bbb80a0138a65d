use rand::Rng;

use crate::{
    error::Result,
    rand::rand_i64,
    resource::{PoolKind, Pools},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    ForSale,
    Wanted,
    Exchange,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::ForSale, Section::Wanted, Section::Exchange];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::ForSale => "For Sale",
            Section::Wanted => "Wanted",
            Section::Exchange => "Exchange",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketplaceCard {
    pub section: Section,
    pub title: String,
    pub description: String,
}

impl MarketplaceCard {
    pub fn rand_fake_new<R: Rng + ?Sized>(rng: &mut R, pools: &Pools) -> Result<Self> {
        let section = Section::ALL[rng.gen_range(0..Section::ALL.len())];
        let title = pools.choose(PoolKind::ProductNames, rng)?.trim().to_owned();
        let offer = match section {
            Section::ForSale => format!("Will sell for ${}.", rand_i64(rng, 0, 100)),
            Section::Wanted => format!("Wanted for less than ${}.", rand_i64(rng, 0, 100)),
            Section::Exchange => format!(
                "Will exchange for {}.",
                pools.choose(PoolKind::ProductNames, rng)?.trim()
            ),
        };
        let description = format!(
            "{} {}. {}",
            pools.choose(PoolKind::CardAdjectives, rng)?.trim(),
            title,
            offer
        );
        Ok(Self {
            section,
            title,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rand::new_rng, record::fixtures};

    #[test]
    fn description_matches_the_section() {
        let pools = fixtures::pools();
        let mut rng = new_rng(Some(17));
        let mut seen = Vec::new();
        for _ in 0..100 {
            let card = MarketplaceCard::rand_fake_new(&mut rng, &pools).unwrap();
            let offer = card
                .description
                .split_once(&format!(" {}. ", card.title))
                .map(|(_, offer)| offer.to_owned())
                .unwrap();
            match card.section {
                Section::ForSale => assert!(offer.starts_with("Will sell for $")),
                Section::Wanted => assert!(offer.starts_with("Wanted for less than $")),
                Section::Exchange => assert!(offer.starts_with("Will exchange for ")),
            }
            seen.push(card.section);
        }
        for section in Section::ALL {
            assert!(seen.contains(&section));
        }
    }
}
