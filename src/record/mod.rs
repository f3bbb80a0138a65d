pub mod business;
pub mod card;
pub mod product;
pub mod user;

use rand::Rng;

use crate::{
    error::Result,
    rand::rand_i64,
    resource::{PoolKind, Pools},
};

pub use business::Business;
pub use card::MarketplaceCard;
pub use product::{Catalog, InventoryItem, ListingPrice, Product, SaleListing};
pub use user::{Role, User};

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Postal address shared by users and businesses. Gets its own id on output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub street_number: String,
    pub street_name: String,
    pub suburb: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub postcode: String,
}

impl Address {
    pub fn rand_fake_new<R: Rng + ?Sized>(rng: &mut R, pools: &Pools) -> Result<Self> {
        let street_number = rand_i64(rng, 1, 200).to_string();
        let street_name = format!(
            "{} {}",
            title_case(pools.choose(PoolKind::StreetNames, rng)?).trim(),
            title_case(pools.choose(PoolKind::StreetTypes, rng)?).trim()
        );
        Ok(Self {
            street_number,
            street_name,
            suburb: title_case(pools.choose(PoolKind::Suburbs, rng)?)
                .trim()
                .to_owned(),
            city: pools.choose(PoolKind::CityNames, rng)?.trim().to_owned(),
            region: title_case(pools.choose(PoolKind::RegionNames, rng)?)
                .trim()
                .to_owned(),
            country: pools.choose(PoolKind::Countries, rng)?.trim().to_owned(),
            postcode: rand_i64(rng, 1000, 9999).to_string(),
        })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::resource::{Pool, PoolKind, Pools};

    /// Small in-memory pools covering every resource file, with the messy
    /// whitespace the real files have.
    pub fn pools() -> Pools {
        let mut pools = Pools::default();
        let entries: [(PoolKind, &[&str]); 14] = [
            (PoolKind::Adjectives, &["shiny ", "QUIET", "brave"]),
            (PoolKind::CityNames, &["Christchurch ", "Auckland"]),
            (PoolKind::Suburbs, &["riccarton", "ILAM "]),
            (PoolKind::Countries, &["New Zealand", " Australia"]),
            (PoolKind::FirstNames, &["Alice", "Bob ", "Carol"]),
            (PoolKind::LastNames, &["smith", "O'BRIEN"]),
            (PoolKind::RegionNames, &["canterbury", "otago"]),
            (PoolKind::StreetNames, &["ilam", "CLYDE "]),
            (PoolKind::StreetTypes, &["road", "STREET"]),
            (PoolKind::Bio, &["I like cheese. ", "I collect stamps."]),
            (PoolKind::Intro, &["Hi there", "Hello "]),
            (PoolKind::BusinessNames, &["Bean There ", "Cafe O'Reilly"]),
            (PoolKind::ProductNames, &["Flat White", "Muffin ", "Scone"]),
            (PoolKind::CardAdjectives, &["Lovely", "Barely used "]),
        ];
        for (kind, lines) in entries {
            pools.insert(
                kind,
                Pool::from_lines(kind.file_name(), lines.iter().copied()),
            );
        }
        pools
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::new_rng;

    #[test]
    fn title_case_capitalises_each_word() {
        assert_eq!(title_case("ILAM road"), "Ilam Road");
        assert_eq!(title_case("o'brien"), "O'Brien");
        assert_eq!(title_case("  new  brighton\n"), "  New  Brighton\n");
    }

    #[test]
    fn address_fields_are_trimmed_and_in_range() {
        let pools = fixtures::pools();
        let mut rng = new_rng(Some(3));
        for _ in 0..50 {
            let address = Address::rand_fake_new(&mut rng, &pools).unwrap();
            let number: i64 = address.street_number.parse().unwrap();
            assert!((1..=200).contains(&number));
            let postcode: i64 = address.postcode.parse().unwrap();
            assert!((1000..=9999).contains(&postcode));
            assert_eq!(address.country, address.country.trim());
            assert!(["Ilam", "Clyde"]
                .iter()
                .any(|street| address.street_name.starts_with(street)));
        }
    }
}
