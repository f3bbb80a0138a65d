use rand::Rng;

use super::Address;
use crate::{
    error::Result,
    resource::{PoolKind, Pools},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessType {
    AccommodationAndFoodServices,
    RetailTrade,
    CharitableOrganisation,
    NonProfitOrganisation,
}

impl BusinessType {
    pub const ALL: [BusinessType; 4] = [
        BusinessType::AccommodationAndFoodServices,
        BusinessType::RetailTrade,
        BusinessType::CharitableOrganisation,
        BusinessType::NonProfitOrganisation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BusinessType::AccommodationAndFoodServices => "Accommodation and Food Services",
            BusinessType::RetailTrade => "Retail Trade",
            BusinessType::CharitableOrganisation => "Charitable Organisation",
            BusinessType::NonProfitOrganisation => "Non-Profit Organisation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Business {
    pub name: String,
    pub description: String,
    pub business_type: BusinessType,
    pub address: Address,
}

impl Business {
    pub fn rand_fake_new<R: Rng + ?Sized>(rng: &mut R, pools: &Pools) -> Result<Self> {
        let name = pools
            .choose(PoolKind::BusinessNames, rng)?
            .trim()
            .to_owned();
        let description = format!(
            "Welcome to {}! We are currently setting up shop so check back soon for progress!",
            name
        );
        let business_type = BusinessType::ALL[rng.gen_range(0..BusinessType::ALL.len())];
        Ok(Self {
            name,
            description,
            business_type,
            address: Address::rand_fake_new(rng, pools)?,
        })
    }
}
