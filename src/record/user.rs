use chrono::NaiveDate;
use rand::Rng;

use super::{title_case, Address};
use crate::{
    error::Result,
    rand::rand_date,
    resource::{PoolKind, Pools},
};

/// bcrypt of "example123".
pub const USER_PASSWORD: &str = "$2a$10$s/cWZcqSZOM4ekPs2xCyEuV0Ykt9VOjBAflU5J884dt9GNWYuXItu";
/// bcrypt of "admin123".
pub const ADMIN_PASSWORD: &str = "$2a$10$ufspUI98vhko6NuQ.AiPBuWqqmuniMH8giMugQa4gFw0gN6zvJGH6";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    GlobalAdmin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::GlobalAdmin => "global_admin",
        }
    }

    pub fn password(self) -> &'static str {
        match self {
            Role::User => USER_PASSWORD,
            Role::GlobalAdmin => ADMIN_PASSWORD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub nickname: String,
    pub date_of_birth: NaiveDate,
    pub bio: String,
    pub email: String,
    pub address: Address,
    pub role: Role,
}

impl User {
    pub fn rand_fake_new<R: Rng + ?Sized>(rng: &mut R, pools: &Pools, role: Role) -> Result<Self> {
        let first_name = pools.choose(PoolKind::FirstNames, rng)?.trim().to_owned();
        let middle_name = pools.choose(PoolKind::FirstNames, rng)?.trim().to_owned();
        let last_name = title_case(pools.choose(PoolKind::LastNames, rng)?)
            .trim()
            .to_owned();
        let nickname = format!(
            "{} {}",
            title_case(pools.choose(PoolKind::Adjectives, rng)?.trim()),
            first_name
        );
        let date_of_birth = rand_date(rng, 1900..=2006);
        let bio = format!(
            "{}, you can call me {} or {} for fun. {}",
            pools.choose(PoolKind::Intro, rng)?.trim(),
            first_name,
            nickname,
            pools.choose(PoolKind::Bio, rng)?.trim()
        );
        let email = format!(
            "{}{}@gmail.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        );
        Ok(Self {
            address: Address::rand_fake_new(rng, pools)?,
            first_name,
            middle_name,
            last_name,
            nickname,
            date_of_birth,
            bio,
            email,
            role,
        })
    }

    pub fn password(&self) -> &'static str {
        self.role.password()
    }
}
