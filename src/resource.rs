use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::error::{Result, SeedError};

/// Line-oriented resource files the generators sample from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolKind {
    Adjectives,
    CityNames,
    Suburbs,
    Countries,
    FirstNames,
    LastNames,
    RegionNames,
    StreetNames,
    StreetTypes,
    Bio,
    Intro,
    BusinessNames,
    ProductNames,
    CardAdjectives,
}

impl PoolKind {
    pub fn file_name(self) -> &'static str {
        match self {
            PoolKind::Adjectives => "adjectives.txt",
            PoolKind::CityNames => "cityNames.txt",
            PoolKind::Suburbs => "cleanSuburbs.txt",
            PoolKind::Countries => "countries.txt",
            PoolKind::FirstNames => "firstNames.txt",
            PoolKind::LastNames => "lastNames.txt",
            PoolKind::RegionNames => "regionNames.txt",
            PoolKind::StreetNames => "streetNames.txt",
            PoolKind::StreetTypes => "streetTypes.txt",
            PoolKind::Bio => "bio.txt",
            PoolKind::Intro => "intro.txt",
            PoolKind::BusinessNames => "businessNames.txt",
            PoolKind::ProductNames => "productNames.txt",
            PoolKind::CardAdjectives => "cardAdjectives.txt",
        }
    }
}

/// The lines of one resource file, kept as read. Callers trim what they take.
#[derive(Debug, Clone)]
pub struct Pool {
    name: String,
    lines: Vec<String>,
}

impl Pool {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| SeedError::Resource {
            path: path.to_path_buf(),
            source,
        })?;
        let pool = Self::from_lines(path.display().to_string(), content.lines());
        debug!("Loaded {} lines from {}", pool.len(), pool.name);
        Ok(pool)
    }

    pub fn from_lines<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str> {
        self.lines
            .choose(rng)
            .map(String::as_str)
            .ok_or_else(|| SeedError::EmptyPool(self.name.clone()))
    }
}

#[derive(Debug, Default)]
pub struct Pools {
    pools: HashMap<PoolKind, Pool>,
}

impl Pools {
    pub fn load(dir: &Path, kinds: &[PoolKind]) -> Result<Self> {
        let mut pools = Self::default();
        for &kind in kinds {
            if pools.pools.contains_key(&kind) {
                continue;
            }
            let path: PathBuf = dir.join(kind.file_name());
            pools.insert(kind, Pool::load(&path)?);
        }
        Ok(pools)
    }

    pub fn insert(&mut self, kind: PoolKind, pool: Pool) {
        self.pools.insert(kind, pool);
    }

    pub fn get(&self, kind: PoolKind) -> Result<&Pool> {
        self.pools
            .get(&kind)
            .ok_or(SeedError::MissingPool(kind.file_name()))
    }

    /// Shorthand for sampling one untrimmed line out of `kind`.
    pub fn choose<R: Rng + ?Sized>(&self, kind: PoolKind, rng: &mut R) -> Result<&str> {
        self.get(kind)?.choose(rng)
    }
}
