use std::ops::RangeInclusive;

use chrono::NaiveDate;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Seeded when a seed is given so runs can be replayed, otherwise from entropy.
pub fn new_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn rand_i64<R: Rng + ?Sized>(rng: &mut R, start: i64, end: i64) -> i64 {
    rng.gen_range(start..=end)
}

/// Random date inside `years`. Days stop at 28 so every month is valid.
pub fn rand_date<R: Rng + ?Sized>(rng: &mut R, years: RangeInclusive<i32>) -> NaiveDate {
    let year = rng.gen_range(years);
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=28);
    NaiveDate::from_ymd_opt(year, month, day).expect("day 1..=28 exists in every month")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn rand_date_stays_in_bounds() {
        let mut rng = new_rng(Some(7));
        for _ in 0..500 {
            let date = rand_date(&mut rng, 2018..=2020);
            assert!((2018..=2020).contains(&date.year()));
            assert!(date.day() <= 28);
        }
    }

    #[test]
    fn seeded_rng_replays() {
        let a: Vec<i64> = {
            let mut rng = new_rng(Some(42));
            (0..10).map(|_| rand_i64(&mut rng, 1, 1000)).collect()
        };
        let b: Vec<i64> = {
            let mut rng = new_rng(Some(42));
            (0..10).map(|_| rand_i64(&mut rng, 1, 1000)).collect()
        };
        assert_eq!(a, b);
    }
}
