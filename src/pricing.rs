//! Daily rental price.
//!
//! `rate = BASE + city_mpg * MILEAGE_FACTOR + age_years * AGE_FACTOR`, rounded
//! to whole dollars.

use chrono::{Datelike, Local};

pub const BASE_PRICE_PER_DAY: f64 = 50.0;
/// Dollars per city mpg.
pub const MILEAGE_FACTOR: f64 = 0.1;
/// Dollars per year of vehicle age.
pub const AGE_FACTOR: f64 = 0.05;

/// Daily rate as a whole-dollar string, aged against the current local year.
pub fn daily_rate(city_mpg: f64, model_year: i32) -> String {
    daily_rate_for_year(city_mpg, model_year, Local::now().year())
}

pub fn daily_rate_for_year(city_mpg: f64, model_year: i32, current_year: i32) -> String {
    let rate = rate_value(city_mpg, model_year, current_year).round();
    // `+ 0.0` folds a rounded -0.0 into 0.0 so it never prints as "-0".
    format!("{:.0}", rate + 0.0)
}

fn rate_value(city_mpg: f64, model_year: i32, current_year: i32) -> f64 {
    let age_years = f64::from(current_year) - f64::from(model_year);
    BASE_PRICE_PER_DAY + city_mpg * MILEAGE_FACTOR + age_years * AGE_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camry_example() {
        // 50 + 2.8 + 4 * 0.05 = 53.0
        assert_eq!(daily_rate_for_year(28.0, 2022, 2026), "53");
        // 50 + 2.8 + 0 = 52.8
        assert_eq!(daily_rate_for_year(28.0, 2022, 2022), "53");
        // 50 + 2.0 + 0 = 52.0
        assert_eq!(daily_rate_for_year(20.0, 2022, 2022), "52");
    }

    #[test]
    fn halves_round_up() {
        // 50 + 2.5 = 52.5
        assert_eq!(daily_rate_for_year(25.0, 2022, 2022), "53");
        // 50 + 13.4 = 63.4
        assert_eq!(daily_rate_for_year(134.0, 2022, 2022), "63");
    }

    #[test]
    fn current_year_variant_matches_wall_clock() {
        let year = Local::now().year();
        assert_eq!(daily_rate(31.0, 2020), daily_rate_for_year(31.0, 2020, year));
    }

    #[test]
    fn monotone_in_mpg_and_age() {
        let rate = |mpg: f64, model_year: i32| -> i64 {
            daily_rate_for_year(mpg, model_year, 2026).parse().unwrap()
        };
        let mut prev = i64::MIN;
        for mpg in 0..200 {
            let r = rate(f64::from(mpg), 2020);
            assert!(r >= prev, "mpg {mpg}: {r} < {prev}");
            prev = r;
        }
        let mut prev = i64::MIN;
        for model_year in (1950..=2026).rev() {
            let r = rate(30.0, model_year);
            assert!(r >= prev, "year {model_year}: {r} < {prev}");
            prev = r;
        }
    }

    #[test]
    fn rounding_to_zero_never_prints_negative_zero() {
        // 50 - 50.2 = -0.2
        assert_eq!(daily_rate_for_year(-502.0, 2022, 2022), "0");
    }

    #[test]
    fn extreme_model_years_do_not_overflow() {
        let ancient: f64 = daily_rate_for_year(28.0, i32::MIN, 2026).parse().unwrap();
        assert!(ancient > 1.0e8, "{ancient}");

        let far_future: f64 = daily_rate_for_year(28.0, i32::MAX, 2026).parse().unwrap();
        assert!(far_future < -1.0e8, "{far_future}");

        let old_clock: f64 = daily_rate_for_year(28.0, i32::MAX, i32::MIN).parse().unwrap();
        assert!(old_clock.is_finite() && old_clock < 0.0);
    }
}
