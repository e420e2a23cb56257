//! Terminal formatting for listings.
//!
//! Formatting lives here so the resolver modules never print.

use serde::Serialize;

use crate::domain::VehicleRecord;

/// A record as printed by `cars --json`: the vehicle fields plus its price and,
/// when requested, its image.
#[derive(Debug, Serialize)]
pub struct Listing<'a> {
    #[serde(flatten)]
    pub vehicle: &'a VehicleRecord,
    pub daily_rate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'a str>,
}

/// Pairs each record with its rate and, if given, the image at the same index.
pub fn listings<'a>(records: &'a [VehicleRecord], images: Option<&'a [String]>) -> Vec<Listing<'a>> {
    records
        .iter()
        .enumerate()
        .map(|(i, vehicle)| Listing {
            vehicle,
            daily_rate: vehicle.daily_rate(),
            image: images.and_then(|urls| urls.get(i)).map(String::as_str),
        })
        .collect()
}

/// Listing table with a daily-rate column.
pub fn format_listings(records: &[VehicleRecord]) -> String {
    let mut out = String::new();

    if records.is_empty() {
        out.push_str("No listings.\n");
        return out;
    }

    out.push_str(
        format!(
            "{:<14} {:<22} {:>4} {:<9} {:<5} {:<10} {:<9} {:>5} {:>5} {:>7}\n",
            "make", "model", "year", "class", "drive", "trans", "fuel", "city", "hwy", "$/day"
        )
        .trim_end(),
    );
    out.push('\n');

    out.push_str(
        format!(
            "{:-<14} {:-<22} {:-<4} {:-<9} {:-<5} {:-<10} {:-<9} {:-<5} {:-<5} {:-<7}\n",
            "", "", "", "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for r in records {
        out.push_str(&format!(
            "{:<14} {:<22} {:>4} {:<9} {:<5} {:<10} {:<9} {:>5.0} {:>5.0} {:>7}\n",
            truncate(&r.make, 14),
            truncate(&r.model, 22),
            r.year,
            truncate(&r.body_class, 9),
            r.drive_type,
            truncate(&r.transmission, 10),
            truncate(&r.fuel_type, 9),
            r.city_mpg,
            r.highway_mpg,
            r.daily_rate(),
        ));
    }

    out.push_str(&format!("\n{} listing(s)\n", records.len()));
    out
}

/// One `make model year  url` line per record.
pub fn format_images(records: &[VehicleRecord], images: &[String]) -> String {
    let mut out = String::new();
    for (r, url) in records.iter().zip(images) {
        let name = format!("{} {} {}", r.make, r.model, r.year);
        out.push_str(&format!("{:<42} {}\n", truncate(&name, 42), url));
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('~');
    out
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Local};

    use super::*;
    use crate::data::sample_table;
    use crate::pricing::daily_rate_for_year;

    #[test]
    fn table_lists_every_record_with_rate() {
        let out = format_listings(&sample_table());
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[0].starts_with("make"));
        assert!(lines[1].starts_with("----"));
        assert!(lines[2].starts_with("Toyota"));
        let camry_rate = daily_rate_for_year(28.0, 2022, Local::now().year());
        assert!(lines[2].trim_end().ends_with(&camry_rate), "{}", lines[2]);
        assert!(lines[4].contains("4WD"));
        assert!(out.trim_end().ends_with("5 listing(s)"));
    }

    #[test]
    fn empty_input_says_so() {
        assert_eq!(format_listings(&[]), "No listings.\n");
    }

    #[test]
    fn json_listing_carries_rate_and_optional_image() {
        let records = sample_table();
        let plain = serde_json::to_value(listings(&records[..1], None)).unwrap();
        assert_eq!(plain[0]["make"], "Toyota");
        assert_eq!(plain[0]["combination_mpg"], records[0].combined_mpg);
        assert_eq!(plain[0]["daily_rate"], records[0].daily_rate());
        assert!(plain[0].get("image").is_none());

        let images = vec!["https://img/1".to_string()];
        let with_images = serde_json::to_value(listings(&records[..2], Some(&images))).unwrap();
        assert_eq!(with_images[0]["image"], "https://img/1");
        assert!(with_images[1].get("image").is_none());
    }

    #[test]
    fn image_lines_follow_record_order() {
        let records = sample_table();
        let images = vec!["https://img/a".to_string(), "https://img/b".to_string()];
        let out = format_images(&records, &images);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Toyota Camry 2022"));
        assert!(lines[0].ends_with("https://img/a"));
        assert!(lines[1].starts_with("Honda Civic 2022"));
    }

    #[test]
    fn long_names_are_truncated() {
        assert_eq!(truncate("Mercedes-Benz", 14), "Mercedes-Benz");
        assert_eq!(truncate("Mercedes-Benz AMG", 8), "Mercede~");
    }
}
