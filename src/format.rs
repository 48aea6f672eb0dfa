//! Display Helpers

use chrono::{DateTime, Utc};

/// `YYYY-MM-DD`, or an empty string when unknown
pub fn format_date(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

/// Stable avatar colour derived from a name (32-bit string hash over UTF-16 units)
pub fn string_to_color(name: &str) -> String {
    let mut hash: i32 = 0;
    for unit in name.encode_utf16() {
        hash = (unit as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    let mut color = String::from("#");
    for i in 0..3 {
        let value = (hash >> (i * 8)) & 0xff;
        color.push_str(&format!("{:02x}", value));
    }
    color
}

/// First letter, upper-cased, for avatar badges
pub fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let ts = DateTime::parse_from_rfc3339("2025-08-20T10:00:00Z").unwrap().with_timezone(&Utc);
        assert_eq!(format_date(Some(ts)), "2025-08-20");
        assert_eq!(format_date(None), "");
    }

    #[test]
    fn test_string_to_color() {
        assert_eq!(string_to_color("a"), "#610000");
        assert_eq!(string_to_color(""), "#000000");
        assert_eq!(string_to_color("Laptops"), string_to_color("Laptops"));
        assert_eq!(string_to_color("Laptops").len(), 7);
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial("laptops"), "L");
        assert_eq!(initial(""), "");
    }
}
