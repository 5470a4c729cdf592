//! Output file naming

use chrono::NaiveDate;

/// Subdirectory holding one watchlist per category
pub const CATEGORY_DIR: &str = "categorized";

/// Date stamp used in file names: `dd-mm-yyyy`
pub fn date_stamp(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Filesystem-safe form of a display name.
///
/// Lowercased; anything but ASCII letters, digits and spaces is dropped and
/// spaces become underscores.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// `binance_watchlist_with_section_on_<date>.txt` or the `without_section` twin
pub fn ranked_file_name(with_sections: bool, date: NaiveDate) -> String {
    let section = if with_sections {
        "with_section"
    } else {
        "without_section"
    };
    format!("binance_watchlist_{}_on_{}.txt", section, date_stamp(date))
}

/// `binance_watchlist_<slug>_category_on_<date>.txt`
///
/// Falls back to the category id when the name has no usable characters.
pub fn category_file_name(name: &str, id: &str, date: NaiveDate) -> String {
    let mut slug = slugify(name);
    if slug.is_empty() {
        slug = slugify(id);
    }
    format!(
        "binance_watchlist_{}_category_on_{}.txt",
        slug,
        date_stamp(date)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 3, 7).unwrap()
    }

    #[test]
    fn test_date_stamp_is_zero_padded() {
        assert_eq!(date_stamp(date()), "07-03-2021");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("DeFi"), "defi");
        assert_eq!(slugify("Binance Smart Chain"), "binance_smart_chain");
        assert_eq!(slugify("Yield Farming / AMM"), "yield_farming__amm");
        assert_eq!(slugify("Metaverse (Gaming)"), "metaverse_gaming");
        assert_eq!(slugify("Ökosystem 2.0"), "kosystem_20");
    }

    #[test]
    fn test_ranked_file_names() {
        assert_eq!(
            ranked_file_name(true, date()),
            "binance_watchlist_with_section_on_07-03-2021.txt"
        );
        assert_eq!(
            ranked_file_name(false, date()),
            "binance_watchlist_without_section_on_07-03-2021.txt"
        );
    }

    #[test]
    fn test_category_file_name() {
        assert_eq!(
            category_file_name("Polkadot Ecosystem", "6051a82566fc1b42617d6dc6", date()),
            "binance_watchlist_polkadot_ecosystem_category_on_07-03-2021.txt"
        );
    }

    #[test]
    fn test_category_file_name_falls_back_to_id() {
        assert_eq!(
            category_file_name("中文", "605e2ce9", date()),
            "binance_watchlist_605e2ce9_category_on_07-03-2021.txt"
        );
    }
}
