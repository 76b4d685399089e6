//! Stable stock-image assignment for product cards.
//!
//! Products carry no image of their own, so each one is mapped onto its
//! category's stock pictures with a 32-bit polynomial rolling hash of its
//! name:
//!
//! ```text
//! h = 0
//! for each UTF-16 code unit u of the key:
//!     h = h * 31 + u        (wrapping i32 arithmetic)
//! index = |h| mod len(images)
//! ```
//!
//! The key is the product name, or the decimal id when the name is empty.
//! A product without a category counts as the first configured one; an
//! unknown category picks from every configured list, joined in file order.
//! Identical names always land on the identical picture, across reloads and
//! across implementations.

use crate::config::AppConfig;
use crate::model::Product;

pub fn name_hash(key: &str) -> i32 {
    key.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Pick an index into a list of `len` images for `key`.
pub fn pick_index(key: &str, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (name_hash(key).unsigned_abs() as usize) % len
}

pub fn image_for(config: &AppConfig, category: &str, name: &str, id: i64) -> String {
    let key = if name.is_empty() {
        id.to_string()
    } else {
        name.to_string()
    };

    let own = match config.images.first() {
        Some(first) if category.is_empty() => Some(&first.paths),
        _ => config
            .images
            .iter()
            .find(|c| c.category == category)
            .map(|c| &c.paths),
    };
    let candidates: Vec<&String> = match own {
        Some(paths) if !paths.is_empty() => paths.iter().collect(),
        _ => config.images.iter().flat_map(|c| &c.paths).collect(),
    };

    if candidates.is_empty() {
        return config.fallback_image.clone();
    }
    candidates[pick_index(&key, candidates.len())].clone()
}

pub fn product_image(config: &AppConfig, product: &Product) -> String {
    image_for(config, &product.category, &product.product_name, product.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CategoryImages;

    fn config_with(images: &[(&str, &[&str])]) -> AppConfig {
        AppConfig {
            images: images
                .iter()
                .map(|(category, paths)| CategoryImages {
                    category: category.to_string(),
                    paths: paths.iter().map(|p| p.to_string()).collect(),
                })
                .collect(),
            fallback_image: "/fallback.jpg".to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_hash_matches_reference_values() {
        assert_eq!(name_hash(""), 0);
        assert_eq!(name_hash("a"), 97);
        assert_eq!(name_hash("ab"), 97 * 31 + 98);
        // "hello".hashCode() as computed by the reference 31-multiplier hash
        assert_eq!(name_hash("hello"), 99162322);
    }

    #[test]
    fn test_hash_wraps_to_32_bits() {
        let long = "Samsung Galaxy S24 Ultra 5G (Titanium Gray, 12GB, 256GB)";
        // Must not overflow-panic and must be repeatable
        assert_eq!(name_hash(long), name_hash(long));
        assert!(pick_index(long, 3) < 3);
    }

    #[test]
    fn test_same_name_same_image() {
        let config = config_with(&[("Phones", &["/p1.jpg", "/p2.jpg", "/p3.jpg"])]);
        let first = image_for(&config, "Phones", "iPhone 15", 1);
        for id in 2..10 {
            assert_eq!(image_for(&config, "Phones", "iPhone 15", id), first);
        }
    }

    #[test]
    fn test_unknown_category_uses_every_image() {
        let config = config_with(&[("Laptops", &["/l.jpg"]), ("Phones", &["/p.jpg"])]);
        let picked = image_for(&config, "Tablets", "iPad Air", 4);
        assert!(picked == "/l.jpg" || picked == "/p.jpg", "got {}", picked);
    }

    #[test]
    fn test_unknown_category_joins_lists_in_file_order() {
        let config = AppConfig::default();
        // "Kindle" hashes to index 2 of the three joined lists
        assert_eq!(pick_index("Kindle", 3), 2);
        assert_eq!(
            image_for(&config, "Tablets", "Kindle", 1),
            "/static/images/modern_wireless_head_af4d6f0f.jpg"
        );
        assert_eq!(pick_index("Pixel 8", 3), 0);
        assert_eq!(
            image_for(&config, "Tablets", "Pixel 8", 2),
            "/static/images/modern_smartphone_mo_eaff691a.jpg"
        );
    }

    #[test]
    fn test_missing_category_counts_as_first() {
        let config = config_with(&[("Phones", &["/p.jpg"]), ("Laptops", &["/l1.jpg", "/l2.jpg"])]);
        for name in ["Kindle", "Pixel 8", "iPad Mini"] {
            assert_eq!(image_for(&config, "", name, 1), "/p.jpg");
        }
    }

    #[test]
    fn test_empty_catalogue_falls_back() {
        let config = config_with(&[]);
        assert_eq!(image_for(&config, "Phones", "Pixel", 1), "/fallback.jpg");
    }

    #[test]
    fn test_empty_name_hashes_id() {
        let config = config_with(&[("Phones", &["/a.jpg", "/b.jpg"])]);
        let expected = ["/a.jpg", "/b.jpg"][pick_index("42", 2)];
        assert_eq!(image_for(&config, "Phones", "", 42), expected);
    }

    #[test]
    fn test_pick_index_handles_min_hash() {
        let key = "u3FSoZxB";
        assert_eq!(name_hash(key), i32::MIN);
        // |i32::MIN| = 2^31, and 2^31 mod 7 = 2
        assert_eq!(pick_index(key, 7), 2);
        assert_eq!(pick_index(key, 2), 0);
        assert_eq!(pick_index("anything", 0), 0);
    }
}
