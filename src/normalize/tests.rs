use super::*;
use csv::StringRecord;

fn normalizer(headers: &[&str]) -> RowNormalizer {
    RowNormalizer::from_headers(&StringRecord::from(headers.to_vec()))
}

fn row(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

#[test]
fn test_parse_rating_accepts_plain_decimals() {
    assert_eq!(parse_rating("4.4"), Some(4.4));
    assert_eq!(parse_rating(" 3 "), Some(3.0));
    assert_eq!(parse_rating("0"), Some(0.0));
    assert_eq!(parse_rating("5.0"), Some(5.0));
}

#[test]
fn test_parse_rating_rejects_out_of_range_without_clamping() {
    assert_eq!(parse_rating("7"), None);
    assert_eq!(parse_rating("5.01"), None);
}

#[test]
fn test_parse_rating_rejects_decorated_text() {
    for raw in ["4.1/5", "NEW", "-", "", "$4", "3-4", "-1", "4.", ".5", "4,5", "NaN"] {
        assert_eq!(parse_rating(raw), None, "expected {:?} to be rejected", raw);
    }
}

#[test]
fn test_price_range_levels() {
    assert_eq!(parse_price_range("1"), Some(PriceBucket::Low));
    assert_eq!(parse_price_range("2"), Some(PriceBucket::Medium));
    assert_eq!(parse_price_range("3"), Some(PriceBucket::High));
    assert_eq!(parse_price_range("4"), Some(PriceBucket::Premium));
    assert_eq!(parse_price_range("0"), None);
    assert_eq!(parse_price_range("5"), None);
    assert_eq!(parse_price_range("2.0"), None);
    assert_eq!(parse_price_range("cheap"), None);
}

#[test]
fn test_avg_cost_thresholds() {
    let bucket = |cost: &str| derive_price_bucket(None, Some(cost));

    assert_eq!(bucket("0"), Some(PriceBucket::Low));
    assert_eq!(bucket("500"), Some(PriceBucket::Low));
    assert_eq!(bucket("501"), Some(PriceBucket::Medium));
    assert_eq!(bucket("1000"), Some(PriceBucket::Medium));
    assert_eq!(bucket("1,500"), Some(PriceBucket::High));
    assert_eq!(bucket("2000"), Some(PriceBucket::High));
    assert_eq!(bucket("2000.5"), Some(PriceBucket::Premium));
    assert_eq!(bucket("-10"), None);
    assert_eq!(bucket("about 300"), None);
}

#[test]
fn test_price_range_takes_precedence_over_avg_cost() {
    assert_eq!(
        derive_price_bucket(Some("2"), Some("5000")),
        Some(PriceBucket::Medium)
    );
    assert_eq!(
        derive_price_bucket(Some("2"), Some("100")),
        Some(PriceBucket::Medium)
    );
}

#[test]
fn test_invalid_price_range_falls_back_to_avg_cost() {
    assert_eq!(
        derive_price_bucket(Some("9"), Some("800")),
        Some(PriceBucket::Medium)
    );
    assert_eq!(derive_price_bucket(Some(""), Some("")), None);
    assert_eq!(derive_price_bucket(None, None), None);
}

#[test]
fn test_normalize_cuisines_sorted_deduped_lowercase() {
    let cuisines = normalize_cuisines(" Pizza, Italian ,pizza, NORTH   Indian, Café!, , ");

    assert_eq!(cuisines, vec!["caf", "italian", "north indian", "pizza"]);
}

#[test]
fn test_normalize_cuisine_token_keeps_allowed_punctuation() {
    assert_eq!(normalize_cuisine_token("Fish & Chips"), "fish & chips");
    assert_eq!(normalize_cuisine_token("Tex-Mex"), "tex-mex");
    assert_eq!(normalize_cuisine_token("  B.B.Q.  "), "bbq");
    assert_eq!(normalize_cuisine_token("!!!"), "");
}

#[test]
fn test_cuisine_join_split_preserves_token_set() {
    let cuisines = normalize_cuisines("Chinese, Thai, Fast Food, chinese");
    let joined = join_cuisines(&cuisines);

    assert_eq!(joined, "chinese|fast food|thai");
    assert_eq!(split_cuisines(&joined), cuisines);
    assert!(split_cuisines("").is_empty());
}

#[test]
fn test_format_rating() {
    assert_eq!(format_rating(4.4), "4.4");
    assert_eq!(format_rating(4.0), "4.0");
    assert_eq!(format_rating(0.0), "0.0");
    assert_eq!(format_rating(3.75), "3.75");
}

#[test]
fn test_price_bucket_from_str_is_case_insensitive() {
    assert_eq!("MEDIUM".parse::<PriceBucket>(), Ok(PriceBucket::Medium));
    assert_eq!(" premium ".parse::<PriceBucket>(), Ok(PriceBucket::Premium));
    assert!("cheap".parse::<PriceBucket>().is_err());
}

#[test]
fn test_normalize_full_row() {
    let n = normalizer(&[
        "Restaurant Name",
        "City",
        "Cuisines",
        "Aggregate rating",
        "Price range",
    ]);

    let record = n
        .normalize(&row(&["La Piazza", " Bangalore ", "Italian, Pizza", "4.4", "2"]))
        .expect("row should be retained");

    assert_eq!(record.std_city, "Bangalore");
    assert_eq!(record.std_locality, "");
    assert_eq!(record.std_rating, Some(4.4));
    assert_eq!(record.std_price_bucket, Some(PriceBucket::Medium));
    assert_eq!(record.std_cuisines, vec!["italian", "pizza"]);
    assert_eq!(
        record.derived_fields(),
        [
            "Bangalore".to_string(),
            String::new(),
            "4.4".to_string(),
            "medium".to_string(),
            "italian|pizza".to_string(),
        ]
    );
}

#[test]
fn test_discard_rule_ignores_other_columns() {
    let n = normalizer(&["Name", "City", "Locality", "Cuisines", "Rating", "Price range"]);

    let dropped = n.normalize(&row(&["Ghost Kitchen", "  ", "", " , ", "4.9", "4"]));

    assert!(dropped.is_none());
}

#[test]
fn test_locality_alone_is_enough_to_retain() {
    let n = normalizer(&["Name", "Locality"]);

    let record = n.normalize(&row(&["Corner Cafe", "Indiranagar"])).unwrap();

    assert_eq!(record.std_locality, "Indiranagar");
    assert!(record.std_cuisines.is_empty());
}

#[test]
fn test_malformed_numeric_fields_do_not_discard() {
    let n = normalizer(&["Name", "City", "Rating", "Price range", "Average Cost for two"]);

    let record = n
        .normalize(&row(&["Odd Place", "Pune", "NEW", "n/a", "unknown"]))
        .unwrap();

    assert_eq!(record.std_rating, None);
    assert_eq!(record.std_price_bucket, None);
    assert_eq!(record.price_bucket_str(), "");
    assert_eq!(record.derived_fields()[2], "");
}

#[test]
fn test_ragged_rows_are_aligned_to_header_width() {
    let n = normalizer(&["Name", "City", "Cuisines"]);

    let short = n.normalize(&row(&["Short", "Delhi"])).unwrap();
    assert_eq!(short.original_fields, vec!["Short", "Delhi", ""]);

    let long = n
        .normalize(&row(&["Long", "Delhi", "Thai", "extra", "more"]))
        .unwrap();
    assert_eq!(long.original_fields, vec!["Long", "Delhi", "Thai"]);
}

#[test]
fn test_unresolved_roles_yield_empty_fields() {
    let n = normalizer(&["Name", "Cuisines"]);

    let record = n.normalize(&row(&["Only Food", "Sushi"])).unwrap();

    assert_eq!(record.std_city, "");
    assert_eq!(record.std_locality, "");
    assert_eq!(record.std_rating, None);
    assert_eq!(record.std_price_bucket, None);
    assert_eq!(n.width(), 2);
}
