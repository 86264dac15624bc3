use super::*;
use csv::StringRecord;

#[test]
fn test_resolves_case_insensitively() {
    let map = FieldRoleMap::resolve([
        "Restaurant Name",
        "CITY",
        "Cuisines",
        "Aggregate Rating",
        "Price Range",
    ]);

    assert_eq!(map.index(FieldRole::Name), Some(0));
    assert_eq!(map.index(FieldRole::City), Some(1));
    assert_eq!(map.index(FieldRole::Cuisine), Some(2));
    assert_eq!(map.index(FieldRole::Rating), Some(3));
    assert_eq!(map.index(FieldRole::PriceRange), Some(4));
    assert_eq!(map.column(FieldRole::City).unwrap().header, "CITY");
}

#[test]
fn test_candidate_priority_beats_column_order() {
    // "aggregate rating" outranks "rate" even though "rate" comes first in the file.
    let map = FieldRoleMap::resolve(["rate", "Aggregate rating"]);

    assert_eq!(map.index(FieldRole::Rating), Some(1));
}

#[test]
fn test_falls_back_to_lower_priority_candidate() {
    let map = FieldRoleMap::resolve(["name", "location", "approx_cost(for two people)"]);

    assert_eq!(map.index(FieldRole::Locality), Some(1));
    assert_eq!(map.index(FieldRole::AvgCostForTwo), Some(2));
    assert!(!map.is_resolved(FieldRole::City));
}

#[test]
fn test_duplicate_header_uses_leftmost_column() {
    let map = FieldRoleMap::resolve(["City", "city"]);

    assert_eq!(map.index(FieldRole::City), Some(0));
}

#[test]
fn test_surrounding_whitespace_ignored() {
    let map = FieldRoleMap::resolve(["  City ", "Locality"]);

    assert_eq!(map.index(FieldRole::City), Some(0));
}

#[test]
fn test_unresolved_roles_are_reported() {
    let map = FieldRoleMap::resolve(["foo", "bar"]);

    assert_eq!(map.unresolved().len(), FieldRole::COUNT);
    assert!(map.column(FieldRole::Cuisine).is_none());
}

#[test]
fn test_empty_header() {
    let map = FieldRoleMap::resolve(std::iter::empty::<&str>());

    assert_eq!(map, FieldRoleMap::default());
}

#[test]
fn test_value_lookup() {
    let headers = StringRecord::from(vec!["Name", "City", "Locality"]);
    let map = FieldRoleMap::from_record(&headers);

    let row = StringRecord::from(vec!["La Piazza", "Bangalore", "Indiranagar"]);
    assert_eq!(map.value(FieldRole::City, &row), Some("Bangalore"));
    assert_eq!(map.value(FieldRole::Cuisine, &row), None);

    let short = StringRecord::from(vec!["La Piazza"]);
    assert_eq!(map.value(FieldRole::Locality, &short), None);
}

#[test]
fn test_role_display() {
    assert_eq!(FieldRole::AvgCostForTwo.to_string(), "avg_cost_for_two");
    assert_eq!(FieldRole::PriceRange.as_str(), "price_range");
}
