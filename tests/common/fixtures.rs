//! Test fixtures for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

/// Header of the Zomato-style export used by most fixtures.
pub const ZOMATO_HEADER: [&str; 8] = [
    "Restaurant ID",
    "Restaurant Name",
    "City",
    "Locality",
    "Cuisines",
    "Average Cost for two",
    "Price range",
    "Aggregate rating",
];

/// One restaurant in the Zomato-style layout.
#[derive(Default, Clone)]
pub struct RestaurantRowBuilder {
    id: Option<String>,
    name: Option<String>,
    city: Option<String>,
    locality: Option<String>,
    cuisines: Option<String>,
    avg_cost: Option<String>,
    price_range: Option<String>,
    rating: Option<String>,
}

impl RestaurantRowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.city = Some(city.to_string());
        self
    }

    pub fn locality(mut self, locality: &str) -> Self {
        self.locality = Some(locality.to_string());
        self
    }

    pub fn cuisines(mut self, cuisines: &str) -> Self {
        self.cuisines = Some(cuisines.to_string());
        self
    }

    pub fn avg_cost(mut self, cost: &str) -> Self {
        self.avg_cost = Some(cost.to_string());
        self
    }

    pub fn price_range(mut self, level: &str) -> Self {
        self.price_range = Some(level.to_string());
        self
    }

    pub fn rating(mut self, rating: &str) -> Self {
        self.rating = Some(rating.to_string());
        self
    }

    /// Fields in [`ZOMATO_HEADER`] order; unset fields are empty.
    pub fn build(self) -> Vec<String> {
        [
            self.id,
            self.name,
            self.city,
            self.locality,
            self.cuisines,
            self.avg_cost,
            self.price_range,
            self.rating,
        ]
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect()
    }
}

/// Builds a CSV document from a header and rows, quoting fields as needed.
pub struct CsvFixture {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvFixture {
    pub fn new<S: AsRef<str>>(header: &[S]) -> Self {
        Self {
            header: header.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn zomato() -> Self {
        Self::new(&ZOMATO_HEADER)
    }

    pub fn row<S: AsRef<str>>(mut self, fields: &[S]) -> Self {
        self.rows
            .push(fields.iter().map(|f| f.as_ref().to_string()).collect());
        self
    }

    pub fn restaurant(mut self, row: RestaurantRowBuilder) -> Self {
        self.rows.push(row.build());
        self
    }

    pub fn to_csv(&self) -> String {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());
        writer.write_record(&self.header).unwrap();
        for row in &self.rows {
            writer.write_record(row).unwrap();
        }
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    pub fn write_to(&self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);
        fs::write(&path, self.to_csv()).unwrap();
        path
    }
}

/// Six restaurants across two cities with mixed data quality.
pub fn sample_restaurants() -> CsvFixture {
    CsvFixture::zomato()
        .restaurant(
            RestaurantRowBuilder::new()
                .id("101")
                .name("La Piazza")
                .city("Bangalore")
                .locality("Indiranagar")
                .cuisines("Italian, Pizza")
                .avg_cost("800")
                .rating("4.4"),
        )
        .restaurant(
            RestaurantRowBuilder::new()
                .id("102")
                .name("Pizza House")
                .city("Bangalore")
                .locality("Koramangala")
                .cuisines("Pizza")
                .price_range("2")
                .rating("4.6"),
        )
        .restaurant(
            RestaurantRowBuilder::new()
                .id("103")
                .name("Ember")
                .city("Bangalore")
                .locality("Indiranagar")
                .cuisines("Grill, North Indian")
                .avg_cost("2,400")
                .rating("4.8"),
        )
        .restaurant(
            RestaurantRowBuilder::new()
                .id("104")
                .name("Chai Point")
                .city("Bangalore")
                .locality("Jayanagar")
                .cuisines("Cafe, Beverages")
                .price_range("1")
                .rating("3.9"),
        )
        .restaurant(
            RestaurantRowBuilder::new()
                .id("105")
                .name("Trishna")
                .city("Mumbai")
                .locality("Fort")
                .cuisines("Seafood")
                .price_range("4")
                .rating("NEW"),
        )
        .restaurant(RestaurantRowBuilder::new().id("106").name("Ghost Kitchen").rating("4.9"))
}
