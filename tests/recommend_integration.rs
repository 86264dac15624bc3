//! Recommendation flow against a preprocessed dataset.

mod common;

use std::sync::Arc;

use common::fixtures::sample_restaurants;
use platematch::catalog::CatalogCache;
use platematch::explain::MockExplainer;
use platematch::matching::PreferenceSet;
use platematch::preprocess::preprocess;
use platematch::recommend::Recommender;
use tempfile::TempDir;

#[tokio::test]
async fn test_recommendation_with_explanation() {
    let dir = TempDir::new().unwrap();
    let raw = sample_restaurants().write_to(dir.path(), "restaurants.csv");
    let processed = preprocess(&raw).unwrap().output_path;

    let explainer = Arc::new(MockExplainer::new());
    let recommender = Recommender::new(CatalogCache::new(2)).with_explainer(explainer.clone());
    let prefs = PreferenceSet::new()
        .with_location("Indiranagar")
        .with_num_results(3);

    let response = recommender.recommend(&processed, &prefs).await.unwrap();

    let names: Vec<_> = response.restaurants.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Ember", "La Piazza"]);
    let explanation = response.explanation.expect("explanation should be present");
    assert!(explanation.contains("1. Ember"));
    assert!(explanation.contains("2. La Piazza"));
    assert_eq!(explainer.call_count(), 1);
}

#[tokio::test]
async fn test_failed_explanation_is_isolated() {
    let dir = TempDir::new().unwrap();
    let raw = sample_restaurants().write_to(dir.path(), "restaurants.csv");
    let processed = preprocess(&raw).unwrap().output_path;

    let recommender = Recommender::new(CatalogCache::default())
        .with_explainer(Arc::new(MockExplainer::failing("invalid api key")));

    let response = recommender
        .recommend(&processed, &PreferenceSet::new().with_price("low"))
        .await
        .unwrap();

    assert_eq!(response.restaurants.len(), 1);
    assert_eq!(response.restaurants[0].name, "Chai Point");
    assert_eq!(response.explanation, None);
    assert!(
        response
            .explanation_error
            .as_deref()
            .is_some_and(|e| e.contains("invalid api key"))
    );
}

#[tokio::test]
async fn test_cache_picks_up_reprocessed_dataset() {
    let dir = TempDir::new().unwrap();
    let raw = sample_restaurants().write_to(dir.path(), "restaurants.csv");
    let processed = preprocess(&raw).unwrap().output_path;
    let recommender = Recommender::new(CatalogCache::default());

    let before = recommender
        .recommend(&processed, &PreferenceSet::new().with_location("Mumbai"))
        .await
        .unwrap();
    assert_eq!(before.restaurants.len(), 1);

    common::fixtures::CsvFixture::zomato()
        .row(&["1", "Bombay Canteen", "Mumbai", "Lower Parel", "Modern Indian", "", "3", "4.5"])
        .row(&["2", "Britannia", "Mumbai", "Ballard Estate", "Parsi", "", "2", "4.3"])
        .write_to(dir.path(), "restaurants.csv");
    preprocess(&raw).unwrap();

    let after = recommender
        .recommend(&processed, &PreferenceSet::new().with_location("Mumbai"))
        .await
        .unwrap();
    let names: Vec<_> = after.restaurants.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Bombay Canteen", "Britannia"]);
}
