//! Integration tests for profession reference data.

use memberhub_core::types::lookup::ListFilters;
use memberhub_core::types::pagination::PageRequest;
use memberhub_entity::profession::CreateProfession;

use crate::helpers::{ADMIN, TestApp};

async fn seed(app: &TestApp, names: &[&str]) {
    for name in names {
        app.professions
            .create(CreateProfession::named(*name), ADMIN)
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_accent_insensitive_lookup() {
    let app = TestApp::new();
    seed(&app, &["Médecin généraliste", "Médecin urgentiste", "Infirmier"]).await;

    let found = app.professions.find_by_name("medecin GENERALISTE").await;
    assert_eq!(
        found.entity().map(|p| p.name.as_str()),
        Some("Médecin généraliste")
    );

    let partial = app.professions.find_by_name("Méde").await;
    assert_eq!(
        partial.suggestions(),
        ["Médecin généraliste".to_string(), "Médecin urgentiste".to_string()]
    );
}

#[tokio::test]
async fn test_search_pages_in_name_order() {
    let app = TestApp::new();
    seed(
        &app,
        &["Ingénieur civil", "Avocat", "Ingénieur agronome", "Ingénieur réseau", "Architecte"],
    )
    .await;
    let filters = ListFilters::search("ingé");

    let first = app
        .professions
        .get_paginated(&filters, PageRequest::new(1, 2))
        .await;
    let second = app
        .professions
        .get_paginated(&filters, PageRequest::new(2, 2))
        .await;

    let names: Vec<_> = first
        .data
        .iter()
        .chain(&second.data)
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["Ingénieur agronome", "Ingénieur civil", "Ingénieur réseau"]
    );
    assert_eq!(first.pagination.total_items, 3);
    assert!(first.pagination.has_next_page);
    assert!(!second.pagination.has_next_page);
    assert_eq!(second.pagination.current_page, 2);
}

#[tokio::test]
async fn test_professions_and_companies_are_separate() {
    let app = TestApp::new();
    seed(&app, &["Comptable"]).await;

    assert!(app.professions.find_by_name("Comptable").await.is_found());
    assert!(!app.companies.find_by_name("Comptable").await.is_found());
}
