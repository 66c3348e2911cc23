//! Integration tests for company reference data.

use memberhub_core::error::ErrorKind;
use memberhub_core::normalize::normalize_name;
use memberhub_core::types::lookup::{ListFilters, NameLookup};
use memberhub_core::types::pagination::PageRequest;
use memberhub_entity::company::{CreateCompany, UpdateCompany};

use crate::helpers::{ADMIN, TestApp};

#[tokio::test]
async fn test_company_lifecycle() {
    let app = TestApp::new();
    let companies = &app.companies;

    let created = companies
        .create(
            CreateCompany {
                industry: Some("Energy".to_string()),
                ..CreateCompany::named("Total Gabon")
            },
            ADMIN,
        )
        .await
        .unwrap();
    assert_eq!(created.normalized_name, normalize_name("Total Gabon"));
    assert_eq!(created.created_by, ADMIN);

    let found = companies.find_by_name("total gabon").await;
    assert_eq!(found.entity().map(|c| c.id.clone()), Some(created.id.clone()));

    let partial = companies.find_by_name("Tot").await;
    assert!(!partial.is_found());
    assert_eq!(partial.suggestions(), ["Total Gabon".to_string()]);

    companies.delete(&created.id).await.unwrap();
    assert_eq!(companies.find_by_name("Total Gabon").await, NameLookup::none());
    assert!(companies.get_by_id(&created.id).await.is_none());
}

#[tokio::test]
async fn test_rename_keeps_creator() {
    let app = TestApp::new();
    let created = app
        .companies
        .create(CreateCompany::named("Comilog SA"), ADMIN)
        .await
        .unwrap();

    let renamed = app
        .companies
        .update(
            &created.id,
            UpdateCompany {
                name: Some("New".to_string()),
                ..UpdateCompany::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(renamed.normalized_name, normalize_name("New"));
    assert_eq!(renamed.created_by, ADMIN);
    assert_eq!(app.companies.find_by_name("NEW").await.into_entity(), Some(renamed));
}

#[tokio::test]
async fn test_paging_through_companies() {
    let app = TestApp::new();
    for i in 0..23 {
        app.companies
            .create(CreateCompany::named(format!("Entreprise {i:02}")), ADMIN)
            .await
            .unwrap();
    }
    let filters = ListFilters::default();

    let mut seen = Vec::new();
    for page in 1..=3 {
        let response = app
            .companies
            .get_paginated(&filters, PageRequest::new(page, 10))
            .await;
        assert_eq!(response.pagination.current_page, page);
        assert_eq!(response.pagination.total_items, 23);
        assert_eq!(response.pagination.total_pages, 3);
        assert_eq!(response.pagination.has_next_page, page < 3);
        seen.extend(response.data.into_iter().map(|c| c.name));
    }

    assert_eq!(seen.len(), 23);
    assert_eq!(seen.first().map(String::as_str), Some("Entreprise 22"));
    assert_eq!(seen.last().map(String::as_str), Some("Entreprise 00"));
}

#[tokio::test]
async fn test_jumping_ahead_restarts_at_first_page() {
    let app = TestApp::new();
    for i in 0..15 {
        app.companies
            .create(CreateCompany::named(format!("Entreprise {i:02}")), ADMIN)
            .await
            .unwrap();
    }

    let response = app
        .companies
        .get_paginated(&ListFilters::default(), PageRequest::new(2, 10))
        .await;
    assert_eq!(response.pagination.current_page, 1);
    assert_eq!(response.len(), 10);
    assert!(response.pagination.has_next_page);
}

#[tokio::test]
async fn test_estimated_totals_without_count() {
    let app = TestApp::without_count();
    for i in 0..11 {
        app.companies
            .create(CreateCompany::named(format!("Entreprise {i:02}")), ADMIN)
            .await
            .unwrap();
    }

    let page = app
        .companies
        .get_paginated(&ListFilters::default(), PageRequest::new(1, 10))
        .await;
    assert!(page.pagination.total_items_estimated);
    assert_eq!(page.pagination.total_items, 11);
    assert!(page.pagination.has_next_page);
}

#[tokio::test]
async fn test_find_or_create_is_idempotent_by_name() {
    let app = TestApp::new();

    let first = app
        .companies
        .find_or_create("Société Générale Gabon", ADMIN, None)
        .await
        .unwrap();
    let again = app
        .companies
        .find_or_create("SOCIETE GENERALE GABON", "admin-2", None)
        .await
        .unwrap();

    assert!(first.is_new);
    assert!(!again.is_new);
    assert_eq!(first.id, again.id);
    assert_eq!(app.companies.get_all(&ListFilters::default()).await.len(), 1);
}

#[tokio::test]
async fn test_invalid_payloads_are_rejected() {
    let app = TestApp::new();

    let blank = app
        .companies
        .create(CreateCompany::named("   "), ADMIN)
        .await
        .unwrap_err();
    assert_eq!(blank.kind, ErrorKind::Validation);

    let oversized = app
        .companies
        .create(
            CreateCompany {
                industry: Some("x".repeat(500)),
                ..CreateCompany::named("Comilog")
            },
            ADMIN,
        )
        .await
        .unwrap_err();
    assert_eq!(oversized.kind, ErrorKind::Validation);
}
