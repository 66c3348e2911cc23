//! Integration tests for snapshot persistence.

use memberhub_core::config::DatabaseConfig;
use memberhub_core::types::lookup::ListFilters;
use memberhub_entity::company::CreateCompany;
use memberhub_entity::profession::CreateProfession;

use crate::helpers::{ADMIN, TestApp};

#[tokio::test]
async fn test_records_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        snapshot_path: Some(dir.path().join("memberhub.json").display().to_string()),
        ..DatabaseConfig::default()
    };

    let app = TestApp::from_config(config.clone()).await;
    let company = app
        .companies
        .create(CreateCompany::named("Total Gabon"), ADMIN)
        .await
        .unwrap();
    app.professions
        .create(CreateProfession::named("Géologue"), ADMIN)
        .await
        .unwrap();
    app.database.close().await.unwrap();

    let restarted = TestApp::from_config(config).await;
    let reloaded = restarted.companies.get_by_id(&company.id).await.unwrap();
    assert_eq!(reloaded, company);
    assert!(restarted.professions.find_by_name("geologue").await.is_found());

    let newer = restarted
        .companies
        .create(CreateCompany::named("Comilog"), ADMIN)
        .await
        .unwrap();
    let listed = restarted.companies.get_all(&ListFilters::default()).await;
    assert_eq!(listed.first().map(|c| c.id.clone()), Some(newer.id));
}
