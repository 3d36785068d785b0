//! Repository Integration Tests
//!
//! Tests for SqliteLeadStore with an in-memory SQLite database.

use crate::domain::{DomainError, LeadDraft};
use crate::repository::{open_in_memory, LeadPatch, LeadStore, SqliteLeadStore};
use std::sync::Arc;
use tokio::sync::Mutex;

async fn setup_test_store() -> SqliteLeadStore {
    let conn = open_in_memory().expect("Failed to init test DB");
    SqliteLeadStore::new(Arc::new(Mutex::new(conn)))
}

fn draft(title: &str, column_id: u32) -> LeadDraft {
    LeadDraft {
        title: title.to_string(),
        contact_name: "Ana".to_string(),
        whatsapp: "+5511999990000".to_string(),
        column_id,
    }
}

#[tokio::test]
async fn test_create_lead() {
    let store = setup_test_store().await;
    let col = store.create_column("New", "#0866FF", 0).await.unwrap();

    let created = store
        .create_lead(&draft("Acme deal", col.id), 0)
        .await
        .expect("Failed to create");

    assert!(created.id > 0);
    assert_eq!(created.title, "Acme deal");
    assert_eq!(created.column_id, col.id);
    assert_eq!(created.order_index, 0);
    assert!(created.created_at.is_some());
}

#[tokio::test]
async fn test_update_lead_placement() {
    let store = setup_test_store().await;
    let col_a = store.create_column("New", "#0866FF", 0).await.unwrap();
    let col_b = store.create_column("Contacted", "#31A24C", 1).await.unwrap();

    let lead = store.create_lead(&draft("Acme deal", col_a.id), 0).await.unwrap();

    store
        .update_lead(lead.id, LeadPatch::placement(col_b.id, 2))
        .await
        .expect("Update failed");

    let leads = store.fetch_leads().await.unwrap();
    let updated = leads.iter().find(|l| l.id == lead.id).unwrap();
    assert_eq!(updated.column_id, col_b.id);
    assert_eq!(updated.order_index, 2);
}

#[tokio::test]
async fn test_update_lead_order_only() {
    let store = setup_test_store().await;
    let col = store.create_column("New", "#0866FF", 0).await.unwrap();
    let lead = store.create_lead(&draft("Acme deal", col.id), 0).await.unwrap();

    store
        .update_lead(lead.id, LeadPatch::order(5))
        .await
        .expect("Update failed");

    let leads = store.fetch_leads().await.unwrap();
    let updated = leads.iter().find(|l| l.id == lead.id).unwrap();
    assert_eq!(updated.column_id, col.id);
    assert_eq!(updated.order_index, 5);
}

#[tokio::test]
async fn test_update_missing_lead_is_not_found() {
    let store = setup_test_store().await;
    let result = store.update_lead(999, LeadPatch::order(0)).await;
    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_empty_patch_is_noop() {
    let store = setup_test_store().await;
    // No row exists, but an empty patch must not fail either
    store
        .update_lead(999, LeadPatch::default())
        .await
        .expect("Empty patch should be a no-op");
}

#[tokio::test]
async fn test_delete_lead() {
    let store = setup_test_store().await;
    let col = store.create_column("New", "#0866FF", 0).await.unwrap();
    let lead = store.create_lead(&draft("To delete", col.id), 0).await.unwrap();

    store.delete_lead(lead.id).await.expect("Delete failed");

    let leads = store.fetch_leads().await.unwrap();
    assert!(leads.is_empty());

    let result = store.delete_lead(lead.id).await;
    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_fetch_leads_ordering() {
    let store = setup_test_store().await;
    let col_a = store.create_column("New", "#0866FF", 0).await.unwrap();
    let col_b = store.create_column("Contacted", "#31A24C", 1).await.unwrap();

    // Insert out of order on purpose
    let b1 = store.create_lead(&draft("b1", col_b.id), 1).await.unwrap();
    let a0 = store.create_lead(&draft("a0", col_a.id), 0).await.unwrap();
    let b0 = store.create_lead(&draft("b0", col_b.id), 0).await.unwrap();
    let a1 = store.create_lead(&draft("a1", col_a.id), 1).await.unwrap();

    let leads = store.fetch_leads().await.unwrap();
    let ids: Vec<u32> = leads.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![a0.id, a1.id, b0.id, b1.id]);
}

#[tokio::test]
async fn test_fetch_columns_ordering() {
    let store = setup_test_store().await;
    store.create_column("Won", "#31A24C", 2).await.unwrap();
    store.create_column("New", "#0866FF", 0).await.unwrap();
    store.create_column("Contacted", "#F7B928", 1).await.unwrap();

    let columns = store.fetch_columns().await.unwrap();
    let titles: Vec<&str> = columns.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["New", "Contacted", "Won"]);
}
