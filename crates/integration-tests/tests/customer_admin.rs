//! Integration tests for authenticated customer administration.
//!
//! These tests require:
//! - A running rewards API (`EMPORIUM_API_URL`)
//! - Valid admin credentials in the environment
//!
//! Run with: cargo test -p emporium-integration-tests -- --ignored

use emporium_api::{ApiError, CustomerUpdate, NewCustomer};
use emporium_core::LogAction;
use emporium_integration_tests::{TestContext, unique_phone};

/// Test helper: create a throwaway customer, returning its phone.
async fn create_test_customer(ctx: &TestContext, points: i64) -> String {
    let phone = unique_phone();
    let payload = NewCustomer {
        phone: phone.clone(),
        name: Some("Integration Test".to_owned()),
        email: Some(format!("integration-test-{}@example.com", uuid::Uuid::new_v4())),
        notes: None,
        points: Some(points).filter(|p| *p != 0),
    };
    ctx.client
        .create_customer(&ctx.token, &payload)
        .await
        .expect("create test customer");
    phone
}

/// Test helper: delete whatever matches `phone`.
async fn delete_test_customer(ctx: &TestContext, phone: &str) {
    if let Ok(matches) = ctx.client.search_customers(&ctx.token, phone).await {
        for record in matches {
            let _ = ctx.client.delete_customer(&ctx.token, &record.id).await;
        }
    }
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running rewards API"]
async fn test_search_without_token_is_rejected() {
    let ctx = TestContext::new().await;

    let err = ctx
        .client
        .search_customers("not-a-real-token", "555")
        .await
        .expect_err("bogus token should be rejected");
    assert!(matches!(
        err,
        ApiError::Unauthorized | ApiError::Server(_) | ApiError::Status(_)
    ));
}

#[tokio::test]
#[ignore = "Requires a running rewards API and admin credentials"]
async fn test_is_admin_confirms_login_token() {
    let ctx = TestContext::new().await;

    let check = ctx.client.check_admin(&ctx.token).await.expect("is-admin");
    assert!(check.is_admin);
}

// ============================================================================
// CRUD Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running rewards API and admin credentials"]
async fn test_customer_create_search_delete() {
    let ctx = TestContext::new().await;
    let phone = create_test_customer(&ctx, 0).await;

    let matches = ctx
        .client
        .search_customers(&ctx.token, &phone)
        .await
        .expect("search");
    assert!(
        matches.iter().any(|record| record.phone == phone),
        "created customer should appear in search results"
    );

    delete_test_customer(&ctx, &phone).await;

    let matches = ctx
        .client
        .search_customers(&ctx.token, &phone)
        .await
        .expect("search after delete");
    assert!(matches.iter().all(|record| record.phone != phone));
}

#[tokio::test]
#[ignore = "Requires a running rewards API and admin credentials"]
async fn test_customer_field_update() {
    let ctx = TestContext::new().await;
    let phone = create_test_customer(&ctx, 0).await;

    let matches = ctx
        .client
        .search_customers(&ctx.token, &phone)
        .await
        .expect("search");
    let record = matches.first().expect("created customer");

    let update = CustomerUpdate {
        name: Some("Renamed By Test".to_owned()),
        email: None,
        phone: None,
        notes: Some("updated by integration test".to_owned()),
    };
    ctx.client
        .update_customer(&ctx.token, &record.id, &update)
        .await
        .expect("update");

    let matches = ctx
        .client
        .search_customers(&ctx.token, &phone)
        .await
        .expect("search after update");
    let record = matches.first().expect("updated customer");
    assert_eq!(record.name, "Renamed By Test");

    delete_test_customer(&ctx, &phone).await;
}

// ============================================================================
// Points & Audit Log Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running rewards API and admin credentials"]
async fn test_point_adjustment_is_logged_and_undoable() {
    let ctx = TestContext::new().await;
    let phone = create_test_customer(&ctx, 100).await;

    let matches = ctx
        .client
        .search_customers(&ctx.token, &phone)
        .await
        .expect("search");
    let record = matches.first().expect("created customer");

    ctx.client
        .adjust_points(&ctx.token, &record.id, 50)
        .await
        .expect("adjust points");

    let logs = ctx.client.admin_logs(&ctx.token).await.expect("logs");
    let entry = logs
        .iter()
        .rev()
        .find(|entry| {
            entry.action_type == LogAction::ModifyPoints && entry.customer_id == record.id
        })
        .expect("point adjustment should be logged");
    assert!(entry.can_undo());

    ctx.client
        .undo_log_action(&ctx.token, &entry.id)
        .await
        .expect("undo");

    let matches = ctx
        .client
        .search_customers(&ctx.token, &phone)
        .await
        .expect("search after undo");
    let record = matches.first().expect("customer after undo");
    assert_eq!(record.points, 100, "undo should restore the balance");

    delete_test_customer(&ctx, &phone).await;
}

// ============================================================================
// Export Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running rewards API and admin credentials"]
async fn test_export_contains_created_customer() {
    let ctx = TestContext::new().await;
    let phone = create_test_customer(&ctx, 0).await;

    let csv = ctx
        .client
        .export_customers(&ctx.token)
        .await
        .expect("export");
    assert!(
        csv.contains(&phone),
        "export should include the created customer"
    );

    delete_test_customer(&ctx, &phone).await;
}
