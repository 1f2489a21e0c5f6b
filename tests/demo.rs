mod common;

use client_directory::demo::{
    self, DEMO_ADDED_PHONE, DEMO_LAST_NAME, DEMO_NEW_LAST_NAME, DEMO_REMOVED_PHONE, SEED_CLIENTS,
};
use client_directory::ClientFilter;

#[tokio::test]
async fn demo_script_runs_end_to_end() {
    let Some(ctx) = common::setup().await else { return };
    let dir = &ctx.directory;
    let mut out = Vec::new();

    let added = demo::load_seed(dir, &mut out).await.unwrap();
    assert_eq!(added, SEED_CLIENTS.len());
    assert_eq!(dir.list_clients().await.unwrap().len(), SEED_CLIENTS.len());
    assert_eq!(ctx.phone_count().await, 26);

    demo::run_lookup_sequence(dir, &mut out).await.unwrap();
    let printed = String::from_utf8(out).unwrap();

    assert!(printed.contains("Found: Еремеев Тимофей contacts: timofey1982@mail.ru"));
    assert!(printed.contains(&format!("Phone \"{DEMO_REMOVED_PHONE}\" of \"Еремеев Тимофей\" deleted")));
    assert!(printed.contains(&format!("Added phone \"{DEMO_ADDED_PHONE}\"")));
    assert!(printed.contains("updated"));
    assert!(printed.contains("\"Еремеев Тимофей\" deleted"));
    assert!(!printed.contains("Failed"));

    for filter in [
        ClientFilter::new().last_name(DEMO_LAST_NAME),
        ClientFilter::new().last_name(DEMO_NEW_LAST_NAME),
        ClientFilter::new().phone(DEMO_ADDED_PHONE),
    ] {
        assert!(dir.find_client(&filter).await.unwrap().is_empty());
    }
    assert_eq!(dir.list_clients().await.unwrap().len(), SEED_CLIENTS.len() - 1);
    assert_eq!(ctx.phone_count().await, 24);

    ctx.teardown().await;
}

#[tokio::test]
async fn lookup_sequence_reports_missing_client() {
    let Some(ctx) = common::setup().await else { return };
    let mut out = Vec::new();

    demo::run_lookup_sequence(&ctx.directory, &mut out).await.unwrap();
    let printed = String::from_utf8(out).unwrap();
    assert_eq!(printed.trim(), format!("No client named \"{DEMO_LAST_NAME}\""));

    ctx.teardown().await;
}
