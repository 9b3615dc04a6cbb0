use chrono::{Duration, SecondsFormat};
use rsessiongate::core::audit::RecordOutcome;
use rsessiongate::core::clock::FixedClock;
use rsessiongate::core::context::AppContext;
use rsessiongate::models::login_entry::LoginEntry;
use rsessiongate::store::{KeyValueStore, SqliteStore, keys, set_json};
use serde_json::{Value, json};
use std::sync::Arc;

mod common;
use common::{flaky_ctx, local_at, memory_ctx, setup_test_db};

#[tokio::test]
async fn first_login_is_recorded() {
    let (ctx, store, _clock) = memory_ctx();

    ctx.audit().record_login("admin").await;

    let log = ctx.audit().dump_log().await;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].usuario, "admin");

    let raw = store.get(keys::LOGIN_LOG).await.unwrap().unwrap();
    assert!(raw.contains("\"dataLogin\""));
    assert!(raw.contains("\"timestamp\""));
}

#[tokio::test]
async fn second_login_same_day_is_deduplicated() {
    let (ctx, _store, clock) = memory_ctx();
    let audit = ctx.audit();

    assert_eq!(
        audit.try_record_login("admin").await.unwrap(),
        RecordOutcome::Appended { len: 1 }
    );

    clock.advance(Duration::hours(8));
    assert_eq!(
        audit.try_record_login("admin").await.unwrap(),
        RecordOutcome::AlreadyLoggedToday
    );

    assert_eq!(audit.dump_log().await.len(), 1);
}

#[tokio::test]
async fn login_on_next_day_adds_an_entry() {
    let (ctx, _store, clock) = memory_ctx();
    let audit = ctx.audit();

    audit.record_login("admin").await;
    clock.set(local_at(2025, 3, 11, 10, 0));
    audit.record_login("admin").await;

    let log = audit.dump_log().await;
    assert_eq!(log.len(), 2);
    assert!(log[0].timestamp < log[1].timestamp);
}

#[tokio::test]
async fn different_users_same_day_each_get_an_entry() {
    let (ctx, _store, _clock) = memory_ctx();
    let audit = ctx.audit();

    audit.record_login("admin").await;
    audit.record_login("maria").await;
    audit.record_login("admin").await;

    let users: Vec<String> = audit.dump_log().await.into_iter().map(|e| e.usuario).collect();
    assert_eq!(users, vec!["admin", "maria"]);
}

#[tokio::test]
async fn entry_carries_iso_date_and_epoch_millis() {
    let (ctx, _store, _clock) = memory_ctx();
    let at = local_at(2025, 3, 10, 10, 0);

    ctx.audit().record_login("admin").await;

    let entry = &ctx.audit().dump_log().await[0];
    assert_eq!(entry.timestamp, at.timestamp_millis());
    assert!(entry.data_login.ends_with(".000Z"));
    let today = local_at(2025, 3, 10, 10, 0)
        .with_timezone(&chrono::Local)
        .date_naive();
    assert_eq!(entry.local_date(), Some(today));
}

#[tokio::test]
async fn log_is_capped_keeping_most_recent_in_order() {
    let (ctx, store, _clock) = memory_ctx();

    // 60 older entries, one per user, a week before "now"
    let old = local_at(2025, 3, 3, 10, 0);
    let seeded: Vec<LoginEntry> = (0..60)
        .map(|i| LoginEntry::new(&format!("u{i}"), old + Duration::minutes(i)))
        .collect();
    set_json(store.as_ref(), keys::LOGIN_LOG, &seeded).await.unwrap();

    ctx.audit().record_login("admin").await;

    let log = ctx.audit().dump_log().await;
    assert_eq!(log.len(), 50);
    assert_eq!(log[0].usuario, "u11");
    assert_eq!(log[48].usuario, "u59");
    assert_eq!(log[49].usuario, "admin");
    assert!(log.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
}

#[tokio::test]
async fn custom_cap_is_honoured() {
    let (ctx, _store, clock) = memory_ctx();
    let audit = ctx.with_log_cap(3).audit();

    for day in 10..16 {
        clock.set(local_at(2025, 3, day, 10, 0));
        audit.record_login("admin").await;
    }

    let log = audit.dump_log().await;
    assert_eq!(log.len(), 3);
    assert_eq!(log[2].timestamp, local_at(2025, 3, 15, 10, 0).timestamp_millis());
}

#[tokio::test]
async fn malformed_log_starts_over() {
    let (ctx, store, _clock) = memory_ctx();
    store.set(keys::LOGIN_LOG, "{not json").await.unwrap();

    assert!(ctx.audit().dump_log().await.is_empty());

    ctx.audit().record_login("admin").await;
    assert_eq!(ctx.audit().dump_log().await.len(), 1);
}

#[tokio::test]
async fn mixed_log_keeps_existing_entries() {
    let (ctx, store, _clock) = memory_ctx();
    let stored = json!([
        {
            "usuario": "maria",
            "dataLogin": "2025-03-01T10:00:00.000Z",
            "timestamp": 1740823200000_i64
        },
        { "usuario": "joao", "dataLogin": "2025-03-02T10:00:00.000Z" },
        42
    ]);
    store.set(keys::LOGIN_LOG, &stored.to_string()).await.unwrap();

    ctx.audit().record_login("admin").await;

    let raw = store.get(keys::LOGIN_LOG).await.unwrap().unwrap();
    let items: Vec<Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[..3], stored.as_array().unwrap()[..]);
    assert_eq!(items[3]["usuario"], "admin");

    let users: Vec<String> = ctx
        .audit()
        .dump_log()
        .await
        .into_iter()
        .map(|e| e.usuario)
        .collect();
    assert_eq!(users, ["maria", "joao", "admin"]);
}

#[tokio::test]
async fn entry_without_timestamp_still_deduplicates() {
    let (ctx, store, _clock) = memory_ctx();
    let earlier = local_at(2025, 3, 10, 8, 0).to_rfc3339_opts(SecondsFormat::Millis, true);
    let stored = json!([{ "usuario": "admin", "dataLogin": earlier }]);
    store.set(keys::LOGIN_LOG, &stored.to_string()).await.unwrap();

    assert_eq!(
        ctx.audit().try_record_login("admin").await.unwrap(),
        RecordOutcome::AlreadyLoggedToday
    );
}

#[tokio::test]
async fn log_that_is_not_an_array_starts_over() {
    let (ctx, store, _clock) = memory_ctx();
    store.set(keys::LOGIN_LOG, r#"{"usuario":"admin"}"#).await.unwrap();

    assert!(ctx.audit().dump_log().await.is_empty());
    assert_eq!(
        ctx.audit().try_record_login("admin").await.unwrap(),
        RecordOutcome::Appended { len: 1 }
    );
}

#[tokio::test]
async fn unparsable_date_falls_back_to_timestamp() {
    let (ctx, store, _clock) = memory_ctx();
    let legacy = vec![LoginEntry {
        usuario: "admin".into(),
        data_login: "yesterday-ish".into(),
        timestamp: local_at(2025, 3, 10, 8, 0).timestamp_millis(),
    }];
    set_json(store.as_ref(), keys::LOGIN_LOG, &legacy).await.unwrap();

    assert_eq!(
        ctx.audit().try_record_login("admin").await.unwrap(),
        RecordOutcome::AlreadyLoggedToday
    );
}

#[tokio::test]
async fn read_failure_is_swallowed_and_nothing_written() {
    let (ctx, store) = flaky_ctx();
    store.fail_reads(true);

    ctx.audit().record_login("admin").await;
    assert!(ctx.audit().dump_log().await.is_empty());

    store.fail_reads(false);
    assert!(store.get(keys::LOGIN_LOG).await.unwrap().is_none());
}

#[tokio::test]
async fn write_failure_is_reported_by_try_variant() {
    let (ctx, store) = flaky_ctx();
    store.fail_writes(true);

    assert!(ctx.audit().try_record_login("admin").await.is_err());
    // fire-and-forget variant must not panic
    ctx.audit().record_login("admin").await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_logins_keep_one_entry_per_day() {
    let (ctx, _store, _clock) = memory_ctx();

    let mut handles = Vec::new();
    for _ in 0..32 {
        let audit = ctx.audit();
        handles.push(tokio::spawn(async move {
            audit.try_record_login("admin").await.unwrap()
        }));
    }

    let mut appended = 0;
    for h in handles {
        if matches!(h.await.unwrap(), RecordOutcome::Appended { .. }) {
            appended += 1;
        }
    }

    assert_eq!(appended, 1);
    assert_eq!(ctx.audit().dump_log().await.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn separate_connections_keep_one_entry_per_day() {
    let db_path = setup_test_db("audit_separate_connections");

    // Two stores on one file, each with its own context and locks, stand in
    // for two CLI processes.
    let mut handles = Vec::new();
    for _ in 0..2 {
        let store = Arc::new(SqliteStore::open(&db_path).unwrap());
        let clock = Arc::new(FixedClock::new(local_at(2025, 3, 10, 10, 0)));
        let ctx = AppContext::new(store).with_clock(clock);
        for _ in 0..8 {
            let audit = ctx.audit();
            handles.push(tokio::spawn(async move {
                audit.try_record_login("admin").await.unwrap()
            }));
        }
    }

    let mut appended = 0;
    for h in handles {
        if matches!(h.await.unwrap(), RecordOutcome::Appended { .. }) {
            appended += 1;
        }
    }
    assert_eq!(appended, 1);

    let store = SqliteStore::open(&db_path).unwrap();
    let raw = store.get(keys::LOGIN_LOG).await.unwrap().unwrap();
    let items: Vec<Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(items.len(), 1);
}
