//! End-to-end probe runs against a containerized MongoDB.
//!
//! These tests need a working Docker daemon (testcontainers).

use database::mongodb::MongoConfig;
use probe::{ProbeOptions, ProbeStep, run};
use test_utils::TestMongo;

const FULL_SEQUENCE: [ProbeStep; 7] = [
    ProbeStep::Connect,
    ProbeStep::Ping,
    ProbeStep::ListDatabases,
    ProbeStep::Insert,
    ProbeStep::Find,
    ProbeStep::Cleanup,
    ProbeStep::Close,
];

#[tokio::test]
async fn probe_succeeds_against_healthy_endpoint() {
    let mongo = TestMongo::new().await;
    let config = MongoConfig::new(mongo.connection_string());

    let report = run(&config, &ProbeOptions::default()).await;

    assert!(report.succeeded(), "report: {:?}", report.lines());

    // One success marker per step, in step order
    let steps: Vec<ProbeStep> = report.outcomes().iter().map(|o| o.step).collect();
    assert_eq!(steps, FULL_SEQUENCE);
    assert!(report.lines().iter().all(|l| l.starts_with("✅")));
}

#[tokio::test]
async fn probe_cleans_up_scratch_namespace() {
    let mongo = TestMongo::new().await;
    let config = MongoConfig::new(mongo.connection_string());

    let report = run(&config, &ProbeOptions::default()).await;
    assert!(report.succeeded());

    // The scratch database must be gone after a successful run
    let names = mongo.client().list_database_names().await.unwrap();
    assert!(
        !names.contains(&"probe_scratch".to_string()),
        "scratch database left behind: {names:?}"
    );
}

#[tokio::test]
async fn probe_is_idempotent_across_runs() {
    let mongo = TestMongo::new().await;
    let config = MongoConfig::new(mongo.connection_string());
    let options = ProbeOptions::default();

    let first = run(&config, &options).await;
    let second = run(&config, &options).await;

    assert!(first.succeeded());
    assert!(second.succeeded());
}

#[tokio::test]
async fn close_marker_is_last_on_success() {
    let mongo = TestMongo::new().await;
    let config = MongoConfig::new(mongo.connection_string());

    let report = run(&config, &ProbeOptions::default()).await;

    let lines = report.lines();
    assert!(lines.last().unwrap().starts_with("✅ close:"));

    // Close is recorded exactly once
    let closes = report
        .outcomes()
        .iter()
        .filter(|o| o.step == ProbeStep::Close)
        .count();
    assert_eq!(closes, 1);
}

#[tokio::test]
async fn mid_sequence_failure_skips_remaining_steps_but_still_closes() {
    let mongo = TestMongo::new().await;
    let config = MongoConfig::new(mongo.connection_string());
    // '/' is not allowed in database names, so the server rejects the
    // insert while connect, ping, and list all succeed
    let options = ProbeOptions::new("bad/name", "probe");

    let report = run(&config, &options).await;
    assert!(!report.succeeded());

    // Find and cleanup are skipped; close still runs and is last
    let steps: Vec<ProbeStep> = report.outcomes().iter().map(|o| o.step).collect();
    assert_eq!(
        steps,
        vec![
            ProbeStep::Connect,
            ProbeStep::Ping,
            ProbeStep::ListDatabases,
            ProbeStep::Insert,
            ProbeStep::Close,
        ]
    );

    let outcomes = report.outcomes();
    assert!(outcomes[..3].iter().all(|o| o.succeeded()));
    assert_eq!(report.failure().unwrap().step, ProbeStep::Insert);
    assert!(outcomes.last().unwrap().succeeded());

    let lines = report.lines();
    assert!(lines[3].starts_with("❌ insert:"));
    assert!(lines.last().unwrap().starts_with("✅ close:"));
}

#[tokio::test]
async fn custom_scratch_names_are_used_and_dropped() {
    let mongo = TestMongo::new().await;
    let config = MongoConfig::new(mongo.connection_string());
    let options = ProbeOptions::new("probe_custom_scratch", "scratch_items");

    let report = run(&config, &options).await;
    assert!(report.succeeded());

    let names = mongo.client().list_database_names().await.unwrap();
    assert!(!names.contains(&"probe_custom_scratch".to_string()));
}
