use std::future::Future;
use std::time::Instant;

use database::DatabaseError;
use database::mongodb::{Client, Collection, Database, MongoConfig};
use database::mongodb::{check_health_detailed, connect_from_config};
use mongodb::bson::doc;
use tracing::{info, warn};

use crate::document::{PROBE_MARKER, ProbeDocument};
use crate::report::{ProbeReport, ProbeStep};

/// Error type for probe steps
///
/// Single taxonomy: a step either fails with the underlying driver error or
/// with one of the probe's own conditions. No distinction is made between
/// connectivity, authentication, and data errors.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error(transparent)]
    Connection(#[from] DatabaseError),

    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[error("health check failed: {0}")]
    HealthCheck(String),

    #[error("probe document not found after insert")]
    DocumentMissing,
}

/// Names of the scratch namespace the probe writes into
///
/// The namespace is created during the insert step and dropped during
/// cleanup, so it is self-cleaning on the target server. Overriding the
/// names keeps concurrent probe runs out of each other's way.
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    pub scratch_database: String,
    pub scratch_collection: String,
}

impl ProbeOptions {
    pub fn new(database: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            scratch_database: database.into(),
            scratch_collection: collection.into(),
        }
    }
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self::new("probe_scratch", "probe")
    }
}

/// Run the full probe sequence against the configured endpoint
///
/// Steps are issued and awaited one at a time: connect, ping, list
/// databases, insert, find, cleanup. The first failure aborts the remaining
/// steps. The connection is closed exactly once on every exit path, and the
/// close outcome is always the last entry in the returned report.
pub async fn run(config: &MongoConfig, options: &ProbeOptions) -> ProbeReport {
    let mut report = ProbeReport::new();

    let start = Instant::now();
    let client = match connect_from_config(config).await {
        Ok(client) => {
            report.record_ok(
                ProbeStep::Connect,
                format!("connected to {}", config.url()),
                elapsed_ms(start),
            );
            client
        }
        Err(e) => {
            let err = ProbeError::Connection(e);
            warn!("probe aborted: {err}");
            report.record_err(ProbeStep::Connect, err.to_string(), elapsed_ms(start));
            // No connection was opened, but the close marker is still the
            // last line on every exit path.
            report.record_ok(ProbeStep::Close, "connection closed", 0);
            return report;
        }
    };

    let db = client.database(&options.scratch_database);
    let collection = db.collection::<ProbeDocument>(&options.scratch_collection);

    let ok = record(&mut report, ProbeStep::Ping, step_ping(&client)).await;
    let ok = ok
        && record(
            &mut report,
            ProbeStep::ListDatabases,
            step_list_databases(&client),
        )
        .await;
    let ok = ok && record(&mut report, ProbeStep::Insert, step_insert(&collection)).await;
    let ok = ok && record(&mut report, ProbeStep::Find, step_find(&collection)).await;
    let _ = ok
        && record(
            &mut report,
            ProbeStep::Cleanup,
            step_cleanup(&collection, &db),
        )
        .await;

    let start = Instant::now();
    client.shutdown().await;
    report.record_ok(ProbeStep::Close, "connection closed", elapsed_ms(start));

    report
}

/// Await one step and append its outcome to the report
///
/// Returns whether the step succeeded, so the caller can short-circuit the
/// remaining sequence.
async fn record<F>(report: &mut ProbeReport, step: ProbeStep, operation: F) -> bool
where
    F: Future<Output = Result<String, ProbeError>>,
{
    let start = Instant::now();
    match operation.await {
        Ok(detail) => {
            info!("{step}: {detail}");
            report.record_ok(step, detail, elapsed_ms(start));
            true
        }
        Err(e) => {
            warn!("{step} failed: {e}");
            report.record_err(step, e.to_string(), elapsed_ms(start));
            false
        }
    }
}

async fn step_ping(client: &Client) -> Result<String, ProbeError> {
    let status = check_health_detailed(client).await;
    if status.healthy {
        Ok(format!(
            "server responded to ping in {}ms",
            status.response_time_ms
        ))
    } else {
        Err(ProbeError::HealthCheck(
            status.message.unwrap_or_else(|| "ping failed".to_string()),
        ))
    }
}

async fn step_list_databases(client: &Client) -> Result<String, ProbeError> {
    let names = client.list_database_names().await?;
    Ok(format!(
        "{} databases available: {}",
        names.len(),
        names.join(", ")
    ))
}

async fn step_insert(collection: &Collection<ProbeDocument>) -> Result<String, ProbeError> {
    let document = ProbeDocument::new();
    let result = collection.insert_one(&document).await?;
    Ok(format!(
        "inserted probe document with id {}",
        result.inserted_id
    ))
}

async fn step_find(collection: &Collection<ProbeDocument>) -> Result<String, ProbeError> {
    match collection.find_one(doc! { "marker": PROBE_MARKER }).await? {
        Some(found) => Ok(format!(
            "read probe document back (created at {})",
            found.created_at
        )),
        // Ok(None) from the driver is still a probe failure
        None => Err(ProbeError::DocumentMissing),
    }
}

async fn step_cleanup(
    collection: &Collection<ProbeDocument>,
    db: &Database,
) -> Result<String, ProbeError> {
    collection.drop().await?;
    db.drop().await?;
    Ok(format!("dropped scratch database '{}'", db.name()))
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
