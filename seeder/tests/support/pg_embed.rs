//! Bootstraps embedded PostgreSQL for the Diesel adapter tests.
//!
//! Data and runtime directories live under the target directory so the
//! cluster works in sandboxes that block `/var/tmp`. When the tests run as
//! root, `pg-embed-setup-unpriv` delegates to a worker binary; this module
//! points `PG_EMBEDDED_WORKER` at the crate's own `pg_worker` unless the
//! caller already set it.
//!
//! The overrides stay in place for the whole cluster lifetime because
//! stopping and cleaning up the cluster also goes through the worker.

use std::ops::Deref;
use std::path::PathBuf;
use std::time::Duration;

use env_lock::EnvGuard;
use pg_embedded_setup_unpriv::TestCluster;
use uuid::Uuid;

const MAX_RETRIES: u32 = 3;
const RETRY_DELAY_MS: u64 = 500;

/// A running cluster plus the environment overrides it depends on.
pub struct EmbeddedCluster {
    // Field order matters: the cluster must stop before the guard restores
    // the environment.
    cluster: TestCluster,
    _env: EnvGuard<'static>,
}

impl Deref for EmbeddedCluster {
    type Target = TestCluster;

    fn deref(&self) -> &Self::Target {
        &self.cluster
    }
}

fn pg_embed_target_dir() -> PathBuf {
    if let Some(target_dir) = std::env::var_os("CARGO_TARGET_DIR") {
        return PathBuf::from(target_dir).join("pg-embed");
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("target")
        .join("pg-embed")
}

fn create_unique_pg_embed_dirs() -> Result<(String, String), std::io::Error> {
    let unique = format!("seeder-{}-{}", std::process::id(), Uuid::new_v4());
    let base = pg_embed_target_dir().join(unique);
    let runtime_dir = base.join("install");
    let data_dir = base.join("data");
    std::fs::create_dir_all(&runtime_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    Ok((
        runtime_dir.to_string_lossy().into_owned(),
        data_dir.to_string_lossy().into_owned(),
    ))
}

fn is_transient_error(err: &str) -> bool {
    let err_lower = err.to_lowercase();
    [
        "error decoding response body",
        "connection reset",
        "connection refused",
        "timed out",
        "temporarily unavailable",
        "dns error",
    ]
    .iter()
    .any(|pattern| err_lower.contains(pattern))
}

/// Start a cluster with workspace-backed directories and the worker wired in.
pub fn embedded_cluster() -> Result<EmbeddedCluster, String> {
    let keep = |name: &str| std::env::var(name).ok();
    let (runtime_dir, data_dir) = match (keep("PG_RUNTIME_DIR"), keep("PG_DATA_DIR")) {
        (Some(runtime), Some(data)) => (runtime, data),
        _ => create_unique_pg_embed_dirs().map_err(|err| err.to_string())?,
    };
    let worker = keep("PG_EMBEDDED_WORKER")
        .unwrap_or_else(|| env!("CARGO_BIN_EXE_pg_worker").to_owned());

    let env = env_lock::lock_env([
        ("PG_RUNTIME_DIR", Some(runtime_dir)),
        ("PG_DATA_DIR", Some(data_dir)),
        ("PG_EMBEDDED_WORKER", Some(worker)),
    ]);

    let mut last_error = String::new();
    for attempt in 0..=MAX_RETRIES {
        match TestCluster::new() {
            Ok(cluster) => {
                return Ok(EmbeddedCluster { cluster, _env: env });
            }
            Err(err) => {
                last_error = format!("{err:?}");
                if attempt == MAX_RETRIES || !is_transient_error(&last_error) {
                    break;
                }
                let delay = Duration::from_millis(RETRY_DELAY_MS * (1 << attempt));
                eprintln!("pg-embed: transient error, retrying in {delay:?}: {last_error}");
                std::thread::sleep(delay);
            }
        }
    }
    Err(last_error)
}
