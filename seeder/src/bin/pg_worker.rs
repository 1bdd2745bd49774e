//! Helper binary invoked by `pg_embedded_setup_unpriv` when tests run as root.
//!
//! The worker receives an operation (`setup`, `start`, `stop`, `cleanup`, or
//! `cleanup-full`) plus a path to a JSON [`WorkerPayload`] describing the
//! PostgreSQL settings and environment for the embedded cluster that backs
//! the Diesel adapter tests.

use std::env;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Context, Report, Result, eyre};
use pg_embedded_setup_unpriv::worker::{PlainSecret, WorkerPayload};
use postgresql_embedded::PostgreSQL;
use tokio::runtime::Builder;

fn main() -> Result<()> {
    color_eyre::install()?;
    run_worker(env::args_os())
}

fn run_worker(mut args: impl Iterator<Item = OsString>) -> Result<()> {
    let _program = args.next();
    let op_arg = args
        .next()
        .ok_or_else(|| eyre!("missing operation argument"))?;
    let operation = Operation::parse(&op_arg)?;
    let config_path = PathBuf::from(
        args.next()
            .ok_or_else(|| eyre!("missing config path argument"))?,
    );
    if let Some(extra) = args.next() {
        return Err(eyre!(
            "unexpected extra argument: {}; expected only operation and config path",
            extra.to_string_lossy()
        ));
    }

    let payload = load_payload(&config_path)?;
    execute(operation, payload)
}

fn load_payload(path: &Path) -> Result<WorkerPayload> {
    let payload = fs::read(path)
        .with_context(|| format!("failed to read worker config at {}", path.display()))?;
    serde_json::from_slice(&payload)
        .with_context(|| format!("failed to parse worker config at {}", path.display()))
}

fn execute(operation: Operation, payload: WorkerPayload) -> Result<()> {
    let settings = payload
        .settings
        .into_settings()
        .map_err(|err| Report::new(err).wrap_err("failed to rebuild postgres settings"))?;
    apply_environment(&payload.environment);

    match operation {
        Operation::Cleanup => return remove_dir(&settings.data_dir),
        Operation::CleanupFull => {
            remove_dir(&settings.data_dir)?;
            return remove_dir(&settings.installation_dir);
        }
        Operation::Setup | Operation::Start | Operation::Stop => {}
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build Pg worker runtime")?;

    let mut postgres = PostgreSQL::new(settings);
    runtime
        .block_on(async {
            match operation {
                Operation::Setup => postgres.setup().await,
                Operation::Start => postgres.start().await,
                Operation::Stop => postgres.stop().await,
                Operation::Cleanup | Operation::CleanupFull => Ok(()),
            }
        })
        .with_context(|| format!("postgresql_embedded::{operation} failed"))?;

    if matches!(operation, Operation::Start) {
        // Dropping the handle stops the server; it must outlive this process.
        std::mem::forget(postgres);
    }
    Ok(())
}

fn remove_dir(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err).with_context(|| format!("failed to remove {}", path.display())),
    }
}

fn apply_environment(environment: &[(String, Option<PlainSecret>)]) {
    for (key, value) in environment {
        // SAFETY: Called before spawning any threads, so no data races possible.
        match value {
            Some(val) => unsafe { env::set_var(key, val.expose()) },
            None => unsafe { env::remove_var(key) },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operation {
    Setup,
    Start,
    Stop,
    Cleanup,
    CleanupFull,
}

impl Operation {
    fn parse(raw: &OsStr) -> Result<Self> {
        match raw.to_string_lossy().as_ref() {
            "setup" => Ok(Self::Setup),
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            "cleanup" => Ok(Self::Cleanup),
            "cleanup-full" => Ok(Self::CleanupFull),
            other => Err(eyre!(
                "unknown pg_worker operation '{other}'; valid operations are setup, start, \
                 stop, cleanup, and cleanup-full"
            )),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Setup => "setup",
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Cleanup => "cleanup",
            Self::CleanupFull => "cleanup-full",
        })
    }
}
