//! Replaces the course catalogue with the builtin fixtures.
//!
//! Configuration comes from `SEEDER_*` variables (a `.env` file is read
//! first when present). The run summary is printed to stdout; progress and
//! failures go to the log on stderr. The exit status is non-zero when the
//! run fails or panics.

use std::io::{self, Write};
use std::process::ExitCode;

use color_eyre::eyre::{Context, Result};
use seeder::outbound::credentials::BcryptPasswordHasher;
use seeder::startup::{
    RunOutcome, SeederSettings, acquire_store, init_tracing, load_dotenv, run_with_guard,
    seed_course_catalogue,
};
use tokio::runtime::Builder;
use tracing::{error, info};

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    load_dotenv()?;

    let settings = SeederSettings::load().wrap_err("failed to load seeder settings")?;
    init_tracing(settings.log_json);
    let hasher = BcryptPasswordHasher::new(settings.hash_cost())
        .wrap_err("invalid SEEDER_HASH_COST")?;

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build seeder runtime")?;
    runtime.block_on(run(settings, hasher))
}

async fn run(settings: SeederSettings, hasher: BcryptPasswordHasher) -> Result<ExitCode> {
    let pool = match acquire_store(&settings).await {
        Ok(pool) => pool,
        Err(err) => {
            error!(kind = err.kind().as_str(), error = %err, "seeding could not start");
            return Ok(ExitCode::FAILURE);
        }
    };

    let outcome = run_with_guard(pool, |pool| seed_course_catalogue(pool, hasher)).await;
    match &outcome {
        RunOutcome::Completed(summary) => {
            info!(
                courses = summary.course_count,
                lectures = summary.lecture_count,
                instructor_email = %summary.instructor.email,
                "course catalogue seeded"
            );
            write!(io::stdout().lock(), "{summary}").wrap_err("failed to write run summary")?;
        }
        RunOutcome::Failed(err) => {
            let progress = err.progress().unwrap_or_default();
            error!(
                kind = err.kind().as_str(),
                error = %err,
                courses_created = progress.courses_created,
                lectures_created = progress.lectures_created,
                "course seeding failed"
            );
        }
        RunOutcome::Panicked(message) => {
            error!(panic = %message, "course seeding panicked");
        }
    }
    Ok(outcome.exit_code())
}
