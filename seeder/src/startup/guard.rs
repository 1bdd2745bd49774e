//! Scoped ownership of the store connection for a whole run.
//!
//! [`run_with_guard`] hands a clone of the resource to the run, waits for it
//! to finish, and releases the resource afterwards on every path: success,
//! returned error, or panic inside the run.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::process::ExitCode;

use futures_util::FutureExt;
use tracing::debug;

use crate::outbound::persistence::DbPool;

/// A resource that must be released exactly once when a run ends.
pub trait Releasable {
    /// Release the resource.
    fn release(self);
}

impl Releasable for DbPool {
    fn release(self) {
        self.close();
    }
}

/// How a guarded run ended.
#[derive(Debug)]
pub enum RunOutcome<T, E> {
    /// The run returned a value.
    Completed(T),
    /// The run returned an error.
    Failed(E),
    /// The run panicked; holds the panic message when one was available.
    Panicked(String),
}

impl<T, E> RunOutcome<T, E> {
    /// `true` for [`RunOutcome::Completed`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_owned()
    }
}

/// Run `run` with a clone of `resource`, then release `resource`.
///
/// # Examples
///
/// ```
/// use seeder::startup::guard::{Releasable, RunOutcome, run_with_guard};
///
/// #[derive(Clone)]
/// struct Handle;
///
/// impl Releasable for Handle {
///     fn release(self) {}
/// }
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let outcome = run_with_guard(Handle, |_handle| async { Ok::<_, String>(12) }).await;
/// assert!(matches!(outcome, RunOutcome::Completed(12)));
/// # });
/// ```
pub async fn run_with_guard<R, F, Fut, T, E>(resource: R, run: F) -> RunOutcome<T, E>
where
    R: Releasable + Clone,
    F: FnOnce(R) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let handle = resource.clone();
    let result = AssertUnwindSafe(async move { run(handle).await })
        .catch_unwind()
        .await;

    resource.release();
    debug!("released run resources");

    match result {
        Ok(Ok(value)) => RunOutcome::Completed(value),
        Ok(Err(error)) => RunOutcome::Failed(error),
        Err(payload) => RunOutcome::Panicked(panic_message(payload.as_ref())),
    }
}
