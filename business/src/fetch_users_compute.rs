//! Fetch users command + compute cache.
//!
//! Fetching is a side effect (network IO), and side effects must not live in derived
//! computes because computes run implicitly. Instead:
//! - `UsersCompute` is a compute-shaped cache holding the latest fetch result
//! - `FetchUsersCommand` is dispatched explicitly, performs the request and updates the cache
//!   through `Updater::set`
//!
//! The request is fire-and-forget: no retry, no timeout, no cancellation. A failure is logged
//! and leaves the record list at its previous value.

use std::any::Any;

use chrono::{DateTime, Utc};
use log::{error, info};
use thiserror::Error;
use userview_states::{Command, Compute, ComputeDeps, Dep, Updater, assign_impl};

use crate::{BusinessConfig, UserRecord};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("response is not a JSON array of users: {0}")]
    Decode(String),
}

/// Where the last fetch stands. The records themselves live next to it in [`UsersCompute`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// No fetch dispatched yet.
    #[default]
    Idle,
    Pending,
    Loaded,
    Failed(FetchError),
}

/// Compute-shaped cache of the fetched records.
///
/// Its `compute()` is a no-op; only `FetchUsersCommand` writes it. `records` always holds the
/// result of the last successful fetch: a pending or failed re-fetch keeps them.
#[derive(Debug, Clone, Default)]
pub struct UsersCompute {
    pub records: Vec<UserRecord>,
    pub fetched_at: Option<DateTime<Utc>>,
    pub status: FetchStatus,
}

impl UsersCompute {
    pub fn loaded(records: Vec<UserRecord>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            records,
            fetched_at: Some(fetched_at),
            status: FetchStatus::Loaded,
        }
    }

    /// Same records, new status.
    pub fn with_status(&self, status: FetchStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Records of the last successful fetch; empty before the first one.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, FetchStatus::Pending)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.status, FetchStatus::Loaded)
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.status {
            FetchStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl Compute for UsersCompute {
    fn deps(&self) -> ComputeDeps {
        (Vec::new(), Vec::new())
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // Written by `FetchUsersCommand` only.
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Turn a raw HTTP response into records.
pub fn parse_users_response(status: u16, body: &[u8]) -> Result<Vec<UserRecord>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    serde_json::from_slice(body).map_err(|err| FetchError::Decode(err.to_string()))
}

/// Manual-only command that fetches the users once.
///
/// Dispatch via `ctx.dispatch::<FetchUsersCommand>()`.
#[derive(Default, Debug)]
pub struct FetchUsersCommand;

impl Command for FetchUsersCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let url = deps.get_state_ref::<BusinessConfig>().users_url();
        let previous = deps.get_compute_ref::<UsersCompute>().clone();

        info!("FetchUsersCommand: GET {url}");
        updater.set(previous.with_status(FetchStatus::Pending));

        let request = ehttp::Request::get(url.as_str());
        ehttp::fetch(request, move |response| {
            let parsed = response
                .map_err(FetchError::Request)
                .and_then(|response| parse_users_response(response.status, &response.bytes));

            let next = match parsed {
                Ok(records) => {
                    info!("FetchUsersCommand: fetched {} users", records.len());
                    UsersCompute::loaded(records, Utc::now())
                }
                Err(err) => {
                    error!("FetchUsersCommand: error fetching users: {err}");
                    previous.with_status(FetchStatus::Failed(err))
                }
            };
            updater.set(next);
        });
    }
}

#[cfg(test)]
mod tests {
    use userview_states::StateCtx;

    use super::*;

    #[test]
    fn parses_a_successful_body() {
        let body = br#"[{"id":1,"name":"Bob","email":"b@x.com","address":{"city":"NYC"}}]"#;
        let records = parse_users_response(200, body).expect("valid body");
        assert_eq!(records, vec![UserRecord::new(1, "Bob", "b@x.com", "NYC")]);
    }

    #[test]
    fn non_success_status_is_an_error_even_with_a_valid_body() {
        assert_eq!(parse_users_response(503, b"[]"), Err(FetchError::Status(503)));
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let result = parse_users_response(200, b"<html>oops</html>");
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn records_are_empty_before_the_first_load() {
        let mut compute = UsersCompute::default();
        assert!(compute.records().is_empty());

        compute = compute.with_status(FetchStatus::Failed(FetchError::Status(500)));
        assert!(compute.records().is_empty());
        assert_eq!(compute.error(), Some(&FetchError::Status(500)));

        compute = UsersCompute::loaded(vec![UserRecord::new(1, "Amy", "a@x.com", "LA")], Utc::now());
        assert_eq!(compute.records().len(), 1);
        assert!(compute.fetched_at().is_some());
    }

    #[test]
    fn failed_refetch_keeps_the_loaded_records() {
        let mut ctx = StateCtx::new();
        ctx.add_state(BusinessConfig::default());
        ctx.record_compute(UsersCompute::default());

        let loaded = UsersCompute::loaded(vec![UserRecord::new(1, "Amy", "a@x.com", "LA")], Utc::now());
        ctx.updater().set(loaded.clone());
        ctx.settle();

        ctx.updater().set(loaded.with_status(FetchStatus::Pending));
        ctx.settle();
        let pending = ctx.cached::<UsersCompute>().expect("recorded");
        assert!(pending.is_pending());
        assert_eq!(pending.records().len(), 1);

        ctx.updater()
            .set(pending.with_status(FetchStatus::Failed(FetchError::Status(500))));
        ctx.settle();
        let failed = ctx.cached::<UsersCompute>().expect("recorded");
        assert_eq!(failed.error(), Some(&FetchError::Status(500)));
        assert_eq!(failed.records().len(), 1);
        assert_eq!(failed.fetched_at(), loaded.fetched_at());
    }
}
