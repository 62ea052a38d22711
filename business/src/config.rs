//! Endpoint configuration, read once at startup and stored as a state.

use std::any::Any;

use log::info;
use serde::Deserialize;
use thiserror::Error;
use userview_states::{State, state_assign_impl};
use ustr::Ustr;

/// Endpoint the records are fetched from when nothing else is configured.
pub const DEFAULT_USERS_URL: &str = "http://localhost:5000/users";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("USERS_URL is set but empty")]
    EmptyUsersUrl,
}

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    users_url: Ustr,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    users_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(users_url: impl AsRef<str>) -> Self {
        Self {
            users_url: Ustr::from(users_url.as_ref()),
        }
    }

    /// Read `USERS_URL` from the process environment, falling back to [`DEFAULT_USERS_URL`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, S>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        match raw.users_url {
            Some(url) if url.trim().is_empty() => Err(ConfigError::EmptyUsersUrl),
            Some(url) => {
                info!("Using users endpoint from USERS_URL: {url}");
                Ok(Self::new(url.trim()))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn users_url(&self) -> Ustr {
        self.users_url
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_USERS_URL)
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
