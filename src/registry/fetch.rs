//! Remote registry fetching
//!
//! Downloads a registry document over HTTP(S). Connection failures, timeouts,
//! `429` and `5xx` responses are retried with exponential backoff; anything
//! else fails immediately.

use std::time::Duration;

use backoff::ExponentialBackoffBuilder;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::{self, Result};

/// Maximum number of HTTP attempts per fetch
pub const MAX_ATTEMPTS: u32 = 3;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Outcome of a single failed attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// Worth retrying (network hiccup, server overload)
    Transient(String),
    /// Retrying will not help (bad URL, 404, ...)
    Permanent(String),
}

/// Fetch the body of `url` as text, retrying transient failures
pub fn fetch_text(url: &str, show_progress: bool) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(concat!("shadcn-ext/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| error::registry::fetch_failed(url, e))?;

    let pb = if show_progress {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} Fetching {msg}") {
            pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
        }
        pb.set_message(url.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    } else {
        ProgressBar::hidden()
    };

    let result = retry_fetch(url, MAX_ATTEMPTS, backoff_policy(), || attempt(&client, url));
    pb.finish_and_clear();
    result
}

fn backoff_policy() -> backoff::ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_initial_interval(Duration::from_millis(250))
        .with_max_interval(Duration::from_secs(2))
        .with_max_elapsed_time(Some(Duration::from_secs(30)))
        .build()
}

fn attempt(client: &reqwest::blocking::Client, url: &str) -> std::result::Result<String, FetchFailure> {
    let response = client.get(url).send().map_err(|e| {
        if e.is_timeout() || e.is_connect() {
            FetchFailure::Transient(e.to_string())
        } else {
            FetchFailure::Permanent(e.to_string())
        }
    })?;

    let status = response.status();
    if status.is_server_error() || status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(FetchFailure::Transient(format!("server responded {status}")));
    }
    if !status.is_success() {
        return Err(FetchFailure::Permanent(format!("server responded {status}")));
    }

    response
        .text()
        .map_err(|e| FetchFailure::Transient(e.to_string()))
}

/// Run `op` until it succeeds, fails permanently, or `max_attempts` is reached
pub fn retry_fetch<F, B>(url: &str, max_attempts: u32, policy: B, mut op: F) -> Result<String>
where
    F: FnMut() -> std::result::Result<String, FetchFailure>,
    B: backoff::backoff::Backoff,
{
    let mut attempts = 0u32;

    let outcome = backoff::retry(policy, || {
        attempts += 1;
        match op() {
            Ok(body) => Ok(body),
            Err(FetchFailure::Transient(reason)) if attempts < max_attempts => {
                tracing::debug!(url, attempts, %reason, "registry fetch failed, retrying");
                Err(backoff::Error::transient(reason))
            }
            Err(FetchFailure::Transient(reason) | FetchFailure::Permanent(reason)) => {
                Err(backoff::Error::permanent(reason))
            }
        }
    });

    outcome.map_err(|e| {
        let reason = match e {
            backoff::Error::Permanent(reason) | backoff::Error::Transient { err: reason, .. } => {
                reason
            }
        };
        error::registry::fetch_failed(url, format!("{reason} (after {attempts} attempt(s))"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_policy() -> backoff::ExponentialBackoff {
        ExponentialBackoffBuilder::new()
            .with_initial_interval(Duration::from_millis(1))
            .with_max_interval(Duration::from_millis(1))
            .with_randomization_factor(0.0)
            .with_max_elapsed_time(Some(Duration::from_secs(5)))
            .build()
    }

    #[test]
    fn test_retry_succeeds_after_transient_failures() {
        let mut calls = 0;
        let body = retry_fetch("https://r.test/index.json", 3, instant_policy(), || {
            calls += 1;
            if calls < 3 {
                Err(FetchFailure::Transient("connection reset".to_string()))
            } else {
                Ok("{}".to_string())
            }
        })
        .unwrap();

        assert_eq!(body, "{}");
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_retry_gives_up_after_max_attempts() {
        let mut calls = 0;
        let err = retry_fetch("https://r.test/index.json", 3, instant_policy(), || {
            calls += 1;
            Err(FetchFailure::Transient("timed out".to_string()))
        })
        .unwrap_err();

        assert_eq!(calls, 3);
        let message = err.to_string();
        assert!(message.contains("timed out"));
        assert!(message.contains("after 3 attempt(s)"));
    }

    #[test]
    fn test_permanent_failure_is_not_retried() {
        let mut calls = 0;
        let err = retry_fetch("https://r.test/index.json", 3, instant_policy(), || {
            calls += 1;
            Err(FetchFailure::Permanent("server responded 404 Not Found".to_string()))
        })
        .unwrap_err();

        assert_eq!(calls, 1);
        assert!(matches!(
            err,
            crate::error::ShadcnError::RegistryFetchFailed { .. }
        ));
    }
}
