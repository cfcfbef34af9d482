// src/core/net.rs

//! HTTPS GET with a mandatory pause in front of every request. The remote
//! site bans crawlers that exceed its acceptable-use rate, and a ban is
//! unrecoverable, so the gate sits in front of every call unconditionally.

use std::thread;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::params::{MIN_REQUEST_INTERVAL, REQUEST_TIMEOUT, USER_AGENT};

/// Seam for the orchestrator; tests substitute a scripted fetcher.
pub trait Fetch {
    fn get(&mut self, url: &str) -> Result<String>;
}

/// Enforces a minimum interval between consecutive calls, including a full
/// pause before the first one.
pub struct RateGate {
    min_interval: Duration,
    last: Option<Instant>,
}

impl RateGate {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last: None,
        }
    }

    pub fn wait(&mut self) {
        let elapsed = self.last.map(|t| t.elapsed()).unwrap_or(Duration::ZERO);
        if let Some(remaining) = self.min_interval.checked_sub(elapsed) {
            thread::sleep(remaining);
        }
        self.last = Some(Instant::now());
    }
}

pub struct Fetcher {
    client: reqwest::blocking::Client,
    gate: RateGate,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::NetworkFailure {
                url: s!("<client setup>"),
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            gate: RateGate::new(MIN_REQUEST_INTERVAL),
        })
    }
}

impl Fetch for Fetcher {
    fn get(&mut self, url: &str) -> Result<String> {
        self.gate.wait();

        let fail = |reason: String| Error::NetworkFailure {
            url: s!(url),
            reason,
        };

        let resp = self.client.get(url).send().map_err(|e| fail(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(fail(format!("HTTP status {status}")));
        }
        resp.text().map_err(|e| fail(e.to_string()))
    }
}
