//! Scripted transport for exercising the fetch engine without a network.

use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::app::{FanfetchError, Result};
use crate::fetcher::Fetcher;

/// One scripted response, consumed in order per URL.
#[derive(Debug, Clone)]
pub enum Reply {
    Body(Vec<u8>),
    Status(u16),
    Transport,
    Unexpected,
    Panic,
}

impl Reply {
    pub fn json(value: serde_json::Value) -> Self {
        Reply::Body(value.to_string().into_bytes())
    }
}

#[derive(Default)]
pub struct ScriptedFetcher {
    scripts: Mutex<HashMap<String, VecDeque<Reply>>>,
    delays: Mutex<HashMap<String, Duration>>,
    calls: Mutex<HashMap<String, usize>>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    closes: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(&self, url: &str, replies: Vec<Reply>) {
        self.scripts
            .lock()
            .unwrap()
            .insert(url.to_string(), replies.into());
    }

    pub fn delay(&self, url: &str, delay: Duration) {
        self.delays.lock().unwrap().insert(url.to_string(), delay);
    }

    pub fn calls(&self, url: &str) -> usize {
        self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    /// Highest number of simultaneous `fetch` calls observed.
    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for ScriptedFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        *self.calls.lock().unwrap().entry(url.to_string()).or_default() += 1;
        let reply = self
            .scripts
            .lock()
            .unwrap()
            .get_mut(url)
            .and_then(VecDeque::pop_front);
        let delay = self.delays.lock().unwrap().get(url).copied();

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match reply {
            Some(Reply::Body(body)) => Ok(body),
            Some(Reply::Status(status)) => Err(FanfetchError::Status {
                url: url.to_string(),
                status,
            }),
            Some(Reply::Transport) => Err(FanfetchError::Transport("connection refused".into())),
            Some(Reply::Unexpected) => Err(FanfetchError::Io(io::Error::other("scripted failure"))),
            Some(Reply::Panic) => panic!("scripted panic for {}", url),
            None => Err(FanfetchError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no reply scripted for {}", url),
            ))),
        }
    }

    fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}
