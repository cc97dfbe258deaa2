// History query controller — Idle → Loading → {Loaded, Failed}.
//
// Fetches are tagged with a monotonic sequence number. Responses carry the
// token they were issued with, and a response whose token is no longer the
// latest is discarded — rapid re-searches can otherwise apply a stale
// result set over a newer one.

use anyhow::Result;
use tracing::{debug, warn};

use crate::backend::client::VerityClient;
use crate::backend::models::VerdictRecord;

/// Default number of history entries requested from the store.
pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

/// Controller state. An empty result set is a valid Loaded state —
/// callers distinguish "still loading" from "nothing to show".
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryState {
    Idle,
    Loading,
    Loaded,
    Failed { message: String },
}

/// Token identifying one in-flight fetch. Stale tokens are rejected when
/// the response arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Owns the current history result set and its loading state.
///
/// The record list is only ever overwritten atomically by a successful,
/// non-stale fetch; a failure surfaces a message but leaves the previous
/// records intact.
pub struct HistoryController {
    state: HistoryState,
    records: Vec<VerdictRecord>,
    latest_seq: u64,
}

impl HistoryController {
    pub fn new() -> Self {
        Self {
            state: HistoryState::Idle,
            records: Vec::new(),
            latest_seq: 0,
        }
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    /// The last successfully loaded result set, regardless of the current
    /// state — a Failed fetch does not clear it.
    pub fn records(&self) -> &[VerdictRecord] {
        &self.records
    }

    /// Start a fetch: transition to Loading and mint the token the
    /// response must present.
    pub fn begin_fetch(&mut self) -> RequestToken {
        self.latest_seq += 1;
        self.state = HistoryState::Loading;
        RequestToken(self.latest_seq)
    }

    /// Apply a successful response. Returns false (and changes nothing)
    /// when a newer fetch has superseded this token.
    pub fn apply_success(&mut self, token: RequestToken, records: Vec<VerdictRecord>) -> bool {
        if token.0 != self.latest_seq {
            debug!(token = token.0, latest = self.latest_seq, "Discarding stale history response");
            return false;
        }
        self.records = records;
        self.state = HistoryState::Loaded;
        true
    }

    /// Apply a failed response. Stale failures are discarded the same way
    /// as stale successes.
    pub fn apply_failure(&mut self, token: RequestToken, message: String) -> bool {
        if token.0 != self.latest_seq {
            debug!(token = token.0, latest = self.latest_seq, "Discarding stale history failure");
            return false;
        }
        self.state = HistoryState::Failed { message };
        true
    }

    /// Run one fetch against the store. An empty search term is an
    /// unfiltered query. Network failures land in the Failed state rather
    /// than propagating — the caller inspects `state()` afterwards.
    pub async fn fetch(&mut self, client: &VerityClient, search: &str, limit: u32) -> Result<()> {
        let token = self.begin_fetch();
        match client.fetch_history(search, limit).await {
            Ok(records) => {
                self.apply_success(token, records);
            }
            Err(e) => {
                warn!(error = %e, "History fetch failed");
                self.apply_failure(token, format!("Failed to load history: {e:#}"));
            }
        }
        Ok(())
    }
}

impl Default for HistoryController {
    fn default() -> Self {
        Self::new()
    }
}
