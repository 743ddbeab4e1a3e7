use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::IdStrategy;
use crate::models::IssueType;

/// Source of identifiers for detected issues.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self, issue_type: IssueType) -> String;
}

/// `issue-<uuid v4>`.
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self, _issue_type: IssueType) -> String {
        format!("issue-{}", uuid::Uuid::new_v4())
    }
}

/// `issue-<unix millis>-<type>-<seq>`.
///
/// Two issues of the same type generated in the same millisecond still
/// differ by the sequence number.
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    seq: AtomicU64,
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self, issue_type: IssueType) -> String {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        format!(
            "issue-{}-{}-{}",
            chrono::Utc::now().timestamp_millis(),
            issue_type,
            seq
        )
    }
}

/// Deterministic `<prefix>-<n>` ids starting at 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("issue")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self, _issue_type: IssueType) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}

pub fn generator_for(strategy: IdStrategy) -> Arc<dyn IdGenerator> {
    match strategy {
        IdStrategy::Uuid => Arc::new(UuidIdGenerator),
        IdStrategy::Timestamp => Arc::new(TimestampIdGenerator::default()),
    }
}
