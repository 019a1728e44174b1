//! Submission metrics: counts, archetype mix, confidence mix.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use archetype_core::models::{ArchetypeId, ConfidenceLevel};

const LEVELS: usize = 4;

/// Lock-free counters shared by every request.
#[derive(Debug, Default)]
pub struct QuizMetrics {
    sessions_started: AtomicU64,
    submissions: AtomicU64,
    rejections: AtomicU64,
    claims: AtomicU64,
    claim_rejections: AtomicU64,
    by_archetype: [AtomicU64; ArchetypeId::COUNT],
    by_confidence: [AtomicU64; LEVELS],
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub sessions_started: u64,
    pub submissions: u64,
    pub rejections: u64,
    pub claims: u64,
    pub claim_rejections: u64,
    pub by_archetype: Vec<(ArchetypeId, u64)>,
    pub by_confidence: Vec<(ConfidenceLevel, u64)>,
}

impl MetricsSnapshot {
    /// Share of submission attempts that were rejected, 0.0 when none were made.
    pub fn rejection_rate(&self) -> f64 {
        let attempts = self.submissions + self.rejections;
        if attempts == 0 {
            0.0
        } else {
            self.rejections as f64 / attempts as f64
        }
    }
}

const ALL_LEVELS: [ConfidenceLevel; LEVELS] = [
    ConfidenceLevel::Weak,
    ConfidenceLevel::Moderate,
    ConfidenceLevel::Strong,
    ConfidenceLevel::Exact,
];

impl QuizMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_session_started(&self) {
        self.sessions_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission(&self, archetype: ArchetypeId, confidence: ConfidenceLevel) {
        self.submissions.fetch_add(1, Ordering::Relaxed);
        self.by_archetype[archetype as usize].fetch_add(1, Ordering::Relaxed);
        self.by_confidence[confidence as usize].fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejection(&self) {
        self.rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_claim(&self) {
        self.claims.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_claim_rejection(&self) {
        self.claim_rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let load = |c: &AtomicU64| c.load(Ordering::Relaxed);
        MetricsSnapshot {
            sessions_started: load(&self.sessions_started),
            submissions: load(&self.submissions),
            rejections: load(&self.rejections),
            claims: load(&self.claims),
            claim_rejections: load(&self.claim_rejections),
            by_archetype: ArchetypeId::ALL
                .into_iter()
                .zip(self.by_archetype.iter().map(load))
                .collect(),
            by_confidence: ALL_LEVELS
                .into_iter()
                .zip(self.by_confidence.iter().map(load))
                .collect(),
        }
    }
}
