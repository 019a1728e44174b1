//! QuizEngine — the request-level facade.
//!
//! Scoring is pure and shared. The result store serializes its own writes,
//! so the engine itself holds no locks and is `Send + Sync`.

use std::path::Path;
use std::sync::Arc;

use archetype_core::config::ArchetypeConfig;
use archetype_core::errors::{ArchetypeError, ArchetypeResult, ErrorCode};
use archetype_core::models::{ArchetypeId, QuizAnswers, QuizResult, UserId};
use archetype_core::traits::IResultStorage;
use archetype_observability::tracing_setup::events;
use archetype_observability::{MetricsSnapshot, QuizMetrics};
use archetype_scoring::{Evaluation, QuestionBank, ScoringEngine};
use archetype_session::{
    new_session_id, validate_session_id, validate_user_id, SessionSigner, SessionToken,
    VerifiedSession,
};
use archetype_storage::StorageEngine;

use crate::summary::ResultSummary;

pub struct QuizEngine {
    config: ArchetypeConfig,
    scoring: ScoringEngine,
    storage: Arc<dyn IResultStorage>,
    signer: SessionSigner,
    metrics: QuizMetrics,
}

impl QuizEngine {
    /// Open against the SQLite file named in `config.storage.db_path`, using
    /// the built-in question bank.
    pub fn open(config: ArchetypeConfig) -> ArchetypeResult<Self> {
        config.validate()?;
        let path = Path::new(&config.storage.db_path);
        let storage = StorageEngine::open(path, &config.storage)?;
        events::engine_started(
            Some(&config.storage.db_path),
            QuestionBank::builtin().version(),
            QuestionBank::builtin().len(),
        );
        Self::with_parts(config, QuestionBank::builtin().clone(), Arc::new(storage))
    }

    /// Private in-memory SQLite database, built-in bank.
    pub fn open_in_memory(config: ArchetypeConfig) -> ArchetypeResult<Self> {
        let storage = StorageEngine::open_in_memory()?;
        Self::with_parts(config, QuestionBank::builtin().clone(), Arc::new(storage))
    }

    /// Assemble from an explicit bank and store.
    pub fn with_parts(
        config: ArchetypeConfig,
        bank: QuestionBank,
        storage: Arc<dyn IResultStorage>,
    ) -> ArchetypeResult<Self> {
        config.validate()?;
        let signer = SessionSigner::from_config(&config.session)?;
        let scoring = ScoringEngine::new(bank, config.classifier.clone());
        Ok(Self {
            config,
            scoring,
            storage,
            signer,
            metrics: QuizMetrics::new(),
        })
    }

    pub fn config(&self) -> &ArchetypeConfig {
        &self.config
    }

    pub fn bank(&self) -> &QuestionBank {
        self.scoring.bank()
    }

    /// Mint a session id and its signed token.
    pub fn start_session(&self) -> ArchetypeResult<SessionToken> {
        let token = self.signer.issue(&new_session_id())?;
        self.metrics.record_session_started();
        events::session_started(&token.session_id);
        Ok(token)
    }

    /// Check a session token without touching storage.
    pub fn verify_session(&self, token: &str) -> ArchetypeResult<VerifiedSession> {
        Ok(self.signer.verify(token)?)
    }

    /// Score pure answers without persisting anything.
    pub fn evaluate(&self, answers: &QuizAnswers) -> ArchetypeResult<Evaluation> {
        self.scoring.evaluate(answers)
    }

    /// Validate, score, classify, and persist one attempt.
    /// A session id is scored at most once; a second submission fails with
    /// `DuplicateSession` and leaves the stored result untouched.
    pub fn submit(&self, session_id: &str, answers: QuizAnswers) -> ArchetypeResult<QuizResult> {
        let _span = archetype_observability::submit_span!(session_id).entered();
        match self.try_submit(session_id, answers) {
            Ok(result) => {
                let c = &result.classification;
                self.metrics.record_submission(c.primary, c.confidence_level);
                events::quiz_submitted(
                    session_id,
                    c.primary,
                    c.confidence_level,
                    &result.bank_version,
                );
                Ok(result)
            }
            Err(e) => {
                self.metrics.record_rejection();
                events::submission_rejected(session_id, e.error_code(), &e.to_string());
                Err(e)
            }
        }
    }

    fn try_submit(&self, session_id: &str, answers: QuizAnswers) -> ArchetypeResult<QuizResult> {
        validate_session_id(session_id)?;
        let eval = self.scoring.evaluate(&answers)?;
        let result = QuizResult::new(
            session_id,
            answers,
            eval.scores,
            eval.classification,
            self.bank().version(),
        );
        self.storage.insert(&result)?;
        Ok(result)
    }

    pub fn result(&self, session_id: &str) -> ArchetypeResult<Option<QuizResult>> {
        self.storage.get(session_id)
    }

    /// Stored result joined with its archetype profiles.
    pub fn summary(&self, session_id: &str) -> ArchetypeResult<Option<ResultSummary>> {
        Ok(self.result(session_id)?.as_ref().map(ResultSummary::from))
    }

    /// Attach the session named by `token` to `user_id`.
    /// Re-claiming by the same user returns the stored result unchanged.
    pub fn claim(&self, token: &str, user_id: &UserId) -> ArchetypeResult<QuizResult> {
        let _span = archetype_observability::claim_span!(user_id).entered();
        let outcome = self
            .signer
            .verify(token)
            .map_err(ArchetypeError::from)
            .and_then(|session| {
                validate_user_id(user_id)?;
                self.storage.claim(&session.session_id, user_id)
            });
        match outcome {
            Ok(result) => {
                self.metrics.record_claim();
                events::result_claimed(&result.session_id, user_id.as_str(), result.archetype());
                Ok(result)
            }
            Err(e) => {
                self.metrics.record_claim_rejection();
                events::claim_rejected(e.error_code(), &e.to_string());
                Err(e)
            }
        }
    }

    pub fn results_for_user(&self, user_id: &UserId) -> ArchetypeResult<Vec<QuizResult>> {
        self.storage.results_for_user(user_id)
    }

    pub fn archetype_distribution(&self) -> ArchetypeResult<Vec<(ArchetypeId, usize)>> {
        self.storage.archetype_distribution()
    }

    pub fn result_count(&self) -> ArchetypeResult<usize> {
        self.storage.count()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
