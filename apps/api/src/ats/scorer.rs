//! ATS scoring backends — pluggable, trait-based, with a remote-first fallback path.
//!
//! `RemoteAtsScorer` asks the analysis backend; `LocalAtsScorer` runs the
//! keyword calculator in-process. `score_with_fallback` tries the primary and
//! drops to the fallback on any error, annotating the outcome.
//!
//! `AppState` holds both as `Arc<dyn AtsScorer>`.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{info, warn};

use crate::ats::calculator::{calculate_ats, AtsScoreRecord};
use crate::backend_client::BackendClient;
use crate::errors::AppError;

/// Attached to results computed by the fallback scorer.
pub const LOCAL_FALLBACK_NOTE: &str =
    "Calculated using local algorithm. Start the analysis backend for advanced analysis.";

/// The ATS scorer trait. Implement this to swap backends without touching
/// the handler or the fallback orchestration.
#[async_trait]
pub trait AtsScorer: Send + Sync {
    async fn score(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AtsScoreRecord, AppError>;

    /// Short label surfaced to callers as `scorer_backend`.
    fn backend_name(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// LocalAtsScorer
// ────────────────────────────────────────────────────────────────────────────

/// In-process keyword scorer. Never fails.
///
/// With a seed every call reseeds, so identical inputs give identical output.
#[derive(Debug, Clone, Default)]
pub struct LocalAtsScorer {
    pub seed: Option<u64>,
}

impl LocalAtsScorer {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[async_trait]
impl AtsScorer for LocalAtsScorer {
    async fn score(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AtsScoreRecord, AppError> {
        Ok(calculate_ats(resume_text, job_description, &mut self.rng()))
    }

    fn backend_name(&self) -> &'static str {
        "local"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RemoteAtsScorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct RemoteScoreRequest<'a> {
    resume_text: &'a str,
    job_description: &'a str,
}

/// Scorer backed by the analysis backend's ATS endpoint.
pub struct RemoteAtsScorer {
    client: BackendClient,
    path: String,
}

impl RemoteAtsScorer {
    pub fn new(client: BackendClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }
}

#[async_trait]
impl AtsScorer for RemoteAtsScorer {
    async fn score(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AtsScoreRecord, AppError> {
        let request = RemoteScoreRequest {
            resume_text,
            job_description,
        };
        let record = self.client.post_json(&self.path, &request).await?;
        Ok(record)
    }

    fn backend_name(&self) -> &'static str {
        "remote"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fallback orchestration
// ────────────────────────────────────────────────────────────────────────────

/// A score record plus where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreOutcome {
    #[serde(flatten)]
    pub record: AtsScoreRecord,
    pub scorer_backend: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Scores with `primary`; on any failure scores with `fallback` and adds
/// [`LOCAL_FALLBACK_NOTE`]. Only a fallback failure is returned as an error.
pub async fn score_with_fallback(
    primary: &dyn AtsScorer,
    fallback: &dyn AtsScorer,
    resume_text: &str,
    job_description: &str,
) -> Result<ScoreOutcome, AppError> {
    match primary.score(resume_text, job_description).await {
        Ok(record) => Ok(ScoreOutcome {
            record,
            scorer_backend: primary.backend_name(),
            note: None,
        }),
        Err(e) => {
            warn!(
                "{} scorer failed, falling back to {}: {e}",
                primary.backend_name(),
                fallback.backend_name()
            );
            let record = fallback.score(resume_text, job_description).await?;
            info!(
                "ATS score computed by {} scorer: {}",
                fallback.backend_name(),
                record.overall_score
            );
            Ok(ScoreOutcome {
                record,
                scorer_backend: fallback.backend_name(),
                note: Some(LOCAL_FALLBACK_NOTE.to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::calculator::calculate_ats_with_variance;
    use crate::backend_client::BackendError;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    const RESUME: &str = "Experienced Python developer with Django and REST API skills";
    const JD: &str = "Looking for Python developer with Django experience";

    struct FailingScorer {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AtsScorer for FailingScorer {
        async fn score(&self, _resume: &str, _jd: &str) -> Result<AtsScoreRecord, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(AppError::Backend(BackendError::Api {
                status: 500,
                message: "boom".to_string(),
            }))
        }

        fn backend_name(&self) -> &'static str {
            "remote"
        }
    }

    struct FixedScorer(AtsScoreRecord);

    #[async_trait]
    impl AtsScorer for FixedScorer {
        async fn score(&self, _resume: &str, _jd: &str) -> Result<AtsScoreRecord, AppError> {
            Ok(self.0.clone())
        }

        fn backend_name(&self) -> &'static str {
            "remote"
        }
    }

    fn remote_record() -> AtsScoreRecord {
        AtsScoreRecord {
            overall_score: 71.5,
            similarity_score: 64.2,
            keyword_match: 80.0,
            matched_keywords: vec!["python".to_string()],
            missing_keywords: vec![],
            recommendations: vec![
                "🟢 Good match! Your resume aligns well with the job.".to_string(),
            ],
            job_keywords: vec!["python".to_string()],
            resume_keywords: vec!["python".to_string()],
        }
    }

    async fn spawn_backend(router: Router) -> BackendClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        BackendClient::new(format!("http://{addr}"), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_seeded_local_scorer_is_reproducible() {
        let scorer = LocalAtsScorer::new(Some(3));
        let a = scorer.score(RESUME, JD).await.unwrap();
        let b = scorer.score(RESUME, JD).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(scorer.backend_name(), "local");
    }

    #[tokio::test]
    async fn test_local_scorer_matches_calculator_classification() {
        let record = LocalAtsScorer::default().score(RESUME, JD).await.unwrap();
        let baseline = calculate_ats_with_variance(RESUME, JD, 0.0);
        assert_eq!(record.matched_keywords, baseline.matched_keywords);
        assert_eq!(record.keyword_match, baseline.keyword_match);
    }

    #[tokio::test]
    async fn test_primary_success_has_no_note() {
        let primary = FixedScorer(remote_record());
        let outcome = score_with_fallback(&primary, &LocalAtsScorer::default(), RESUME, JD)
            .await
            .unwrap();
        assert_eq!(outcome.record, remote_record());
        assert_eq!(outcome.scorer_backend, "remote");
        assert!(outcome.note.is_none());
    }

    #[tokio::test]
    async fn test_primary_failure_falls_back_with_note() {
        let primary = FailingScorer {
            calls: AtomicUsize::new(0),
        };
        let outcome = score_with_fallback(&primary, &LocalAtsScorer::new(Some(1)), RESUME, JD)
            .await
            .unwrap();
        assert_eq!(primary.calls.load(Ordering::SeqCst), 1);
        assert_eq!(outcome.scorer_backend, "local");
        assert_eq!(outcome.note.as_deref(), Some(LOCAL_FALLBACK_NOTE));
        assert_eq!(outcome.record.keyword_match, 80.0);
    }

    #[tokio::test]
    async fn test_outcome_serializes_flat() {
        let outcome = ScoreOutcome {
            record: remote_record(),
            scorer_backend: "local",
            note: Some(LOCAL_FALLBACK_NOTE.to_string()),
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["overall_score"], json!(71.5));
        assert_eq!(value["scorer_backend"], json!("local"));
        assert_eq!(value["note"], json!(LOCAL_FALLBACK_NOTE));
    }

    #[tokio::test]
    async fn test_remote_scorer_posts_snake_case_body() {
        let seen = Arc::new(std::sync::Mutex::new(None::<Value>));
        let seen_in_handler = seen.clone();
        let router = Router::new().route(
            "/api/ats-calculator",
            post(move |Json(body): Json<Value>| {
                let seen = seen_in_handler.clone();
                async move {
                    *seen.lock().unwrap() = Some(body);
                    Json(serde_json::to_value(remote_record()).unwrap())
                }
            }),
        );
        let client = spawn_backend(router).await;
        let scorer = RemoteAtsScorer::new(client, "/api/ats-calculator");

        let record = scorer.score(RESUME, JD).await.unwrap();
        assert_eq!(record, remote_record());
        assert_eq!(
            seen.lock().unwrap().clone().unwrap(),
            json!({ "resume_text": RESUME, "job_description": JD })
        );
    }

    #[tokio::test]
    async fn test_remote_error_status_triggers_fallback() {
        let router = Router::new().route(
            "/api/ats-calculator",
            post(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({ "detail": "ATS Calculator service not available" })),
                )
            }),
        );
        let client = spawn_backend(router).await;
        let remote = RemoteAtsScorer::new(client, "/api/ats-calculator");

        let outcome = score_with_fallback(&remote, &LocalAtsScorer::default(), RESUME, JD)
            .await
            .unwrap();
        assert_eq!(outcome.scorer_backend, "local");
        assert!(outcome.note.is_some());
    }

    #[tokio::test]
    async fn test_remote_error_payload_with_200_triggers_fallback() {
        let router = Router::new().route(
            "/api/ats-calculator",
            post(|| async {
                Json(json!({
                    "overall_score": 0,
                    "error": "Error calculating ATS score: boom",
                    "recommendations": ["Please check your input text and try again."]
                }))
            }),
        );
        let client = spawn_backend(router).await;
        let remote = RemoteAtsScorer::new(client, "/api/ats-calculator");

        let outcome = score_with_fallback(&remote, &LocalAtsScorer::default(), RESUME, JD)
            .await
            .unwrap();
        assert_eq!(outcome.scorer_backend, "local");
    }
}
