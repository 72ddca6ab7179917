//! Run record and summary types.

use serde::Serialize;
use serde_json::Value;

use crate::time::parse_millis;

/// One recorded execution of a CI workflow.
///
/// Every field is optional. A field holding the wrong JSON type is treated as
/// absent rather than failing the whole document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    pub status: Option<String>,
    pub conclusion: Option<String>,
    /// Explicit run duration, as exported by the CI provider.
    pub run_duration_ms: Option<f64>,
    pub created_at: Option<String>,
    pub run_started_at: Option<String>,
    pub updated_at: Option<String>,
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(String::from)
}

impl Run {
    /// Build a run from one entry of a run list. Non-objects yield an empty run.
    pub fn from_value(value: &Value) -> Self {
        Self {
            status: str_field(value, "status"),
            conclusion: str_field(value, "conclusion"),
            run_duration_ms: value.get("run_duration_ms").and_then(Value::as_f64),
            created_at: str_field(value, "created_at"),
            run_started_at: str_field(value, "run_started_at"),
            updated_at: str_field(value, "updated_at"),
        }
    }

    /// True if the status is `completed` (case-insensitive).
    pub fn is_completed(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("completed"))
    }

    /// True if the conclusion equals `expected` (case-insensitive).
    pub fn concluded(&self, expected: &str) -> bool {
        self.conclusion
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(expected))
    }

    /// Duration of the run in milliseconds.
    ///
    /// An explicit `run_duration_ms` wins. Otherwise the duration is
    /// `updated_at - (run_started_at or created_at)`, clamped at zero, and
    /// zero whenever an endpoint is missing or unparseable.
    pub fn duration_ms(&self) -> f64 {
        if let Some(ms) = self.run_duration_ms {
            return ms;
        }

        let start = self
            .run_started_at
            .as_deref()
            .and_then(parse_millis)
            .or_else(|| self.created_at.as_deref().and_then(parse_millis));
        let end = self.updated_at.as_deref().and_then(parse_millis);

        match (start, end) {
            (Some(start), Some(end)) => end.saturating_sub(start).max(0) as f64,
            _ => 0.0,
        }
    }

    /// Sort key: `updated_at`, else `created_at`, else the epoch.
    ///
    /// The first non-empty field decides; if it does not parse the run sorts
    /// as the epoch.
    pub fn effective_millis(&self) -> i64 {
        fn non_empty(field: &Option<String>) -> Option<&str> {
            field.as_deref().filter(|s| !s.is_empty())
        }
        non_empty(&self.updated_at)
            .or_else(|| non_empty(&self.created_at))
            .and_then(parse_millis)
            .unwrap_or(0)
    }
}

/// Success/failure breakdown within the summary window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunCounts {
    pub success: u32,
    pub failure: u32,
}

/// Summary statistics over the most recent completed runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Configured window size (always [`crate::WINDOW_SIZE`]).
    pub window: usize,
    /// `success / (success + failure)`, or 0 when neither occurred.
    pub success_rate: f64,
    pub mean_duration_ms: u64,
    pub counts: RunCounts,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_reads_all_fields() {
        let run = Run::from_value(&json!({
            "status": "completed",
            "conclusion": "success",
            "run_duration_ms": 1500,
            "created_at": "2025-01-01T00:00:00Z",
            "run_started_at": "2025-01-01T00:00:01Z",
            "updated_at": "2025-01-01T00:00:05Z",
            "head_branch": "main"
        }));
        assert_eq!(run.status.as_deref(), Some("completed"));
        assert_eq!(run.conclusion.as_deref(), Some("success"));
        assert_eq!(run.run_duration_ms, Some(1500.0));
        assert_eq!(run.run_started_at.as_deref(), Some("2025-01-01T00:00:01Z"));
    }

    #[test]
    fn from_value_ignores_wrong_types() {
        let run = Run::from_value(&json!({
            "status": 3,
            "conclusion": null,
            "run_duration_ms": "1500",
            "updated_at": false
        }));
        assert_eq!(run, Run::default());
    }

    #[test]
    fn from_value_non_object_is_empty() {
        assert_eq!(Run::from_value(&json!(null)), Run::default());
        assert_eq!(Run::from_value(&json!("completed")), Run::default());
    }

    #[test]
    fn completed_is_case_insensitive() {
        let run = Run {
            status: Some("COMPLETED".into()),
            ..Default::default()
        };
        assert!(run.is_completed());
        assert!(!Run::default().is_completed());
        let queued = Run {
            status: Some("queued".into()),
            ..Default::default()
        };
        assert!(!queued.is_completed());
    }

    #[test]
    fn concluded_is_case_insensitive() {
        let run = Run {
            conclusion: Some("Failure".into()),
            ..Default::default()
        };
        assert!(run.concluded("failure"));
        assert!(!run.concluded("success"));
    }

    #[test]
    fn explicit_duration_wins() {
        let run = Run {
            run_duration_ms: Some(42.0),
            created_at: Some("2025-01-01T00:00:00Z".into()),
            updated_at: Some("2025-01-01T01:00:00Z".into()),
            ..Default::default()
        };
        assert_eq!(run.duration_ms(), 42.0);
    }

    #[test]
    fn duration_prefers_run_started_at() {
        let run = Run {
            created_at: Some("2025-01-01T00:00:00Z".into()),
            run_started_at: Some("2025-01-01T00:00:10Z".into()),
            updated_at: Some("2025-01-01T00:00:15Z".into()),
            ..Default::default()
        };
        assert_eq!(run.duration_ms(), 5000.0);
    }

    #[test]
    fn duration_falls_back_to_created_at() {
        let run = Run {
            created_at: Some("2025-01-01T00:00:00Z".into()),
            run_started_at: Some("not a date".into()),
            updated_at: Some("2025-01-01T00:00:15Z".into()),
            ..Default::default()
        };
        assert_eq!(run.duration_ms(), 15_000.0);
    }

    #[test]
    fn duration_never_negative() {
        let run = Run {
            run_started_at: Some("2025-01-01T00:00:15Z".into()),
            updated_at: Some("2025-01-01T00:00:00Z".into()),
            ..Default::default()
        };
        assert_eq!(run.duration_ms(), 0.0);
    }

    #[test]
    fn duration_zero_without_endpoints() {
        assert_eq!(Run::default().duration_ms(), 0.0);
        let no_end = Run {
            created_at: Some("2025-01-01T00:00:00Z".into()),
            ..Default::default()
        };
        assert_eq!(no_end.duration_ms(), 0.0);
    }

    #[test]
    fn effective_millis_uses_first_present_field() {
        let updated = Run {
            created_at: Some("1970-01-01T00:00:05Z".into()),
            updated_at: Some("1970-01-01T00:00:09Z".into()),
            ..Default::default()
        };
        assert_eq!(updated.effective_millis(), 9000);

        let created = Run {
            created_at: Some("1970-01-01T00:00:05Z".into()),
            ..Default::default()
        };
        assert_eq!(created.effective_millis(), 5000);

        // An unparseable updated_at does not fall through to created_at.
        let bad = Run {
            created_at: Some("1970-01-01T00:00:05Z".into()),
            updated_at: Some("soon".into()),
            ..Default::default()
        };
        assert_eq!(bad.effective_millis(), 0);
        assert_eq!(Run::default().effective_millis(), 0);

        // An empty updated_at counts as absent.
        let empty = Run {
            created_at: Some("1970-01-01T00:00:05Z".into()),
            updated_at: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(empty.effective_millis(), 5000);
    }

    #[test]
    fn summary_serializes_expected_shape() {
        let summary = Summary {
            window: 10,
            success_rate: 0.5,
            mean_duration_ms: 2000,
            counts: RunCounts {
                success: 1,
                failure: 1,
            },
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            json!({
                "window": 10,
                "success_rate": 0.5,
                "mean_duration_ms": 2000,
                "counts": {"success": 1, "failure": 1}
            })
        );
    }
}
