//! Run document shape inspection.
//!
//! Accepted shapes, checked in this order:
//! - a bare array of runs,
//! - `{"workflow_runs": [...]}` (GitHub Actions API export),
//! - `{"runs": [...]}`.

use serde_json::Value;

use crate::error::{RunsError, RunsResult};
use crate::types::Run;

/// A run document, tagged by the shape it arrived in.
#[derive(Debug, Clone, PartialEq)]
pub enum RunDocument {
    Array(Vec<Value>),
    WorkflowRuns(Vec<Value>),
    Runs(Vec<Value>),
}

impl RunDocument {
    /// Resolve the shape of a parsed JSON document.
    pub fn inspect(value: Value) -> RunsResult<Self> {
        match value {
            Value::Array(items) => Ok(Self::Array(items)),
            Value::Object(mut map) => {
                if let Some(Value::Array(items)) = map.remove("workflow_runs") {
                    return Ok(Self::WorkflowRuns(items));
                }
                if let Some(Value::Array(items)) = map.remove("runs") {
                    return Ok(Self::Runs(items));
                }
                Err(RunsError::Shape("an object without a run array"))
            }
            other => Err(RunsError::Shape(json_kind(&other))),
        }
    }

    /// Name of the shape, for logging.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Array(_) => "array",
            Self::WorkflowRuns(_) => "workflow_runs",
            Self::Runs(_) => "runs",
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    fn items(&self) -> &[Value] {
        match self {
            Self::Array(items) | Self::WorkflowRuns(items) | Self::Runs(items) => items,
        }
    }

    /// Normalize every entry into a [`Run`].
    pub fn into_runs(self) -> Vec<Run> {
        self.items().iter().map(Run::from_value).collect()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Extract the run list from a parsed JSON document.
pub fn parse_runs(value: Value) -> RunsResult<Vec<Run>> {
    RunDocument::inspect(value).map(RunDocument::into_runs)
}
