//! Optional per-call diagnostics log.
//!
//! Callers that pass a shared log get one appended record per search call:
//! the operation name, the post-default argument set, and the produced
//! result. Tracing is a pure side effect; it never fails a call and never
//! changes what the call returns.

use serde::Serialize;
use serde_json::Value;

/// One traced invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallRecord {
    pub op: &'static str,
    /// Resolved arguments, after defaulting and region resolution.
    pub args: Value,
    /// The value the call returned.
    pub result: Value,
}

/// Owned by the caller and shared across calls; records arrive in call
/// order.
pub type CallLog = Vec<CallRecord>;

/// Append one record if a log was supplied. Anything that fails to
/// serialize degrades to `Null` rather than disturbing the call.
pub(crate) fn record<A, R>(log: Option<&mut CallLog>, op: &'static str, args: &A, result: &R)
where
    A: Serialize,
    R: Serialize,
{
    let Some(log) = log else { return };
    log.push(CallRecord {
        op,
        args: serde_json::to_value(args).unwrap_or(Value::Null),
        result: serde_json::to_value(result).unwrap_or(Value::Null),
    });
}
