//! Request-scoped trace identifier.
//!
//! The identifier lives in Tokio task-local storage so domain code can read it
//! without threading it through every call. Task locals are not inherited by
//! spawned tasks; wrap spawned work in [`TraceId::scope`] to keep correlation.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static CURRENT: TraceId;
}

/// Correlation identifier attached to a single request.
///
/// # Examples
/// ```
/// use user_directory::TraceId;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let id: TraceId = "00000000-0000-0000-0000-000000000000".parse().expect("uuid");
/// let seen = TraceId::scope(id, async { TraceId::current() }).await;
/// assert_eq!(seen, Some(id));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Return the identifier in scope for the running task, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Run `fut` with `trace_id` in scope.
    pub async fn scope<Fut>(trace_id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn current_is_none_outside_scope() {
        assert!(TraceId::current().is_none());
    }

    #[tokio::test]
    async fn nested_scope_shadows_outer() {
        let outer = TraceId::generate();
        let inner = TraceId::generate();
        let observed = TraceId::scope(outer, async move {
            let nested = TraceId::scope(inner, async { TraceId::current() }).await;
            (nested, TraceId::current())
        })
        .await;
        assert_eq!(observed, (Some(inner), Some(outer)));
    }

    #[test]
    fn parses_and_displays_hyphenated_uuid() {
        let raw = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
        let id: TraceId = raw.parse().expect("valid uuid");
        assert_eq!(id.to_string(), raw);
        assert!("not-a-uuid".parse::<TraceId>().is_err());
    }
}
