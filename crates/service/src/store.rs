//! Guards applied around every store call made on behalf of a request.

use std::future::Future;
use std::time::Duration;

use tracing::warn;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Parse a path identifier; anything that is not a UUID is rejected before
/// the store is consulted.
pub fn parse_id(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ServiceError::InvalidId(raw.to_string()))
}

/// Run `fut` with an upper bound of `limit`; expiry becomes `ServiceError::Timeout`.
pub async fn bounded<T, F>(limit: Duration, op: &'static str, fut: F) -> Result<T, ServiceError>
where
    F: Future<Output = Result<T, ServiceError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(res) => res,
        Err(_) => {
            warn!(op, timeout_ms = limit.as_millis() as u64, "store_operation_timed_out");
            Err(ServiceError::Timeout(op.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_uuid_and_rejects_junk() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
        assert!(matches!(parse_id("66f1c0ffee"), Err(ServiceError::InvalidId(_))));
        assert!(matches!(parse_id(""), Err(ServiceError::InvalidId(_))));
    }

    #[tokio::test]
    async fn bounded_passes_through_fast_results() {
        let out = bounded(Duration::from_millis(200), "fast", async { Ok::<_, ServiceError>(7) }).await;
        assert_eq!(out.unwrap(), 7);
    }

    #[tokio::test]
    async fn bounded_turns_expiry_into_timeout() {
        let out = bounded(Duration::from_millis(20), "slow", async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, ServiceError>(())
        })
        .await;
        assert!(matches!(out, Err(ServiceError::Timeout(op)) if op == "slow"));
    }
}
