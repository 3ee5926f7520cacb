use mongodb::Client;
use std::time::Instant;

/// Outcome of a MongoDB connectivity check
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// Whether the server answered the check
    pub healthy: bool,
    /// Error details when the check failed
    pub message: Option<String>,
    /// Round-trip time of the check in milliseconds
    pub response_time_ms: u64,
}

impl HealthStatus {
    /// Collapse the status into a readiness result, surfacing the failure
    /// reason. Suitable for feeding into an aggregated readiness check.
    pub fn into_result(self) -> Result<(), String> {
        if self.healthy {
            Ok(())
        } else {
            Err(self
                .message
                .unwrap_or_else(|| "no response from server".to_string()))
        }
    }
}

/// Check MongoDB connectivity with timing and error details.
///
/// Issues a lightweight server round trip; a failure carries the driver's
/// error message so readiness endpoints can report why the store is down.
///
/// # Example
/// ```ignore
/// use database::mongodb::{connect, check_health_detailed};
///
/// let client = connect("mongodb://localhost:27017").await?;
/// let status = check_health_detailed(&client).await;
/// if !status.healthy {
///     tracing::warn!("MongoDB unreachable: {:?}", status.message);
/// }
/// ```
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let start = Instant::now();

    match client.list_database_names().await {
        Ok(_) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms: start.elapsed().as_millis() as u64,
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time_ms: start.elapsed().as_millis() as u64,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthy_status_into_result() {
        let status = HealthStatus {
            healthy: true,
            message: None,
            response_time_ms: 3,
        };
        assert!(status.into_result().is_ok());
    }

    #[test]
    fn test_unhealthy_status_carries_reason() {
        let status = HealthStatus {
            healthy: false,
            message: Some("connection refused".to_string()),
            response_time_ms: 0,
        };
        assert_eq!(status.into_result().unwrap_err(), "connection refused");
    }

    #[test]
    fn test_unhealthy_status_without_message_has_fallback() {
        let status = HealthStatus {
            healthy: false,
            message: None,
            response_time_ms: 0,
        };
        assert_eq!(status.into_result().unwrap_err(), "no response from server");
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_check_health_detailed() {
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let status = check_health_detailed(&client).await;
        assert!(status.healthy);
        assert!(status.message.is_none());
    }
}
