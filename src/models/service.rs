//! Monitored service types mirrored from the backend API.

use serde::{Deserialize, Serialize};

/// Health of a monitored service as reported by the poller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Up,
    Down,
    Degraded,
    #[default]
    Unknown,
}

impl ServiceStatus {
    /// Human label for status pills.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Up => "Up",
            Self::Down => "Down",
            Self::Degraded => "Degraded",
            Self::Unknown => "Unknown",
        }
    }
}

/// A monitored microservice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub host: String,
    pub port: u16,
    pub health_endpoint: String,
    pub poll_interval_sec: u32,
    #[serde(default)]
    pub status: ServiceStatus,
    #[serde(default)]
    pub agent_connected: bool,
}

impl Service {
    /// Display address in `host:port` form.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether control commands can be dispatched to this service.
    ///
    /// Commands are relayed through the on-host agent, so a disconnected
    /// agent means restart/stop would go nowhere.
    pub fn controllable(&self) -> bool {
        self.agent_connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Service {
        Service {
            id: "svc-1".to_string(),
            name: "payments".to_string(),
            host: "10.0.3.7".to_string(),
            port: 8443,
            health_endpoint: "/healthz".to_string(),
            poll_interval_sec: 30,
            status: ServiceStatus::Up,
            agent_connected: true,
        }
    }

    #[test]
    fn test_address() {
        assert_eq!(sample().address(), "10.0.3.7:8443");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ServiceStatus::Up.label(), "Up");
        assert_eq!(ServiceStatus::Down.label(), "Down");
        assert_eq!(ServiceStatus::Degraded.label(), "Degraded");
        assert_eq!(ServiceStatus::Unknown.label(), "Unknown");
    }

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"{
            "id": "svc-2",
            "name": "billing",
            "host": "billing.internal",
            "port": 9000,
            "health_endpoint": "/health",
            "poll_interval_sec": 15,
            "status": "degraded",
            "agent_connected": false
        }"#;
        let svc: Service = serde_json::from_str(json).unwrap();
        assert_eq!(svc.status, ServiceStatus::Degraded);
        assert!(!svc.controllable());
    }

    #[test]
    fn test_deserialize_missing_optionals() {
        // Older backends omit status/agent fields
        let json = r#"{
            "id": "svc-3",
            "name": "search",
            "host": "search.internal",
            "port": 8080,
            "health_endpoint": "/health",
            "poll_interval_sec": 60
        }"#;
        let svc: Service = serde_json::from_str(json).unwrap();
        assert_eq!(svc.status, ServiceStatus::Unknown);
        assert!(!svc.agent_connected);
    }
}
