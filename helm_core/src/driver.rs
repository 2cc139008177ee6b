//! Driver utilities for HELM
//!
//! Input drivers are plain structs with direct methods; runtime backend
//! selection is done with an enum over the concrete drivers, not a trait
//! hierarchy. This module only holds the lifecycle status they share.

/// Driver status for lifecycle tracking
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DriverStatus {
    /// Driver has not been initialized yet
    #[default]
    Uninitialized,
    /// Driver is ready to operate
    Ready,
    /// Driver is actively publishing snapshots
    Running,
    /// Driver encountered an error
    Error(String),
    /// Driver has been shut down
    Shutdown,
}

impl DriverStatus {
    /// Whether the driver may currently be refreshed
    pub fn is_operational(&self) -> bool {
        matches!(self, Self::Ready | Self::Running)
    }
}

impl std::fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "Uninitialized"),
            Self::Ready => write!(f, "Ready"),
            Self::Running => write!(f, "Running"),
            Self::Error(msg) => write!(f, "Error: {}", msg),
            Self::Shutdown => write!(f, "Shutdown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_status_display() {
        assert_eq!(DriverStatus::Ready.to_string(), "Ready");
        assert_eq!(
            DriverStatus::Error("test".to_string()).to_string(),
            "Error: test"
        );
    }

    #[test]
    fn test_driver_status_operational() {
        assert!(!DriverStatus::default().is_operational());
        assert!(DriverStatus::Ready.is_operational());
        assert!(DriverStatus::Running.is_operational());
        assert!(!DriverStatus::Shutdown.is_operational());
    }
}
