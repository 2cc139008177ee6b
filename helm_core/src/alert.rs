//! Operator-facing alerts
//!
//! An `Alert` is a named flag shown to the drive team. Transitions are
//! reported through the `log` facade so whatever dashboard or console the
//! embedding program installs picks them up.

use std::fmt;

/// Severity of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Error,
    Warning,
    Info,
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "Error"),
            Self::Warning => write!(f, "Warning"),
            Self::Info => write!(f, "Info"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Alert {
    text: String,
    level: AlertLevel,
    active: bool,
}

impl Alert {
    /// Create an inactive alert
    pub fn new(text: impl Into<String>, level: AlertLevel) -> Self {
        Self {
            text: text.into(),
            level,
            active: false,
        }
    }

    /// Raise or clear the alert; only transitions are logged
    pub fn set(&mut self, active: bool) {
        if active == self.active {
            return;
        }
        self.active = active;

        if active {
            match self.level {
                AlertLevel::Error => log::error!("[{}] {}", self.level, self.text),
                AlertLevel::Warning => log::warn!("[{}] {}", self.level, self.text),
                AlertLevel::Info => log::info!("[{}] {}", self.level, self.text),
            }
        } else {
            log::info!("[{}] cleared: {}", self.level, self.text);
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn level(&self) -> AlertLevel {
        self.level
    }
}
