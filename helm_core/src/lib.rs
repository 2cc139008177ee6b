//! # HELM Core
//!
//! Runtime primitives for the HELM operator-input stack.
//!
//! - **Driver station**: per-port joystick snapshots (`DriverStation`, `Port`, `GenericHid`)
//! - **Triggers**: level-triggered button conditions and edge detection
//! - **Alerts**: operator-facing warning flags
//! - **Nodes**: the `Node` lifecycle driven by the caller's control loop
//! - **Configuration**: YAML/TOML runtime configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use helm_core::{DriverStation, GenericHid, JoystickSnapshot, Port};
//!
//! let ds = DriverStation::new();
//! let port = Port::new(0).unwrap();
//!
//! let mut snapshot = JoystickSnapshot::new("InterLinkDX", 8, 27);
//! snapshot.buttons[0] = true;
//! ds.publish(port, snapshot);
//!
//! let hid = GenericHid::new(ds.clone(), port);
//! assert!(hid.button(1).get());
//! ```

pub mod alert;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod hid;
pub mod trigger;

// Re-export commonly used types for easy access
pub use alert::{Alert, AlertLevel};
pub use config::HelmConfig;
pub use self::core::{LogSummary, Node};
pub use driver::DriverStatus;
pub use error::{HelmError, HelmResult};
pub use hid::{DriverStation, GenericHid, JoystickSnapshot, Port, MAX_JOYSTICK_PORTS};
pub use trigger::{ButtonBinding, Edge, EdgeDetector, Trigger};
