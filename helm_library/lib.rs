//! # HELM Standard Library
//!
//! Operator interfaces and controller selection for competition robots.
//!
//! ## Structure
//!
//! ```text
//! helm_library/
//! ── drivers/             # Joystick backends (simulation, gilrs) and factory
//! ── operator_interface/  # OperatorInterface trait and controller mappings
//! ── selector.rs          # OiSelector: hot-plug detection and selection
//! ── messages/            # OperatorCommand
//! ── nodes/               # OperatorInputNode
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use helm_library::{OiSelector, SimulationJoystickDriver};
//! use helm_core::{DriverStation, Port};
//!
//! let ds = DriverStation::new();
//! let mut driver = SimulationJoystickDriver::new();
//! driver.init().unwrap();
//! driver.attach(Port::new(1).unwrap(), "InterLinkDX");
//! driver.refresh(&ds).unwrap();
//!
//! let mut selector = OiSelector::new(ds);
//! let mut oi = selector.find_operator_interface();
//!
//! // once per control cycle
//! if selector.did_joysticks_change() {
//!     oi = selector.find_operator_interface();
//! }
//! assert_eq!(oi.port(), Port::new(1));
//! let _forward = oi.translate_y();
//! ```

pub mod drivers;
pub mod messages;
pub mod nodes;
pub mod operator_interface;
pub mod selector;

// Re-export core traits needed for message types
pub use helm_core::core::LogSummary;

pub use messages::*;

pub use drivers::{JoystickDriver, JoystickDriverBackend, SimulationJoystickDriver};
#[cfg(feature = "gilrs")]
pub use drivers::GilrsJoystickDriver;

pub use nodes::OperatorInputNode;
pub use operator_interface::{EmptyOperatorInterface, InterLinkDxOi, OperatorInterface};
pub use selector::{ControllerModel, OiSelector, NO_CONTROLLER_ALERT};

/// Prelude module for convenient imports
///
/// # Usage
/// ```rust,ignore
/// use helm_library::prelude::*;
/// ```
pub mod prelude {
    pub use crate::drivers::{JoystickDriver, SimulationJoystickDriver};
    pub use crate::messages::OperatorCommand;
    pub use crate::nodes::OperatorInputNode;
    pub use crate::operator_interface::{EmptyOperatorInterface, OperatorInterface};
    pub use crate::selector::{ControllerModel, OiSelector};
    pub use helm_core::{DriverStation, Node, Port, Trigger};
}
