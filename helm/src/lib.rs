//! # HELM - operator interfaces that follow the hardware
//!
//! HELM lets robot control code adapt at runtime to whichever controller is
//! plugged into the driver station. Robot logic talks to a single
//! [`OperatorInterface`](library::operator_interface::OperatorInterface)
//! trait; HELM watches the attached devices and swaps in the matching mapping.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use helm::prelude::*;
//!
//! let mut input = OperatorInputNode::from_config(&HelmConfig::find_and_load().unwrap_or_default())?;
//! input.init()?;
//!
//! loop {
//!     input.tick();
//!     let oi = input.operator_interface();
//!     let (x, y, rot) = (oi.translate_x(), oi.translate_y(), oi.rotate());
//!     # let _ = (x, y, rot);
//!     # break;
//! }
//! # Ok::<(), helm::HelmError>(())
//! ```

// Re-export core components
pub use helm_core::{self, *};

// Re-export standard library with alias
pub use helm_library as library;

// Re-export serde at crate root
pub use serde;

/// The HELM prelude - everything a control loop needs
pub mod prelude {
    // ============================================
    // Core
    // ============================================
    pub use helm_core::core::{LogSummary, Node};
    pub use helm_core::error::{HelmError, HelmResult};
    pub use helm_core::{Alert, AlertLevel, HelmConfig};

    // ============================================
    // Driver station
    // ============================================
    pub use helm_core::hid::{DriverStation, GenericHid, JoystickSnapshot, Port, MAX_JOYSTICK_PORTS};
    pub use helm_core::trigger::{Edge, EdgeDetector, Trigger};

    // ============================================
    // Operator interfaces & selection
    // ============================================
    pub use helm_library::operator_interface::{
        EmptyOperatorInterface, InterLinkDxOi, OperatorInterface,
    };
    pub use helm_library::selector::{ControllerModel, OiSelector};

    // ============================================
    // Drivers, nodes, messages
    // ============================================
    pub use helm_library::drivers::{JoystickDriver, SimulationJoystickDriver};
    #[cfg(feature = "gilrs")]
    pub use helm_library::drivers::GilrsJoystickDriver;
    pub use helm_library::messages::OperatorCommand;
    pub use helm_library::nodes::OperatorInputNode;
}
