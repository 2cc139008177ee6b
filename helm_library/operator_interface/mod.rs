//! Operator interfaces
//!
//! An operator interface turns one controller's physical layout into the
//! fixed set of driving actions the rest of the robot consumes. Robot code
//! only ever holds a `Box<dyn OperatorInterface>` and never learns which
//! controller is behind it.
//!
//! Every method has a neutral default: axes read 0.0 and buttons never fire.
//! [`EmptyOperatorInterface`] uses all of them, which leaves the robot inert
//! when no recognized controller is attached.

mod interlink_dx;

pub use interlink_dx::InterLinkDxOi;

use helm_core::hid::Port;
use helm_core::trigger::Trigger;

/// Semantic driving actions, independent of controller hardware
///
/// All methods are side-effect free and may be called every control cycle.
pub trait OperatorInterface: Send + Sync {
    /// Controller model name, for diagnostics
    fn name(&self) -> &str {
        "none"
    }

    /// Port the mapping reads from; `None` when no controller is bound
    fn port(&self) -> Option<Port> {
        None
    }

    fn translate_x(&self) -> f64 {
        0.0
    }

    fn translate_y(&self) -> f64 {
        0.0
    }

    fn rotate(&self) -> f64 {
        0.0
    }

    fn reset_gyro_button(&self) -> Trigger {
        Trigger::never()
    }

    fn calibrate_wheels_button(&self) -> Trigger {
        Trigger::never()
    }

    fn lock_wheels_button(&self) -> Trigger {
        Trigger::never()
    }

    fn lock_to_zero_button(&self) -> Trigger {
        Trigger::never()
    }
}

/// Operator interface used when no recognized controller is attached
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyOperatorInterface;

impl OperatorInterface for EmptyOperatorInterface {}
