//! Hardware drivers for HELM
//!
//! Only input devices live here: drivers sample controllers and publish
//! raw per-port state into the driver station.

pub mod factory;
pub mod joystick;

pub use joystick::{
    AxisCalibration, JoystickDriver, JoystickDriverBackend, RawCodeLayout,
    SimulationJoystickConfig, SimulationJoystickDriver,
};

#[cfg(feature = "gilrs")]
pub use joystick::{GilrsConfig, GilrsJoystickDriver};
