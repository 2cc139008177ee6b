//! Joystick/Gamepad drivers
//!
//! Drivers fill the [`DriverStation`] with one snapshot per port each time
//! they are refreshed. Everything downstream (operator interfaces, the
//! selector) reads from the driver station and never talks to a backend.
//!
//! # Available Drivers
//!
//! - `SimulationJoystickDriver` - Always available, publishes staged state
//! - `GilrsJoystickDriver` - Real gamepad input via gilrs (requires `gilrs` feature)

mod simulation;

#[cfg(feature = "gilrs")]
mod gilrs_driver;

// Re-exports
pub use simulation::{SimulationJoystickConfig, SimulationJoystickDriver};

#[cfg(feature = "gilrs")]
pub use gilrs_driver::{GilrsConfig, GilrsJoystickDriver};

use std::collections::BTreeSet;

use helm_core::driver::DriverStatus;
use helm_core::error::HelmResult;
use helm_core::hid::DriverStation;

/// Axis calibration data
#[derive(Debug, Clone, Copy)]
pub struct AxisCalibration {
    pub center: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for AxisCalibration {
    fn default() -> Self {
        Self {
            center: 0.0,
            min: -1.0,
            max: 1.0,
        }
    }
}

/// Raw control codes seen on one device, numbered in ascending code order
///
/// Hardware backends report controls by platform code rather than by the
/// number printed on the controller. Sorting the codes gives the device's
/// own numbering: the lowest button code is button 1, the next is button 2,
/// and so on. Codes are remembered once seen so numbering stays put when a
/// later snapshot omits a control.
#[derive(Debug, Clone, Default)]
pub struct RawCodeLayout {
    buttons: BTreeSet<u32>,
    axes: BTreeSet<u32>,
}

impl RawCodeLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register button codes the device is known to have
    pub fn learn_buttons(&mut self, codes: impl IntoIterator<Item = u32>) {
        self.buttons.extend(codes);
    }

    /// Register axis codes the device is known to have
    pub fn learn_axes(&mut self, codes: impl IntoIterator<Item = u32>) {
        self.axes.extend(codes);
    }

    /// Button states in code order; slot `i` is raw button `i + 1`
    pub fn button_states(&mut self, states: &[(u32, bool)]) -> Vec<bool> {
        order_by_code(&mut self.buttons, states)
    }

    /// Axis values in code order; slot `i` is raw axis `i`
    pub fn axis_values(&mut self, values: &[(u32, f32)]) -> Vec<f32> {
        order_by_code(&mut self.axes, values)
    }

    /// 1-based button number of a code, if it has been seen
    pub fn button_number(&self, code: u32) -> Option<usize> {
        self.buttons.iter().position(|c| *c == code).map(|i| i + 1)
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }
}

fn order_by_code<T: Copy + Default>(known: &mut BTreeSet<u32>, entries: &[(u32, T)]) -> Vec<T> {
    known.extend(entries.iter().map(|(code, _)| *code));

    let mut ordered = vec![T::default(); known.len()];
    for (code, value) in entries {
        if let Some(slot) = known.iter().position(|c| c == code) {
            ordered[slot] = *value;
        }
    }
    ordered
}

/// Enum of all available joystick driver backends
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum JoystickDriverBackend {
    /// Simulation driver (always available)
    #[default]
    Simulation,
    /// Gilrs-based gamepad driver
    #[cfg(feature = "gilrs")]
    Gilrs,
}

/// Type-erased joystick driver for runtime backend selection
pub enum JoystickDriver {
    Simulation(SimulationJoystickDriver),
    #[cfg(feature = "gilrs")]
    Gilrs(GilrsJoystickDriver),
}

impl JoystickDriver {
    /// Create a new joystick driver with the specified backend
    pub fn new(backend: JoystickDriverBackend) -> HelmResult<Self> {
        match backend {
            JoystickDriverBackend::Simulation => {
                Ok(Self::Simulation(SimulationJoystickDriver::new()))
            }
            #[cfg(feature = "gilrs")]
            JoystickDriverBackend::Gilrs => Ok(Self::Gilrs(GilrsJoystickDriver::new()?)),
        }
    }

    /// Create a simulation driver (always available)
    pub fn simulation() -> Self {
        Self::Simulation(SimulationJoystickDriver::new())
    }

    /// Access the simulation driver to stage input, if that is the backend
    pub fn as_simulation_mut(&mut self) -> Option<&mut SimulationJoystickDriver> {
        match self {
            Self::Simulation(d) => Some(d),
            #[cfg(feature = "gilrs")]
            Self::Gilrs(_) => None,
        }
    }

    /// Check if a controller is connected
    pub fn is_controller_connected(&self) -> bool {
        match self {
            Self::Simulation(d) => d.is_controller_connected(),
            #[cfg(feature = "gilrs")]
            Self::Gilrs(d) => d.is_controller_connected(),
        }
    }

    // ========================================================================
    // Lifecycle methods
    // ========================================================================

    pub fn init(&mut self) -> HelmResult<()> {
        match self {
            Self::Simulation(d) => d.init(),
            #[cfg(feature = "gilrs")]
            Self::Gilrs(d) => d.init(),
        }
    }

    pub fn shutdown(&mut self) -> HelmResult<()> {
        match self {
            Self::Simulation(d) => d.shutdown(),
            #[cfg(feature = "gilrs")]
            Self::Gilrs(d) => d.shutdown(),
        }
    }

    pub fn is_available(&self) -> bool {
        match self {
            Self::Simulation(d) => d.is_available(),
            #[cfg(feature = "gilrs")]
            Self::Gilrs(d) => d.is_available(),
        }
    }

    pub fn status(&self) -> DriverStatus {
        match self {
            Self::Simulation(d) => d.status(),
            #[cfg(feature = "gilrs")]
            Self::Gilrs(d) => d.status(),
        }
    }

    // ========================================================================
    // Input methods
    // ========================================================================

    /// Publish the current hardware state of every port
    pub fn refresh(&mut self, ds: &DriverStation) -> HelmResult<()> {
        match self {
            Self::Simulation(d) => d.refresh(ds),
            #[cfg(feature = "gilrs")]
            Self::Gilrs(d) => d.refresh(ds),
        }
    }
}
