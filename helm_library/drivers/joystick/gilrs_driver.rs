//! Gilrs-based Joystick driver
//!
//! Real gamepad input using the gilrs library.
//! Requires the `gilrs` feature to be enabled.

use std::collections::HashMap;
use std::sync::Mutex;

use gilrs::{Axis, Button, Gilrs};

use helm_core::driver::DriverStatus;
use helm_core::error::{HelmError, HelmResult};
use helm_core::hid::{DriverStation, JoystickSnapshot, Port};

use super::{AxisCalibration, RawCodeLayout};

/// Named axes whose raw codes are registered as soon as a gamepad is seen,
/// so numbering does not shift when a stick is first moved
const NAMED_AXES: [Axis; 8] = [
    Axis::LeftStickX,
    Axis::LeftStickY,
    Axis::LeftZ,
    Axis::RightStickX,
    Axis::RightStickY,
    Axis::RightZ,
    Axis::DPadX,
    Axis::DPadY,
];

const NAMED_BUTTONS: [Button; 17] = [
    Button::South,
    Button::East,
    Button::North,
    Button::West,
    Button::LeftTrigger,
    Button::LeftTrigger2,
    Button::RightTrigger,
    Button::RightTrigger2,
    Button::Select,
    Button::Start,
    Button::Mode,
    Button::LeftThumb,
    Button::RightThumb,
    Button::DPadUp,
    Button::DPadDown,
    Button::DPadLeft,
    Button::DPadRight,
];

/// Raw state of one gamepad, read while the gilrs lock is held
struct RawGamepad {
    id: usize,
    name: String,
    button_codes: Vec<u32>,
    axis_codes: Vec<u32>,
    buttons: Vec<(u32, bool)>,
    axes: Vec<(u32, f32)>,
}

/// Gilrs driver configuration
#[derive(Debug, Clone, Default)]
pub struct GilrsConfig {
    /// Deadzone for all axes (0.0 to 1.0)
    pub deadzone: f32,
    /// Per-axis deadzones, overriding `deadzone`
    pub axis_deadzones: HashMap<usize, f32>,
    /// Axis calibrations
    pub axis_calibrations: HashMap<usize, AxisCalibration>,
}

/// Gilrs-based Joystick driver
///
/// Connected gamepads are assigned to driver station ports in gamepad id
/// order; anything beyond the sixth is ignored.
///
/// Buttons and axes are published by raw code, not through the SDL mapping,
/// so button N is the device's own Nth button (see [`RawCodeLayout`]).
/// The Gilrs instance is wrapped in a Mutex to satisfy Sync requirements.
pub struct GilrsJoystickDriver {
    config: GilrsConfig,
    status: DriverStatus,
    gilrs: Mutex<Gilrs>,
    layouts: HashMap<usize, RawCodeLayout>,
}

impl GilrsJoystickDriver {
    /// Create a new gilrs joystick driver
    pub fn new() -> HelmResult<Self> {
        Self::with_config(GilrsConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: GilrsConfig) -> HelmResult<Self> {
        let gilrs = Gilrs::new()
            .map_err(|e| HelmError::driver(format!("Failed to initialize gilrs: {}", e)))?;

        Ok(Self {
            config,
            status: DriverStatus::Uninitialized,
            gilrs: Mutex::new(gilrs),
            layouts: HashMap::new(),
        })
    }

    /// Check if a controller is connected
    pub fn is_controller_connected(&self) -> bool {
        if let Ok(gilrs) = self.gilrs.lock() {
            gilrs.gamepads().any(|(_, gp)| gp.is_connected())
        } else {
            false
        }
    }

    /// Get deadzone for axis
    fn get_axis_deadzone(&self, axis_id: usize) -> f32 {
        self.config
            .axis_deadzones
            .get(&axis_id)
            .copied()
            .unwrap_or(self.config.deadzone)
    }

    /// Apply deadzone to an axis value
    fn apply_deadzone(&self, value: f32, axis_id: usize) -> f32 {
        let deadzone = self.get_axis_deadzone(axis_id);

        if value.abs() < deadzone {
            0.0
        } else {
            let sign = value.signum();
            let abs_value = value.abs();
            sign * (abs_value - deadzone) / (1.0 - deadzone)
        }
    }

    /// Apply calibration to an axis value
    fn apply_calibration(&self, value: f32, axis_id: usize) -> f32 {
        if let Some(cal) = self.config.axis_calibrations.get(&axis_id) {
            let centered = value - cal.center;

            if centered < 0.0 {
                (centered / (cal.center - cal.min)).clamp(-1.0, 0.0)
            } else {
                (centered / (cal.max - cal.center)).clamp(0.0, 1.0)
            }
        } else {
            value
        }
    }

    /// Process axis value through calibration and deadzone
    fn process_axis_value(&self, value: f32, axis_id: usize) -> f64 {
        let calibrated = self.apply_calibration(value, axis_id);
        self.apply_deadzone(calibrated, axis_id) as f64
    }
}

// ========================================================================
// Lifecycle methods
// ========================================================================

impl GilrsJoystickDriver {
    pub fn init(&mut self) -> HelmResult<()> {
        self.status = DriverStatus::Ready;
        Ok(())
    }

    pub fn shutdown(&mut self) -> HelmResult<()> {
        self.status = DriverStatus::Shutdown;
        Ok(())
    }

    pub fn is_available(&self) -> bool {
        true // gilrs initializes successfully if we get here
    }

    pub fn status(&self) -> DriverStatus {
        self.status.clone()
    }

    /// Drain pending gilrs events and publish every port
    pub fn refresh(&mut self, ds: &DriverStation) -> HelmResult<()> {
        if !self.status.is_operational() {
            return Err(HelmError::driver("Driver not initialized"));
        }
        self.status = DriverStatus::Running;

        let mut gilrs = self
            .gilrs
            .lock()
            .map_err(|_| HelmError::Internal("Lock poisoned".to_string()))?;

        // Gamepad state is only updated while events are consumed
        while gilrs.next_event().is_some() {}

        let mut connected: Vec<RawGamepad> = gilrs
            .gamepads()
            .filter(|(_, gp)| gp.is_connected())
            .map(|(id, gp)| RawGamepad {
                id: usize::from(id),
                name: gp.name().to_string(),
                button_codes: NAMED_BUTTONS
                    .iter()
                    .filter_map(|b| gp.button_code(*b))
                    .map(|c| c.into_u32())
                    .collect(),
                axis_codes: NAMED_AXES
                    .iter()
                    .filter_map(|a| gp.axis_code(*a))
                    .map(|c| c.into_u32())
                    .collect(),
                buttons: gp
                    .state()
                    .buttons()
                    .map(|(code, data)| (code.into_u32(), data.is_pressed()))
                    .collect(),
                axes: gp
                    .state()
                    .axes()
                    .map(|(code, data)| (code.into_u32(), data.value()))
                    .collect(),
            })
            .collect();
        drop(gilrs);

        connected.sort_by_key(|raw| raw.id);

        let mut snapshots = Vec::with_capacity(connected.len());
        for raw in connected {
            let layout = self.layouts.entry(raw.id).or_default();
            layout.learn_buttons(raw.button_codes);
            layout.learn_axes(raw.axis_codes);
            let buttons = layout.button_states(&raw.buttons);
            let axes = layout.axis_values(&raw.axes);

            snapshots.push(JoystickSnapshot {
                name: raw.name,
                axes: axes
                    .into_iter()
                    .enumerate()
                    .map(|(axis_id, value)| self.process_axis_value(value, axis_id))
                    .collect(),
                buttons,
            });
        }

        let mut snapshots = snapshots.into_iter();
        for port in Port::all() {
            match snapshots.next() {
                Some(snapshot) => ds.publish(port, snapshot),
                None => ds.clear(port),
            }
        }

        Ok(())
    }
}
