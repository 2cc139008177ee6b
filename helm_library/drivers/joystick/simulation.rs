//! Simulation Joystick driver
//!
//! Always-available driver that publishes staged joystick state into the
//! driver station. Useful for testing and bench work without hardware:
//! attach named devices to ports, move their axes, press buttons, then
//! `refresh` once per cycle like a real backend.

use helm_core::driver::DriverStatus;
use helm_core::error::{HelmError, HelmResult};
use helm_core::hid::{DriverStation, JoystickSnapshot, Port, MAX_JOYSTICK_PORTS};

/// Simulation joystick driver configuration
#[derive(Debug, Clone)]
pub struct SimulationJoystickConfig {
    /// Axes given to a device attached with [`SimulationJoystickDriver::attach`]
    pub axis_count: usize,
    /// Buttons given to a device attached with [`SimulationJoystickDriver::attach`]
    pub button_count: usize,
}

impl Default for SimulationJoystickConfig {
    fn default() -> Self {
        Self {
            axis_count: 8,
            button_count: 32,
        }
    }
}

pub struct SimulationJoystickDriver {
    config: SimulationJoystickConfig,
    status: DriverStatus,
    staged: [JoystickSnapshot; MAX_JOYSTICK_PORTS],
}

impl SimulationJoystickDriver {
    /// Create a new simulation joystick driver with default configuration
    pub fn new() -> Self {
        Self::with_config(SimulationJoystickConfig::default())
    }

    /// Create a new simulation driver with custom configuration
    pub fn with_config(config: SimulationJoystickConfig) -> Self {
        Self {
            config,
            status: DriverStatus::Uninitialized,
            staged: Default::default(),
        }
    }

    /// Plug a device with the given name into `port`, all inputs neutral
    pub fn attach(&mut self, port: Port, name: &str) {
        self.staged[port.index()] =
            JoystickSnapshot::new(name, self.config.axis_count, self.config.button_count);
    }

    /// Unplug whatever is on `port`
    pub fn detach(&mut self, port: Port) {
        self.staged[port.index()] = JoystickSnapshot::default();
    }

    /// Change only the reported name, keeping input state
    pub fn set_name(&mut self, port: Port, name: &str) {
        self.staged[port.index()].name = name.to_string();
    }

    /// Set a raw axis value (0-based axis), clamped to [-1, 1]
    pub fn set_axis(&mut self, port: Port, axis: usize, value: f64) {
        let axes = &mut self.staged[port.index()].axes;
        if axis >= axes.len() {
            axes.resize(axis + 1, 0.0);
        }
        axes[axis] = value.clamp(-1.0, 1.0);
    }

    /// Set a raw button state (1-based button); button 0 is ignored
    pub fn set_button(&mut self, port: Port, button: usize, pressed: bool) {
        if button == 0 {
            return;
        }
        let buttons = &mut self.staged[port.index()].buttons;
        if button > buttons.len() {
            buttons.resize(button, false);
        }
        buttons[button - 1] = pressed;
    }

    /// Whether a device is staged on `port`
    pub fn is_attached(&self, port: Port) -> bool {
        !self.staged[port.index()].is_empty()
    }

    pub fn is_controller_connected(&self) -> bool {
        self.staged.iter().any(|s| !s.is_empty())
    }

    /// Initialize the driver
    pub fn init(&mut self) -> HelmResult<()> {
        self.status = DriverStatus::Ready;
        Ok(())
    }

    /// Shutdown the driver
    pub fn shutdown(&mut self) -> HelmResult<()> {
        self.status = DriverStatus::Shutdown;
        Ok(())
    }

    /// Check if driver is available
    pub fn is_available(&self) -> bool {
        true // Simulation is always available
    }

    /// Get driver status
    pub fn status(&self) -> DriverStatus {
        self.status.clone()
    }

    /// Publish the staged state of every port
    pub fn refresh(&mut self, ds: &DriverStation) -> HelmResult<()> {
        if !self.status.is_operational() {
            return Err(HelmError::driver("Driver not initialized"));
        }
        self.status = DriverStatus::Running;

        for port in Port::all() {
            ds.publish(port, self.staged[port.index()].clone());
        }
        Ok(())
    }
}

impl Default for SimulationJoystickDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn port(i: usize) -> Port {
        Port::new(i).unwrap()
    }

    #[test]
    fn test_simulation_driver_lifecycle() {
        let mut driver = SimulationJoystickDriver::new();
        let ds = DriverStation::new();

        assert_eq!(driver.status(), DriverStatus::Uninitialized);
        assert!(driver.is_available());
        assert!(driver.refresh(&ds).is_err());

        driver.init().unwrap();
        assert_eq!(driver.status(), DriverStatus::Ready);

        driver.refresh(&ds).unwrap();
        assert_eq!(driver.status(), DriverStatus::Running);

        driver.shutdown().unwrap();
        assert_eq!(driver.status(), DriverStatus::Shutdown);
        assert!(driver.refresh(&ds).is_err());
    }

    #[test]
    fn test_attach_publishes_on_refresh() {
        let mut driver = SimulationJoystickDriver::new();
        let ds = DriverStation::new();
        driver.init().unwrap();

        driver.attach(port(3), "InterLinkDX");
        assert_eq!(ds.joystick_name(port(3)), "");

        driver.refresh(&ds).unwrap();
        assert_eq!(ds.joystick_name(port(3)), "InterLinkDX");
        assert_eq!(ds.axis_count(port(3)), 8);
        assert_eq!(ds.button_count(port(3)), 32);
        assert!(driver.is_controller_connected());

        driver.detach(port(3));
        driver.refresh(&ds).unwrap();
        assert!(!ds.is_attached(port(3)));
        assert!(!driver.is_controller_connected());
    }

    #[test]
    fn test_axis_and_button_simulation() {
        let mut driver = SimulationJoystickDriver::new();
        let ds = DriverStation::new();
        driver.init().unwrap();

        driver.attach(port(0), "pad");
        driver.set_axis(port(0), 3, 0.75);
        driver.set_axis(port(0), 1, 4.0);
        driver.set_button(port(0), 14, true);
        driver.set_button(port(0), 0, true);
        driver.refresh(&ds).unwrap();

        assert_relative_eq!(ds.raw_axis(port(0), 3), 0.75);
        assert_relative_eq!(ds.raw_axis(port(0), 1), 1.0);
        assert!(ds.raw_button(port(0), 14));
        assert!(!ds.raw_button(port(0), 13));
        assert!(!ds.raw_button(port(0), 0));
    }

    #[test]
    fn test_set_name_keeps_inputs() {
        let mut driver = SimulationJoystickDriver::new();
        let ds = DriverStation::new();
        driver.init().unwrap();

        driver.attach(port(1), "old");
        driver.set_button(port(1), 2, true);
        driver.set_name(port(1), "new");
        driver.refresh(&ds).unwrap();

        assert_eq!(ds.joystick_name(port(1)), "new");
        assert!(ds.raw_button(port(1), 2));
    }
}
