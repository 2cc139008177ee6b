//! Driver Factory - Create drivers from configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use helm_core::HelmConfig;
//! use helm_library::drivers::factory::create_joystick_driver;
//!
//! let config = HelmConfig::find_and_load().unwrap_or_default();
//! let driver = create_joystick_driver(&config)?;
//! ```

use helm_core::config::HelmConfig;
use helm_core::error::{HelmError, HelmResult};

use super::joystick::{JoystickDriver, JoystickDriverBackend};

/// Create a joystick driver from configuration
///
/// # Supported Backends
///
/// - `simulation` / `sim` - Always available, publishes staged state
/// - `gilrs` - Real gamepads through gilrs (requires `gilrs` feature)
pub fn create_joystick_driver(config: &HelmConfig) -> HelmResult<JoystickDriver> {
    config.validate()?;

    let backend = match config.backend.as_str() {
        "simulation" | "sim" => JoystickDriverBackend::Simulation,

        #[cfg(feature = "gilrs")]
        "gilrs" | "gamepad" => {
            let gilrs_config = super::joystick::GilrsConfig {
                deadzone: config.deadzone,
                ..Default::default()
            };
            return Ok(JoystickDriver::Gilrs(
                super::joystick::GilrsJoystickDriver::with_config(gilrs_config)?,
            ));
        }

        #[cfg(not(feature = "gilrs"))]
        "gilrs" | "gamepad" => {
            return Err(HelmError::feature_not_available(
                "gilrs joystick backend requires the 'gilrs' feature",
            ));
        }

        other => {
            return Err(HelmError::config(format!(
                "Unknown joystick backend '{}'. Available: simulation, gilrs",
                other
            )));
        }
    };

    JoystickDriver::new(backend)
}
