use helm_core::core::LogSummary;
use serde::{Deserialize, Serialize};

use crate::operator_interface::OperatorInterface;

/// One control-cycle sample of the active operator interface
///
/// This is what downstream command logic consumes: driver intent on the
/// three axes plus the current level of each semantic button.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OperatorCommand {
    pub stamp_nanos: u64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate: f64,
    pub reset_gyro: bool,
    pub calibrate_wheels: bool,
    pub lock_wheels: bool,
    pub lock_to_zero: bool,
}

impl OperatorCommand {
    /// Sample every action of `oi` with the current timestamp
    pub fn sample(oi: &dyn OperatorInterface) -> Self {
        Self {
            stamp_nanos: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64,
            translate_x: oi.translate_x(),
            translate_y: oi.translate_y(),
            rotate: oi.rotate(),
            reset_gyro: oi.reset_gyro_button().get(),
            calibrate_wheels: oi.calibrate_wheels_button().get(),
            lock_wheels: oi.lock_wheels_button().get(),
            lock_to_zero: oi.lock_to_zero_button().get(),
        }
    }

    /// True when no axis is deflected and no button is held
    pub fn is_neutral(&self) -> bool {
        self.translate_x == 0.0
            && self.translate_y == 0.0
            && self.rotate == 0.0
            && !(self.reset_gyro || self.calibrate_wheels || self.lock_wheels || self.lock_to_zero)
    }
}

impl LogSummary for OperatorCommand {
    fn log_summary(&self) -> String {
        format!(
            "OperatorCommand(x={:.2}, y={:.2}, rot={:.2}, gyro={}, cal={}, lock={}, zero={})",
            self.translate_x,
            self.translate_y,
            self.rotate,
            self.reset_gyro,
            self.calibrate_wheels,
            self.lock_wheels,
            self.lock_to_zero
        )
    }
}
