//! InterLink DX operator interface
//!
//! The InterLink DX is an RC-style flight controller that shows up as a
//! generic HID. Physical layout used here:
//!
//! | action           | input    | note                               |
//! |------------------|----------|------------------------------------|
//! | translate X      | axis 1   |                                    |
//! | translate Y      | axis 0   | inverted                           |
//! | rotate           | axis 3   | inverted                           |
//! | reset gyro       | button 14| RESET on the back of the controller|
//! | calibrate wheels | button 15| CANCEL (second reset button)       |
//! | lock wheels      | button 12| H, bottom right of the top face    |
//! | lock to zero     | button 1 | A/V, upper left of the top side    |

use helm_core::hid::{DriverStation, GenericHid, Port};
use helm_core::trigger::Trigger;

use super::OperatorInterface;

/// Slots in the button table; slot 0 is reserved so slot `i` is button `i`
const BUTTON_SLOTS: usize = 28;

const TRANSLATE_X_AXIS: usize = 1;
const TRANSLATE_Y_AXIS: usize = 0;
const ROTATE_AXIS: usize = 3;

const RESET_GYRO_BUTTON: usize = 14;
const CALIBRATE_WHEELS_BUTTON: usize = 15;
const LOCK_WHEELS_BUTTON: usize = 12;
const LOCK_TO_ZERO_BUTTON: usize = 1;

pub struct InterLinkDxOi {
    hid: GenericHid,
    buttons: Vec<Option<Trigger>>,
}

impl InterLinkDxOi {
    pub fn new(ds: DriverStation, port: Port) -> Self {
        let hid = GenericHid::new(ds, port);

        let buttons = std::iter::once(None)
            .chain((1..BUTTON_SLOTS).map(|i| Some(hid.button(i))))
            .collect();

        Self { hid, buttons }
    }

    /// Size of the button table, including the reserved slot 0
    pub fn button_slots(&self) -> usize {
        self.buttons.len()
    }

    /// Trigger for a physical button number; `None` for 0 or past the table
    pub fn button(&self, button: usize) -> Option<&Trigger> {
        self.buttons.get(button).and_then(Option::as_ref)
    }

    fn bound(&self, button: usize) -> Trigger {
        self.buttons[button]
            .clone()
            .unwrap_or_else(Trigger::never)
    }
}

impl OperatorInterface for InterLinkDxOi {
    fn name(&self) -> &str {
        "InterLinkDX"
    }

    fn port(&self) -> Option<Port> {
        Some(self.hid.port())
    }

    fn translate_x(&self) -> f64 {
        self.hid.raw_axis(TRANSLATE_X_AXIS)
    }

    fn translate_y(&self) -> f64 {
        -self.hid.raw_axis(TRANSLATE_Y_AXIS)
    }

    fn rotate(&self) -> f64 {
        -self.hid.raw_axis(ROTATE_AXIS)
    }

    fn reset_gyro_button(&self) -> Trigger {
        self.bound(RESET_GYRO_BUTTON)
    }

    fn calibrate_wheels_button(&self) -> Trigger {
        self.bound(CALIBRATE_WHEELS_BUTTON)
    }

    fn lock_wheels_button(&self) -> Trigger {
        self.bound(LOCK_WHEELS_BUTTON)
    }

    fn lock_to_zero_button(&self) -> Trigger {
        self.bound(LOCK_TO_ZERO_BUTTON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use helm_core::hid::JoystickSnapshot;

    fn port(i: usize) -> Port {
        Port::new(i).unwrap()
    }

    #[test]
    fn test_button_table_layout() {
        let oi = InterLinkDxOi::new(DriverStation::new(), port(0));

        assert_eq!(oi.button_slots(), 28);
        assert!(oi.button(0).is_none());
        assert!(oi.button(28).is_none());
        for i in 1..28 {
            let binding = oi.button(i).unwrap().binding().unwrap();
            assert_eq!(binding.button, i);
            assert_eq!(binding.port, port(0));
        }
    }

    #[test]
    fn test_named_buttons_any_port() {
        for p in Port::all() {
            let oi = InterLinkDxOi::new(DriverStation::new(), p);
            let button_of = |t: Trigger| t.binding().unwrap().button;

            assert_eq!(oi.port(), Some(p));
            assert_eq!(button_of(oi.reset_gyro_button()), 14);
            assert_eq!(button_of(oi.calibrate_wheels_button()), 15);
            assert_eq!(button_of(oi.lock_wheels_button()), 12);
            assert_eq!(button_of(oi.lock_to_zero_button()), 1);
            assert_eq!(oi.reset_gyro_button().binding().unwrap().port, p);
        }
    }

    #[test]
    fn test_axis_sign_convention() {
        let ds = DriverStation::new();
        let mut snapshot = JoystickSnapshot::new("InterLinkDX", 8, 27);
        snapshot.axes[0] = 0.4;
        snapshot.axes[1] = 0.6;
        snapshot.axes[3] = -0.3;
        ds.publish(port(2), snapshot);

        let oi = InterLinkDxOi::new(ds, port(2));
        assert_relative_eq!(oi.translate_x(), 0.6);
        assert_relative_eq!(oi.translate_y(), -0.4);
        assert_relative_eq!(oi.rotate(), 0.3);
    }

    #[test]
    fn test_triggers_follow_hardware() {
        let ds = DriverStation::new();
        let oi = InterLinkDxOi::new(ds.clone(), port(1));
        let reset_gyro = oi.reset_gyro_button();
        assert!(!reset_gyro.get());

        let mut snapshot = JoystickSnapshot::new("InterLinkDX", 8, 27);
        snapshot.buttons[13] = true; // button 14
        ds.publish(port(1), snapshot);

        assert!(reset_gyro.get());
        assert!(!oi.calibrate_wheels_button().get());
        assert!(!oi.lock_to_zero_button().get());
    }

    #[test]
    fn test_reads_only_its_own_port() {
        let ds = DriverStation::new();
        let mut snapshot = JoystickSnapshot::new("InterLinkDX", 8, 27);
        snapshot.axes[1] = 1.0;
        snapshot.buttons[0] = true;
        ds.publish(port(0), snapshot);

        let oi = InterLinkDxOi::new(ds, port(3));
        assert_relative_eq!(oi.translate_x(), 0.0);
        assert!(!oi.lock_to_zero_button().get());
    }
}
