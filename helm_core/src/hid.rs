//! Driver station snapshot
//!
//! The `DriverStation` is the single place where raw joystick state lives.
//! Input drivers publish one `JoystickSnapshot` per port every control cycle;
//! everything else only reads. Handles are cheap to clone and share one
//! underlying table.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::trigger::Trigger;

/// Number of joystick ports on the driver station
pub const MAX_JOYSTICK_PORTS: usize = 6;

/// A physical connection slot on the driver station (0..MAX_JOYSTICK_PORTS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Port(u8);

impl Port {
    /// Returns `None` for indices at or beyond `MAX_JOYSTICK_PORTS`
    pub fn new(index: usize) -> Option<Self> {
        (index < MAX_JOYSTICK_PORTS).then_some(Self(index as u8))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// All ports in ascending order
    pub fn all() -> impl Iterator<Item = Port> {
        (0..MAX_JOYSTICK_PORTS as u8).map(Port)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw state of one joystick as seen by the driver station
///
/// Axes are 0-based; buttons are stored 0-based here but read 1-based through
/// [`DriverStation::raw_button`], matching the numbering printed on controllers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JoystickSnapshot {
    pub name: String,
    pub axes: Vec<f64>,
    pub buttons: Vec<bool>,
}

impl JoystickSnapshot {
    pub fn new(name: impl Into<String>, axis_count: usize, button_count: usize) -> Self {
        Self {
            name: name.into(),
            axes: vec![0.0; axis_count],
            buttons: vec![false; button_count],
        }
    }

    /// Nothing is plugged into the port
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.axes.is_empty() && self.buttons.is_empty()
    }
}

/// Shared handle to the per-port joystick table
#[derive(Clone, Default)]
pub struct DriverStation {
    ports: Arc<RwLock<[JoystickSnapshot; MAX_JOYSTICK_PORTS]>>,
}

impl DriverStation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name reported for the port; empty when nothing is attached
    pub fn joystick_name(&self, port: Port) -> String {
        self.ports.read()[port.index()].name.clone()
    }

    /// Whether anything is attached to the port
    pub fn is_attached(&self, port: Port) -> bool {
        !self.ports.read()[port.index()].is_empty()
    }

    /// Raw axis value, 0.0 if the axis does not exist
    pub fn raw_axis(&self, port: Port, axis: usize) -> f64 {
        self.ports.read()[port.index()]
            .axes
            .get(axis)
            .copied()
            .unwrap_or(0.0)
    }

    /// Raw button state, 1-based; button 0 and unknown buttons read `false`
    pub fn raw_button(&self, port: Port, button: usize) -> bool {
        if button == 0 {
            return false;
        }
        self.ports.read()[port.index()]
            .buttons
            .get(button - 1)
            .copied()
            .unwrap_or(false)
    }

    pub fn axis_count(&self, port: Port) -> usize {
        self.ports.read()[port.index()].axes.len()
    }

    pub fn button_count(&self, port: Port) -> usize {
        self.ports.read()[port.index()].buttons.len()
    }

    /// Replace the state of one port
    pub fn publish(&self, port: Port, snapshot: JoystickSnapshot) {
        self.ports.write()[port.index()] = snapshot;
    }

    /// Mark the port as having nothing attached
    pub fn clear(&self, port: Port) {
        self.publish(port, JoystickSnapshot::default());
    }

    /// Copy of the whole table
    pub fn snapshot(&self) -> [JoystickSnapshot; MAX_JOYSTICK_PORTS] {
        self.ports.read().clone()
    }
}

impl fmt::Debug for DriverStation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ports = self.ports.read();
        f.debug_struct("DriverStation")
            .field(
                "names",
                &ports.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Reader for one joystick port, independent of controller layout
#[derive(Debug, Clone)]
pub struct GenericHid {
    ds: DriverStation,
    port: Port,
}

impl GenericHid {
    pub fn new(ds: DriverStation, port: Port) -> Self {
        Self { ds, port }
    }

    pub fn port(&self) -> Port {
        self.port
    }

    pub fn name(&self) -> String {
        self.ds.joystick_name(self.port)
    }

    pub fn raw_axis(&self, axis: usize) -> f64 {
        self.ds.raw_axis(self.port, axis)
    }

    pub fn raw_button(&self, button: usize) -> bool {
        self.ds.raw_button(self.port, button)
    }

    /// Trigger that is active while the (1-based) button is held
    pub fn button(&self, button: usize) -> Trigger {
        Trigger::button(self.clone(), button)
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
    fn test_port_range() {
        assert!(Port::new(0).is_some());
        assert!(Port::new(MAX_JOYSTICK_PORTS - 1).is_some());
        assert!(Port::new(MAX_JOYSTICK_PORTS).is_none());
        assert_eq!(Port::all().count(), MAX_JOYSTICK_PORTS);
        assert_eq!(Port::all().map(Port::index).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_driver_station() {
        let ds = DriverStation::new();
        for p in Port::all() {
            assert_eq!(ds.joystick_name(p), "");
            assert!(!ds.is_attached(p));
            assert_relative_eq!(ds.raw_axis(p, 0), 0.0);
            assert!(!ds.raw_button(p, 1));
        }
    }

    #[test]
    fn test_publish_and_read() {
        let ds = DriverStation::new();
        let mut snapshot = JoystickSnapshot::new("InterLinkDX", 4, 3);
        snapshot.axes[3] = -0.25;
        snapshot.buttons[0] = true;
        ds.publish(port(2), snapshot);

        assert_eq!(ds.joystick_name(port(2)), "InterLinkDX");
        assert!(ds.is_attached(port(2)));
        assert_relative_eq!(ds.raw_axis(port(2), 3), -0.25);
        assert_relative_eq!(ds.raw_axis(port(2), 9), 0.0);
        assert!(ds.raw_button(port(2), 1));
        assert!(!ds.raw_button(port(2), 0));
        assert!(!ds.raw_button(port(2), 4));
        assert_eq!(ds.axis_count(port(2)), 4);
        assert_eq!(ds.button_count(port(2)), 3);

        ds.clear(port(2));
        assert_eq!(ds.joystick_name(port(2)), "");
    }

    #[test]
    fn test_handles_share_state() {
        let ds = DriverStation::new();
        let hid = GenericHid::new(ds.clone(), port(0));

        let mut snapshot = JoystickSnapshot::new("pad", 2, 2);
        snapshot.axes[1] = 0.5;
        snapshot.buttons[1] = true;
        ds.publish(port(0), snapshot);

        assert_eq!(hid.name(), "pad");
        assert_relative_eq!(hid.raw_axis(1), 0.5);
        assert!(hid.raw_button(2));
        assert!(hid.button(2).get());
        assert!(!hid.button(1).get());
    }
}
