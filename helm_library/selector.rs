//! Operator interface selection
//!
//! `OiSelector` watches the names reported on every driver station port and
//! picks the operator interface matching the attached controller. Selection
//! is cheap and recomputed from live hardware state whenever the caller sees
//! `did_joysticks_change()` return true; nothing is remembered across
//! restarts.
//!
//! Controller identification is a case-insensitive substring match on the
//! reported device name. Firmware revisions report slightly different names,
//! so the fuzzy match is intentional: `"interlinked"` matches too.

use helm_core::alert::{Alert, AlertLevel};
use helm_core::hid::{DriverStation, Port, MAX_JOYSTICK_PORTS};

use crate::operator_interface::{EmptyOperatorInterface, InterLinkDxOi, OperatorInterface};

/// Text of the alert raised while no controller is recognized
pub const NO_CONTROLLER_ALERT: &str = "No operator controller(s) connected.";

/// Controller models the selector knows how to map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerModel {
    InterLinkDx,
}

impl ControllerModel {
    /// Every supported model, in matching priority order
    pub const ALL: [ControllerModel; 1] = [ControllerModel::InterLinkDx];

    /// Lowercase substrings that identify the model in a device name
    pub fn identifiers(self) -> &'static [&'static str] {
        match self {
            // "interlink" alone already covers "interlinkdx"
            Self::InterLinkDx => &["interlinkdx", "interlink"],
        }
    }

    pub fn matches(self, device_name: &str) -> bool {
        let name = device_name.to_lowercase();
        self.identifiers().iter().any(|id| name.contains(id))
    }

    /// Model whose identifier appears in the device name
    pub fn identify(device_name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|model| model.matches(device_name))
    }

    /// Build the operator interface for this model bound to `port`
    pub fn build(self, ds: DriverStation, port: Port) -> Box<dyn OperatorInterface> {
        match self {
            Self::InterLinkDx => Box::new(InterLinkDxOi::new(ds, port)),
        }
    }
}

pub struct OiSelector {
    ds: DriverStation,
    last_joystick_names: [Option<String>; MAX_JOYSTICK_PORTS],
    no_controller_alert: Alert,
    log_port_scan: bool,
}

impl OiSelector {
    pub fn new(ds: DriverStation) -> Self {
        Self {
            ds,
            last_joystick_names: Default::default(),
            no_controller_alert: Alert::new(NO_CONTROLLER_ALERT, AlertLevel::Warning),
            log_port_scan: true,
        }
    }

    /// Enable or disable the per-port log line emitted on every scan
    pub fn with_port_scan_logging(mut self, enabled: bool) -> Self {
        self.log_port_scan = enabled;
        self
    }

    pub fn logs_port_scan(&self) -> bool {
        self.log_port_scan
    }

    /// Whether any port reports a different name than on the previous call
    ///
    /// The table starts out unset, so the first call always returns true.
    pub fn did_joysticks_change(&mut self) -> bool {
        let mut changed = false;
        for port in Port::all() {
            let name = self.ds.joystick_name(port);
            let last = &mut self.last_joystick_names[port.index()];
            if last.as_deref() != Some(name.as_str()) {
                *last = Some(name);
                changed = true;
            }
        }
        changed
    }

    /// Operator interface for the lowest-numbered port with a recognized controller
    ///
    /// Falls back to [`EmptyOperatorInterface`] and raises the
    /// no-controller alert when nothing is recognized.
    pub fn find_operator_interface(&mut self) -> Box<dyn OperatorInterface> {
        let mut selected: Option<(Port, ControllerModel)> = None;

        for port in Port::all() {
            let name = self.ds.joystick_name(port);
            if self.log_port_scan {
                log::info!("Joystick {} name: [{}]", port, name);
            }
            if selected.is_none() {
                selected = ControllerModel::identify(&name).map(|model| (port, model));
            }
        }

        match selected {
            Some((port, model)) => {
                self.no_controller_alert.set(false);
                model.build(self.ds.clone(), port)
            }
            None => {
                self.no_controller_alert.set(true);
                Box::new(EmptyOperatorInterface)
            }
        }
    }

    /// Names seen by the last `did_joysticks_change` call; `None` before the first
    pub fn last_joystick_names(&self) -> &[Option<String>] {
        &self.last_joystick_names
    }

    pub fn no_controller_alert(&self) -> &Alert {
        &self.no_controller_alert
    }

    pub fn is_controller_missing(&self) -> bool {
        self.no_controller_alert.is_active()
    }

    pub fn driver_station(&self) -> &DriverStation {
        &self.ds
    }
}
