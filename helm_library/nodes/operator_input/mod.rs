//! Operator Input Node - keeps the active operator interface current
//!
//! Each tick the node refreshes the joystick driver, re-runs controller
//! selection when the attached devices changed, and samples the active
//! operator interface into an `OperatorCommand`.

use helm_core::config::HelmConfig;
use helm_core::core::{LogSummary, Node};
use helm_core::error::HelmResult;
use helm_core::hid::DriverStation;

use crate::drivers::factory::create_joystick_driver;
use crate::drivers::joystick::JoystickDriver;
use crate::messages::OperatorCommand;
use crate::operator_interface::{EmptyOperatorInterface, OperatorInterface};
use crate::selector::OiSelector;

/// Operator Input Node
///
/// # Example
///
/// ```rust,ignore
/// use helm_library::nodes::OperatorInputNode;
///
/// let mut node = OperatorInputNode::from_config(&HelmConfig::find_and_load()?)?;
/// node.init()?;
/// loop {
///     node.tick();
///     let cmd = node.latest();
///     // hand cmd / node.operator_interface() to robot command logic
/// }
/// ```
pub struct OperatorInputNode {
    driver: JoystickDriver,
    ds: DriverStation,
    selector: OiSelector,
    oi: Box<dyn OperatorInterface>,
    latest: OperatorCommand,
    tick_count: u64,
    selection_count: u64,
}

impl OperatorInputNode {
    /// Create a node in simulation mode
    pub fn new() -> Self {
        Self::with_driver(JoystickDriver::simulation())
    }

    /// Create a node reading from the given driver
    pub fn with_driver(driver: JoystickDriver) -> Self {
        Self::build(driver, true)
    }

    /// Create a node with the driver and scan logging from configuration
    pub fn from_config(config: &HelmConfig) -> HelmResult<Self> {
        let driver = create_joystick_driver(config)?;
        Ok(Self::build(driver, config.log_port_scan))
    }

    fn build(driver: JoystickDriver, log_port_scan: bool) -> Self {
        let ds = DriverStation::new();
        Self {
            driver,
            selector: OiSelector::new(ds.clone()).with_port_scan_logging(log_port_scan),
            ds,
            oi: Box::new(EmptyOperatorInterface),
            latest: OperatorCommand::default(),
            tick_count: 0,
            selection_count: 0,
        }
    }

    /// The operator interface currently in use
    pub fn operator_interface(&self) -> &dyn OperatorInterface {
        self.oi.as_ref()
    }

    /// Command sampled on the last tick
    pub fn latest(&self) -> OperatorCommand {
        self.latest
    }

    pub fn selector(&self) -> &OiSelector {
        &self.selector
    }

    pub fn driver_mut(&mut self) -> &mut JoystickDriver {
        &mut self.driver
    }

    pub fn driver_station(&self) -> &DriverStation {
        &self.ds
    }

    /// Number of times the operator interface was (re)selected
    pub fn selection_count(&self) -> u64 {
        self.selection_count
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    fn update_operator_interface(&mut self) {
        self.oi = self.selector.find_operator_interface();
        self.selection_count += 1;

        match self.oi.port() {
            Some(port) => log::info!("Using {} operator interface on port {}", self.oi.name(), port),
            None => log::info!("No operator interface selected"),
        }
    }
}

impl Default for OperatorInputNode {
    fn default() -> Self {
        Self::new()
    }
}

impl Node for OperatorInputNode {
    fn name(&self) -> &'static str {
        "OperatorInputNode"
    }

    fn init(&mut self) -> HelmResult<()> {
        self.driver.init()?;
        log::debug!("OperatorInputNode initialized ({})", self.driver.status());
        Ok(())
    }

    fn tick(&mut self) {
        self.tick_count += 1;

        if let Err(e) = self.driver.refresh(&self.ds) {
            log::warn!("Joystick refresh failed: {}", e);
        }

        if self.selector.did_joysticks_change() {
            self.update_operator_interface();
        }

        self.latest = OperatorCommand::sample(self.oi.as_ref());
        log::trace!("{}", self.latest.log_summary());
    }

    fn shutdown(&mut self) -> HelmResult<()> {
        self.oi = Box::new(EmptyOperatorInterface);
        self.driver.shutdown()?;
        log::debug!(
            "OperatorInputNode shut down after {} ticks, {} selections",
            self.tick_count,
            self.selection_count
        );
        Ok(())
    }
}
