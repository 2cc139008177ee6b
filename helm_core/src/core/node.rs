use crate::error::HelmResult;

/// Trait for providing lightweight logging summaries of message types
pub trait LogSummary {
    /// Return a compact string representation suitable for logging
    fn log_summary(&self) -> String;
}

/// A unit of work driven by the caller's periodic control loop
///
/// The control loop calls `init` once, then `tick` once per cycle, then
/// `shutdown`. Nodes never block or spawn background work.
pub trait Node: Send {
    /// Get the node's name
    fn name(&self) -> &'static str;

    /// Initialize the node (called once at startup)
    fn init(&mut self) -> HelmResult<()> {
        log::debug!("{} initialized", self.name());
        Ok(())
    }

    /// Main execution step (called once per control cycle)
    fn tick(&mut self);

    /// Shutdown the node (called once at cleanup)
    fn shutdown(&mut self) -> HelmResult<()> {
        log::debug!("{} shut down", self.name());
        Ok(())
    }
}
