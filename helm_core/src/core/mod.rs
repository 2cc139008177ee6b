pub mod node;

pub use node::{LogSummary, Node};
