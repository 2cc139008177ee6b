//! Reusable HELM nodes

pub mod operator_input;

pub use operator_input::OperatorInputNode;
