// Messages published by HELM nodes
//
// - Operator: sampled driving actions (OperatorCommand)

pub mod operator_command;

pub use operator_command::OperatorCommand;
