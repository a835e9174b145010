//! Helpers for the `cheque_core_cli` binary: message output and the
//! interactive cheque wizard.

pub mod output;
pub mod wizard;
