//! Application layer: turns user requests into draws and hands the results
//! to presenters through the ports in [`ports`].

pub mod cli;
pub mod ports;
