//! Application layer: the processor registry and the payroll run that uses it.
//!
//! `ProcessorRegistry` maps identifiers to constructors and is built once,
//! either owned by the caller or through the lazily initialised global
//! instance. `PayrollRun` resolves a processor per employee and collects the
//! resulting notices.

pub mod payroll;
pub mod registry;
