//! Domain types shared by the registry, the processors and their callers.

pub mod employee;
pub mod payment;
pub mod ports;
