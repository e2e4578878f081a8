//! Concrete payment processors.

pub mod processors;
