use super::employee::Employee;
use super::payment::PaymentNotice;
use std::fmt;

/// A payment strategy for one compensation type.
///
/// Implementations carry no per-employee state, so one instance can pay any
/// number of employees from any thread.
pub trait PaymentProcessor: fmt::Debug + Send + Sync {
    /// The key this processor is registered under.
    fn identifier(&self) -> &'static str;

    fn process_payment(&self, employee: &Employee, sink: &mut dyn PaymentSink);
}

/// Where processors report the payments they handled.
pub trait PaymentSink {
    fn report(&mut self, notice: PaymentNotice);
}

impl PaymentSink for Vec<PaymentNotice> {
    fn report(&mut self, notice: PaymentNotice) {
        self.push(notice);
    }
}

pub type ProcessorBox = Box<dyn PaymentProcessor>;
pub type ProcessorFactory = Box<dyn Fn() -> ProcessorBox + Send + Sync>;
