use super::registry::ProcessorRegistry;
use crate::domain::employee::{CompensationType, Employee};
use crate::domain::payment::PaymentNotice;
use crate::domain::ports::PaymentProcessor;
use crate::error::Result;

/// The employees paid by the command line tool.
pub fn sample_employees() -> Vec<Employee> {
    vec![
        Employee::new(1, "Employee One", CompensationType::Commission),
        Employee::new(2, "Employee Two", CompensationType::Hourly),
        Employee::new(3, "Employee Three", CompensationType::Salaried),
        Employee::new(4, "Employee Four", CompensationType::Salaried),
    ]
}

/// Pays a list of employees through a processor registry.
///
/// Each employee is paid by the processor matching their compensation type,
/// unless an override identifier forces one processor for everybody.
#[derive(Debug)]
pub struct PayrollRun<'r> {
    registry: &'r ProcessorRegistry,
    processor_override: Option<String>,
}

impl<'r> PayrollRun<'r> {
    pub fn new(registry: &'r ProcessorRegistry) -> Self {
        Self {
            registry,
            processor_override: None,
        }
    }

    /// Pays every employee with the processor registered under `identifier`.
    pub fn with_override(mut self, identifier: impl Into<String>) -> Self {
        self.processor_override = Some(identifier.into());
        self
    }

    /// Processes the employees in order and returns one notice per payment.
    ///
    /// Stops at the first identifier the registry can't resolve.
    pub fn process(&self, employees: &[Employee]) -> Result<Vec<PaymentNotice>> {
        let mut notices = Vec::with_capacity(employees.len());
        for employee in employees {
            let identifier = self
                .processor_override
                .as_deref()
                .unwrap_or_else(|| employee.compensation_type().processor_identifier());
            let processor = self.registry.create(identifier)?;
            processor.process_payment(employee, &mut notices);
        }
        tracing::info!(payments = notices.len(), "Payroll run complete");
        Ok(notices)
    }
}
