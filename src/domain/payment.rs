use super::employee::Employee;
use serde::Serialize;

/// What a processor reports after paying an employee.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct PaymentNotice {
    pub employee_id: u32,
    pub employee_name: String,
    pub processor: &'static str,
    pub variant: &'static str,
    pub message: String,
}

impl PaymentNotice {
    pub fn new(employee: &Employee, processor: &'static str, variant: &'static str) -> Self {
        Self {
            employee_id: employee.id(),
            employee_name: employee.name().to_string(),
            processor,
            variant,
            message: format!(
                "{}'s Payment was processed using {} Payment Processor",
                employee.name(),
                variant
            ),
        }
    }
}
