use factory_employees::domain::employee::{CompensationType, Employee};
use factory_employees::domain::ports::PaymentProcessor;

pub const IDENTIFIERS: [&str; 3] = [
    "SalariedPaymentProcessor",
    "CommissionPaymentProcessor",
    "HourlyPaymentProcessor",
];

pub fn expected_message(name: &str, variant: &str) -> String {
    format!("{name}'s Payment was processed using {variant} Payment Processor")
}

/// Pays a throwaway employee and returns the single reported message.
pub fn pay_once(processor: &dyn PaymentProcessor, name: &str) -> String {
    let employee = Employee::new(1, name, CompensationType::Salaried);
    let mut notices = Vec::new();
    processor.process_payment(&employee, &mut notices);
    assert_eq!(notices.len(), 1);
    notices.remove(0).message
}
