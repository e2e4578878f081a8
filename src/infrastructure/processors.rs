use crate::domain::employee::Employee;
use crate::domain::payment::PaymentNotice;
use crate::domain::ports::{PaymentProcessor, PaymentSink, ProcessorBox};

/// A processor the registry knows how to build, listed at compile time.
#[derive(Debug, Clone, Copy)]
pub struct KnownVariant {
    pub identifier: &'static str,
    pub construct: fn() -> ProcessorBox,
}

/// Every processor variant shipped with the crate.
pub const KNOWN_VARIANTS: &[KnownVariant] = &[
    KnownVariant {
        identifier: SalariedPaymentProcessor::IDENTIFIER,
        construct: construct::<SalariedPaymentProcessor>,
    },
    KnownVariant {
        identifier: CommissionPaymentProcessor::IDENTIFIER,
        construct: construct::<CommissionPaymentProcessor>,
    },
    KnownVariant {
        identifier: HourlyPaymentProcessor::IDENTIFIER,
        construct: construct::<HourlyPaymentProcessor>,
    },
];

fn construct<P: PaymentProcessor + Default + 'static>() -> ProcessorBox {
    Box::new(P::default())
}

fn report(sink: &mut dyn PaymentSink, notice: PaymentNotice) {
    tracing::debug!(
        employee = notice.employee_id,
        processor = notice.processor,
        "{}",
        notice.message
    );
    sink.report(notice);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SalariedPaymentProcessor;

impl SalariedPaymentProcessor {
    pub const IDENTIFIER: &'static str = "SalariedPaymentProcessor";
}

impl PaymentProcessor for SalariedPaymentProcessor {
    fn identifier(&self) -> &'static str {
        Self::IDENTIFIER
    }

    fn process_payment(&self, employee: &Employee, sink: &mut dyn PaymentSink) {
        report(sink, PaymentNotice::new(employee, Self::IDENTIFIER, "Salaried"));
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CommissionPaymentProcessor;

impl CommissionPaymentProcessor {
    pub const IDENTIFIER: &'static str = "CommissionPaymentProcessor";
}

impl PaymentProcessor for CommissionPaymentProcessor {
    fn identifier(&self) -> &'static str {
        Self::IDENTIFIER
    }

    fn process_payment(&self, employee: &Employee, sink: &mut dyn PaymentSink) {
        report(sink, PaymentNotice::new(employee, Self::IDENTIFIER, "Commission"));
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HourlyPaymentProcessor;

impl HourlyPaymentProcessor {
    pub const IDENTIFIER: &'static str = "HourlyPaymentProcessor";
}

impl PaymentProcessor for HourlyPaymentProcessor {
    fn identifier(&self) -> &'static str {
        Self::IDENTIFIER
    }

    fn process_payment(&self, employee: &Employee, sink: &mut dyn PaymentSink) {
        report(sink, PaymentNotice::new(employee, Self::IDENTIFIER, "Hourly"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::CompensationType;

    #[test]
    fn test_each_variant_reports_its_own_message() {
        let employee = Employee::new(1, "Employee One", CompensationType::Salaried);
        let processors: [ProcessorBox; 3] = [
            Box::new(SalariedPaymentProcessor),
            Box::new(CommissionPaymentProcessor),
            Box::new(HourlyPaymentProcessor),
        ];

        let mut notices = Vec::new();
        for processor in &processors {
            processor.process_payment(&employee, &mut notices);
        }

        let messages: Vec<&str> = notices.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Employee One's Payment was processed using Salaried Payment Processor",
                "Employee One's Payment was processed using Commission Payment Processor",
                "Employee One's Payment was processed using Hourly Payment Processor",
            ]
        );
    }

    #[test]
    fn test_known_variants_match_compensation_types() {
        assert_eq!(KNOWN_VARIANTS.len(), CompensationType::ALL.len());
        for compensation_type in CompensationType::ALL {
            let variant = KNOWN_VARIANTS
                .iter()
                .find(|v| v.identifier == compensation_type.processor_identifier())
                .expect("every compensation type has a variant");
            assert_eq!((variant.construct)().identifier(), variant.identifier);
        }
    }

    #[test]
    fn test_processor_is_reusable() {
        let processor = HourlyPaymentProcessor;
        let first = Employee::new(1, "First", CompensationType::Hourly);
        let second = Employee::new(2, "Second", CompensationType::Hourly);

        let mut notices = Vec::new();
        processor.process_payment(&first, &mut notices);
        processor.process_payment(&second, &mut notices);

        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].employee_name, "First");
        assert_eq!(notices[1].employee_name, "Second");
    }
}
