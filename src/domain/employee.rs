use serde::{Deserialize, Serialize};
use std::fmt;

/// How an employee is paid. Each value is handled by exactly one processor variant.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CompensationType {
    Salaried,
    Commission,
    Hourly,
}

impl CompensationType {
    pub const ALL: [CompensationType; 3] = [Self::Salaried, Self::Commission, Self::Hourly];

    /// The registry key of the processor that pays this compensation type.
    pub const fn processor_identifier(&self) -> &'static str {
        match self {
            Self::Salaried => "SalariedPaymentProcessor",
            Self::Commission => "CommissionPaymentProcessor",
            Self::Hourly => "HourlyPaymentProcessor",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Salaried => "Salaried",
            Self::Commission => "Commission",
            Self::Hourly => "Hourly",
        }
    }
}

impl fmt::Display for CompensationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An employee on the payroll.
///
/// Fields are private so a record can't change after it has been built.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Employee {
    id: u32,
    name: String,
    compensation_type: CompensationType,
}

impl Employee {
    pub fn new(id: u32, name: impl Into<String>, compensation_type: CompensationType) -> Self {
        Self {
            id,
            name: name.into(),
            compensation_type,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn compensation_type(&self) -> CompensationType {
        self.compensation_type
    }
}
