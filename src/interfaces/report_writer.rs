use crate::domain::payment::PaymentNotice;
use crate::error::Result;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// One message per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Writes payment notices to any `Write` sink (e.g. Stdout, a buffer).
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_notices(&mut self, notices: &[PaymentNotice], format: ReportFormat) -> Result<()> {
        for notice in notices {
            match format {
                ReportFormat::Text => writeln!(self.writer, "{}", notice.message)?,
                ReportFormat::Json => {
                    serde_json::to_writer(&mut self.writer, notice)?;
                    writeln!(self.writer)?;
                }
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Writes one identifier per line.
    pub fn write_identifiers(&mut self, identifiers: &[&str]) -> Result<()> {
        for identifier in identifiers {
            writeln!(self.writer, "{identifier}")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::{CompensationType, Employee};

    fn notices() -> Vec<PaymentNotice> {
        let one = Employee::new(1, "Employee One", CompensationType::Commission);
        let two = Employee::new(2, "Employee Two", CompensationType::Hourly);
        vec![
            PaymentNotice::new(&one, "CommissionPaymentProcessor", "Commission"),
            PaymentNotice::new(&two, "HourlyPaymentProcessor", "Hourly"),
        ]
    }

    #[test]
    fn test_write_text() {
        let mut writer = ReportWriter::new(Vec::new());
        writer
            .write_notices(&notices(), ReportFormat::Text)
            .unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            output,
            "Employee One's Payment was processed using Commission Payment Processor\n\
             Employee Two's Payment was processed using Hourly Payment Processor\n"
        );
    }

    #[test]
    fn test_write_json_lines() {
        let mut writer = ReportWriter::new(Vec::new());
        writer
            .write_notices(&notices(), ReportFormat::Json)
            .unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["processor"], "CommissionPaymentProcessor");
        assert_eq!(lines[1]["employee_id"], 2);
    }

    #[test]
    fn test_write_identifiers() {
        let mut writer = ReportWriter::new(Vec::new());
        writer
            .write_identifiers(&["CommissionPaymentProcessor", "HourlyPaymentProcessor"])
            .unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(output, "CommissionPaymentProcessor\nHourlyPaymentProcessor\n");
    }
}
