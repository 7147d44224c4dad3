use crate::app::models::{Outcome, ScanReport};

pub struct OutputGenerator;

impl OutputGenerator {
    pub fn generate_token(outcome: Outcome) -> &'static str {
        outcome.token()
    }

    /// Human-readable summary of a scan; line numbers are 1-based.
    pub fn generate_explanation(report: &ScanReport, targets: &[String]) -> String {
        let mut output = String::new();

        match report.block {
            Some(block) => output.push_str(&format!(
                "http block: lines {}-{}\n",
                block.start_line_index + 1,
                block.end_line_index + 1
            )),
            None => output.push_str("http block: not found\n"),
        }

        output.push_str(&format!("targets: {}\n", targets.join(", ")));

        match &report.matched {
            Some(m) => output.push_str(&format!("match: line {}: {}", m.line_index + 1, m.path)),
            None => output.push_str("match: none"),
        }

        output
    }
}
