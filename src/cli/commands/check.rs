//! Check command implementation
//!
//! Runs the redaction engine on a single serialized record and prints the
//! result. Useful for trying out rules without preparing a CSV file.

use crate::anonymization::{ProcessedRecord, RedactionEngine};
use crate::core::batch::pii_flag;
use clap::Args;
use tokio::io::AsyncReadExt;

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Serialized JSON record, or `-` to read it from stdin
    pub record: String,

    /// Also list flagged fields with their category and source
    #[arg(long)]
    pub explain: bool,
}

impl CheckArgs {
    /// Execute the check command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let raw = if self.record == "-" {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf.trim_end_matches(['\r', '\n']).to_string()
        } else {
            self.record.clone()
        };

        let processed = RedactionEngine::new().redact_raw(&raw);
        print!("{}", self.render(&processed));
        Ok(0)
    }

    fn render(&self, processed: &ProcessedRecord) -> String {
        let mut out = format!(
            "{}\nis_pii: {}\n",
            processed.output,
            pii_flag(processed.pii_found)
        );

        if self.explain {
            if !processed.decoded {
                out.push_str("(input is not a JSON object; passed through unchanged)\n");
            }
            for field in &processed.flagged {
                out.push_str(&format!(
                    "  {:<12} {:<16} {:<12} {}\n",
                    field.field,
                    field.category.label(),
                    field.source.label(),
                    field.masked_value
                ));
            }
        }

        out
    }
}
