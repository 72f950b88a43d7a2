//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{JavelinArgs, OutputFormat};
use crate::error::Result;
use crate::store::Record;

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub strategy: String,
    pub total_hits: usize,
    pub hits: Vec<Record>,
}

/// Result structure for corpus listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusListing {
    pub total_records: usize,
    pub records: Vec<Record>,
}

/// A result that can be rendered for humans as well as serialized.
pub trait Render: Serialize {
    /// Produce the human-readable rendition.
    fn human(&self) -> String;
}

impl Render for SearchResults {
    fn human(&self) -> String {
        if self.hits.is_empty() {
            return "No matching records found.".to_string();
        }

        let mut out = String::from("Records found:\n");
        for hit in &self.hits {
            out.push_str(&hit.text);
            out.push('\n');
        }
        out.push_str(&format!("{} record(s) matched.", self.total_hits));
        out
    }
}

impl Render for CorpusListing {
    fn human(&self) -> String {
        let mut out = String::from("=== All records ===\n");
        for record in &self.records {
            out.push_str(&record.text);
            out.push('\n');
        }
        out.push_str(&format!("{} record(s) total.", self.total_records));
        out
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Render>(result: &T, args: &JavelinArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            println!("{}", result.human());
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
        }
    }
    Ok(())
}
