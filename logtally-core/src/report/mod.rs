//! Rendering a [`PassOutcome`] as text, XML or JSON.
//!
//! All formats share [`ReportView`]: the paged bucket rows with their local
//! labels, followed by the pass statistics.

mod error;
mod text;
mod view;
mod xml;


pub use error::ReportError;
pub use view::{RecordRow, ReportView, StatisticsView};

use crate::conf::{OutputFormat, Page};
use crate::pipeline::PassOutcome;

pub fn render(outcome: &PassOutcome, format: OutputFormat, page: Page) -> Result<String, ReportError> {
    let view = ReportView::new(outcome, page);
    let mut out = String::new();
    match format {
        OutputFormat::Text => text::write_text(&mut out, &view)?,
        OutputFormat::Xml => xml::write_xml(&mut out, &view)?,
        OutputFormat::Json => {
            out = serde_json::to_string_pretty(&view)?;
            out.push('\n');
        }
    }
    Ok(out)
}
