use crate::report::view::ReportView;
use std::fmt::{self, Write};

pub fn write_text(out: &mut impl Write, view: &ReportView) -> fmt::Result {
    let width = view
        .records
        .iter()
        .map(|row| row.date.len())
        .max()
        .unwrap_or(0);
    for row in &view.records {
        writeln!(out, "{:<width$}  {}", row.date, row.count)?;
    }

    let stats = &view.statistics;
    if !view.records.is_empty() {
        writeln!(out)?;
    }
    writeln!(out, "records seen     {:>12}", stats.total_length)?;
    writeln!(out, "bytes seen       {:>12}", stats.total_bytes)?;
    writeln!(out, "records matched  {:>12}", stats.total_search_length)?;
    writeln!(out, "bytes matched    {:>12}", stats.total_search_bytes)?;
    writeln!(out, "elapsed          {:>12}", stats.elapsed)?;
    writeln!(out, "user time        {:>12}", stats.user_time)?;
    writeln!(out, "system time      {:>12}", stats.system_time)
}
