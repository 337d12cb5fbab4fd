use crate::report::view::{RecordRow, ReportView};
use std::fmt::{self, Write};

pub fn write_xml(out: &mut impl Write, view: &ReportView) -> fmt::Result {
    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(out, "<instance>")?;

    writeln!(out, "\t<properties key=\"records\">")?;
    for row in &view.records {
        write_record(out, row)?;
    }
    writeln!(out, "\t</properties>")?;

    let stats = &view.statistics;
    writeln!(out, "\t<property key=\"statistics\">")?;
    writeln!(out, "\t\t<instance>")?;
    property(out, 3, "totalBytes", "integer", stats.total_bytes)?;
    property(out, 3, "totalLength", "integer", stats.total_length)?;
    property(out, 3, "totalSearchBytes", "integer", stats.total_search_bytes)?;
    property(out, 3, "totalSearchLength", "integer", stats.total_search_length)?;
    property(out, 3, "elapsed", "string", &stats.elapsed)?;
    property(out, 3, "systemTime", "string", &stats.system_time)?;
    property(out, 3, "userTime", "string", &stats.user_time)?;
    writeln!(out, "\t\t</instance>")?;
    writeln!(out, "\t</property>")?;

    writeln!(out, "</instance>")
}

fn write_record(out: &mut impl Write, row: &RecordRow) -> fmt::Result {
    writeln!(out, "\t\t<instance>")?;
    property(out, 3, "date", "time", &row.date)?;
    property(out, 3, "count", "integer", row.count)?;
    writeln!(out, "\t\t</instance>")
}

// Values are dates, numbers and durations; nothing needs escaping.
fn property(
    out: &mut impl Write,
    depth: usize,
    key: &str,
    kind: &str,
    value: impl fmt::Display,
) -> fmt::Result {
    let indent = "\t".repeat(depth);
    writeln!(out, "{indent}<property key=\"{key}\">")?;
    writeln!(out, "{indent}\t<{kind}>{value}</{kind}>")?;
    writeln!(out, "{indent}</property>")
}
