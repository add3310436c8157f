use crate::generic_structs::ResultSet;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Renders the set as an ascii table inside a code fence, so chat clients keep it
/// monospaced. Multi line cells stay multi line. An empty set renders the headers only.
pub fn format_results(results: &ResultSet) -> String {
    let mut builder = Builder::default();
    builder.push_record(results.headers.iter().cloned());
    for row in &results.rows {
        builder.push_record(row.iter().cloned());
    }
    let mut table = builder.build();
    table.with(Style::ascii());
    format!("```\n{}\n```", table)
}
