use crate::config::output_config::{OutputConfig, OutputFormat};
use graphmetrics::prelude::GraphSummary;
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct JsonReport<'a> {
    graph: &'a str,
    #[serde(flatten)]
    summary: &'a GraphSummary,
}

/// Print `summary` for the graph called `name` in the configured format.
pub fn write_report<W: Write>(
    out: &mut W,
    name: &str,
    summary: &GraphSummary,
    output: &OutputConfig,
) -> io::Result<()> {
    match output.format {
        OutputFormat::Text => write_text(out, name, summary, output.degree_distribution),
        OutputFormat::Json => {
            if output.degree_distribution {
                serde_json::to_writer(&mut *out, &JsonReport { graph: name, summary })?;
            } else {
                let mut value = serde_json::to_value(JsonReport { graph: name, summary })?;
                if let Some(map) = value.as_object_mut() {
                    map.remove("degree_distribution");
                }
                serde_json::to_writer(&mut *out, &value)?;
            }
            writeln!(out)
        }
    }
}

fn write_text<W: Write>(
    out: &mut W,
    name: &str,
    summary: &GraphSummary,
    degree_distribution: bool,
) -> io::Result<()> {
    writeln!(out, "Graph: {name}")?;
    writeln!(out, "  vertices:               {}", summary.vertices)?;
    writeln!(out, "  edges:                  {}", summary.edges)?;
    writeln!(out, "  average degree:         {}", summary.average_degree)?;
    writeln!(out, "  density:                {}", summary.density)?;
    writeln!(out, "  diameter:               {}", summary.diameter)?;
    writeln!(out, "  clustering coefficient: {}", summary.clustering_coefficient)?;
    if degree_distribution {
        writeln!(out, "  degree distribution:")?;
        for (degree, count) in summary.degree_distribution.iter() {
            writeln!(out, "    degree {degree}: {count}")?;
        }
    }
    writeln!(out)
}
