//! Plain-text report of a parsed document, one block per entity.

use std::fmt;

use crate::models::{ActionLog, Bundle, DocumentGraph, PeoplaId};
use crate::parsing::ParsedDocument;
use crate::settings::Settings;

/// Displays a [`ParsedDocument`] as a human-readable report.
pub struct Summary<'a>(pub &'a ParsedDocument);

pub fn render_summary(doc: &ParsedDocument) -> String {
    Summary(doc).to_string()
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let doc = self.0;
        let graph = &doc.graph;

        if let Some(title) = doc.header.title() {
            writeln!(f, "[TITLE] {title}")?;
        }
        for (tag, values) in doc.header.iter().filter(|(tag, _)| *tag != Settings::TITLE) {
            writeln!(f, "[HEADER] {tag}: {}", values.join("; "))?;
        }

        for (idx, peopla) in graph.peoplas().iter().enumerate() {
            write!(f, "[PEOPLA] [{:04}] {} {}", idx + 1, peopla.kind.as_str(), peopla.name)?;
            if let Some(local) = &peopla.local_id {
                write!(f, " ({local})")?;
            }
            if let Some(global) = &peopla.global_id {
                write!(f, " {{{global}}}")?;
            }
            writeln!(f, " / {}", peopla.evidence)?;
            write_actions(f, &peopla.actions)?;
            if !peopla.action_groups.is_empty() {
                let groups: Vec<String> =
                    peopla.action_groups.iter().map(|g| g.to_string()).collect();
                writeln!(f, "    GROUPS: {}", groups.join(", "))?;
            }
        }

        for (idx, peorel) in graph.peorels().iter().enumerate() {
            writeln!(
                f,
                "[PEOREL] [{:04}] {} is a {} to {} / {}",
                idx + 1,
                name(graph, peorel.is),
                peorel.label,
                name(graph, peorel.to),
                peorel.evidence
            )?;
        }

        for (idx, group) in graph.action_groups().iter().enumerate() {
            writeln!(
                f,
                "[AGROUP] [{:04}] {} {} action group / {}",
                idx + 1,
                if group.directed { "directed" } else { "undirected" },
                group.kind,
                group.evidence
            )?;
            writeln!(f, "    SOURCE: {}", name(graph, group.source))?;
            let targets: Vec<&str> = group.targets.iter().map(|t| name(graph, *t)).collect();
            writeln!(f, "    TARGETS: {}", targets.join("; "))?;
            write_actions(f, &group.actions)?;
        }

        writeln!(f, "[DATAPOINTS] {} data points", doc.data_points.len())?;
        for diagnostic in &doc.diagnostics {
            writeln!(f, "[DIAGNOSTIC] {diagnostic}")?;
        }
        Ok(())
    }
}

fn name(graph: &DocumentGraph, id: PeoplaId) -> &str {
    &graph.peopla(id).name
}

fn write_actions(f: &mut fmt::Formatter<'_>, actions: &ActionLog) -> fmt::Result {
    for (label, instances) in actions.iter() {
        for (n, instance) in instances.iter().enumerate() {
            write!(f, "    {label} #{}", n + 1)?;
            if !instance.attributes.is_empty() {
                write!(f, ": {}", attributes(&instance.attributes))?;
            }
            writeln!(f, " / {}", instance.evidence)?;
        }
    }
    Ok(())
}

fn attributes(bundle: &Bundle) -> String {
    bundle
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(", ")
}
