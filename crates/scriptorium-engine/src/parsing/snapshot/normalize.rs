use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::ActionLog;
use crate::parsing::ParsedDocument;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Snap {
    /// `name (local) {global} [lines]`
    pub peoplas: Vec<String>,
    /// `is -LABEL-> to [lines]`
    pub peorels: Vec<String>,
    /// `KIND source -> targets [lines]`, with `--` for undirected groups.
    pub action_groups: Vec<String>,
    /// `entity / LABEL#n / KEY=value`, in entity order.
    pub attributes: Vec<String>,
    pub records: Vec<BTreeMap<String, String>>,
    pub diagnostics: Vec<String>,
}

fn actions(owner: &str, log: &ActionLog, out: &mut Vec<String>) {
    for (label, instances) in log.iter() {
        for (n, instance) in instances.iter().enumerate() {
            for (key, value) in &instance.attributes {
                out.push(format!("{owner} / {label}#{} / {key}={value}", n + 1));
            }
        }
    }
}

pub fn normalize(doc: &ParsedDocument) -> Snap {
    let graph = &doc.graph;
    let name = |id: crate::models::PeoplaId| graph.peopla(id).name.as_str();
    let mut attributes = Vec::new();

    let peoplas = graph
        .peoplas()
        .iter()
        .map(|p| {
            actions(&p.name, &p.actions, &mut attributes);
            let mut s = p.name.clone();
            if let Some(local) = &p.local_id {
                s.push_str(&format!(" ({local})"));
            }
            if let Some(global) = &p.global_id {
                s.push_str(&format!(" {{{global}}}"));
            }
            format!("{s} [{}]", p.evidence)
        })
        .collect();

    let peorels = graph
        .peorels()
        .iter()
        .map(|r| format!("{} -{}-> {} [{}]", name(r.is), r.label, name(r.to), r.evidence))
        .collect();

    let action_groups = graph
        .action_groups()
        .iter()
        .map(|g| {
            actions(&g.kind, &g.actions, &mut attributes);
            let targets: Vec<&str> = g.targets.iter().map(|t| name(*t)).collect();
            let arrow = if g.directed { "->" } else { "--" };
            format!(
                "{} {} {arrow} {} [{}]",
                g.kind,
                name(g.source),
                targets.join("; "),
                g.evidence
            )
        })
        .collect();

    Snap {
        peoplas,
        peorels,
        action_groups,
        attributes,
        records: doc.records.rows.clone(),
        diagnostics: doc.diagnostics.iter().map(|d| d.to_string()).collect(),
    }
}
