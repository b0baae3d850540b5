use crate::models::{ActionLog, Evidence};
use crate::parsing::ParsedDocument;

fn check_evidence(what: &str, evidence: &Evidence, line_count: usize) {
    assert!(!evidence.is_empty(), "{what} has no evidence");
    for line in evidence.lines() {
        assert!(
            (1..=line_count).contains(&line),
            "{what} evidence line {line} out of range (document has {line_count} lines)"
        );
    }
}

fn check_actions(what: &str, actions: &ActionLog, line_count: usize) {
    for (label, instances) in actions.iter() {
        assert!(!instances.is_empty(), "{what} has an empty {label} action");
        for instance in instances {
            check_evidence(&format!("{what} {label}"), &instance.evidence, line_count);
        }
    }
}

pub fn check(line_count: usize, doc: &ParsedDocument) {
    let graph = &doc.graph;
    let peoplas = graph.peoplas().len();
    let groups = graph.action_groups().len();

    for p in graph.peoplas() {
        let what = format!("peopla {:?}", p.name);
        check_evidence(&what, &p.evidence, line_count);
        check_actions(&what, &p.actions, line_count);
        for g in &p.action_groups {
            assert!(g.0 < groups, "{what} links to missing {g}");
        }
    }

    for r in graph.peorels() {
        let what = format!("peorel {}", r.label);
        assert!(r.is.0 < peoplas && r.to.0 < peoplas, "{what} points outside the graph");
        check_evidence(&what, &r.evidence, line_count);
    }

    for g in graph.action_groups() {
        let what = format!("action group {}", g.kind);
        assert!(g.source.0 < peoplas, "{what} has a missing source");
        assert!(!g.targets.is_empty(), "{what} has no targets");
        for t in &g.targets {
            assert!(t.0 < peoplas, "{what} has a missing target {t}");
        }
        check_evidence(&what, &g.evidence, line_count);
        check_actions(&what, &g.actions, line_count);
    }

    assert_eq!(
        doc.records.rows.len(),
        doc.data_points.len(),
        "one record per data point"
    );
    for row in &doc.records.rows {
        for key in row.keys() {
            assert!(doc.records.columns.contains(key), "record key {key} has no column");
        }
    }

    for d in &doc.diagnostics {
        assert!(
            (1..=line_count).contains(&d.line),
            "diagnostic line {} out of range",
            d.line
        );
    }
}
