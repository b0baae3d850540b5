use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{doc, parse, settings};
use crate::models::{ActionGroupId, Bundle, PeorelId, Value};
use crate::parsing::{parse_str, snapshot};

#[rstest]
#[case::extra_tab("###\t\t:[1762-06]")]
#[case::nested("###\t>\t:[1762-06]")]
fn attribute_under_declaration(#[case] attribute: &str) {
    // Given a declaration followed by a date one level in
    let lines = ["###\t[Adam, Jean](5){guid-1}", attribute, ""];

    // When parsed
    let parsed = parse(&lines);

    // Then one peopla carries the date with evidence from both lines
    let peoplas = parsed.graph.peoplas();
    assert_eq!(peoplas.len(), 1);
    let jean = &peoplas[0];
    assert_eq!(jean.name, "Adam, Jean");
    assert_eq!(jean.local_id.as_deref(), Some("5"));
    assert_eq!(jean.global_id.as_deref(), Some("guid-1"));
    assert_eq!(jean.attribute("DATE"), Some(&Value::from("1762-06")));
    assert_eq!(jean.evidence.to_vec(), vec![1, 2]);
}

#[test]
fn relation_creates_peorel_and_gender() {
    let parsed = parse(&["###\t[Brown, Mary]", "###\t>\t*SON*", "###\t>\t[Smith, John]"]);

    let graph = &parsed.graph;
    assert_eq!(graph.peorels().len(), 1);
    let peorel = &graph.peorels()[0];
    assert_eq!(graph.peopla(peorel.is).name, "Smith, John");
    assert_eq!(graph.peopla(peorel.to).name, "Brown, Mary");
    assert_eq!(peorel.label, "SON");
    assert_eq!(peorel.depth, 1);

    let (_, smith) = graph.find_peopla("Smith, John").unwrap();
    assert_eq!(smith.gender(), Some("MALE"));
    let gender = smith.actions.latest("GENDER").unwrap();
    assert_eq!(gender.attributes["evidence"], Value::Peorels(vec![PeorelId(0)]));
}

#[test]
fn nested_relations_follow_breadcrumbs() {
    let parsed = parse(&[
        "###\t[Root, A]",
        "###\t>\t*SON*",
        "###\t>\t[Child, B]",
        "###\t>\t>\t*DAUG*",
        "###\t>\t>\t[Grand, C]",
    ]);

    let snap = snapshot::normalize(&parsed);
    assert_eq!(
        snap.peorels,
        vec!["Child, B -SON-> Root, A [3]", "Grand, C -DAUG-> Child, B [5]"]
    );
    let (_, grand) = parsed.graph.find_peopla("Grand, C").unwrap();
    assert_eq!(grand.gender(), Some("FEMALE"));
}

#[test]
fn actions_collect_attributes_and_inherit_header() {
    // Given a header and a peopla with two actions, one inheriting
    let lines = [
        "##SOURCE: OPR 573/1",
        "###\t[Kerr, Janet]",
        "###\t\tBAPTISM*",
        "###\t\t\t:[1767-03-02]",
        "###\t\t\t@[Paisley]",
        "###\t\tBURIAL",
        "###\t\t\t:[1790]~",
    ];

    // When parsed
    let parsed = parse(&lines);

    // Then each action keeps its own attributes and evidence
    let (_, janet) = parsed.graph.find_peopla("Kerr, Janet").unwrap();
    let baptism = janet.actions.latest("BAPTISM").unwrap();
    assert_eq!(
        baptism.attributes,
        Bundle::from([
            ("AT".to_string(), Value::from("Paisley")),
            ("DATE".to_string(), Value::from("1767-03-02")),
            ("SOURCE".to_string(), Value::List(vec!["OPR 573/1".to_string()])),
        ])
    );
    assert_eq!(baptism.evidence.to_vec(), vec![3, 4, 5]);

    let burial = janet.actions.latest("BURIAL").unwrap();
    assert_eq!(burial.attributes["DATE"], Value::from("approx. 1790"));
    assert_eq!(burial.evidence.to_vec(), vec![6, 7]);

    assert_eq!(janet.attribute("DATE"), Some(&Value::from("approx. 1790")));
    assert_eq!(janet.evidence.to_vec(), vec![2, 3, 4, 5, 6, 7]);
    assert_eq!(janet.actions.labels().collect::<Vec<_>>(), vec!["BAPTISM", "BURIAL"]);
}

#[test]
fn repeated_action_starts_new_instance() {
    let parsed = parse(&[
        "###\t[Kerr, Janet]",
        "###\t\tPAYMENT",
        "###\t\t\tAMOUNT[3s]",
        "###\t\tPAYMENT",
        "###\t\t\tAMOUNT[4s]",
    ]);

    let (_, janet) = parsed.graph.find_peopla("Kerr, Janet").unwrap();
    let amounts: Vec<&Value> = janet
        .actions
        .instances("PAYMENT")
        .iter()
        .map(|i| &i.attributes["AMOUNT"])
        .collect();
    assert_eq!(amounts, vec![&Value::from("3s"), &Value::from("4s")]);
}

#[test]
fn directed_group_action() {
    // Given a seller, a `vs` buyer and a sale with a price
    let lines = [
        "###\t[Seller, Sam]",
        "###\tvs[Buyer, Bob]",
        "###\t\tSALE",
        "###\t\t\tPRICE[3s]",
    ];

    // When parsed
    let parsed = parse(&lines);

    // Then one directed group links both and holds the price
    let graph = &parsed.graph;
    assert_eq!(graph.action_groups().len(), 1);
    let sale = graph.action_group(ActionGroupId(0));
    assert_eq!(sale.kind, "SALE");
    assert!(sale.directed);
    assert_eq!(graph.peopla(sale.source).name, "Seller, Sam");
    assert_eq!(sale.targets.len(), 1);
    assert_eq!(graph.peopla(sale.targets[0]).name, "Buyer, Bob");
    assert_eq!(
        sale.actions.latest("SALE").unwrap().attributes["PRICE"],
        Value::from("3s")
    );
    assert_eq!(sale.evidence.to_vec(), vec![3, 4]);

    for name in ["Seller, Sam", "Buyer, Bob"] {
        let (_, peopla) = graph.find_peopla(name).unwrap();
        assert_eq!(peopla.action_groups, vec![ActionGroupId(0)], "{name}");
        assert_eq!(peopla.attribute("PRICE"), None, "{name}");
    }
}

#[test]
fn undirected_group_with_two_targets() {
    let parsed = parse(&[
        "###\t[Kerr, Janet]",
        "###\tw/[Orr, Ann]",
        "###\tw/[Orr, Bess]",
        "###\t\tCOMPEARED",
    ]);

    let snap = snapshot::normalize(&parsed);
    assert_eq!(
        snap.action_groups,
        vec!["COMPEARED Kerr, Janet -- Orr, Ann; Orr, Bess [4]"]
    );
}

#[test]
fn leaf_scope_applies_to_latest_target_only() {
    let parsed = parse(&[
        "###\t[Seller, Sam]",
        "###\tw/[Witness, Will]",
        "###\t(\tAGED[40]",
    ]);

    let graph = &parsed.graph;
    let (_, will) = graph.find_peopla("Witness, Will").unwrap();
    assert_eq!(will.attribute("AGED"), Some(&Value::from("40")));
    let (_, sam) = graph.find_peopla("Seller, Sam").unwrap();
    assert_eq!(sam.attribute("AGED"), None);
    assert!(graph.action_groups().is_empty());
}

#[test]
fn pedigree_actions_and_attributes() {
    // Given a child declared through a relation, then a pedigree action
    let lines = [
        "###\t[Root, A]",
        "###\t>\t*SON*",
        "###\t>\t[Child, B]",
        "###\t>\tBAPTISM",
        "###\t>\t\t:[1790]",
        "###\t>\t\tBIRTH",
    ];

    // When parsed
    let parsed = parse(&lines);

    // Then the action and both attributes land on the child
    let (_, child) = parsed.graph.find_peopla("Child, B").unwrap();
    let baptism = child.actions.latest("BAPTISM").unwrap();
    assert_eq!(baptism.attributes["DATE"], Value::from("1790"));
    assert_eq!(baptism.attributes["AGED"], Value::from("BIRTH"));
    assert_eq!(baptism.evidence.to_vec(), vec![4, 5, 6]);

    let (_, root) = parsed.graph.find_peopla("Root, A").unwrap();
    assert!(root.actions.instances("BAPTISM").is_empty());
}

#[test]
fn climbing_back_restores_group_targets() {
    // Given a group opened at depth 1 and a nested relation below it
    let lines = [
        "###\t[Root, A]",
        "###\t>\t*SON*",
        "###\t>\t[Child, B]",
        "###\t>\tvs[Buyer, Bob]",
        "###\t>\t>\t*DAUG*",
        "###\t>\t>\t[Grand, C]",
        "###\t>\tSALE",
    ];

    // When parsed
    let parsed = parse(&lines);

    // Then the sale back at depth 1 goes to a group between the depth-1
    // source and the target recorded there
    let snap = snapshot::normalize(&parsed);
    assert_eq!(snap.action_groups, vec!["SALE Child, B -> Buyer, Bob [7]"]);
    for name in ["Grand, C", "Buyer, Bob", "Child, B"] {
        let (_, peopla) = parsed.graph.find_peopla(name).unwrap();
        assert!(peopla.actions.instances("SALE").is_empty(), "{name}");
    }
}

#[rstest]
#[case::full("###\t>\t>\t[Grand, C]", vec!["Buyer, Bob", "Child, B"])]
#[case::leaf("###\t>\t>\t([Grand, C]", vec!["Buyer, Bob"])]
fn relation_inside_group_points_to_scope(#[case] target: &str, #[case] to: Vec<&str>) {
    let parsed = parse(&[
        "###\t[Root, A]",
        "###\t>\t*SON*",
        "###\t>\t[Child, B]",
        "###\t>\tvs[Buyer, Bob]",
        "###\t>\t>\t*DAUG*",
        target,
    ]);

    let graph = &parsed.graph;
    let daughters: Vec<&str> = graph
        .peorels()
        .iter()
        .filter(|r| r.label == "DAUG")
        .map(|r| graph.peopla(r.to).name.as_str())
        .collect();
    assert_eq!(daughters, to);
    for peorel in graph.peorels().iter().filter(|r| r.label == "DAUG") {
        assert_eq!(graph.peopla(peorel.is).name, "Grand, C");
    }
}

#[rstest]
#[case::comment("! torn page")]
#[case::header("##NOTE: torn page")]
fn non_content_lines_keep_group_context(#[case] interruption: &str) {
    let parsed = parse(&[
        "###\t[Root, A]",
        "###\t>\t*SON*",
        "###\t>\t[Child, B]",
        "###\t>\tvs[Buyer, Bob]",
        interruption,
        "###\t>\tSALE",
    ]);

    let snap = snapshot::normalize(&parsed);
    assert_eq!(snap.action_groups, vec!["SALE Child, B -> Buyer, Bob [6]"]);
    let (_, buyer) = parsed.graph.find_peopla("Buyer, Bob").unwrap();
    assert!(buyer.actions.instances("SALE").is_empty());
}

#[test]
fn trailing_whitespace_after_declaration() {
    let parsed = parse(&["###\t[Brown, Mary] ", "###\t\t:[1767]"]);

    let snap = snapshot::normalize(&parsed);
    assert_eq!(snap.peoplas, vec!["Brown, Mary [1,2]"]);
    assert!(parsed.diagnostics.is_empty());
}

#[test]
fn remention_reuses_peopla() {
    let parsed = parse(&[
        "###\t[Kerr, Janet](1)",
        "",
        "###\t[Orr, Ann]",
        "",
        "###\t[Kerr, Janet](1)",
        "###\t\t:[1767]",
    ]);

    let snap = snapshot::normalize(&parsed);
    assert_eq!(snap.peoplas, vec!["Kerr, Janet (1) [1,5,6]", "Orr, Ann [3]"]);
    assert_eq!(snap.attributes, vec!["Kerr, Janet / GENERAL#1 / DATE=1767"]);
}

#[test]
fn places_are_marked() {
    let parsed = parse(&["###\t@[Paisley]"]);

    assert_eq!(
        parsed.graph.peoplas()[0].kind,
        crate::models::PeoplaKind::Place
    );
}

#[test]
fn title_and_header_are_recorded() {
    let parsed = parse(&["#[Paisley rentals]", "##SOURCE: OPR 573/1", "##SOURCE: OPR 573/2"]);

    assert_eq!(parsed.header.title(), Some("Paisley rentals"));
    assert_eq!(parsed.header.values("SOURCE"), ["OPR 573/1", "OPR 573/2"]);
}

#[test]
fn unconfigured_header_tag_is_kept() {
    let parsed = parse(&["##PARISH: Abbey"]);

    assert_eq!(parsed.header.values("PARISH"), ["Abbey"]);
    assert!(parsed.diagnostics.is_empty());
}

#[test]
fn annotations_are_ignored() {
    let parsed = parse(&["###\t[Kerr, Janet] [<-]", "! a comment", "###\t\t:[1767]"]);

    let (_, janet) = parsed.graph.find_peopla("Kerr, Janet").unwrap();
    assert_eq!(janet.attribute("DATE"), Some(&Value::from("1767")));
}

#[test]
fn parsing_is_deterministic() {
    let text = doc(&[
        "##SOURCE: OPR 573/1",
        "###\t[Seller, Sam]",
        "###\tvs[Buyer, Bob]",
        "###\t\tSALE*",
        "###\t\t\tPRICE[3s]",
    ]);

    let first = parse_str(&text, &settings()).unwrap();
    let second = parse_str(&text, &settings()).unwrap();

    assert_eq!(snapshot::normalize(&first), snapshot::normalize(&second));
}
