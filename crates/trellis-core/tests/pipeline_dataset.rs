//! Integration tests over a realistic lineage dataset: deserialize the
//! data-source payload, build the diagram, and exercise layout, filtering,
//! and neighborhood queries together.

use pretty_assertions::assert_eq;
use std::collections::HashSet;
use trellis_core::{
    CategoryId, CategoryTable, Diagram, DiagramSpec, FilterState, GridSpec, LayoutState, NodeId,
    NodeStatus, Selection, StatusSummary, resolve_layout,
};

fn pipeline() -> Diagram {
    let spec: DiagramSpec =
        serde_json::from_str(include_str!("fixtures/pipeline.json")).expect("fixture parses");
    Diagram::from_spec(spec, CategoryTable::pipeline()).expect("fixture builds")
}

#[test]
fn dataset_loads_completely() {
    let diagram = pipeline();
    assert_eq!(diagram.node_count(), 17);
    assert_eq!(diagram.edge_count(), 18);
    assert_eq!(
        diagram.status_summary(),
        StatusSummary {
            healthy: 13,
            warning: 3,
            error: 1
        }
    );
}

#[test]
fn seeded_layout_places_stage_columns() {
    let diagram = pipeline();
    let bounds = resolve_layout(&diagram, &LayoutState::new(), &GridSpec::pipeline());

    // Column 0, row 0.
    let sf = bounds[&NodeId::intern("src_salesforce")];
    assert_eq!((sf.x, sf.y), (80.0, 60.0));

    // Column 2, fractional row 0.5 sits between rows 0 and 1.
    let ico = bounds[&NodeId::intern("int_customer_orders")];
    assert_eq!((ico.x, ico.y), (80.0 + 2.0 * 240.0, 60.0 + 0.5 * 90.0));

    // Every node resolves.
    assert_eq!(bounds.len(), diagram.node_count());
}

#[test]
fn neighborhood_of_a_hub_node() {
    let diagram = pipeline();
    let mut selection = Selection::new();
    selection.toggle(NodeId::intern("int_customer_orders"));

    let hood = selection.neighborhood(&diagram).unwrap();
    let expected: HashSet<NodeId> = [
        "int_customer_orders",
        "stg_contacts",
        "stg_orders",
        "dim_customers",
        "fact_orders",
    ]
    .iter()
    .map(|s| NodeId::intern(s))
    .collect();
    assert_eq!(hood.nodes, expected);
    assert_eq!(hood.edges.len(), 4);
    assert!(hood.dims(NodeId::intern("exp_dashboard")));
}

#[test]
fn inspector_queries_walk_one_hop() {
    let diagram = pipeline();
    let ups: Vec<&str> = diagram
        .upstream(NodeId::intern("exp_dashboard"))
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(ups, vec!["dim_customers", "fact_orders", "fact_revenue"]);

    let downs: Vec<&str> = diagram
        .downstream(NodeId::intern("stg_orders"))
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(downs, vec!["int_customer_orders", "int_revenue"]);
}

#[test]
fn category_filter_keeps_only_intra_stage_edges() {
    let diagram = pipeline();
    let filter = FilterState {
        category: Some(CategoryId::intern("mart")),
        ..FilterState::default()
    };
    let visible = filter.visible_nodes(&diagram);
    assert_eq!(visible.len(), 4);
    // No edge runs mart → mart, so every edge loses an endpoint.
    assert!(filter.visible_edges(&diagram).is_empty());
}

#[test]
fn failing_source_status_reaches_the_model() {
    let diagram = pipeline();
    let stg = diagram.node(NodeId::intern("stg_payments")).unwrap();
    assert_eq!(stg.status, NodeStatus::Error);
    assert_eq!(stg.detail, None);
}
