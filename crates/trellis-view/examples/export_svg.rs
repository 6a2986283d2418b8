//! Build a small lineage diagram, select a node, and print an SVG
//! snapshot to stdout.
//!
//! Run with `cargo run -p trellis-view --example export_svg > lineage.svg`.

use trellis_core::{CategoryTable, Diagram, DiagramSpec, EdgeSpec, NodeSpec, NodeStatus};
use trellis_view::{CanvasConfig, DiagramCanvas, InputEvent};

fn node(id: &str, label: &str, category: &str, column: u32, row: f64, detail: &str, badge: &str) -> NodeSpec {
    NodeSpec {
        id: id.to_string(),
        label: label.to_string(),
        category: category.to_string(),
        column,
        row,
        status: NodeStatus::Healthy,
        detail: Some(detail.to_string()),
        badge: Some(badge.to_string()),
        attributes: Vec::new(),
    }
}

fn edge(from: &str, to: &str) -> EdgeSpec {
    EdgeSpec {
        from: from.to_string(),
        to: to.to_string(),
    }
}

fn main() {
    env_logger::init();

    let spec = DiagramSpec {
        nodes: vec![
            node("src_postgres", "PostgreSQL", "source", 0, 0.0, "4.8M/day", "PG"),
            node("src_stripe", "Stripe", "source", 0, 1.0, "890K/day", "ST"),
            node("stg_orders", "stg_orders", "staging", 1, 0.0, "12.4M rows", "TB"),
            node("stg_payments", "stg_payments", "staging", 1, 1.0, "2.2M rows", "TB"),
            node("int_revenue", "int_revenue", "intermediate", 2, 0.5, "2.1M rows", "TB"),
            node("fact_revenue", "fact_revenue", "mart", 3, 0.5, "2.1M rows", "FT"),
            node("exp_dashboard", "Revenue Dashboard", "exposure", 4, 0.5, "Updated 5m ago", "BI"),
        ],
        edges: vec![
            edge("src_postgres", "stg_orders"),
            edge("src_stripe", "stg_payments"),
            edge("stg_orders", "int_revenue"),
            edge("stg_payments", "int_revenue"),
            edge("int_revenue", "fact_revenue"),
            edge("fact_revenue", "exp_dashboard"),
        ],
    };

    let diagram = Diagram::from_spec(spec, CategoryTable::pipeline()).expect("demo spec is valid");
    let mut canvas = DiagramCanvas::new(diagram, CanvasConfig::pipeline());

    // Select int_revenue by clicking it (column 2, fractional row 0.5).
    canvas.handle_input(InputEvent::PointerDown { x: 580.0, y: 120.0 });
    canvas.handle_input(InputEvent::PointerUp { x: 580.0, y: 120.0 });

    print!("{}", trellis_render::render_svg(&canvas.frame(), 1400.0, 600.0));
}
