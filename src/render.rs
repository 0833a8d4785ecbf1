//! Draw a graph as an SVG document.

use std::fmt::{self, Write};

use geometry::coord2d::{Layout, Point};
use searcher::{Cost, Graph, NodeId};

/// Radius of the circle drawn for each node.
pub const NODE_RADIUS: f64 = 20.0;

/// Render every edge with its cost, then every node on top.
pub fn svg(graph: &Graph, layout: &Layout<NodeId>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_svg(&mut out, graph, layout);
    out
}

/// Write the drawing to any formatter.
///
/// Nodes without a position are skipped, along with their edges.
pub fn write_svg<W: Write>(out: &mut W, graph: &Graph, layout: &Layout<NodeId>) -> fmt::Result {
    let canvas = layout.canvas();
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="12">"#,
        w = canvas.width,
        h = canvas.height
    )?;

    writeln!(out, r#"  <g stroke="black" fill="black">"#)?;
    for (from, edge) in graph.edges() {
        if let (Some(start), Some(end)) = (layout.position(from), layout.position(&edge.node)) {
            write_edge(out, start, end, edge.cost)?;
        }
    }
    writeln!(out, "  </g>")?;

    writeln!(out, r#"  <g stroke="black" fill="white">"#)?;
    for (node, Point { x, y }) in layout.iter() {
        if !graph.contains(node) {
            continue;
        }
        writeln!(
            out,
            r#"    <circle cx="{}" cy="{}" r="{}"/>"#,
            x, y, NODE_RADIUS
        )?;
        writeln!(
            out,
            r#"    <text x="{}" y="{}" stroke="none" fill="black">{}</text>"#,
            x - 5.0,
            y + 5.0,
            escape(node.as_str())
        )?;
    }
    writeln!(out, "  </g>")?;
    writeln!(out, "</svg>")
}

fn write_edge<W: Write>(out: &mut W, start: Point, end: Point, cost: Cost) -> fmt::Result {
    let label = start.midpoint(end);
    writeln!(
        out,
        r#"    <line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
        start.x, start.y, end.x, end.y
    )?;
    writeln!(
        out,
        r#"    <text x="{}" y="{}" stroke="none">{}</text>"#,
        label.x, label.y, cost
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
