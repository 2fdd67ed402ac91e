use mermaid_lite::{
    DiagramBuilder, MermaidError, ParseError, Unrenderable,
    config::{AppConfig, StyleConfig},
    render_fenced_block, render_mermaid,
    semantic::{DiagramKind, DiagramSource},
};
use proptest::prelude::*;

/// Reads the numeric attribute `name` of the last `tag` element that opens
/// before `needle` in `svg`. Attribute order is not assumed.
fn attribute_before(svg: &str, needle: &str, tag: &str, name: &str) -> f32 {
    let at = svg
        .find(needle)
        .unwrap_or_else(|| panic!("`{needle}` not found"));
    let open = svg[..at]
        .rfind(tag)
        .unwrap_or_else(|| panic!("no `{tag}` before `{needle}`"));
    let element = &svg[open..at];

    let key = format!(" {name}=\"");
    let start = element
        .find(&key)
        .unwrap_or_else(|| panic!("no `{name}` on `{tag}`"))
        + key.len();
    let end = start + element[start..].find('"').unwrap();
    element[start..end].parse().unwrap()
}

#[test]
fn test_empty_sources_are_unrenderable() {
    assert_eq!(render_mermaid(""), Err(Unrenderable));
    assert_eq!(render_mermaid("  \n\t \n"), Err(Unrenderable));
    assert_eq!(render_mermaid("%% a comment\n%% another"), Err(Unrenderable));
}

#[test]
fn test_unsupported_grammar_is_unrenderable() {
    assert_eq!(
        render_mermaid("classDiagram\n  Animal <|-- Duck"),
        Err(Unrenderable)
    );
    assert_eq!(render_mermaid("gantt\n  title Plan"), Err(Unrenderable));
}

#[test]
fn test_node_count_matches_rects() {
    let diagram = render_mermaid("graph TD\nA\nB[Bee]\nC((See))\nD{Dee}").unwrap();
    assert_eq!(diagram.kind(), DiagramKind::Flowchart);
    assert_eq!(
        diagram.svg().matches(r#"class="pn-mermaid-node""#).count(),
        4
    );
    assert_eq!(diagram.svg().matches("<line").count(), 0);
}

#[test]
fn test_edge_auto_registration() {
    let builder = DiagramBuilder::default();
    let DiagramSource::Flowchart { graph, .. } = builder.parse("A --> B").unwrap() else {
        panic!("expected flowchart");
    };

    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edges().len(), 1);
    for node in graph.nodes() {
        assert_eq!(node.label(), node.id());
    }
}

#[test]
fn test_label_upgrade_is_order_independent() {
    let builder = DiagramBuilder::default();

    for source in ["graph TD\nA --> B\nA[Start]", "graph TD\nA[Start]\nA --> B"] {
        let DiagramSource::Flowchart { graph, .. } = builder.parse(source).unwrap() else {
            panic!("expected flowchart");
        };
        assert_eq!(graph.node("A").unwrap().label(), "Start", "{source}");
    }
}

#[test]
fn test_label_is_not_downgraded() {
    let builder = DiagramBuilder::default();
    let DiagramSource::Flowchart { graph, .. } =
        builder.parse("graph TD\nA[Start]\nA --> B\nA").unwrap()
    else {
        panic!("expected flowchart");
    };
    assert_eq!(graph.node("A").unwrap().label(), "Start");
}

#[test]
fn test_direction_mirroring() {
    let lr = render_mermaid("flowchart LR\nFirst --> Second").unwrap();
    let first_x = attribute_before(lr.svg(), "First", "<tspan", "x");
    let second_x = attribute_before(lr.svg(), "Second", "<tspan", "x");
    let first_y = attribute_before(lr.svg(), "First", "<tspan", "y");
    let second_y = attribute_before(lr.svg(), "Second", "<tspan", "y");
    assert!(first_x < second_x);
    assert_eq!(first_y, second_y);

    let rl = render_mermaid("flowchart RL\nFirst --> Second").unwrap();
    let first_x = attribute_before(rl.svg(), "First", "<tspan", "x");
    let second_x = attribute_before(rl.svg(), "Second", "<tspan", "x");
    assert!(first_x > second_x);
}

#[test]
fn test_sequence_rows_are_ordered() {
    let diagram = render_mermaid("sequenceDiagram\nA->>B: ping\nB->>A: pong").unwrap();
    assert_eq!(diagram.kind(), DiagramKind::Sequence);

    let ping = attribute_before(diagram.svg(), "ping", "<tspan", "y");
    let pong = attribute_before(diagram.svg(), "pong", "<tspan", "y");
    assert!(pong > ping);
}

#[test]
fn test_sequence_structure() {
    let diagram =
        render_mermaid("sequenceDiagram\nparticipant A as Alice\nA->>B: hi\nB-->>A: back")
            .unwrap();
    let svg = diagram.svg();

    assert_eq!(
        svg.matches(r#"class="pn-mermaid-participant""#).count(),
        2
    );
    assert_eq!(svg.matches(r#"class="pn-mermaid-lifeline""#).count(), 2);
    assert_eq!(svg.matches(r#"class="pn-mermaid-message""#).count(), 2);
    assert!(svg.contains("Alice"));
}

#[test]
fn test_canvas_dimensions_in_view_box() {
    let diagram = render_mermaid("sequenceDiagram\nA->>B: one").unwrap();
    assert_eq!(diagram.width(), 380.0);
    assert_eq!(diagram.height(), 142.0);
    assert!(diagram.svg().contains(r#"viewBox="0 0 380 142""#));
}

#[test]
fn test_single_arrow_marker() {
    let diagram = render_mermaid("graph TD\nA --> B\nB --> C\nC --> A").unwrap();
    let svg = diagram.svg();

    assert_eq!(svg.matches("<marker").count(), 1);
    assert_eq!(svg.matches("marker-end").count(), 3);
}

#[test]
fn test_labels_are_escaped() {
    let diagram = render_mermaid("graph TD\nA[<script>alert(1)</script>] --> B").unwrap();
    let svg = diagram.svg();

    assert!(!svg.contains("<script>"));
    assert!(svg.contains("&lt;script&gt;"));
}

#[test]
fn test_message_text_is_escaped() {
    let diagram = render_mermaid("sequenceDiagram\nA->>B: a < b & \"c\"").unwrap();
    let svg = diagram.svg();

    assert!(svg.contains("a &lt; b &amp; &quot;c&quot;"));
}

#[test]
fn test_fenced_block_renders_svg() {
    let html = render_fenced_block("graph LR\nA --> B");
    assert!(html.starts_with("<svg"));
}

#[test]
fn test_fenced_block_fallback_escapes_source() {
    let html = render_fenced_block("pie title <b>Pets</b>");
    assert_eq!(
        html,
        r#"<pre><code class="language-mermaid">pie title &lt;b&gt;Pets&lt;/b&gt;</code></pre>"#
    );
}

#[test]
fn test_builder_reports_parse_errors() {
    let err = DiagramBuilder::default().parse("").unwrap_err();
    assert!(matches!(err, MermaidError::Parse(ParseError::EmptySource)));
}

#[test]
fn test_builder_background_color() {
    let builder = DiagramBuilder::new(AppConfig::new(StyleConfig::new(Some(
        "#fafafa".to_string(),
    ))));
    let diagram = builder.render("graph TD\nA").unwrap();
    assert!(diagram.svg().contains("pn-mermaid-background"));
}

#[test]
fn test_builder_invalid_background_color() {
    let builder = DiagramBuilder::new(AppConfig::new(StyleConfig::new(Some(
        "definitely-not-a-color".to_string(),
    ))));
    let source = builder.parse("graph TD\nA").unwrap();

    let err = builder.render_svg(&source).unwrap_err();
    assert!(matches!(err, MermaidError::Export(_)));
}

proptest! {
    #[test]
    fn prop_rendering_is_deterministic(source in "[A-Za-z0-9 \\n;:>\\-\\[\\](){}|%]{0,120}") {
        prop_assert_eq!(render_mermaid(&source), render_mermaid(&source));
        prop_assert_eq!(render_fenced_block(&source), render_fenced_block(&source));
    }

    #[test]
    fn prop_rendered_labels_never_leak_markup(label in "[a-z<>&'\" ]{1,40}") {
        let source = format!("graph TD\nA[{label}] --> B");
        if let Ok(diagram) = render_mermaid(&source) {
            let svg = diagram.svg();
            let text_start = svg.find(r#"data-layer="text""#).unwrap();
            let text_layer = &svg[text_start..];
            prop_assert!(!text_layer.contains("<script"));
            prop_assert!(!text_layer.contains('\''));
        }
    }
}
