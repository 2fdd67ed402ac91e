//! mermaid-lite - render a subset of mermaid diagrams to inline SVG.
//!
//! Flowcharts (`flowchart`/`graph`) and sequence diagrams
//! (`sequenceDiagram`) are parsed best-effort, laid out on fixed geometry
//! and emitted as a self-contained `<svg>` fragment. Anything else is
//! reported as [`Unrenderable`] so the caller can show the source as code.
//!
//! ```
//! let diagram = mermaid_lite::render_mermaid("graph LR\n  A --> B").unwrap();
//! assert!(diagram.svg().starts_with("<svg"));
//!
//! let html = mermaid_lite::render_fenced_block("pie title Pets");
//! assert!(html.starts_with("<pre><code"));
//! ```

pub mod config;

mod error;
mod export;
mod layout;

pub use mermaid_lite_core::{color, draw, geometry, label, semantic};
pub use mermaid_lite_parser::ParseError;

pub use error::{MermaidError, Unrenderable};

use log::{debug, info, trace};

use config::AppConfig;
use export::Exporter;
use label::escape_xml;
use semantic::{DiagramKind, DiagramSource};

/// A rendered diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    kind: DiagramKind,
    width: f32,
    height: f32,
    svg: String,
}

impl Diagram {
    /// Which grammar produced this diagram.
    pub fn kind(&self) -> DiagramKind {
        self.kind
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The `<svg>...</svg>` markup.
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// Consumes the diagram, returning its markup.
    pub fn into_svg(self) -> String {
        self.svg
    }
}

/// Builder for parsing and rendering diagrams.
///
/// # Examples
///
/// ```
/// use mermaid_lite::{DiagramBuilder, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// let source = builder
///     .parse("sequenceDiagram\n  Alice->>Bob: Hello")
///     .expect("Failed to parse");
/// let diagram = builder.render_svg(&source).expect("Failed to render");
///
/// assert!(diagram.svg().contains("Hello"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse source text into a diagram model.
    ///
    /// # Errors
    ///
    /// Returns [`MermaidError::Parse`] when the source is empty, uses an
    /// unsupported grammar, or yields an empty graph.
    pub fn parse(&self, source: &str) -> Result<DiagramSource, MermaidError> {
        info!(bytes = source.len(); "Parsing diagram");

        let diagram = mermaid_lite_parser::parse(source)?;

        debug!(kind:% = diagram.kind(); "Diagram parsed successfully");
        trace!(diagram:?; "Parsed diagram");

        Ok(diagram)
    }

    /// Lay out a parsed diagram and render it to SVG.
    ///
    /// # Errors
    ///
    /// Returns [`MermaidError::Layout`] for inconsistent graphs and
    /// [`MermaidError::Export`] if the configured style is invalid or the
    /// document cannot be written.
    pub fn render_svg(&self, source: &DiagramSource) -> Result<Diagram, MermaidError> {
        let layout = layout::Layout::from_source(source)?;
        let size = layout.size();

        let background = self
            .config
            .style()
            .background_color()
            .map_err(export::Error::Render)?;
        let svg = export::svg::Svg::new()
            .with_background(background)
            .export_layout(&layout)?;

        info!(kind:% = source.kind(); "SVG rendered successfully");
        Ok(Diagram {
            kind: source.kind(),
            width: size.width(),
            height: size.height(),
            svg,
        })
    }

    /// Parse and render in one step.
    ///
    /// # Errors
    ///
    /// Any error from [`Self::parse`] or [`Self::render_svg`].
    pub fn render(&self, source: &str) -> Result<Diagram, MermaidError> {
        let diagram = self.parse(source)?;
        self.render_svg(&diagram)
    }
}

/// Renders diagram source with the default configuration.
///
/// # Errors
///
/// Returns [`Unrenderable`] for any source that is not a supported,
/// non-empty diagram. The caller should display the source as code.
pub fn render_mermaid(source: &str) -> Result<Diagram, Unrenderable> {
    DiagramBuilder::default()
        .render(source)
        .inspect_err(|err| debug!(err:%; "Diagram is not renderable"))
        .map_err(Unrenderable::from)
}

/// Renders the body of a fenced `mermaid` block for inline HTML.
///
/// Returns the SVG markup, or the escaped source wrapped in a
/// `<pre><code class="language-mermaid">` block when it cannot be rendered.
pub fn render_fenced_block(source: &str) -> String {
    match render_mermaid(source) {
        Ok(diagram) => diagram.into_svg(),
        Err(Unrenderable) => format!(
            r#"<pre><code class="language-mermaid">{}</code></pre>"#,
            escape_xml(source)
        ),
    }
}
