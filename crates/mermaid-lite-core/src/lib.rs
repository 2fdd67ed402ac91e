//! mermaid-lite Core Types and Definitions
//!
//! This crate provides the foundational types shared by the mermaid-lite
//! parser and renderer. It includes:
//!
//! - **Colors**: CSS color handling ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Semantic**: The graph models built by the parser ([`semantic`] module)
//! - **Label**: Label truncation, wrapping and XML escaping ([`label`] module)
//! - **Draw**: Layered SVG drawables for boxes, arrows and lifelines ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod label;
pub mod semantic;
