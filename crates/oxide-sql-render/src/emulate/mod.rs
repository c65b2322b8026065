//! Rewrites of constructs a dialect cannot express directly.
//!
//! Each submodule implements [`Render`](crate::render::Render) for one
//! construct. The construct looks up its support level in the capability
//! registry and either writes native syntax or builds an equivalent tree out
//! of primitive nodes, which is then visited through the same context. The
//! rewrite builders are public so the rewritten trees can be inspected
//! without rendering.

pub mod overlay;
pub mod row_compare;
