//! Text rendering of builder output.
//!
//! Builders produce structured descriptions; everything here turns those into
//! TypeScript source. Each node type implements [`Render`] so that pieces
//! compose (a client function renders its parameters, a schema entry renders
//! its directive chain).

mod client;
mod handler;
mod index;
mod zod;

pub use index::{IndexEntry, OperationIndex};

use crate::builder::FunctionParam;

/// Convert a description to its source text.
pub trait Render {
    /// Source text of `self`.
    fn render(&self) -> String;
}

impl Render for FunctionParam {
    fn render(&self) -> String {
        let optional = if !self.required && self.default.is_none() {
            "?"
        } else {
            ""
        };
        let mut out = format!("{}{optional}", self.name);
        if let Some(ty) = &self.ty {
            out.push_str(": ");
            out.push_str(ty);
        }
        if let Some(default) = &self.default {
            out.push_str(" = ");
            out.push_str(default);
        }
        out
    }
}

/// JSDoc block for `lines`, empty when there are none.
pub(crate) fn render_doc_comment(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut out = String::from("/**\n");
    for line in lines {
        out.push_str(" * ");
        out.push_str(&line.replace("*/", "*\\/"));
        out.push('\n');
    }
    out.push_str(" */\n");
    out
}
