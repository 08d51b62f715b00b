//! Rendering of model constructs into ent schema Go source.
//!
//! Rendering happens in two steps. [`EntitySchema::build`] decides, field by
//! field and relation by relation, what gets declared: it produces typed
//! [`FieldDecl`] and [`EdgeDecl`] values, dropping what has no ent
//! counterpart. [`SchemaTemplate`] then lays those declarations out in a
//! fixed Go file template.
//!
//! # Fragments
//!
//! ```text
//! field.String("name")
//! field.Bool("active").Optional().Default(true)
//! field.JSON("meta", map[string]interface{}{})
//! field.Enum("status").Values("DRAFT","PUBLISHED").Default("DRAFT")
//! edge.To("author", User.Type)
//! ```

mod edge;
mod entity;
mod field;

pub use edge::EdgeDecl;
pub use entity::{EntitySchema, SchemaTemplate};
pub use field::{DefaultLiteral, FieldDecl, Modifier};

pub(crate) use edge::render_edge;
pub(crate) use field::render_field;

/// Quote `s` as a Go interpreted string literal.
pub(crate) fn go_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
