//! Edge declarations.

use super::go_quote;
use crate::Field;
use std::fmt;

/// One entry of an entity's `Edges()` list: `edge.To("<name>", <Target>.Type)`.
///
/// Every relation becomes a one-directional `edge.To`, whichever side owns
/// the key and whatever the cardinality. Back-references (`edge.From(...).Ref`)
/// are not modeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeDecl {
    pub name: String,
    pub target: String,
}

impl fmt::Display for EdgeDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge.To({}, {}.Type)", go_quote(&self.name), self.target)
    }
}

pub(crate) fn render_edge(field: &Field) -> EdgeDecl {
    EdgeDecl {
        name: field.name.clone(),
        target: field.ty.clone(),
    }
}
