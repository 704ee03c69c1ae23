//! Human-readable tree dump of a descriptor.
//!
//! One node per line, children indented by two spaces. Map children are
//! labelled `key:` and `value:`; user-defined types show both halves of the
//! reference quoted, so an empty keyspace stays visible.

use std::fmt::{self, Write as _};

use crate::kind::DataKind;
use crate::node::TypeNode;

/// How [`dump`] decorates its output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpStyle {
    #[default]
    Plain,
    /// ANSI SGR colors; `key:`/`value:` labels are dimmed.
    Ansi,
}

impl DumpStyle {
    pub fn new(colored: bool) -> Self {
        if colored { Self::Ansi } else { Self::Plain }
    }

    pub fn is_colored(self) -> bool {
        self == Self::Ansi
    }

    fn paint(self, out: &mut String, part: Part, text: fmt::Arguments<'_>) {
        let _ = match self {
            Self::Plain => out.write_fmt(text),
            Self::Ansi => write!(out, "\x1b[{}m{}\x1b[0m", part.sgr(), text),
        };
    }
}

#[derive(Clone, Copy)]
enum Part {
    Kind,
    Udt,
    Label,
}

impl Part {
    fn sgr(self) -> &'static str {
        match self {
            Part::Kind => "34",
            Part::Udt => "32",
            Part::Label => "2",
        }
    }
}

/// Render `node` as an indented tree.
pub fn dump(node: &TypeNode, style: DumpStyle) -> String {
    let mut out = String::new();
    dump_node(&mut out, node, 0, None, style);
    out
}

fn dump_node(out: &mut String, node: &TypeNode, depth: usize, label: Option<&str>, style: DumpStyle) {
    out.push_str(&"  ".repeat(depth));
    if let Some(label) = label {
        style.paint(out, Part::Label, format_args!("{label}:"));
        out.push(' ');
    }
    style.paint(out, Part::Kind, format_args!("{}", node.kind().wire_name()));
    if let Some(udt) = node.udt() {
        out.push(' ');
        style.paint(
            out,
            Part::Udt,
            format_args!("keyspace={:?} name={:?}", udt.namespace(), udt.name()),
        );
    }
    out.push('\n');

    let labels: &[&str] = match node.kind() {
        DataKind::Map => &["key", "value"],
        _ => &[],
    };
    for (i, param) in node.params().iter().enumerate() {
        dump_node(out, param, depth + 1, labels.get(i).copied(), style);
    }
}
