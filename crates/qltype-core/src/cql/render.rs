//! CQL rendering.

use std::fmt;

use crate::kind::DataKind;
use crate::node::{TypeNode, UdtRef};

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(udt) = self.udt() {
            return udt.fmt(f);
        }
        let Some(name) = self.kind().cql_name() else {
            return Err(fmt::Error);
        };
        f.write_str(name)?;
        if let Some((first, rest)) = self.params().split_first() {
            write!(f, "<{first}")?;
            for param in rest {
                write!(f, ", {param}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

impl fmt::Display for UdtRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_qualified() {
            write_ident(f, self.namespace())?;
            f.write_str(".")?;
        }
        write_ident(f, self.name())
    }
}

/// Write an identifier, quoting it when a bare spelling would not read back
/// as the same name.
fn write_ident(f: &mut fmt::Formatter<'_>, ident: &str) -> fmt::Result {
    if is_bare_ident(ident) {
        return f.write_str(ident);
    }
    write!(f, "\"{}\"", ident.replace('"', "\"\""))
}

fn is_bare_ident(ident: &str) -> bool {
    let mut chars = ident.chars();
    let head_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c == '_');
    head_ok
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        && DataKind::from_cql_name(ident).is_none()
}
