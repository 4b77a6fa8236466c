use std::fmt::{Error, Result, Write as _};

use crate::{
    composite::{Composite, Field},
    notation::{TypeInfo, TypeNotation},
    restricted::Restricted,
    schema::Schema,
};

/// Format a schema in dependency order, one block per type notation:
/// a header line with the kind and name, followed by its descriptor and
/// structure indented by four spaces.
pub fn format_schema(schema: &Schema) -> std::result::Result<String, Error> {
    format_notations(schema.ordered())
}

/// Format notations in the order given.
pub fn format_notations<'a>(
    notations: impl IntoIterator<Item = &'a TypeNotation>,
) -> std::result::Result<String, Error> {
    let mut out = String::new();
    for notation in notations {
        format_notation(notation, &mut out)?;
    }
    Ok(out)
}

fn format_notation(notation: &TypeNotation, out: &mut String) -> Result {
    writeln!(out, "{} {}", notation.kind(), notation.name())?;
    format_info(notation.info(), out)?;

    match notation {
        TypeNotation::Composite(c) => format_composite(c, out),
        TypeNotation::Restricted(Restricted::List(l)) => {
            writeln!(out, "    of: {}", l.list_of())
        }
        TypeNotation::Restricted(Restricted::Map(m)) => {
            let (key, value) = m.map_of();
            writeln!(out, "    key: {key}")?;
            writeln!(out, "    value: {value}")
        }
        TypeNotation::Restricted(Restricted::Enum(e)) => {
            writeln!(out, "    choices: [{}]", e.labels().collect::<Vec<_>>().join(", "))
        }
    }
}

fn format_info(info: &TypeInfo, out: &mut String) -> Result {
    writeln!(out, "    descriptor: {}", info.descriptor)?;
    if let Some(label) = &info.label {
        writeln!(out, "    label: {label}")?;
    }
    if !info.provides.is_empty() {
        writeln!(out, "    provides: [{}]", info.provides.join(", "))?;
    }
    Ok(())
}

fn format_composite(composite: &Composite, out: &mut String) -> Result {
    if composite.fields().is_empty() {
        return writeln!(out, "    fields: []");
    }
    writeln!(out, "    fields:")?;
    for field in composite.fields() {
        format_field(field, out)?;
    }
    Ok(())
}

fn format_field(field: &Field, out: &mut String) -> Result {
    write!(out, "        {}: {{ type: {}", field.name, field.type_name)?;
    if !field.requires.is_empty() {
        write!(out, ", requires: [{}]", field.requires.join(", "))?;
    }
    if let Some(default) = &field.default {
        write!(out, ", default: {default}")?;
    }
    writeln!(
        out,
        ", mandatory: {}, multiple: {} }}",
        field.mandatory, field.multiple
    )
}
