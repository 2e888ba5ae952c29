//! Rust code generation from the resolved EC2 model.
//!
//! Produces the source files of `awsbind-ec2-model` plus the operation table
//! that `awsbind-ec2` expands into client methods.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use anyhow::Result;

use crate::shapes::{Module, ResolvedModel};

/// Header comment placed at the top of every generated file.
const FILE_HEADER: &str = "//! Auto-generated from the Amazon EC2 2014-10-01 API model. DO NOT EDIT.";

/// Maximum width of a generated `use` line.
const MAX_WIDTH: usize = 100;

/// Generate the model crate sources, keyed by file name.
pub fn generate_model(resolved: &ResolvedModel) -> Result<BTreeMap<String, String>> {
    let mut files = BTreeMap::new();

    files.insert(
        "types.rs".to_owned(),
        generate_structs(resolved, &resolved.shared_structs, Module::Types)?,
    );
    files.insert(
        "input.rs".to_owned(),
        generate_structs(resolved, &resolved.input_structs, Module::Input)?,
    );
    files.insert(
        "output.rs".to_owned(),
        generate_structs(resolved, &resolved.output_structs, Module::Output)?,
    );
    files.insert("operations.rs".to_owned(), generate_operations(resolved)?);
    files.insert("serialize.rs".to_owned(), generate_serialize(resolved)?);
    files.insert("deserialize.rs".to_owned(), generate_deserialize(resolved)?);
    files.insert("lib.rs".to_owned(), generate_lib(resolved)?);

    Ok(files)
}

/// Generate the `ec2_operations!` invocation used by the client crate.
pub fn generate_client_table(resolved: &ResolvedModel) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{FILE_HEADER}")?;
    writeln!(out, "//!")?;
    writeln!(out, "//! One client method per EC2 action.")?;
    writeln!(out)?;
    writeln!(out, "use awsbind_ec2_model::{{input, output, types}};")?;
    writeln!(out)?;
    writeln!(out, "use crate::client::ec2_operations;")?;
    writeln!(out)?;
    writeln!(out, "ec2_operations! {{")?;
    for op in &resolved.operations {
        write!(
            out,
            "    {} => {}(input::{})",
            op.method, op.variant, op.input
        )?;
        if let Some((module, output)) = &op.output {
            write!(out, " -> {}::{output}", module.as_str())?;
        }
        writeln!(out, ";")?;
    }
    writeln!(out, "}}")?;
    Ok(out)
}

/// Wrap a braced `use` line the way rustfmt does.
fn wrap_use(line: &str) -> Vec<String> {
    if line.len() <= MAX_WIDTH {
        return vec![line.to_owned()];
    }
    let Some((head, rest)) = line.split_once('{') else {
        return vec![line.to_owned()];
    };
    let mut lines = vec![format!("{head}{{")];
    let mut current = "   ".to_owned();
    for item in rest.trim_end_matches("};").split(", ") {
        let piece = format!(" {item},");
        if current.len() + piece.len() > MAX_WIDTH {
            lines.push(std::mem::replace(&mut current, "   ".to_owned()));
        }
        current.push_str(&piece);
    }
    lines.push(current);
    lines.push("};".to_owned());
    lines
}

/// Cross-module structures referenced by `names`, and whether a blob is used.
fn collect_type_references(
    resolved: &ResolvedModel,
    names: &[String],
    module: Module,
) -> (BTreeMap<Module, BTreeSet<String>>, bool) {
    let mut refs: BTreeMap<Module, BTreeSet<String>> = BTreeMap::new();
    let mut blob = false;
    for name in names {
        for field in resolved.fields(name) {
            let inner = field
                .rust_type
                .trim_start_matches("Vec<")
                .trim_start_matches("Option<")
                .trim_end_matches('>');
            if inner == "Blob" {
                blob = true;
            }
            if let Some(target) = resolved.module_of.get(inner) {
                if *target != module {
                    refs.entry(*target).or_default().insert(inner.to_owned());
                }
            }
        }
    }
    (refs, blob)
}

fn generate_structs(resolved: &ResolvedModel, names: &[String], module: Module) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{FILE_HEADER}")?;
    writeln!(out)?;
    writeln!(out, "use serde::{{Deserialize, Serialize}};")?;
    writeln!(out)?;

    let (refs, blob) = collect_type_references(resolved, names, module);
    if blob {
        writeln!(out, "use awsbind_query::Blob;")?;
        writeln!(out)?;
    }
    for (target, items) in &refs {
        let items: Vec<&str> = items.iter().map(String::as_str).collect();
        let line = if let [single] = items.as_slice() {
            format!("use crate::{}::{single};", target.as_str())
        } else {
            format!("use crate::{}::{{{}}};", target.as_str(), items.join(", "))
        };
        for l in wrap_use(&line) {
            writeln!(out, "{l}")?;
        }
    }
    if !refs.is_empty() {
        writeln!(out)?;
    }

    for name in names {
        writeln!(out, "/// EC2 {name}.")?;
        writeln!(out, "#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]")?;
        writeln!(out, "#[serde(rename_all = \"PascalCase\", default)]")?;
        writeln!(out, "pub struct {name} {{")?;
        for field in resolved.fields(name) {
            match module {
                Module::Input => writeln!(out, "    /// Query parameter: `{}`.", field.query_name())?,
                Module::Output => writeln!(out, "    /// XML element: `{}`.", field.location_name)?,
                Module::Types => {}
            }
            let skip = if field.is_list() {
                "Vec::is_empty"
            } else {
                "Option::is_none"
            };
            writeln!(out, "    #[serde(skip_serializing_if = \"{skip}\")]")?;
            writeln!(out, "    pub {}: {},", field.rust_name, field.rust_type)?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;
    }

    Ok(out)
}

fn generate_operations(resolved: &ResolvedModel) -> Result<String> {
    let ops = &resolved.operations;
    let mut out = String::new();
    writeln!(out, "{FILE_HEADER}")?;
    writeln!(out)?;
    writeln!(out, "use std::fmt;")?;
    writeln!(out)?;
    writeln!(out, "/// All EC2 actions exposed by the {} API.", resolved.api_version)?;
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]")?;
    writeln!(out, "pub enum Ec2Operation {{")?;
    for op in ops {
        writeln!(out, "    /// The {} action.", op.name)?;
        writeln!(out, "    {},", op.variant)?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl Ec2Operation {{")?;
    writeln!(out, "    /// Every operation, in alphabetical order.")?;
    writeln!(out, "    pub const ALL: &[Self] = &[")?;
    for op in ops {
        writeln!(out, "        Self::{},", op.variant)?;
    }
    writeln!(out, "    ];")?;
    writeln!(out)?;

    writeln!(out, "    /// Returns the `Action` query parameter value.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn as_str(&self) -> &'static str {{")?;
    writeln!(out, "        match self {{")?;
    for op in ops {
        writeln!(out, "            Self::{} => \"{}\",", op.variant, op.name)?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(out, "    /// Parse an `Action` name into an `Ec2Operation`.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn from_name(name: &str) -> Option<Self> {{")?;
    writeln!(out, "        match name {{")?;
    for op in ops {
        writeln!(out, "            \"{}\" => Some(Self::{}),", op.name, op.variant)?;
    }
    writeln!(out, "            _ => None,")?;
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;

    writeln!(out, "    /// Whether the action returns a result document beyond `<return>`.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn has_output(&self) -> bool {{")?;
    writeln!(out, "        !matches!(")?;
    writeln!(out, "            self,")?;
    for (i, op) in ops.iter().filter(|op| op.output.is_none()).enumerate() {
        let sep = if i == 0 { "" } else { "| " };
        writeln!(out, "            {sep}Self::{}", op.variant)?;
    }
    writeln!(out, "        )")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl fmt::Display for Ec2Operation {{")?;
    writeln!(out, "    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {{")?;
    writeln!(out, "        f.write_str(self.as_str())")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    Ok(out)
}

fn generate_serialize(resolved: &ResolvedModel) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{FILE_HEADER}")?;
    writeln!(out, "//!")?;
    writeln!(out, "//! EC2 query serialization for every shape reachable from a request.")?;
    writeln!(out)?;
    writeln!(out, "use awsbind_query::{{QueryParams, QuerySerialize, member_key}};")?;
    writeln!(out)?;
    writeln!(out, "use crate::{{input, types}};")?;
    writeln!(out)?;

    for name in &resolved.serialized {
        let module = resolved.module_of[name].as_str();
        let fields = resolved.fields(name);
        writeln!(out, "impl QuerySerialize for {module}::{name} {{")?;
        if fields.is_empty() {
            writeln!(
                out,
                "    fn serialize_query(&self, _prefix: &str, _params: &mut QueryParams) {{}}"
            )?;
        } else {
            writeln!(
                out,
                "    fn serialize_query(&self, prefix: &str, params: &mut QueryParams) {{"
            )?;
            for field in fields {
                writeln!(out, "        self.{}", field.rust_name)?;
                writeln!(
                    out,
                    "            .serialize_query(&member_key(prefix, \"{}\"), params);",
                    field.query_name()
                )?;
            }
            writeln!(out, "    }}")?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;
    }

    Ok(out)
}

fn generate_deserialize(resolved: &ResolvedModel) -> Result<String> {
    let modules: BTreeSet<&str> = resolved
        .deserialized
        .iter()
        .map(|n| resolved.module_of[n].as_str())
        .collect();
    let modules: Vec<&str> = modules.into_iter().collect();

    let mut out = String::new();
    writeln!(out, "{FILE_HEADER}")?;
    writeln!(out, "//!")?;
    writeln!(out, "//! EC2 XML deserialization for every shape reachable from a response.")?;
    writeln!(out)?;
    writeln!(
        out,
        "use awsbind_query::{{Ec2Deserialize, Reader, XmlError, read_members, read_value, skip_element}};"
    )?;
    writeln!(out)?;
    writeln!(out, "use crate::{{{}}};", modules.join(", "))?;
    writeln!(out)?;

    for name in &resolved.deserialized {
        let module = resolved.module_of[name].as_str();
        writeln!(out, "impl Ec2Deserialize for {module}::{name} {{")?;
        writeln!(
            out,
            "    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {{"
        )?;
        let mut fields: Vec<_> = resolved.fields(name).iter().collect();
        if fields.is_empty() {
            writeln!(out, "        read_members(reader, |reader, _| skip_element(reader))?;")?;
            writeln!(out, "        Ok(Self::default())")?;
        } else {
            fields.sort_by(|a, b| a.location_name.cmp(&b.location_name));
            writeln!(out, "        let mut out = Self::default();")?;
            writeln!(out, "        read_members(reader, |reader, name| {{")?;
            writeln!(out, "            match name {{")?;
            for field in fields {
                let value = if field.is_list() {
                    "read_value(reader)?"
                } else {
                    "Some(read_value(reader)?)"
                };
                writeln!(
                    out,
                    "                \"{}\" => out.{} = {value},",
                    field.location_name, field.rust_name
                )?;
            }
            writeln!(out, "                _ => skip_element(reader)?,")?;
            writeln!(out, "            }}")?;
            writeln!(out, "            Ok(())")?;
            writeln!(out, "        }})?;")?;
            writeln!(out, "        Ok(out)")?;
        }
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
        writeln!(out)?;
    }

    Ok(out)
}

fn generate_lib(resolved: &ResolvedModel) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{FILE_HEADER}")?;
    writeln!(out, "//!")?;
    writeln!(
        out,
        "//! Request, result, and shared shapes of the Amazon EC2 query API, together"
    )?;
    writeln!(out, "//! with their query-string serializers and XML deserializers.")?;
    writeln!(out, "#![allow(clippy::too_many_lines)]")?;
    writeln!(out, "#![allow(clippy::struct_excessive_bools)]")?;
    writeln!(out, "#![allow(missing_docs)]")?;
    writeln!(out)?;
    for module in [
        "deserialize",
        "error",
        "input",
        "operations",
        "output",
        "serialize",
        "types",
    ] {
        writeln!(out, "pub mod {module};")?;
    }
    writeln!(out)?;
    writeln!(out, "pub use error::Ec2ErrorCode;")?;
    writeln!(out, "pub use operations::Ec2Operation;")?;
    writeln!(out)?;
    writeln!(out, "/// Value of the `Version` parameter sent with every action.")?;
    writeln!(out, "pub const API_VERSION: &str = \"{}\";", resolved.api_version)?;
    writeln!(out)?;
    writeln!(out, "/// Namespace declared on every response document.")?;
    writeln!(out, "pub const XML_NAMESPACE: &str = \"{}\";", resolved.xml_namespace)?;
    writeln!(out)?;
    writeln!(
        out,
        "// Generated: {} operations, {} shared structs, {} input structs, {} output structs",
        resolved.operations.len(),
        resolved.shared_structs.len(),
        resolved.input_structs.len(),
        resolved.output_structs.len(),
    )?;
    writeln!(out)?;
    writeln!(out, "#[cfg(test)]")?;
    writeln!(out, "mod tests;")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_keep_short_use_lines() {
        assert_eq!(wrap_use("use crate::types::{A, B};"), vec!["use crate::types::{A, B};"]);
    }

    #[test]
    fn test_should_wrap_long_use_lines() {
        let items: Vec<String> = (0..30).map(|i| format!("SomeLongTypeName{i}")).collect();
        let line = format!("use crate::types::{{{}}};", items.join(", "));
        let wrapped = wrap_use(&line);
        assert_eq!(wrapped.first().map(String::as_str), Some("use crate::types::{"));
        assert_eq!(wrapped.last().map(String::as_str), Some("};"));
        assert!(wrapped.iter().all(|l| l.len() <= MAX_WIDTH));
        assert!(wrapped[1].starts_with("    SomeLongTypeName0,"));
    }
}
