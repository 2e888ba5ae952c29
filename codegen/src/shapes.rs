//! Shape resolution: naming, Rust types, and module placement.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Result, bail};
use heck::{ToPascalCase, ToSnakeCase};

use crate::model::{Member, ServiceModel, Shape};

/// Identifiers that must be written as raw identifiers.
const RUST_KEYWORDS: &[&str] = &[
    "type", "return", "match", "ref", "self", "move", "loop", "impl", "fn", "mod", "use", "where",
    "in", "for", "const", "static", "async", "await", "dyn", "box", "override",
];

/// Module a structure is generated into, ordered by module name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Module {
    /// Request shapes.
    Input,
    /// `*Result` shapes.
    Output,
    /// Shapes shared between requests and responses.
    Types,
}

impl Module {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Types => "types",
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

/// A field of a generated struct.
#[derive(Debug, Clone)]
pub struct FieldInfo {
    /// Rust field name (snake_case, raw identifier for keywords).
    pub rust_name: String,
    /// Field type; lists are `Vec<T>`, everything else `Option<T>`.
    pub rust_type: String,
    /// Wire name from the model.
    pub location_name: String,
}

impl FieldInfo {
    pub fn is_list(&self) -> bool {
        self.rust_type.starts_with("Vec<")
    }

    /// Name used as the query key: the location name with a capital first letter.
    pub fn query_name(&self) -> String {
        let mut chars = self.location_name.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }

    fn sort_key(&self) -> &str {
        self.rust_name.trim_start_matches("r#")
    }
}

/// An operation of the client table.
#[derive(Debug, Clone)]
pub struct OperationInfo {
    /// Wire action name.
    pub name: String,
    /// Enum variant name.
    pub variant: String,
    /// Client method name.
    pub method: String,
    /// Input struct.
    pub input: String,
    /// Output struct and its module, if the action has a result document.
    pub output: Option<(Module, String)>,
}

/// The model, resolved into what the generator writes.
#[derive(Debug)]
pub struct ResolvedModel {
    pub api_version: String,
    pub xml_namespace: String,
    /// Operations sorted by name.
    pub operations: Vec<OperationInfo>,
    pub shared_structs: Vec<String>,
    pub input_structs: Vec<String>,
    pub output_structs: Vec<String>,
    /// Fields of every structure, keyed by shape name.
    pub fields: BTreeMap<String, Vec<FieldInfo>>,
    /// Module of every structure.
    pub module_of: BTreeMap<String, Module>,
    /// Structures reachable from a request.
    pub serialized: BTreeSet<String>,
    /// Structures reachable from a response.
    pub deserialized: BTreeSet<String>,
}

impl ResolvedModel {
    /// Fields in declaration order (sorted by Rust name).
    pub fn fields(&self, name: &str) -> &[FieldInfo] {
        self.fields.get(name).map_or(&[], Vec::as_slice)
    }
}

/// `IDs` and `IPs` read as one word each.
fn normalize(name: &str) -> String {
    name.replace("IDs", "Ids").replace("IPs", "Ips")
}

/// Convert a model name to PascalCase, folding acronyms (`VPC` becomes `Vpc`).
pub fn to_pascal_case(name: &str) -> String {
    normalize(name).to_pascal_case()
}

/// Convert a model name to a snake_case Rust identifier.
pub fn to_snake_case(name: &str) -> String {
    let snake = normalize(name).to_snake_case();
    if RUST_KEYWORDS.contains(&snake.as_str()) {
        format!("r#{snake}")
    } else {
        snake
    }
}

fn resolve_rust_type(model: &ServiceModel, name: &str) -> Result<String> {
    let Some(shape) = model.shapes.get(name) else {
        bail!("unknown shape {name}");
    };
    let ty = match shape {
        Shape::String => "String".to_owned(),
        Shape::Boolean => "bool".to_owned(),
        Shape::Integer => "i32".to_owned(),
        Shape::Long => "i64".to_owned(),
        Shape::Double => "f64".to_owned(),
        Shape::Float => "f32".to_owned(),
        Shape::Timestamp => "chrono::DateTime<chrono::Utc>".to_owned(),
        Shape::Blob => "Blob".to_owned(),
        Shape::List { member } => format!("Vec<{}>", resolve_rust_type(model, &member.shape)?),
        Shape::Structure { .. } => name.to_owned(),
    };
    Ok(ty)
}

fn resolve_field(model: &ServiceModel, name: &str, member: &Member) -> Result<FieldInfo> {
    let ty = resolve_rust_type(model, &member.shape)?;
    let rust_type = if ty.starts_with("Vec<") {
        ty
    } else {
        format!("Option<{ty}>")
    };
    Ok(FieldInfo {
        rust_name: to_snake_case(name),
        rust_type,
        location_name: member.location_name.clone(),
    })
}

/// Collect every structure transitively reachable from `name`.
fn collect_referenced_shapes(model: &ServiceModel, name: &str, acc: &mut BTreeSet<String>) {
    match model.shapes.get(name) {
        Some(Shape::List { member }) => collect_referenced_shapes(model, &member.shape, acc),
        Some(Shape::Structure { members }) => {
            if !acc.insert(name.to_owned()) {
                return;
            }
            for member in members.values() {
                collect_referenced_shapes(model, &member.shape, acc);
            }
        }
        _ => {}
    }
}

/// Resolve the model into generator input.
pub fn resolve_model(model: &ServiceModel) -> Result<ResolvedModel> {
    if model.metadata.protocol != "ec2" {
        bail!("unsupported protocol {}", model.metadata.protocol);
    }

    let input_structs: BTreeSet<String> = model
        .operations
        .values()
        .map(|op| op.input.shape.clone())
        .collect();
    let output_structs: BTreeSet<String> = model
        .operations
        .values()
        .filter_map(|op| op.output.as_ref())
        .map(|o| o.shape.clone())
        .filter(|s| s.ends_with("Result"))
        .collect();

    let mut serialized = BTreeSet::new();
    for input in &input_structs {
        collect_referenced_shapes(model, input, &mut serialized);
    }
    let mut deserialized = BTreeSet::new();
    for output in model.operations.values().filter_map(|op| op.output.as_ref()) {
        collect_referenced_shapes(model, &output.shape, &mut deserialized);
    }

    let mut fields = BTreeMap::new();
    let mut module_of = BTreeMap::new();
    let mut shared_structs = Vec::new();
    for (name, shape) in &model.shapes {
        let Shape::Structure { members } = shape else {
            continue;
        };
        let mut resolved = members
            .iter()
            .map(|(member_name, member)| resolve_field(model, member_name, member))
            .collect::<Result<Vec<_>>>()?;
        resolved.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
        fields.insert(name.clone(), resolved);

        let module = if input_structs.contains(name) {
            Module::Input
        } else if output_structs.contains(name) {
            Module::Output
        } else {
            shared_structs.push(name.clone());
            Module::Types
        };
        module_of.insert(name.clone(), module);
    }

    let mut operations = Vec::with_capacity(model.operations.len());
    for op in model.operations.values() {
        let output = match &op.output {
            Some(o) => {
                let Some(module) = module_of.get(&o.shape) else {
                    bail!("output of {} is not a structure: {}", op.name, o.shape);
                };
                Some((*module, o.shape.clone()))
            }
            None => None,
        };
        operations.push(OperationInfo {
            name: op.name.clone(),
            variant: to_pascal_case(&op.name),
            method: to_snake_case(&op.name),
            input: op.input.shape.clone(),
            output,
        });
    }

    Ok(ResolvedModel {
        api_version: model.metadata.api_version.clone(),
        xml_namespace: model.metadata.xml_namespace.clone(),
        operations,
        shared_structs,
        input_structs: input_structs.into_iter().collect(),
        output_structs: output_structs.into_iter().collect(),
        fields,
        module_of,
        serialized,
        deserialized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_split_acronyms() {
        assert_eq!(to_snake_case("InstanceIds"), "instance_ids");
        assert_eq!(to_snake_case("VpcPeeringConnectionIDs"), "vpc_peering_connection_ids");
        assert_eq!(to_snake_case("DescribeVPCAttribute"), "describe_vpc_attribute");
        assert_eq!(to_snake_case("Type"), "r#type");
        assert_eq!(to_pascal_case("EbsBlockDevice"), "EbsBlockDevice");
        assert_eq!(to_pascal_case("ImportVM"), "ImportVm");
    }

    #[test]
    fn test_should_keep_digits_with_words() {
        assert_eq!(to_snake_case("S3Prefix"), "s3_prefix");
        assert_eq!(to_snake_case("Ipv6Address"), "ipv6_address");
        assert_eq!(to_snake_case("EC2Tag"), "ec2_tag");
    }

    #[test]
    fn test_should_fold_plural_acronyms() {
        assert_eq!(to_pascal_case("PublicIPs"), "PublicIps");
        assert_eq!(to_snake_case("PublicIPs"), "public_ips");
        assert_eq!(to_pascal_case("AllocationIDs"), "AllocationIds");
    }
}
