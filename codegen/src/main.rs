//! EC2 model code generator.
//!
//! Reads the botocore-style EC2 JSON model and generates the Rust sources of
//! the `awsbind-ec2-model` crate, plus the operation table of `awsbind-ec2`.
//!
//! ```text
//! cargo run -- models/ec2-2014-10-01.json ../crates/awsbind-ec2-model/src ../crates/awsbind-ec2/src
//! ```

mod codegen;
mod model;
mod shapes;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let model_path = args
        .get(1)
        .map_or_else(|| PathBuf::from("models/ec2-2014-10-01.json"), PathBuf::from);

    let model_dir = args.get(2).map_or_else(
        || PathBuf::from("../crates/awsbind-ec2-model/src"),
        PathBuf::from,
    );

    let client_dir = args
        .get(3)
        .map_or_else(|| PathBuf::from("../crates/awsbind-ec2/src"), PathBuf::from);

    eprintln!("Reading model from: {}", model_path.display());

    let model_json = fs::read_to_string(&model_path)
        .with_context(|| format!("Failed to read model file: {}", model_path.display()))?;

    let service_model: model::ServiceModel =
        serde_json::from_str(&model_json).context("Failed to parse JSON model")?;

    eprintln!("Parsed model: {} shapes", service_model.shapes.len());

    let resolved = shapes::resolve_model(&service_model).context("Failed to resolve model")?;

    eprintln!(
        "Resolved: {} operations, {} shared structs, {} input structs, {} output structs",
        resolved.operations.len(),
        resolved.shared_structs.len(),
        resolved.input_structs.len(),
        resolved.output_structs.len(),
    );

    let mut files: Vec<(PathBuf, String)> = codegen::generate_model(&resolved)
        .context("Failed to generate model")?
        .into_iter()
        .map(|(name, content)| (model_dir.join(name), content))
        .collect();
    files.push((
        client_dir.join("operations.rs"),
        codegen::generate_client_table(&resolved)?,
    ));

    for (path, content) in &files {
        ensure_parent_dir(path)?;
        let content = format!("{}\n", content.trim_end_matches('\n'));
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!("  Wrote: {}", path.display());
    }

    eprintln!("Code generation complete. {} files written.", files.len());

    Ok(())
}

/// Ensure the parent directory of a path exists.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}
