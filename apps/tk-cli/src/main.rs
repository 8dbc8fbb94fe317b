use clap::{Parser, Subcommand};
use nalgebra::Vector3;
use std::path::{Path, PathBuf};
use tk_creator::{NullWorld, StructureInfo};
use tk_gen::{
    ChainConfig, Document, GenResult, attach_mount_markers, build_chain, build_model, load_json,
    load_yaml, spine_build_spec, tetra_prototype,
};
use tk_model::Model;

#[derive(Parser)]
#[command(name = "tk-cli")]
#[command(about = "Tensekit CLI - tensegrity structure-to-model builder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a structure document (JSON or YAML)
    Validate {
        /// Path to the document
        document: PathBuf,
    },
    /// Build a model from a structure document and report its contents
    Build {
        /// Path to the document
        document: PathBuf,
    },
    /// Generate a tetra spine chain and report its statistics
    Chain {
        /// Number of segments
        #[arg(long, default_value_t = 6)]
        segments: usize,
        /// Prototype edge length
        #[arg(long, default_value_t = 38.1)]
        edge: f64,
        /// Translation between consecutive segments along -Z
        #[arg(long, default_value_t = 21.5)]
        spacing: f64,
    },
}

fn main() -> GenResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { document } => cmd_validate(&document),
        Commands::Build { document } => cmd_build(&document),
        Commands::Chain {
            segments,
            edge,
            spacing,
        } => cmd_chain(segments, edge, spacing),
    }
}

fn load_document(path: &Path) -> GenResult<Document> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => load_yaml(path),
        _ => load_json(path),
    }
}

fn cmd_validate(path: &Path) -> GenResult<()> {
    let document = load_document(path)?;
    println!("Document is valid: {}", path.display());
    println!("  Nodes:   {}", document.structure.nodes.len());
    println!("  Rods:    {}", document.structure.rods.len());
    println!("  Muscles: {}", document.structure.muscles.len());
    Ok(())
}

fn cmd_build(path: &Path) -> GenResult<()> {
    let document = load_document(path)?;
    let model = build_model(&document, &mut NullWorld)?;

    println!("Model built from {}", path.display());
    print_model(&model);
    Ok(())
}

fn cmd_chain(segments: usize, edge: f64, spacing: f64) -> GenResult<()> {
    let height = 3.0_f64.sqrt() / 2.0 * edge;
    let prototype = tetra_prototype(edge, height)?;
    let config = ChainConfig {
        segments,
        offset: Vector3::new(0.0, 0.0, -spacing),
    };

    let chain = build_chain(&prototype, &config)?;
    let spec = spine_build_spec()?;
    let mut model = Model::new();
    StructureInfo::new(&chain, &spec).build_into(&mut model, &mut NullWorld)?;
    let markers = attach_mount_markers(&chain, &mut model)?;

    println!("Chain with {segments} segments (edge {edge}, spacing {spacing})");
    println!("  Structure nodes: {}", chain.total_nodes());
    println!("  Structure pairs: {}", chain.total_pairs());
    print_model(&model);
    println!("  Markers:         {markers}");
    Ok(())
}

fn print_model(model: &Model) {
    println!("  Rigid links:     {}", model.rigids().len());
    println!("  Actuators:       {}", model.actuators().len());
    println!("  Total rod mass:  {:.4}", model.total_rigid_mass());
    for label in ["outer", "inner"] {
        let group = model.actuators_tagged(label);
        if !group.is_empty() {
            println!("  '{label}' actuators: {}", group.len());
        }
    }
}
