//! Ivy growth demo utility
//!
//! Grows an ivy patch over a procedural noise heightfield and exports the
//! result as Wavefront OBJ files (one for the vines, one for the leaves).
//!
//! Usage:
//!     grow_ivy [OPTIONS] <OUTPUT_DIR>
//!
//! Options:
//!     --seed <SEED>           RNG and terrain seed (default: 12345)
//!     -b, --branches <N>      Branches to grow (default: from settings)
//!     -n, --segments <N>      Growth iterations per branch (default: from settings)
//!     --settings <FILE>       Load growth settings from a JSON file
//!     --no-leaves             Skip leaf placement
//!     -h, --help              Show this help message

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use glam::{Mat4, Vec2, Vec3};

use ivygen::core::logging;
use ivygen::growth::{GrowthConfig, IvyGenerator};
use ivygen::math::Ray;
use ivygen::mesh::{self, MeshData};
use ivygen::surface::{HeightfieldParams, HeightfieldSurface};

fn print_help() {
    eprintln!("grow_ivy - Ivy growth demo utility");
    eprintln!();
    eprintln!("Usage: grow_ivy [OPTIONS] <OUTPUT_DIR>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("    --seed <SEED>           RNG and terrain seed (default: 12345)");
    eprintln!("    -b, --branches <N>      Branches to grow (default: from settings)");
    eprintln!("    -n, --segments <N>      Growth iterations per branch (default: from settings)");
    eprintln!("    --settings <FILE>       Load growth settings from a JSON file");
    eprintln!("    --no-leaves             Skip leaf placement");
    eprintln!("    -h, --help              Show this help message");
    eprintln!();
    eprintln!("Example:");
    eprintln!("    grow_ivy --seed 42 -b 8 ./out");
}

#[derive(Debug)]
struct Args {
    output_dir: PathBuf,
    seed: u64,
    branches: Option<u32>,
    segments: Option<u32>,
    settings: Option<PathBuf>,
    no_leaves: bool,
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        return Err("Missing output directory".to_string());
    }

    let mut seed: u64 = 12345;
    let mut branches: Option<u32> = None;
    let mut segments: Option<u32> = None;
    let mut settings: Option<PathBuf> = None;
    let mut no_leaves = false;
    let mut output_dir: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --seed".to_string());
                }
                seed = args[i].parse().map_err(|_| format!("Invalid seed: {}", args[i]))?;
            }
            "-b" | "--branches" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --branches".to_string());
                }
                branches = Some(args[i].parse().map_err(|_| format!("Invalid count: {}", args[i]))?);
            }
            "-n" | "--segments" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --segments".to_string());
                }
                segments = Some(args[i].parse().map_err(|_| format!("Invalid count: {}", args[i]))?);
            }
            "--settings" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --settings".to_string());
                }
                settings = Some(PathBuf::from(&args[i]));
            }
            "--no-leaves" => {
                no_leaves = true;
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option: {}", arg));
            }
            path => {
                if output_dir.is_some() {
                    return Err("Multiple output directories specified".to_string());
                }
                output_dir = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    let output_dir = output_dir.ok_or("Missing output directory")?;

    Ok(Args {
        output_dir,
        seed,
        branches,
        segments,
        settings,
        no_leaves,
    })
}

/// Small flat quad standing in for a leaf prefab
fn leaf_quad(size: f32) -> MeshData {
    let half = size / 2.0;
    MeshData {
        positions: vec![
            Vec3::new(-half, 0.0, 0.0),
            Vec3::new(half, 0.0, 0.0),
            Vec3::new(-half, 0.0, size),
            Vec3::new(half, 0.0, size),
        ],
        normals: vec![Vec3::Y; 4],
        uvs: vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 1.0),
        ],
        indices: vec![0, 1, 2, 3, 2, 1],
    }
}

fn load_config(args: &Args) -> Result<GrowthConfig, String> {
    let mut config = match &args.settings {
        Some(path) => GrowthConfig::load(path).map_err(|e| e.to_string())?,
        None => GrowthConfig::default(),
    };
    if let Some(branches) = args.branches {
        config.branch_count = branches;
    }
    if let Some(segments) = args.segments {
        config.segment_count = segments;
    }
    if args.no_leaves {
        config.leaf_enabled = false;
    }
    Ok(config)
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_help();
            std::process::exit(1);
        }
    };

    logging::init();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            std::process::exit(1);
        }
    };

    println!("Ivy Growth Demo");
    println!("===============");
    println!("Output directory: {}", args.output_dir.display());
    println!("Seed: {}", args.seed);
    println!("Branches: {}", config.branch_count);
    println!("Segments per branch: {}", config.segment_count);
    println!("Leaves: {}", if config.leaf_enabled { "on" } else { "off" });
    println!();

    if let Err(e) = std::fs::create_dir_all(&args.output_dir) {
        eprintln!("Error creating output directory: {}", e);
        std::process::exit(1);
    }

    let surface = HeightfieldSurface::new(HeightfieldParams {
        seed: args.seed as u32,
        ..Default::default()
    });

    // Drop the seed straight down onto the terrain near the origin
    let seed_ray = Ray::new(
        Vec3::new(0.0, surface.params().height_scale + 10.0, 0.0),
        Vec3::NEG_Y,
    );

    let start = Instant::now();
    let mut generator = IvyGenerator::new(config, args.seed);
    let branches = generator.grow_patch(&surface, seed_ray);

    if branches.is_empty() {
        println!("No ivy grew; the seed ray never found the surface.");
        return;
    }

    let branch_parts: Vec<_> = branches.iter().map(|b| (&b.mesh, Mat4::IDENTITY)).collect();

    let quad = leaf_quad(0.25);
    let leaf_parts: Vec<_> = branches
        .iter()
        .flat_map(|b| b.leaves.iter().map(|leaf| (&quad, leaf.transform())))
        .collect();

    let (vine_mesh, leaf_mesh) = mesh::combine_all(&branch_parts, &leaf_parts);

    let vine_path = args.output_dir.join("ivy.obj");
    if let Err(e) = mesh::obj::write_obj(&vine_mesh, &vine_path, "ivy") {
        eprintln!("Error writing {}: {}", vine_path.display(), e);
        std::process::exit(1);
    }

    let mut leaf_path = None;
    if !leaf_mesh.is_empty() {
        let path = args.output_dir.join("leaves.obj");
        if let Err(e) = mesh::obj::write_obj(&leaf_mesh, &path, "leaves") {
            eprintln!("Error writing {}: {}", path.display(), e);
            std::process::exit(1);
        }
        leaf_path = Some(path);
    }

    let elapsed = start.elapsed();
    let total_points: usize = branches.iter().map(|b| b.path.len()).sum();
    let total_leaves: usize = branches.iter().map(|b| b.leaves.len()).sum();

    println!();
    println!("Summary:");
    println!("  Branches grown: {}/{}", branches.len(), generator.config().branch_count);
    println!("  Path waypoints: {}", total_points);
    println!("  Leaves placed: {}", total_leaves);
    println!("  Vine mesh: {} vertices, {} triangles -> {}",
             vine_mesh.vertex_count(),
             vine_mesh.triangle_count(),
             vine_path.display());
    if let Some(path) = leaf_path {
        println!("  Leaf mesh: {} vertices, {} triangles -> {}",
                 leaf_mesh.vertex_count(),
                 leaf_mesh.triangle_count(),
                 path.display());
    }
    println!("  Total time: {:.2}s", elapsed.as_secs_f64());
}
