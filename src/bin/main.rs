//! sdf-sculpt CLI
//!
//! Command-line interface for inspecting and meshing SDF trees.

#![allow(clippy::needless_pass_by_value, clippy::cast_precision_loss)]

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use sdf_sculpt::io::get_info;
#[cfg(feature = "cli")]
use sdf_sculpt::prelude::*;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "sdf-sculpt")]
#[command(version = sdf_sculpt::VERSION)]
#[command(about = "Constructive SDF modeling and polygonization", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Display file information
    Info {
        /// Input file (.sdf.json)
        file: PathBuf,
    },

    /// Create a demo SDF file
    Demo {
        /// Output file
        #[arg(short, long, default_value = "demo.sdf.json")]
        output: PathBuf,
    },

    /// Polygonize a tree and report mesh statistics
    Mesh {
        /// Input SDF file
        input: PathBuf,
        /// Lattice points per axis
        #[arg(short, long, default_value = "64")]
        resolution: u32,
        /// Half-extent of the cubic bounds
        #[arg(short, long, default_value = "2.0")]
        bounds: f32,
    },

    /// Benchmark field evaluation throughput
    Bench {
        /// Input SDF file (demo shape if omitted)
        file: Option<PathBuf>,
        /// Number of sample points
        #[arg(short, long, default_value = "1000000")]
        points: usize,
    },
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { file } => cmd_info(file),
        Commands::Demo { output } => cmd_demo(output),
        Commands::Mesh {
            input,
            resolution,
            bounds,
        } => cmd_mesh(input, resolution, bounds),
        Commands::Bench { file, points } => cmd_bench(file, points),
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI not enabled. Build with --features cli");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn load_or_exit(path: &std::path::Path) -> SdfTree {
    match load(path) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Load error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "cli")]
fn demo_shape() -> SdfNode {
    use std::f32::consts::FRAC_PI_2;

    SdfNode::sphere(Vec3::ZERO, 1.0)
        .smooth_subtract(SdfNode::box_centered(Vec3::ZERO, Vec3::splat(0.75)), 0.1)
        .smooth_union(SdfNode::cylinder(0.3, 1.5), 0.1)
        .smooth_union(SdfNode::cylinder(0.3, 1.5).rotate_x(FRAC_PI_2), 0.1)
        .smooth_union(SdfNode::cylinder(0.3, 1.5).rotate_z(FRAC_PI_2), 0.1)
}

#[cfg(feature = "cli")]
fn cmd_info(path: PathBuf) {
    match get_info(&path) {
        Ok(info) => println!("{}", info),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "cli")]
fn cmd_demo(output: PathBuf) {
    let tree = SdfTree::new(demo_shape());

    match save(&tree, &output) {
        Ok(()) => println!(
            "Created demo SDF with {} nodes at {}",
            tree.node_count(),
            output.display()
        ),
        Err(e) => {
            eprintln!("Save error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "cli")]
fn cmd_mesh(input: PathBuf, resolution: u32, bounds: f32) {
    let tree = load_or_exit(&input);
    if let Err(e) = SdfError::check_resolution(resolution as usize, 2) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let counter = EvalCounter::new();
    let start = std::time::Instant::now();
    let mesh = tree.polygonize_counted(resolution, &Aabb::cube(bounds), &counter);
    let elapsed = start.elapsed();

    println!("Resolution: {}", resolution);
    println!("Vertices: {}", mesh.vertex_count());
    println!("Triangles: {}", mesh.triangle_count());
    println!("Evaluations: {}", counter.get());
    println!("Time: {:.3}ms", elapsed.as_secs_f64() * 1000.0);
}

#[cfg(feature = "cli")]
fn cmd_bench(file: Option<PathBuf>, points: usize) {
    let tree = match file {
        Some(path) => load_or_exit(&path),
        None => SdfTree::new(demo_shape()),
    };

    println!("=== Evaluation Benchmark ===");
    println!("Points: {}", points);
    println!("Node count: {}", tree.node_count());
    println!("Threads: {}", rayon::current_num_threads());

    // Deterministic lattice through [-2, 2]^3
    let side = (points as f64).cbrt().ceil().max(1.0) as usize;
    let step = 4.0 / side as f32;
    let samples: Vec<Vec3> = (0..points)
        .map(|i| {
            let (x, y, z) = (i % side, (i / side) % side, i / (side * side));
            Vec3::new(x as f32, y as f32, z as f32) * step - Vec3::splat(2.0)
        })
        .collect();

    let start = std::time::Instant::now();
    let serial = eval_batch(&tree, &samples);
    let serial_time = start.elapsed().as_secs_f64();

    let start = std::time::Instant::now();
    let parallel = eval_batch_parallel(&tree, &samples);
    let parallel_time = start.elapsed().as_secs_f64();

    let inside = parallel.iter().filter(|&&d| d < 0.0).count();
    let mismatches = serial.iter().zip(&parallel).filter(|(a, b)| a != b).count();

    println!("\n--- Results ---");
    println!(
        "Serial  : {:.3}ms ({:.2} M points/s)",
        serial_time * 1000.0,
        points as f64 / serial_time / 1e6
    );
    println!(
        "Parallel: {:.3}ms ({:.2} M points/s)",
        parallel_time * 1000.0,
        points as f64 / parallel_time / 1e6
    );
    println!("Inside: {} / {}", inside, points);
    println!("Serial/parallel mismatches: {}", mismatches);
}
