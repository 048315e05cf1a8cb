//! Wire3D Terminal - spinning fixed-point wireframes
//!
//! Renders a pulsing, rotating cube or torus into a 240x160 indexed-color
//! framebuffer and shows it in the terminal with half-block characters.
//!
//! # Usage
//!
//! ```bash
//! wire3d-terminal
//! wire3d-terminal --precision high --mesh torus
//! RUST_LOG=debug wire3d-terminal --log-file wire3d.log
//! ```
//!
//! # Controls
//!
//! - A / Space / Enter: Toggle cube and torus
//! - B / C: Toggle perspective and orthographic camera
//! - Q / ESC: Quit

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use wire3d_core::{FrameDriver, MeshKind, ProjectionMode, RenderConfig};
use wire3d_terminal::TerminalApp;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Precision {
    /// 8 fractional bits, 256 angle steps
    Standard,
    /// 12 fractional bits, 4096 angle steps
    High,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MeshArg {
    Cube,
    Torus,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CameraArg {
    Perspective,
    Orthographic,
}

#[derive(Parser)]
#[command(name = "wire3d-terminal")]
#[command(author, version, about = "Fixed-point wireframe renderer in the terminal")]
struct Args {
    /// Fixed-point preset
    #[arg(long, value_enum, default_value = "standard")]
    precision: Precision,

    /// Mesh shown at startup
    #[arg(long, value_enum, default_value = "cube")]
    mesh: MeshArg,

    /// Projection used at startup
    #[arg(long, value_enum, default_value = "perspective")]
    camera: CameraArg,

    /// Torus segments around the main ring
    #[arg(long)]
    torus_major: Option<u32>,

    /// Torus segments around the tube
    #[arg(long)]
    torus_minor: Option<u32>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        let mut config = match self.precision {
            Precision::Standard => RenderConfig::default(),
            Precision::High => RenderConfig::high_precision(),
        };
        config.initial_mesh = match self.mesh {
            MeshArg::Cube => MeshKind::Cube,
            MeshArg::Torus => MeshKind::Torus,
        };
        config.initial_camera = match self.camera {
            CameraArg::Perspective => ProjectionMode::Perspective,
            CameraArg::Orthographic => ProjectionMode::Orthographic,
        };
        if let Some(major) = self.torus_major {
            config.torus.major_segments = major;
        }
        if let Some(minor) = self.torus_minor {
            config.torus.minor_segments = minor;
        }
        config
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let config = args.render_config();
    let driver = FrameDriver::new(config).context("Invalid render configuration")?;

    let mut app = TerminalApp::new(driver).context("Failed to open terminal display")?;
    app.run().context("Terminal renderer failed")?;

    Ok(())
}
