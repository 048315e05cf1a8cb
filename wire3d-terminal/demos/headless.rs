/// Example: Render without a terminal and print the last frame as ASCII
///
/// Usage: cargo run --example headless -- [frames] [cube|torus]

use anyhow::{bail, Context, Result};
use std::env;
use wire3d_core::palette::BACKGROUND;
use wire3d_core::{FrameDriver, FrameStats, MeshKind, RenderConfig, SimulatedDisplay};

/// Framebuffer pixels per character
const CELL_WIDTH: usize = 2;
const CELL_HEIGHT: usize = 4;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let frames: u32 = match args.get(1) {
        Some(arg) => arg.parse().context("frames must be a number")?,
        None => 60,
    };
    let mesh = match args.get(2).map(String::as_str) {
        None | Some("cube") => MeshKind::Cube,
        Some("torus") => MeshKind::Torus,
        Some(other) => bail!("unknown mesh '{other}', expected cube or torus"),
    };

    let config = RenderConfig {
        initial_mesh: mesh,
        ..RenderConfig::default()
    };
    let (width, height) = (config.width as usize, config.height as usize);
    let mut driver = FrameDriver::new(config)?;
    let mut display = SimulatedDisplay::new(width, height);

    let mut stats = FrameStats::default();
    for _ in 0..frames {
        stats = driver.step(&mut display)?;
    }

    println!(
        "{} after {} frames: {} drawn, {} clipped, {} rejected, {} hidden",
        mesh.name(),
        frames,
        stats.edges_drawn,
        stats.edges_clipped,
        stats.edges_rejected,
        stats.edges_hidden
    );

    let page = display.last_frame();
    for row in (0..height).step_by(CELL_HEIGHT) {
        let line: String = (0..width)
            .step_by(CELL_WIDTH)
            .map(|col| {
                let lit = (row..(row + CELL_HEIGHT).min(height)).any(|y| {
                    (col..(col + CELL_WIDTH).min(width)).any(|x| page[y * width + x] != BACKGROUND)
                });
                if lit {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        println!("{line}");
    }

    Ok(())
}
