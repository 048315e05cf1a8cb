/// Frame driver: one call to `step` renders and presents one frame
use crate::clip::{Clip, Segment, Viewport};
use crate::config::RenderConfig;
use crate::display::{Buttons, DisplayPort};
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Mesh, MeshKind};
use crate::palette;
use crate::projection::{Camera, ProjectedPoint, ProjectionMode};
use crate::transform::{AnimationState, Transform};
use crate::trig::TrigTable;

/// What is on screen, for overlays to report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub mesh: MeshKind,
    pub camera: ProjectionMode,
}

/// Per-frame edge counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub vertices: usize,
    /// Edges drawn without clipping
    pub edges_drawn: usize,
    /// Edges shortened to the viewport and drawn
    pub edges_clipped: usize,
    /// Edges entirely outside the viewport
    pub edges_rejected: usize,
    /// Edges with an endpoint behind the viewer
    pub edges_hidden: usize,
}

/// Owns all renderer state. Everything is allocated in [`FrameDriver::new`].
pub struct FrameDriver {
    config: RenderConfig,
    trig: TrigTable,
    cube: Mesh,
    torus: Mesh,
    selection: Selection,
    animation: AnimationState,
    last_buttons: Buttons,
    viewport: Viewport,
    projected: Vec<ProjectedPoint>,
    framebuffer: Framebuffer,
}

impl FrameDriver {
    pub fn new(config: RenderConfig) -> Result<Self, Error> {
        config.validate()?;

        let trig = TrigTable::new(config.angle_period, config.frac_bits);
        let cube = Mesh::cube(config.cube_half_extent);
        let torus = Mesh::torus(&config.torus, &trig)?;
        let capacity = cube.vertex_count().max(torus.vertex_count());

        tracing::info!(
            width = config.width,
            height = config.height,
            frac_bits = config.frac_bits,
            angle_period = config.angle_period,
            "frame driver ready"
        );

        Ok(Self {
            selection: Selection {
                mesh: config.initial_mesh,
                camera: config.initial_camera,
            },
            animation: AnimationState::default(),
            last_buttons: Buttons::empty(),
            viewport: Viewport::new(config.width, config.height),
            projected: Vec::with_capacity(capacity),
            framebuffer: Framebuffer::new(config.width as usize, config.height as usize),
            trig,
            cube,
            torus,
            config,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn trig(&self) -> &TrigTable {
        &self.trig
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn animation(&self) -> AnimationState {
        self.animation
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn mesh(&self, kind: MeshKind) -> &Mesh {
        match kind {
            MeshKind::Cube => &self.cube,
            MeshKind::Torus => &self.torus,
        }
    }

    /// Render one frame into the back page, wait for vblank, flip, present
    /// the new front page and advance the animation.
    pub fn step<D: DisplayPort>(&mut self, display: &mut D) -> Result<FrameStats, D::Error> {
        let buttons = display.read_input()?;
        self.handle_input(buttons);

        let stats = self.render();

        display.wait_vblank()?;
        self.framebuffer.flip();
        display.present(self.framebuffer.front_page())?;

        self.animation
            .advance(&self.config.deltas, self.config.angle_period);

        tracing::trace!(?stats, "frame");
        Ok(stats)
    }

    fn handle_input(&mut self, buttons: Buttons) {
        let pressed = buttons.pressed_since(self.last_buttons);
        self.last_buttons = buttons;

        if pressed.contains(Buttons::A) {
            self.selection.mesh = self.selection.mesh.toggled();
            tracing::debug!(mesh = self.selection.mesh.name(), "mesh toggled");
        }
        if pressed.contains(Buttons::B) {
            self.selection.camera = self.selection.camera.toggled();
            tracing::debug!(camera = self.selection.camera.name(), "camera toggled");
        }
    }

    /// Draw the current selection into the back page.
    pub fn render(&mut self) -> FrameStats {
        let transform = Transform::for_frame(&self.animation, &self.trig);
        let camera = Camera::new(&self.config, self.selection.camera);
        let frac_bits = self.config.frac_bits;

        let mesh = match self.selection.mesh {
            MeshKind::Cube => &self.cube,
            MeshKind::Torus => &self.torus,
        };

        self.projected.clear();
        self.projected.extend(
            mesh.vertices()
                .iter()
                .map(|v| camera.project(&transform.apply(v))),
        );

        self.framebuffer.clear(palette::BACKGROUND);

        let mut stats = FrameStats {
            vertices: mesh.vertex_count(),
            ..FrameStats::default()
        };
        for edge in mesh.edges() {
            let start = self.projected[edge.start as usize].visible();
            let end = self.projected[edge.end as usize].visible();
            let (Some(start), Some(end)) = (start, end) else {
                stats.edges_hidden += 1;
                continue;
            };

            let segment = match self.viewport.clip(Segment::new(start, end), frac_bits) {
                Clip::Accepted(s) => {
                    stats.edges_drawn += 1;
                    s
                }
                Clip::Clipped(s) => {
                    stats.edges_clipped += 1;
                    s
                }
                Clip::Rejected => {
                    stats.edges_rejected += 1;
                    continue;
                }
            };
            self.framebuffer.draw_line(
                segment.start.x,
                segment.start.y,
                segment.end.x,
                segment.end.y,
                palette::LINE,
            );
        }
        stats
    }
}
