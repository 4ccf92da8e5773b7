use super::camera::{CameraController, CameraPose};
use super::config::GalleryConfig;
use super::gallery::{accent_color, piece_for_wall, ArtPiece, Wall};
use super::navigation::{GalleryNav, NavEvent};
use super::particles::ParticleField;
use super::room::{self, Aabb, LightCone, PaintingLight, TrackLight};
use glam::Vec3;
use std::time::Duration;

/// Per-frame description of one hung artwork.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInstance {
    pub wall: Wall,
    pub bounds: Aabb,
    pub normal: Vec3,
    pub accent: [f32; 3],
    pub hovered: bool,
    pub selected: bool,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug)]
pub struct SceneFrame {
    pub pose: CameraPose,
    pub time: f32,
    pub frames: [FrameInstance; 4],
    pub cones: [LightCone; 4],
    pub lights: [PaintingLight; 4],
    pub tracks: [TrackLight; 4],
    pub dust: Vec<[f32; 4]>,
}

/// Explicit simulation state for the gallery, advanced once per rendered frame.
///
/// Navigation requests are routed through here so that every wall change
/// also retargets the camera.
pub struct GallerySim {
    pub nav: GalleryNav<'static>,
    pub camera: CameraController,
    pub dust: ParticleField,
    hovered: Option<Wall>,
    elapsed: f64,
}

impl GallerySim {
    pub fn new(config: &GalleryConfig, collection: &'static [ArtPiece], seed: u64) -> Self {
        let nav = GalleryNav::new(collection, config.navigation.clone());
        let camera = CameraController::new(config.camera.clone(), nav.current_wall());
        let dust = ParticleField::new(config.particles.clone(), room::particle_bounds(), seed);
        Self {
            nav,
            camera,
            dust,
            hovered: None,
            elapsed: 0.0,
        }
    }

    fn route(&mut self, ev: Option<NavEvent<'static>>) -> Option<NavEvent<'static>> {
        if let Some(NavEvent::WallChanged { wall, .. }) = ev {
            self.camera.set_wall(wall);
        }
        ev
    }

    pub fn go_to_wall(&mut self, index: i64) -> Option<NavEvent<'static>> {
        let ev = self.nav.go_to_wall(index);
        self.route(ev)
    }

    pub fn next_wall(&mut self) -> Option<NavEvent<'static>> {
        let ev = self.nav.next_wall();
        self.route(ev)
    }

    pub fn prev_wall(&mut self) -> Option<NavEvent<'static>> {
        let ev = self.nav.prev_wall();
        self.route(ev)
    }

    pub fn handle_key(&mut self, key: &str) -> Option<NavEvent<'static>> {
        let ev = self.nav.handle_key(key);
        self.route(ev)
    }

    pub fn close_selection(&mut self) -> Option<NavEvent<'static>> {
        self.nav.close_selection()
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.camera.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.camera.pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.camera.pointer_up();
    }

    /// Update hover from a world-space ray; returns the hovered wall.
    pub fn hover_ray(&mut self, origin: Vec3, dir: Vec3) -> Option<Wall> {
        self.hovered = room::pick_wall(origin, dir).map(|(w, _)| w);
        self.hovered
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<Wall> {
        self.hovered
    }

    /// Select the piece whose frame the ray hits first.
    pub fn click_ray(&mut self, origin: Vec3, dir: Vec3) -> Option<NavEvent<'static>> {
        let (wall, _) = room::pick_wall(origin, dir)?;
        self.nav.select_wall_piece(wall)
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn tick(&mut self, dt_sec: f32) -> SceneFrame {
        let dt = if dt_sec.is_finite() && dt_sec > 0.0 {
            dt_sec
        } else {
            0.0
        };
        self.elapsed += dt as f64;

        // Beyond Duration's range the lock has long expired anyway
        self.nav.tick(Duration::try_from_secs_f32(dt).unwrap_or(Duration::MAX));
        let pose = self.camera.tick(dt);
        if self.camera.has_arrived() {
            self.nav.notify_arrived();
        }
        self.dust.step(self.elapsed);

        SceneFrame {
            pose,
            time: self.elapsed as f32,
            frames: self.frames(),
            cones: room::light_cones(),
            lights: room::painting_lights(),
            tracks: room::track_lights(),
            dust: self.dust.instances(),
        }
    }

    fn frames(&self) -> [FrameInstance; 4] {
        let selected = self.nav.selected().map(|p| p.wall);
        let collection = self.nav.collection();
        Wall::ALL.map(|wall| FrameInstance {
            wall,
            bounds: room::frame_box(wall),
            normal: room::wall_anchor(wall).normal,
            accent: piece_for_wall(collection, wall)
                .map(accent_color)
                .unwrap_or([0.7, 0.7, 0.68]),
            hovered: self.hovered == Some(wall),
            selected: selected == Some(wall),
        })
    }
}
