// sim/ - Garden simulation
//
// GardenWorld owns every entity collection and the scene they derive from.
// Collections are rebuilt wholesale when their inputs change and advanced in
// place by the frame and decay steps. Each entity kind lives in its own module.

mod decay;
mod emoji;
mod grass;
mod message;
mod particle;
mod placement;
mod rng;
mod spot;

pub use decay::{DecayClock, DECAY_INTERVAL_MS};
pub use emoji::{EmotionEmoji, Emojis};
pub use grass::{blade_count, lean_toward, Grass, GrassBlade};
pub use message::{FloatingMessage, Messages};
pub use particle::{particle_count, Particle, Particles};
pub use placement::{wrap_text, ActivePlacement, Placement, Placements};
pub use rng::Rng;
pub use spot::{spot_count, HiddenSpot, Spots};

use serde::Serialize;

use crate::config::{GardenConfig, DEFAULT_SEED};
use crate::content::{MessageBank, Tier};
use crate::scene::{clamp_intensity, Emotion, Phase, SceneState, Viewport};

/// A discovered message, kept for the end-of-session summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoundMessage {
    pub text: String,
    /// `#RRGGBB`
    pub color: String,
    pub elapsed_secs: u32,
    pub tier: Tier,
}

pub struct GardenWorld {
    scene: SceneState,
    config: GardenConfig,
    bank: MessageBank,

    // Entities
    particles: Particles,
    grass: Grass,
    spots: Spots,
    messages: Messages,
    emojis: Emojis,
    placements: Placements,

    // Session
    found: Vec<FoundMessage>,
    elapsed_secs: u32,
    last_discovery_ms: Option<f64>,

    decay_clock: DecayClock,
    rng: Rng,
}

impl GardenWorld {
    pub fn new(width: f64, height: f64, config: GardenConfig) -> Self {
        let mut world = Self {
            scene: SceneState::new(Viewport::new(width, height)),
            bank: MessageBank::default(),
            particles: Particles::new(),
            grass: Grass::new(),
            spots: Spots::new(config.spot_margin),
            messages: Messages::new(),
            emojis: Emojis::new(),
            placements: Placements::new(config.placement.clone()),
            found: Vec::new(),
            elapsed_secs: 0,
            last_discovery_ms: None,
            decay_clock: DecayClock::new(),
            rng: Rng::new(config.seed.unwrap_or(DEFAULT_SEED)),
            config,
        };
        world.regenerate_particles();
        world.regenerate_grass();
        world.regenerate_spots();
        world
    }

    // ------------------------------------------------------------------
    // Scene transitions
    // ------------------------------------------------------------------

    pub fn set_message_bank(&mut self, bank: MessageBank) {
        if bank.is_empty() {
            log::warn!("message bank is empty, discoveries will show the fallback text");
        }
        self.bank = bank;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        let viewport = Viewport::new(width, height);
        if viewport == self.scene.viewport { return; }
        self.scene.viewport = viewport;
        self.regenerate_particles();
        self.regenerate_grass();
        self.regenerate_spots();
    }

    pub fn set_emotion(&mut self, emotion: Emotion) {
        if emotion == self.scene.emotion { return; }
        self.scene.emotion = emotion;
        self.regenerate_particles();
    }

    pub fn set_intensity(&mut self, intensity: f64) {
        let intensity = clamp_intensity(intensity);
        if intensity == self.scene.intensity { return; }
        self.scene.intensity = intensity;
        self.regenerate_particles();
        self.regenerate_spots();
    }

    pub fn set_phase(&mut self, phase: Phase) {
        if phase == self.scene.phase { return; }
        log::info!("phase {} -> {}", self.scene.phase.as_str(), phase.as_str());
        self.scene.phase = phase;
        self.decay_clock.reset();
    }

    /// Session clock maintained by the host, stamped onto found messages
    pub fn set_elapsed_seconds(&mut self, secs: u32) {
        self.elapsed_secs = secs;
    }

    /// Back to the welcome screen with an empty session
    pub fn restart(&mut self) {
        self.set_phase(Phase::Welcome);
        self.elapsed_secs = 0;
        self.found.clear();
        self.messages.clear();
        self.emojis.clear();
        self.placements.clear();
        self.last_discovery_ms = None;
    }

    // ------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !self.scene.is_exploring() { return; }
        self.grass.pointer_at(x, y, self.config.hover_radius);
    }

    pub fn pointer_leave(&mut self) {
        self.grass.relax();
    }

    /// Discover every hidden spot near (`x`, `y`). Returns how many were found.
    pub fn click(&mut self, x: f64, y: f64, now_ms: f64) -> usize {
        if !self.scene.is_exploring() { return 0; }
        if let Some(last) = self.last_discovery_ms {
            if now_ms - last < self.config.discovery_cooldown_ms { return 0; }
        }

        let hits = self.spots.hits(x, y, self.config.discovery_radius);
        for &i in &hits {
            let spot = self.spots.items[i];
            self.discover(spot, now_ms);
            self.spots.relocate(i, self.scene.viewport, &mut self.rng);
        }

        if !hits.is_empty() {
            self.last_discovery_ms = Some(now_ms);
        }
        hits.len()
    }

    fn discover(&mut self, spot: HiddenSpot, now_ms: f64) {
        let emotion = self.scene.emotion;
        let choice = self.bank.choose(emotion, spot.resonance, &mut self.rng);

        self.found.push(FoundMessage {
            text: choice.text.clone(),
            color: choice.color.hex(),
            elapsed_secs: self.elapsed_secs,
            tier: choice.tier,
        });

        let placed = self.placements.place(spot.x, spot.y, self.scene.viewport, now_ms);
        self.messages.push(FloatingMessage::new(
            wrap_text(&choice.text),
            placed.x,
            placed.y,
            choice.color,
            now_ms,
        ));

        self.emojis.burst(emotion, spot.x, spot.y, &mut self.rng);
        log::debug!("discovered spot at ({:.0}, {:.0}), {:?} tier", spot.x, spot.y, choice.tier);
    }

    // ------------------------------------------------------------------
    // Time steps
    // ------------------------------------------------------------------

    /// Per-frame motion. Call once per displayed frame, alongside drawing.
    pub fn advance_frame(&mut self) {
        self.particles.advance(self.scene.viewport);
        self.grass.advance();
    }

    /// One 16ms decay tick. No-op outside the exploring phase.
    pub fn decay_tick(&mut self) {
        if !self.scene.is_exploring() { return; }
        self.emojis.decay();
        self.messages.decay();
    }

    /// Run however many decay ticks `elapsed_ms` covers
    pub fn advance_decay(&mut self, elapsed_ms: f64) -> u32 {
        let ticks = self.decay_clock.due(elapsed_ms);
        for _ in 0..ticks {
            self.decay_tick();
        }
        ticks
    }

    // ------------------------------------------------------------------
    // Regeneration
    // ------------------------------------------------------------------

    fn regenerate_particles(&mut self) {
        let s = &self.scene;
        self.particles.regenerate(s.emotion, s.intensity, s.viewport, &mut self.rng);
        log::debug!("particles: {} for {}", self.particles.len(), s.emotion.key());
    }

    fn regenerate_grass(&mut self) {
        self.grass.regenerate(self.scene.viewport, &mut self.rng);
    }

    fn regenerate_spots(&mut self) {
        self.spots.regenerate(self.scene.intensity, self.scene.viewport, &mut self.rng);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn scene(&self) -> &SceneState { &self.scene }
    pub fn config(&self) -> &GardenConfig { &self.config }
    pub fn particles(&self) -> &[Particle] { &self.particles.items }
    pub fn grass(&self) -> &[GrassBlade] { &self.grass.blades }
    pub fn spots(&self) -> &[HiddenSpot] { &self.spots.items }
    pub fn messages(&self) -> &[FloatingMessage] { &self.messages.items }
    pub fn emojis(&self) -> &[EmotionEmoji] { &self.emojis.items }
    pub fn active_placements(&self) -> &[ActivePlacement] { self.placements.active() }
    pub fn found_messages(&self) -> &[FoundMessage] { &self.found }
    pub fn found_count(&self) -> usize { self.found.len() }
    pub fn elapsed_seconds(&self) -> u32 { self.elapsed_secs }
}
