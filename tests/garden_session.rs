// garden_session.rs - A full exploring session through the public API

use garden_engine::render::{RadialGradient, Shadow};
use garden_engine::{
    draw_frame, Canvas, Emotion, GardenConfig, GardenWorld, MessageBank, Phase, Rgba, Tier,
};

const BANK: &str = r#"{
    "love": {
        "gentle": ["사랑하는 마음은 우주에서 가장 아름답고 강력한 에너지입니다"],
        "understanding": ["사랑은 두 사람을 더 나은 존재로 만들어가는 성장의 과정입니다"],
        "deep": ["사랑은 자아의 경계를 넘어서는 영혼의 확장입니다"]
    }
}"#;

/// Counts fills and text draws, measures 8px per char
#[derive(Default)]
struct CountingCanvas {
    fills: usize,
    texts: usize,
    gradients: usize,
}

impl Canvas for CountingCanvas {
    type Image = ();

    fn clear(&mut self, _: f64, _: f64) {}
    fn save(&mut self) {}
    fn restore(&mut self) {}
    fn set_alpha(&mut self, _: f64) {}
    fn set_fill(&mut self, _: Rgba) {}
    fn set_stroke(&mut self, _: Rgba, _: f64) {}
    fn set_shadow(&mut self, _: Shadow) {}
    fn set_font(&mut self, _: &str) {}
    fn translate(&mut self, _: f64, _: f64) {}
    fn rotate(&mut self, _: f64) {}
    fn begin_path(&mut self) {}
    fn move_to(&mut self, _: f64, _: f64) {}
    fn line_to(&mut self, _: f64, _: f64) {}
    fn quadratic_to(&mut self, _: f64, _: f64, _: f64, _: f64) {}
    fn bezier_to(&mut self, _: f64, _: f64, _: f64, _: f64, _: f64, _: f64) {}
    fn circle(&mut self, _: f64, _: f64, _: f64) {}
    fn close_path(&mut self) {}
    fn fill(&mut self) { self.fills += 1; }
    fn stroke(&mut self) {}
    fn fill_rect(&mut self, _: f64, _: f64, _: f64, _: f64) {}
    fn fill_rect_gradient(&mut self, _: &RadialGradient, _: f64, _: f64, _: f64, _: f64) {
        self.gradients += 1;
    }
    fn draw_image(&mut self, _: &(), _: f64, _: f64, _: f64, _: f64) {}
    fn measure_text(&mut self, text: &str) -> f64 { text.chars().count() as f64 * 8.0 }
    fn fill_text_centered(&mut self, _: &str, _: f64, _: f64) { self.texts += 1; }
}

fn session() -> GardenWorld {
    let config = GardenConfig {
        seed: Some(5),
        discovery_radius: 1.0,
        ..GardenConfig::default()
    };
    let mut world = GardenWorld::new(1280.0, 800.0, config);
    world.set_message_bank(MessageBank::from_json(BANK).unwrap());
    world.set_emotion(Emotion::Love);
    world.set_intensity(0.8);
    world.set_phase(Phase::Exploring);
    world
}

#[test]
fn counts_follow_scene() {
    let world = session();
    assert_eq!(world.particles().len(), 21);
    assert_eq!(world.spots().len(), 28);
    assert_eq!(world.grass().len(), 2048);
}

#[test]
fn first_message_opens_above_its_spot() {
    let mut world = session();
    let spot = world.spots()[0];
    assert_eq!(world.click(spot.x, spot.y, 10_000.0), 1);

    let message = &world.messages()[0];
    assert_eq!((message.x, message.y), (spot.x, spot.y - 100.0));
    assert_eq!(message.opacity, 1.0);
    assert_eq!(message.scale, 0.0);
    assert_eq!(message.text.matches('\n').count(), 1);

    let found = &world.found_messages()[0];
    let expected_tier = Tier::from_resonance(spot.resonance);
    assert_eq!(found.tier, expected_tier);
    if expected_tier == Tier::Deep {
        assert_eq!(found.color, "#8E44AD");
    } else {
        assert_eq!(found.color, Emotion::Love.color().hex());
    }
}

#[test]
fn discoveries_spread_out_and_fade() {
    let mut world = session();
    let mut now = 0.0;
    for i in 0..12 {
        let spot = world.spots()[i];
        now += 100.0;
        assert_eq!(world.click(spot.x, spot.y, now), 1);
        for p in world.active_placements() {
            assert!(now - p.timestamp_ms < 5000.0);
        }
        world.advance_frame();
    }
    assert_eq!(world.found_count(), 12);
    assert_eq!(world.messages().len(), 12);
    assert_eq!(world.emojis().len(), 12);

    let mut canvas = CountingCanvas::default();
    draw_frame(&world, &mut canvas, None);
    assert_eq!(canvas.gradients, 1);
    assert_eq!(canvas.texts, 12 * 2 + 12);

    world.advance_decay(16.0 * 100.0);
    assert!(world.emojis().is_empty());
    assert_eq!(world.messages().len(), 12);

    world.advance_decay(16.0 * 150.0);
    assert!(world.messages().is_empty());
    assert_eq!(world.found_count(), 12);
}

#[test]
fn results_summary_serializes() {
    let mut world = session();
    world.set_elapsed_seconds(73);
    let spot = world.spots()[3];
    world.click(spot.x, spot.y, 0.0);
    world.set_phase(Phase::Results);

    let json = serde_json::to_value(world.found_messages()).unwrap();
    assert_eq!(json[0]["elapsed_secs"], 73);
    assert!(json[0]["tier"].is_string());
    assert!(json[0]["text"].as_str().unwrap().contains("사랑"));

    let mut canvas = CountingCanvas::default();
    draw_frame(&world, &mut canvas, None);
    assert_eq!(canvas.gradients, 0);
    // only the emoji is drawn as text outside exploring
    assert_eq!(canvas.texts, 1);
}
