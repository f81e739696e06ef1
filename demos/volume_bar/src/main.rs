use std::cell::RefCell;
use std::rc::Rc;

use volbar_core::{Rect, Vec2, VolumeBarConfig, VolumeBarController};
use volbar_ui::{
    BarGeometry, BarLayout, BarRenderer, PointerEvent, VerticalDragDetector, attach_renderer,
};

/// Prints every frame it is handed.
struct LogRenderer;

impl BarRenderer for LogRenderer {
    fn draw(&mut self, g: &BarGeometry) {
        let t = g.visual_track();
        let f = g.visual_fill();
        println!(
            "track {:>7.2},{:>7.2} {:>6.2}x{:>6.2} | fill h {:>6.2} | scale {:.2}x{:.2} offset {:+.2}",
            t.x, t.y, t.w, t.h, f.h, g.transform.scale_x, g.transform.scale_y, g.transform.translate_y
        );
    }
}

/// Usage: `volume_bar [initial] [drag]...`
///
/// Each `drag` is one upward pointer travel in bar units (negative drags
/// downward); the pointer is released after every drag.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let initial: f32 = match args.next() {
        Some(a) => a.parse()?,
        None => 280.0,
    };
    let drags: Vec<f32> = args.map(|a| a.parse()).collect::<Result<_, _>>()?;
    let drags = if drags.is_empty() { vec![50.0, -400.0] } else { drags };

    let config = VolumeBarConfig::default().with_initial(initial);
    let controller = Rc::new(VolumeBarController::new(config)?);
    let renderer = Rc::new(RefCell::new(LogRenderer));
    let mut detector = VerticalDragDetector::new(controller.clone(), Rect::default());
    for (n, drag) in drags.into_iter().enumerate() {
        // Each gesture happens on a freshly laid out bar, one slot to the right.
        let layout = BarLayout::new(
            Vec2 {
                x: 20.0 + 140.0 * n as f32,
                y: 20.0,
            },
            &config,
        );
        let sub = attach_renderer(&controller, layout, renderer.clone());
        detector.set_hit_rect(layout.track());

        let press = layout.track().center();
        log::info!("drag {drag:+} from value {}", controller.value());
        detector.handle_pointer(&PointerEvent::down(1, press));
        const STEPS: usize = 5;
        for i in 1..=STEPS {
            let y = press.y - drag * i as f32 / STEPS as f32;
            detector.handle_pointer(&PointerEvent::moved(1, Vec2 { x: press.x, y }));
        }
        detector.handle_pointer(&PointerEvent::up(1, press));
        log::info!("committed {}", controller.value());

        controller.unsubscribe_frames(sub);
    }
    Ok(())
}
