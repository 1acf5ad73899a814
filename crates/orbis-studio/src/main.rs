use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use orbis_engine::logging::{init_logging, LoggingConfig};
use orbis_engine::scene::DrawCmd;
use orbis_ui::prelude::*;

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 320.0, 320.0);
const RUN: Duration = Duration::from_secs(3);
const FRAME: Duration = Duration::from_millis(16);
const SLICES: i64 = 10;

/// Cycled through as slices of the run are classified.
const VERDICTS: [Quality; 4] = [Quality::Good, Quality::Good, Quality::Medium, Quality::Bad];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║         ORBIS QUALITY RING DEMO        ║");
    println!("  ║   headless  ·  draw list recording     ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let mut fonts = FontSystem::new();
    let mut config = RingConfig::default()
        .with_total_animation_duration(RUN)
        .with_recolor_animation_duration(Duration::from_millis(200))
        .with_rotation_offset_deg(-90.0)
        .with_padding(Edges::all(4.0));

    match load_font() {
        Some(bytes) => {
            let font = fonts.load_font(&bytes).context("parsing system font")?;
            config = config.with_label_font(font).with_text("QA");
        }
        None => log::warn!("no system font found, running without a label"),
    }

    let completed = Rc::new(Cell::new(false));
    let done = Rc::clone(&completed);
    let mut ring = QualityRing::with_config(config).on_sweep_complete(move || done.set(true));
    ring.start_sweep();

    let rect = {
        let ctx = LayoutCtx { fonts: &fonts };
        let size = ring.measure(Constraints::loose(VIEWPORT.size), &ctx);
        Rect::from_origin_size(VIEWPORT.origin, size)
    };

    let slice_ms = RUN.as_millis() as i64 / SLICES;
    let mut clock = FrameClock::new();
    let mut draw_list = DrawList::new();
    let mut elapsed = Duration::ZERO;
    let mut classified = 0;
    let mut painted = 0u32;

    // Font loading and setup should not count as the first frame.
    clock.reset();
    loop {
        let frame = clock.tick();
        elapsed += frame.dt;

        // Classify every slice the sweep has fully passed.
        let elapsed_ms = elapsed.as_millis() as i64;
        while classified < SLICES && (classified + 1) * slice_ms <= elapsed_ms {
            let (from, to) = (classified * slice_ms, (classified + 1) * slice_ms);
            let verdict = VERDICTS[classified as usize % VERDICTS.len()];
            ring.try_set_quality(Boundaries::Millis { from, to }, verdict)
                .with_context(|| format!("classifying {from}..{to} ms"))?;
            log::info!("{from:>5}..{to:<5} ms  {verdict:?}");
            classified += 1;
        }

        if ring.advance(frame.dt).is_needed() {
            draw_list.clear();
            let mut painter = Painter::new(&mut draw_list, &fonts);
            ring.paint(&mut painter, rect);
            painted += 1;
        }

        if completed.get() && ring.active_recolors().is_empty() {
            break;
        }
        std::thread::sleep(FRAME);
    }

    let arcs = draw_list
        .items()
        .iter()
        .filter(|item| matches!(item.cmd, DrawCmd::Arc(_)))
        .count();

    println!();
    println!("  frames painted : {painted}");
    println!("  last frame     : {} commands, {arcs} arcs", draw_list.len());
    println!();
    let span = 360 / SLICES;
    for slice in 0..SLICES {
        let deg = (slice * span) as u16;
        let argb = ring.segments().color_at(deg).to_argb();
        println!("  {:>3}°..{:<3}°  #{argb:08X}", slice * span, (slice + 1) * span);
    }
    println!();

    Ok(())
}

fn load_font() -> Option<Vec<u8>> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
}
