// File: crates/window-demo/src/main.rs
// Summary: Windowed demo: a timer-driven SpeedGrapher blitted to a window via RGBA readback (CPU) using winit + softbuffer.

use std::num::NonZeroU32;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use grapher_core::{Color, SkiaSurface, SpeedGrapher, TickOutcome, FRAME_STYLE};
use speed_grapher_demo::{init_tracing, RunArgs};
use winit::event::{Event, StartCause, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Parser, Debug)]
#[command(name = "speed-grapher-window-demo", about = "Show a live SpeedGrapher in a window")]
struct Cli {
    #[command(flatten)]
    run: RunArgs,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut grapher = SpeedGrapher::raster(cli.run.grapher_options()).context("creating raster surface")?;
    cli.run.apply_styles(grapher.style_mut())?;
    let mut driver = cli.run.build_driver()?;
    let interval = driver.interval();

    // Widget plus its frame border on every side.
    let border = FRAME_STYLE.border_width;
    let win_w = grapher.options().width + 2 * border;
    let win_h = grapher.options().height + 2 * border;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("SpeedGrapher")
        .with_inner_size(winit::dpi::PhysicalSize::new(win_w, win_h))
        .with_resizable(false)
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let mut next_tick = Instant::now() + interval;

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::NewEvents(StartCause::Init) => {
                *control_flow = ControlFlow::WaitUntil(next_tick);
            }
            Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                match driver.tick(&mut grapher) {
                    TickOutcome::Fed { .. } | TickOutcome::Settled => window.request_redraw(),
                    TickOutcome::Idle => {}
                }
                if driver.is_finished() {
                    tracing::info!("series exhausted; close the window to exit");
                    *control_flow = ControlFlow::Wait;
                } else {
                    next_tick += interval;
                    *control_flow = ControlFlow::WaitUntil(next_tick);
                }
            }
            Event::WindowEvent { event: WindowEvent::CloseRequested, .. } => {
                *control_flow = ControlFlow::Exit;
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = present(&mut surface, grapher.surface_mut(), win_w, win_h, border) {
                    tracing::error!("present error: {e:#}");
                }
            }
            _ => {}
        }
    })
}

/// Copy the raster into the window buffer, compositing over white and drawing
/// the frame border around it.
fn present(
    target: &mut softbuffer::Surface,
    raster: &mut SkiaSurface,
    win_w: u32,
    win_h: u32,
    border: u32,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(win_w), NonZeroU32::new(win_h)) else {
        return Ok(());
    };
    target.resize(w, h).map_err(|e| anyhow::anyhow!("resize: {e}"))?;
    let rgba = raster.rgba8()?;
    let mut frame = target.buffer_mut().map_err(|e| anyhow::anyhow!("buffer: {e}"))?;

    frame.fill(pack(FRAME_STYLE.border_color));
    let src_w = raster.width() as usize;
    for (row, line) in rgba.chunks_exact(src_w * 4).enumerate() {
        let dst_row = (row + border as usize) * win_w as usize + border as usize;
        for (col, px) in line.chunks_exact(4).enumerate() {
            frame[dst_row + col] = pack(over_white(px));
        }
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}

fn over_white(px: &[u8]) -> Color {
    let a = px[3] as u32;
    let mix = |c: u8| ((c as u32 * a + 255 * (255 - a)) / 255) as u8;
    Color::rgb(mix(px[0]), mix(px[1]), mix(px[2]))
}

// softbuffer expects 0RGB
fn pack(c: Color) -> u32 {
    ((c.r as u32) << 16) | ((c.g as u32) << 8) | c.b as u32
}
