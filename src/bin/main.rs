//! Host demo: renders server-status lines into a 240x240 framebuffer and
//! prints them as block art.

use cjk_glyph_core::{RenderReport, Renderer};
use cjk_glyph_surface::{DrawTargetSurface, Tft240x240};
use embedded_graphics_core::pixelcolor::IntoStorage;
use heapless::Vec as HeaplessVec;
use log::{info, warn};

use icon::{ICON_GAP, ICON_RISE, ICON_W, Platform};
use panel::{DEFAULT_LINES, MAX_LINES, PanelConfig, split_label};

#[path = "main/dump.rs"]
mod dump;
#[path = "main/icon.rs"]
mod icon;
#[path = "main/panel.rs"]
mod panel;

const TITLE: &str = "hanzi-panel";

type PanelRenderer = Renderer<'static, DrawTargetSurface<Tft240x240>>;

/// Draws label and value in their own colors, value starting where the label
/// ended. Returns the right edge of the line.
fn render_line(
    renderer: &mut PanelRenderer,
    config: &PanelConfig,
    index: usize,
    line: &str,
) -> i32 {
    let (x, y) = config.line_origin(index);
    let (label, value) = split_label(line);

    renderer.set_origin(x, y);
    renderer.set_foreground(config.label);
    let label_report = renderer.render_str(label);
    log_report(index, "label", &label_report);

    renderer.set_origin(label_report.end_x, y);
    renderer.set_foreground(config.value);
    let value_report = renderer.render_str(value);
    log_report(index, "value", &value_report);

    value_report.end_x
}

fn log_report(index: usize, part: &str, report: &RenderReport) {
    if !report.is_rendered() {
        warn!("line {} {}: nothing drawn ({:?})", index, part, report.status);
        return;
    }

    if report.skipped_bytes > 0 {
        warn!(
            "line {} {}: {} byte(s) outside the glyph table, first at {:?}",
            index,
            part,
            report.skipped_bytes,
            report.skipped_offsets.as_slice()
        );
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut lines: HeaplessVec<&str, MAX_LINES> = HeaplessVec::new();
    let source: Vec<&str> = if args.is_empty() {
        DEFAULT_LINES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };
    for line in source {
        if lines.push(line).is_err() {
            warn!("panel holds {} lines; dropping the rest", MAX_LINES);
            break;
        }
    }

    let config = PanelConfig::default();
    info!("{}: rendering {} line(s)", TITLE, lines.len());

    let mut frame = Tft240x240::new();
    frame.clear(config.background.into_storage());

    let mut renderer: PanelRenderer = Renderer::new();
    renderer.set_background(config.background);
    renderer.bind_surface(DrawTargetSurface::new(frame));

    let mut right_edges: HeaplessVec<i32, MAX_LINES> = HeaplessVec::new();
    for (index, line) in lines.iter().enumerate() {
        let right = render_line(&mut renderer, &config, index, line);
        let _ = right_edges.push(right);
    }

    let Some(surface) = renderer.unbind_surface() else {
        warn!("display surface lost before dump");
        return;
    };
    let mut frame = surface.into_inner();

    for (index, right) in right_edges.iter_mut().enumerate() {
        let (_, value) = split_label(lines[index]);
        let Some(platform) = Platform::detect(value) else {
            continue;
        };
        let (_, top) = config.line_origin(index);
        let x = *right + ICON_GAP;
        let written = icon::blit(&mut frame, platform.icon(), x, top - ICON_RISE);
        info!("line {}: {:?} badge, {} px", index, platform, written);
        *right = x + ICON_W as i32;
    }

    for (index, right) in right_edges.iter().enumerate() {
        let (_, top) = config.line_origin(index);
        println!("{}", lines[index]);
        dump::print_line(&frame, top, *right, config.background);
    }
}
