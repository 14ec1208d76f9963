//! eframe host glue: frame driver, text painting, exit path
//!
//! Each frame: pump the gamepad event queue, sample every slot, evaluate
//! the exit signal, then paint one formatted overlay block per configured
//! slot. All decision logic lives in [`sampler`](crate::sampler) and
//! [`overlay`](crate::overlay); this module only wires them to egui.

use eframe::egui::{self, pos2, Align2, FontId, Key, ViewportCommand};
use std::time::Duration;
use tracing::info;

use crate::config::OverlayLayout;
use crate::overlay::format_overlay;
use crate::sampler::{exit_requested, GamepadSampler, Sampling};

const OVERLAY_FONT_SIZE: f32 = 16.0;

pub struct PadscopeApp {
    /// Per-frame gamepad state source
    sampler: GamepadSampler<Sampling>,

    /// Base position table, one entry per slot
    layout: OverlayLayout,
}

impl PadscopeApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        sampler: GamepadSampler<Sampling>,
        layout: OverlayLayout,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);
        PadscopeApp { sampler, layout }
    }
}

impl eframe::App for PadscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sampler.pump();
        let pads = self.sampler.sample();

        let escape_down = ctx.input(|i| i.key_down(Key::Escape));
        if exit_requested(&pads, escape_down) {
            info!("Exit requested (slot-0 Back or Escape), closing viewport");
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.ctx().request_repaint_after(Duration::from_millis(33));

            let painter = ui.painter();
            let font = FontId::monospace(OVERLAY_FONT_SIZE);
            for (pad, slot) in pads.iter().zip(&self.layout.slots) {
                for line in format_overlay(pad, pos2(slot.x, slot.y)) {
                    painter.text(line.pos, Align2::LEFT_TOP, line.text, font.clone(), line.color);
                }
            }
        });
    }
}
