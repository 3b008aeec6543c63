//! Interactive viewer for the particle fluid
//!
//! Draws the world rectangle at a fixed scale and steps the simulation
//! once per frame (or more, following the speed slider).

use anyhow::{Context, Result};
use eframe::egui;
use fluidsim_core::{
    build_simulation_context, snapshot, step_simulation, FluidParams, FrameStats,
    SimulationContext,
};

const PARTICLE_RADIUS: f32 = 2.0;
const PARTICLE_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 90, 230);

/// Viewer application state
pub struct ViewApp {
    params: FluidParams,
    seed: Option<u64>,
    ctx: SimulationContext,
    stats: FrameStats,
    last_error: Option<String>,
    playing: bool,
    steps_per_frame: u32,
}

impl ViewApp {
    pub fn new(params: FluidParams, seed: Option<u64>) -> Result<Self> {
        let ctx = build_simulation_context(params.clone(), seed)
            .context("failed to build the simulation")?;
        let stats = ctx.stats();

        Ok(Self {
            params,
            seed,
            ctx,
            stats,
            last_error: None,
            playing: true,
            steps_per_frame: 1,
        })
    }

    /// Respawn from the same seed
    fn reset(&mut self) {
        match build_simulation_context(self.params.clone(), self.seed) {
            Ok(ctx) => {
                log::info!("reset simulation");
                self.stats = ctx.stats();
                self.ctx = ctx;
                self.last_error = None;
            }
            Err(e) => {
                log::error!("reset failed: {}", e);
                self.last_error = Some(e.to_string());
                self.playing = false;
            }
        }
    }

    fn advance(&mut self, steps: u32) {
        for _ in 0..steps {
            if let Err(e) = step_simulation(&mut self.ctx) {
                log::error!("{}", e);
                self.last_error = Some(e.to_string());
                self.playing = false;
                break;
            }
        }
        self.stats = self.ctx.stats();
        log::debug!("step {}: {}", self.ctx.current_step, self.stats);
    }

    fn draw_world(&self, ui: &mut egui::Ui) {
        let rect = ui.max_rect();
        let painter = ui.painter();
        let snap = snapshot(&self.ctx);

        // Fixed mapping: the world never rescales with the data.
        let scale = (rect.width() / snap.width as f32)
            .min(rect.height() / snap.height as f32)
            * 0.95;
        let world_size = egui::vec2(snap.width as f32 * scale, snap.height as f32 * scale);
        let origin = egui::pos2(
            rect.center().x - world_size.x / 2.0,
            rect.center().y + world_size.y / 2.0,
        );
        let to_screen =
            |x: f64, y: f64| origin + egui::vec2(x as f32 * scale, -(y as f32) * scale);

        painter.rect_stroke(
            egui::Rect::from_two_pos(to_screen(0.0, 0.0), to_screen(snap.width, snap.height)),
            0.0,
            egui::Stroke::new(1.0, egui::Color32::GRAY),
        );

        let clip = painter.clip_rect();
        for pos in &snap.positions {
            let screen_pos = to_screen(pos.x, pos.y);
            if clip.contains(screen_pos) {
                painter.circle_filled(screen_pos, PARTICLE_RADIUS, PARTICLE_COLOR);
            }
        }
    }
}

impl eframe::App for ViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(if self.playing { "⏸ Pause" } else { "▶ Play" }).clicked() {
                    self.playing = !self.playing;
                }

                if ui.button("⏮ Reset").clicked() {
                    self.reset();
                }

                if ui.button("⏭ Step").clicked() {
                    self.advance(1);
                }

                ui.separator();

                ui.label("Steps per frame:");
                ui.add(egui::Slider::new(&mut self.steps_per_frame, 1..=10));

                ui.separator();

                ui.label(format!("Step: {}", self.ctx.current_step));
            });
        });

        egui::TopBottomPanel::bottom("stats").show(ctx, |ui| {
            ui.label(self.stats.to_string());
            if let Some(ref error) = self.last_error {
                ui.label(
                    egui::RichText::new(format!("Error: {}", error)).color(egui::Color32::RED),
                );
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_world(ui);
        });

        // Draw first, then step, like the plain render/update loop.
        if self.playing {
            self.advance(self.steps_per_frame);
            ctx.request_repaint();
        }
    }
}
