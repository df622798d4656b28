//! Canvas 2D rendering (wasm only)
//!
//! Draws one state snapshot per frame. Pure consumer: never mutates the
//! simulation, never schedules anything.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::Settings;
use crate::sim::{Duckie, GamePhase, GameState, Surfer, Viewport, Wave};

/// Wraps a 2D canvas context and draws game snapshots into it
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Draw the full frame for the given snapshot
    pub fn render(
        &self,
        state: &GameState,
        viewport: Viewport,
        settings: &Settings,
    ) -> Result<(), JsValue> {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);

        if settings.show_waves {
            for wave in &state.waves {
                self.draw_wave(wave, viewport)?;
            }
        }
        for duckie in &state.duckies {
            self.draw_duckie(duckie)?;
        }
        self.draw_surfer(&state.surfer, settings)?;

        if state.phase == GamePhase::GameOver {
            self.draw_game_over(state, viewport)?;
        }
        Ok(())
    }

    /// Filled sine path from the waterline down to the bottom edge
    fn draw_wave(&self, wave: &Wave, viewport: Viewport) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(0.0, wave.y as f64);

        let mut x = 0.0f32;
        while x < wave.width {
            let y = wave.y + (x * wave.frequency + wave.phase).sin() * wave.amplitude;
            ctx.line_to(x as f64, y as f64);
            x += 5.0;
        }
        ctx.line_to(wave.width as f64, viewport.height as f64);
        ctx.line_to(0.0, viewport.height as f64);
        ctx.close_path();

        let gradient =
            ctx.create_linear_gradient(0.0, wave.y as f64, 0.0, viewport.height as f64);
        gradient.add_color_stop(0.0, "rgba(0, 191, 255, 0.8)")?;
        gradient.add_color_stop(1.0, "rgba(0, 0, 139, 0.8)")?;
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill();
        Ok(())
    }

    /// Body, head, beak, eye; all relative to the duckie center
    fn draw_duckie(&self, duckie: &Duckie) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let half = (duckie.size / 2.0) as f64;
        let quarter = half / 2.0;

        ctx.save();
        ctx.translate(duckie.pos.x as f64 + half, duckie.pos.y as f64 + half)?;

        ctx.set_fill_style_str(&format!("hsl({:.0}, 100%, 50%)", duckie.hue));
        ctx.begin_path();
        ctx.ellipse(0.0, 0.0, half, half, 0.0, 0.0, TAU)?;
        ctx.fill();

        ctx.begin_path();
        ctx.arc(quarter, -quarter, quarter, 0.0, TAU)?;
        ctx.fill();

        ctx.set_fill_style_str("#FFA500");
        ctx.begin_path();
        ctx.move_to(half * 2.0 / 3.0, -quarter);
        ctx.line_to(half, -quarter);
        ctx.line_to(half * 2.0 / 3.0, 0.0);
        ctx.fill();

        ctx.set_fill_style_str("black");
        ctx.begin_path();
        ctx.arc(half * 2.0 / 3.0, -half * 2.0 / 3.0, 3.0, 0.0, TAU)?;
        ctx.fill();

        ctx.restore();
        Ok(())
    }

    /// Board plus rider, rotated by the banking angle
    fn draw_surfer(&self, surfer: &Surfer, settings: &Settings) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let (w, h) = (surfer.size.x as f64, surfer.size.y as f64);

        ctx.save();
        ctx.translate(surfer.pos.x as f64 + w / 2.0, surfer.pos.y as f64 + h / 2.0)?;
        if !settings.reduced_motion {
            ctx.rotate(surfer.rotation as f64)?;
        }

        // Surfboard
        ctx.set_fill_style_str("#FFD700");
        ctx.fill_rect(-w / 2.0, -h / 2.0, w, h);

        // Rider
        ctx.set_fill_style_str("#FF6347");
        ctx.begin_path();
        ctx.arc(0.0, -10.0, 10.0, 0.0, TAU)?;
        ctx.fill();

        ctx.restore();
        Ok(())
    }

    /// Translucent overlay with final score and restart hint
    fn draw_game_over(&self, state: &GameState, viewport: Viewport) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let (w, h) = (viewport.width as f64, viewport.height as f64);

        ctx.set_fill_style_str("rgba(0, 0, 0, 0.7)");
        ctx.fill_rect(0.0, 0.0, w, h);

        ctx.set_fill_style_str("white");
        ctx.set_text_align("center");

        ctx.set_font("48px Arial");
        ctx.fill_text("Game Over!", w / 2.0, h / 2.0 - 50.0)?;

        ctx.set_font("24px Arial");
        ctx.fill_text(
            &format!("Final Score: {}", state.score.max(0.0) as u32),
            w / 2.0,
            h / 2.0 + 20.0,
        )?;
        ctx.fill_text("Press R to Restart", w / 2.0, h / 2.0 + 60.0)?;
        Ok(())
    }
}
