//! 2D canvas renderer
//!
//! A pure function of simulation state: reads the session, paints one
//! frame, mutates nothing. Runs every animation frame regardless of phase
//! so the idle, paused, and game-over screens stay painted.

use crate::consts::*;
use crate::sim::ItemKind;

/// Fill color for an item body
pub fn kind_color(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Hazard => "#e85d75",
        ItemKind::Safety => "#34d399",
    }
}

/// HUD difficulty readout, two decimals
pub fn format_difficulty(difficulty: f32) -> String {
    format!("x{difficulty:.2}")
}

/// Item labels are clipped to fit their box
pub fn truncate_label(label: &str) -> String {
    if label.chars().count() > LABEL_MAX_CHARS {
        let mut out: String = label.chars().take(LABEL_MAX_CHARS).collect();
        out.push('…');
        out
    } else {
        label.to_string()
    }
}

#[cfg(target_arch = "wasm32")]
mod draw {
    use web_sys::CanvasRenderingContext2d;

    use super::{format_difficulty, kind_color, truncate_label};
    use crate::consts::*;
    use crate::sim::{GameState, RunPhase};

    const W: f64 = CANVAS_WIDTH as f64;
    const H: f64 = CANVAS_HEIGHT as f64;

    /// Paint one frame of the current state
    pub fn draw(ctx: &CanvasRenderingContext2d, state: &GameState) {
        draw_background(ctx);
        draw_items(ctx, state);
        draw_player(ctx, state);
        draw_hud(ctx, state);

        match state.phase {
            RunPhase::Idle => draw_title_overlay(ctx),
            RunPhase::Paused => draw_pause_overlay(ctx),
            RunPhase::GameOver => draw_game_over_overlay(ctx, state),
            RunPhase::Running => {}
        }
    }

    fn draw_background(ctx: &CanvasRenderingContext2d) {
        let gradient = ctx.create_linear_gradient(0.0, 0.0, 0.0, H);
        gradient.add_color_stop(0.0, "#101a2e").ok();
        gradient.add_color_stop(1.0, "#1c2b45").ok();
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(0.0, 0.0, W, H);

        // Factory floor line under the paddle band
        ctx.set_fill_style_str("#2c3d5c");
        ctx.fill_rect(0.0, (PADDLE_Y + PADDLE_HEIGHT) as f64 + 6.0, W, 2.0);
    }

    fn draw_hud(ctx: &CanvasRenderingContext2d, state: &GameState) {
        ctx.set_fill_style_str("#cce1ff");
        ctx.set_font("16px ui-monospace, Menlo, Consolas, monospace");
        ctx.set_text_align("left");
        ctx.fill_text(&format!("SCORE {}", state.score), 12.0, 24.0).ok();
        ctx.set_text_align("right");
        ctx.fill_text(&format_difficulty(state.difficulty), W - 12.0, 24.0)
            .ok();
    }

    fn draw_player(ctx: &CanvasRenderingContext2d, state: &GameState) {
        ctx.set_fill_style_str("#ffd166");
        ctx.fill_rect(
            state.player.x as f64,
            PADDLE_Y as f64,
            PADDLE_WIDTH as f64,
            PADDLE_HEIGHT as f64,
        );
    }

    fn draw_items(ctx: &CanvasRenderingContext2d, state: &GameState) {
        ctx.set_font("12px ui-monospace, Menlo, Consolas, monospace");
        ctx.set_text_align("center");
        for item in &state.items {
            ctx.set_fill_style_str(kind_color(item.kind));
            rounded_rect(
                ctx,
                item.pos.x as f64,
                item.pos.y as f64,
                ITEM_WIDTH as f64,
                ITEM_HEIGHT as f64,
                6.0,
            );
            ctx.fill();

            ctx.set_fill_style_str("#10192b");
            ctx.fill_text(
                &truncate_label(item.label),
                (item.pos.x + ITEM_WIDTH / 2.0) as f64,
                (item.pos.y + ITEM_HEIGHT / 2.0) as f64 + 4.0,
            )
            .ok();
        }
    }

    fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
        ctx.begin_path();
        ctx.move_to(x + r, y);
        ctx.arc_to(x + w, y, x + w, y + h, r).ok();
        ctx.arc_to(x + w, y + h, x, y + h, r).ok();
        ctx.arc_to(x, y + h, x, y, r).ok();
        ctx.arc_to(x, y, x + w, y, r).ok();
        ctx.close_path();
    }

    fn dim(ctx: &CanvasRenderingContext2d) {
        ctx.set_fill_style_str("rgba(8, 12, 24, 0.72)");
        ctx.fill_rect(0.0, 0.0, W, H);
    }

    fn draw_title_overlay(ctx: &CanvasRenderingContext2d) {
        dim(ctx);
        ctx.set_text_align("center");
        ctx.set_fill_style_str("#ffffff");
        ctx.set_font("bold 30px ui-sans-serif, system-ui");
        ctx.fill_text("SAFETY CATCH", W / 2.0, H / 2.0 - 60.0).ok();

        ctx.set_font("15px ui-monospace, Menlo, Consolas, monospace");
        ctx.set_fill_style_str("#cce1ff");
        ctx.fill_text("Catch the safety gear, dodge the hazards", W / 2.0, H / 2.0 - 16.0)
            .ok();
        ctx.fill_text("Move: arrows / A D or the buttons below", W / 2.0, H / 2.0 + 12.0)
            .ok();
        ctx.fill_text("P pauses a run", W / 2.0, H / 2.0 + 40.0).ok();

        ctx.set_fill_style_str("#ffd166");
        ctx.fill_text("Press Space or Enter to start", W / 2.0, H / 2.0 + 88.0)
            .ok();
    }

    fn draw_pause_overlay(ctx: &CanvasRenderingContext2d) {
        dim(ctx);
        ctx.set_text_align("center");
        ctx.set_fill_style_str("#ffffff");
        ctx.set_font("bold 26px ui-sans-serif, system-ui");
        ctx.fill_text("PAUSED", W / 2.0, H / 2.0 - 8.0).ok();
        ctx.set_font("15px ui-monospace, Menlo, Consolas, monospace");
        ctx.set_fill_style_str("#cce1ff");
        ctx.fill_text("Press P to resume", W / 2.0, H / 2.0 + 24.0).ok();
    }

    fn draw_game_over_overlay(ctx: &CanvasRenderingContext2d, state: &GameState) {
        dim(ctx);
        ctx.set_text_align("center");
        ctx.set_fill_style_str("#e85d75");
        ctx.set_font("bold 30px ui-sans-serif, system-ui");
        ctx.fill_text("INCIDENT REPORT", W / 2.0, H / 2.0 - 48.0).ok();

        ctx.set_fill_style_str("#ffffff");
        ctx.set_font("20px ui-monospace, Menlo, Consolas, monospace");
        ctx.fill_text(&format!("Final score: {}", state.score), W / 2.0, H / 2.0)
            .ok();

        ctx.set_font("15px ui-monospace, Menlo, Consolas, monospace");
        ctx.set_fill_style_str("#cce1ff");
        ctx.fill_text("Save your score with the form below", W / 2.0, H / 2.0 + 36.0)
            .ok();
        ctx.set_fill_style_str("#ffd166");
        ctx.fill_text("Press Space or Enter for a new run", W / 2.0, H / 2.0 + 68.0)
            .ok();
    }
}

#[cfg(target_arch = "wasm32")]
pub use draw::draw;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_label_short_passes_through() {
        assert_eq!(truncate_label("Hard hat"), "Hard hat");
    }

    #[test]
    fn test_truncate_label_clips_at_twelve_chars() {
        assert_eq!(truncate_label("Safety goggles"), "Safety goggl…");
        assert_eq!(truncate_label("twelve chars"), "twelve chars");
    }

    #[test]
    fn test_format_difficulty_two_decimals() {
        assert_eq!(format_difficulty(1.0), "x1.00");
        assert_eq!(format_difficulty(2.345), "x2.35");
    }

    #[test]
    fn test_kind_colors_differ() {
        assert_ne!(kind_color(ItemKind::Hazard), kind_color(ItemKind::Safety));
    }
}
