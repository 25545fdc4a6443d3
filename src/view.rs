use crate::constants::*;
use crate::core::{projection, Direction, SceneSnapshot};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Canvas 2D renderer for the three views. Reads snapshots only.
pub struct SceneView {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

#[derive(Clone, Copy)]
struct Rect {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Rect {
    fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

impl SceneView {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    pub fn draw(&self, snapshot: &SceneSnapshot, time_sec: f64) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        let ctx = &self.ctx;

        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, width, height);

        let top_down_w = width * TOP_DOWN_WIDTH_FRACTION;
        let side_h = height * SIDE_VIEW_HEIGHT_FRACTION;
        let top_down = Rect {
            x: 0.0,
            y: 0.0,
            w: top_down_w,
            h: height,
        };
        let side = Rect {
            x: top_down_w,
            y: 0.0,
            w: width - top_down_w,
            h: side_h,
        };
        let radar = Rect {
            x: top_down_w,
            y: side_h,
            w: width - top_down_w,
            h: height - side_h,
        };

        ctx.set_stroke_style_str(GRID);
        ctx.set_line_width(1.0);
        self.line(top_down_w, 0.0, top_down_w, height);
        self.line(top_down_w, side_h, width, side_h);

        let scale =
            projection::view_scale(top_down.w as f32, top_down.h as f32, snapshot.max_radius)
                as f64;
        let pulse = if snapshot.playing {
            (time_sec * PULSE_RATE).sin() * PULSE_AMPLITUDE
        } else {
            0.0
        };

        self.draw_top_down(top_down, snapshot, scale, pulse, time_sec);
        self.draw_side(side, snapshot, scale, pulse);
        self.draw_radar(radar, snapshot, pulse, time_sec);
        self.draw_direction_badge(top_down_w, snapshot);
    }

    fn line(&self, x0: f64, y0: f64, x1: f64, y1: f64) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(x0, y0);
        ctx.line_to(x1, y1);
        ctx.stroke();
    }

    fn circle(&self, x: f64, y: f64, r: f64, fill: bool) {
        let ctx = &self.ctx;
        ctx.begin_path();
        _ = ctx.arc(x, y, r.max(0.0), 0.0, TAU);
        if fill {
            ctx.fill();
        } else {
            ctx.stroke();
        }
    }

    fn set_dash(&self, dashed: bool) {
        let pattern = js_sys::Array::new();
        if dashed {
            pattern.push(&JsValue::from_f64(5.0));
            pattern.push(&JsValue::from_f64(5.0));
        }
        _ = self.ctx.set_line_dash(&pattern);
    }

    fn label(&self, text: &str, x: f64, y: f64, color: &str, font: &str, align: &str) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(color);
        ctx.set_font(font);
        ctx.set_text_align(align);
        _ = ctx.fill_text(text, x, y);
        ctx.set_text_align("left");
    }

    fn draw_top_down(
        &self,
        area: Rect,
        snapshot: &SceneSnapshot,
        scale: f64,
        pulse: f64,
        time_sec: f64,
    ) {
        let ctx = &self.ctx;
        let (cx, cy) = area.center();
        let radius = snapshot.spherical.radius as f64 * scale;

        // Sphere outline, current-elevation ring, latitude rings, longitude spokes
        ctx.set_stroke_style_str(GRID);
        ctx.set_line_width(2.0);
        self.circle(cx, cy, radius, false);

        ctx.set_stroke_style_str(CONNECTION);
        ctx.set_line_width(1.5);
        self.set_dash(true);
        let ring =
            projection::ring_radius(snapshot.spherical.radius, snapshot.spherical.elevation) as f64;
        self.circle(cx, cy, ring * scale, false);
        self.set_dash(false);

        ctx.set_stroke_style_str(GRID_FAINT);
        ctx.set_line_width(1.0);
        for deg in LATITUDE_RINGS_DEG {
            self.circle(cx, cy, radius * deg.to_radians().cos(), false);
        }
        let mut az: f64 = 0.0;
        while az < 360.0 {
            let a = az.to_radians();
            self.line(cx, cy, cx + radius * a.sin(), cy - radius * a.cos());
            az += LONGITUDE_STEP_DEG;
        }
        for (deg, text, offset) in [
            (0.0_f64, "Front", -15.0),
            (90.0, "Right", 0.0),
            (180.0, "Back", 15.0),
            (-90.0, "Left", 0.0),
        ] {
            let a = deg.to_radians();
            let r = radius + 25.0;
            self.label(
                text,
                cx + r * a.sin(),
                cy - r * a.cos() + offset,
                "rgba(0, 217, 255, 0.6)",
                "11px Arial",
                "center",
            );
        }

        self.draw_listener(cx, cy);

        let offset = projection::top_down(snapshot.cartesian, scale as f32);
        let (sx, sy) = (cx + offset.x as f64, cy + offset.y as f64);

        ctx.set_stroke_style_str(CONNECTION);
        ctx.set_line_width(2.0);
        self.set_dash(true);
        self.line(cx, cy, sx, sy);
        self.set_dash(false);
        self.label(
            &format!("{:.1}m", snapshot.distance),
            (cx + sx) / 2.0,
            (cy + sy) / 2.0 - 10.0,
            DISTANCE_TEXT,
            "bold 14px monospace",
            "center",
        );

        let size =
            EMITTER_BASE_SIZE * (1.0 + snapshot.cartesian.y as f64 * EMITTER_HEIGHT_SIZE_GAIN);
        if snapshot.playing {
            self.draw_ripples(sx, sy, size + 15.0, time_sec);
        }
        let marker = (size + pulse).max(1.0);
        ctx.set_fill_style_str(EMITTER_SHADOW);
        self.circle(sx + 3.0, sy + 3.0, marker, true);
        ctx.set_fill_style_str(EMITTER);
        self.circle(sx, sy, marker, true);
        self.label("Sound", sx, sy + marker + 18.0, EMITTER, "bold 12px Arial", "center");

        self.label(
            "Top-Down View",
            10.0,
            area.y + area.h - 10.0,
            LABEL,
            "12px Arial",
            "left",
        );
    }

    fn draw_ripples(&self, x: f64, y: f64, base: f64, time_sec: f64) {
        let ctx = &self.ctx;
        ctx.set_line_width(2.0);
        let drift = (time_sec * RIPPLE_DRIFT_PER_SEC) % RIPPLE_SPACING;
        for i in 0..RIPPLE_COUNT {
            let alpha = 0.3 - i as f64 * 0.1;
            ctx.set_stroke_style_str(&format!("rgba(255, 107, 107, {:.2})", alpha));
            self.circle(x, y, base + i as f64 * RIPPLE_SPACING + drift, false);
        }
    }

    fn draw_listener(&self, x: f64, y: f64) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(LISTENER);
        self.circle(x, y, LISTENER_SIZE, true);
        ctx.set_fill_style_str(LISTENER_EARS);
        self.circle(x - 18.0, y, 5.0, true);
        self.circle(x + 18.0, y, 5.0, true);

        // Facing -Z, which is "up" on screen
        ctx.set_stroke_style_str(LISTENER);
        ctx.set_line_width(3.0);
        self.line(x, y, x, y - 30.0);
        ctx.begin_path();
        ctx.move_to(x - 8.0, y - 22.0);
        ctx.line_to(x, y - 35.0);
        ctx.line_to(x + 8.0, y - 22.0);
        ctx.stroke();
        self.label("Listener", x, y + 35.0, LISTENER, "bold 12px Arial", "center");
    }

    fn draw_side(&self, area: Rect, snapshot: &SceneSnapshot, scale: f64, pulse: f64) {
        let ctx = &self.ctx;
        let (cx, cy) = area.center();

        ctx.set_fill_style_str(SIDE_BACKGROUND);
        ctx.fill_rect(area.x, area.y, area.w, area.h);

        ctx.set_stroke_style_str(GRID);
        ctx.set_line_width(2.0);
        self.circle(cx, cy, snapshot.spherical.radius as f64 * scale, false);

        ctx.set_line_width(1.0);
        ctx.set_stroke_style_str(GROUND_LINE);
        self.line(area.x, cy, area.x + area.w, cy);
        ctx.set_stroke_style_str(FORWARD_LINE);
        self.line(cx, area.y, cx, area.y + area.h);

        ctx.set_fill_style_str(LISTENER);
        self.circle(cx, cy, 10.0, true);

        let offset = projection::side(snapshot.cartesian, scale as f32);
        let (sx, sy) = (cx + offset.x as f64, cy + offset.y as f64);

        ctx.set_stroke_style_str(CONNECTION);
        ctx.set_line_width(2.0);
        self.set_dash(true);
        self.line(cx, cy, sx, sy);
        self.set_dash(false);

        let size = 10.0 + pulse * 2.0 / PULSE_AMPLITUDE;
        if snapshot.playing {
            ctx.set_stroke_style_str(EMITTER_SHADOW);
            ctx.set_line_width(2.0);
            self.circle(sx, sy, size + 10.0, false);
        }
        ctx.set_fill_style_str(EMITTER);
        self.circle(sx, sy, size, true);

        self.label("Side View", area.x + 10.0, area.y + 20.0, LABEL, "11px Arial", "left");
        let green = "rgba(100, 255, 100, 0.6)";
        let blue = "rgba(100, 100, 255, 0.6)";
        self.label("← Back", area.x + 10.0, cy - 5.0, green, "11px Arial", "left");
        self.label("Front →", area.x + area.w - 50.0, cy - 5.0, green, "11px Arial", "left");
        self.label("Up", cx + 5.0, area.y + 20.0, blue, "11px Arial", "left");
        self.label("Down", cx + 5.0, area.y + area.h - 10.0, blue, "11px Arial", "left");
    }

    fn draw_radar(&self, area: Rect, snapshot: &SceneSnapshot, pulse: f64, time_sec: f64) {
        let ctx = &self.ctx;
        let (cx, cy) = area.center();
        let r = area.w.min(area.h) * RADAR_RADIUS_FRACTION;

        ctx.set_fill_style_str(RADAR_BACKGROUND);
        ctx.fill_rect(area.x, area.y, area.w, area.h);

        ctx.set_stroke_style_str("rgba(0, 217, 255, 0.2)");
        ctx.set_line_width(1.0);
        for i in 0..RADAR_RINGS {
            self.circle(cx, cy, r * (RADAR_RINGS - i) as f64 / RADAR_RINGS as f64, false);
        }
        ctx.set_stroke_style_str(GRID);
        self.line(cx - r, cy, cx + r, cy);
        self.line(cx, cy - r, cx, cy + r);

        let dim = "rgba(0, 217, 255, 0.7)";
        self.label("Front", cx, cy - r - 5.0, dim, "10px Arial", "center");
        self.label("Back", cx, cy + r + 12.0, dim, "10px Arial", "center");
        self.label("L", cx - r - 10.0, cy + 4.0, dim, "10px Arial", "center");
        self.label("R", cx + r + 10.0, cy + 4.0, dim, "10px Arial", "center");

        let elevation = snapshot.spherical.elevation;
        let offset = projection::radar(snapshot.spherical.azimuth, elevation, r as f32);
        let (sx, sy) = (cx + offset.x as f64, cy + offset.y as f64);

        ctx.set_stroke_style_str("rgba(255, 107, 107, 0.6)");
        ctx.set_line_width(3.0);
        self.line(cx, cy, sx, sy);

        let size = EMITTER_BASE_SIZE + pulse;
        if snapshot.playing {
            ctx.set_line_width(2.0);
            let drift = (time_sec * 20.0) % 15.0;
            for i in 0..2 {
                let alpha = 0.3 - i as f64 * 0.1;
                ctx.set_stroke_style_str(&format!("rgba(255, 107, 107, {:.2})", alpha));
                self.circle(sx, sy, size + 8.0 + i as f64 * 12.0 + drift, false);
            }
        }
        ctx.set_fill_style_str(EMITTER);
        self.circle(sx, sy, size, true);

        if elevation.abs() > 0.3 {
            let (arrow, color, dy) = if elevation > 0.0 {
                ("▲", LISTENER, -8.0)
            } else {
                ("▼", EMITTER, 8.0)
            };
            self.label(arrow, sx, sy + dy, color, "bold 14px Arial", "center");
        }

        ctx.set_fill_style_str(LISTENER);
        self.circle(cx, cy, 8.0, true);
        self.label(
            "First-Person Radar",
            area.x + 10.0,
            area.y + 20.0,
            LABEL,
            "11px Arial",
            "left",
        );
    }

    fn draw_direction_badge(&self, right_edge: f64, snapshot: &SceneSnapshot) {
        let ctx = &self.ctx;
        let direction = Direction::classify(
            snapshot.spherical.azimuth_deg(),
            snapshot.spherical.elevation_deg(),
        );
        let x = right_edge - DIRECTION_BADGE_WIDTH - 15.0;
        ctx.set_fill_style_str("rgba(0, 0, 0, 0.7)");
        ctx.fill_rect(x, 15.0, DIRECTION_BADGE_WIDTH, DIRECTION_BADGE_HEIGHT);
        ctx.set_stroke_style_str("rgba(0, 217, 255, 0.5)");
        ctx.set_line_width(1.0);
        ctx.stroke_rect(x, 15.0, DIRECTION_BADGE_WIDTH, DIRECTION_BADGE_HEIGHT);
        self.label(
            &direction.to_string(),
            x + DIRECTION_BADGE_WIDTH / 2.0,
            38.0,
            ACCENT,
            "bold 16px Arial",
            "center",
        );
    }
}
