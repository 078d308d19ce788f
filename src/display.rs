//! Rendering layer. All terminal I/O lives here.
//!
//! Each function receives a mutable writer and the draw calls produced by
//! `render::scene`. No game logic is performed; this module only translates
//! world-space draw calls into terminal commands.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use glam::Vec2;
use musou_kokaton::assets::{Atlas, Rgb};
use musou_kokaton::entities::{BarTier, HealthBar};
use musou_kokaton::geometry::Playfield;
use musou_kokaton::render::{BarOwner, DrawCall};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Rgb { r: 80, g: 120, b: 255 };
const C_HUD_LABEL: Color = Color::White;
const C_BAR_EMPTY: Color = Color::Rgb { r: 125, g: 125, b: 125 };
const C_BUFF: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

/// HUD bar length in cells.
const BAR_CELLS: usize = 20;

/// Terminal area, in cells.
#[derive(Clone, Copy, Debug)]
pub struct Screen {
    pub width: u16,
    pub height: u16,
}

impl Screen {
    pub fn current() -> std::io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self { width, height })
    }

    fn cols(&self) -> f32 {
        f32::from(self.width.saturating_sub(2).max(1))
    }

    fn rows(&self) -> f32 {
        f32::from(self.height.saturating_sub(4).max(1))
    }

    /// Cell under a world position. May lie outside the play area.
    fn cell(&self, playfield: &Playfield, pos: Vec2) -> (i32, i32) {
        let col = 1.0 + pos.x / playfield.width * self.cols();
        let row = 2.0 + pos.y / playfield.height * self.rows();
        (col.floor() as i32, row.floor() as i32)
    }

    /// Only cells strictly inside the border are drawable.
    fn in_play_area(&self, col: i32, row: i32) -> bool {
        col >= 1
            && col < i32::from(self.width) - 1
            && row >= 2
            && row < i32::from(self.height) - 2
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    calls: &[DrawCall],
    atlas: &Atlas,
    playfield: &Playfield,
    screen: Screen,
) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, screen)?;

    for call in calls {
        match call {
            DrawCall::Sprite { id, center, alpha } => {
                let sprite = atlas.get(*id)?;
                let (col, row) = screen.cell(playfield, *center);
                let left = col - sprite.width() as i32 / 2;
                let top = row - sprite.height() as i32 / 2;
                out.queue(style::SetForegroundColor(faded(sprite.color, *alpha)))?;
                for (dy, line) in sprite.rows.iter().enumerate() {
                    for (dx, glyph) in line.chars().enumerate() {
                        if glyph != ' ' {
                            put(out, screen, left + dx as i32, top + dy as i32, glyph)?;
                        }
                    }
                }
            }
            DrawCall::Disc {
                center,
                radius,
                color,
                alpha,
            } => draw_disc(out, screen, playfield, *center, *radius, faded(*color, *alpha), *alpha)?,
            DrawCall::Score(score) => draw_score(out, *score)?,
            DrawCall::HealthBar { owner, bar } => draw_health_bar(out, screen, *owner, bar)?,
            DrawCall::BuffTimer(ticks) => draw_buff_timer(out, screen, *ticks)?,
            DrawCall::GameOver { score } => draw_game_over(out, screen, *score)?,
        }
    }

    draw_controls_hint(out, screen)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, screen.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn put<W: Write>(out: &mut W, screen: Screen, col: i32, row: i32, glyph: char) -> Result<()> {
    if screen.in_play_area(col, row) {
        out.queue(cursor::MoveTo(col as u16, row as u16))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

/// Scale a color toward black by opacity; terminals have no real alpha.
fn faded(color: Rgb, alpha: u8) -> Color {
    let scale = |c: u8| (u16::from(c) * u16::from(alpha) / 255) as u8;
    Color::Rgb {
        r: scale(color.0),
        g: scale(color.1),
        b: scale(color.2),
    }
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, screen: Screen) -> Result<()> {
    let w = screen.width as usize;
    let h = screen.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // top edge, just under the HUD row
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // bottom edge, above the controls hint
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(screen.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── Play-area shapes ──────────────────────────────────────────────────────────

/// Filled ellipse covering a world-space circle. Translucent discs are
/// shaded, opaque ones solid. Always at least one cell.
fn draw_disc<W: Write>(
    out: &mut W,
    screen: Screen,
    playfield: &Playfield,
    center: Vec2,
    radius: f32,
    color: Color,
    alpha: u8,
) -> Result<()> {
    let glyph = if alpha < u8::MAX { '░' } else { '●' };
    let (cx, cy) = screen.cell(playfield, center);
    let rx = (radius / playfield.width * screen.cols()).max(0.5);
    let ry = (radius / playfield.height * screen.rows()).max(0.5);

    out.queue(style::SetForegroundColor(color))?;
    let reach_x = rx.ceil() as i32;
    let reach_y = ry.ceil() as i32;
    for dy in -reach_y..=reach_y {
        for dx in -reach_x..=reach_x {
            let nx = dx as f32 / rx;
            let ny = dy as f32 / ry;
            if nx * nx + ny * ny <= 1.0 {
                put(out, screen, cx + dx, cy + dy, glyph)?;
            }
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_score<W: Write>(out: &mut W, score: u32) -> Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", score)))?;
    Ok(())
}

fn tier_color(tier: BarTier) -> Color {
    match tier {
        BarTier::Green => Color::Rgb { r: 181, g: 255, b: 20 },
        BarTier::Yellow => Color::Rgb { r: 251, g: 202, b: 77 },
        BarTier::Red => Color::Rgb { r: 255, g: 0, b: 0 },
    }
}

/// `HP [██████░░░░] 60/100`. The avatar's bar sits left of centre, the
/// boss's on the right edge.
fn draw_health_bar<W: Write>(
    out: &mut W,
    screen: Screen,
    owner: BarOwner,
    bar: &HealthBar,
) -> Result<()> {
    let filled = (bar.fraction() * BAR_CELLS as f32).round() as usize;
    let label = match owner {
        BarOwner::Avatar => "HP ",
        BarOwner::Boss => "BOSS ",
    };
    let numbers = format!(" {}/{}", bar.life.max(0), bar.max_life);
    let total = label.len() + BAR_CELLS + 2 + numbers.len();
    let col = match owner {
        BarOwner::Avatar => 16,
        BarOwner::Boss => screen.width.saturating_sub(total as u16 + 1),
    };

    out.queue(cursor::MoveTo(col, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LABEL))?;
    out.queue(Print(format!("{label}[")))?;
    out.queue(style::SetForegroundColor(tier_color(bar.tier)))?;
    out.queue(Print("█".repeat(filled)))?;
    out.queue(style::SetForegroundColor(C_BAR_EMPTY))?;
    out.queue(Print("░".repeat(BAR_CELLS.saturating_sub(filled))))?;
    out.queue(style::SetForegroundColor(C_HUD_LABEL))?;
    out.queue(Print(format!("]{numbers}")))?;
    Ok(())
}

fn draw_buff_timer<W: Write>(out: &mut W, screen: Screen, ticks: i32) -> Result<()> {
    let tag = format!("[DOMAIN {:>3}]", ticks.max(0));
    let col = (screen.width / 2).saturating_sub(tag.len() as u16 / 2);
    out.queue(cursor::MoveTo(col, screen.height.saturating_sub(2)))?;
    out.queue(style::SetForegroundColor(C_BUFF))?;
    out.queue(Print(tag))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, screen: Screen) -> Result<()> {
    out.queue(cursor::MoveTo(1, screen.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(
        "←↑↓→ / WASD : Move   SPACE : Beam   ENTER : Domain (50 pts)   Q : Quit",
    ))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, screen: Screen, score: u32) -> Result<()> {
    let score_line = format!("Final Score: {:>6}", score);
    let lines: [(&str, Color); 3] = [
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];

    let cx = screen.width / 2;
    let total_rows = lines.len() + 1;
    let start_row = (screen.height / 2).saturating_sub(total_rows as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    Ok(())
}
