//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. Board cells render 2x1 to
//! compensate for terminal glyph aspect ratio. The view also draws the
//! line-clear flash, the interpolated hard-drop piece, particles, the side
//! panel, and the start/game-over overlays.

use crate::core::particles::UNITS_PER_CELL;
use crate::core::{EffectView, GameSnapshot, PieceView};
use crate::term::fb::{FrameBuffer, Rgb, Style};
use crate::types::{BlockColor, GRID_HEIGHT, GRID_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders snapshots into framebuffers.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

const PLAY_BG: Rgb = Rgb::new(20, 20, 28);
const WHITE: Rgb = Rgb::new(255, 255, 255);

fn color_rgb(color: BlockColor) -> Rgb {
    match color {
        BlockColor::Cyan => Rgb::new(0, 255, 255),
        BlockColor::Yellow => Rgb::new(255, 255, 0),
        BlockColor::Magenta => Rgb::new(255, 0, 255),
        BlockColor::Orange => Rgb::new(255, 165, 0),
        BlockColor::Blue => Rgb::new(80, 120, 255),
        BlockColor::Red => Rgb::new(255, 0, 0),
        BlockColor::Green => Rgb::new(0, 255, 0),
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render one frame.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let frame_w = GRID_WIDTH as u16 * self.cell_w + 2;
        let frame_h = GRID_HEIGHT as u16 + 2;
        let start_x = viewport.width.saturating_sub(frame_w + 14) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        if !snap.started {
            self.draw_start_screen(&mut fb, viewport);
            return fb;
        }

        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            Style::fg(PLAY_BG).on(PLAY_BG),
        );

        self.draw_board(&mut fb, snap, start_x, start_y);

        match &snap.effect {
            EffectView::HardDrop { piece, display_y, .. } => {
                // The frozen piece at its interpolated row.
                let mut ghost = *piece;
                ghost.y = display_y.round() as i8;
                self.draw_piece(&mut fb, &ghost, start_x, start_y);
            }
            EffectView::None => {
                if let Some(piece) = &snap.piece {
                    self.draw_piece(&mut fb, piece, start_x, start_y);
                }
            }
            EffectView::LineClear { .. } => {
                // Locked cells already flash inside draw_board.
            }
        }

        self.draw_particles(&mut fb, snap, start_x, start_y);
        self.draw_side_panel(&mut fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            self.draw_overlay_line(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
            self.draw_overlay_line(
                &mut fb,
                start_x,
                start_y + 2,
                frame_w,
                frame_h,
                "press r to restart",
            );
        }

        fb
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, start_x: u16, start_y: u16) {
        let (clearing, highlight): (&[u8], bool) = match &snap.effect {
            EffectView::LineClear { rows, highlight, .. } => (rows, *highlight),
            _ => (&[], false),
        };

        for (y, row) in snap.board.iter().enumerate() {
            let flashing = clearing.contains(&(y as u8));
            for (x, cell) in row.iter().enumerate() {
                let Some(color) = cell else { continue };
                let (ch, fg) = if flashing {
                    if highlight {
                        // Expanded/highlight sub-phase: colored, emphasized.
                        ('▓', color_rgb(*color))
                    } else {
                        // Solid-white sub-phase.
                        ('█', WHITE)
                    }
                } else {
                    ('█', color_rgb(*color))
                };
                self.fill_cell(fb, start_x, start_y, x as u16, y as u16, ch, Style::fg(fg).on(PLAY_BG).bold());
            }
        }
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, piece: &PieceView, start_x: u16, start_y: u16) {
        let style = Style::fg(color_rgb(piece.color)).on(PLAY_BG).bold();
        for (row, col) in piece.shape.filled_cells() {
            let x = piece.x as i16 + col as i16;
            let y = piece.y as i16 + row as i16;
            if (0..GRID_WIDTH as i16).contains(&x) && (0..GRID_HEIGHT as i16).contains(&y) {
                self.fill_cell(fb, start_x, start_y, x as u16, y as u16, '█', style);
            }
        }
    }

    fn draw_particles(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, start_x: u16, start_y: u16) {
        for p in &snap.particles {
            let cell_x = p.x / UNITS_PER_CELL;
            let cell_y = p.y / UNITS_PER_CELL;
            if cell_x < 0.0 || cell_y < 0.0 {
                continue;
            }
            if cell_x >= GRID_WIDTH as f64 || cell_y >= GRID_HEIGHT as f64 {
                continue;
            }
            let ch = if p.life > 0.5 { '•' } else { '·' };
            let px = start_x + 1 + (cell_x * self.cell_w as f64) as u16;
            let py = start_y + 1 + cell_y as u16;
            fb.put(px, py, ch, Style::fg(color_rgb(p.color)).on(PLAY_BG));
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x + 10 >= viewport.width {
            return;
        }
        let label = Style::default().bold();
        let value = Style::default();

        let mut y = start_y;
        for (name, val) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines_cleared),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, &val.to_string(), value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        let style = Style::fg(color_rgb(snap.next.color)).bold();
        for (row, col) in snap.next.shape.filled_cells() {
            let px = panel_x + col as u16 * self.cell_w;
            fb.fill_rect(px, y + row as u16, self.cell_w, 1, '■', style);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = Style::fg(Rgb::new(200, 200, 200));
        fb.put(x, y, '┌', style);
        fb.put(x + w - 1, y, '┐', style);
        fb.put(x, y + h - 1, '└', style);
        fb.put(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', style);
            fb.put(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_overlay_line(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let mid_y = y + h / 2;
        let text_w = text.chars().count() as u16;
        let tx = x + w.saturating_sub(text_w) / 2;
        fb.put_str(tx, mid_y, text, Style::fg(WHITE).bold());
    }

    fn draw_start_screen(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let title = "B L O C K F A L L";
        let hint = "press space to start, q to quit";
        let mid_y = viewport.height / 2;
        let tx = viewport.width.saturating_sub(title.chars().count() as u16) / 2;
        let hx = viewport.width.saturating_sub(hint.chars().count() as u16) / 2;
        fb.put_str(tx, mid_y.saturating_sub(2), title, Style::fg(WHITE).bold());
        fb.put_str(hx, mid_y, hint, Style::default());
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }
}
