//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The logical screen is scaled so that one tile covers `cell_w x cell_h`
//! terminal cells and is drawn inside a border, centred in the viewport.
//! [`GameView::to_logical`] inverts the mapping for mouse clicks, returning
//! the logical point at the centre of the clicked terminal cell.

use crate::core::{GameSnapshot, Layout, MenuOption, Rect};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Coord, Difficulty, Point, Screen, TileKind};

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

const BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const ACCENT: Rgb = Rgb::new(230, 70, 70);
const OPTION_BG: Rgb = Rgb::new(60, 60, 80);

/// Minimum free columns right of the frame before the side panel is drawn.
const PANEL_MIN_W: u16 = 12;

/// A lightweight terminal renderer for the tile-matching game.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // At 4x2 every 50-unit region edge falls on a cell boundary.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

impl GameView {
    fn tile_size(layout: &Layout) -> i32 {
        i32::from(layout.tile_size.max(1))
    }

    fn scale_x(&self, layout: &Layout, v: i32) -> i32 {
        v * i32::from(self.cell_w) / Self::tile_size(layout)
    }

    fn scale_y(&self, layout: &Layout, v: i32) -> i32 {
        v * i32::from(self.cell_h) / Self::tile_size(layout)
    }

    /// Terminal size of the logical screen (without border).
    pub fn screen_size(&self, layout: &Layout) -> (u16, u16) {
        let w = self.scale_x(layout, i32::from(layout.width));
        let h = self.scale_y(layout, i32::from(layout.height));
        (clamp_u16(w), clamp_u16(h))
    }

    /// Terminal cell of logical (0, 0).
    pub fn screen_origin(&self, layout: &Layout, viewport: Viewport) -> (u16, u16) {
        let (sw, sh) = self.screen_size(layout);
        let frame_w = sw.saturating_add(2);
        let frame_h = sh.saturating_add(2);
        (
            viewport.width.saturating_sub(frame_w) / 2 + 1,
            viewport.height.saturating_sub(frame_h) / 2 + 1,
        )
    }

    /// Terminal cell containing a logical point (may be off-screen).
    pub fn to_terminal(&self, layout: &Layout, viewport: Viewport, p: Point) -> (i32, i32) {
        let (ox, oy) = self.screen_origin(layout, viewport);
        (
            i32::from(ox) + self.scale_x(layout, p.x),
            i32::from(oy) + self.scale_y(layout, p.y),
        )
    }

    /// Logical point under a terminal cell, `None` outside the drawn screen.
    pub fn to_logical(
        &self,
        layout: &Layout,
        viewport: Viewport,
        col: u16,
        row: u16,
    ) -> Option<Point> {
        let (ox, oy) = self.screen_origin(layout, viewport);
        let (sw, sh) = self.screen_size(layout);
        if col < ox || row < oy || col - ox >= sw || row - oy >= sh {
            return None;
        }
        let ts = Self::tile_size(layout);
        let dx = i32::from(col - ox);
        let dy = i32::from(row - oy);
        Some(Point::new(
            (2 * dx + 1) * ts / (2 * i32::from(self.cell_w)),
            (2 * dy + 1) * ts / (2 * i32::from(self.cell_h)),
        ))
    }

    /// Render the current snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = &snap.layout;
        let (sw, sh) = self.screen_size(layout);
        let (ox, oy) = self.screen_origin(layout, viewport);

        fb.fill_rect(ox, oy, sw, sh, ' ', CellStyle::new(TEXT, BG));
        fb.draw_box(
            ox.saturating_sub(1),
            oy.saturating_sub(1),
            sw.saturating_add(2),
            sh.saturating_add(2),
            CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG),
        );

        match snap.screen {
            Screen::Menu => self.draw_menu(fb, layout, viewport),
            Screen::DifficultySelect => self.draw_difficulty(fb, layout, viewport),
            Screen::Playing => {
                self.draw_board(fb, snap, viewport);
                self.draw_hud(fb, snap, viewport);
            }
            Screen::GameOver | Screen::Victory => self.draw_end(fb, snap, viewport),
        }
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, layout: &Layout, viewport: Viewport) {
        let title = CellStyle::new(ACCENT, BG).bold();
        let anchor = layout.title_anchor();
        self.text_at(fb, layout, viewport, anchor, "MEOW~ MEOW~ MEOW~", title);

        for option in MenuOption::ALL {
            let label = match option {
                MenuOption::Start => "START",
                MenuOption::Difficulty => "DIFFICULTY",
            };
            self.draw_option(fb, layout, viewport, layout.menu_region(option), label);
        }
    }

    fn draw_difficulty(&self, fb: &mut FrameBuffer, layout: &Layout, viewport: Viewport) {
        for difficulty in Difficulty::ALL {
            let label = match difficulty {
                Difficulty::Easy => "EASY",
                Difficulty::Normal => "NORMAL",
                Difficulty::Hard => "HARD",
            };
            let region = layout.difficulty_region(difficulty);
            self.draw_option(fb, layout, viewport, region, label);
        }
    }

    fn draw_option(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        viewport: Viewport,
        region: Rect,
        label: &str,
    ) {
        let (x0, y0, w, h) = self.term_rect(layout, viewport, region);
        let style = CellStyle::new(TEXT, OPTION_BG).bold();
        fb.fill_rect(x0, y0, w, h, ' ', style);
        fb.put_str_centered(x0 + w / 2, y0 + h.saturating_sub(1) / 2, label, style);
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let layout = &snap.layout;

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                let at = Coord::new(row, col);
                let rect = layout.cell_rect(snap.rows, snap.cols, at);
                let (x0, y0, w, h) = self.term_rect(layout, viewport, rect);
                // One column of gap between neighbouring tiles.
                let tw = w.saturating_sub(1).max(1);
                let (gx, gy) = (x0 + tw / 2, y0 + h.saturating_sub(1) / 2);

                match snap.cell(at).flatten() {
                    Some(kind) => {
                        let selected = snap.is_selected(at);
                        let style = tile_style(kind, selected);
                        fb.fill_rect(x0, y0, tw, h, ' ', style);
                        fb.put_char(gx, gy, tile_glyph(kind), style);
                    }
                    None => {
                        let style = CellStyle::new(Rgb::new(90, 90, 100), BG).dim();
                        fb.put_char(gx, gy, '·', style);
                    }
                }
            }
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let (sw, _) = self.screen_size(&snap.layout);
        let (ox, oy) = self.screen_origin(&snap.layout, viewport);
        let label = CellStyle::new(TEXT, PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let panel_x = ox.saturating_add(sw).saturating_add(3);
        let has_panel = panel_x < viewport.width && viewport.width - panel_x >= PANEL_MIN_W;

        if !has_panel {
            // Compact HUD on the top border.
            let y = oy.saturating_sub(1);
            let mut x = fb.put_str(ox, y, "T ", label);
            x = fb.put_tenths(x, y, snap.remaining_ms, value);
            x = fb.put_str(x, y, "s S ", label);
            fb.put_u32(x, y, snap.score, value);
            return;
        }

        let mut y = oy.saturating_sub(1);
        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        let x = fb.put_tenths(panel_x, y, snap.remaining_ms, value);
        fb.put_char(x, y, 's', value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MODE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.difficulty.as_str(), value);
        y = y.saturating_add(2);

        let dim = value.dim();
        fb.put_str(panel_x, y, "Q quit", dim);
    }

    fn draw_end(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let layout = &snap.layout;
        let headline = match snap.screen {
            Screen::Victory => "VICTORY!",
            _ => "GAME OVER",
        };
        let cx = i32::from(layout.width) / 2;
        let cy = i32::from(layout.height) / 2;
        let style = CellStyle::new(ACCENT, BG).bold();

        self.text_at(fb, layout, viewport, Point::new(cx, cy - 50), headline, style);

        let (tx, ty) = self.to_terminal(layout, viewport, Point::new(cx, cy + 10));
        let (tx, ty) = (clamp_u16(tx), clamp_u16(ty));
        let label_w = "SCORE ".len() as u16;
        let digits = digit_count(snap.score);
        let start = tx.saturating_sub((label_w + digits) / 2);
        let x = fb.put_str(start, ty, "SCORE ", style);
        fb.put_u32(x, ty, snap.score, style);

        let hint = CellStyle::new(ACCENT, BG);
        self.text_at(fb, layout, viewport, Point::new(cx, cy + 70), "R restart", hint);
        self.text_at(fb, layout, viewport, Point::new(cx, cy + 130), "Q quit", hint);
    }

    fn text_at(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        viewport: Viewport,
        p: Point,
        text: &str,
        style: CellStyle,
    ) {
        let (x, y) = self.to_terminal(layout, viewport, p);
        fb.put_str_centered(clamp_u16(x), clamp_u16(y), text, style);
    }

    /// Terminal rectangle covered by a logical rectangle.
    fn term_rect(&self, layout: &Layout, viewport: Viewport, r: Rect) -> (u16, u16, u16, u16) {
        let (x0, y0) = self.to_terminal(layout, viewport, Point::new(r.x, r.y));
        let (x1, y1) = self.to_terminal(layout, viewport, Point::new(r.x + r.w, r.y + r.h));
        (
            clamp_u16(x0),
            clamp_u16(y0),
            clamp_u16(x1 - x0),
            clamp_u16(y1 - y0),
        )
    }
}

fn clamp_u16(v: i32) -> u16 {
    v.clamp(0, i32::from(u16::MAX)) as u16
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

fn tile_glyph(kind: TileKind) -> char {
    match kind {
        TileKind::Cat => 'C',
        TileKind::Fish => 'F',
        TileKind::Yarn => 'Y',
        TileKind::Paw => 'P',
        TileKind::Mouse => 'M',
        TileKind::Bell => 'B',
    }
}

fn tile_style(kind: TileKind, selected: bool) -> CellStyle {
    let bg = match kind {
        TileKind::Cat => Rgb::new(240, 160, 70),
        TileKind::Fish => Rgb::new(80, 150, 230),
        TileKind::Yarn => Rgb::new(220, 90, 150),
        TileKind::Paw => Rgb::new(120, 200, 100),
        TileKind::Mouse => Rgb::new(160, 160, 175),
        TileKind::Bell => Rgb::new(235, 215, 80),
    };
    if selected {
        CellStyle::new(bg, Rgb::new(250, 250, 250)).bold()
    } else {
        CellStyle::new(Rgb::new(20, 20, 20), bg).bold()
    }
}
