//! Pure mapping from a [`GameSnapshot`] to framebuffer cells.
//!
//! No terminal I/O happens here; the view only decides which styled
//! characters go where. Layout is recomputed from the viewport on every
//! frame so resizes never touch game state.

use tui_2048_core::GameSnapshot;
use tui_2048_types::{SessionStatus, GRID_SIZE};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const TEXT_DARK: Rgb = Rgb::new(119, 110, 101);
const TEXT_LIGHT: Rgb = Rgb::new(249, 246, 242);
const SCREEN_BG: Rgb = Rgb::new(250, 248, 239);

/// Columns reserved beside the board for the score panel.
const PANEL_W: u16 = 14;

/// Background color for a tile value, matching the original palette.
fn tile_bg(value: u32) -> Rgb {
    match value {
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        2048 => Rgb::new(237, 194, 46),
        // Everything past 2048 shares the "super" tile color.
        _ => Rgb::new(60, 58, 50),
    }
}

fn tile_fg(value: u32) -> Rgb {
    if value <= 4 {
        TEXT_DARK
    } else {
        TEXT_LIGHT
    }
}

/// Stateless game renderer. Tile cell size adapts to the viewport.
#[derive(Debug, Clone, Copy)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Pick a tile size that fits the viewport, preferring the large one.
    fn cell_size(width: u16, height: u16) -> (u16, u16) {
        let grid = GRID_SIZE as u16;
        for (cw, ch) in [(8u16, 3u16), (6, 3), (5, 1)] {
            // board plus the side panel and a one-cell border
            if grid * cw + 2 + PANEL_W <= width && grid * ch + 2 <= height {
                return (cw, ch);
            }
        }
        (5, 1)
    }

    /// Render the snapshot into `fb`, resizing it to the viewport first.
    pub fn render(&self, snapshot: &GameSnapshot, width: u16, height: u16, fb: &mut FrameBuffer) {
        fb.resize(width, height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle {
                fg: TEXT_DARK,
                bg: SCREEN_BG,
                ..CellStyle::default()
            },
        });

        let grid = GRID_SIZE as u16;
        let (cell_w, cell_h) = Self::cell_size(width, height);
        let board_w = grid * cell_w + 2;
        let board_h = grid * cell_h + 2;
        let total_w = board_w + PANEL_W;
        let x0 = (width.saturating_sub(total_w)) / 2;
        let y0 = (height.saturating_sub(board_h)) / 2;

        self.draw_board(snapshot, x0, y0, cell_w, cell_h, fb);
        self.draw_panel(snapshot, x0 + board_w + 2, y0, fb);
        self.draw_overlay(snapshot, x0, y0, board_w, board_h, fb);
    }

    fn draw_board(
        &self,
        snapshot: &GameSnapshot,
        x0: u16,
        y0: u16,
        cell_w: u16,
        cell_h: u16,
        fb: &mut FrameBuffer,
    ) {
        let grid = GRID_SIZE as u16;
        let frame = CellStyle {
            fg: TEXT_LIGHT,
            bg: BOARD_BG,
            ..CellStyle::default()
        };
        fb.fill_rect(x0, y0, grid * cell_w + 2, grid * cell_h + 2, ' ', frame);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = snapshot.board[row * GRID_SIZE + col];
                let tx = x0 + 1 + (col as u16) * cell_w;
                let ty = y0 + 1 + (row as u16) * cell_h;
                self.draw_tile(value, tx, ty, cell_w, cell_h, fb);
            }
        }
    }

    fn draw_tile(&self, value: u32, x: u16, y: u16, w: u16, h: u16, fb: &mut FrameBuffer) {
        let bg = if value == 0 { EMPTY_BG } else { tile_bg(value) };
        let style = CellStyle {
            fg: tile_fg(value),
            bg,
            bold: value >= 8,
            ..CellStyle::default()
        };
        // leave a one-cell gutter so tiles read as separate squares
        fb.fill_rect(x, y, w.saturating_sub(1), h, ' ', style);

        if value == 0 {
            return;
        }
        let digits = Self::digit_count(value);
        let inner = w.saturating_sub(1);
        let dx = inner.saturating_sub(digits) / 2;
        fb.put_u32(x + dx, y + h / 2, value, style);
    }

    fn digit_count(value: u32) -> u16 {
        let mut n = value;
        let mut count = 1;
        while n >= 10 {
            n /= 10;
            count += 1;
        }
        count
    }

    fn draw_panel(&self, snapshot: &GameSnapshot, x: u16, y: u16, fb: &mut FrameBuffer) {
        let label = CellStyle {
            fg: TEXT_DARK,
            bg: SCREEN_BG,
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: TEXT_DARK,
            bg: SCREEN_BG,
            ..CellStyle::default()
        };
        let dimmed = CellStyle {
            fg: TEXT_DARK,
            bg: SCREEN_BG,
            dim: true,
            ..CellStyle::default()
        };

        fb.put_str(x, y, "SCORE", label);
        fb.put_u32(x, y + 1, snapshot.score, value);
        fb.put_str(x, y + 3, "BEST", label);
        fb.put_u32(x, y + 4, snapshot.best, value);

        let status = match snapshot.status {
            SessionStatus::Playing => "playing",
            SessionStatus::Won => "you win!",
            SessionStatus::Over => "game over",
        };
        fb.put_str(x, y + 6, status, value);

        fb.put_str(x, y + 8, "arrows move", dimmed);
        fb.put_str(x, y + 9, "r restart", dimmed);
        fb.put_str(x, y + 10, "q quit", dimmed);
    }

    fn draw_overlay(
        &self,
        snapshot: &GameSnapshot,
        x0: u16,
        y0: u16,
        board_w: u16,
        board_h: u16,
        fb: &mut FrameBuffer,
    ) {
        let text = match snapshot.status {
            SessionStatus::Playing => return,
            SessionStatus::Won => " YOU WIN! ",
            SessionStatus::Over => " GAME OVER ",
        };
        let bg = match snapshot.status {
            SessionStatus::Won => tile_bg(2048),
            _ => TEXT_DARK,
        };
        let style = CellStyle {
            fg: TEXT_LIGHT,
            bg,
            bold: true,
            ..CellStyle::default()
        };
        let len = text.chars().count() as u16;
        let x = x0 + board_w.saturating_sub(len) / 2;
        let y = y0 + board_h / 2;
        fb.put_str(x, y, text, style);
    }
}

impl Default for GameView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_2048_core::GameSession;

    fn row_text(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
            .collect()
    }

    fn screen_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| row_text(fb, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_shows_score_panel() {
        let session = GameSession::new(7);
        let mut fb = FrameBuffer::new(0, 0);
        GameView::new().render(&session.snapshot(), 80, 24, &mut fb);

        let text = screen_text(&fb);
        assert!(text.contains("SCORE"));
        assert!(text.contains("BEST"));
        assert!(text.contains("playing"));
    }

    #[test]
    fn test_render_resizes_framebuffer() {
        let session = GameSession::new(7);
        let mut fb = FrameBuffer::new(10, 5);
        GameView::new().render(&session.snapshot(), 100, 40, &mut fb);
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 40);
    }

    #[test]
    fn test_tiles_are_drawn() {
        let session = GameSession::new(42);
        let mut fb = FrameBuffer::new(0, 0);
        GameView::new().render(&session.snapshot(), 80, 24, &mut fb);

        // a fresh game has two tiles, each a 2 or a 4
        let text = screen_text(&fb);
        assert!(text.contains('2') || text.contains('4'));
    }

    #[test]
    fn test_game_over_overlay() {
        let mut snapshot = GameSession::new(1).snapshot();
        snapshot.status = SessionStatus::Over;

        let mut fb = FrameBuffer::new(0, 0);
        GameView::new().render(&snapshot, 80, 24, &mut fb);
        assert!(screen_text(&fb).contains("GAME OVER"));
    }

    #[test]
    fn test_win_overlay() {
        let mut snapshot = GameSession::new(1).snapshot();
        snapshot.status = SessionStatus::Won;

        let mut fb = FrameBuffer::new(0, 0);
        GameView::new().render(&snapshot, 80, 24, &mut fb);
        assert!(screen_text(&fb).contains("YOU WIN!"));
    }

    #[test]
    fn test_panel_fits_at_minimum_width() {
        // Narrowest viewport the large tile size accepts: the reserved
        // panel columns must hold the full key-help text.
        let width = 4 * 8 + 2 + PANEL_W;
        let session = GameSession::new(7);
        let mut fb = FrameBuffer::new(0, 0);
        GameView::new().render(&session.snapshot(), width, 14, &mut fb);

        let text = screen_text(&fb);
        assert!(text.contains("SCORE"));
        assert!(text.contains("arrows move"));
    }

    #[test]
    fn test_small_viewport_does_not_panic() {
        let session = GameSession::new(3);
        let mut fb = FrameBuffer::new(0, 0);
        GameView::new().render(&session.snapshot(), 12, 6, &mut fb);
        assert_eq!(fb.width(), 12);
    }

    #[test]
    fn test_super_tile_color_is_distinct() {
        assert_ne!(tile_bg(4096), tile_bg(2048));
        assert_eq!(tile_bg(4096), tile_bg(8192));
    }
}
