//! Software-rendered maze view using `minifb`.
//!
//! Layout:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  maze grid                   │
//! │  (walls black, paths white,  │
//! │   player = blue disc)        │
//! ├──────────────────────────────┤
//! │  status bar                  │
//! │  key legend                  │
//! └──────────────────────────────┘
//! ```
//!
//! The window also doubles as the input device: digit keys feed the
//! simulation source and `Q`/`Escape` request quit.

use minifb::{Key, KeyRepeat, Window, WindowOptions};

use maze_grid::{Maze, Pos};

/// Pixel size of one maze cell, matching the original game.
pub const CELL_SIZE: usize = 50;
const STATUS_H: usize = 44;

const WALL_COLOR: u32 = 0xFF101010;
const PATH_COLOR: u32 = 0xFFF5F5F5;
const GRID_COLOR: u32 = 0xFFCCCCCC;
const PLAYER_COLOR: u32 = 0xFF2060D0;
const STATUS_BG: u32 = 0xFF0F3460;
const STATUS_FG: u32 = 0xFFEEEEEE;
const LEGEND_FG: u32 = 0xFF99AACC;

/// Digit keys understood by the simulation: finger count shown.
const COUNT_KEYS: [(Key, u8); 12] = [
    (Key::Key0, 0),
    (Key::Key1, 1),
    (Key::Key2, 2),
    (Key::Key3, 3),
    (Key::Key4, 4),
    (Key::Key5, 5),
    (Key::NumPad0, 0),
    (Key::NumPad1, 1),
    (Key::NumPad2, 2),
    (Key::NumPad3, 3),
    (Key::NumPad4, 4),
    (Key::NumPad5, 5),
];

/// One round of window input.
#[derive(Debug, Default)]
pub struct WindowInput {
    pub quit: bool,
    /// Finger counts from digit keys pressed this frame, oldest first.
    pub counts: Vec<u8>,
}

pub struct Visualizer {
    window: Window,
    buf: Vec<u32>,
    width: usize,
    height: usize,
}

impl Visualizer {
    pub fn new(maze: &Maze) -> Result<Self, String> {
        let width = maze.width() * CELL_SIZE;
        let height = maze.height() * CELL_SIZE + STATUS_H;

        let mut window = Window::new(
            "Maze Pilot — hand gesture navigation",
            width,
            height,
            WindowOptions { resize: false, ..WindowOptions::default() },
        )
        .map_err(|e| e.to_string())?;

        window.limit_update_rate(Some(std::time::Duration::from_millis(16))); // ~60fps

        Ok(Visualizer { window, buf: vec![WALL_COLOR; width * height], width, height })
    }

    /// Returns false when the window should close.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Poll keyboard input once per loop iteration.
    pub fn poll_input(&mut self) -> WindowInput {
        let mut input = WindowInput::default();
        if !self.window.is_open() {
            input.quit = true;
            return input;
        }

        if self.window.is_key_pressed(Key::Q, KeyRepeat::No)
            || self.window.is_key_pressed(Key::Escape, KeyRepeat::No)
        {
            input.quit = true;
        }

        for (key, count) in COUNT_KEYS {
            if self.window.is_key_pressed(key, KeyRepeat::Yes) {
                input.counts.push(count);
            }
        }

        input
    }

    /// Render one frame: the whole grid, the player disc, the status bar.
    pub fn render(&mut self, maze: &Maze, player: Pos, status: &str) {
        for y in 0..maze.height() {
            for x in 0..maze.width() {
                let color = if maze.is_open(x, y) { PATH_COLOR } else { WALL_COLOR };
                self.fill_rect(x * CELL_SIZE, y * CELL_SIZE, CELL_SIZE, CELL_SIZE, color);
                self.draw_border(x * CELL_SIZE, y * CELL_SIZE, CELL_SIZE, CELL_SIZE, GRID_COLOR);
            }
        }

        self.draw_disc(
            player.x * CELL_SIZE + CELL_SIZE / 2,
            player.y * CELL_SIZE + CELL_SIZE / 2,
            CELL_SIZE / 2 - 5,
            PLAYER_COLOR,
        );

        // ── Status bar ────────────────────────────────────────────────────
        let status_y = self.height - STATUS_H;
        self.fill_rect(0, status_y, self.width, STATUS_H, STATUS_BG);
        self.draw_label(status, 8, status_y + 8, STATUS_FG);
        self.draw_label(
            "1=up  2=right  3=down  4=left  0/5=hold  q=quit",
            8,
            status_y + 26,
            LEGEND_FG,
        );

        self.window.update_with_buffer(&self.buf, self.width, self.height).ok();
    }

    // ── Primitive drawing helpers ─────────────────────────────────────────

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for row in y..(y + h).min(self.height) {
            for col in x..(x + w).min(self.width) {
                self.buf[row * self.width + col] = color;
            }
        }
    }

    fn draw_border(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for col in x..(x + w).min(self.width) {
            if y < self.height {
                self.buf[y * self.width + col] = color;
            }
            if y + h - 1 < self.height {
                self.buf[(y + h - 1) * self.width + col] = color;
            }
        }
        for row in y..(y + h).min(self.height) {
            if x < self.width {
                self.buf[row * self.width + x] = color;
            }
            if x + w - 1 < self.width {
                self.buf[row * self.width + x + w - 1] = color;
            }
        }
    }

    fn draw_disc(&mut self, cx: usize, cy: usize, r: usize, color: u32) {
        let (cx, cy, r) = (cx as isize, cy as isize, r as isize);
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    fn set_pixel(&mut self, x: isize, y: isize, color: u32) {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            self.buf[y as usize * self.width + x as usize] = color;
        }
    }

    /// Minimal bitmap font — 3×5 characters for the status bar.
    fn draw_label(&mut self, text: &str, x: usize, y: usize, color: u32) {
        let mut cx = x;
        for ch in text.chars() {
            let glyph = char_glyph(ch);
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..3usize {
                    if bits & (1 << (2 - col)) != 0 {
                        self.set_pixel((cx + col) as isize, (y + row) as isize, color);
                    }
                }
            }
            cx += 4; // 3 wide + 1 gap
            if cx + 4 > self.width {
                break;
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3×5 bitmap font
// ────────────────────────────────────────────────────────────────────────────

fn char_glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'a' | 'A' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'b' | 'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'c' | 'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'd' | 'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'e' | 'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'f' | 'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'g' | 'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'h' | 'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'i' | 'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'j' | 'J' => [0b001, 0b001, 0b001, 0b101, 0b111],
        'k' | 'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'l' | 'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'm' | 'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'n' | 'N' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'o' | 'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'p' | 'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'r' | 'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        's' | 'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        't' | 'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'u' | 'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'v' | 'V' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'w' | 'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'x' | 'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'y' | 'Y' => [0b101, 0b101, 0b111, 0b010, 0b010],
        'z' | 'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '=' => [0b000, 0b111, 0b000, 0b111, 0b000],
        '(' => [0b001, 0b010, 0b010, 0b010, 0b001],
        ')' => [0b100, 0b010, 0b010, 0b010, 0b100],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _ => [0b000, 0b000, 0b010, 0b000, 0b000], // fallback dot
    }
}
