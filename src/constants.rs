use raylib::prelude::*;

pub const WINDOW_WIDTH: i32 = 1280;           // Default window width (pixels)
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height (pixels)
pub const FPS: u32 = 60;                      // Frames per second

pub const SWIPE_MIN_DISTANCE: f32 = 50.0;     // Horizontal drag must exceed this to count as a swipe

pub const ACCENT: Color = Color::new(245, 48, 3, 255);      // Highlight red (#f53003)
pub const INK: Color = Color::new(23, 23, 23, 255);         // Body text
pub const MUTED: Color = Color::new(115, 115, 115, 255);    // Counter and hint text
pub const DOT_IDLE: Color = Color::new(209, 213, 219, 255); // Position dot for non-current slides
pub const PANEL: Color = Color::new(243, 244, 246, 255);    // Command slide background panel
pub const BACKGROUND: Color = Color::WHITE;

pub const DECORATED_WORD: &str = "Imposter";  // Single-word slide that also gets the mascot drawing

// Type scale
pub const TITLE_FONT_SIZE: i32 = 64;
pub const TITLE_LINE_SPACING: i32 = 14;
pub const TITLE_MARGIN: i32 = 96;
pub const SINGLE_WORD_FONT_SIZE: i32 = 128;
pub const LIST_TITLE_FONT_SIZE: i32 = 48;
pub const HEADING_FONT_SIZE: i32 = 28;
pub const ITEM_FONT_SIZE: i32 = 22;
pub const ITEM_SPACING: i32 = 14;
pub const COMMAND_FONT_SIZE: i32 = 36;
pub const UI_FONT_SIZE: i32 = 20;

// Bullet-list geometry
pub const LIST_TITLE_Y: i32 = 120;
pub const COLUMNS_TOP: f32 = 250.0;
pub const COLUMNS_BOTTOM_MARGIN: f32 = 130.0;
pub const CONTENT_MARGIN: f32 = 96.0;
pub const COLUMN_GAP: f32 = 48.0;
pub const HEADING_GAP: i32 = 28;              // Space between a column heading and its first item

// Command slide panel
pub const COMMAND_PADDING: i32 = 32;
pub const COMMAND_BORDER: i32 = 6;            // Accent bar on the panel's left edge

// Mascot (single-word decoration)
pub const MASCOT_WIDTH: i32 = 96;
pub const MASCOT_HEIGHT: i32 = 128;
pub const MASCOT_GAP: i32 = 48;               // Space between the word and the mascot

// Navigation chrome
pub const CHROME_ROW_OFFSET: f32 = 64.0;      // Button/dot row center, measured from the bottom edge
pub const BUTTON_WIDTH: f32 = 140.0;
pub const BUTTON_HEIGHT: f32 = 44.0;
pub const GROUP_GAP: f32 = 24.0;              // Space between the buttons and the dot row
pub const DOT_SPACING: f32 = 22.0;
pub const DOT_RADIUS: f32 = 6.0;
pub const DOT_HIT_RADIUS: f32 = 10.0;         // Dots get a larger hit box than their visual radius
pub const SCREEN_MARGIN: i32 = 24;            // Counter and hint inset from the window corners
