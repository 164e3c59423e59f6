pub const WINDOW_WIDTH: i32 = 1280;             // Initial window width
pub const WINDOW_HEIGHT: i32 = 720;             // Initial window height
pub const FPS: u32 = 60;                        // Frames per second

pub const TOTAL_TICKS: u32 = 60;                // Discrete offset updates per move

pub const DEFAULT_STEP: f64 = 1.0;              // Items advanced per move
pub const DEFAULT_FRAME_SIZE: f64 = 3.0;        // Items visible at once
pub const DEFAULT_ITEM_WIDTH: f64 = 200.0;      // Pixel width per item and control
pub const DEFAULT_ANIMATION_DURATION: f64 = 500.0; // Total move duration (milliseconds)

pub const MARGIN: f32 = 20.0;                   // Space around the carousel row
pub const INPUT_ROW_HEIGHT: f32 = 36.0;         // Height of one numeric input row
pub const INPUT_LABEL_WIDTH: f32 = 200.0;       // Width reserved for an input label
pub const INPUT_BOX_WIDTH: f32 = 140.0;         // Width of an input text box
pub const FONT_SIZE: i32 = 20;
