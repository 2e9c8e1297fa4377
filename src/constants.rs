pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const SLIDE_FIT: f32 = 0.9;               // Max share of the render area a slide may cover
pub const ENTRANCE_OFFSET: f32 = 0.03;        // Horizontal offset a slide enters from (fraction of width)

pub const HUD_HEIGHT: i32 = 48;               // Height of the bottom control strip (screen pixels)
pub const PROGRESS_HEIGHT: i32 = 6;           // Height of the progress bar (screen pixels)
pub const HUD_FONT_SIZE: i32 = 20;
pub const OVERLAY_FONT_SIZE: i32 = 28;

pub const DEFAULT_WINDOW_WIDTH: i32 = RENDER_WIDTH / 2;
pub const DEFAULT_WINDOW_HEIGHT: i32 = RENDER_HEIGHT / 2;
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;   // Horizontal travel that counts as a swipe (pixels)
pub const DEFAULT_CLICK_ZONE: f32 = 0.3;         // Share of the width acting as previous/next zones
pub const DEFAULT_IDLE_HIDE_SECS: f32 = 3.0;     // Controls hide after this long without pointer activity
pub const DEFAULT_COPY_FEEDBACK_SECS: f32 = 2.0; // How long "Copied!" / "Failed" stays visible
pub const DEFAULT_TRANSITION_SECS: f32 = 0.5;    // Duration of a slide entrance animation

pub const CONFIG_FILE_NAME: &str = "slidedeck.toml";
pub const SNIPPET_EXTENSION: &str = "txt";
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];
