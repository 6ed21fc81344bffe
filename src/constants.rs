// Page wiring, lighting and interaction tuning for the web front-end.
//
// Simulation tuning lives in `book_core::constants`; these are the values
// only the browser layer needs.

// DOM ids
pub const CANVAS_ID: &str = "book-canvas";
pub const TITLE_ID: &str = "book-title";
pub const OPEN_BUTTON_ID: &str = "open-button";
pub const INDEX_BUTTON_ID: &str = "index-button";
pub const SIDE_MENU_ID: &str = "side-menu";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
/// Menu entries carry `data-route` with the route path.
pub const ROUTE_ATTR: &str = "data-route";

// CSS classes toggled by the overlay
pub const HIDDEN_CLASS: &str = "hidden";
pub const MENU_OPEN_CLASS: &str = "open";

// Background and ground
pub const CLEAR_RGB: [f64; 3] = [0.96, 0.95, 0.93];
pub const GROUND_Y: f32 = -1.15;
pub const GROUND_SIZE: f32 = 200.0;
pub const GROUND_RGB: [f32; 3] = [0.93, 0.92, 0.9];

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.8;
pub const KEY_LIGHT_POS: [f32; 3] = [10.0, 15.0, 10.0];
pub const KEY_LIGHT_INTENSITY: f32 = 2.0;
/// Cosine of the key spot's half-angle (0.3 rad).
pub const KEY_LIGHT_COS_CUTOFF: f32 = 0.955_336_5;
/// The page light hangs this far above the open spread.
pub const PAGE_LIGHT_HEIGHT: f32 = 6.0;

// Pointer
/// Pointer travel below this many CSS pixels counts as a click.
pub const CLICK_TRAVEL_PX: f32 = 5.0;
/// Wheel deltas in line mode are scaled to pixels.
pub const WHEEL_LINE_PX: f32 = 16.0;
