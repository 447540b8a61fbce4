// Strong typing over strings. Newtypes for timestamps, page-pixel points,
// and the config/event/command schemas crossing the JS boundary.

use serde::{Deserialize, Serialize};

/// Handle the global style rule and window-level scroll commands target.
pub const DOCUMENT_HANDLE: &str = "document";

/// Timestamp in milliseconds since page load. Newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn from_millis(ms: u64) -> Self {
        Timestamp(ms)
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    pub fn as_secs(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// This timestamp shifted forward by `ms` milliseconds.
    pub fn offset_by(&self, ms: u64) -> Timestamp {
        Timestamp(self.0.saturating_add(ms))
    }
}

/// Pointer position in client pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PagePoint {
    pub x: f32,
    pub y: f32,
}

impl PagePoint {
    pub fn new(x: f32, y: f32) -> Self {
        PagePoint { x, y }
    }
}

/// Viewport dimensions at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ViewportInfo {
    pub width: f32,
    pub height: f32,
}

/// A page section registered for active-link tracking and anchor targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    /// Absolute top offset in document pixels.
    pub top: f32,
}

/// A navigation link: the element handle plus the href it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub handle: String,
    pub href: String,
}

/// An element watched for one-shot reveal. `grid_index` is the element's
/// position inside its grid container, used for stagger delays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealTarget {
    pub handle: String,
    #[serde(default)]
    pub grid_index: Option<u32>,
}

/// A numeric readout animated from zero to `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterSpec {
    pub handle: String,
    pub target: f64,
    #[serde(default = "default_counter_duration")]
    pub duration_ms: u64,
}

fn default_counter_duration() -> u64 {
    2000
}

/// Logical element handles the page registered. An empty handle means the
/// page has no such element and the component degrades to a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandleMap {
    #[serde(default = "default_nav_handle")]
    pub nav: String,
    #[serde(default = "default_nav_list_handle")]
    pub nav_list: String,
    #[serde(default = "default_nav_toggle_handle")]
    pub nav_toggle: String,
    #[serde(default = "default_typing_handle")]
    pub typing: String,
    #[serde(default = "default_chart_handle")]
    pub chart: String,
    #[serde(default = "default_parallax_handle")]
    pub parallax: String,
    #[serde(default = "default_terminal_handle")]
    pub terminal: String,
}

impl Default for HandleMap {
    fn default() -> Self {
        HandleMap {
            nav: default_nav_handle(),
            nav_list: default_nav_list_handle(),
            nav_toggle: default_nav_toggle_handle(),
            typing: default_typing_handle(),
            chart: default_chart_handle(),
            parallax: default_parallax_handle(),
            terminal: default_terminal_handle(),
        }
    }
}

fn default_nav_handle() -> String {
    "nav".to_string()
}

fn default_nav_list_handle() -> String {
    "nav-links".to_string()
}

fn default_nav_toggle_handle() -> String {
    "nav-toggle".to_string()
}

fn default_typing_handle() -> String {
    "typing-text".to_string()
}

fn default_chart_handle() -> String {
    "chart-container".to_string()
}

fn default_parallax_handle() -> String {
    "hero-grid".to_string()
}

fn default_terminal_handle() -> String {
    "terminal".to_string()
}

/// Engine configuration passed from JS. Every knob has a default, so `{}`
/// yields the stock portfolio-page behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub viewport: ViewportInfo,
    #[serde(default)]
    pub handles: HandleMap,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub nav_links: Vec<NavLink>,
    #[serde(default)]
    pub reveal_targets: Vec<RevealTarget>,
    #[serde(default = "default_roles")]
    pub roles: Vec<String>,
    #[serde(default)]
    pub terminal_lines: Vec<String>,
    #[serde(default)]
    pub counters: Vec<CounterSpec>,
    #[serde(default)]
    pub scroll_settings: ScrollSettings,
    #[serde(default)]
    pub reveal_settings: RevealSettings,
    #[serde(default)]
    pub typing_settings: TypingSettings,
    #[serde(default)]
    pub anchor_settings: AnchorSettings,
    #[serde(default)]
    pub effect_settings: EffectSettings,
}

fn default_roles() -> Vec<String> {
    vec![
        "Data Scientist | Financial Analytics".to_string(),
        "ML Engineer".to_string(),
        "Financial Analyst".to_string(),
        "Data Analyst".to_string(),
    ]
}

/// Scroll tracker settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollSettings {
    /// Offset past which the navbar switches to compact chrome.
    #[serde(default = "default_chrome_threshold")]
    pub chrome_threshold_px: f32,
    /// Lookahead margin subtracted from section tops in the active scan.
    #[serde(default = "default_lookahead")]
    pub lookahead_px: f32,
    /// Background translate per scroll pixel.
    #[serde(default = "default_parallax_factor")]
    pub parallax_factor: f32,
    /// Quiet window for the parallax debouncer.
    #[serde(default = "default_parallax_wait")]
    pub parallax_wait_ms: u64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        ScrollSettings {
            chrome_threshold_px: default_chrome_threshold(),
            lookahead_px: default_lookahead(),
            parallax_factor: default_parallax_factor(),
            parallax_wait_ms: default_parallax_wait(),
        }
    }
}

fn default_chrome_threshold() -> f32 {
    100.0
}

fn default_lookahead() -> f32 {
    200.0
}

fn default_parallax_factor() -> f32 {
    0.3
}

fn default_parallax_wait() -> u64 {
    20
}

/// Reveal tracker settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealSettings {
    /// Visibility ratio that counts as "entered the viewport".
    #[serde(default = "default_reveal_threshold")]
    pub threshold: f32,
    /// Initial downward offset of hidden elements.
    #[serde(default = "default_hidden_offset")]
    pub hidden_offset_px: f32,
    /// Reveal transition duration.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Per-item delay step inside grid containers.
    #[serde(default = "default_stagger_step")]
    pub stagger_step_ms: u64,
}

impl Default for RevealSettings {
    fn default() -> Self {
        RevealSettings {
            threshold: default_reveal_threshold(),
            hidden_offset_px: default_hidden_offset(),
            transition_ms: default_transition_ms(),
            stagger_step_ms: default_stagger_step(),
        }
    }
}

fn default_reveal_threshold() -> f32 {
    0.1
}

fn default_hidden_offset() -> f32 {
    30.0
}

fn default_transition_ms() -> u64 {
    600
}

fn default_stagger_step() -> u64 {
    100
}

/// Typing animator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingSettings {
    #[serde(default = "default_type_delay")]
    pub type_delay_ms: u64,
    #[serde(default = "default_delete_delay")]
    pub delete_delay_ms: u64,
    /// Pause with the full string shown before deleting starts.
    #[serde(default = "default_hold_delay")]
    pub hold_delay_ms: u64,
    /// Pause after a role is fully deleted before the next one types.
    #[serde(default = "default_advance_delay")]
    pub advance_delay_ms: u64,
    /// Delay between `start` and the first tick.
    #[serde(default = "default_start_delay")]
    pub start_delay_ms: u64,
    /// Viewports wider than this get the min-width layout lock.
    #[serde(default = "default_desktop_breakpoint")]
    pub desktop_breakpoint_px: f32,
}

impl Default for TypingSettings {
    fn default() -> Self {
        TypingSettings {
            type_delay_ms: default_type_delay(),
            delete_delay_ms: default_delete_delay(),
            hold_delay_ms: default_hold_delay(),
            advance_delay_ms: default_advance_delay(),
            start_delay_ms: default_start_delay(),
            desktop_breakpoint_px: default_desktop_breakpoint(),
        }
    }
}

fn default_type_delay() -> u64 {
    100
}

fn default_delete_delay() -> u64 {
    50
}

fn default_hold_delay() -> u64 {
    2000
}

fn default_advance_delay() -> u64 {
    500
}

fn default_start_delay() -> u64 {
    2000
}

fn default_desktop_breakpoint() -> f32 {
    768.0
}

/// Smooth-scroll settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorSettings {
    /// Fixed header height subtracted from anchor targets.
    #[serde(default = "default_header_offset")]
    pub header_offset_px: f32,
}

impl Default for AnchorSettings {
    fn default() -> Self {
        AnchorSettings {
            header_offset_px: default_header_offset(),
        }
    }
}

fn default_header_offset() -> f32 {
    80.0
}

/// Decorative effect toggles and knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectSettings {
    /// Scale the chart container on hover.
    #[serde(default = "default_true")]
    pub chart_hover: bool,
    /// Render trailing dots behind the pointer.
    #[serde(default = "default_false")]
    pub cursor_trail: bool,
    /// Fade terminal lines in one by one.
    #[serde(default = "default_false")]
    pub terminal_reveal: bool,
    #[serde(default = "default_trail_length")]
    pub trail_length: usize,
    /// Frame budget assumed by the count-up increment math.
    #[serde(default = "default_counter_frame")]
    pub counter_frame_ms: u64,
}

impl Default for EffectSettings {
    fn default() -> Self {
        EffectSettings {
            chart_hover: default_true(),
            cursor_trail: default_false(),
            terminal_reveal: default_false(),
            trail_length: default_trail_length(),
            counter_frame_ms: default_counter_frame(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

fn default_trail_length() -> usize {
    10
}

fn default_counter_frame() -> u64 {
    16
}

/// Batch of page events from JS (minimizes JS↔WASM crossings).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventBatch {
    pub events: Vec<PageEvent>,
}

/// Single event forwarded from the page, stamped by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEvent {
    pub timestamp: Timestamp,
    pub kind: EventKind,
}

/// Type of page event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EventKind {
    /// Vertical scroll offset changed.
    Scroll { offset: f32 },
    /// Pointer moved (client coordinates).
    PointerMove { position: PagePoint },
    /// Pointer entered a registered element.
    PointerEnter { handle: String },
    /// Pointer left a registered element.
    PointerLeave { handle: String },
    /// Same-page anchor was clicked; the page already prevented default.
    AnchorClick { href: String },
    /// Mobile menu toggle was clicked.
    MenuToggle,
    /// Intersection observer reported a visibility ratio.
    Intersection { handle: String, ratio: f32 },
}

/// Batch of commands for the page to apply, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandBatch {
    pub commands: Vec<Command>,
}

/// A single DOM mutation or scroll request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub handle: String,
    pub action: Action,
}

impl Command {
    pub fn new(handle: impl Into<String>, action: Action) -> Self {
        Command {
            handle: handle.into(),
            action,
        }
    }
}

/// Page-side effect of a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    AddClass { class: String },
    RemoveClass { class: String },
    SetStyle { property: String, value: String },
    SetText { text: String },
    /// Append a line that fades in over 0.3s after `delay_ms`.
    AppendLine { html: String, delay_ms: u64 },
    /// Register a global CSS rule (targets the document).
    AppendStyleRule { css: String },
    /// Smooth-scroll the viewport (targets the document).
    ScrollTo { top: f32 },
    /// The page may drop its observer entry for this element.
    Unobserve,
    /// Create a fixed-position trail dot with the given size and alpha.
    CreateTrailDot { size_px: f32, alpha: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_conversions() {
        let ts = Timestamp::from_millis(1500);
        assert_eq!(ts.as_millis(), 1500);
        assert!((ts.as_secs() - 1.5).abs() < 0.0001);
        assert_eq!(ts.offset_by(500).as_millis(), 2000);
    }

    #[test]
    fn empty_config_uses_stock_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.roles.len(), 4);
        assert_eq!(config.scroll_settings.chrome_threshold_px, 100.0);
        assert_eq!(config.anchor_settings.header_offset_px, 80.0);
        assert_eq!(config.typing_settings.type_delay_ms, 100);
        assert_eq!(config.effect_settings.trail_length, 10);
        assert!(config.effect_settings.chart_hover);
        assert!(!config.effect_settings.cursor_trail);
        assert_eq!(config.handles.typing, "typing-text");
    }

    #[test]
    fn event_kind_round_trips_tagged() {
        let event = PageEvent {
            timestamp: Timestamp::from_millis(10),
            kind: EventKind::Scroll { offset: 150.0 },
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"Scroll\""));
        let back: PageEvent = serde_json::from_str(&json).unwrap();
        assert!(matches!(back.kind, EventKind::Scroll { offset } if offset == 150.0));
    }
}
