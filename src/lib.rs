// kinetic_core: portfolio-page interaction engine.
// All decisions live here; the hosting page's JS is plumbing that forwards
// event batches and applies the command batches coming back. See DESIGN.md.

mod anchor;
mod debounce;
mod effects;
mod error;
mod nav;
mod reveal;
mod scroll;
mod typing;
mod types;

use wasm_bindgen::prelude::*;

pub use anchor::AnchorResolver;
pub use debounce::Debouncer;
pub use effects::{ChartHover, CountUp, CursorTrail, TerminalReveal};
pub use error::EngineError;
pub use nav::{NavMenu, MENU_OPEN_CLASS};
pub use reveal::{RevealTracker, REVEAL_CLASS};
pub use scroll::{NavChrome, ScrollTracker};
pub use typing::{Phase, TypingAnimator, TypingFrame};
pub use types::*;

/// Stagger step for terminal line fade-ins.
const TERMINAL_STAGGER_MS: u64 = 100;

/// Class marking the nav link of the section currently in view.
const ACTIVE_LINK_CLASS: &str = "active";

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Main engine interface exposed to JavaScript.
/// Batch interface to minimize JS↔WASM crossings.
#[wasm_bindgen]
pub struct Engine {
    handles: HandleMap,
    viewport: ViewportInfo,
    nav_links: Vec<NavLink>,
    effect_settings: EffectSettings,
    reveal: RevealTracker,
    scroll: ScrollTracker,
    menu: NavMenu,
    typing: TypingAnimator,
    anchors: AnchorResolver,
    chart: ChartHover,
    trail: CursorTrail,
    terminal: TerminalReveal,
    terminal_lines: Vec<String>,
    counters: Vec<(String, CountUp)>,
    parallax: Debouncer<f32>,
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<Engine, JsValue> {
        let config: EngineConfig = serde_json::from_str(config_json)
            .map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        Ok(Engine::from_config(config))
    }

    /// One-time startup: hide the reveal set, lock the typing area width
    /// on desktop, create trail dots and terminal lines where enabled, and
    /// arm the typing schedule. Apply the returned commands before wiring
    /// observers so reveal transitions animate.
    pub fn bootstrap(&mut self, now_ms: u64) -> Result<String, JsValue> {
        let now = Timestamp::from_millis(now_ms);
        let commands = self.bootstrap_commands(now);
        to_json(commands)
    }

    /// Process a batch of page events and return the commands to apply.
    pub fn process_events(&mut self, events_json: &str) -> Result<String, JsValue> {
        let batch: EventBatch = serde_json::from_str(events_json)
            .map_err(|e| EngineError::InvalidEvents(e.to_string()))?;

        let mut commands = Vec::new();
        for event in &batch.events {
            commands.extend(self.handle_event(event));
        }
        to_json(commands)
    }

    /// Fire everything due at `now`: typing steps, the debounced parallax
    /// flush, trail placement, count-up frames. Drive this from the page's
    /// timer loop; once per animation frame while `wants_frame_ticks`.
    pub fn tick(&mut self, now_ms: u64) -> Result<String, JsValue> {
        let now = Timestamp::from_millis(now_ms);
        let commands = self.tick_commands(now);
        to_json(commands)
    }

    /// Earliest pending deadline in milliseconds, for timer scheduling.
    /// Frame-driven effects (trail, counters) are not deadlines.
    pub fn next_deadline(&self) -> Option<f64> {
        let typing = self.typing.next_deadline();
        let parallax = self.parallax.next_deadline();
        match (typing, parallax) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
        .map(|ts| ts.as_millis() as f64)
    }

    /// Whether the page should keep calling `tick` every animation frame.
    pub fn wants_frame_ticks(&self) -> bool {
        self.effect_settings.cursor_trail || self.counters.iter().any(|(_, c)| !c.is_done())
    }

    /// Re-arm the typing schedule.
    pub fn start(&mut self, now_ms: u64) {
        self.typing.start(Timestamp::from_millis(now_ms));
    }

    /// Tear down every pending schedule. No commands fire after this
    /// until `start` is called again.
    pub fn stop(&mut self) {
        self.typing.stop();
        self.parallax.cancel();
    }
}

impl Engine {
    pub fn from_config(config: EngineConfig) -> Engine {
        let parallax_wait = config.scroll_settings.parallax_wait_ms;
        let counters = config
            .counters
            .iter()
            .map(|c| {
                (
                    c.handle.clone(),
                    CountUp::new(c.target, c.duration_ms, config.effect_settings.counter_frame_ms),
                )
            })
            .collect();

        Engine {
            reveal: RevealTracker::new(config.reveal_settings, config.reveal_targets),
            scroll: ScrollTracker::new(config.scroll_settings, config.sections.clone()),
            menu: NavMenu::new(),
            typing: TypingAnimator::new(config.roles, config.typing_settings),
            anchors: AnchorResolver::new(config.anchor_settings, config.sections),
            chart: ChartHover::new(config.handles.chart.clone()),
            trail: CursorTrail::new(config.effect_settings.trail_length),
            terminal: TerminalReveal::new(TERMINAL_STAGGER_MS),
            terminal_lines: config.terminal_lines,
            counters,
            parallax: Debouncer::new(parallax_wait),
            nav_links: config.nav_links,
            effect_settings: config.effect_settings,
            viewport: config.viewport,
            handles: config.handles,
        }
    }

    pub fn bootstrap_commands(&mut self, now: Timestamp) -> Vec<Command> {
        let mut commands = self.reveal.prepare();

        // Lock the typing area's width so deleting/typing never reflows
        // the hero; narrow viewports wrap naturally instead.
        let width_ch = self.typing.min_width_ch();
        if !self.handles.typing.is_empty() && width_ch > 0 {
            commands.push(Command::new(
                &self.handles.typing,
                Action::SetStyle {
                    property: "display".to_string(),
                    value: "inline-block".to_string(),
                },
            ));
            if self.viewport.width > self.typing.settings().desktop_breakpoint_px {
                commands.push(Command::new(
                    &self.handles.typing,
                    Action::SetStyle {
                        property: "min-width".to_string(),
                        value: format!("{}ch", width_ch),
                    },
                ));
            }
        }

        if self.effect_settings.cursor_trail {
            commands.extend(self.trail.prepare());
        }

        if self.effect_settings.terminal_reveal
            && !self.handles.terminal.is_empty()
            && !self.terminal_lines.is_empty()
        {
            commands.extend(self.terminal.reveal(&self.handles.terminal, &self.terminal_lines));
        }

        self.typing.start(now);
        commands
    }

    pub fn handle_event(&mut self, event: &PageEvent) -> Vec<Command> {
        match &event.kind {
            EventKind::Scroll { offset } => self.on_scroll(event.timestamp, *offset),
            EventKind::PointerMove { position } => {
                if self.effect_settings.cursor_trail {
                    self.trail.pointer_moved(*position);
                }
                Vec::new()
            }
            EventKind::PointerEnter { handle } => {
                if self.effect_settings.chart_hover
                    && !handle.is_empty()
                    && handle == self.chart.handle()
                {
                    self.chart.on_enter()
                } else {
                    Vec::new()
                }
            }
            EventKind::PointerLeave { handle } => {
                if self.effect_settings.chart_hover
                    && !handle.is_empty()
                    && handle == self.chart.handle()
                {
                    self.chart.on_leave()
                } else {
                    Vec::new()
                }
            }
            EventKind::AnchorClick { href } => self.on_anchor_click(href),
            EventKind::MenuToggle => {
                let open = self.menu.toggle();
                self.menu_commands(open)
            }
            EventKind::Intersection { handle, ratio } => {
                self.reveal.on_intersection(handle, *ratio)
            }
        }
    }

    pub fn tick_commands(&mut self, now: Timestamp) -> Vec<Command> {
        let mut commands = Vec::new();

        if let Some(frame) = self.typing.tick(now) {
            if !self.handles.typing.is_empty() {
                commands.push(Command::new(
                    &self.handles.typing,
                    Action::SetText { text: frame.text },
                ));
            }
        }

        if let Some(offset) = self.parallax.poll(now) {
            if !self.handles.parallax.is_empty() {
                commands.push(Command::new(
                    &self.handles.parallax,
                    Action::SetStyle {
                        property: "transform".to_string(),
                        value: format!("translateY({}px)", self.scroll.parallax_shift(offset)),
                    },
                ));
            }
        }

        if self.effect_settings.cursor_trail {
            commands.extend(self.trail.frame());
        }

        for (handle, counter) in &mut self.counters {
            if let Some(text) = counter.frame() {
                commands.push(Command::new(handle.as_str(), Action::SetText { text }));
            }
        }

        commands
    }

    fn on_scroll(&mut self, timestamp: Timestamp, offset: f32) -> Vec<Command> {
        let mut commands = Vec::new();

        if !self.handles.nav.is_empty() {
            let chrome = self.scroll.chrome(offset);
            commands.push(Command::new(
                &self.handles.nav,
                Action::SetStyle {
                    property: "padding".to_string(),
                    value: chrome.padding().to_string(),
                },
            ));
            commands.push(Command::new(
                &self.handles.nav,
                Action::SetStyle {
                    property: "box-shadow".to_string(),
                    value: chrome.box_shadow().to_string(),
                },
            ));
        }

        // Clear then re-mark the active link on every event; idempotent
        // for the page, no diffing against the previous winner.
        let active = self.scroll.active_section(offset).map(str::to_string);
        for link in &self.nav_links {
            commands.push(Command::new(
                &link.handle,
                Action::RemoveClass {
                    class: ACTIVE_LINK_CLASS.to_string(),
                },
            ));
            if let Some(id) = &active {
                if link.href == format!("#{}", id) {
                    commands.push(Command::new(
                        &link.handle,
                        Action::AddClass {
                            class: ACTIVE_LINK_CLASS.to_string(),
                        },
                    ));
                }
            }
        }

        if !self.handles.parallax.is_empty() {
            self.parallax.call(timestamp, offset);
        }

        commands
    }

    fn on_anchor_click(&mut self, href: &str) -> Vec<Command> {
        let mut commands = Vec::new();

        // Clicking a nav link always collapses the mobile menu.
        if self.nav_links.iter().any(|l| l.href == href) && self.menu.close() {
            commands.extend(self.menu_commands(false));
        }

        if let Some(top) = self.anchors.resolve(href) {
            commands.push(Command::new(DOCUMENT_HANDLE, Action::ScrollTo { top }));
        }

        commands
    }

    fn menu_commands(&self, open: bool) -> Vec<Command> {
        let mut commands = Vec::new();
        for handle in [&self.handles.nav_list, &self.handles.nav_toggle] {
            if handle.is_empty() {
                continue;
            }
            let action = if open {
                Action::AddClass {
                    class: MENU_OPEN_CLASS.to_string(),
                }
            } else {
                Action::RemoveClass {
                    class: MENU_OPEN_CLASS.to_string(),
                }
            };
            commands.push(Command::new(handle.as_str(), action));
        }
        commands
    }
}

fn to_json(commands: Vec<Command>) -> Result<String, JsValue> {
    serde_json::to_string(&CommandBatch { commands })
        .map_err(|e| JsValue::from(EngineError::from(e)))
}
