// Decorative effects: chart hover scale, bounded cursor trail, terminal
// line fade-in, count-up readouts. All opt-in except the chart hover.

use std::collections::VecDeque;

use crate::types::{Action, Command, PagePoint};

/// Hover scale for the chart container.
pub struct ChartHover {
    handle: String,
}

impl ChartHover {
    pub fn new(handle: String) -> Self {
        ChartHover { handle }
    }

    pub fn on_enter(&self) -> Vec<Command> {
        vec![
            Command::new(
                &self.handle,
                Action::SetStyle {
                    property: "transform".to_string(),
                    value: "scale(1.02)".to_string(),
                },
            ),
            Command::new(
                &self.handle,
                Action::SetStyle {
                    property: "transition".to_string(),
                    value: "transform 0.3s ease".to_string(),
                },
            ),
        ]
    }

    pub fn on_leave(&self) -> Vec<Command> {
        vec![Command::new(
            &self.handle,
            Action::SetStyle {
                property: "transform".to_string(),
                value: "scale(1)".to_string(),
            },
        )]
    }

    pub fn handle(&self) -> &str {
        &self.handle
    }
}

/// Bounded history of pointer positions rendered as progressively smaller,
/// more transparent dots, most recent position first.
pub struct CursorTrail {
    length: usize,
    positions: VecDeque<PagePoint>,
    cursor: Option<PagePoint>,
}

impl CursorTrail {
    pub fn new(length: usize) -> Self {
        CursorTrail {
            length,
            positions: VecDeque::with_capacity(length),
            cursor: None,
        }
    }

    /// Creation specs for the fixed dot set. Dot `i` shrinks by a pixel
    /// and loses 0.05 alpha per step away from the pointer.
    pub fn prepare(&self) -> Vec<Command> {
        (0..self.length)
            .map(|i| {
                Command::new(
                    dot_handle(i),
                    Action::CreateTrailDot {
                        size_px: 10.0 - i as f32,
                        alpha: 0.5 - i as f32 * 0.05,
                    },
                )
            })
            .collect()
    }

    pub fn pointer_moved(&mut self, position: PagePoint) {
        self.cursor = Some(position);
    }

    /// Record the current pointer position and place every dot along the
    /// recent history, falling back to the oldest point while the history
    /// is still short. Nothing renders before the first pointer move.
    pub fn frame(&mut self) -> Vec<Command> {
        let Some(cursor) = self.cursor else {
            return Vec::new();
        };
        self.positions.push_front(cursor);
        self.positions.truncate(self.length);

        let mut commands = Vec::new();
        for i in 0..self.length {
            let position = self.positions.get(i).or_else(|| self.positions.back());
            if let Some(position) = position {
                commands.push(Command::new(
                    dot_handle(i),
                    Action::SetStyle {
                        property: "left".to_string(),
                        value: format!("{}px", position.x),
                    },
                ));
                commands.push(Command::new(
                    dot_handle(i),
                    Action::SetStyle {
                        property: "top".to_string(),
                        value: format!("{}px", position.y),
                    },
                ));
            }
        }
        commands
    }

    pub fn history_len(&self) -> usize {
        self.positions.len()
    }
}

fn dot_handle(index: usize) -> String {
    format!("trail-dot-{}", index)
}

/// Re-renders pre-split terminal text with a staggered fade-in per line.
pub struct TerminalReveal {
    stagger_ms: u64,
}

impl TerminalReveal {
    pub fn new(stagger_ms: u64) -> Self {
        TerminalReveal { stagger_ms }
    }

    pub fn reveal(&self, handle: &str, lines: &[String]) -> Vec<Command> {
        lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                Command::new(
                    handle,
                    Action::AppendLine {
                        html: line.clone(),
                        delay_ms: i as u64 * self.stagger_ms,
                    },
                )
            })
            .collect()
    }
}

/// Frame-driven count from zero to a target value; the final frame clamps
/// to the exact target.
pub struct CountUp {
    target: f64,
    step: f64,
    value: f64,
    done: bool,
}

impl CountUp {
    pub fn new(target: f64, duration_ms: u64, frame_ms: u64) -> Self {
        let frames = duration_ms as f64 / frame_ms.max(1) as f64;
        CountUp {
            target,
            step: target / frames.max(1.0),
            value: 0.0,
            done: false,
        }
    }

    /// Next display value, or `None` once the target has been shown.
    pub fn frame(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        self.value += self.step;
        if self.value < self.target {
            Some(format!("{}", self.value.floor() as i64))
        } else {
            self.done = true;
            Some(format_target(self.target))
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

fn format_target(target: f64) -> String {
    if target.fract() == 0.0 {
        format!("{}", target as i64)
    } else {
        format!("{}", target)
    }
}
