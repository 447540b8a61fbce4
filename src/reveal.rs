// One-shot reveal tracking driven by intersection reports.
// Elements start hidden/offset; the first qualifying report flips them to
// the terminal revealed state and they are never touched again.

use crate::types::{Action, Command, RevealSettings, RevealTarget, DOCUMENT_HANDLE};

/// Class carrying the terminal revealed state.
pub const REVEAL_CLASS: &str = "animate-in";

struct TargetState {
    handle: String,
    grid_index: Option<u32>,
    revealed: bool,
}

/// Tracks a fixed set of elements and reveals each at most once.
pub struct RevealTracker {
    settings: RevealSettings,
    targets: Vec<TargetState>,
}

impl RevealTracker {
    pub fn new(settings: RevealSettings, targets: Vec<RevealTarget>) -> Self {
        RevealTracker {
            settings,
            targets: targets
                .into_iter()
                .map(|t| TargetState {
                    handle: t.handle,
                    grid_index: t.grid_index,
                    revealed: false,
                })
                .collect(),
        }
    }

    /// Initial hidden state for every watched element, stagger delays for
    /// grid items, and the shared rule defining the revealed state. Must
    /// be applied before observation begins so the transition animates.
    pub fn prepare(&self) -> Vec<Command> {
        let mut commands = Vec::new();
        let transition_secs = self.settings.transition_ms as f64 / 1000.0;

        for target in &self.targets {
            commands.push(Command::new(
                &target.handle,
                Action::SetStyle {
                    property: "opacity".to_string(),
                    value: "0".to_string(),
                },
            ));
            commands.push(Command::new(
                &target.handle,
                Action::SetStyle {
                    property: "transform".to_string(),
                    value: format!("translateY({}px)", self.settings.hidden_offset_px),
                },
            ));
            commands.push(Command::new(
                &target.handle,
                Action::SetStyle {
                    property: "transition".to_string(),
                    value: format!(
                        "opacity {}s ease, transform {}s ease",
                        transition_secs, transition_secs
                    ),
                },
            ));
            if let Some(index) = target.grid_index {
                let delay_secs = (index as u64 * self.settings.stagger_step_ms) as f64 / 1000.0;
                commands.push(Command::new(
                    &target.handle,
                    Action::SetStyle {
                        property: "transition-delay".to_string(),
                        value: format!("{}s", delay_secs),
                    },
                ));
            }
        }

        commands.push(Command::new(
            DOCUMENT_HANDLE,
            Action::AppendStyleRule {
                css: format!(
                    ".{} {{ opacity: 1 !important; transform: translateY(0) !important; }}",
                    REVEAL_CLASS
                ),
            },
        ));

        commands
    }

    /// Handle a visibility report. The first report at or above the
    /// threshold reveals the element and releases its observer entry;
    /// anything after that is ignored.
    pub fn on_intersection(&mut self, handle: &str, ratio: f32) -> Vec<Command> {
        let Some(target) = self.targets.iter_mut().find(|t| t.handle == handle) else {
            return Vec::new();
        };
        if target.revealed || ratio < self.settings.threshold {
            return Vec::new();
        }
        target.revealed = true;

        vec![
            Command::new(
                &target.handle,
                Action::AddClass {
                    class: REVEAL_CLASS.to_string(),
                },
            ),
            Command::new(&target.handle, Action::Unobserve),
        ]
    }

    pub fn is_revealed(&self, handle: &str) -> bool {
        self.targets
            .iter()
            .any(|t| t.handle == handle && t.revealed)
    }

    /// Elements still waiting on their first qualifying report.
    pub fn pending(&self) -> usize {
        self.targets.iter().filter(|t| !t.revealed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(specs: &[(&str, Option<u32>)]) -> Vec<RevealTarget> {
        specs
            .iter()
            .map(|(handle, grid_index)| RevealTarget {
                handle: handle.to_string(),
                grid_index: *grid_index,
            })
            .collect()
    }

    #[test]
    fn prepare_hides_and_staggers() {
        let tracker = RevealTracker::new(
            RevealSettings::default(),
            targets(&[("card-0", Some(0)), ("card-1", Some(2)), ("header", None)]),
        );
        let commands = tracker.prepare();

        // Grid item at index 2 gets a 0.2s delay; non-grid gets none.
        assert!(commands.contains(&Command::new(
            "card-1",
            Action::SetStyle {
                property: "transition-delay".to_string(),
                value: "0.2s".to_string(),
            }
        )));
        assert!(!commands.iter().any(|c| c.handle == "header"
            && matches!(&c.action, Action::SetStyle { property, .. } if property == "transition-delay")));

        // Every target starts hidden and offset.
        for handle in ["card-0", "card-1", "header"] {
            assert!(commands.contains(&Command::new(
                handle,
                Action::SetStyle {
                    property: "transform".to_string(),
                    value: "translateY(30px)".to_string(),
                }
            )));
        }

        // Exactly one global rule, targeting the document.
        let rules: Vec<_> = commands
            .iter()
            .filter(|c| matches!(c.action, Action::AppendStyleRule { .. }))
            .collect();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].handle, DOCUMENT_HANDLE);
    }

    #[test]
    fn reveals_exactly_once() {
        let mut tracker =
            RevealTracker::new(RevealSettings::default(), targets(&[("card", None)]));

        let first = tracker.on_intersection("card", 0.5);
        assert_eq!(first.len(), 2);
        assert!(first.contains(&Command::new(
            "card",
            Action::AddClass {
                class: REVEAL_CLASS.to_string()
            }
        )));
        assert!(first.contains(&Command::new("card", Action::Unobserve)));
        assert!(tracker.is_revealed("card"));

        // Re-triggering intersection after reveal must not reapply.
        assert!(tracker.on_intersection("card", 1.0).is_empty());
        assert_eq!(tracker.pending(), 0);
    }

    #[test]
    fn sub_threshold_ratio_does_not_reveal() {
        let mut tracker =
            RevealTracker::new(RevealSettings::default(), targets(&[("card", None)]));

        assert!(tracker.on_intersection("card", 0.05).is_empty());
        assert!(!tracker.is_revealed("card"));
        // Threshold is inclusive.
        assert_eq!(tracker.on_intersection("card", 0.1).len(), 2);
    }

    #[test]
    fn unknown_handle_is_ignored() {
        let mut tracker =
            RevealTracker::new(RevealSettings::default(), targets(&[("card", None)]));
        assert!(tracker.on_intersection("missing", 1.0).is_empty());
        assert_eq!(tracker.pending(), 1);
    }
}
