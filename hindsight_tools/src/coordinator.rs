// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use ui_events::pointer::PointerButton;

use crate::event::ViewEvent;

/// The map tools. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    /// No tool: the view handles input with its default navigation.
    #[default]
    None,
    /// Magnifier window following the pointer.
    ZoomWindow,
    /// Press-and-hold fade of the current imagery layer.
    LayerFade,
}

/// Result of changing the active tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolTransition {
    /// Tool active before the change.
    pub previous: Tool,
    /// Tool active after the change.
    pub current: Tool,
}

impl ToolTransition {
    /// Returns `true` if the active tool changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }

    /// The tool that stopped being active, if any.
    ///
    /// Owners use this to tear down the old tool's state: hide the magnifier,
    /// or cancel a running fade.
    #[must_use]
    pub fn deactivated(&self) -> Option<Tool> {
        (self.changed() && self.previous != Tool::None).then_some(self.previous)
    }
}

/// What the active tool wants done in response to an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToolAction {
    /// Show or move the magnifier for this viewport position.
    Magnify(Point),
    /// Hide the magnifier.
    HideMagnifier,
    /// Start fading the current layer out.
    BeginFade,
    /// Fade the current layer back in.
    EndFade,
}

/// Outcome of routing one [`ViewEvent`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dispatch {
    /// Action for the active tool, if the event means anything to it.
    pub action: Option<ToolAction>,
    /// Whether the event must be kept from the view's default navigation.
    pub consumed: bool,
}

impl Dispatch {
    const IGNORED: Self = Self {
        action: None,
        consumed: false,
    };

    fn act(action: ToolAction, consumed: bool) -> Self {
        Self {
            action: Some(action),
            consumed,
        }
    }
}

/// Owns the active tool and routes view events to it.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToolCoordinator {
    active: Tool,
}

impl ToolCoordinator {
    /// Creates a coordinator with no active tool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active tool.
    #[must_use]
    pub fn active(&self) -> Tool {
        self.active
    }

    /// Returns `true` if `tool` is the active tool.
    #[must_use]
    pub fn is_active(&self, tool: Tool) -> bool {
        self.active == tool
    }

    /// Makes `tool` the only active tool.
    pub fn activate(&mut self, tool: Tool) -> ToolTransition {
        let transition = ToolTransition {
            previous: self.active,
            current: tool,
        };
        self.active = tool;
        if transition.changed() {
            log::debug!("tool {:?} -> {:?}", transition.previous, tool);
        }
        transition
    }

    /// Enables or disables `tool`.
    ///
    /// Disabling a tool that is not active changes nothing.
    pub fn set_enabled(&mut self, tool: Tool, enabled: bool) -> ToolTransition {
        if enabled {
            self.activate(tool)
        } else if self.active == tool {
            self.activate(Tool::None)
        } else {
            ToolTransition {
                previous: self.active,
                current: self.active,
            }
        }
    }

    /// Tool button behaviour: activates `tool`, or deactivates it when it is
    /// already active.
    pub fn toggle(&mut self, tool: Tool) -> ToolTransition {
        let enable = self.active != tool;
        self.set_enabled(tool, enable)
    }

    /// Routes `event` to the active tool.
    #[must_use]
    pub fn dispatch(&self, event: &ViewEvent) -> Dispatch {
        match self.active {
            Tool::None => Dispatch::IGNORED,
            Tool::ZoomWindow => match *event {
                ViewEvent::Down { position, button } => {
                    if button == PointerButton::Primary {
                        Dispatch::act(ToolAction::Magnify(position), true)
                    } else {
                        Dispatch {
                            action: None,
                            consumed: true,
                        }
                    }
                }
                ViewEvent::DragUpdate { position } => {
                    Dispatch::act(ToolAction::Magnify(position), true)
                }
                ViewEvent::DragEnd { .. } => Dispatch::act(ToolAction::HideMagnifier, true),
                ViewEvent::Up { .. } | ViewEvent::Leave => {
                    Dispatch::act(ToolAction::HideMagnifier, false)
                }
                ViewEvent::HoldStart { .. } => Dispatch::IGNORED,
            },
            Tool::LayerFade => match *event {
                ViewEvent::HoldStart { .. } => Dispatch::act(ToolAction::BeginFade, true),
                ViewEvent::Up { .. } => Dispatch::act(ToolAction::EndFade, true),
                _ => Dispatch::IGNORED,
            },
        }
    }
}
