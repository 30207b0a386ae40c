// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hindsight Tools: mutually exclusive map tools and their event routing.
//!
//! The comparison UI offers two tools over the primary map: a zoom window that
//! follows the pointer and a press-and-hold layer fade. At most one is active.
//!
//! - [`ToolCoordinator`] owns the active [`Tool`]. Changing it returns a
//!   [`ToolTransition`] naming the tool that was switched off, so its owner can
//!   tear down that tool's state.
//! - [`ToolCoordinator::dispatch`] maps a raw [`ViewEvent`] to the
//!   [`ToolAction`] of the active tool, and says whether the event must be
//!   withheld from the view's default navigation.
//! - [`ToolChrome`] is the visual side: selected button indicators and the
//!   [`cursor_icon::CursorIcon`] for the view.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use hindsight_tools::{Tool, ToolAction, ToolChrome, ToolCoordinator, ViewEvent};
//! use ui_events::pointer::PointerButton;
//!
//! let mut tools = ToolCoordinator::new();
//! tools.toggle(Tool::ZoomWindow);
//!
//! let down = ViewEvent::Down {
//!     position: Point::new(40.0, 30.0),
//!     button: PointerButton::Primary,
//! };
//! let dispatch = tools.dispatch(&down);
//! assert_eq!(dispatch.action, Some(ToolAction::Magnify(Point::new(40.0, 30.0))));
//! assert!(dispatch.consumed);
//!
//! // Switching tools reports the one that must be torn down.
//! let transition = tools.toggle(Tool::LayerFade);
//! assert_eq!(transition.deactivated(), Some(Tool::ZoomWindow));
//! assert_eq!(
//!     ToolChrome::for_tool(tools.active()).cursor,
//!     cursor_icon::CursorIcon::Pointer
//! );
//! ```

mod chrome;
mod coordinator;
mod event;

pub use chrome::ToolChrome;
pub use coordinator::{Dispatch, Tool, ToolAction, ToolCoordinator, ToolTransition};
pub use event::ViewEvent;
