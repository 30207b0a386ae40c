// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use ui_events::pointer::PointerButton;

/// A raw interaction on the primary map view, in viewport pixels.
///
/// Hosts translate their view's pointer, drag and hold notifications into
/// these before handing them to a [`ToolCoordinator`](crate::ToolCoordinator).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewEvent {
    /// A button was pressed.
    Down {
        /// Pointer position.
        position: Point,
        /// Pressed button.
        button: PointerButton,
    },
    /// The pointer moved while a drag is in progress.
    DragUpdate {
        /// Pointer position.
        position: Point,
    },
    /// A drag finished.
    DragEnd {
        /// Pointer position.
        position: Point,
    },
    /// A button was released.
    Up {
        /// Pointer position.
        position: Point,
    },
    /// The pointer left the view.
    Leave,
    /// A press was held in place long enough to count as a hold.
    HoldStart {
        /// Pointer position.
        position: Point,
    },
}

impl ViewEvent {
    /// Pointer position carried by the event.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match *self {
            Self::Down { position, .. }
            | Self::DragUpdate { position }
            | Self::DragEnd { position }
            | Self::Up { position }
            | Self::HoldStart { position } => Some(position),
            Self::Leave => None,
        }
    }
}
