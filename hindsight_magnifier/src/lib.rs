// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hindsight Magnifier: a zoom window that follows the pointer.
//!
//! While the zoom-window tool is active, pressing or dragging over the primary
//! map shows a small square panel next to the pointer. The panel hosts a second
//! map view of the same map, centered on the point under the pointer and a few
//! zoom levels closer.
//!
//! [`MagnifierSync`] is the state machine behind it: `{Hidden, Tracking}`. Each
//! [`MagnifierSync::track`] call either moves the magnifier (and recomputes the
//! [`PanelPlacement`]) or hides it when the pointer leaves the primary
//! viewport or lands off the map. [`PointerState`] remembers the last accepted
//! position.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use hindsight_magnifier::{MagnifierState, MagnifierSync};
//! use hindsight_view2d::{MapId, MapView, MapViewport};
//!
//! let primary = MapViewport::new(MapId(1), Size::new(1000.0, 800.0));
//! let mut zoomed = MapViewport::new(MapId(1), Size::new(150.0, 150.0));
//! let mut sync = MagnifierSync::default();
//!
//! let state = sync.track(Point::new(950.0, 750.0), &primary, &mut zoomed);
//! assert_eq!(state, MagnifierState::Tracking);
//! assert_eq!(zoomed.zoom(), 3.0);
//!
//! // Near the bottom-right corner the panel opens up and to the left.
//! let panel = sync.panel().unwrap();
//! assert!(panel.offset.x < 0.0 && panel.offset.y < 0.0);
//!
//! sync.track(Point::new(1200.0, 10.0), &primary, &mut zoomed);
//! assert_eq!(sync.state(), MagnifierState::Hidden);
//! ```

pub mod pointer;
mod sync;

pub use pointer::PointerState;
pub use sync::{MagnifierConfig, MagnifierState, MagnifierSync, PanelPlacement, shares_map};
