// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cursor_icon::CursorIcon;

use crate::Tool;

/// Visual state implied by the active tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolChrome {
    /// Whether the zoom-window button shows as selected.
    pub zoom_window_selected: bool,
    /// Whether the layer-fade button shows as selected.
    pub layer_fade_selected: bool,
    /// Cursor over the primary view.
    pub cursor: CursorIcon,
}

impl ToolChrome {
    /// Chrome for `tool` being the active tool.
    #[must_use]
    pub fn for_tool(tool: Tool) -> Self {
        let cursor = match tool {
            Tool::ZoomWindow => CursorIcon::AllScroll,
            Tool::LayerFade => CursorIcon::Pointer,
            Tool::None => CursorIcon::Default,
        };
        Self {
            zoom_window_selected: tool == Tool::ZoomWindow,
            layer_fade_selected: tool == Tool::LayerFade,
            cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_and_indicators_follow_tool() {
        let chrome = ToolChrome::for_tool(Tool::ZoomWindow);
        assert_eq!(chrome.cursor, CursorIcon::AllScroll);
        assert!(chrome.zoom_window_selected && !chrome.layer_fade_selected);

        let chrome = ToolChrome::for_tool(Tool::LayerFade);
        assert_eq!(chrome.cursor, CursorIcon::Pointer);
        assert!(!chrome.zoom_window_selected && chrome.layer_fade_selected);

        let chrome = ToolChrome::for_tool(Tool::None);
        assert_eq!(chrome.cursor, CursorIcon::Default);
        assert!(!chrome.zoom_window_selected && !chrome.layer_fade_selected);
    }
}
