//! Layout calculation logic
//!
//! Sidebar visibility follows the viewport width the same way the web
//! dashboard does. A terminal has no pixel width, so the viewport is
//! approximated as columns times a nominal cell width.

/// Viewports narrower than this are treated as mobile
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Nominal width of one terminal cell in pixels
pub const DEFAULT_CELL_WIDTH_PX: u16 = 8;

/// Columns reserved for the sidebar when it is open
pub const SIDEBAR_WIDTH: u16 = 24;

/// Approximate a pixel viewport width for a terminal of `columns`
///
/// # Examples
/// ```
/// use rackdesk::logic::layout::viewport_width;
///
/// assert_eq!(viewport_width(96, 8), 768);
/// assert_eq!(viewport_width(80, 8), 640);
/// ```
pub fn viewport_width(columns: u16, cell_width_px: u16) -> u32 {
    u32::from(columns) * u32::from(cell_width_px.max(1))
}

pub fn is_mobile_width(width: u32) -> bool {
    width < MOBILE_BREAKPOINT
}

/// Sidebar open/closed state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    pub sidebar_open: bool,
    pub is_mobile: bool,
}

impl SidebarState {
    /// Initial state: open on desktop, closed on mobile
    pub fn for_viewport(width: u32) -> Self {
        let is_mobile = is_mobile_width(width);
        Self {
            sidebar_open: !is_mobile,
            is_mobile,
        }
    }

    /// Recompute from a new viewport width
    ///
    /// Every resize resets `sidebar_open` from the new width; a manual
    /// toggle made before the resize is not kept.
    ///
    /// # Examples
    /// ```
    /// use rackdesk::logic::layout::SidebarState;
    ///
    /// let mut state = SidebarState::for_viewport(1280);
    /// state.toggle();
    /// assert!(!state.sidebar_open);
    ///
    /// state.on_resize(1300);
    /// assert!(state.sidebar_open);
    /// ```
    pub fn on_resize(&mut self, width: u32) {
        *self = Self::for_viewport(width);
    }

    pub fn toggle(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Picking a destination closes the sidebar on mobile so the page is visible
    pub fn on_navigate(&mut self) {
        if self.is_mobile {
            self.sidebar_open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_starts_open() {
        let state = SidebarState::for_viewport(1024);
        assert!(state.sidebar_open);
        assert!(!state.is_mobile);
    }

    #[test]
    fn test_mobile_starts_closed() {
        let state = SidebarState::for_viewport(600);
        assert!(!state.sidebar_open);
        assert!(state.is_mobile);
    }

    #[test]
    fn test_breakpoint_is_exclusive() {
        assert!(is_mobile_width(767));
        assert!(!is_mobile_width(768));
    }

    #[test]
    fn test_resize_to_mobile_closes() {
        let mut state = SidebarState::for_viewport(1024);
        state.on_resize(500);
        assert_eq!(
            state,
            SidebarState {
                sidebar_open: false,
                is_mobile: true
            }
        );
    }

    #[test]
    fn test_resize_discards_manual_open_on_mobile() {
        let mut state = SidebarState::for_viewport(500);
        state.toggle();
        assert!(state.sidebar_open);

        // Same width, still mobile: the resize forces it closed again
        state.on_resize(500);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn test_navigate_closes_only_on_mobile() {
        let mut desktop = SidebarState::for_viewport(1200);
        desktop.on_navigate();
        assert!(desktop.sidebar_open);

        let mut mobile = SidebarState::for_viewport(400);
        mobile.toggle();
        mobile.on_navigate();
        assert!(!mobile.sidebar_open);
    }

    #[test]
    fn test_zero_cell_width_is_treated_as_one() {
        assert_eq!(viewport_width(100, 0), 100);
    }
}
