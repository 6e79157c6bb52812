//! Keeps content clear of the on-screen keyboard.

use tracing::debug;
use wordgrid_core::Rect;

/// Shrinks the host frame while the keyboard is up and restores it after.
///
/// The caller feeds keyboard notifications in and resizes its
/// [`Surface`](wordgrid_layout::Surface) whenever a method returns `true`.
///
/// # Examples
///
/// ```
/// use wordgrid_app::KeyboardObserver;
/// use wordgrid_core::Rect;
///
/// let mut host = Rect::new(0.0, 0.0, 375.0, 667.0);
/// let mut keyboard = KeyboardObserver::new();
///
/// assert!(keyboard.will_show(&mut host, 260.0, 667.0));
/// assert_eq!(host.height, 407.0);
///
/// assert!(keyboard.will_hide(&mut host, 667.0));
/// assert_eq!(host.height, 667.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KeyboardObserver {
    open: bool,
    window_height: f32,
}

impl KeyboardObserver {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            open: false,
            window_height: 0.0,
        }
    }

    /// Whether the keyboard is currently up.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Screen height recorded at the last transition.
    #[must_use]
    pub const fn window_height(&self) -> f32 {
        self.window_height
    }

    /// The keyboard is about to appear. Ignored while already open.
    pub fn will_show(&mut self, host: &mut Rect, keyboard_height: f32, screen_height: f32) -> bool {
        if self.open {
            return false;
        }
        self.window_height = screen_height;
        host.height = (host.height - keyboard_height.max(0.0)).max(0.0);
        self.open = true;
        debug!(keyboard_height, height = host.height, "keyboard shown");
        true
    }

    /// The keyboard is about to disappear. Ignored while already closed.
    pub fn will_hide(&mut self, host: &mut Rect, screen_height: f32) -> bool {
        if !self.open {
            return false;
        }
        self.window_height = screen_height;
        host.height = self.window_height;
        self.open = false;
        debug!(height = host.height, "keyboard hidden");
        true
    }
}
