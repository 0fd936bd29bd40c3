//! Pointer input normalization.
//!
//! Devices report either mouse clicks or touches. The effect only needs the
//! (x, y) where the user pressed, so each platform binding turns its own raw
//! events into a [`Point`] and ignores everything else. Touch wins when the
//! device has it; the choice is made once at startup.

use glitter_core::Point;

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

/// A raw event from the windowing layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// A mouse button went down.
    MouseDown {
        /// Cursor X.
        x: f32,
        /// Cursor Y.
        y: f32,
        /// Which button.
        button: MouseButton,
    },
    /// A mouse button went up.
    MouseUp {
        /// Which button.
        button: MouseButton,
    },
    /// One or more fingers touched the surface.
    TouchStart {
        /// Active touch points, oldest first.
        touches: Vec<Point>,
    },
    /// All fingers lifted.
    TouchEnd,
}

/// Which kind of pointer a device drives the effect with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse clicks.
    Mouse,
    /// Touch taps.
    Touch,
}

/// What the host reports about the input hardware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceCapabilities {
    /// Maximum simultaneous touch points (0 = no touch screen).
    pub max_touch_points: u32,
}

impl DeviceCapabilities {
    /// A device without a touch screen.
    pub const MOUSE_ONLY: Self = Self { max_touch_points: 0 };

    /// True if the device has a touch screen.
    #[must_use]
    pub const fn has_touch(&self) -> bool {
        self.max_touch_points > 0
    }
}

impl PointerKind {
    /// Picks the pointer kind for a device. Touch is preferred.
    #[must_use]
    pub const fn detect(capabilities: DeviceCapabilities) -> Self {
        if capabilities.has_touch() {
            Self::Touch
        } else {
            Self::Mouse
        }
    }
}

/// A platform binding that turns raw events into press coordinates.
pub trait PointerInput: Send + Sync {
    /// The device kind this binding listens to.
    fn kind(&self) -> PointerKind;

    /// The press location carried by `event`, if this binding accepts it.
    fn locate(&self, event: &PointerEvent) -> Option<Point>;
}

/// Mouse binding: left-button presses only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseInput;

impl PointerInput for MouseInput {
    fn kind(&self) -> PointerKind {
        PointerKind::Mouse
    }

    fn locate(&self, event: &PointerEvent) -> Option<Point> {
        match *event {
            PointerEvent::MouseDown {
                x,
                y,
                button: MouseButton::Left,
            } => Some(Point::new(x, y)),
            _ => None,
        }
    }
}

/// Touch binding: first finger of a touch start.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchInput;

impl PointerInput for TouchInput {
    fn kind(&self) -> PointerKind {
        PointerKind::Touch
    }

    fn locate(&self, event: &PointerEvent) -> Option<Point> {
        match event {
            PointerEvent::TouchStart { touches } => touches.first().copied(),
            _ => None,
        }
    }
}

/// Returns the binding for `kind`.
#[must_use]
pub fn pointer_for(kind: PointerKind) -> Box<dyn PointerInput> {
    match kind {
        PointerKind::Mouse => Box::new(MouseInput),
        PointerKind::Touch => Box::new(TouchInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_preferred() {
        let touch = DeviceCapabilities { max_touch_points: 5 };
        assert_eq!(PointerKind::detect(touch), PointerKind::Touch);
        assert_eq!(PointerKind::detect(DeviceCapabilities::MOUSE_ONLY), PointerKind::Mouse);
    }

    #[test]
    fn test_mouse_left_click_only() {
        let mouse = MouseInput;
        let left = PointerEvent::MouseDown {
            x: 3.0,
            y: 4.0,
            button: MouseButton::Left,
        };
        let right = PointerEvent::MouseDown {
            x: 3.0,
            y: 4.0,
            button: MouseButton::Right,
        };

        assert_eq!(mouse.locate(&left), Some(Point::new(3.0, 4.0)));
        assert_eq!(mouse.locate(&right), None);
        assert_eq!(mouse.locate(&PointerEvent::MouseUp { button: MouseButton::Left }), None);
    }

    #[test]
    fn test_touch_uses_first_finger() {
        let touch = TouchInput;
        let event = PointerEvent::TouchStart {
            touches: vec![Point::new(10.0, 20.0), Point::new(30.0, 40.0)],
        };

        assert_eq!(touch.locate(&event), Some(Point::new(10.0, 20.0)));
        assert_eq!(touch.locate(&PointerEvent::TouchStart { touches: Vec::new() }), None);
        assert_eq!(touch.locate(&PointerEvent::TouchEnd), None);
    }

    #[test]
    fn test_bindings_ignore_other_device() {
        let click = PointerEvent::MouseDown {
            x: 1.0,
            y: 1.0,
            button: MouseButton::Left,
        };
        let tap = PointerEvent::TouchStart {
            touches: vec![Point::new(1.0, 1.0)],
        };

        assert_eq!(TouchInput.locate(&click), None);
        assert_eq!(MouseInput.locate(&tap), None);
    }

    #[test]
    fn test_pointer_for_kind() {
        assert_eq!(pointer_for(PointerKind::Touch).kind(), PointerKind::Touch);
        assert_eq!(pointer_for(PointerKind::Mouse).kind(), PointerKind::Mouse);
    }
}
