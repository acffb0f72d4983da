use egui::{Context, PointerButton, Pos2, Rect};

/// Which phase of a pointer gesture an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// A pointer event in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub pos: Pos2,
    /// Whether the primary button was held when the event was produced
    pub is_pointer_down: bool,
}

impl PointerEvent {
    pub fn down(pos: Pos2) -> Self {
        Self {
            kind: PointerKind::Down,
            pos,
            is_pointer_down: true,
        }
    }

    pub fn moved(pos: Pos2, is_pointer_down: bool) -> Self {
        Self {
            kind: PointerKind::Move,
            pos,
            is_pointer_down,
        }
    }

    pub fn up(pos: Pos2) -> Self {
        Self {
            kind: PointerKind::Up,
            pos,
            is_pointer_down: false,
        }
    }
}

/// The primary-button state sampled from egui for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct RawPointer {
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
    pub down: bool,
}

/// Handles converting raw egui input into canvas-local [`PointerEvent`]s
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Sample egui's pointer state and translate it
    pub fn process_input(&mut self, ctx: &Context) -> Vec<PointerEvent> {
        let raw = ctx.input(|input| RawPointer {
            pos: input.pointer.latest_pos(),
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
            down: input.pointer.primary_down(),
        });
        self.translate(raw)
    }

    /// Presses only count inside the canvas. Moves and releases are always
    /// forwarded so a drag that leaves the canvas still ends.
    pub fn translate(&mut self, raw: RawPointer) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let Some(pos) = raw.pos else {
            return events;
        };
        let local = self.to_canvas(pos);

        if self.last_pointer_pos != Some(pos) {
            events.push(PointerEvent::moved(local, raw.down));
            self.last_pointer_pos = Some(pos);
        }
        if raw.pressed && self.canvas_rect.contains(pos) {
            events.push(PointerEvent::down(local));
        }
        if raw.released {
            events.push(PointerEvent::up(local));
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_max(Pos2::new(100.0, 50.0), Pos2::new(500.0, 450.0)))
    }

    #[test]
    fn test_press_inside_canvas_is_local() {
        let mut input = handler();
        let events = input.translate(RawPointer {
            pos: Some(Pos2::new(110.0, 60.0)),
            pressed: true,
            down: true,
            ..Default::default()
        });
        assert_eq!(
            events,
            vec![
                PointerEvent::moved(Pos2::new(10.0, 10.0), true),
                PointerEvent::down(Pos2::new(10.0, 10.0)),
            ]
        );
    }

    #[test]
    fn test_press_outside_canvas_is_dropped() {
        let mut input = handler();
        let events = input.translate(RawPointer {
            pos: Some(Pos2::new(20.0, 20.0)),
            pressed: true,
            down: true,
            ..Default::default()
        });
        assert!(events.iter().all(|event| event.kind != PointerKind::Down));
    }

    #[test]
    fn test_release_outside_canvas_still_forwarded() {
        let mut input = handler();
        input.translate(RawPointer {
            pos: Some(Pos2::new(20.0, 20.0)),
            ..Default::default()
        });
        let events = input.translate(RawPointer {
            pos: Some(Pos2::new(20.0, 20.0)),
            released: true,
            ..Default::default()
        });
        assert_eq!(events, vec![PointerEvent::up(Pos2::new(-80.0, -30.0))]);
    }
}
