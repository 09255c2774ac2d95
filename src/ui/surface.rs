//! Gesture recognition and action dispatch for message text.
//!
//! The surface turns raw mouse input into discrete gestures and gestures
//! into [`SurfaceAction`] values. It performs no I/O itself: the event loop
//! observes the returned actions and applies the side effects (URL dispatch,
//! clipboard write, bell, confirmation UI). Timestamps are passed in rather
//! than read from the clock, so tests drive time explicitly.

use std::time::{Duration, Instant};

use crate::link::segment::LinkMatch;
use crate::ui::layout::TextLayout;

/// Default hold threshold separating a tap from a long press.
pub const DEFAULT_HOLD: Duration = Duration::from_millis(500);

/// Transient per-render interaction state for one rendered message.
#[derive(Debug, Clone, Copy)]
pub struct InteractionContext<'a> {
    /// Copying a tip requests the tip confirmation instead of the general
    /// copy confirmation.
    pub tip: bool,
    /// Whether a long press may additionally request deletion.
    pub deletable: bool,
    /// Detected links, for tap hit-testing.
    pub matches: &'a [LinkMatch],
}

/// What a recognized gesture asks the surrounding UI to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceAction {
    /// Hand the URL to the OS default handler.
    OpenLink(String),
    /// Feedback pulse; the terminal bell stands in for a haptic.
    Pulse,
    /// Write `text` to the clipboard and show the matching confirmation.
    Copy { text: String, kind: CopyKind },
    /// Offer the message for deletion.
    RequestDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKind {
    Tip,
    Message,
}

/// A recognized discrete gesture, carrying the screen cell it began on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap { column: u16, row: u16 },
    LongPress { column: u16, row: u16 },
}

/// Press/hold/release recognizer following the discrete-gesture lifecycle:
/// Idle until a press begins recognition; releasing before the hold
/// threshold recognizes a tap; crossing the threshold while still held
/// recognizes a long press, after which the release is swallowed. Leaving
/// the press cell fails the pending gesture.
#[derive(Debug)]
pub struct GestureRecognizer {
    hold: Duration,
    state: State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Recognizing {
        column: u16,
        row: u16,
        pressed: Instant,
    },
    /// Long press already delivered; waiting for the release.
    Latched,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD)
    }
}

impl GestureRecognizer {
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            state: State::Idle,
        }
    }

    /// A button went down on the given cell.
    pub fn press(&mut self, column: u16, row: u16, now: Instant) {
        self.state = State::Recognizing {
            column,
            row,
            pressed: now,
        };
    }

    /// The pointer moved while the button is down. Moving off the press
    /// cell fails the pending gesture.
    pub fn moved(&mut self, column: u16, row: u16) {
        if let State::Recognizing {
            column: c, row: r, ..
        } = self.state
        {
            if (column, row) != (c, r) {
                self.state = State::Idle;
            }
        }
    }

    /// Drive recognition between input events. Returns the long press the
    /// first time the hold threshold is crossed while still held.
    pub fn tick(&mut self, now: Instant) -> Option<Gesture> {
        if let State::Recognizing {
            column,
            row,
            pressed,
        } = self.state
        {
            if now.duration_since(pressed) >= self.hold {
                self.state = State::Latched;
                return Some(Gesture::LongPress { column, row });
            }
        }
        None
    }

    /// The button came back up.
    pub fn release(&mut self, now: Instant) -> Option<Gesture> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Recognizing {
                column,
                row,
                pressed,
            } => {
                // The loop may not have ticked since the threshold passed.
                if now.duration_since(pressed) >= self.hold {
                    Some(Gesture::LongPress { column, row })
                } else {
                    Some(Gesture::Tap { column, row })
                }
            }
            _ => None,
        }
    }

    /// Abandon any pending gesture (focus loss, capture end).
    pub fn cancel(&mut self) {
        self.state = State::Idle;
    }
}

/// Resolve a tap at a message-local position. Produces exactly one
/// open-link action when the position lands on a detected link; otherwise
/// the tap is not consumed and `None` is returned.
pub fn tap_action(
    layout: &TextLayout,
    ctx: &InteractionContext,
    line: usize,
    col: usize,
) -> Option<SurfaceAction> {
    let offset = layout.offset_at(line, col)?;
    let hit = ctx.matches.iter().find(|m| m.contains(offset))?;
    Some(SurfaceAction::OpenLink(hit.url.clone()))
}

/// Actions for a long press anywhere on the text: a pulse, a copy of the
/// whole text, and a delete request when the context allows it.
pub fn long_press_actions(text: &str, ctx: &InteractionContext) -> Vec<SurfaceAction> {
    let kind = if ctx.tip {
        CopyKind::Tip
    } else {
        CopyKind::Message
    };
    let mut actions = vec![
        SurfaceAction::Pulse,
        SurfaceAction::Copy {
            text: text.to_string(),
            kind,
        },
    ];
    if ctx.deletable {
        actions.push(SurfaceAction::RequestDelete);
    }
    actions
}
