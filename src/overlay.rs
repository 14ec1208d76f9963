//! Overlay formatting for per-slot diagnostic text
//!
//! Pure conversion from one [`ControllerSnapshot`] plus a base position to
//! the fixed seven-line text block the UI paints for that slot. Token order
//! on the d-pad and button lines comes from static tables so the output is
//! deterministic regardless of which inputs are active. No line is ever
//! suppressed; a disconnected pad renders the same block with zeroed values.

use egui::{pos2, Color32, Pos2};

use crate::sampler::{ControllerSnapshot, PadButton};

/// Single color for every overlay line.
pub const OVERLAY_COLOR: Color32 = Color32::WHITE;

/// Vertical distance between consecutive lines, in pixels.
pub const LINE_SPACING: f32 = 30.0;

/// Lines emitted per slot: identity, connection, two sticks, d-pad,
/// buttons, triggers.
pub const LINES_PER_OVERLAY: usize = 7;

// Slot index -> player label, as reported on the identity line
const PLAYER_LABELS: [&str; 4] = ["One", "Two", "Three", "Four"];

// Button -> token, walked in order to build the buttons line
const BUTTON_LABELS: [(PadButton, &str); 10] = [
    (PadButton::A, "A"),
    (PadButton::B, "B"),
    (PadButton::X, "X"),
    (PadButton::Y, "Y"),
    (PadButton::Start, "START"),
    (PadButton::Back, "BACK"),
    (PadButton::LeftShoulder, "LB"),
    (PadButton::RightShoulder, "RB"),
    (PadButton::LeftStick, "LeftStick"),
    (PadButton::RightStick, "RightStick"),
];

/// One positioned, colored line of overlay text.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLine {
    pub text: String,
    pub pos: Pos2,
    pub color: Color32,
}

/// Formats the complete overlay block for one slot.
///
/// Total function: always exactly [`LINES_PER_OVERLAY`] lines in fixed
/// order, each offset [`LINE_SPACING`] below the previous one.
pub fn format_overlay(pad: &ControllerSnapshot, base: Pos2) -> Vec<OverlayLine> {
    let line = |row: usize, text: String| OverlayLine {
        text,
        pos: pos2(base.x, base.y + row as f32 * LINE_SPACING),
        color: OVERLAY_COLOR,
    };

    let lines = vec![
        line(0, format!("PlayerIndex : {}", player_label(pad.slot))),
        line(1, format!("IsConnected : {}", pad.connected)),
        line(
            2,
            format!(
                "LeftStick : {:.8}, {:.8}",
                pad.left_stick.0, pad.left_stick.1
            ),
        ),
        line(
            3,
            format!(
                "RightStick : {:.8}, {:.8}",
                pad.right_stick.0, pad.right_stick.1
            ),
        ),
        line(4, dpad_line(pad)),
        line(5, buttons_line(pad)),
        line(
            6,
            format!(
                "Trigger : {:.8}, {:.8}",
                pad.left_trigger, pad.right_trigger
            ),
        ),
    ];
    debug_assert_eq!(lines.len(), LINES_PER_OVERLAY);
    lines
}

fn player_label(slot: usize) -> String {
    match PLAYER_LABELS.get(slot) {
        Some(label) => (*label).to_string(),
        None => (slot + 1).to_string(),
    }
}

fn dpad_line(pad: &ControllerSnapshot) -> String {
    let directions = [
        (pad.dpad.up, "Up"),
        (pad.dpad.left, "Left"),
        (pad.dpad.down, "Down"),
        (pad.dpad.right, "Right"),
    ];

    let mut text = String::from("DirectionalPad : ");
    for (active, token) in directions {
        if active {
            text.push_str(token);
            text.push(' ');
        }
    }
    text
}

fn buttons_line(pad: &ControllerSnapshot) -> String {
    let mut text = String::from("Buttons : ");
    for (button, token) in BUTTON_LABELS {
        if pad.buttons.pressed(button) {
            text.push_str(token);
            text.push(' ');
        }
    }
    text
}
