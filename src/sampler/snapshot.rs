use serde::{Deserialize, Serialize};

// Joystick side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoystickType {
    Left,
    Right,
}

// Trigger side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerType {
    Left,
    Right,
}

// Digital buttons tracked per pad, d-pad excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PadButton {
    A,
    B,
    X,
    Y,
    Start,
    Back,
    LeftShoulder,
    RightShoulder,
    LeftStick,
    RightStick,
}

impl PadButton {
    pub const ALL: [PadButton; 10] = [
        PadButton::A,
        PadButton::B,
        PadButton::X,
        PadButton::Y,
        PadButton::Start,
        PadButton::Back,
        PadButton::LeftShoulder,
        PadButton::RightShoulder,
        PadButton::LeftStick,
        PadButton::RightStick,
    ];
}

/// Pressed-state set over [`PadButton::ALL`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ButtonSet([bool; 10]);

impl ButtonSet {
    pub fn pressed(&self, button: PadButton) -> bool {
        self.0[button as usize]
    }

    pub fn set(&mut self, button: PadButton, pressed: bool) {
        self.0[button as usize] = pressed;
    }

    /// Builds the set by asking `pressed` for every tracked button.
    pub fn from_fn(mut pressed: impl FnMut(PadButton) -> bool) -> Self {
        let mut set = Self::default();
        for button in PadButton::ALL {
            set.set(button, pressed(button));
        }
        set
    }
}

// Four independent direction flags; any subset may be active at once
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DpadState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Read access to one pad's current state.
///
/// Implemented for the gilrs-backed pad in
/// [`gamepad_sampler`](crate::sampler::gamepad_sampler); test code supplies
/// its own implementation, so snapshot capture stays checkable without
/// hardware.
pub trait PadSource {
    fn connected(&self) -> bool;
    fn stick(&self, stick: JoystickType) -> (f32, f32);
    fn pressed(&self, button: PadButton) -> bool;
    fn dpad(&self) -> DpadState;
    fn trigger(&self, trigger: TriggerType) -> f32;
}

/// Complete captured state of one player slot for exactly one frame.
///
/// Owned by the frame that sampled it; nothing retains snapshots across
/// frames. A disconnected or unassigned slot is a valid snapshot with
/// `connected = false` and every analog/digital field at its zero default,
/// never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerSnapshot {
    pub slot: usize,
    pub connected: bool,
    pub left_stick: (f32, f32),
    pub right_stick: (f32, f32),
    pub dpad: DpadState,
    pub buttons: ButtonSet,
    pub left_trigger: f32,
    pub right_trigger: f32,
}

impl ControllerSnapshot {
    /// The neutral snapshot a vacant or unplugged slot reports.
    pub fn disconnected(slot: usize) -> Self {
        Self {
            slot,
            ..Self::default()
        }
    }

    /// Captures the current state of `pad` for `slot`.
    pub fn read_from<P: PadSource>(slot: usize, pad: &P) -> Self {
        if !pad.connected() {
            return Self::disconnected(slot);
        }
        Self {
            slot,
            connected: true,
            left_stick: pad.stick(JoystickType::Left),
            right_stick: pad.stick(JoystickType::Right),
            dpad: pad.dpad(),
            buttons: ButtonSet::from_fn(|button| pad.pressed(button)),
            left_trigger: pad.trigger(TriggerType::Left),
            right_trigger: pad.trigger(TriggerType::Right),
        }
    }
}

/// Level check evaluated fresh every frame: slot-0 Back or Escape.
///
/// Reads the same slot-0 snapshot the overlay renders, so the exit check and
/// the displayed state can never diverge. No debouncing or edge detection;
/// a disconnected slot 0 reports Back as not pressed.
pub fn exit_requested(pads: &[ControllerSnapshot], escape_down: bool) -> bool {
    let back_pressed = pads
        .first()
        .map(|pad| pad.buttons.pressed(PadButton::Back))
        .unwrap_or(false);
    back_pressed || escape_down
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePad {
        connected: bool,
        left: (f32, f32),
        right: (f32, f32),
        dpad: DpadState,
        held: Vec<PadButton>,
        triggers: (f32, f32),
    }

    impl FakePad {
        fn idle() -> Self {
            Self {
                connected: true,
                left: (0.0, 0.0),
                right: (0.0, 0.0),
                dpad: DpadState::default(),
                held: Vec::new(),
                triggers: (0.0, 0.0),
            }
        }
    }

    impl PadSource for FakePad {
        fn connected(&self) -> bool {
            self.connected
        }

        fn stick(&self, stick: JoystickType) -> (f32, f32) {
            match stick {
                JoystickType::Left => self.left,
                JoystickType::Right => self.right,
            }
        }

        fn pressed(&self, button: PadButton) -> bool {
            self.held.contains(&button)
        }

        fn dpad(&self) -> DpadState {
            self.dpad
        }

        fn trigger(&self, trigger: TriggerType) -> f32 {
            match trigger {
                TriggerType::Left => self.triggers.0,
                TriggerType::Right => self.triggers.1,
            }
        }
    }

    #[test]
    fn disconnected_slot_reports_neutral_state() {
        let snapshot = ControllerSnapshot::disconnected(2);
        assert_eq!(snapshot.slot, 2);
        assert!(!snapshot.connected);
        assert_eq!(snapshot.left_stick, (0.0, 0.0));
        assert_eq!(snapshot.right_stick, (0.0, 0.0));
        assert_eq!(snapshot.dpad, DpadState::default());
        assert_eq!(snapshot.left_trigger, 0.0);
        assert_eq!(snapshot.right_trigger, 0.0);
        for button in PadButton::ALL {
            assert!(!snapshot.buttons.pressed(button));
        }
    }

    #[test]
    fn read_from_disconnected_pad_matches_neutral_snapshot() {
        let mut pad = FakePad::idle();
        pad.connected = false;
        pad.left = (0.7, -0.2);
        pad.held = vec![PadButton::A];

        let snapshot = ControllerSnapshot::read_from(1, &pad);
        assert_eq!(snapshot, ControllerSnapshot::disconnected(1));
    }

    #[test]
    fn read_from_captures_every_field() {
        let pad = FakePad {
            connected: true,
            left: (0.5, -1.0),
            right: (-0.25, 0.125),
            dpad: DpadState {
                up: true,
                right: true,
                ..DpadState::default()
            },
            held: vec![PadButton::A, PadButton::Back, PadButton::RightShoulder],
            triggers: (0.75, 1.0),
        };

        let snapshot = ControllerSnapshot::read_from(0, &pad);
        assert!(snapshot.connected);
        assert_eq!(snapshot.left_stick, (0.5, -1.0));
        assert_eq!(snapshot.right_stick, (-0.25, 0.125));
        assert!(snapshot.dpad.up && snapshot.dpad.right);
        assert!(!snapshot.dpad.down && !snapshot.dpad.left);
        assert!(snapshot.buttons.pressed(PadButton::A));
        assert!(snapshot.buttons.pressed(PadButton::Back));
        assert!(snapshot.buttons.pressed(PadButton::RightShoulder));
        assert!(!snapshot.buttons.pressed(PadButton::Start));
        assert_eq!(snapshot.left_trigger, 0.75);
        assert_eq!(snapshot.right_trigger, 1.0);
    }

    #[test]
    fn sampling_twice_without_input_change_is_identical() {
        let mut pad = FakePad::idle();
        pad.left = (0.33, 0.66);
        pad.held = vec![PadButton::Start];

        let first = ControllerSnapshot::read_from(3, &pad);
        let second = ControllerSnapshot::read_from(3, &pad);
        assert_eq!(first, second);
    }

    #[test]
    fn exit_requested_truth_table() {
        let mut back_held = ControllerSnapshot::disconnected(0);
        back_held.connected = true;
        back_held.buttons.set(PadButton::Back, true);
        let idle = ControllerSnapshot::disconnected(0);

        assert!(!exit_requested(&[idle], false));
        assert!(exit_requested(&[idle], true));
        assert!(exit_requested(&[back_held], false));
        assert!(exit_requested(&[back_held], true));
    }

    #[test]
    fn exit_ignores_back_on_other_slots() {
        let idle = ControllerSnapshot::disconnected(0);
        let mut other = ControllerSnapshot::disconnected(1);
        other.connected = true;
        other.buttons.set(PadButton::Back, true);

        assert!(!exit_requested(&[idle, other], false));
    }

    #[test]
    fn exit_with_no_slots_tracks_escape_only() {
        assert!(!exit_requested(&[], false));
        assert!(exit_requested(&[], true));
    }
}
