use gilrs::{Axis, Button, Event, EventType, Gamepad, GamepadId, Gilrs};
use statum::{machine, state};
use tracing::{debug, info, warn};

use super::snapshot::{ControllerSnapshot, DpadState, JoystickType, PadButton, PadSource, TriggerType};

// Sampler errors
#[derive(Debug, thiserror::Error)]
pub enum SamplerError {
    #[error("Failed to initialize gamepad backend: {0}")]
    Initialization(String),
}

// Define sampler states using statum's state macro
#[state]
#[derive(Debug, Clone)]
pub enum SamplerState {
    Initializing,
    Sampling,
}

#[machine]
#[derive(Debug)]
pub struct GamepadSampler<S: SamplerState> {
    // Gilrs context
    gilrs: Gilrs,

    // Fixed slot table: player slot -> backing gamepad, if any
    slots: Vec<Option<GamepadId>>,
}

// Implementation of methods available in all states
impl<S: SamplerState> GamepadSampler<S> {
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

// Implementation for Initializing state
impl GamepadSampler<Initializing> {
    pub fn create(slot_count: usize) -> Result<Self, SamplerError> {
        info!("Initializing gilrs controller interface");
        let gilrs = match Gilrs::new() {
            Ok(g) => {
                info!("Successfully initialized gilrs");
                g
            }
            Err(e) => {
                warn!("Failed to initialize gilrs: {}", e);
                return Err(SamplerError::Initialization(e.to_string()));
            }
        };

        debug!("Creating GamepadSampler with {} slots", slot_count);
        Ok(Self::new(gilrs, vec![None; slot_count]))
    }

    // Assign already-connected gamepads to slots and transition to Sampling
    pub fn initialize(mut self) -> GamepadSampler<Sampling> {
        let mut discovered: Vec<GamepadId> = Vec::new();
        for (slot, (id, gamepad)) in self.gilrs.gamepads().enumerate() {
            if slot >= self.slots.len() {
                warn!(
                    "Gamepad {} ({}) exceeds the {} configured slots, ignored",
                    id,
                    gamepad.name(),
                    self.slots.len()
                );
                continue;
            }
            info!(
                "  slot {}: ID: {}, Name: {}, UUID: {:?}",
                slot,
                id,
                gamepad.name(),
                gamepad.uuid()
            );
            discovered.push(id);
        }

        if discovered.is_empty() {
            warn!("No gamepad connected, all slots start vacant");
        }
        for (slot, id) in discovered.into_iter().enumerate() {
            self.slots[slot] = Some(id);
        }

        info!("Gamepad sampler initialized, transitioning to Sampling state");
        self.transition()
    }
}

// Implementation for Sampling state
impl GamepadSampler<Sampling> {
    /// Drains the gilrs event queue and keeps the slot table current.
    ///
    /// Must run once per frame before [`sample`](Self::sample); it is the
    /// only place the sampler mutates state, so `sample` stays a pure read.
    pub fn pump(&mut self) {
        while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
            match event {
                EventType::Connected => self.assign_slot(id),
                EventType::Disconnected => self.release_slot(id),
                _ => debug!("Ignoring gilrs event: {:?}", event),
            }
        }
    }

    /// Reads the current state of every slot from gilrs's cached device
    /// state. Calling this twice within one frame yields equal snapshots.
    pub fn sample(&self) -> Vec<ControllerSnapshot> {
        self.slots
            .iter()
            .enumerate()
            .map(|(slot, assigned)| match assigned {
                Some(id) => {
                    let pad = GilrsPad(self.gilrs.gamepad(*id));
                    ControllerSnapshot::read_from(slot, &pad)
                }
                None => ControllerSnapshot::disconnected(slot),
            })
            .collect()
    }

    fn assign_slot(&mut self, id: GamepadId) {
        if self.slots.contains(&Some(id)) {
            debug!("Gamepad {} already assigned to a slot", id);
            return;
        }
        match self.slots.iter_mut().find(|slot| slot.is_none()) {
            Some(vacant) => {
                info!("Gamepad {} connected, assigned to a vacant slot", id);
                *vacant = Some(id);
            }
            None => warn!("Gamepad {} connected but all slots are taken", id),
        }
    }

    fn release_slot(&mut self, id: GamepadId) {
        for (slot, assigned) in self.slots.iter_mut().enumerate() {
            if *assigned == Some(id) {
                warn!("Gamepad {} disconnected from slot {}", id, slot);
                *assigned = None;
                return;
            }
        }
        debug!("Disconnect event for untracked gamepad {}", id);
    }
}

// Gilrs-backed pad state reader
struct GilrsPad<'a>(Gamepad<'a>);

impl PadSource for GilrsPad<'_> {
    fn connected(&self) -> bool {
        self.0.is_connected()
    }

    fn stick(&self, stick: JoystickType) -> (f32, f32) {
        match stick {
            JoystickType::Left => (
                self.0.value(Axis::LeftStickX),
                self.0.value(Axis::LeftStickY),
            ),
            JoystickType::Right => (
                self.0.value(Axis::RightStickX),
                self.0.value(Axis::RightStickY),
            ),
        }
    }

    fn pressed(&self, button: PadButton) -> bool {
        self.0.is_pressed(map_button(button))
    }

    fn dpad(&self) -> DpadState {
        DpadState {
            up: self.0.is_pressed(Button::DPadUp),
            down: self.0.is_pressed(Button::DPadDown),
            left: self.0.is_pressed(Button::DPadLeft),
            right: self.0.is_pressed(Button::DPadRight),
        }
    }

    fn trigger(&self, trigger: TriggerType) -> f32 {
        let button = match trigger {
            TriggerType::Left => Button::LeftTrigger2,
            TriggerType::Right => Button::RightTrigger2,
        };
        self.0
            .button_data(button)
            .map(|data| data.value())
            .unwrap_or(0.0)
    }
}

// Helper function to map our PadButton to the gilrs Button
fn map_button(button: PadButton) -> Button {
    match button {
        PadButton::A => Button::South,
        PadButton::B => Button::East,
        PadButton::X => Button::North,
        PadButton::Y => Button::West,
        PadButton::Start => Button::Start,
        PadButton::Back => Button::Select,
        PadButton::LeftShoulder => Button::LeftTrigger,
        PadButton::RightShoulder => Button::RightTrigger,
        PadButton::LeftStick => Button::LeftThumb,
        PadButton::RightStick => Button::RightThumb,
    }
}
