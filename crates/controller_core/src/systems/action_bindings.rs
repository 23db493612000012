//! Map button presses to `InputCommand`s for the controller's command queue.

use crate::input::{InputCommand, InputQueue};

/// Edge-triggered button state for one frame: true on the press edge only.
#[derive(Default, Clone, Copy, Debug)]
pub struct ButtonSnapshot {
    pub fire_pressed: bool,
    pub equip_pressed: bool,
}

/// Which command each button emits.
#[derive(Clone, Copy, Debug)]
pub struct Bindings {
    pub fire: InputCommand,
    pub equip: InputCommand,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            fire: InputCommand::Fire,
            equip: InputCommand::ToggleWeapon,
        }
    }
}

/// Push one command per pressed button. Edge detection is the host's job;
/// a held button must not re-enter here every frame.
pub fn handle_buttons(binds: &Bindings, input: &ButtonSnapshot, out: &mut InputQueue) {
    if input.fire_pressed {
        out.push(binds.fire);
    }
    if input.equip_pressed {
        out.push(binds.equip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_buttons_emit_commands() {
        let binds = Bindings::default();
        let input = ButtonSnapshot {
            fire_pressed: true,
            equip_pressed: true,
        };
        let mut out = InputQueue::default();
        handle_buttons(&binds, &input, &mut out);
        let cmds: Vec<_> = out.drain().collect();
        assert_eq!(cmds, vec![InputCommand::Fire, InputCommand::ToggleWeapon]);
    }

    #[test]
    fn idle_buttons_emit_nothing() {
        let mut out = InputQueue::default();
        handle_buttons(&Bindings::default(), &ButtonSnapshot::default(), &mut out);
        assert!(out.is_empty());
    }
}
