//! Controller glue: input state and a third-person motion + combat loop.
//!
//! All engine services live behind the seams in `engine_api`; everything in
//! this crate is plain per-tick logic, testable without a runtime.

#![deny(warnings, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod input {
    use glam::Vec2;

    /// Input snapshot for one frame of local player intent.
    #[derive(Default, Debug, Clone, Copy)]
    pub struct InputState {
        /// Raw 2D movement axis: x = strafe right(+), y = forward(+).
        /// Components lie in [-1, 1].
        pub move_axis: Vec2,
        /// One-shot jump press for this frame. The host should set this
        /// to true on key-press and clear it after the snapshot is consumed
        /// so holding the key does not repeat-jump.
        pub jump_pressed: bool,
    }
    impl InputState {
        pub fn clear(&mut self) {
            *self = Self::default();
        }
    }

    /// Discrete commands delivered by the host's input bindings.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum InputCommand {
        Fire,
        ToggleWeapon,
    }

    /// Pending commands, drained by the controller exactly once per tick.
    ///
    /// The host pushes a command when its binding fires; dropping the queue
    /// on deactivation is the unsubscribe. One delivery path per logical
    /// handler exists by construction.
    #[derive(Default, Clone, Debug)]
    pub struct InputQueue {
        cmds: Vec<InputCommand>,
    }

    impl InputQueue {
        pub fn push(&mut self, c: InputCommand) {
            self.cmds.push(c);
        }
        pub fn drain(&mut self) -> impl Iterator<Item = InputCommand> + '_ {
            self.cmds.drain(..)
        }
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.cmds.is_empty()
        }
    }

}

pub mod combat;
pub mod controller;
pub mod systems;

pub use controller::PlayerController;
