use crate::force::Direction;

/// Commands the frame driver sends to the world, already translated from
/// raw input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControllerMessage {
	Push(Direction),
	Attract([f32; 2]),
	Spawn([f32; 2]),
	ToggleGravity,
	TogglePause,
	FrameForward,
}
