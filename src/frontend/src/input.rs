use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

use crate::viewport::Viewport;
use crate::V2;
use physics::controller_message::ControllerMessage;
use physics::force::Direction;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
	Quit,
	ToggleDebug,
	Controller(ControllerMessage),
}

fn key_action(keycode: Keycode) -> Option<Action> {
	use ControllerMessage::*;
	let msg = match keycode {
		Keycode::Q | Keycode::Escape => return Some(Action::Quit),
		Keycode::D => return Some(Action::ToggleDebug),
		Keycode::Left => Push(Direction::Left),
		Keycode::Right => Push(Direction::Right),
		Keycode::Up => Push(Direction::Up),
		Keycode::Down => Push(Direction::Down),
		Keycode::G => ToggleGravity,
		Keycode::Space => TogglePause,
		Keycode::S => FrameForward,
		_ => return None,
	};
	Some(Action::Controller(msg))
}

/// Translates one discrete window event. Held buttons are polled separately
/// through `held_spawn`.
pub fn translate(event: &Event, vp: &Viewport) -> Option<Action> {
	match *event {
		Event::Quit { .. } => Some(Action::Quit),
		// a press, not the auto-repeat of a held key
		Event::KeyDown {
			keycode: Some(keycode),
			repeat: false,
			..
		} => key_action(keycode),
		Event::MouseButtonDown {
			mouse_btn: MouseButton::Left,
			x,
			y,
			..
		} => {
			let target = vp.s2w(V2::new(x as f32, y as f32));
			Some(Action::Controller(ControllerMessage::Attract(target.into())))
		}
		_ => None,
	}
}

/// Spawn request while the right button is held down.
pub fn held_spawn(
	right_down: bool,
	x: i32,
	y: i32,
	vp: &Viewport,
) -> Option<ControllerMessage> {
	if !right_down {
		return None;
	}
	let pos = vp.s2w(V2::new(x as f32, y as f32));
	Some(ControllerMessage::Spawn(pos.into()))
}

#[cfg(test)]
mod test {
	use super::*;
	use sdl2::keyboard::Mod;

	fn key_down(keycode: Keycode, repeat: bool) -> Event {
		Event::KeyDown {
			timestamp: 0,
			window_id: 0,
			keycode: Some(keycode),
			scancode: None,
			keymod: Mod::NOMOD,
			repeat,
		}
	}

	#[test]
	fn test_keys() {
		let vp = Viewport::default();
		assert_eq!(
			translate(&key_down(Keycode::Left, false), &vp),
			Some(Action::Controller(ControllerMessage::Push(Direction::Left)))
		);
		assert_eq!(translate(&key_down(Keycode::Left, true), &vp), None);
		assert_eq!(translate(&key_down(Keycode::Escape, false), &vp), Some(Action::Quit));
		assert_eq!(translate(&key_down(Keycode::D, false), &vp), Some(Action::ToggleDebug));
		assert_eq!(translate(&key_down(Keycode::Z, false), &vp), None);
	}

	#[test]
	fn test_mouse() {
		let vp = Viewport::default();
		let event = Event::MouseButtonDown {
			timestamp: 0,
			window_id: 0,
			which: 0,
			mouse_btn: MouseButton::Left,
			clicks: 1,
			x: 300,
			y: 200,
		};
		assert_eq!(
			translate(&event, &vp),
			Some(Action::Controller(ControllerMessage::Attract([300., 200.])))
		);
		assert_eq!(held_spawn(false, 1, 2, &vp), None);
		assert_eq!(
			held_spawn(true, 1, 2, &vp),
			Some(ControllerMessage::Spawn([1., 2.]))
		);
	}
}
