use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::controls::Control;
use crate::error::{Error, Result};
use crate::sort::Algorithm;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 300;
pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: f64 = 1000.0 / FPS as f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Quit,
    Resize(u32, u32),
    Control(Control),
}

/// Key bindings for the visualizer controls.
pub fn control_for_key(key: Keycode) -> Option<Control> {
    let control = match key {
        Keycode::Space | Keycode::Return => Control::ToggleRunning,
        Keycode::R => Control::Reset,
        Keycode::Num1 => Control::SelectAlgorithm(Algorithm::Bubble),
        Keycode::Num2 => Control::SelectAlgorithm(Algorithm::Insertion),
        Keycode::Num3 => Control::SelectAlgorithm(Algorithm::Selection),
        Keycode::Num4 => Control::SelectAlgorithm(Algorithm::Quick),
        Keycode::Num5 => Control::SelectAlgorithm(Algorithm::Merge),
        Keycode::D => Control::FlipDirection,
        Keycode::Up => Control::SpeedUp,
        Keycode::Down => Control::SlowDown,
        Keycode::Right => Control::Grow,
        Keycode::Left => Control::Shrink,
        Keycode::S => Control::Screenshot,
        _ => return None,
    };
    Some(control)
}

pub struct FrameLimiter {
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time - self.previous_frame_time;

        if delta_time < FRAME_TARGET_TIME as u64 {
            let time_to_wait = (FRAME_TARGET_TIME as u64) - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time - self.previous_frame_time;
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Field order matters: texture must drop before texture_creator.
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(Error::Window)?;
        let video_subsystem = sdl_context.video().map_err(Error::Window)?;
        let timer_subsystem = sdl_context.timer().map_err(Error::Window)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| Error::Window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| Error::Window(e.to_string()))?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump().map_err(Error::Window)?;

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // We ensure texture is dropped before texture_creator by struct field order.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| Error::Window(e.to_string()))?;

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    /// Drain pending SDL events into window events, in arrival order.
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => events.push(WindowEvent::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(control) = control_for_key(key) {
                        events.push(WindowEvent::Control(control));
                    }
                }
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => events.push(WindowEvent::Resize(w as u32, h as u32)),
                _ => {}
            }
        }
        events
    }

    pub fn present(&mut self, buffer: &[u8]) -> Result<()> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| Error::Window(e.to_string()))?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))
            .map_err(Error::Window)?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;
        // SAFETY: Same as in new() - texture_creator outlives texture
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(self.texture_creator.as_ref() as *const _) };
        self.texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| Error::Window(e.to_string()))?;
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(|e| Error::Window(e.to_string()))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_select_algorithms_in_order() {
        let keys = [
            Keycode::Num1,
            Keycode::Num2,
            Keycode::Num3,
            Keycode::Num4,
            Keycode::Num5,
        ];
        for (key, algorithm) in keys.into_iter().zip(Algorithm::ALL) {
            assert_eq!(control_for_key(key), Some(Control::SelectAlgorithm(algorithm)));
        }
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(control_for_key(Keycode::Q), None);
        assert_eq!(control_for_key(Keycode::Space), Some(Control::ToggleRunning));
    }
}
