//! SDL2 window, keyboard input and frame pacing for the demo.

use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

use crate::error::{Error, Result};
use crate::viewport::ViewAngle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    Resize(u32, u32),
}

/// Flight controls held down during the current frame.
///
/// Arrow keys follow stick convention: Down pulls the nose up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub nose_up: bool,
    pub nose_down: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub throttle_up: bool,
    pub throttle_down: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    /// View picked with the number keys since the last poll.
    pub view: Option<ViewAngle>,
}

/// Number keys 1-8 pick a view angle, clockwise from the nose.
fn view_for_key(key: Keycode) -> Option<ViewAngle> {
    let index = match key {
        Keycode::Num1 => 0,
        Keycode::Num2 => 1,
        Keycode::Num3 => 2,
        Keycode::Num4 => 3,
        Keycode::Num5 => 4,
        Keycode::Num6 => 5,
        Keycode::Num7 => 6,
        Keycode::Num8 => 7,
        _ => return None,
    };
    Some(ViewAngle::ALL[index])
}

pub struct FrameLimiter {
    previous_frame_time: u64,
    frame_target_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window, fps: u32) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
            frame_target_time: (1000 / fps.max(1)) as u64,
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    /// Delta time represents the time elapsed since the last call to this method.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time - self.previous_frame_time;

        if delta_time < self.frame_target_time {
            let time_to_wait = self.frame_target_time - delta_time;
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
    input: InputState,
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
            input: InputState::default(),
            width,
            height,
        })
    }

    /// Drains pending events and samples the keyboard into [`Window::input`].
    pub fn poll_events(&mut self) -> WindowEvent {
        let mut result = WindowEvent::None;
        self.input.view = None;

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => result = WindowEvent::Resize(w as u32, h as u32),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(view) = view_for_key(key) {
                        self.input.view = Some(view);
                    }
                }
                _ => {}
            }
        }

        let keys = self.event_pump.keyboard_state();
        let held = |codes: &[Scancode]| codes.iter().any(|&c| keys.is_scancode_pressed(c));
        self.input.nose_up = held(&[Scancode::Down]);
        self.input.nose_down = held(&[Scancode::Up]);
        self.input.roll_left = held(&[Scancode::Left]);
        self.input.roll_right = held(&[Scancode::Right]);
        self.input.yaw_left = held(&[Scancode::A]);
        self.input.yaw_right = held(&[Scancode::D]);
        self.input.throttle_up = held(&[Scancode::W]);
        self.input.throttle_down = held(&[Scancode::S]);
        self.input.zoom_in = held(&[Scancode::Equals, Scancode::KpPlus]);
        self.input.zoom_out = held(&[Scancode::Minus, Scancode::KpMinus]);

        result
    }

    pub fn input(&self) -> &InputState {
        &self.input
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
