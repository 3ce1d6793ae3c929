use crate::adapters::pixel_format::copy_rgb_to_rgba;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::surfaces::ports::frame_presenter::{FramePresenterPort, PresentError};
use log::debug;
use pixels::{Pixels, SurfaceTexture};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::platform::pump_events::EventLoopExtPumpEvents;
use winit::window::{Window, WindowId};

// Field order matters: the surface must drop before its window.
struct WindowSurface {
    pixels: Pixels<'static>,
    window: Arc<Window>,
}

/// Mirrors flushed frames into a winit window through a `pixels` surface.
///
/// Window events are pumped once per presented frame without blocking. A
/// window closed by the user stops receiving frames; the benchmark carries on.
/// `close` releases the surface and the window.
pub struct WindowPresenter {
    event_loop: Rc<RefCell<EventLoop<()>>>,
    surface: Option<WindowSurface>,
    window_id: WindowId,
    width: u32,
    height: u32,
}

impl WindowPresenter {
    pub fn new(
        event_loop: Rc<RefCell<EventLoop<()>>>,
        window: Arc<Window>,
        width: u32,
        height: u32,
    ) -> Result<Self, PresentError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(width, height, surface_texture)
            .map_err(|err| PresentError::Surface(err.to_string()))?;

        Ok(Self {
            event_loop,
            window_id: window.id(),
            surface: Some(WindowSurface { pixels, window }),
            width,
            height,
        })
    }

    fn pump_events(&mut self) {
        let window_id = self.window_id;
        let mut close_requested = false;

        self.event_loop
            .borrow_mut()
            .pump_events(Some(Duration::ZERO), |event, _| {
                if let Event::WindowEvent {
                    window_id: id,
                    event: WindowEvent::CloseRequested,
                } = event
                {
                    close_requested |= id == window_id;
                }
            });

        if close_requested && self.surface.take().is_some() {
            debug!("window {:?} closed by user", window_id);
        }
    }
}

impl FramePresenterPort for WindowPresenter {
    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), PresentError> {
        let rect = buffer.pixel_rect();
        if rect.width() != self.width || rect.height() != self.height {
            return Err(PresentError::Surface(format!(
                "frame is {}x{} but the window surface is {}x{}",
                rect.width(),
                rect.height(),
                self.width,
                self.height
            )));
        }

        let Some(surface) = self.surface.as_mut() else {
            return Ok(());
        };

        copy_rgb_to_rgba(buffer.buffer(), surface.pixels.frame_mut())
            .map_err(|err| PresentError::Surface(err.to_string()))?;
        surface
            .pixels
            .render()
            .map_err(|err| PresentError::Surface(err.to_string()))?;

        self.pump_events();
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        if let Some(surface) = self.surface.as_ref() {
            surface.window.set_title(title);
        }
    }

    fn close(&mut self) -> Result<(), PresentError> {
        self.surface = None;
        // lets the platform process the destroyed window
        self.pump_events();
        Ok(())
    }
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;
    use winit::dpi::PhysicalSize;
    use winit::event_loop::EventLoopBuilder;
    use winit::platform::x11::EventLoopBuilderExtX11;
    use winit::window::WindowBuilder;

    #[test]
    #[ignore = "opens a window; needs a display"]
    fn test_close_releases_window() {
        let event_loop = EventLoopBuilder::new().with_any_thread(true).build().unwrap();
        let window = Arc::new(
            WindowBuilder::new()
                .with_inner_size(PhysicalSize::new(32, 24))
                .build(&event_loop)
                .unwrap(),
        );
        let watcher = Arc::downgrade(&window);
        let mut presenter =
            WindowPresenter::new(Rc::new(RefCell::new(event_loop)), window, 32, 24).unwrap();
        let frame = PixelBuffer::new(PixelRect::from_size(32, 24).unwrap());

        presenter.present(&frame).unwrap();
        presenter.close().unwrap();

        assert!(watcher.upgrade().is_none());
        assert!(presenter.present(&frame).is_ok());
    }
}
