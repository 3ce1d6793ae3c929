use crate::controllers::bench::ports::presenter_factory::FramePresenterFactoryPort;
use crate::presenters::window::presenter::WindowPresenter;
use crate::surfaces::ports::frame_presenter::{FramePresenterPort, PresentError};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use winit::dpi::PhysicalSize;
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

/// Owns the process-wide event loop and opens one window per back-end.
pub struct WindowPresenterFactory {
    event_loop: Rc<RefCell<EventLoop<()>>>,
}

impl WindowPresenterFactory {
    pub fn new() -> Result<Self, PresentError> {
        let event_loop = EventLoop::new().map_err(|err| PresentError::Surface(err.to_string()))?;

        Ok(Self {
            event_loop: Rc::new(RefCell::new(event_loop)),
        })
    }
}

impl FramePresenterFactoryPort for WindowPresenterFactory {
    fn build(
        &mut self,
        title: &str,
        width: u32,
        height: u32,
    ) -> Result<Box<dyn FramePresenterPort>, PresentError> {
        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(width, height))
            .with_resizable(false)
            .build(&*self.event_loop.borrow())
            .map_err(|err| PresentError::Surface(err.to_string()))?;

        let presenter =
            WindowPresenter::new(Rc::clone(&self.event_loop), Arc::new(window), width, height)?;

        Ok(Box::new(presenter))
    }
}
