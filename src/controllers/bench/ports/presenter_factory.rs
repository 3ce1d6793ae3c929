use crate::surfaces::ports::frame_presenter::{FramePresenterPort, PresentError};

/// Opens one frame presenter per render back-end, sized to its canvas.
pub trait FramePresenterFactoryPort {
    fn build(
        &mut self,
        title: &str,
        width: u32,
        height: u32,
    ) -> Result<Box<dyn FramePresenterPort>, PresentError>;
}
