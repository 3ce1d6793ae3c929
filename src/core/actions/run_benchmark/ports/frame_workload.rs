use std::error::Error;

/// One render back-end driven by the benchmark loop.
///
/// The loop times only `render_frame`; `prepare_frame` counts towards frame
/// latency but not render time.
pub trait FrameWorkload {
    type Failure: Error + 'static;

    /// Name written to the `Library` column.
    fn library(&self) -> &str;

    /// Synthesise data for `frame_index` and stage it on the surface.
    fn prepare_frame(&mut self, frame_index: u32) -> Result<(), Self::Failure>;

    /// Apply staged data and force a synchronous render pass.
    fn render_frame(&mut self) -> Result<(), Self::Failure>;

    /// Persist a still image of the final state.
    fn save_snapshot(&mut self) -> Result<(), Self::Failure>;

    /// Release the surface.
    fn close(self) -> Result<(), Self::Failure>
    where
        Self: Sized;
}
