use crate::core::actions::run_benchmark::ports::frame_workload::FrameWorkload;
use crate::core::data::vec3::Vec3;
use crate::core::signals::ripple::RippleDeformer;
use crate::surfaces::mesh::errors::MeshPlotterError;
use crate::surfaces::mesh::mesh::Mesh;
use crate::surfaces::mesh::plotter::MeshPlotter;
use crate::surfaces::ports::file_presenter::FilePresenterPort;
use log::debug;
use std::path::PathBuf;

pub const LIBRARY: &str = "MeshView";
pub const TITLE: &str = "3D Deformation";

/// Ripples a mesh inside a [`MeshPlotter`] every frame.
///
/// `prepare_frame` deforms a copy of the base points, hands it to the mesh
/// and marks the mesh modified. `render_frame` is a single render pass.
pub struct MeshDeformationWorkload<F: FilePresenterPort> {
    plotter: MeshPlotter,
    base_points: Vec<Vec3>,
    ripple: RippleDeformer,
    snapshot_path: PathBuf,
    files: F,
}

impl<F: FilePresenterPort> MeshDeformationWorkload<F> {
    /// Adds the smooth-shaded mesh and title, then renders once untimed.
    pub fn new(
        mut plotter: MeshPlotter,
        mesh: Mesh,
        ripple: RippleDeformer,
        snapshot_path: impl Into<PathBuf>,
        files: F,
    ) -> Result<Self, MeshPlotterError> {
        let base_points = mesh.points().to_vec();

        plotter.add_mesh(mesh, true);
        plotter.add_text(TITLE);
        plotter.render()?;
        debug!("{}: plotter ready with {} points", LIBRARY, base_points.len());

        Ok(Self {
            plotter,
            base_points,
            ripple,
            snapshot_path: snapshot_path.into(),
            files,
        })
    }

    #[must_use]
    pub fn plotter(&self) -> &MeshPlotter {
        &self.plotter
    }

    #[must_use]
    pub fn base_points(&self) -> &[Vec3] {
        &self.base_points
    }
}

impl<F: FilePresenterPort> FrameWorkload for MeshDeformationWorkload<F> {
    type Failure = MeshPlotterError;

    fn library(&self) -> &str {
        LIBRARY
    }

    fn prepare_frame(&mut self, frame_index: u32) -> Result<(), MeshPlotterError> {
        let deformed = self.ripple.deform(&self.base_points, frame_index);

        let mesh = self.plotter.mesh_mut()?;
        mesh.set_points(deformed)?;
        mesh.mark_modified();

        Ok(())
    }

    fn render_frame(&mut self) -> Result<(), MeshPlotterError> {
        self.plotter.render()
    }

    fn save_snapshot(&mut self) -> Result<(), MeshPlotterError> {
        self.plotter.screenshot(&self.snapshot_path, &self.files)
    }

    fn close(self) -> Result<(), MeshPlotterError> {
        debug!("{}: closing plotter", LIBRARY);
        self.plotter.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::surfaces::mesh::ellipsoid::parametric_ellipsoid;
    use std::cell::RefCell;
    use std::path::Path;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct RecordingFiles {
        saved: Rc<RefCell<Vec<(PathBuf, u32, u32)>>>,
    }

    impl FilePresenterPort for RecordingFiles {
        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            let rect = buffer.pixel_rect();
            self.saved
                .borrow_mut()
                .push((filepath.as_ref().to_path_buf(), rect.width(), rect.height()));
            Ok(())
        }
    }

    fn workload(files: RecordingFiles) -> MeshDeformationWorkload<RecordingFiles> {
        MeshDeformationWorkload::new(
            MeshPlotter::new(160, 120).unwrap(),
            parametric_ellipsoid(1.0, 0.35, 0.18, 16, 8).unwrap(),
            RippleDeformer::default(),
            "mesh.png",
            files,
        )
        .unwrap()
    }

    #[test]
    fn test_setup_sets_title_and_renders() {
        let workload = workload(RecordingFiles::default());

        assert_eq!(workload.plotter().title(), Some(TITLE));
        assert!(!workload.plotter().mesh().unwrap().is_modified());
    }

    #[test]
    fn test_prepare_deforms_from_base_and_marks_modified() {
        let mut workload = workload(RecordingFiles::default());

        workload.prepare_frame(5).unwrap();
        workload.prepare_frame(5).unwrap();

        let expected = RippleDeformer::default().deform(workload.base_points(), 5);
        let mesh = workload.plotter().mesh().unwrap();
        assert_eq!(mesh.points(), expected.as_slice());
        assert!(mesh.is_modified());
    }

    #[test]
    fn test_render_consumes_modified_flag() {
        let mut workload = workload(RecordingFiles::default());

        workload.prepare_frame(1).unwrap();
        workload.render_frame().unwrap();

        assert!(!workload.plotter().mesh().unwrap().is_modified());
    }

    #[test]
    fn test_snapshot_writes_window_sized_image() {
        let files = RecordingFiles::default();
        let mut workload = workload(files.clone());

        workload.save_snapshot().unwrap();
        workload.close().unwrap();

        assert_eq!(&*files.saved.borrow(), &[(PathBuf::from("mesh.png"), 160, 120)]);
    }
}
