use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::vec3::Vec3;
use crate::core::raster::draw_text::{Align, Typeface};
use crate::core::raster::fill_triangle::{DepthBuffer, ShadedVertex, fill_triangle};
use crate::surfaces::mesh::camera::Camera;
use crate::surfaces::mesh::errors::MeshPlotterError;
use crate::surfaces::mesh::mesh::Mesh;
use crate::surfaces::ports::file_presenter::FilePresenterPort;
use crate::surfaces::ports::frame_presenter::FramePresenterPort;
use rayon::prelude::*;
use std::path::Path;

pub const BACKGROUND: Colour = Colour { r: 76, g: 76, b: 76 };
pub const MESH_COLOUR: Colour = Colour { r: 173, g: 216, b: 230 };

const AMBIENT: f64 = 0.2;
const DIFFUSE: f64 = 0.8;

const TITLE_SIZE_PX: f32 = 20.0;
const TITLE_MARGIN_PX: i32 = 8;

/// Retained-mode 3D plotter holding one mesh.
///
/// Each [`render`](MeshPlotter::render) pass refreshes normals if the mesh
/// was marked modified, projects every point, and rasterizes all triangles
/// with a depth test. A headlight at the camera lights the surface from
/// both sides. The title, if any, is drawn over the upper-left corner.
pub struct MeshPlotter {
    canvas: PixelBuffer,
    depth: DepthBuffer,
    mesh: Option<Mesh>,
    camera: Option<Camera>,
    smooth_shading: bool,
    title: Option<String>,
    typeface: Typeface,
    presenter: Option<Box<dyn FramePresenterPort>>,
}

impl MeshPlotter {
    pub fn new(width: u32, height: u32) -> Result<Self, MeshPlotterError> {
        let rect = PixelRect::from_size(width, height)?;

        Ok(Self {
            canvas: PixelBuffer::new(rect),
            depth: DepthBuffer::new(width, height),
            mesh: None,
            camera: None,
            smooth_shading: false,
            title: None,
            typeface: Typeface::dejavu_sans_mono()?,
            presenter: None,
        })
    }

    #[must_use]
    pub fn with_presenter(mut self, presenter: Box<dyn FramePresenterPort>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    pub fn add_text(&mut self, title: impl Into<String>) {
        let title = title.into();

        if let Some(presenter) = self.presenter.as_mut() {
            presenter.set_title(&title);
        }
        self.title = Some(title);
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Takes ownership of `mesh` and frames it with an isometric camera.
    pub fn add_mesh(&mut self, mesh: Mesh, smooth_shading: bool) {
        self.camera = mesh.bounds().map(|(min, max)| Camera::isometric(min, max));
        self.smooth_shading = smooth_shading;
        self.mesh = Some(mesh);
    }

    pub fn mesh(&self) -> Result<&Mesh, MeshPlotterError> {
        self.mesh.as_ref().ok_or(MeshPlotterError::NoMesh)
    }

    pub fn mesh_mut(&mut self) -> Result<&mut Mesh, MeshPlotterError> {
        self.mesh.as_mut().ok_or(MeshPlotterError::NoMesh)
    }

    #[must_use]
    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    #[must_use]
    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    pub fn render(&mut self) -> Result<(), MeshPlotterError> {
        let width = self.canvas.pixel_rect().width();
        let height = self.canvas.pixel_rect().height();

        self.canvas.fill(BACKGROUND);
        self.depth.clear();

        if let (Some(mesh), Some(camera)) = (self.mesh.as_mut(), self.camera.as_ref()) {
            mesh.update_normals();
            rasterize_mesh(
                &mut self.canvas,
                &mut self.depth,
                mesh,
                camera,
                self.smooth_shading,
                (width, height),
            );
        }

        if let Some(title) = self.title.as_deref() {
            self.typeface.draw_text(
                &mut self.canvas,
                Point { x: TITLE_MARGIN_PX, y: TITLE_MARGIN_PX },
                Align::Left,
                title,
                TITLE_SIZE_PX,
                Colour::WHITE,
            );
        }

        if let Some(presenter) = self.presenter.as_mut() {
            presenter.present(&self.canvas)?;
        }

        Ok(())
    }

    /// Writes the most recently rendered frame.
    pub fn screenshot(
        &self,
        filepath: impl AsRef<Path>,
        presenter: &impl FilePresenterPort,
    ) -> Result<(), MeshPlotterError> {
        presenter.present(&self.canvas, filepath)?;

        Ok(())
    }

    pub fn close(mut self) -> Result<(), MeshPlotterError> {
        if let Some(mut presenter) = self.presenter.take() {
            presenter.close()?;
        }

        Ok(())
    }
}

fn intensity(normal: Vec3, light: Vec3) -> f64 {
    AMBIENT + DIFFUSE * normal.dot(light).abs()
}

fn rasterize_mesh(
    canvas: &mut PixelBuffer,
    depth: &mut DepthBuffer,
    mesh: &Mesh,
    camera: &Camera,
    smooth_shading: bool,
    (width, height): (u32, u32),
) {
    let light = camera.direction();

    let vertices: Vec<Option<ShadedVertex>> = mesh
        .points()
        .par_iter()
        .zip(mesh.normals().par_iter())
        .map(|(&point, &normal)| {
            camera.project(point, width, height).map(|p| ShadedVertex {
                x: p.x,
                y: p.y,
                depth: p.depth,
                intensity: intensity(normal, light),
            })
        })
        .collect();

    let points = mesh.points();
    for &[a, b, c] in mesh.triangles() {
        let (Some(va), Some(vb), Some(vc)) =
            (vertices[a as usize], vertices[b as usize], vertices[c as usize])
        else {
            continue;
        };

        let mut corners = [va, vb, vc];
        if !smooth_shading {
            let (pa, pb, pc) = (points[a as usize], points[b as usize], points[c as usize]);
            let flat = intensity((pb - pa).cross(pc - pa).normalized(), light);
            for corner in &mut corners {
                corner.intensity = flat;
            }
        }

        fill_triangle(canvas, depth, corners, MESH_COLOUR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surfaces::mesh::ellipsoid::parametric_ellipsoid;
    use crate::surfaces::ports::frame_presenter::PresentError;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingPresenter {
        frames: Rc<Cell<u32>>,
        title: Rc<RefCell<Option<String>>>,
        closed: Rc<Cell<bool>>,
    }

    impl FramePresenterPort for RecordingPresenter {
        fn present(&mut self, _: &PixelBuffer) -> Result<(), PresentError> {
            self.frames.set(self.frames.get() + 1);
            Ok(())
        }

        fn set_title(&mut self, title: &str) {
            *self.title.borrow_mut() = Some(title.to_string());
        }

        fn close(&mut self) -> Result<(), PresentError> {
            self.closed.set(true);
            Ok(())
        }
    }

    #[derive(Default)]
    struct CapturingFilePresenter {
        pixels: RefCell<Vec<u8>>,
    }

    impl FilePresenterPort for CapturingFilePresenter {
        fn present(&self, buffer: &PixelBuffer, _: impl AsRef<Path>) -> std::io::Result<()> {
            *self.pixels.borrow_mut() = buffer.buffer().clone();
            Ok(())
        }
    }

    fn lit_pixels(plotter: &MeshPlotter) -> usize {
        plotter
            .canvas()
            .buffer()
            .chunks_exact(3)
            .filter(|p| *p != [BACKGROUND.r, BACKGROUND.g, BACKGROUND.b])
            .count()
    }

    fn ellipsoid_plotter(smooth_shading: bool) -> MeshPlotter {
        let mut plotter = MeshPlotter::new(200, 150).unwrap();
        plotter.add_mesh(parametric_ellipsoid(1.0, 0.35, 0.18, 24, 12).unwrap(), smooth_shading);
        plotter
    }

    #[test]
    fn test_render_without_mesh_clears_to_background() {
        let mut plotter = MeshPlotter::new(20, 10).unwrap();

        plotter.render().unwrap();

        assert_eq!(lit_pixels(&plotter), 0);
        assert!(matches!(plotter.mesh(), Err(MeshPlotterError::NoMesh)));
    }

    #[test]
    fn test_render_draws_mesh_around_centre() {
        let mut plotter = ellipsoid_plotter(true);

        plotter.render().unwrap();

        assert!(lit_pixels(&plotter) > 500);
        assert_ne!(plotter.canvas().pixel(Point { x: 100, y: 75 }), Some(BACKGROUND));
        assert_eq!(plotter.canvas().pixel(Point { x: 0, y: 0 }), Some(BACKGROUND));
        assert!(!plotter.mesh().unwrap().is_modified());
    }

    #[test]
    fn test_flat_and_smooth_shading_cover_same_area() {
        let mut smooth = ellipsoid_plotter(true);
        let mut flat = ellipsoid_plotter(false);

        smooth.render().unwrap();
        flat.render().unwrap();

        assert_eq!(lit_pixels(&smooth), lit_pixels(&flat));
        assert_ne!(smooth.canvas().buffer(), flat.canvas().buffer());
    }

    #[test]
    fn test_modified_mesh_changes_next_frame() {
        let mut plotter = ellipsoid_plotter(true);
        plotter.render().unwrap();
        let before = plotter.canvas().buffer().clone();

        let mesh = plotter.mesh_mut().unwrap();
        let raised: Vec<Vec3> = mesh.points().iter().map(|p| Vec3::new(p.x, p.y, p.z * 2.0)).collect();
        mesh.set_points(raised).unwrap();
        mesh.mark_modified();
        plotter.render().unwrap();

        assert_ne!(plotter.canvas().buffer(), &before);
    }

    #[test]
    fn test_presenter_sees_title_frames_and_close() {
        let presenter = RecordingPresenter::default();
        let (frames, title, closed) = (
            Rc::clone(&presenter.frames),
            Rc::clone(&presenter.title),
            Rc::clone(&presenter.closed),
        );
        let mut plotter = MeshPlotter::new(20, 10).unwrap().with_presenter(Box::new(presenter));

        plotter.add_text("3D Deformation");
        plotter.render().unwrap();
        plotter.render().unwrap();
        plotter.close().unwrap();

        assert_eq!(title.borrow().as_deref(), Some("3D Deformation"));
        assert_eq!(frames.get(), 2);
        assert!(closed.get());
    }

    #[test]
    fn test_screenshot_writes_last_frame() {
        let mut plotter = ellipsoid_plotter(true);
        let files = CapturingFilePresenter::default();
        plotter.render().unwrap();

        plotter.screenshot("mesh.png", &files).unwrap();

        assert_eq!(&*files.pixels.borrow(), plotter.canvas().buffer());
        assert_eq!(plotter.title(), None);
    }

    #[test]
    fn test_title_is_drawn_in_upper_left() {
        let mut plotter = MeshPlotter::new(200, 150).unwrap();
        plotter.add_text("3D Deformation");

        plotter.render().unwrap();

        let canvas = plotter.canvas();
        let in_title_area = (0..40)
            .flat_map(|y| (0..200).map(move |x| Point { x, y }))
            .filter(|&point| canvas.pixel(point) != Some(BACKGROUND))
            .count();
        assert!(in_title_area > 30);
        assert_eq!(lit_pixels(&plotter), in_title_area);
        assert_eq!(canvas.pixel(Point { x: 0, y: 0 }), Some(BACKGROUND));
    }
}
