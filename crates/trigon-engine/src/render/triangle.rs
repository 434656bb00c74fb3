use std::fmt;

use crate::device::{BootstrapError, GlApi, ShaderStage};

use super::shader::{compile_shader, link_program, FRAGMENT_SHADER, POSITION_ATTRIBUTE, VERTEX_SHADER};
use super::vertex::{POSITION_LAYOUT, TRIANGLE_VERTICES};

/// Every GL object needed to draw the white triangle.
///
/// Built once by [`TrianglePipeline::new`], which leaves the vertex array,
/// array buffer and program bound. Nothing is rebound afterwards, so
/// [`draw`](Self::draw) is a single draw call.
pub struct TrianglePipeline<G: GlApi> {
    vertex_array: G::VertexArray,
    vertex_buffer: G::Buffer,
    vertex_shader: G::Shader,
    fragment_shader: G::Shader,
    program: G::Program,
    position_location: u32,
}

impl<G: GlApi> fmt::Debug for TrianglePipeline<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrianglePipeline")
            .field("vertex_array", &self.vertex_array)
            .field("vertex_buffer", &self.vertex_buffer)
            .field("program", &self.program)
            .field("position_location", &self.position_location)
            .finish_non_exhaustive()
    }
}

impl<G: GlApi> TrianglePipeline<G> {
    /// Number of vertices in the uploaded buffer.
    pub const VERTEX_COUNT: i32 = TRIANGLE_VERTICES.len() as i32;

    /// Allocates, uploads, compiles, links and binds, in that order.
    ///
    /// The GL context behind `gl` must be current.
    pub fn new(gl: &G) -> Result<Self, BootstrapError> {
        let vertex_array = gl
            .create_vertex_array()
            .map_err(|reason| BootstrapError::ResourceAllocationFailed {
                resource: "vertex array",
                reason,
            })?;
        gl.bind_vertex_array(Some(vertex_array));

        let vertex_buffer = gl
            .create_buffer()
            .map_err(|reason| BootstrapError::ResourceAllocationFailed {
                resource: "vertex buffer",
                reason,
            })?;
        gl.bind_array_buffer(Some(vertex_buffer));
        gl.upload_static_array_data(bytemuck::cast_slice(&TRIANGLE_VERTICES));
        log::debug!(
            "uploaded {} vertices ({} bytes)",
            TRIANGLE_VERTICES.len(),
            std::mem::size_of_val(&TRIANGLE_VERTICES)
        );

        let vertex_shader = compile_shader(gl, ShaderStage::Vertex, VERTEX_SHADER)?;
        let fragment_shader = compile_shader(gl, ShaderStage::Fragment, FRAGMENT_SHADER)?;

        let program = link_program(gl, vertex_shader, fragment_shader)?;
        gl.use_program(Some(program));

        let position_location = gl.attrib_location(program, POSITION_ATTRIBUTE).ok_or(
            BootstrapError::ShaderInterfaceMismatch {
                attribute: POSITION_ATTRIBUTE,
            },
        )?;

        let layout = POSITION_LAYOUT;
        gl.enable_vertex_attrib_array(position_location);
        gl.vertex_attrib_pointer_f32(
            position_location,
            layout.components,
            layout.normalized,
            layout.stride,
            layout.offset,
        );

        log::info!("triangle pipeline ready (`{POSITION_ATTRIBUTE}` at location {position_location})");

        Ok(Self {
            vertex_array,
            vertex_buffer,
            vertex_shader,
            fragment_shader,
            program,
            position_location,
        })
    }

    /// Location the linker assigned to the `position` input.
    pub fn position_location(&self) -> u32 {
        self.position_location
    }

    /// Draws the triangle into the current framebuffer.
    pub fn draw(&self, gl: &G) {
        gl.draw_triangles(0, Self::VERTEX_COUNT);
    }

    /// Deletes every object in reverse creation order.
    pub fn release(self, gl: &G) {
        gl.use_program(None);
        gl.detach_shader(self.program, self.fragment_shader);
        gl.detach_shader(self.program, self.vertex_shader);
        gl.delete_program(self.program);
        gl.delete_shader(self.fragment_shader);
        gl.delete_shader(self.vertex_shader);

        gl.bind_array_buffer(None);
        gl.delete_buffer(self.vertex_buffer);

        gl.bind_vertex_array(None);
        gl.delete_vertex_array(self.vertex_array);

        log::debug!("triangle pipeline released");
    }
}
