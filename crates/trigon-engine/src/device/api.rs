use std::fmt;

use glow::HasContext;

/// Programmable stage a shader object is compiled for.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// GL enum passed to `glCreateShader`.
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// The GL command surface the renderer uses.
///
/// Handle types are associated so the renderer stays generic over the
/// backend, the same way `glow::HasContext` does. Every method assumes the
/// implementor's context is current on the calling thread.
///
/// Buffer calls always target `GL_ARRAY_BUFFER`; draws always use
/// `GL_TRIANGLES`.
pub trait GlApi {
    type VertexArray: Copy + fmt::Debug;
    type Buffer: Copy + fmt::Debug;
    type Shader: Copy + fmt::Debug;
    type Program: Copy + fmt::Debug;

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>);
    /// Uploads `data` into the bound array buffer with `GL_STATIC_DRAW`.
    fn upload_static_array_data(&self, data: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    /// Location the linker assigned to input `name`, if it is active.
    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;
    fn enable_vertex_attrib_array(&self, index: u32);
    /// Describes a float attribute sourced from the bound array buffer.
    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        components: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );

    fn draw_triangles(&self, first: i32, count: i32);
}

// SAFETY (all blocks below): `glow::Context` is only ever built in
// `Gpu::new`, right after its GL context was made current on this thread, and
// it is dropped before that context. Handles passed in were created by this
// same context.
impl GlApi for glow::Context {
    type VertexArray = <glow::Context as HasContext>::VertexArray;
    type Buffer = <glow::Context as HasContext>::Buffer;
    type Shader = <glow::Context as HasContext>::Shader;
    type Program = <glow::Context as HasContext>::Program;

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String> {
        unsafe { HasContext::create_vertex_array(self) }
    }

    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>) {
        unsafe { HasContext::bind_vertex_array(self, vertex_array) }
    }

    fn delete_vertex_array(&self, vertex_array: Self::VertexArray) {
        unsafe { HasContext::delete_vertex_array(self, vertex_array) }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        unsafe { HasContext::create_buffer(self) }
    }

    fn bind_array_buffer(&self, buffer: Option<Self::Buffer>) {
        unsafe { HasContext::bind_buffer(self, glow::ARRAY_BUFFER, buffer) }
    }

    fn upload_static_array_data(&self, data: &[u8]) {
        unsafe { HasContext::buffer_data_u8_slice(self, glow::ARRAY_BUFFER, data, glow::STATIC_DRAW) }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { HasContext::delete_buffer(self, buffer) }
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        unsafe { HasContext::create_shader(self, stage.gl_enum()) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { HasContext::get_shader_compile_status(self, shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { HasContext::get_shader_info_log(self, shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::detach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { HasContext::get_program_link_status(self, program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { HasContext::get_program_info_log(self, program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32> {
        unsafe { HasContext::get_attrib_location(self, program, name) }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { HasContext::enable_vertex_attrib_array(self, index) }
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        components: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        unsafe {
            HasContext::vertex_attrib_pointer_f32(
                self,
                index,
                components,
                glow::FLOAT,
                normalized,
                stride,
                offset,
            )
        }
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        unsafe { HasContext::draw_arrays(self, glow::TRIANGLES, first, count) }
    }
}

/// `GL_VERSION` / `GL_RENDERER` summary for the startup log line.
pub(crate) fn describe_driver(gl: &glow::Context) -> String {
    // SAFETY: see the impl block above.
    unsafe {
        format!(
            "{} ({})",
            gl.get_parameter_string(glow::VERSION),
            gl.get_parameter_string(glow::RENDERER),
        )
    }
}
