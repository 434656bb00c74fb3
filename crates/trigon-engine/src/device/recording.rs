//! In-memory `GlApi` that records every call, for ordering assertions.

use std::cell::{Cell, RefCell};

use super::{GlApi, ShaderStage};

/// One recorded GL call. Handles are plain `u32`s handed out in creation order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum GlCall {
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateBuffer(u32),
    BindArrayBuffer(Option<u32>),
    UploadStaticArrayData(Vec<u8>),
    DeleteBuffer(u32),
    CreateShader(ShaderStage, u32),
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    DetachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    AttribLocation(u32, String),
    EnableVertexAttribArray(u32),
    VertexAttribPointerF32 {
        index: u32,
        components: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    DrawTriangles { first: i32, count: i32 },
}

pub(crate) struct RecordingGl {
    pub calls: RefCell<Vec<GlCall>>,
    pub next_handle: Cell<u32>,
    pub shader_stages: RefCell<Vec<(u32, ShaderStage)>>,

    pub failing_stage: Option<ShaderStage>,
    pub fail_link: bool,
    pub fail_vertex_array: bool,
    /// Location returned for `position`; `None` simulates an optimized-out input.
    pub position_location: Option<u32>,
}

impl Default for RecordingGl {
    fn default() -> Self {
        Self {
            calls: RefCell::default(),
            next_handle: Cell::new(1),
            shader_stages: RefCell::default(),
            failing_stage: None,
            fail_link: false,
            fail_vertex_array: false,
            position_location: Some(0),
        }
    }
}

pub(crate) const COMPILE_LOG: &str = "0:1(10): error: syntax error, unexpected IDENTIFIER";
pub(crate) const LINK_LOG: &str = "error: fragment shader lacks `main'";

impl RecordingGl {
    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count(&self, pred: impl Fn(&GlCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    fn push(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn handle(&self) -> u32 {
        let h = self.next_handle.get();
        self.next_handle.set(h + 1);
        h
    }

    fn stage_of(&self, shader: u32) -> Option<ShaderStage> {
        self.shader_stages
            .borrow()
            .iter()
            .find(|(h, _)| *h == shader)
            .map(|(_, s)| *s)
    }
}

impl GlApi for RecordingGl {
    type VertexArray = u32;
    type Buffer = u32;
    type Shader = u32;
    type Program = u32;

    fn create_vertex_array(&self) -> Result<u32, String> {
        if self.fail_vertex_array {
            return Err("GL_OUT_OF_MEMORY".into());
        }
        let h = self.handle();
        self.push(GlCall::CreateVertexArray(h));
        Ok(h)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.push(GlCall::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.push(GlCall::DeleteVertexArray(vertex_array));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let h = self.handle();
        self.push(GlCall::CreateBuffer(h));
        Ok(h)
    }

    fn bind_array_buffer(&self, buffer: Option<u32>) {
        self.push(GlCall::BindArrayBuffer(buffer));
    }

    fn upload_static_array_data(&self, data: &[u8]) {
        self.push(GlCall::UploadStaticArrayData(data.to_vec()));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.push(GlCall::DeleteBuffer(buffer));
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let h = self.handle();
        self.shader_stages.borrow_mut().push((h, stage));
        self.push(GlCall::CreateShader(stage, h));
        Ok(h)
    }

    fn shader_source(&self, shader: u32, _source: &str) {
        self.push(GlCall::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: u32) {
        self.push(GlCall::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.failing_stage.is_none() || self.stage_of(shader) != self.failing_stage
    }

    fn shader_info_log(&self, shader: u32) -> String {
        if self.shader_compile_status(shader) {
            String::new()
        } else {
            COMPILE_LOG.to_string()
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.push(GlCall::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let h = self.handle();
        self.push(GlCall::CreateProgram(h));
        Ok(h)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.push(GlCall::AttachShader(program, shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.push(GlCall::DetachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.push(GlCall::LinkProgram(program));
    }

    fn program_link_status(&self, _program: u32) -> bool {
        !self.fail_link
    }

    fn program_info_log(&self, _program: u32) -> String {
        if self.fail_link { LINK_LOG.to_string() } else { String::new() }
    }

    fn use_program(&self, program: Option<u32>) {
        self.push(GlCall::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.push(GlCall::DeleteProgram(program));
    }

    fn attrib_location(&self, program: u32, name: &str) -> Option<u32> {
        self.push(GlCall::AttribLocation(program, name.to_string()));
        if name == "position" { self.position_location } else { None }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.push(GlCall::EnableVertexAttribArray(index));
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        components: i32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.push(GlCall::VertexAttribPointerF32 {
            index,
            components,
            normalized,
            stride,
            offset,
        });
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.push(GlCall::DrawTriangles { first, count });
    }
}
