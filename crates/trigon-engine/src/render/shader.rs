//! Inline GLSL sources and the compile/link helpers.

use crate::device::{BootstrapError, GlApi, ShaderStage};

/// Name of the vertex shader input fed from the vertex buffer.
pub const POSITION_ATTRIBUTE: &str = "position";

/// Expands the 2D input to clip space with z = 0, w = 1. No transforms.
pub const VERTEX_SHADER: &str = "#version 150 core
in vec2 position;
void main() {
    gl_Position = vec4(position, 0.0, 1.0);
}
";

/// Opaque white for every covered pixel.
pub const FRAGMENT_SHADER: &str = "#version 150 core
out vec4 outColor;
void main() {
    outColor = vec4(1.0, 1.0, 1.0, 1.0);
}
";

/// Compiles one shader object; on failure the object is deleted and the
/// driver's info log is returned in the error.
pub(crate) fn compile_shader<G: GlApi>(
    gl: &G,
    stage: ShaderStage,
    source: &str,
) -> Result<G::Shader, BootstrapError> {
    let shader = gl
        .create_shader(stage)
        .map_err(|reason| BootstrapError::ResourceAllocationFailed {
            resource: "shader object",
            reason,
        })?;

    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if !gl.shader_compile_status(shader) {
        let log = gl.shader_info_log(shader);
        gl.delete_shader(shader);
        return Err(BootstrapError::ShaderCompileFailed { stage, log });
    }

    log::debug!("compiled {stage} shader");
    Ok(shader)
}

/// Links `vertex` and `fragment` into a new program.
///
/// The shaders stay attached; the caller owns them and the returned program.
pub(crate) fn link_program<G: GlApi>(
    gl: &G,
    vertex: G::Shader,
    fragment: G::Shader,
) -> Result<G::Program, BootstrapError> {
    let program = gl
        .create_program()
        .map_err(|reason| BootstrapError::ResourceAllocationFailed {
            resource: "program object",
            reason,
        })?;

    gl.attach_shader(program, vertex);
    gl.attach_shader(program, fragment);
    gl.link_program(program);

    if !gl.program_link_status(program) {
        let log = gl.program_info_log(program);
        gl.delete_program(program);
        return Err(BootstrapError::ProgramLinkFailed { log });
    }

    log::debug!("linked shader program");
    Ok(program)
}
