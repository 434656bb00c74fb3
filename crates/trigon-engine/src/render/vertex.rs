use bytemuck::{Pod, Zeroable};

/// A single 2D position in normalized device coordinates.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
}

impl Vertex {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { position: [x, y] }
    }
}

/// The triangle uploaded at startup: top, bottom-right, bottom-left.
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex::new(0.0, 0.5),
    Vertex::new(0.5, -0.5),
    Vertex::new(-0.5, -0.5),
];

/// How one `f32` shader input is read out of the bound array buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttributeLayout {
    pub components: i32,
    pub normalized: bool,
    /// Byte distance between consecutive elements; 0 means tightly packed.
    pub stride: i32,
    /// Byte offset of the first element.
    pub offset: i32,
}

/// Layout of `Vertex::position`: two packed floats from the start of the buffer.
pub const POSITION_LAYOUT: AttributeLayout = AttributeLayout {
    components: 2,
    normalized: false,
    stride: 0,
    offset: 0,
};
