use glam::{Mat3, Mat4, Vec3};

/// Per-draw vertex-stage uniforms
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub model_matrix: [[f32; 4]; 4],
    pub view_matrix: [[f32; 4]; 4],
    pub projection_matrix: [[f32; 4]; 4],
    /// Mat3 stored as three padded columns
    pub normal_matrix: [[f32; 4]; 3],
}

impl Default for Uniforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY, Mat4::IDENTITY, Mat3::IDENTITY)
    }
}

impl Uniforms {
    pub fn new(model: Mat4, view: Mat4, projection: Mat4, normal: Mat3) -> Self {
        Self {
            model_matrix: model.to_cols_array_2d(),
            view_matrix: view.to_cols_array_2d(),
            projection_matrix: projection.to_cols_array_2d(),
            normal_matrix: [
                normal.x_axis.extend(0.0).to_array(),
                normal.y_axis.extend(0.0).to_array(),
                normal.z_axis.extend(0.0).to_array(),
            ],
        }
    }
}

/// Per-frame fragment-stage parameters
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Params {
    pub width: u32,
    pub height: u32,
    pub tiling: u32,
    pub light_count: u32,
    pub camera_position: [f32; 3],
    pub _pad: f32,
}

/// Discriminant matching the shader-side light switch
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LightType {
    Unused = 0,
    Sun = 1,
    Spot = 2,
    Point = 3,
    Ambient = 4,
}

/// Light record, 16-byte aligned fields
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Light {
    pub light_type: u32,
    pub _pad0: [u32; 3],
    pub position: [f32; 3],
    pub _pad1: f32,
    pub color: [f32; 3],
    pub _pad2: f32,
    pub specular_color: [f32; 3],
    pub radius: f32,
    pub attenuation: [f32; 3],
    pub cone_angle: f32,
    pub cone_direction: [f32; 3],
    pub cone_attenuation: f32,
}

impl Light {
    /// White light at the origin with no falloff
    pub fn new(light_type: LightType) -> Self {
        Self {
            light_type: light_type as u32,
            _pad0: [0; 3],
            position: [0.0; 3],
            _pad1: 0.0,
            color: [1.0; 3],
            _pad2: 0.0,
            specular_color: [0.6; 3],
            radius: 0.0,
            attenuation: [1.0, 0.0, 0.0],
            cone_angle: 0.0,
            cone_direction: [0.0; 3],
            cone_attenuation: 0.0,
        }
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position.to_array();
        self
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color.to_array();
        self
    }

    pub fn with_attenuation(mut self, attenuation: Vec3) -> Self {
        self.attenuation = attenuation.to_array();
        self
    }

    pub fn with_cone(mut self, angle: f32, direction: Vec3, attenuation: f32) -> Self {
        self.cone_angle = angle;
        self.cone_direction = direction.to_array();
        self.cone_attenuation = attenuation;
        self
    }
}

/// Debug line segment, world space
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub start: [f32; 3],
    pub _pad1: f32,
    pub end: [f32; 3],
    pub _pad2: f32,
}

impl LineVertex {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self {
            start: start.to_array(),
            _pad1: 0.0,
            end: end.to_array(),
            _pad2: 0.0,
        }
    }

    pub fn start(&self) -> Vec3 {
        Vec3::from_array(self.start)
    }

    pub fn end(&self) -> Vec3 {
        Vec3::from_array(self.end)
    }
}
