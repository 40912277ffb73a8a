//! Recording stand-ins for the shader/model collaborators used in unit tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::foundation::math::{Mat4, Vec4};
use crate::render::primitives::Mesh;
use crate::render::shader::{COLOR_UNIFORM, MODEL_MATRIX_UNIFORM};
use crate::render::{Model, ModelFactory, RenderError, RenderResult, Shader};

/// Shader that records uploads and can be told to fail binding
#[derive(Debug, Default)]
pub struct RecordingShader {
    pub fail_bind: bool,
    pub binds: usize,
    pub matrices: Vec<(String, Mat4)>,
    pub vectors: Vec<(String, Vec4)>,
}

impl RecordingShader {
    pub fn unbound() -> Self {
        Self { fail_bind: true, ..Self::default() }
    }
}

impl Shader for RecordingShader {
    fn bind(&mut self) -> RenderResult<()> {
        if self.fail_bind {
            return Err(RenderError::ShaderFailed("program not linked".to_string()));
        }
        self.binds += 1;
        Ok(())
    }

    fn set_uniform_mat4(&mut self, name: &str, value: &Mat4) -> RenderResult<()> {
        self.matrices.push((name.to_string(), *value));
        Ok(())
    }

    fn set_uniform_vec4(&mut self, name: &str, value: &Vec4) -> RenderResult<()> {
        self.vectors.push((name.to_string(), *value));
        Ok(())
    }
}

/// One draw issued by a [`MockModel`]
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub model_id: usize,
    pub transform: Mat4,
    pub color: Vec4,
}

#[derive(Debug)]
pub struct MockModel {
    pub id: usize,
    color: Vec4,
    updatable: bool,
    draws: Arc<Mutex<Vec<DrawCall>>>,
}

impl Model for MockModel {
    fn draw(&self, shader: &mut dyn Shader, transform: &Mat4) -> RenderResult<()> {
        shader.bind()?;
        shader.set_uniform_mat4(MODEL_MATRIX_UNIFORM, transform)?;
        shader.set_uniform_vec4(COLOR_UNIFORM, &self.color)?;
        self.draws.lock().unwrap().push(DrawCall {
            model_id: self.id,
            transform: *transform,
            color: self.color,
        });
        Ok(())
    }

    fn color(&self) -> Vec4 {
        self.color
    }

    fn try_update_color(&mut self, color: &Vec4) -> bool {
        if self.updatable {
            self.color = *color;
        }
        self.updatable
    }
}

/// Factory handing out [`MockModel`]s with sequential ids
#[derive(Debug, Default)]
pub struct MockFactory {
    /// Whether created models support in-place color updates
    pub updatable: bool,
    pub fail: bool,
    created: AtomicUsize,
    pub colors: Mutex<Vec<Vec4>>,
    pub geometries: Mutex<Vec<Arc<Mesh>>>,
    pub draws: Arc<Mutex<Vec<DrawCall>>>,
}

impl MockFactory {
    pub fn updatable() -> Self {
        Self { updatable: true, ..Self::default() }
    }

    pub fn baked() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    pub fn draw_calls(&self) -> Vec<DrawCall> {
        self.draws.lock().unwrap().clone()
    }
}

impl ModelFactory for MockFactory {
    fn create_model(&self, geometry: Arc<Mesh>, color: &Vec4) -> RenderResult<Box<dyn Model>> {
        if self.fail {
            return Err(RenderError::ModelCreationFailed("out of device memory".to_string()));
        }
        let id = self.created.fetch_add(1, Ordering::SeqCst);
        self.colors.lock().unwrap().push(*color);
        self.geometries.lock().unwrap().push(geometry);
        Ok(Box::new(MockModel {
            id,
            color: *color,
            updatable: self.updatable,
            draws: Arc::clone(&self.draws),
        }))
    }
}
