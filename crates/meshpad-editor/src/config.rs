use crate::controller::Bindings;
use crate::error::ConfigError;

/// Editor configuration.
///
/// Capacities are fixed for the lifetime of the editor; the renderer sizes its
/// GPU buffers from the same numbers.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    pub vertex_capacity: usize,
    pub line_capacity: usize,

    /// Maximum canvas-space distance at which Drag and Select pick a vertex.
    ///
    /// `None` picks the nearest vertex no matter how far away it is.
    pub pick_radius: Option<f32>,

    pub bindings: Bindings,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            vertex_capacity: 1024,
            line_capacity: 1024,
            pick_radius: None,
            bindings: Bindings::default(),
        }
    }
}

impl EditorConfig {
    pub fn vertex_capacity(mut self, n: usize) -> Self {
        self.vertex_capacity = n;
        self
    }

    pub fn line_capacity(mut self, n: usize) -> Self {
        self.line_capacity = n;
        self
    }

    pub fn pick_radius(mut self, radius: Option<f32>) -> Self {
        self.pick_radius = radius;
        self
    }

    pub fn bindings(mut self, bindings: Bindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Checks that capacities fit `u32` GPU indices and the pick radius is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vertex_capacity == 0 || self.vertex_capacity > u32::MAX as usize {
            return Err(ConfigError::VertexCapacity(self.vertex_capacity));
        }
        if self.line_capacity == 0 || self.line_capacity > (u32::MAX / 2) as usize {
            return Err(ConfigError::LineCapacity(self.line_capacity));
        }
        if let Some(r) = self.pick_radius {
            if !(r.is_finite() && r > 0.0) {
                return Err(ConfigError::PickRadius(r));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = EditorConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.vertex_capacity, 1024);
        assert_eq!(config.pick_radius, None);
    }

    #[test]
    fn zero_capacity_rejected() {
        let config = EditorConfig::default().vertex_capacity(0);
        assert_eq!(config.validate(), Err(ConfigError::VertexCapacity(0)));
    }

    #[test]
    fn non_positive_pick_radius_rejected() {
        let config = EditorConfig::default().pick_radius(Some(0.0));
        assert_eq!(config.validate(), Err(ConfigError::PickRadius(0.0)));
        let config = EditorConfig::default().pick_radius(Some(f32::NAN));
        assert!(config.validate().is_err());
    }
}
