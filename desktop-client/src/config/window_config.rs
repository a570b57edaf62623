use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl WindowConfig {
    pub const MIN_SIZE: f32 = 200.0;
    pub const MAX_SIZE: f32 = 2000.0;
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        let range = Self::MIN_SIZE..=Self::MAX_SIZE;
        if !range.contains(&self.width) || !range.contains(&self.height) {
            return Err(format!(
                "window size must be between {} and {} on both axes",
                Self::MIN_SIZE,
                Self::MAX_SIZE
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 340.0,
        }
    }
}
