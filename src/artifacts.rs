//! Fitted scaler and model artifacts
//!
//! The scaler and the regression model are produced by an external
//! training run and consumed here as opaque fitted objects: the scaler
//! exposes `transform`, the model exposes `predict`, and nothing in this
//! crate ever refits either. Both are loaded once at startup from JSON
//! files holding the fitted parameters.

use crate::error::{ForecastError, Result};
use crate::features::{FeatureRecord, FIELD_NAMES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A fitted feature transform mapping a record into model input space
pub trait Transformer {
    /// Transform a feature record into the vector the model consumes
    fn transform(&self, record: &FeatureRecord) -> Result<Vec<f64>>;
}

/// A fitted regression model mapping a feature vector to a profit scalar
pub trait Predictor {
    /// Predict the profit for one scaled feature vector
    fn predict(&self, features: &[f64]) -> Result<f64>;
}

/// Z-score scaler with per-column statistics fixed at fit time.
///
/// Carries the column names it was fitted on and refuses to transform a
/// record whose schema differs, so a schema drift shows up as an error
/// instead of silently mis-scaling columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    feature_names: Vec<String>,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Create a scaler from fitted parameters
    pub fn new(feature_names: Vec<String>, mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        if feature_names.len() != mean.len() || mean.len() != scale.len() {
            return Err(ForecastError::InvalidParameter(format!(
                "Scaler parameter lengths disagree: {} names, {} means, {} scales",
                feature_names.len(),
                mean.len(),
                scale.len()
            )));
        }
        if let Some(bad) = scale.iter().find(|s| !s.is_finite() || **s == 0.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "Scaler scale entries must be finite and non-zero, got {}",
                bad
            )));
        }

        Ok(Self {
            feature_names,
            mean,
            scale,
        })
    }

    /// Load a fitted scaler from a JSON artifact file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ForecastError::ArtifactError(format!(
                "Scaler file not found: {}",
                path.display()
            )));
        }

        let payload = fs::read_to_string(path)?;
        Self::from_json(&payload)
    }

    /// Parse a fitted scaler from a JSON payload
    pub fn from_json(payload: &str) -> Result<Self> {
        let scaler: StandardScaler = serde_json::from_str(payload)?;
        Self::new(scaler.feature_names, scaler.mean, scaler.scale)
    }

    /// The column names this scaler was fitted on
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }
}

impl Transformer for StandardScaler {
    fn transform(&self, record: &FeatureRecord) -> Result<Vec<f64>> {
        if self.feature_names != FIELD_NAMES {
            return Err(ForecastError::ShapeMismatch {
                expected: self.feature_names.join(", "),
                got: FIELD_NAMES.join(", "),
            });
        }

        let scaled = record
            .to_vector()
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect();

        Ok(scaled)
    }
}

/// Fitted linear regression: a coefficient per feature plus an intercept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    /// Create a model from fitted parameters
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(ForecastError::InvalidParameter(
                "Model must have at least one coefficient".to_string(),
            ));
        }

        Ok(Self {
            coefficients,
            intercept,
        })
    }

    /// Load a fitted model from a JSON artifact file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ForecastError::ArtifactError(format!(
                "Model file not found: {}",
                path.display()
            )));
        }

        let payload = fs::read_to_string(path)?;
        Self::from_json(&payload)
    }

    /// Parse a fitted model from a JSON payload
    pub fn from_json(payload: &str) -> Result<Self> {
        let model: LinearModel = serde_json::from_str(payload)?;
        Self::new(model.coefficients, model.intercept)
    }

    /// Number of features the model expects
    pub fn num_features(&self) -> usize {
        self.coefficients.len()
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.coefficients.len() {
            return Err(ForecastError::ShapeMismatch {
                expected: format!("{} features", self.coefficients.len()),
                got: format!("{} features", features.len()),
            });
        }

        let dot: f64 = features
            .iter()
            .zip(self.coefficients.iter())
            .map(|(x, w)| x * w)
            .sum();

        Ok(dot + self.intercept)
    }
}
