//! Forecast engine wiring lookups and fitted artifacts to requests

use crate::artifacts::{LinearModel, Predictor, StandardScaler, Transformer};
use crate::error::Result;
use crate::features::{build_record, ForecastRequest};
use crate::lookup::LookupTables;
use crate::recurrence::{forecast, Forecast};
use std::path::Path;

/// Read-only forecast state: the lookup tables plus the two fitted
/// artifacts, assembled once at startup and shared by every request.
#[derive(Debug, Clone)]
pub struct ForecastEngine<T = StandardScaler, P = LinearModel> {
    lookups: LookupTables,
    scaler: T,
    model: P,
}

impl ForecastEngine<StandardScaler, LinearModel> {
    /// Load the engine from its three startup files: the encoded lookup
    /// CSV, the scaler artifact, and the model artifact.
    ///
    /// Any failure here is fatal; no request can be served without all
    /// three.
    pub fn load<A, B, C>(lookup_csv: A, scaler_path: B, model_path: C) -> Result<Self>
    where
        A: AsRef<Path>,
        B: AsRef<Path>,
        C: AsRef<Path>,
    {
        let lookups = LookupTables::from_csv(lookup_csv)?;
        let scaler = StandardScaler::from_json_file(scaler_path)?;
        let model = LinearModel::from_json_file(model_path)?;

        Ok(Self::new(lookups, scaler, model))
    }
}

impl<T: Transformer, P: Predictor> ForecastEngine<T, P> {
    /// Assemble an engine from already-constructed parts
    pub fn new(lookups: LookupTables, scaler: T, model: P) -> Self {
        Self {
            lookups,
            scaler,
            model,
        }
    }

    /// Serve one forecast request: build the feature record, then run the
    /// two-step recurrence.
    pub fn forecast(&self, request: &ForecastRequest) -> Result<Forecast> {
        let record = build_record(request, &self.lookups)?;
        forecast(&record, &self.scaler, &self.model)
    }

    /// The lookup tables, for listing known products and cities
    pub fn lookups(&self) -> &LookupTables {
        &self.lookups
    }
}
