//! Durable record of planned deliveries.
use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::Local;
use log::debug;
use route_core::prelude::Route;
use serde::{Deserialize, Serialize};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A completed route as it is handed to a [`DeliverySink`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Delivery {
    pub from: String,
    pub to: String,
    pub path: String,
    pub total_time: f64,
    pub timestamp: String,
}

impl Delivery {
    /// Stamps `route` with the current local time.
    pub fn new(route: &Route) -> Self {
        Delivery {
            from: route.start().to_string(),
            to: route.end().to_string(),
            path: route.to_string(),
            total_time: route.total_cost,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Receives every delivery the REPL planned.
pub trait DeliverySink {
    fn record(&mut self, delivery: &Delivery) -> anyhow::Result<()>;
}

/// Appends deliveries to a CSV file, writing the header only once.
pub struct CsvDeliveryLog {
    path: PathBuf,
}

impl CsvDeliveryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DeliverySink for CsvDeliveryLog {
    fn record(&mut self, delivery: &Delivery) -> anyhow::Result<()> {
        let is_new = std::fs::metadata(&self.path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Could not open delivery log {:?}", self.path))?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);
        wtr.serialize(delivery)
            .context("Failed to write delivery")?;
        wtr.flush()?;

        debug!("Recorded delivery {} -> {}", delivery.from, delivery.to);
        Ok(())
    }
}
