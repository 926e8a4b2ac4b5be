use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub date: NaiveDate,
    pub count: u64,
}

impl VisitRecord {
    pub fn new(date: NaiveDate, count: u64) -> Self {
        Self { date, count }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VisitLog {
    pub days: BTreeMap<NaiveDate, u64>,
}

impl VisitLog {
    pub fn records(&self) -> Vec<VisitRecord> {
        self.days
            .iter()
            .map(|(date, count)| VisitRecord::new(*date, *count))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u64>,
    pub border_color: String,
    pub background_color: String,
    pub tension: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub legend_position: String,
    pub legend_color: String,
    pub tick_color: String,
    pub grid_color: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChartResponse {
    pub data: ChartData,
    pub options: ChartOptions,
}
