//! Metric plotted by the trend chart.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TrendMetric {
    #[default]
    #[strum(serialize = "Open Code")]
    OpenCode,

    #[strum(serialize = "Open Data")]
    OpenData,
}
