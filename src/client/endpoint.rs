use strum::{Display, EnumIter, IntoStaticStr};

/// The read-only resources exposed by the metrics backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum Endpoint {
    #[strum(serialize = "/summary")]
    Summary,

    #[strum(serialize = "/timeseries")]
    TimeSeries,

    #[strum(serialize = "/country-distribution")]
    CountryDistribution,

    #[strum(serialize = "/journal-distribution")]
    JournalDistribution,
}

impl Endpoint {
    /// Path of this resource relative to the API base URL.
    #[must_use]
    pub fn path(self) -> &'static str {
        self.into()
    }
}
