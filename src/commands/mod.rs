mod host;
mod init;
mod run;
mod show;

pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use show::{ReportFormat, ShowArgs, show_dashboard};
