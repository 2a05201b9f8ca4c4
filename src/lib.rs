pub mod actions;
pub mod completion;
pub mod config;
pub mod error;
pub mod log;
pub mod merge;
pub mod nav;
pub mod output;
pub mod router;
pub mod state;
pub mod store;
pub mod timer;
pub mod views;

pub use actions::{Action, QuickAction};
pub use config::Config;
pub use error::{PraxisError, Result};
pub use log::{LogEntry, LogKind, Logbook};
pub use router::Router;
pub use state::{AppState, ForwardView, LastStop, Mode, PlanLane, Preferences, Route};
pub use store::Store;
