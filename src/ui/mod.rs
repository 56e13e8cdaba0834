//! Terminal UI for reviewing body scan results

pub mod app;
pub mod components;
pub mod layout;
pub mod results;
pub mod state;
pub mod view;
pub mod welcome;

pub use app::{run_app, ScanResultsApp};
pub use results::{ResultsScreen, ResultsSummary};
pub use state::{InMemoryScanStore, ScanStore, StoreUpdate};
pub use view::View;
