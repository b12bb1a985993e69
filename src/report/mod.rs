pub mod console;
pub mod dashboard;

pub use console::ConsoleReporter;
pub use dashboard::{ChartLine, ChartPanel, DashboardData, DashboardRenderer};
