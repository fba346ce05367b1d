pub mod forecast;
pub mod report;
pub mod server;
