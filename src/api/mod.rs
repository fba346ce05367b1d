pub mod ftc_client;
pub mod handlers;
pub mod models;
pub mod parsers;
pub mod rating_client;
pub mod routes;

pub use ftc_client::FtcClient;
pub use rating_client::RatingClient;
