pub mod use_geolocation_ready;
pub mod use_orphanages;
pub mod use_push_route;

pub use use_geolocation_ready::use_geolocation_ready;
pub use use_orphanages::use_orphanages;
pub use use_push_route::use_push_route;
