mod appointment;
mod offer;
mod review;
mod salon;
mod service;
mod working_hours;

pub use appointment::*;
pub use offer::*;
pub use review::*;
pub use salon::*;
pub use service::*;
pub use working_hours::*;
