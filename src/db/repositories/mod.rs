mod appointment_repository;
mod offer_repository;
mod review_repository;
mod salon_repository;
mod service_repository;
mod working_hours_repository;

pub use appointment_repository::AppointmentRepository;
pub use offer_repository::OfferRepository;
pub use review_repository::ReviewRepository;
pub use salon_repository::SalonRepository;
pub use service_repository::ServiceRepository;
pub use working_hours_repository::WorkingHoursRepository;
