pub mod contact;
pub mod landing;
pub mod not_found;
pub mod products;
pub mod track;

pub use contact::ContactPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use products::ProductsPage;
pub use track::TrackPage;
