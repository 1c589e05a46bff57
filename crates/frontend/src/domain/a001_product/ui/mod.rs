mod card;
mod catalog;
mod details;
mod showcase;
mod state;

pub use card::ProductCard;
pub use catalog::ProductCatalog;
pub use details::ProductDetails;
pub use showcase::ProductShowcase;
pub use state::ProductsState;
