pub mod favourite_service;
pub use favourite_service::{FavouriteError, FavouriteService};

pub mod favourite_service_impl;
pub use favourite_service_impl::SeaOrmFavouriteService;
