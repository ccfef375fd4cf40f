pub use super::favourite::Entity as Favourites;
