pub mod about;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod portfolio;
pub mod services;

pub use about::About;
pub use hero::Hero;
