pub mod catalog;
pub mod health;
pub mod score;
pub mod variant;
