pub mod badge;
pub mod card;
pub mod flash;
