pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::badge::badge;
pub use components::card::card;
pub use components::flash::{flash_banner, Flash};
pub use layouts::shell::{shell_layout, Tab};
