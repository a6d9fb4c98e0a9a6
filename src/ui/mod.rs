pub mod hud;
pub mod menu;
pub mod notifications;
