pub mod pwa_controls;

pub use pwa_controls::PwaControls;
