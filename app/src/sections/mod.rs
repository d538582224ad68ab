// Shell sections and shared widgets

mod icons;
mod mobile;
mod sidebar;
mod visuals;

pub use icons::*;
pub use mobile::{MobileHeader, MobileMenu};
pub use sidebar::{NavList, Sidebar};
pub use visuals::{BlochSphere, EnergyLandscape, EntanglementMap, HeatmapPreview};
