pub mod construction;
pub mod status;

pub use construction::ConstructionStatusIcon;
pub use status::{evaluate, BUILDING_STATUS_KEY, HOUSE_UPGRADE_STATUS_KEY};
