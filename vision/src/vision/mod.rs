pub mod collision;
pub mod regions;
pub mod segmentation;
pub mod tracker;
