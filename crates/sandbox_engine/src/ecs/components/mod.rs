//! Component definitions

pub mod kinematics;

pub use kinematics::Kinematics;
