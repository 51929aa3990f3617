pub mod catalog;
pub mod location;
pub mod point_form;
pub mod region;
pub mod submission;
