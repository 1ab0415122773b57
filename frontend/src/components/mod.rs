pub mod feedback_summary;
pub mod protected_route;
