pub mod authentication_controller;
pub mod health_controller;
pub mod user_controller;
pub mod freelancer_profile_controller;
pub mod project_controller;
pub mod project_request_controller;
pub mod project_assignment_controller;
pub mod task_controller;
pub mod subtask_controller;
pub mod log_controller;
pub mod milestone_controller;
pub mod timesheet_controller;
pub mod payment_controller;
pub mod deliverable_controller;
pub mod feedback_controller;
pub mod message_controller;
