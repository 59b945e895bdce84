pub mod user_repository;
pub mod freelancer_profile_repository;
pub mod project_repository;
pub mod project_request_repository;
pub mod project_assignment_repository;
pub mod task_repository;
pub mod subtask_repository;
pub mod log_repository;
pub mod milestone_repository;
pub mod timesheet_repository;
pub mod payment_repository;
pub mod deliverable_repository;
pub mod feedback_repository;
pub mod message_repository;
