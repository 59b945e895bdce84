// Server
pub mod app_state;
pub mod settings;

// Accounts
pub mod user;
pub mod user_role;
pub mod freelancer_profile;

// Projects
pub mod project;
pub mod project_status;
pub mod project_request;
pub mod request_status;
pub mod project_assignment;

// Work tracking
pub mod task_item;
pub mod task_priority;
pub mod task_status;
pub mod subtask;
pub mod work_log;
pub mod log_status;
pub mod milestone;
pub mod milestone_status;
pub mod timesheet;
pub mod approval_status;

// Billing and communication
pub mod payment;
pub mod payment_type;
pub mod payment_status;
pub mod deliverable;
pub mod feedback;
pub mod message;
