// Requests
pub mod user_register_request;
pub mod login_request;
pub mod user_edit_request;
pub mod freelancer_profile_add_request;
pub mod freelancer_profile_edit_request;
pub mod task_add_request;
pub mod task_edit_request;
pub mod subtask_add_request;
pub mod subtask_edit_request;
pub mod log_add_request;
pub mod log_stop_request;
pub mod milestone_add_request;
pub mod milestone_edit_request;
pub mod milestone_submit_request;
pub mod timesheet_add_request;
pub mod timesheet_edit_request;
pub mod timesheet_review_request;
pub mod project_add_request;
pub mod project_edit_request;
pub mod deadline_range_query;
pub mod project_request_add_request;
pub mod project_request_status_request;
pub mod project_assignment_add_request;
pub mod payment_add_request;
pub mod deliverable_add_request;
pub mod deliverable_edit_request;
pub mod feedback_add_request;
pub mod message_send_request;


// Responses
pub mod login_response;
pub mod user_get_response;
pub mod user_summary;
pub mod task_get_response;
pub mod log_get_response;
pub mod timesheet_get_response;
pub mod project_get_response;
pub mod project_request_details_response;
