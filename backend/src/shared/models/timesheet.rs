use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{
    approval_status::ApprovalStatus, timesheet_add_request::TimesheetAddRequest,
    timesheet_edit_request::TimesheetEditRequest,
};

const SECONDS_PER_HOUR: i64 = 3600;

/// Hours reported by a freelancer for one day of work.
///
/// Total hours and amount are derived on every read and never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    pub id: u64,
    pub project_name: String,
    pub freelancer_name: String,
    pub date_of_work: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub work_description: String,
    pub hourly_rate: BigDecimal,
    pub approval_status: ApprovalStatus,
    pub reviewer_comments: Option<String>,
}

impl Timesheet {
    pub fn new(request: TimesheetAddRequest) -> Self {
        Self {
            id: 0,
            project_name: request.project_name,
            freelancer_name: request.freelancer_name,
            date_of_work: request.date_of_work,
            start_time: request.start_time,
            end_time: request.end_time,
            work_description: request.work_description,
            hourly_rate: request.hourly_rate,
            approval_status: ApprovalStatus::Pending,
            reviewer_comments: None,
        }
    }

    pub fn apply(&mut self, request: TimesheetEditRequest) {
        if let Some(project_name) = request.project_name {
            self.project_name = project_name;
        }
        if let Some(freelancer_name) = request.freelancer_name {
            self.freelancer_name = freelancer_name;
        }
        if let Some(date) = request.date_of_work {
            self.date_of_work = date;
        }
        if let Some(start) = request.start_time {
            self.start_time = start;
        }
        if let Some(end) = request.end_time {
            self.end_time = end;
        }
        if let Some(description) = request.work_description {
            self.work_description = description;
        }
        if let Some(rate) = request.hourly_rate {
            self.hourly_rate = rate;
        }
        if let Some(status) = request.approval_status {
            self.approval_status = status;
        }
        if let Some(comments) = request.reviewer_comments {
            self.reviewer_comments = Some(comments);
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.end_time >= self.start_time
    }

    pub fn total_seconds(&self) -> i64 {
        (self.end_time - self.start_time).num_seconds()
    }

    pub fn total_hours(&self) -> f64 {
        self.total_seconds() as f64 / SECONDS_PER_HOUR as f64
    }

    /// `total_hours * hourly_rate`, kept in decimal from whole seconds.
    pub fn calculated_amount(&self) -> BigDecimal {
        BigDecimal::from(self.total_seconds()) * &self.hourly_rate / BigDecimal::from(SECONDS_PER_HOUR)
    }

    pub fn review(&mut self, status: ApprovalStatus, comments: Option<String>) {
        self.approval_status = status;
        self.reviewer_comments = comments;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sheet(start: (u32, u32), end: (u32, u32), rate: &str) -> Timesheet {
        sheet_hms((start.0, start.1, 0), (end.0, end.1, 0), rate)
    }

    fn sheet_hms(start: (u32, u32, u32), end: (u32, u32, u32), rate: &str) -> Timesheet {
        Timesheet {
            id: 1,
            project_name: "Launchpad".into(),
            freelancer_name: "Grace".into(),
            date_of_work: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(start.0, start.1, start.2).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, end.2).unwrap(),
            work_description: "API work".into(),
            hourly_rate: BigDecimal::from_str(rate).unwrap(),
            approval_status: ApprovalStatus::Pending,
            reviewer_comments: None,
        }
    }

    #[test]
    fn amount_is_hours_times_rate() {
        let ts = sheet((9, 0), (11, 30), "40");
        assert_eq!(ts.total_seconds(), 9000);
        assert_eq!(ts.total_hours(), 2.5);
        assert_eq!(ts.calculated_amount(), BigDecimal::from(100));
    }

    #[test]
    fn fractional_rate_is_exact() {
        let ts = sheet((13, 0), (13, 20), "25.50");
        assert_eq!(ts.calculated_amount(), BigDecimal::from_str("8.5").unwrap());
    }

    #[test]
    fn seconds_count_towards_hours_and_amount() {
        let ts = sheet_hms((9, 0, 0), (9, 30, 45), "60");
        assert_eq!(ts.total_hours(), 0.5125);
        assert_eq!(ts.calculated_amount(), BigDecimal::from_str("30.75").unwrap());

        let short = sheet_hms((9, 0, 0), (9, 0, 36), "100");
        assert_eq!(short.calculated_amount(), BigDecimal::from(1));
    }

    #[test]
    fn amount_tracks_rate_changes() {
        let mut ts = sheet((8, 0), (10, 0), "10");
        assert_eq!(ts.calculated_amount(), BigDecimal::from(20));
        ts.hourly_rate = BigDecimal::from(15);
        assert_eq!(ts.calculated_amount(), BigDecimal::from(30));
    }

    #[test]
    fn review_sets_status_and_comments() {
        let mut ts = sheet((8, 0), (9, 0), "10");
        ts.review(ApprovalStatus::Rejected, Some("missing detail".into()));
        assert_eq!(ts.approval_status, ApprovalStatus::Rejected);
        assert_eq!(ts.reviewer_comments.as_deref(), Some("missing detail"));
    }
}
