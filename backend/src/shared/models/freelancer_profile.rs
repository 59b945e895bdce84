use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::{
    freelancer_profile_add_request::FreelancerProfileAddRequest,
    freelancer_profile_edit_request::FreelancerProfileEditRequest,
};

/// Keyed by the owning user's id rather than by a sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FreelancerProfile {
    pub id: u64,
    pub skills: String,
    pub experience: String,
    pub hourly_rate: BigDecimal,
    pub availability: String,
    pub working_hours: String,
    pub avg_rating: BigDecimal,
    pub summary: Option<String>,
    pub past_projects: Option<String>,
}

impl FreelancerProfile {
    pub fn new(request: FreelancerProfileAddRequest, user_id: u64) -> Self {
        Self {
            id: user_id,
            skills: request.skills,
            experience: request.experience,
            hourly_rate: request.hourly_rate,
            availability: request.availability,
            working_hours: request.working_hours,
            avg_rating: BigDecimal::from(0),
            summary: request.summary,
            past_projects: request.past_projects,
        }
    }

    pub fn apply(&mut self, request: FreelancerProfileEditRequest) {
        if let Some(skills) = request.skills {
            self.skills = skills;
        }
        if let Some(experience) = request.experience {
            self.experience = experience;
        }
        if let Some(rate) = request.hourly_rate {
            self.hourly_rate = rate;
        }
        if let Some(availability) = request.availability {
            self.availability = availability;
        }
        if let Some(hours) = request.working_hours {
            self.working_hours = hours;
        }
        if let Some(rating) = request.avg_rating {
            self.avg_rating = rating;
        }
        if let Some(summary) = request.summary {
            self.summary = Some(summary);
        }
        if let Some(past) = request.past_projects {
            self.past_projects = Some(past);
        }
    }
}
