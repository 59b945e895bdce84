mod common;

use std::str::FromStr;

use axum::http::StatusCode;
use bigdecimal::BigDecimal;
use common::{decimal, TestApp};
use serde_json::json;

#[tokio::test]
async fn freelancers_cannot_post_projects() {
    let app = TestApp::new();
    let (_, freelancer) = app.sign_up("Finn", "Freelancer").await;
    let (status, body) = app
        .call(
            "POST",
            "/api/projects",
            Some(&freelancer),
            Some(json!({
                "title": "x", "description": "y", "category": "Web",
                "deadline": "2030-01-01", "budget": "10"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");
}

#[tokio::test]
async fn admin_satisfies_client_role() {
    let app = TestApp::new();
    let admin = app.admin_token().await;
    app.project(&admin, "Admin project").await;
}

#[tokio::test]
async fn project_queries() {
    let app = TestApp::new();
    let (client, token) = app.sign_up("Cleo", "Client").await;
    let id = app.project(&token, "Storefront").await;

    let (_, body) = app.call("GET", &format!("/api/projects/{id}"), Some(&token), None).await;
    assert_eq!(body["status"], "Open");
    assert_eq!(body["clientId"], client);
    assert!(body["daysRemaining"].as_i64().unwrap() > 0);

    let (_, by_category) = app.call("GET", "/api/projects/category/wEb", Some(&token), None).await;
    assert_eq!(by_category.as_array().unwrap().len(), 1);

    let (_, in_range) = app
        .call("GET", "/api/projects/deadline?start=2030-01-01&end=2030-01-31", Some(&token), None)
        .await;
    assert_eq!(in_range.as_array().unwrap().len(), 1);
    let (_, out_of_range) = app
        .call("GET", "/api/projects/deadline?start=2030-02-01&end=2030-12-31", Some(&token), None)
        .await;
    assert!(out_of_range.as_array().unwrap().is_empty());

    let (status, body) = app
        .call("PUT", &format!("/api/projects/{id}"), Some(&token), Some(json!({ "status": "InProgress" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "InProgress");
    assert_eq!(body["title"], "Storefront");
}

#[tokio::test]
async fn project_requests_are_idempotent_per_pair() {
    let app = TestApp::new();
    let (client, client_token) = app.sign_up("Cleo", "Client").await;
    let (freelancer, token) = app.sign_up("Finn", "Freelancer").await;
    let project = app.project(&client_token, "Storefront").await;

    let (status, first) = app
        .call("POST", "/api/project-requests", Some(&token), Some(json!({ "projectId": project })))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["status"], "Pending");

    let (status, again) = app
        .call("POST", "/api/project-requests", Some(&token), Some(json!({ "projectId": project })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again["id"], first["id"]);

    let (_, mine) = app
        .call("GET", &format!("/api/project-requests/freelancer/{freelancer}"), Some(&token), None)
        .await;
    let mine = mine.as_array().unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["project"]["title"], "Storefront");
    assert_eq!(mine[0]["client"]["id"], client);

    let (status, accepted) = app
        .call(
            "PUT",
            &format!("/api/project-requests/{}/status", first["id"]),
            Some(&client_token),
            Some(json!({ "status": "Accepted" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(accepted["status"], "Accepted");
}

#[tokio::test]
async fn assignments_list_and_remove_freelancers() {
    let app = TestApp::new();
    let (_, client) = app.sign_up("Cleo", "Client").await;
    let (freelancer, _) = app.sign_up("Finn", "Freelancer").await;
    let project = app.project(&client, "Storefront").await;
    let assign = json!({ "projectId": project, "freelancerId": freelancer });

    let (status, _) = app.call("POST", "/api/project-freelancers", Some(&client), Some(assign.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = app.call("POST", "/api/project-freelancers", Some(&client), Some(assign)).await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/api/project-freelancers/project/{project}");
    let (_, list) = app.call("GET", &uri, Some(&client), None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["firstName"], "Finn");

    let (status, _) = app
        .call("DELETE", &format!("/api/project-freelancers/{project}/{freelancer}"), Some(&client), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, list) = app.call("GET", &uri, Some(&client), None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn milestone_lifecycle_and_approved_guard() {
    let app = TestApp::new();
    let (_, client) = app.sign_up("Cleo", "Client").await;
    let (_, freelancer) = app.sign_up("Finn", "Freelancer").await;
    let project = app.project(&client, "Storefront").await;

    let (status, _) = app.call("GET", "/api/milestones/pending", Some(&client), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, created) = app
        .call(
            "POST",
            "/api/milestones",
            Some(&client),
            Some(json!({
                "title": "Design", "description": "Mockups",
                "dueDate": "2030-01-10T00:00:00Z", "amount": "500", "projectId": project
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert_eq!(created["status"], "Pending");
    assert_eq!(created["isApproved"], false);
    let uri = format!("/api/milestones/{}", created["id"]);

    let (status, _) = app.call("GET", "/api/milestones/pending", Some(&client), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .call("PUT", &format!("{uri}/submit"), Some(&client), Some(json!({ "submittedFileUrls": [] })))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, submitted) = app
        .call(
            "PUT",
            &format!("{uri}/submit"),
            Some(&freelancer),
            Some(json!({ "submittedFileUrls": ["https://files/mockups.zip"], "freelancerComments": "v1" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(submitted["status"], "Submitted");
    assert!(submitted["submissionDate"].is_string());

    let (_, list) = app.call("GET", "/api/milestones/submitted", Some(&client), None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    let (_, list) = app.call("GET", &format!("/api/milestones/project/{project}"), Some(&client), None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, approved) = app.call("PUT", &format!("{uri}/approve"), Some(&client), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["isApproved"], true);

    let edit = json!({
        "title": "Changed", "description": "d", "dueDate": "2030-01-10T00:00:00Z", "amount": "1"
    });
    let (status, _) = app.call("PUT", &uri, Some(&client), Some(edit)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app.call("DELETE", &uri, Some(&client), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = app.call("PUT", &format!("{uri}/approve"), Some(&client), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, stored) = app.call("GET", &uri, Some(&client), None).await;
    assert_eq!(stored["title"], "Design");
    assert_eq!(decimal(&stored["amount"]), BigDecimal::from(500));
}

#[tokio::test]
async fn timesheet_amount_and_review() {
    let app = TestApp::new();
    let (_, client) = app.sign_up("Cleo", "Client").await;
    let (_, freelancer) = app.sign_up("Finn", "Freelancer").await;
    let sheet = json!({
        "projectName": "Storefront", "freelancerName": "Finn Tester",
        "dateOfWork": "2025-07-01", "startTime": "09:00:00", "endTime": "11:30:00",
        "workDescription": "Checkout flow", "hourlyRate": "40"
    });

    let mut backwards = sheet.clone();
    backwards["endTime"] = json!("08:00:00");
    let (status, _) = app.call("POST", "/api/timesheets", Some(&freelancer), Some(backwards)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, created) = app.call("POST", "/api/timesheets", Some(&freelancer), Some(sheet)).await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert_eq!(created["approvalStatus"], "Pending");
    assert_eq!(created["totalHours"], 2.5);
    assert_eq!(decimal(&created["calculatedAmount"]), BigDecimal::from(100));
    let uri = format!("/api/timesheets/{}", created["id"]);

    let (_, updated) = app.call("PUT", &uri, Some(&freelancer), Some(json!({ "hourlyRate": "60" }))).await;
    assert_eq!(decimal(&updated["calculatedAmount"]), BigDecimal::from(150));

    let (status, _) = app.call("PUT", &format!("{uri}/approve"), Some(&freelancer), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, approved) = app
        .call("PUT", &format!("{uri}/approve"), Some(&client), Some(json!({ "reviewerComments": "thanks" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["approvalStatus"], "Approved");
    assert_eq!(approved["reviewerComments"], "thanks");

    let (_, by_name) = app.call("GET", "/api/timesheets/freelancer/finn%20tester", Some(&client), None).await;
    assert_eq!(by_name.as_array().unwrap().len(), 1);
    let (_, by_project) = app.call("GET", "/api/timesheets/project/STOREFRONT", Some(&client), None).await;
    assert_eq!(by_project.as_array().unwrap().len(), 1);
    let (_, by_date) = app.call("GET", "/api/timesheets/date/2025-07-01", Some(&client), None).await;
    assert_eq!(by_date.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn timesheet_amount_counts_seconds() {
    let app = TestApp::new();
    let (_, freelancer) = app.sign_up("Finn", "Freelancer").await;
    let sheet = json!({
        "projectName": "Storefront", "freelancerName": "Finn Tester",
        "dateOfWork": "2025-07-02", "startTime": "09:00:00", "endTime": "09:30:45",
        "workDescription": "Hotfix", "hourlyRate": "60"
    });

    let (status, created) = app.call("POST", "/api/timesheets", Some(&freelancer), Some(sheet)).await;
    assert_eq!(status, StatusCode::CREATED, "{created}");
    assert_eq!(created["totalHours"], 0.5125);
    assert_eq!(decimal(&created["calculatedAmount"]), BigDecimal::from_str("30.75").unwrap());
}

#[tokio::test]
async fn payments_deliverables_and_feedback() {
    let app = TestApp::new();
    let (client, client_token) = app.sign_up("Cleo", "Client").await;
    let (freelancer, freelancer_token) = app.sign_up("Finn", "Freelancer").await;
    let project = app.project(&client_token, "Storefront").await;

    for dangling in [
        json!({ "freelancerId": 999 }),
        json!({ "freelancerId": freelancer, "milestoneId": 999 }),
        json!({ "freelancerId": freelancer, "timesheetId": 999 }),
        json!({ "freelancerId": freelancer, "clientId": 999 }),
    ] {
        let mut body = json!({ "projectId": project, "amount": "10" });
        for (key, value) in dangling.as_object().unwrap() {
            body[key] = value.clone();
        }
        let (status, error) = app.call("POST", "/api/payments", Some(&client_token), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{error}");
    }

    let (status, payment) = app
        .call(
            "POST",
            "/api/payments",
            Some(&client_token),
            Some(json!({ "projectId": project, "freelancerId": freelancer, "amount": "250.50", "paymentType": "Hourly" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{payment}");
    assert_eq!(payment["status"], "Pending");
    assert_eq!(payment["clientId"], client);
    let (_, by_client) = app.call("GET", &format!("/api/payments/client/{client}"), Some(&client_token), None).await;
    assert_eq!(by_client.as_array().unwrap().len(), 1);
    let (_, by_freelancer) = app
        .call("GET", &format!("/api/payments/freelancer/{freelancer}"), Some(&client_token), None)
        .await;
    assert_eq!(by_freelancer.as_array().unwrap().len(), 1);

    let (status, deliverable) = app
        .call(
            "POST",
            "/api/deliverables",
            Some(&freelancer_token),
            Some(json!({ "projectId": project, "uploadFiles": ["a.zip"], "comment": "first drop" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(deliverable["status"], "Pending");
    let (_, edited) = app
        .call(
            "PUT",
            &format!("/api/deliverables/{}", deliverable["id"]),
            Some(&client_token),
            Some(json!({ "status": "Accepted" })),
        )
        .await;
    assert_eq!(edited["status"], "Accepted");
    assert_eq!(edited["comment"], "first drop");

    let feedback = json!({ "projectId": project, "freelancerId": freelancer, "review": "Great", "rating": "Excellent" });
    let (status, _) = app.call("POST", "/api/feedbacks", Some(&freelancer_token), Some(feedback.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, created) = app.call("POST", "/api/feedbacks", Some(&client_token), Some(feedback)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["clientId"], client);
    let (_, list) = app
        .call("GET", &format!("/api/feedbacks/freelancer/{freelancer}"), Some(&client_token), None)
        .await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn messaging_between_users() {
    let app = TestApp::new();
    let (cleo, cleo_token) = app.sign_up("Cleo", "Client").await;
    let (finn, finn_token) = app.sign_up("Finn", "Freelancer").await;

    let (status, first) = app
        .call("POST", "/api/messages", Some(&cleo_token), Some(json!({ "receiverId": finn, "content": "Hi" })))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["senderId"], cleo);
    assert_eq!(first["isRead"], false);
    app.call("POST", "/api/messages", Some(&finn_token), Some(json!({ "receiverId": cleo, "content": "Hello" })))
        .await;

    let (_, conversation) = app
        .call("GET", &format!("/api/messages/conversation/{finn}/{cleo}"), Some(&finn_token), None)
        .await;
    let conversation = conversation.as_array().unwrap();
    assert_eq!(conversation.len(), 2);
    assert_eq!(conversation[0]["content"], "Hi");

    let (_, read) = app
        .call("PUT", &format!("/api/messages/{}/read", first["id"]), Some(&finn_token), None)
        .await;
    assert_eq!(read["isRead"], true);

    let (status, _) = app
        .call("POST", "/api/messages", Some(&cleo_token), Some(json!({ "receiverId": 999, "content": "?" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
