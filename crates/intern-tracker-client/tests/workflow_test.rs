/*
[INPUT]:  Mock backend responses served by wiremock
[OUTPUT]: End-to-end checks of form, workflow and wizard over real HTTP
[POS]:    Integration tests - submission workflow
[UPDATE]: When workflow transitions or backend calls change
*/

use intern_tracker_adapter::{ClientConfig, InternTrackerClient, WorkStatus};
use intern_tracker_client::workflow::{Completion, Effect, Notice, Screen};
use intern_tracker_client::{
    WizardError, WorkUpdateForm, WorkflowController, WorkflowError, WorkflowEvent, WorkflowStage,
};
use serde_json::json;
use std::time::Duration;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn controller_for(server: &MockServer) -> WorkflowController<InternTrackerClient> {
    let config = ClientConfig {
        timeout: Duration::from_secs(2),
        connect_timeout: Duration::from_secs(1),
    };
    let client = assert_ok!(InternTrackerClient::with_config_and_base_url(
        config,
        &server.uri()
    ));
    WorkflowController::new(client)
}

fn working_form() -> WorkUpdateForm {
    WorkUpdateForm {
        description: "Did X".to_string(),
        ..WorkUpdateForm::for_user("u1")
    }
}

async fn mount_create_pending(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/work-updates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Work update saved temporarily. Complete follow-up within 24 hours to finalize.",
            "tempWorkUpdateId": "t1",
            "redirectToFollowup": true,
            "ttl_expiry": "24 hours from now"
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_start_session(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/followups/start"))
        .and(query_param("temp_work_update_id", "t1"))
        .and(query_param("user_id", "u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Follow-up session started",
            "sessionId": "s1",
            "questions": ["Q1", "Q2"],
            "reminder": "Complete within 24 hours before auto-deletion"
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_leave_submission_finishes_after_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/work-updates"))
        .and(body_json(json!({
            "userId": "u1",
            "work_status": "on_leave",
            "description": "On Leave",
            "challenges": "",
            "plans": ""
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Leave status saved successfully",
            "workUpdateId": "w0",
            "isOverride": true,
            "isOnLeave": true
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/followups/start"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    let form = WorkUpdateForm {
        work_status: WorkStatus::OnLeave,
        challenges: "ignored".to_string(),
        ..WorkUpdateForm::for_user("u1")
    };

    let effects = assert_ok!(controller.submit_form(&form).await);
    assert_eq!(controller.stage(), WorkflowStage::Done);
    assert!(effects.contains(&Effect::ResetForm));
    assert!(effects.contains(&Effect::Show(Screen::Form)));
    assert!(matches!(
        controller.state().completion(),
        Some(Completion::LeaveRecorded { work_update_id: Some(id), is_override: true, .. }) if id == "w0"
    ));
    assert!(
        controller
            .state()
            .completion()
            .is_some_and(|completion| completion.to_string().contains("replaced"))
    );
}

#[tokio::test]
async fn test_working_submission_opens_wizard() {
    let server = MockServer::start().await;
    mount_create_pending(&server).await;
    mount_start_session(&server).await;

    let mut controller = controller_for(&server);

    let effects = assert_ok!(controller.submit_form(&working_form()).await);
    assert_eq!(effects, vec![Effect::Show(Screen::FollowupRedirect)]);
    assert_eq!(controller.stage(), WorkflowStage::AwaitingFollowupRedirect);
    let temp_ref = controller.state().temp_ref().expect("temp ref");
    assert_eq!(temp_ref.temp_id, "t1");
    assert_eq!(temp_ref.ttl_expiry.as_deref(), Some("24 hours from now"));
    assert!(temp_ref.notice().contains("within 24 hours"));

    let effects = assert_ok!(controller.dispatch(WorkflowEvent::ConfirmFollowup).await);
    assert_eq!(effects, vec![Effect::Show(Screen::Wizard)]);
    assert_eq!(controller.stage(), WorkflowStage::AwaitingAnswers);
    assert_eq!(
        controller
            .state()
            .session()
            .and_then(|session| session.reminder.as_deref()),
        Some("Complete within 24 hours before auto-deletion")
    );

    let wizard = controller.wizard_mut().expect("wizard");
    assert_eq!(wizard.status_line(), "Question 1 of 2 (0 answered)");
    assert_eq!(wizard.current_question(), "Q1");
}

#[tokio::test]
async fn test_incomplete_answers_are_rejected_locally() {
    let server = MockServer::start().await;
    mount_create_pending(&server).await;
    mount_start_session(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/followup/s1/complete"))
        .and(body_json(json!({ "answers": ["A1", "A2"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Follow-up completed",
            "sessionId": "s1",
            "workUpdateId": "w1",
            "workUpdateCompleted": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    assert_ok!(controller.submit_form(&working_form()).await);
    assert_ok!(controller.dispatch(WorkflowEvent::ConfirmFollowup).await);

    let wizard = controller.wizard_mut().expect("wizard");
    wizard.jump_to(1);
    wizard.set_answer("A2");

    let result = controller.dispatch(WorkflowEvent::SubmitAnswers).await;
    assert_eq!(
        result,
        Err(WorkflowError::IncompleteAnswers(WizardError::Incomplete {
            answered: 1,
            total: 2
        }))
    );
    assert_eq!(controller.stage(), WorkflowStage::AwaitingAnswers);

    let wizard = controller.wizard_mut().expect("wizard");
    assert_eq!(wizard.first_unanswered(), Some(0));
    wizard.jump_to(0);
    wizard.set_answer("A1");

    let effects = assert_ok!(controller.dispatch(WorkflowEvent::SubmitAnswers).await);
    assert_eq!(controller.stage(), WorkflowStage::Done);
    assert!(effects.iter().any(|effect| matches!(
        effect,
        Effect::Notify(Notice::Completed(Completion::FollowupCompleted { session_id, .. }))
            if session_id == "s1"
    )));
}

#[tokio::test]
async fn test_server_error_keeps_draft_and_retry_resends_it() {
    let server = MockServer::start().await;
    let expected_body = json!({
        "userId": "u1",
        "work_status": "working",
        "description": "Did X",
        "challenges": "",
        "plans": ""
    });
    Mock::given(method("POST"))
        .and(path("/api/work-updates"))
        .and(body_json(expected_body.clone()))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/work-updates"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tempWorkUpdateId": "t1",
            "redirectToFollowup": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);

    let effects = assert_ok!(controller.submit_form(&working_form()).await);
    assert_eq!(controller.stage(), WorkflowStage::Error);
    match &effects[..] {
        [Effect::Notify(Notice::Failed(failure))] => {
            assert_eq!(failure.status, Some(500));
            assert!(failure.message.contains("500"));
            assert!(failure.message.contains("database unavailable"));
            assert!(failure.retryable);
        }
        other => panic!("unexpected effects {other:?}"),
    }
    assert_eq!(
        controller.state().draft().map(|draft| draft.description.as_str()),
        Some("Did X")
    );

    let effects = assert_ok!(controller.dispatch(WorkflowEvent::Retry).await);
    assert_eq!(effects, vec![Effect::Show(Screen::FollowupRedirect)]);
    assert_eq!(controller.stage(), WorkflowStage::AwaitingFollowupRedirect);
}

#[tokio::test]
async fn test_dismissed_failure_returns_to_wizard_with_answers() {
    let server = MockServer::start().await;
    mount_create_pending(&server).await;
    mount_start_session(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/followup/s1/complete"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "detail": "Follow-up session not found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut controller = controller_for(&server);
    assert_ok!(controller.submit_form(&working_form()).await);
    assert_ok!(controller.dispatch(WorkflowEvent::ConfirmFollowup).await);

    let wizard = controller.wizard_mut().expect("wizard");
    wizard.set_answer("A1");
    wizard.next();
    wizard.set_answer("A2");

    assert_ok!(controller.dispatch(WorkflowEvent::SubmitAnswers).await);
    assert_eq!(controller.stage(), WorkflowStage::Error);
    let failure = controller.state().failure().expect("failure");
    assert_eq!(failure.status, Some(404));
    assert!(!failure.retryable);

    let effects = assert_ok!(controller.dispatch(WorkflowEvent::Dismiss).await);
    assert_eq!(effects, vec![Effect::Show(Screen::Wizard)]);
    let wizard = controller.wizard_mut().expect("wizard");
    assert_eq!(wizard.answers().as_slice(), ["A1", "A2"]);
}
