//! Tests for edit and reply interaction handling.

use std::any::Any;
use std::sync::Arc;

use rstest::{fixture, rstest};

use crate::storefront::InMemoryReplyGateway;
use crate::storefront::models::test_support::{developer_reply, listing, viewer, ReviewBuilder};
use crate::storefront::models::{ReviewAuthor, ReviewId, UserId};
use crate::tui::app::ReviewApp;
use crate::tui::messages::AppMsg;
use crate::tui::state::ErrorKey;

const DEVELOPER_ID: u64 = 9;
const REVIEWER_ID: u64 = 3;

fn gateway() -> Arc<InMemoryReplyGateway> {
    Arc::new(InMemoryReplyGateway::new(ReviewAuthor {
        id: UserId(DEVELOPER_ID),
        name: "devon".to_owned(),
    }))
}

fn app_for(viewer_id: u64, reviews: Vec<crate::storefront::models::Review>) -> ReviewApp {
    let subject = listing(DEVELOPER_ID, Some(viewer(viewer_id, "viewer")), reviews);
    ReviewApp::new(subject, gateway(), 64)
}

#[fixture]
fn developer_app() -> ReviewApp {
    app_for(DEVELOPER_ID, vec![ReviewBuilder::new(5).build()])
}

fn type_text(app: &mut ReviewApp, text: &str) {
    for character in text.chars() {
        app.handle_message(&AppMsg::ComposerInsertChar(character));
    }
}

async fn resolve(cmd: bubbletea_rs::Cmd) -> AppMsg {
    let boxed: Box<dyn Any + Send> = cmd.await.expect("command should yield a message");
    *boxed
        .downcast::<AppMsg>()
        .expect("command should yield an AppMsg")
}

#[rstest]
fn begin_reply_opens_composer_for_developer(mut developer_app: ReviewApp) {
    developer_app.handle_message(&AppMsg::BeginReply);

    assert!(developer_app.selected_view_state().replying_to_review);
    assert_eq!(developer_app.composer_text(), Some(""));
}

#[rstest]
fn begin_reply_is_ignored_for_non_developer() {
    let mut app = app_for(REVIEWER_ID, vec![ReviewBuilder::new(5).build()]);

    app.handle_message(&AppMsg::BeginReply);

    assert!(!app.selected_view_state().replying_to_review);
    assert!(app.composer_text().is_none());
}

#[rstest]
fn begin_edit_opens_edit_form_for_author() {
    let mut app = app_for(REVIEWER_ID, vec![ReviewBuilder::new(5).build()]);

    app.handle_message(&AppMsg::BeginEdit);

    assert!(app.selected_view_state().editing_review);
}

#[rstest]
fn begin_edit_on_replied_review_prefills_composer_for_developer() {
    let review = ReviewBuilder::new(5)
        .reply(developer_reply(7, DEVELOPER_ID, "Thanks for the report."))
        .build();
    let mut app = app_for(DEVELOPER_ID, vec![review]);

    app.handle_message(&AppMsg::BeginEdit);

    assert!(app.selected_view_state().replying_to_review);
    assert_eq!(app.composer_text(), Some("Thanks for the report."));
}

#[rstest]
fn begin_edit_on_replied_review_is_ignored_for_reviewer_of_other_review() {
    let review = ReviewBuilder::new(5)
        .author(11, "other")
        .reply(developer_reply(7, DEVELOPER_ID, "Noted."))
        .build();
    let mut app = app_for(REVIEWER_ID, vec![review]);

    app.handle_message(&AppMsg::BeginEdit);

    assert!(!app.selected_view_state().editing_review);
    assert!(!app.selected_view_state().replying_to_review);
}

#[rstest]
fn escape_closes_composer_and_clears_reply_flag(mut developer_app: ReviewApp) {
    developer_app.handle_message(&AppMsg::BeginReply);
    type_text(&mut developer_app, "draft");

    developer_app.handle_message(&AppMsg::EscapePressed);

    assert!(developer_app.composer_text().is_none());
    assert!(!developer_app.selected_view_state().replying_to_review);
}

#[rstest]
fn escape_closes_edit_form() {
    let mut app = app_for(REVIEWER_ID, vec![ReviewBuilder::new(5).build()]);
    app.handle_message(&AppMsg::BeginEdit);

    app.handle_message(&AppMsg::EscapePressed);

    assert!(!app.selected_view_state().editing_review);
}

#[rstest]
fn commit_edit_dismisses_edit_form() {
    let mut app = app_for(REVIEWER_ID, vec![ReviewBuilder::new(5).build()]);
    app.handle_message(&AppMsg::BeginEdit);

    app.handle_message(&AppMsg::CommitEdit);

    assert!(!app.selected_view_state().editing_review);
}

#[rstest]
fn submitting_blank_draft_sets_notice_without_command(mut developer_app: ReviewApp) {
    developer_app.handle_message(&AppMsg::BeginReply);
    type_text(&mut developer_app, "   ");

    let cmd = developer_app.handle_message(&AppMsg::SubmitReply);

    assert!(cmd.is_none());
    assert!(developer_app.notice_message().is_some());
    assert!(!developer_app.selected_view_state().submitting_reply);
}

#[rstest]
#[tokio::test]
async fn successful_submission_attaches_reply_and_closes_composer(mut developer_app: ReviewApp) {
    developer_app.handle_message(&AppMsg::BeginReply);
    type_text(&mut developer_app, "Glad it helps!");

    let cmd = developer_app
        .handle_message(&AppMsg::SubmitReply)
        .expect("submission should produce a command");
    assert!(developer_app.selected_view_state().submitting_reply);

    let outcome = resolve(cmd).await;
    developer_app.handle_message(&outcome);

    let review = developer_app.selected_review().expect("review present");
    assert_eq!(
        review.reply.as_ref().map(|reply| reply.body.as_str()),
        Some("Glad it helps!")
    );
    assert!(developer_app.composer_text().is_none());
    assert!(!developer_app.selected_view_state().submitting_reply);
    assert!(!developer_app.selected_view_state().replying_to_review);
}

#[rstest]
fn second_submit_is_ignored_while_one_is_outstanding(mut developer_app: ReviewApp) {
    developer_app.handle_message(&AppMsg::BeginReply);
    type_text(&mut developer_app, "first");
    let first = developer_app.handle_message(&AppMsg::SubmitReply);
    assert!(first.is_some());

    let second = developer_app.handle_message(&AppMsg::SubmitReply);

    assert!(second.is_none());
}

#[rstest]
fn failed_submission_records_error_and_keeps_composer(mut developer_app: ReviewApp) {
    developer_app.handle_message(&AppMsg::BeginReply);
    type_text(&mut developer_app, "draft text");
    developer_app.handle_message(&AppMsg::SubmitReply);

    developer_app.handle_message(&AppMsg::ReplyFailed {
        review_id: ReviewId(5),
        message: "service unavailable".to_owned(),
    });

    assert!(!developer_app.selected_view_state().submitting_reply);
    assert!(developer_app.selected_view_state().replying_to_review);
    assert_eq!(developer_app.composer_text(), Some("draft text"));
    assert_eq!(
        developer_app
            .errors
            .message(&ErrorKey::for_reply(ReviewId(5))),
        Some("service unavailable")
    );
}

#[rstest]
fn resubmitting_after_failure_clears_the_recorded_error(mut developer_app: ReviewApp) {
    developer_app.handle_message(&AppMsg::BeginReply);
    type_text(&mut developer_app, "try again");
    developer_app.handle_message(&AppMsg::SubmitReply);
    developer_app.handle_message(&AppMsg::ReplyFailed {
        review_id: ReviewId(5),
        message: "timeout".to_owned(),
    });

    let cmd = developer_app.handle_message(&AppMsg::SubmitReply);

    assert!(cmd.is_some());
    assert!(
        developer_app
            .errors
            .message(&ErrorKey::for_reply(ReviewId(5)))
            .is_none()
    );
}
