//! Tests for frame rendering.

use std::sync::Arc;

use rstest::rstest;

use crate::storefront::InMemoryReplyGateway;
use crate::storefront::models::test_support::{fixture_posted_at, listing, viewer, ReviewBuilder};
use crate::storefront::models::{ReviewAuthor, ReviewId, UserId};
use crate::tui::app::ReviewApp;
use crate::tui::messages::AppMsg;
use crate::tui::state::ErrorKey;

fn developer_app(reviews: Vec<crate::storefront::models::Review>) -> ReviewApp {
    let gateway = Arc::new(InMemoryReplyGateway::new(ReviewAuthor {
        id: UserId(9),
        name: "devon".to_owned(),
    }));
    ReviewApp::new(listing(9, Some(viewer(9, "devon")), reviews), gateway, 64)
}

#[rstest]
fn header_names_the_addon_and_review_count() {
    let app = developer_app(vec![ReviewBuilder::new(5).build()]);

    let frame = app.render_view(fixture_posted_at());

    assert!(frame.contains("Tab Candy reviews (1)"));
}

#[rstest]
fn empty_listing_shows_the_no_reviews_message() {
    let app = developer_app(Vec::new());

    let frame = app.render_view(fixture_posted_at());

    assert!(frame.contains("No reviews yet."));
}

#[rstest]
fn list_marks_the_selected_review() {
    let app = developer_app(vec![
        ReviewBuilder::new(1).title(Some("First")).build(),
        ReviewBuilder::new(2).title(Some("Second")).build(),
    ]);

    let frame = app.render_view(fixture_posted_at());

    assert!(frame.contains("> First"));
    assert!(frame.contains("  Second"));
}

#[rstest]
fn list_lines_summarise_the_rating() {
    let app = developer_app(vec![ReviewBuilder::new(1).build()]);

    let frame = app.render_view(fixture_posted_at());

    assert!(frame.contains("(rated 4 out of 5)"));
}

#[rstest]
fn untitled_reviews_get_a_placeholder_label() {
    let app = developer_app(vec![ReviewBuilder::new(1).title(None).build()]);

    let frame = app.render_view(fixture_posted_at());

    assert!(frame.contains("(untitled)"));
}

#[rstest]
fn list_lines_strip_control_sequences_from_titles() {
    let app = developer_app(vec![
        ReviewBuilder::new(1)
            .title(Some("\u{1b}[31mloud\u{1b}[0m title"))
            .build(),
    ]);

    let frame = app.render_view(fixture_posted_at());

    assert!(!frame.contains('\u{1b}'));
    assert!(frame.contains("loud title"));
}

#[rstest]
fn recorded_submission_error_surfaces_in_the_selected_item() {
    let mut app = developer_app(vec![ReviewBuilder::new(5).build()]);
    app.errors.record(
        ErrorKey::for_reply(ReviewId(5)),
        "service unavailable".to_owned(),
    );

    let frame = app.render_view(fixture_posted_at());

    assert!(frame.contains("! service unavailable"));
}

#[rstest]
fn status_bar_switches_hints_while_composing() {
    let mut app = developer_app(vec![ReviewBuilder::new(5).build()]);
    assert!(app.render_view(fixture_posted_at()).contains("[q] Quit"));

    app.handle_message(&AppMsg::BeginReply);

    assert!(
        app.render_view(fixture_posted_at())
            .contains("[Enter] Submit  [Esc] Cancel")
    );
}

#[rstest]
fn notice_replaces_the_status_hints() {
    let mut app = developer_app(vec![ReviewBuilder::new(5).build()]);
    app.handle_message(&AppMsg::BeginReply);
    app.handle_message(&AppMsg::SubmitReply);

    let frame = app.render_view(fixture_posted_at());

    assert!(frame.contains("! "));
}
