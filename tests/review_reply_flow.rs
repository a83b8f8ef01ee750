//! End-to-end tests for the reply flow: key events in, rendered frames out.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::event::KeyMsg;
use bubbletea_rs::Model;
use crossterm::event::{KeyCode, KeyModifiers};
use rstest::{fixture, rstest};

use plaudit::storefront::models::test_support::{developer_reply, listing, viewer, ReviewBuilder};
use plaudit::tui::ReviewApp;
use plaudit::{InMemoryReplyGateway, ReviewAuthor};
use plaudit::storefront::models::UserId;

const DEVELOPER_ID: u64 = 9;

fn press(app: &mut ReviewApp, key: KeyCode) -> Option<bubbletea_rs::Cmd> {
    let msg = KeyMsg {
        key,
        modifiers: KeyModifiers::empty(),
    };
    app.update(Box::new(msg) as Box<dyn Any + Send>)
}

fn type_text(app: &mut ReviewApp, text: &str) {
    for character in text.chars() {
        press(app, KeyCode::Char(character));
    }
}

async fn deliver(app: &mut ReviewApp, cmd: bubbletea_rs::Cmd) {
    let outcome = cmd.await.expect("command should yield a message");
    app.update(outcome);
}

#[fixture]
fn developer_app() -> ReviewApp {
    let reviews = vec![
        ReviewBuilder::new(1).title(Some("Great")).build(),
        ReviewBuilder::new(2)
            .title(Some("Mixed feelings"))
            .author(4, "miko")
            .reply(developer_reply(3, DEVELOPER_ID, "We hear you."))
            .build(),
    ];
    let gateway = Arc::new(InMemoryReplyGateway::new(ReviewAuthor {
        id: UserId(DEVELOPER_ID),
        name: "devon".to_owned(),
    }));
    ReviewApp::new(
        listing(DEVELOPER_ID, Some(viewer(DEVELOPER_ID, "devon")), reviews),
        gateway,
        200,
    )
}

#[rstest]
#[tokio::test]
async fn developer_replies_to_a_review_from_the_keyboard(mut developer_app: ReviewApp) {
    press(&mut developer_app, KeyCode::Char('r'));
    type_text(&mut developer_app, "Thanks, glad it helps!");

    let cmd = press(&mut developer_app, KeyCode::Enter).expect("submission should start");
    assert!(developer_app.selected_view_state().submitting_reply);

    deliver(&mut developer_app, cmd).await;

    let review = developer_app.selected_review().expect("review present");
    let reply = review.reply.as_deref().expect("reply attached");
    assert_eq!(reply.body, "Thanks, glad it helps!");
    assert_eq!(reply.author.name, "devon");
    assert!(!developer_app.selected_view_state().submitting_reply);

    let frame = developer_app.view();
    assert!(frame.contains("Developer response"));
    assert!(frame.contains("Thanks, glad it helps!"));
}

#[rstest]
#[tokio::test]
async fn escape_abandons_a_draft_without_submitting(mut developer_app: ReviewApp) {
    press(&mut developer_app, KeyCode::Char('r'));
    type_text(&mut developer_app, "half-written");

    press(&mut developer_app, KeyCode::Esc);

    assert!(developer_app.composer_text().is_none());
    assert!(!developer_app.selected_view_state().replying_to_review);
    let review = developer_app.selected_review().expect("review present");
    assert!(review.reply.is_none());
}

#[rstest]
fn replied_reviews_offer_no_begin_reply_affordance(mut developer_app: ReviewApp) {
    press(&mut developer_app, KeyCode::Char('j'));

    press(&mut developer_app, KeyCode::Char('r'));

    assert!(developer_app.composer_text().is_none());
}

#[rstest]
#[tokio::test]
async fn editing_an_existing_reply_reuses_the_composer(mut developer_app: ReviewApp) {
    press(&mut developer_app, KeyCode::Char('j'));

    press(&mut developer_app, KeyCode::Char('e'));
    assert_eq!(developer_app.composer_text(), Some("We hear you."));

    type_text(&mut developer_app, " Fix coming.");
    let cmd = press(&mut developer_app, KeyCode::Enter).expect("submission should start");
    deliver(&mut developer_app, cmd).await;

    let review = developer_app.selected_review().expect("review present");
    let reply = review.reply.as_deref().expect("reply attached");
    assert_eq!(reply.body, "We hear you. Fix coming.");
}

#[rstest]
fn anonymous_viewers_see_no_affordances() {
    let reviews = vec![ReviewBuilder::new(1).build()];
    let gateway = Arc::new(InMemoryReplyGateway::new(ReviewAuthor {
        id: UserId(DEVELOPER_ID),
        name: "devon".to_owned(),
    }));
    let mut app = ReviewApp::new(listing(DEVELOPER_ID, None, reviews), gateway, 200);

    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Char('r'));

    assert!(app.composer_text().is_none());
    assert!(!app.selected_view_state().editing_review);
    let frame = app.view();
    assert!(!frame.contains("[e] Edit"));
    assert!(!frame.contains("[r] Reply to this review"));
}

#[rstest]
fn hostile_review_text_is_rendered_inert() {
    let reviews = vec![
        ReviewBuilder::new(1)
            .title(Some("\u{1b}]0;owned\u{7}best addon"))
            .body("line one\n\u{1b}[31mloud\u{1b}[0m line")
            .build(),
    ];
    let gateway = Arc::new(InMemoryReplyGateway::new(ReviewAuthor {
        id: UserId(DEVELOPER_ID),
        name: "devon".to_owned(),
    }));
    let app = ReviewApp::new(listing(DEVELOPER_ID, None, reviews), gateway, 200);

    let frame = app.view();

    assert!(!frame.contains('\u{1b}'));
    assert!(!frame.contains('\u{7}'));
    assert!(frame.contains("loud line"));
}
