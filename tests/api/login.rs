use crate::helpers;
use crate::helpers::{TestApp, TEST_SUBMIT_DELAY_MILLISECONDS};
use std::time::{Duration, Instant};

const SUCCESS_TOAST: &str = r#"<div class="toast toast-success" role="status">Logged in Successfully!</div>"#;

#[tokio::test]
async fn the_login_page_renders_an_empty_form() {
    // Arrange
    let app = TestApp::spawn_app().await;

    // Act
    let response = app.get_login().await;

    // Assert
    assert_eq!(response.status().as_u16(), 200);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains("Email address"));
    assert!(html_page.contains(r#"placeholder="fahad@email.com""#));
    assert!(html_page.contains("Sign in"));
    assert!(!html_page.contains("field-error\""));
    assert!(!html_page.contains("toast-success"));
}

#[tokio::test]
async fn the_served_page_locks_the_form_while_the_login_is_in_flight() {
    // Arrange
    let app = TestApp::spawn_app().await;

    // Act
    let html_page = app.get_login_html().await;

    // Assert
    assert!(html_page.contains(r#"<form id="login-form" action="/login" method="post" data-submitting="false""#));
    // A second submit is dropped, inputs and button are locked on the first one
    assert!(html_page.contains(r#"this.dataset.submitting === "true""#));
    assert!(html_page.contains("event.preventDefault()"));
    assert!(html_page.contains("input.readOnly = true"));
    assert!(html_page.contains(r#"querySelector("button[type=submit]").disabled = true"#));
}

#[tokio::test]
async fn a_page_re_rendered_after_invalid_input_is_unlocked_again() {
    // Arrange
    let app = TestApp::spawn_app().await;

    // Act
    let html_page = app.post_login("fahad", "pass").await.text().await.unwrap();

    // Assert
    assert!(html_page.contains(r#"data-submitting="false""#));
    assert!(!html_page.contains(" disabled>"));
}

#[tokio::test]
async fn an_invalid_email_is_reported_inline() {
    // Arrange
    let app = TestApp::spawn_app().await;
    let invalid_emails = vec!["fahad", "fahad@", "@email.com", "fahad email.com"];

    for email in invalid_emails {
        // Act
        let response = app.post_login(email, "password123").await;

        // Assert
        assert_eq!(response.status().as_u16(), 200, "email: {}", email);
        let html_page = response.text().await.unwrap();
        assert!(
            html_page.contains(
                r#"<p class="field-error" id="email-error">Enter valid email address</p>"#
            ),
            "email: {}",
            email
        );
        assert!(!html_page.contains("password-error"));
        assert!(!html_page.contains("Logged in Successfully!"));
    }

    // No notification was queued either
    let html_page = app.get_login_html().await;
    assert!(!html_page.contains("Logged in Successfully!"));
}

#[tokio::test]
async fn a_short_password_is_reported_inline_and_not_echoed() {
    // Arrange
    let app = TestApp::spawn_app().await;

    // Act
    let response = app.post_login("fahad@email.com", "pass").await;

    // Assert
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains(
        r#"<p class="field-error" id="password-error">Password must be at least 8 characters.</p>"#
    ));
    assert!(!html_page.contains("email-error"));
    assert!(html_page.contains(r#"value="fahad"#));
    assert!(!html_page.contains(r#"value="pass""#));
}

#[tokio::test]
async fn empty_fields_report_both_messages() {
    // Arrange
    let app = TestApp::spawn_app().await;

    // Act
    let html_page = app.post_login("", "").await.text().await.unwrap();

    // Assert
    assert!(html_page.contains("Enter valid email address"));
    assert!(html_page.contains("Password must be at least 8 characters."));
}

#[tokio::test]
async fn a_valid_login_waits_then_shows_the_success_toast_once() {
    // Arrange
    let app = TestApp::spawn_app().await;
    let start = Instant::now();

    // Act - Part 1 - Submit valid credentials
    let response = app.post_login("fahad@email.com", "password123").await;

    // Assert
    assert!(start.elapsed() >= Duration::from_millis(TEST_SUBMIT_DELAY_MILLISECONDS));
    helpers::assert_is_redirect_to(&response, "/login");

    // Act - Part 2 - Follow the redirect
    let html_page = app.get_login_html().await;
    assert_eq!(html_page.matches(SUCCESS_TOAST).count(), 1);

    // Act - Part 3 - Reload the login page
    let html_page = app.get_login_html().await;
    assert!(!html_page.contains(SUCCESS_TOAST));
}

#[tokio::test]
async fn two_sequential_logins_notify_independently() {
    // Arrange
    let app = TestApp::spawn_app().await;

    for _ in 0..2 {
        // Act
        let response = app.post_login("fahad@email.com", "password123").await;

        // Assert
        helpers::assert_is_redirect_to(&response, "/login");
        let html_page = app.get_login_html().await;
        assert_eq!(html_page.matches(SUCCESS_TOAST).count(), 1);
    }
}
