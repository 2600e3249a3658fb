//! Behavioural tests for the read-only gifts endpoints.
// Shared helpers include builders used only by the calls suite.
#[expect(
    dead_code,
    reason = "Shared helpers include builders used only by the calls suite."
)]
#[path = "support/crm_http.rs"]
mod crm_http;
// Shared harness has fields used only by the calls suite.
#[expect(
    dead_code,
    reason = "Shared harness has fields used only by the calls suite."
)]
#[path = "support/harness.rs"]
mod harness;

use actix_web::http::Method;
use crm_http::{
    JsonRequest, last_body, last_status, login_and_store_cookie, perform_json_request,
};
use harness::{FOREIGN_CONTACT, OWN_GIFT, WorldFixture};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;

#[fixture]
fn world() -> WorldFixture {
    harness::world()
}

#[given("a running server backed by the in-memory store")]
fn a_running_server_backed_by_the_in_memory_store(world: &WorldFixture) {
    let _ = world;
}

#[given("the client has an authenticated session")]
fn the_client_has_an_authenticated_session(world: &WorldFixture) {
    login_and_store_cookie(&world.world());
}

#[when("the client fetches its own gift")]
fn the_client_fetches_its_own_gift(world: &WorldFixture) {
    let path = format!("/api/v1/gifts/{}", OWN_GIFT.get());
    perform_json_request(
        &world.world(),
        JsonRequest::authenticated(Method::GET, &path),
    );
}

#[when("the client lists gifts for the foreign contact")]
fn the_client_lists_gifts_for_the_foreign_contact(world: &WorldFixture) {
    let path = format!("/api/v1/contacts/{}/gifts", FOREIGN_CONTACT.get());
    perform_json_request(
        &world.world(),
        JsonRequest::authenticated(Method::GET, &path),
    );
}

#[when("the client lists its gifts")]
fn the_client_lists_its_gifts(world: &WorldFixture) {
    perform_json_request(
        &world.world(),
        JsonRequest::authenticated(Method::GET, "/api/v1/gifts"),
    );
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &WorldFixture, status: u16) {
    assert_eq!(last_status(&world.world()), status);
}

#[then("the error code is {code}")]
fn the_error_code_is(world: &WorldFixture, code: u64) {
    let body = last_body(&world.world());
    assert_eq!(body["error_code"].as_u64(), Some(code), "body: {body}");
}

#[then("the gift update time is present and null")]
fn the_gift_update_time_is_present_and_null(world: &WorldFixture) {
    let body = last_body(&world.world());
    let data = body
        .get("data")
        .and_then(Value::as_object)
        .expect("gift data");
    assert_eq!(data.get("updated_at"), Some(&Value::Null));
    assert_eq!(data.get("created_at"), Some(&Value::from("2024-04-02T10:00:00Z")));
    assert_eq!(data.get("object"), Some(&Value::from("gift")));
}

#[then("the page holds {count} of {total} gifts")]
fn the_page_holds_gifts(world: &WorldFixture, count: usize, total: u64) {
    let body = last_body(&world.world());
    let items = body["data"].as_array().expect("gift list");
    assert_eq!(items.len(), count);
    assert_eq!(body["meta"]["total"].as_u64(), Some(total));
    assert_eq!(body["meta"]["current_page"], 1);
    assert_eq!(body["links"]["next"], Value::Null);
}

#[scenario(
    path = "tests/features/gifts.feature",
    name = "A gift that was never edited serialises a null update time"
)]
fn never_edited_gift(world: WorldFixture) {
    let _ = world;
}

#[scenario(
    path = "tests/features/gifts.feature",
    name = "Listing gifts for another account's contact is not found"
)]
fn listing_foreign_contact_gifts(world: WorldFixture) {
    let _ = world;
}

#[scenario(
    path = "tests/features/gifts.feature",
    name = "Listing the account's gifts is paginated"
)]
fn listing_gifts_is_paginated(world: WorldFixture) {
    let _ = world;
}
