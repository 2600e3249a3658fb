//! Tests for the call service.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockCallRepository, MockContactRepository};
use crate::domain::{CallContent, ErrorCode};

const ACCOUNT: AccountId = AccountId::new(1);
const OTHER_ACCOUNT: AccountId = AccountId::new(2);

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 2, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn contact(account: AccountId) -> ContactSummary {
    ContactSummary {
        id: ContactId::new(10),
        account_id: account,
        first_name: "Ada".to_owned(),
        last_name: Some("Lovelace".to_owned()),
        nickname: None,
        gender: None,
        is_partial: false,
        is_dead: false,
    }
}

#[fixture]
fn draft() -> CallDraft {
    CallDraft {
        content: CallContent::new("Discussed the engine").expect("valid content"),
        called_at: Utc
            .with_ymd_and_hms(2024, 3, 1, 9, 30, 0)
            .single()
            .expect("valid timestamp"),
        contact_id: ContactId::new(10),
    }
}

fn call_from(id: i64, account: AccountId, draft: &CallDraft, at: DateTime<Utc>) -> Call {
    Call {
        id: CallId::new(id),
        account_id: account,
        contact: contact(account),
        content: draft.content.as_str().to_owned(),
        called_at: draft.called_at,
        created_at: at,
        updated_at: None,
    }
}

fn contacts_returning(found: Option<ContactSummary>) -> MockContactRepository {
    let mut contacts = MockContactRepository::new();
    contacts
        .expect_find_summary()
        .return_once(move |_, _| Ok(found));
    contacts
}

fn service(
    calls: MockCallRepository,
    contacts: MockContactRepository,
) -> impl CallsCommand + CallsQuery {
    CallService::new(Arc::new(calls), Arc::new(contacts), Arc::new(FixedClock(now())))
}

#[rstest]
#[tokio::test]
async fn create_stamps_the_callers_account(draft: CallDraft) {
    let mut calls = MockCallRepository::new();
    calls
        .expect_insert()
        .withf(|account, contact, _, at| {
            *account == ACCOUNT && contact.id == ContactId::new(10) && *at == now()
        })
        .times(1)
        .returning(|account, _, draft, at| Ok(call_from(5, account, draft, at)));

    let call = service(calls, contacts_returning(Some(contact(ACCOUNT))))
        .create_call(ACCOUNT, draft.clone())
        .await
        .expect("create succeeds");

    assert_eq!(call.id, CallId::new(5));
    assert_eq!(call.account_id, ACCOUNT);
    assert_eq!(call.content, draft.content.as_str());
    assert_eq!(call.created_at, now());
}

#[rstest]
#[tokio::test]
async fn create_with_missing_contact_is_not_found(draft: CallDraft) {
    let mut calls = MockCallRepository::new();
    calls.expect_insert().times(0);

    let err = service(calls, contacts_returning(None))
        .create_call(ACCOUNT, draft)
        .await
        .expect_err("contact missing");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn create_with_foreign_contact_is_not_found(draft: CallDraft) {
    let mut calls = MockCallRepository::new();
    calls.expect_insert().times(0);

    // An adapter that forgot its account filter must still not leak the contact.
    let err = service(calls, contacts_returning(Some(contact(OTHER_ACCOUNT))))
        .create_call(ACCOUNT, draft)
        .await
        .expect_err("foreign contact");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), crate::domain::RESOURCE_NOT_FOUND_MESSAGE);
}

#[rstest]
#[case(CallRepositoryError::constraint("fk"), ErrorCode::InvalidParameters)]
#[case(CallRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(CallRepositoryError::query("syntax"), ErrorCode::InternalError)]
#[tokio::test]
async fn create_maps_repository_failures(
    draft: CallDraft,
    #[case] failure: CallRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut calls = MockCallRepository::new();
    calls.expect_insert().return_once(move |_, _, _, _| Err(failure));

    let err = service(calls, contacts_returning(Some(contact(ACCOUNT))))
        .create_call(ACCOUNT, draft)
        .await
        .expect_err("repository failure");

    assert_eq!(err.code(), expected);
}

#[rstest]
#[tokio::test]
async fn update_of_a_call_gone_before_the_write_is_not_found(draft: CallDraft) {
    let mut calls = MockCallRepository::new();
    calls.expect_find().times(0);
    calls
        .expect_update()
        .withf(|account, id, _, _, _| *account == ACCOUNT && *id == CallId::new(9))
        .times(1)
        .return_once(|_, _, _, _, _| Ok(None));

    let err = service(calls, contacts_returning(Some(contact(ACCOUNT))))
        .update_call(ACCOUNT, CallId::new(9), draft)
        .await
        .expect_err("call missing");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_with_foreign_contact_skips_the_write(draft: CallDraft) {
    let mut calls = MockCallRepository::new();
    calls.expect_update().times(0);

    let err = service(calls, contacts_returning(None))
        .update_call(ACCOUNT, CallId::new(9), draft)
        .await
        .expect_err("contact missing");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_rejected_by_the_database_is_invalid_parameters(draft: CallDraft) {
    let mut calls = MockCallRepository::new();
    calls
        .expect_update()
        .return_once(|_, _, _, _, _| Err(CallRepositoryError::constraint("Unknown")));

    let err = service(calls, contacts_returning(Some(contact(ACCOUNT))))
        .update_call(ACCOUNT, CallId::new(9), draft)
        .await
        .expect_err("write rejected");

    assert_eq!(err.code(), ErrorCode::InvalidParameters);
    assert_eq!(err.message(), "Invalid parameters");
}

#[rstest]
#[tokio::test]
async fn update_replaces_every_field(draft: CallDraft) {
    let mut replacement = draft.clone();
    replacement.content = CallContent::new("Rescheduled").expect("valid content");

    let mut calls = MockCallRepository::new();
    calls.expect_find().times(0);
    calls
        .expect_update()
        .withf(|_, id, _, draft, at| {
            *id == CallId::new(9) && draft.content.as_str() == "Rescheduled" && *at == now()
        })
        .times(1)
        .returning(|account, id, _, draft, at| {
            let mut call = call_from(id.get(), account, draft, draft.called_at);
            call.updated_at = Some(at);
            Ok(Some(call))
        });

    let call = service(calls, contacts_returning(Some(contact(ACCOUNT))))
        .update_call(ACCOUNT, CallId::new(9), replacement)
        .await
        .expect("update succeeds");

    assert_eq!(call.content, "Rescheduled");
    assert_eq!(call.updated_at, Some(now()));
}

#[rstest]
#[case(true)]
#[case(false)]
#[tokio::test]
async fn delete_reports_the_id_or_not_found(#[case] removed: bool) {
    let mut calls = MockCallRepository::new();
    calls.expect_delete().return_once(move |_, _| Ok(removed));

    let result = service(calls, MockContactRepository::new())
        .delete_call(ACCOUNT, CallId::new(3))
        .await;

    match result {
        Ok(id) => {
            assert!(removed);
            assert_eq!(id, CallId::new(3));
        }
        Err(err) => {
            assert!(!removed);
            assert_eq!(err.code(), ErrorCode::NotFound);
        }
    }
}

#[rstest]
#[tokio::test]
async fn listing_a_foreign_contacts_calls_is_not_found() {
    let mut calls = MockCallRepository::new();
    calls.expect_list_for_contact().times(0);

    let request = PageRequest::new(1, 10).expect("valid page request");
    let err = service(calls, contacts_returning(None))
        .list_contact_calls(ACCOUNT, ContactId::new(10), request)
        .await
        .expect_err("contact in another account");

    assert_eq!(err.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn listing_a_contacts_calls_pages_through_the_repository(draft: CallDraft) {
    let request = PageRequest::new(2, 1).expect("valid page request");
    let page = Page::new(vec![call_from(1, ACCOUNT, &draft, now())], 3, request);

    let mut calls = MockCallRepository::new();
    calls
        .expect_list_for_contact()
        .with(eq(ACCOUNT), eq(ContactId::new(10)), eq(request))
        .return_once(move |_, _, _| Ok(page));

    let listed = service(calls, contacts_returning(Some(contact(ACCOUNT))))
        .list_contact_calls(ACCOUNT, ContactId::new(10), request)
        .await
        .expect("listing succeeds");

    assert_eq!(listed.total(), 3);
    assert_eq!(listed.items().len(), 1);
}
