//! Tests for the visit tracking service.

use std::sync::Arc;

use rstest::rstest;

use super::*;
use crate::domain::ports::{
    MockCountryRepository, MockUserRepository, MockVisitedCountryRepository,
};
use crate::domain::{ErrorCode, User};

type MockService =
    TravelService<MockUserRepository, MockCountryRepository, MockVisitedCountryRepository>;

fn make_service(
    users: MockUserRepository,
    countries: MockCountryRepository,
    visits: MockVisitedCountryRepository,
) -> MockService {
    TravelService::new(Arc::new(users), Arc::new(countries), Arc::new(visits))
}

fn user_id(raw: i32) -> UserId {
    UserId::new(raw).expect("valid user id")
}

fn code(raw: &str) -> CountryCode {
    CountryCode::new(raw).expect("valid code")
}

fn ann() -> User {
    User::try_from_parts(1, "Ann", Some("#ff0000")).expect("valid user")
}

#[tokio::test]
async fn home_loads_visits_current_user_and_members() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .times(1)
        .return_once(|_| Ok(Some(ann())));
    users
        .expect_list_all()
        .times(1)
        .return_once(|| Ok(vec![ann()]));
    let mut visits = MockVisitedCountryRepository::new();
    visits
        .expect_list_codes()
        .withf(|id| id.get() == 1)
        .times(1)
        .return_once(|_| Ok(vec![code("FR"), code("DE")]));

    let service = make_service(users, MockCountryRepository::new(), visits);
    let view = service.home(Some(user_id(1))).await.expect("home loads");

    assert_eq!(view.total(), 2);
    assert_eq!(view.current, Some(ann()));
    assert_eq!(view.users.len(), 1);
}

#[tokio::test]
async fn home_without_current_user_skips_per_user_queries() {
    let mut users = MockUserRepository::new();
    users.expect_find_by_id().never();
    users.expect_list_all().times(1).return_once(|| Ok(Vec::new()));
    let mut visits = MockVisitedCountryRepository::new();
    visits.expect_list_codes().never();

    let service = make_service(users, MockCountryRepository::new(), visits);
    let view = service.home(None).await.expect("home loads");

    assert_eq!(view, HomeView::default());
}

#[rstest]
#[case(UserPersistenceError::connection("down"), ErrorCode::ServiceUnavailable)]
#[case(UserPersistenceError::query("broken"), ErrorCode::InternalError)]
#[tokio::test]
async fn home_failures_use_fetch_message(
    #[case] failure: UserPersistenceError,
    #[case] expected: ErrorCode,
) {
    let mut users = MockUserRepository::new();
    users.expect_list_all().return_once(move || Err(failure));

    let service = make_service(
        users,
        MockCountryRepository::new(),
        MockVisitedCountryRepository::new(),
    );
    let err = service.home(None).await.expect_err("home fails");

    assert_eq!(err.code(), expected);
    assert_eq!(err.message(), FETCH_FAILED);
}

#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test]
async fn blank_country_never_reaches_the_store(#[case] input: &str) {
    let mut countries = MockCountryRepository::new();
    countries.expect_find_code_by_name().never();
    let mut visits = MockVisitedCountryRepository::new();
    visits.expect_record_visit().never();

    let service = make_service(MockUserRepository::new(), countries, visits);
    let err = service
        .add_visit(Some(user_id(1)), input)
        .await
        .expect_err("blank input is rejected");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), EMPTY_COUNTRY);
}

#[tokio::test]
async fn add_without_current_user_is_rejected_before_lookup() {
    let mut countries = MockCountryRepository::new();
    countries.expect_find_code_by_name().never();

    let service = make_service(
        MockUserRepository::new(),
        countries,
        MockVisitedCountryRepository::new(),
    );
    let err = service
        .add_visit(None, "France")
        .await
        .expect_err("needs a member");

    assert_eq!(err.message(), NO_USER_SELECTED);
}

#[tokio::test]
async fn unknown_country_creates_no_row() {
    let mut countries = MockCountryRepository::new();
    countries
        .expect_find_code_by_name()
        .withf(|query| query.needle() == "atlantis")
        .times(1)
        .return_once(|_| Ok(None));
    let mut visits = MockVisitedCountryRepository::new();
    visits.expect_record_visit().never();

    let service = make_service(MockUserRepository::new(), countries, visits);
    let err = service
        .add_visit(Some(user_id(1)), " Atlantis ")
        .await
        .expect_err("no match");

    assert_eq!(err.code(), ErrorCode::NotFound);
    assert_eq!(err.message(), UNKNOWN_COUNTRY);
}

#[tokio::test]
async fn territory_is_recorded_as_india() {
    let mut countries = MockCountryRepository::new();
    countries
        .expect_find_code_by_name()
        .return_once(|_| Ok(Some(code("IO"))));
    let mut visits = MockVisitedCountryRepository::new();
    visits
        .expect_record_visit()
        .withf(|_, stored| stored.as_ref() == "IN")
        .times(1)
        .return_once(|_, _| Ok(VisitRecorded::Inserted));

    let service = make_service(MockUserRepository::new(), countries, visits);
    let stored = service
        .add_visit(Some(user_id(1)), "British Indian Ocean Territory")
        .await
        .expect("visit recorded");

    assert_eq!(stored.as_ref(), "IN");
}

#[tokio::test]
async fn repeated_visit_reports_conflict() {
    let mut countries = MockCountryRepository::new();
    countries
        .expect_find_code_by_name()
        .return_once(|_| Ok(Some(code("FR"))));
    let mut visits = MockVisitedCountryRepository::new();
    visits
        .expect_record_visit()
        .return_once(|_, _| Ok(VisitRecorded::AlreadyVisited));

    let service = make_service(MockUserRepository::new(), countries, visits);
    let err = service
        .add_visit(Some(user_id(1)), "franc")
        .await
        .expect_err("duplicate");

    assert_eq!(err.code(), ErrorCode::Conflict);
    assert_eq!(err.message(), DUPLICATE_COUNTRY);
}

#[rstest]
#[case(VisitPersistenceError::connection("down"), ErrorCode::ServiceUnavailable)]
#[case(VisitPersistenceError::unknown_user(9), ErrorCode::NotFound)]
#[case(VisitPersistenceError::query("boom"), ErrorCode::InternalError)]
#[tokio::test]
async fn unexpected_write_failures_reuse_unknown_country_message(
    #[case] failure: VisitPersistenceError,
    #[case] expected: ErrorCode,
) {
    let mut countries = MockCountryRepository::new();
    countries
        .expect_find_code_by_name()
        .return_once(|_| Ok(Some(code("FR"))));
    let mut visits = MockVisitedCountryRepository::new();
    visits
        .expect_record_visit()
        .return_once(move |_, _| Err(failure));

    let service = make_service(MockUserRepository::new(), countries, visits);
    let err = service
        .add_visit(Some(user_id(9)), "France")
        .await
        .expect_err("write fails");

    assert_eq!(err.code(), expected);
    assert_eq!(err.message(), UNKNOWN_COUNTRY);
}

#[tokio::test]
async fn lookup_failure_reuses_unknown_country_message() {
    let mut countries = MockCountryRepository::new();
    countries
        .expect_find_code_by_name()
        .return_once(|_| Err(CountryLookupError::connection("refused")));

    let service = make_service(
        MockUserRepository::new(),
        countries,
        MockVisitedCountryRepository::new(),
    );
    let err = service
        .add_visit(Some(user_id(1)), "France")
        .await
        .expect_err("lookup fails");

    assert_eq!(err.message(), UNKNOWN_COUNTRY);
}

#[rstest]
#[case("")]
#[case("  ")]
#[tokio::test]
async fn blank_member_name_never_inserts(#[case] name: &str) {
    let mut users = MockUserRepository::new();
    users.expect_create().never();

    let service = make_service(
        users,
        MockCountryRepository::new(),
        MockVisitedCountryRepository::new(),
    );
    let err = service
        .create_user(name, "#ff0000")
        .await
        .expect_err("blank name");

    assert_eq!(err.code(), ErrorCode::InvalidRequest);
    assert_eq!(err.message(), EMPTY_NAME);
}

#[tokio::test]
async fn member_creation_inserts_once_and_returns_id() {
    let mut users = MockUserRepository::new();
    users
        .expect_create()
        .withf(|new_user| {
            new_user.name().as_ref() == "Ann"
                && new_user.color().map(AsRef::as_ref) == Some("#ff0000")
        })
        .times(1)
        .return_once(|_| Ok(UserId::new(7).expect("valid id")));

    let service = make_service(
        users,
        MockCountryRepository::new(),
        MockVisitedCountryRepository::new(),
    );
    let id = service
        .create_user(" Ann ", "#ff0000")
        .await
        .expect("member created");

    assert_eq!(id.get(), 7);
}

#[rstest]
#[case(UserPersistenceError::connection("down"), ErrorCode::ServiceUnavailable)]
#[case(UserPersistenceError::query("boom"), ErrorCode::InternalError)]
#[tokio::test]
async fn member_creation_failures_use_add_member_message(
    #[case] failure: UserPersistenceError,
    #[case] expected: ErrorCode,
) {
    let mut users = MockUserRepository::new();
    users.expect_create().return_once(move |_| Err(failure));

    let service = make_service(
        users,
        MockCountryRepository::new(),
        MockVisitedCountryRepository::new(),
    );
    let err = service
        .create_user("Ann", "")
        .await
        .expect_err("insert fails");

    assert_eq!(err.code(), expected);
    assert_eq!(err.message(), ADD_MEMBER_FAILED);
}

#[tokio::test]
async fn delete_without_selection_issues_no_query() {
    let mut users = MockUserRepository::new();
    users.expect_delete_with_visits().never();

    let service = make_service(
        users,
        MockCountryRepository::new(),
        MockVisitedCountryRepository::new(),
    );
    let err = service.delete_user(None).await.expect_err("nothing selected");

    assert_eq!(err.message(), NO_USER_SELECTED);
}

#[tokio::test]
async fn delete_removes_selected_member() {
    let mut users = MockUserRepository::new();
    users
        .expect_delete_with_visits()
        .withf(|id| id.get() == 4)
        .times(1)
        .return_once(|_| Ok(()));

    let service = make_service(
        users,
        MockCountryRepository::new(),
        MockVisitedCountryRepository::new(),
    );
    service
        .delete_user(Some(user_id(4)))
        .await
        .expect("member deleted");
}

#[tokio::test]
async fn delete_failure_uses_delete_message() {
    let mut users = MockUserRepository::new();
    users
        .expect_delete_with_visits()
        .return_once(|_| Err(UserPersistenceError::query("deadlock")));

    let service = make_service(
        users,
        MockCountryRepository::new(),
        MockVisitedCountryRepository::new(),
    );
    let err = service
        .delete_user(Some(user_id(4)))
        .await
        .expect_err("delete fails");

    assert_eq!(err.code(), ErrorCode::InternalError);
    assert_eq!(err.message(), DELETE_FAILED);
}
