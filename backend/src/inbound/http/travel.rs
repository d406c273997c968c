//! Page handlers.
//!
//! ```text
//! GET  /                                  home page
//! POST /add     country=France            record a visit
//! POST /user    user=2 | add=new          switch member or open the form
//! POST /new     name=Ann&color=#ff0000    create a member
//! POST /delete                            delete the current member
//! ```
//!
//! Successful mutations redirect to `/`. Failures re-render the home page
//! with the error's message and a `200 OK` status.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{Error, HomeView, UserId};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{render_home, render_new_member_form};

/// Form body for `POST /add`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddCountryForm {
    /// Country name, or part of one, as typed.
    pub country: String,
}

/// Form body for `POST /user`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SwitchUserForm {
    /// `new` when the "Add Family Member" tab was pressed.
    pub add: Option<String>,
    /// Selected member id as submitted by the tab button.
    pub user: Option<String>,
}

/// Form body for `POST /new`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewMemberForm {
    /// Member name.
    pub name: String,
    /// Display colour, blank for the default.
    pub color: String,
}

const NEW_MEMBER_MARKER: &str = "new";

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

fn redirect_home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

/// Re-render the home page with `error`'s message.
///
/// When the page itself cannot be assembled, empty data is shown alongside
/// the failed action's message.
async fn rerender_with_error(
    state: &HttpState,
    current: Option<UserId>,
    error: &Error,
) -> HttpResponse {
    debug!(code = %error.code(), message = error.message(), "re-rendering with error");
    let view = match state.home.home(current).await {
        Ok(view) => view,
        Err(page_error) => {
            warn!(code = %page_error.code(), "home page unavailable after failed action");
            HomeView::default()
        }
    };
    html(render_home(&view, Some(error.message())))
}

/// Show the current member's visits, the member tabs and any error.
#[get("/")]
pub async fn home(state: web::Data<HttpState>, session: SessionContext) -> HttpResponse {
    let current = session.current_user(state.default_user);
    match state.home.home(current).await {
        Ok(view) => html(render_home(&view, None)),
        Err(error) => {
            warn!(code = %error.code(), "home page unavailable");
            html(render_home(&HomeView::default(), Some(error.message())))
        }
    }
}

/// Record a visit for the current member.
#[post("/add")]
pub async fn add_country(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<AddCountryForm>,
) -> HttpResponse {
    let current = session.current_user(state.default_user);
    match state.commands.add_visit(current, &form.country).await {
        Ok(_) => redirect_home(),
        Err(error) => rerender_with_error(&state, current, &error).await,
    }
}

/// Switch the current member, or show the new-member form.
///
/// A selector that is not a positive integer clears the selection. No
/// existence check is made.
#[post("/user")]
pub async fn switch_user(session: SessionContext, form: web::Form<SwitchUserForm>) -> HttpResponse {
    if form.add.as_deref() == Some(NEW_MEMBER_MARKER) {
        return html(render_new_member_form());
    }
    let selection = form.user.as_deref().and_then(UserId::parse_selection);
    if let Err(error) = session.select_user(selection) {
        warn!(message = error.message(), "could not store member selection");
    }
    redirect_home()
}

/// Create a member and make them current.
#[post("/new")]
pub async fn create_member(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<NewMemberForm>,
) -> HttpResponse {
    match state.commands.create_user(&form.name, &form.color).await {
        Ok(id) => {
            if let Err(error) = session.select_user(Some(id)) {
                warn!(message = error.message(), "could not store new member selection");
            }
            redirect_home()
        }
        Err(error) => {
            let current = session.current_user(state.default_user);
            rerender_with_error(&state, current, &error).await
        }
    }
}

/// Delete the current member and their visits.
///
/// The selection is left in place, so the page shows no member until
/// another is chosen.
#[post("/delete")]
pub async fn delete_member(state: web::Data<HttpState>, session: SessionContext) -> HttpResponse {
    let current = session.current_user(state.default_user);
    match state.commands.delete_user(current).await {
        Ok(()) => redirect_home(),
        Err(error) => rerender_with_error(&state, current, &error).await,
    }
}

/// Register every page route.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use travel_tracker::inbound::http::travel::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(add_country)
        .service(switch_user)
        .service(create_member)
        .service(delete_member);
}
