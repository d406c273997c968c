//! HTML rendering for the home page and the new-member form.
//!
//! Every value that originates from a visitor is escaped before it reaches
//! the markup. Colours additionally pass [`css_color`] because they land
//! inside `style` attributes.

use crate::domain::{HomeView, User};

/// Colour shown when there is no current member or they have none.
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Escape text for use in HTML element content and quoted attributes.
///
/// # Examples
/// ```
/// use travel_tracker::inbound::http::views::escape_html;
///
/// assert_eq!(escape_html("<b>\"Ann\" & 'Bob'</b>"),
///     "&lt;b&gt;&quot;Ann&quot; &amp; &#x27;Bob&#x27;&lt;/b&gt;");
/// ```
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

/// Return `raw` when it looks like a plain CSS colour, else [`DEFAULT_COLOR`].
///
/// Accepts hex values, names and functional notation such as `rgb(1, 2, 3)`.
#[must_use]
pub fn css_color(raw: &str) -> &str {
    let plain = !raw.is_empty()
        && raw.chars().all(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ')
        });
    if plain { raw } else { DEFAULT_COLOR }
}

fn member_color(user: Option<&User>) -> &str {
    user.and_then(User::color)
        .map_or(DEFAULT_COLOR, |color| css_color(color.as_ref()))
}

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Travel Tracker</title>
  <link rel="stylesheet" href="/styles/main.css">
</head>
<body>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

// Tints every map region whose id matches a visited code.
const MAP_SCRIPT: &str = r#"<script>
  const visited = document.getElementById("visited");
  const fill = visited.dataset.color;
  visited.querySelectorAll("li[data-code]").forEach((item) => {
    const region = document.getElementById(item.dataset.code);
    if (region) {
      region.style.fill = fill;
    }
  });
</script>
"#;

/// Render the home page, optionally with an error message.
///
/// # Examples
/// ```
/// use travel_tracker::domain::HomeView;
/// use travel_tracker::inbound::http::views::render_home;
///
/// let html = render_home(&HomeView::default(), Some("No user selected, try again"));
/// assert!(html.contains("Total Countries: 0"));
/// assert!(html.contains("No user selected, try again"));
/// assert!(html.contains("data-color=\"#ffffff\""));
/// ```
#[must_use]
pub fn render_home(view: &HomeView, error: Option<&str>) -> String {
    let color = escape_html(member_color(view.current.as_ref()));
    let mut html = String::from(PAGE_HEAD);

    html.push_str(
        "<form class=\"container\" action=\"/add\" method=\"post\">\n  \
         <input type=\"text\" name=\"country\" placeholder=\"Enter country name\" autofocus>\n  \
         <button type=\"submit\">Add</button>\n</form>\n",
    );
    if let Some(message) = error {
        html.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(message)));
    }
    html.push_str(&format!(
        "<h2 class=\"total-count\">Total Countries: {}</h2>\n",
        view.total()
    ));

    html.push_str("<form class=\"tab-view\" action=\"/user\" method=\"post\">\n");
    for user in &view.users {
        html.push_str(&member_button(user, view.current.as_ref()));
    }
    html.push_str(
        "  <button type=\"submit\" name=\"add\" value=\"new\" id=\"tab\">Add Family Member</button>\n\
         </form>\n\
         <form action=\"/delete\" method=\"post\">\n  \
         <button type=\"submit\" class=\"delete\">Delete Current Member</button>\n\
         </form>\n",
    );

    html.push_str(&format!("<ul id=\"visited\" data-color=\"{color}\">\n"));
    for code in &view.visited {
        let escaped = escape_html(code.as_ref());
        html.push_str(&format!("  <li data-code=\"{escaped}\">{escaped}</li>\n"));
    }
    html.push_str("</ul>\n");
    html.push_str(MAP_SCRIPT);
    html.push_str(PAGE_TAIL);
    html
}

fn member_button(user: &User, current: Option<&User>) -> String {
    let id = user.id();
    let class = if current.is_some_and(|current| current.id() == id) {
        " class=\"current\""
    } else {
        ""
    };
    format!(
        "  <button type=\"submit\" name=\"user\" value=\"{id}\" id=\"user-{id}\"{class} \
         style=\"background-color: {}\">{}</button>\n",
        escape_html(member_color(Some(user))),
        escape_html(user.name().as_ref()),
    )
}

/// Render the form for creating a member.
#[must_use]
pub fn render_new_member_form() -> String {
    let mut html = String::from(PAGE_HEAD);
    html.push_str(&format!(
        "<h1>Add a new family member</h1>\n\
         <form action=\"/new\" method=\"post\">\n  \
         <label for=\"name\">Name</label>\n  \
         <input type=\"text\" id=\"name\" name=\"name\" autofocus>\n  \
         <label for=\"color\">Colour</label>\n  \
         <input type=\"color\" id=\"color\" name=\"color\" value=\"{DEFAULT_COLOR}\">\n  \
         <button type=\"submit\">Add</button>\n\
         </form>\n"
    ));
    html.push_str(PAGE_TAIL);
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CountryCode;
    use rstest::rstest;

    fn user(id: i32, name: &str, color: Option<&str>) -> User {
        User::try_from_parts(id, name, color).expect("valid user")
    }

    #[rstest]
    #[case("#ff0000", "#ff0000")]
    #[case("teal", "teal")]
    #[case("rgb(1, 2, 3)", "rgb(1, 2, 3)")]
    #[case("red; background: url(x)", DEFAULT_COLOR)]
    #[case("\"><script>", DEFAULT_COLOR)]
    #[case("", DEFAULT_COLOR)]
    fn colours_are_filtered(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(css_color(raw), expected);
    }

    #[rstest]
    fn home_shows_current_member_colour_and_visits() {
        let ann = user(1, "Ann", Some("#ff0000"));
        let view = HomeView {
            visited: vec![CountryCode::new("FR").expect("valid code")],
            current: Some(ann.clone()),
            users: vec![ann, user(2, "Bob", None)],
        };

        let html = render_home(&view, None);

        assert!(html.contains("Total Countries: 1"));
        assert!(html.contains("data-color=\"#ff0000\""));
        assert!(html.contains("<li data-code=\"FR\">FR</li>"));
        assert!(html.contains("value=\"1\" id=\"user-1\" class=\"current\""));
        assert!(html.contains("value=\"2\" id=\"user-2\" style=\"background-color: #ffffff\">Bob"));
        assert!(!html.contains("class=\"error\""));
    }

    #[rstest]
    fn member_names_and_errors_are_escaped() {
        let view = HomeView {
            users: vec![user(3, "<img src=x>", None)],
            ..HomeView::default()
        };

        let html = render_home(&view, Some("a < b"));

        assert!(html.contains("&lt;img src=x&gt;"));
        assert!(!html.contains("<img src=x>"));
        assert!(html.contains("<p class=\"error\">a &lt; b</p>"));
    }

    #[rstest]
    fn member_without_colour_uses_default() {
        let bob = user(2, "Bob", None);
        let view = HomeView {
            current: Some(bob.clone()),
            users: vec![bob],
            ..HomeView::default()
        };

        assert!(render_home(&view, None).contains("data-color=\"#ffffff\""));
    }

    #[rstest]
    fn new_member_form_posts_name_and_colour() {
        let html = render_new_member_form();
        assert!(html.contains("action=\"/new\""));
        assert!(html.contains("name=\"name\""));
        assert!(html.contains("name=\"color\""));
    }
}
