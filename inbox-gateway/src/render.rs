//! HTML rendering of the inbox page.

use std::fmt::Write as _;

use inbox_core::{InboxController, Message};
use url::form_urlencoded;

const STYLE: &str = r#"
body { margin: 0; min-height: 100vh; display: flex; align-items: center; justify-content: center;
  padding: 24px; box-sizing: border-box; font-family: system-ui, sans-serif;
  background: radial-gradient(circle at top left, #7b5cff, #5b3fd6 40%, #2c165c 100%); }
.card { width: 100%; max-width: 960px; background: #f9fafb; border-radius: 24px; padding: 24px;
  box-shadow: 0 20px 45px rgba(15, 23, 42, 0.4); }
.pill { display: inline-block; padding: 6px 14px; border-radius: 999px; color: #fff; font-size: 13px;
  font-weight: 600; background: linear-gradient(135deg, #6366f1, #8b5cf6); }
.subtitle, .footnote { color: #6b7280; font-size: 14px; }
.input-row { display: flex; gap: 8px; }
.input-row input { flex: 1; padding: 10px 12px; border-radius: 12px; border: 1px solid #d1d5db; }
.button { padding: 10px 16px; border: 0; border-radius: 12px; background: #6366f1; color: #fff; }
.button:disabled { opacity: 0.6; }
.error { margin: 12px 0; padding: 10px 12px; border-radius: 12px; background: #fee2e2; color: #991b1b; }
.layout { display: grid; grid-template-columns: 1fr 1.4fr; gap: 16px; margin-top: 16px; }
.email-list { list-style: none; padding: 0; margin: 0; }
.email-item a { display: block; padding: 10px 12px; border-radius: 12px; color: inherit; text-decoration: none; }
.email-item-active a { background: #ede9fe; }
.email-meta { display: flex; justify-content: space-between; color: #6b7280; font-size: 12px; }
.detail-label { font-weight: 600; margin-right: 6px; }
.detail-body pre { white-space: pre-wrap; background: #fff; padding: 10px; border-radius: 12px; }
.code-value { font-family: monospace; font-size: 20px; letter-spacing: 0.1em; }
"#;

/// Escape text for use in HTML content and double-quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// `dd.mm.yyyy, HH:MM:SS` when the date parses, the raw text otherwise.
#[must_use]
pub fn display_date(message: &Message) -> String {
    match (message.parsed_date(), message.date.as_ref().map(ToString::to_string)) {
        (Some(date), _) => date.format("%d.%m.%Y, %H:%M:%S").to_string(),
        (None, Some(raw)) if !raw.trim().is_empty() => raw,
        (None, _) => "kein Datum".to_owned(),
    }
}

fn page_link(email: &str, selected: &str, find: bool) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("email", email).append_pair("selected", selected);
    if find {
        query.append_pair("find", "1");
    }
    format!("/?{}", query.finish())
}

fn subject_or_placeholder(message: &Message) -> &str {
    message.subject.as_deref().filter(|s| !s.is_empty()).unwrap_or("(kein Betreff)")
}

/// Render the full page for the controller's current state.
#[must_use]
pub fn inbox_page(controller: &InboxController) -> String {
    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"de\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Tinyhost Inbox ansehen</title>\n<style>");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<main class=\"card\">\n");
    html.push_str("<div class=\"pill\">📬 Tinyhost Mail Viewer</div>\n");
    html.push_str("<h1>Tinyhost Inbox ansehen</h1>\n");
    html.push_str(
        "<p class=\"subtitle\">Gib eine <strong>tinyhost</strong>-E-Mail ein (z.B. die von der \
         Startseite generierte Adresse) und sieh dir die empfangenen Mails an.</p>\n",
    );

    write_form(&mut html, controller);
    if let Some(notice) = controller.notice() {
        let _ = writeln!(html, "<div class=\"error\">{}</div>", escape(notice));
    }

    html.push_str("<div class=\"layout\">\n");
    write_list(&mut html, controller);
    write_detail(&mut html, controller);
    html.push_str("</div>\n");

    html.push_str(
        "<p class=\"footnote\">Hinweis: Tinyhost ist ein Dienst für temporäre E-Mails. Bitte nutze \
         ihn verantwortungsvoll und im Rahmen der Nutzungsbedingungen anderer Plattformen. Diese \
         Demo ist nur zum Testen gedacht.</p>\n",
    );
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn write_form(html: &mut String, controller: &InboxController) {
    let disabled = if controller.is_loading() { " disabled" } else { "" };
    let label = if controller.is_loading() { "Lädt..." } else { "Posteingang laden" };
    let _ = write!(
        html,
        "<form method=\"get\" action=\"/\" \
         onsubmit=\"var b=this.querySelector('button');b.disabled=true;b.textContent='Lädt...';\">\n\
         <label for=\"email\">E-Mail-Adresse</label>\n<div class=\"input-row\">\n\
         <input id=\"email\" name=\"email\" type=\"email\" placeholder=\"user@domain.com\" value=\"{}\">\n\
         <button type=\"submit\" class=\"button\"{disabled}>{label}</button>\n</div>\n</form>\n",
        escape(controller.email()),
    );
}

fn write_list(html: &mut String, controller: &InboxController) {
    html.push_str("<section class=\"list\">\n<h2>E-Mail-Liste</h2>\n");
    let messages = controller.messages();
    if controller.is_loading() {
        html.push_str("<p>Bitte warten, E-Mails werden geladen ...</p>\n");
    } else if messages.is_empty() && controller.notice().is_none() {
        html.push_str("<p>Noch keine E-Mails geladen.</p>\n");
    }

    let selected_id = controller.selected().map(|m| &m.id);
    html.push_str("<ul class=\"email-list\">\n");
    for message in messages {
        let class = if selected_id == Some(&message.id) {
            "email-item email-item-active"
        } else {
            "email-item"
        };
        let href = page_link(controller.email(), &message.id.to_string(), false);
        let _ = write!(
            html,
            "<li class=\"{class}\"><a href=\"{}\">\n<div class=\"email-subject\">{}</div>\n\
             <div class=\"email-meta\"><span>{}</span><span>{}</span></div>\n</a></li>\n",
            escape(&href),
            escape(subject_or_placeholder(message)),
            escape(message.sender.as_deref().unwrap_or("Unbekannter Absender")),
            escape(&display_date(message)),
        );
    }
    html.push_str("</ul>\n</section>\n");
}

fn write_detail(html: &mut String, controller: &InboxController) {
    html.push_str("<section class=\"detail\">\n<h2>Details &amp; Code-Suche</h2>\n");
    let Some(message) = controller.selected() else {
        html.push_str("<p>Wähle eine Mail links aus, um Details zu sehen.</p>\n</section>\n");
        return;
    };

    let _ = write!(
        html,
        "<div class=\"detail-card\">\n\
         <div><span class=\"detail-label\">Betreff:</span><span>{}</span></div>\n\
         <div><span class=\"detail-label\">Von:</span><span>{}</span></div>\n\
         <div><span class=\"detail-label\">Datum:</span><span>{}</span></div>\n\
         <div class=\"detail-body\"><span class=\"detail-label\">Inhalt:</span><pre>{}</pre></div>\n",
        escape(subject_or_placeholder(message)),
        escape(message.sender.as_deref().unwrap_or("Unbekannt")),
        escape(&display_date(message)),
        escape(message.body.as_deref().unwrap_or("(kein Textkörper)")),
    );

    let find_href = page_link(controller.email(), &message.id.to_string(), true);
    let _ = write!(
        html,
        "<div class=\"code-finder\">\n<a class=\"button\" href=\"{}\">4–8-stelligen Code in dieser Mail suchen</a>\n",
        escape(&find_href),
    );
    if let Some(code) = controller.code() {
        let _ = write!(
            html,
            "<div class=\"code-output\"><span class=\"detail-label\">Gefundener Code:</span>\
             <span class=\"code-value\">{}</span></div>\n",
            escape(code.display()),
        );
    }
    html.push_str("</div>\n</div>\n</section>\n");
}
