//! Server-rendered form page: selectors, event field, banners, result text area.

use crate::errors::AppError;
use crate::excuse::models::{ExcuseInput, Intensity, Recipient};
use crate::llm_client::MODEL;
use crate::ui::source::{DEFAULT_SOURCE, SOURCE_FILES};

const STYLE: &str = r#"<style>
  body { font-family: system-ui, sans-serif; margin: 0; display: flex; min-height: 100vh; }
  aside { width: 260px; background: #f0f2f6; padding: 24px; box-sizing: border-box; }
  main { flex: 1; max-width: 720px; margin: 0 auto; padding: 32px; }
  .blurb { background-color: #f0f2f6; padding: 10px; border-radius: 5px; margin-bottom: 20px; }
  .row { display: flex; gap: 16px; }
  .row label { flex: 1; }
  label { display: block; margin-bottom: 12px; }
  input, select, textarea { width: 100%; box-sizing: border-box; padding: 6px; margin-top: 4px; }
  button { width: 100%; background-color: #FF4B4B; color: white; font-weight: bold; padding: 10px; border: 0; border-radius: 5px; }
  .banner { padding: 10px; border-radius: 5px; margin: 16px 0; }
  .success { background: #dff5e3; color: #185c2b; }
  .warning { background: #fff6d6; color: #7a5b00; }
  .error { background: #fde2e2; color: #8a1c1c; }
  .levels { display: flex; justify-content: space-between; font-size: 0.8em; color: grey; }
  .sources { font-size: 0.85em; padding-left: 18px; }
  .spinner { display: none; text-align: center; margin-top: 8px; color: grey; }
  footer { text-align: center; color: grey; margin-top: 32px; border-top: 1px solid #ddd; padding-top: 12px; }
</style>"#;

const LOADING_SCRIPT: &str = r#"<script>
  document.getElementById("excuse-form").addEventListener("submit", function () {
    document.getElementById("generate").disabled = true;
    document.getElementById("spinner").style.display = "block";
  });
</script>"#;

/// Result of one interaction, as shown on the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Idle,
    Warning(String),
    Failed(String),
    Generated(String),
}

impl Outcome {
    pub fn from_result(result: Result<String, AppError>) -> Self {
        match result {
            Ok(text) => Outcome::Generated(text),
            Err(e @ AppError::Validation(_)) => Outcome::Warning(e.user_message()),
            Err(e) => Outcome::Failed(e.user_message()),
        }
    }
}

/// Everything needed to render the page for the current render cycle.
#[derive(Debug, Clone)]
pub struct PageView {
    pub api_key: String,
    pub recipient: Recipient,
    pub intensity: Intensity,
    pub event: String,
    pub outcome: Outcome,
}

impl PageView {
    pub fn idle() -> Self {
        Self::from_input(ExcuseInput::default(), Outcome::Idle)
    }

    /// Keeps the submitted field contents so the form re-renders as the user left it.
    pub fn from_input(input: ExcuseInput, outcome: Outcome) -> Self {
        Self {
            api_key: input.api_key,
            recipient: input.recipient,
            intensity: input.intensity,
            event: input.event,
            outcome,
        }
    }
}

pub fn render_page(view: &PageView) -> String {
    let recipient_options: String = Recipient::ALL
        .iter()
        .map(|&r| option(r.label(), r == view.recipient))
        .collect();
    let intensity_levels: String = Intensity::ALL
        .iter()
        .map(|&i| {
            format!(
                r#"<option value="{}" label="{}"></option>"#,
                i.level(),
                html_escape(i.label())
            )
        })
        .collect();
    let intensity_ticks: String = Intensity::ALL
        .iter()
        .map(|&i| format!("<span>{}</span>", html_escape(i.label())))
        .collect();
    let source_links: String = SOURCE_FILES
        .iter()
        .map(|(name, _)| {
            let name = html_escape(name);
            format!(r#"<li><a href="/source/{name}" download>{name}</a></li>"#)
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>ExcuseGen | AI Powered</title>
{style}
</head>
<body>
<form id="excuse-form" method="post" action="/generate" style="display: contents;">
<aside>
  <h2>Settings</h2>
  <label>OpenAI API Key
    <input type="password" name="api_key" placeholder="sk-..." value="{api_key}" autocomplete="off">
  </label>
  <hr>
  <p><strong>Developer Mode</strong></p>
  <p><a href="/source" download>Download Source Code</a> ({default_source})</p>
  <ul class="sources">{source_links}</ul>
  <p class="banner success">Built with Rust &amp; {model}.</p>
</aside>
<main>
  <h1>Executive Excuse Generator</h1>
  <div class="blurb">
    <strong>The Problem:</strong> You have plans. You don't want to go.<br>
    <strong>The Solution:</strong> AI-crafted text messages optimized for social preservation.
  </div>
  <div class="row">
    <label>Who is the recipient?
      <select name="recipient">{recipient_options}</select>
    </label>
    <label>Excuse Intensity
      <input type="range" name="intensity" min="0" max="{max_level}" step="1" value="{level}" list="intensity-levels">
      <datalist id="intensity-levels">{intensity_levels}</datalist>
      <div class="levels">{intensity_ticks}</div>
    </label>
  </div>
  <label>What is the event?
    <input type="text" name="event" placeholder="e.g., The quarterly budget meeting" value="{event}">
  </label>
  <button id="generate" type="submit">Generate Professional Excuse</button>
  <div id="spinner" class="spinner">Consulting the excuse database...</div>
  {outcome}
  <footer>&copy; 2025 | Built for the Dynamic Project Interview</footer>
</main>
</form>
{script}
</body>
</html>"#,
        style = STYLE,
        api_key = html_escape(&view.api_key),
        model = MODEL,
        recipient_options = recipient_options,
        default_source = DEFAULT_SOURCE,
        source_links = source_links,
        max_level = Intensity::ALL.len() - 1,
        level = view.intensity.level(),
        intensity_levels = intensity_levels,
        intensity_ticks = intensity_ticks,
        event = html_escape(&view.event),
        outcome = render_outcome(&view.outcome),
        script = LOADING_SCRIPT,
    )
}

fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Idle => String::new(),
        Outcome::Warning(msg) => {
            format!(r#"<div class="banner warning">⚠️ {}</div>"#, html_escape(msg))
        }
        Outcome::Failed(msg) => {
            format!(r#"<div class="banner error">{}</div>"#, html_escape(msg))
        }
        Outcome::Generated(text) => format!(
            r#"<div class="banner success">Draft Generated Successfully:</div>
  <label>Copy this text:
    <textarea id="result" rows="4" readonly>
{}</textarea>
  </label>"#,
            html_escape(text)
        ),
    }
}

fn option(label: &str, selected: bool) -> String {
    let label = html_escape(label);
    let selected = if selected { " selected" } else { "" };
    format!(r#"<option value="{label}"{selected}>{label}</option>"#)
}

/// Escapes HTML so user text and completions render as plain text.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_page_lists_all_options_and_no_banner() {
        let html = render_page(&PageView::idle());
        for r in Recipient::ALL {
            assert!(html.contains(r.label()));
        }
        for i in Intensity::ALL {
            assert!(html.contains(i.label()));
        }
        assert!(html.contains(r#"<option value="My Boss" selected>"#));
        assert!(html.contains(r#"type="range" name="intensity" min="0" max="3" step="1" value="0""#));
        assert!(!html.contains("<textarea"));
        assert!(!html.contains("banner warning"));
        assert!(!html.contains("banner error"));
    }

    #[test]
    fn test_credential_field_is_masked() {
        let html = render_page(&PageView::idle());
        assert!(html.contains(r#"type="password" name="api_key""#));
    }

    #[test]
    fn test_generated_text_fills_text_area_verbatim() {
        let view = PageView::from_input(
            ExcuseInput::default(),
            Outcome::Generated("Sorry, can't make it tonight.".to_string()),
        );
        let html = render_page(&view);
        assert!(html.contains("Draft Generated Successfully:"));
        assert!(html.contains("readonly>\nSorry, can't make it tonight.</textarea>"));
    }

    #[test]
    fn test_leading_newline_in_completion_survives_parsing() {
        let view = PageView::from_input(
            ExcuseInput::default(),
            Outcome::Generated("\nSorry, can't make it tonight.".to_string()),
        );
        let html = render_page(&view);
        // The parser strips exactly one newline after the start tag.
        assert!(html.contains("readonly>\n\nSorry, can't make it tonight.</textarea>"));
    }

    #[test]
    fn test_loading_indicator_is_wired_to_submit() {
        let html = render_page(&PageView::idle());
        assert!(html.contains(
            r#"<div id="spinner" class="spinner">Consulting the excuse database...</div>"#
        ));
        assert!(html.contains(r#"<form id="excuse-form""#));
        assert!(html.contains(r#"addEventListener("submit""#));
        assert!(html.contains(r#"getElementById("spinner").style.display = "block""#));
        assert!(html.contains(r#"getElementById("generate").disabled = true"#));
    }

    #[test]
    fn test_every_source_file_is_linked() {
        let html = render_page(&PageView::idle());
        assert!(html.contains(r#"<a href="/source" download>Download Source Code</a>"#));
        for (name, _) in SOURCE_FILES {
            assert!(
                html.contains(&format!(r#"<a href="/source/{name}" download>{name}</a>"#)),
                "missing download link for {name}"
            );
        }
    }

    #[test]
    fn test_intensity_slider_lists_levels_in_order() {
        let html = render_page(&PageView::idle());
        for intensity in Intensity::ALL {
            assert!(html.contains(&format!(
                r#"<option value="{}" label="{}"></option>"#,
                intensity.level(),
                intensity.label()
            )));
        }
        let ticks: Vec<usize> = Intensity::ALL
            .iter()
            .map(|i| html.find(&format!("<span>{}</span>", i.label())).unwrap())
            .collect();
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_footer() {
        let html = render_page(&PageView::idle());
        assert!(html.contains("<footer>&copy; 2025 | Built for the Dynamic Project Interview</footer>"));
    }

    #[test]
    fn test_failed_outcome_has_error_banner_and_no_text_area() {
        let view = PageView::from_input(
            ExcuseInput::default(),
            Outcome::Failed("Connection Error: bad key".to_string()),
        );
        let html = render_page(&view);
        assert!(html.contains(r#"<div class="banner error">Connection Error: bad key</div>"#));
        assert!(!html.contains("<textarea"));
    }

    #[test]
    fn test_submitted_choices_stay_selected() {
        let input = ExcuseInput {
            recipient: Recipient::FirstDate,
            intensity: Intensity::SeriousEmergency,
            event: "dinner".to_string(),
            ..Default::default()
        };
        let html = render_page(&PageView::from_input(input, Outcome::Idle));
        assert!(html.contains(r#"<option value="A First Date" selected>"#));
        assert!(html.contains(r#"name="intensity" min="0" max="3" step="1" value="2""#));
        assert!(html.contains(r#"value="dinner""#));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let input = ExcuseInput {
            event: "<script>alert(1)</script>".to_string(),
            ..Default::default()
        };
        let html = render_page(&PageView::from_input(
            input,
            Outcome::Generated("<b>hi</b>".to_string()),
        ));
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
    }

    #[test]
    fn test_outcome_from_validation_is_warning() {
        let outcome = Outcome::from_result(Err(AppError::Validation("missing".to_string())));
        assert_eq!(outcome, Outcome::Warning("missing".to_string()));
    }

    #[test]
    fn test_outcome_from_auth_is_failed_with_description() {
        let outcome = Outcome::from_result(Err(AppError::Auth("Invalid key".to_string())));
        match outcome {
            Outcome::Failed(msg) => assert!(msg.contains("Invalid key")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
