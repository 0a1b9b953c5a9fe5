//! Server-rendered generator page.
//!
//! Tone switching and copy buttons run in the browser; everything else is
//! produced here from `FormState`.

use crate::generation::tone::Tone;
use crate::presentation::form::FormState;
use crate::presentation::numbered_list::{result_view, ResultView};
use crate::prompts::{self, InputKind, PromptInput};

const TITLE: &str = "Instagram Content Generator";

const STYLE: &str = r#"
*{box-sizing:border-box}
body{margin:0;background:#09090b;color:#fff;font-family:system-ui,-apple-system,sans-serif}
main{max-width:56rem;margin:0 auto;padding:2rem 1rem}
h1{font-size:1.875rem;margin:0 0 .75rem}
h2{font-size:1.125rem;margin:0}
.muted{color:#a1a1aa}
.perks{display:flex;flex-wrap:wrap;gap:1rem;list-style:none;padding:0;color:#71717a;font-size:.875rem}
.tabs{display:flex;flex-wrap:wrap;gap:.5rem;margin-bottom:1.5rem}
.tab{padding:.5rem 1rem;border-radius:.5rem;background:#27272a;color:#fff;text-decoration:none;font-size:.875rem}
.tab.active{background:#fff;color:#000}
.card{background:#18181b;border-radius:.75rem;padding:1.5rem;margin-bottom:1.5rem}
.field{margin-top:1rem}
.field label{display:block;font-size:.875rem;color:#a1a1aa;margin-bottom:.5rem}
.field input,.field select{width:100%;background:#27272a;border:1px solid #3f3f46;border-radius:.5rem;padding:.75rem 1rem;color:#fff}
.notice{color:#fca5a5;font-size:.875rem}
#generate{margin-top:1.5rem;width:100%;background:#fff;color:#000;font-weight:600;padding:.75rem;border:0;border-radius:.5rem;cursor:pointer}
#generate:disabled{opacity:.5;cursor:not-allowed}
form.loading .results{opacity:.5}
input[name=tone]{display:none}
input[name=tone]+label{display:inline-block;margin:0 0 1rem .5rem;padding:.25rem .75rem;border-radius:9999px;background:#27272a;font-size:.875rem;cursor:pointer}
input[name=tone]:checked+label{background:#fff;color:#000}
.tone-panel{display:none}
#tone-neutral:checked~#panel-neutral,#tone-fun:checked~#panel-fun,#tone-serious:checked~#panel-serious{display:block}
.items{list-style:none;padding:0;margin:0;display:grid;gap:.75rem}
.item{display:flex;gap:1rem;padding:1rem;background:#27272a;border-radius:.5rem}
.num{flex-shrink:0;width:2rem;height:2rem;background:#fff;color:#000;border-radius:9999px;display:flex;align-items:center;justify-content:center;font-weight:700;font-size:.875rem}
.content{flex:1;color:#e4e4e7}
.block{white-space:pre-wrap;color:#e4e4e7}
.copy,.copy-all{background:#3f3f46;color:#fff;border:0;border-radius:.375rem;padding:.25rem .75rem;font-size:.75rem;cursor:pointer}
.copy-all{margin-top:1rem;padding:.5rem 1rem;font-size:.875rem;background:#27272a}
"#;

const SCRIPT: &str = r#"
const form = document.getElementById('generator');
const button = document.getElementById('generate');
const sync = () => { if (!form.classList.contains('loading')) button.disabled = !form.checkValidity(); };
form.addEventListener('input', sync);
form.addEventListener('change', sync);
form.addEventListener('submit', () => {
  form.classList.add('loading');
  button.disabled = true;
  button.textContent = 'Generating...';
});
document.addEventListener('click', (event) => {
  const target = event.target.closest('[data-copy]');
  if (target) navigator.clipboard.writeText(target.dataset.copy);
});
"#;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders the whole page. `notice` is shown above the form fields.
pub fn render_page(form: &FormState, notice: Option<&str>) -> String {
    let prompt = form.prompt();
    let mut html = String::with_capacity(8 * 1024);

    push_head(&mut html);

    html.push_str(&format!("<header>\n<h1>{TITLE}</h1>\n"));
    html.push_str(&format!(
        "<p class=\"muted\">{} AI-powered tools to create scroll-stopping Instagram content in seconds.</p>\n",
        prompts::PROMPT_ORDER.len()
    ));
    html.push_str(&format!(
        "<ul class=\"perks\"><li>&#10003; Copy-paste ready content</li><li>&#10003; {} tone options</li><li>&#10003; No fluff, just actionable ideas</li></ul>\n</header>\n",
        Tone::ALL.len()
    ));

    push_tabs(&mut html, Some(prompt.id));

    html.push_str(&format!(
        "<form id=\"generator\" method=\"post\" action=\"/prompts/{}\">\n<section class=\"card\">\n",
        prompt.id
    ));
    html.push_str(&format!(
        "<h2>{}</h2>\n<p class=\"muted\">{}</p>\n",
        escape_html(prompt.name),
        escape_html(prompt.description)
    ));
    if let Some(notice) = notice {
        html.push_str(&format!("<p class=\"notice\">{}</p>\n", escape_html(notice)));
    }
    for input in prompt.inputs {
        render_field(&mut html, input, form.value(input.id));
    }
    let disabled = if form.is_complete() { "" } else { " disabled" };
    html.push_str(&format!(
        "<button type=\"submit\" id=\"generate\"{disabled}>Generate</button>\n</section>\n"
    ));

    if form.results().is_some() {
        render_results(&mut html, form);
    }

    html.push_str(&format!("</form>\n</main>\n<script>{SCRIPT}</script>\n</body>\n</html>\n"));
    html
}

/// Page for a prompt id that is not in the catalog. Tabs still link to every prompt.
pub fn render_not_found(message: &str) -> String {
    let mut html = String::with_capacity(4 * 1024);

    push_head(&mut html);
    html.push_str(&format!("<header>\n<h1>{TITLE}</h1>\n</header>\n"));
    push_tabs(&mut html, None);
    html.push_str(&format!(
        "<section class=\"card\">\n<h2>Not found</h2>\n<p class=\"notice\">{}</p>\n<p><a class=\"tab\" href=\"/\">Back to the generator</a></p>\n</section>\n",
        escape_html(message)
    ));
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn push_head(html: &mut String) {
    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<main>\n"));
}

fn push_tabs(html: &mut String, active: Option<&str>) {
    html.push_str("<nav class=\"tabs\">\n");
    for tab in prompts::ordered() {
        let class = if Some(tab.id) == active { "tab active" } else { "tab" };
        html.push_str(&format!(
            "<a class=\"{class}\" href=\"/prompts/{}\">{}</a>\n",
            tab.id,
            escape_html(tab.name)
        ));
    }
    html.push_str("</nav>\n");
}

fn render_field(html: &mut String, input: &PromptInput, value: &str) {
    let id = input.id;
    html.push_str(&format!(
        "<div class=\"field\">\n<label for=\"field-{id}\">{}</label>\n",
        escape_html(input.label)
    ));

    match input.kind {
        InputKind::Select => {
            html.push_str(&format!(
                "<select id=\"field-{id}\" name=\"{id}\" required>\n<option value=\"\">Select...</option>\n"
            ));
            for option in input.options.unwrap_or_default() {
                let selected = if *option == value { " selected" } else { "" };
                html.push_str(&format!(
                    "<option value=\"{0}\"{selected}>{0}</option>\n",
                    escape_html(option)
                ));
            }
            html.push_str("</select>\n");
        }
        InputKind::Text | InputKind::Number => {
            let (kind, pattern) = match input.kind {
                InputKind::Number => ("number", ""),
                _ => ("text", " pattern=\".*\\S.*\""),
            };
            html.push_str(&format!(
                "<input id=\"field-{id}\" name=\"{id}\" type=\"{kind}\" value=\"{}\" placeholder=\"{}\" required{pattern}>\n",
                escape_html(value),
                escape_html(input.placeholder.unwrap_or_default())
            ));
        }
    }

    html.push_str("</div>\n");
}

fn render_results(html: &mut String, form: &FormState) {
    let Some(results) = form.results() else {
        return;
    };

    html.push_str("<section class=\"card results\">\n<span class=\"muted\">Tone:</span>\n");

    for tone in Tone::ALL {
        let checked = if tone == form.tone() { " checked" } else { "" };
        let title = match tone.modifier() {
            "" => String::new(),
            modifier => format!(" title=\"{}\"", escape_html(modifier)),
        };
        html.push_str(&format!(
            "<input type=\"radio\" name=\"tone\" id=\"tone-{0}\" value=\"{0}\"{checked}><label for=\"tone-{0}\"{title}>{1}</label>\n",
            tone.id(),
            tone.label()
        ));
    }

    for tone in Tone::ALL {
        let text = results.get(tone);
        html.push_str(&format!(
            "<div class=\"tone-panel\" id=\"panel-{}\">\n",
            tone.id()
        ));

        match result_view(text) {
            ResultView::List(items) => {
                html.push_str("<ol class=\"items\">\n");
                for item in items {
                    let content = escape_html(&item.content);
                    html.push_str(&format!(
                        "<li class=\"item\"><span class=\"num\">{}</span><div class=\"content\">{content}</div><button type=\"button\" class=\"copy\" data-copy=\"{content}\">Copy</button></li>\n",
                        escape_html(&item.number)
                    ));
                }
                html.push_str("</ol>\n");
            }
            ResultView::Block(text) => {
                html.push_str(&format!("<div class=\"block\">{}</div>\n", escape_html(text)));
            }
        }

        html.push_str(&format!(
            "<button type=\"button\" class=\"copy-all\" data-copy=\"{}\">Copy All</button>\n</div>\n",
            escape_html(text)
        ));
    }

    html.push_str("</section>\n");
}
