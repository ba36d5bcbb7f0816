//! Server-rendered dashboard page.
//!
//! The page carries the DOM contract the frontend binds to: one form,
//! result container and chart container per analytics form, all named
//! from [`common::FormKind`].

use common::upload::ALLOWED_IMAGE_EXTENSIONS;
use common::{FieldKind, FieldSpec, FormKind, RequestEncoding};

const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";
const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.2/dist/css/bootstrap.min.css";
const FRONTEND_MODULE: &str = "/static/pkg/frontend.js";

struct Html {
    buf: String,
}

impl Html {
    fn new() -> Self {
        Self { buf: String::with_capacity(8 * 1024) }
    }

    fn push<S: AsRef<str>>(&mut self, s: S) {
        self.buf.push_str(s.as_ref());
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Render the full dashboard page. `api_base_url` is handed to the
/// frontend through `<body data-api-base>`.
pub fn render_dashboard(api_base_url: &str) -> String {
    let mut w = Html::new();

    w.push("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    w.push("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    w.push("<title>Smart Farming Analytics</title>");
    w.push(format!("<link rel=\"stylesheet\" href=\"{}\">", BOOTSTRAP_CSS));
    w.push(format!("<script src=\"{}\"></script>", PLOTLY_SRC));
    w.push("</head>");

    w.push(format!("<body data-api-base=\"{}\">", esc(api_base_url)));
    w.push("<main class=\"container py-4\"><h1 class=\"mb-4\">Smart Farming Analytics</h1>");
    w.push("<div class=\"row g-4\">");
    for kind in FormKind::ALL {
        write_form_section(&mut w, kind);
    }
    w.push("</div></main>");

    w.push(format!(
        "<script type=\"module\">import init from \"{}\"; init();</script>",
        FRONTEND_MODULE
    ));
    w.push("</body></html>");

    w.finish()
}

fn write_form_section(w: &mut Html, kind: FormKind) {
    w.push("<section class=\"col-lg-6\"><div class=\"card\"><div class=\"card-body\">");
    w.push(format!("<h2 class=\"h5 card-title\">{}</h2>", esc(kind.title())));

    let enctype = match kind.encoding() {
        RequestEncoding::Multipart => " enctype=\"multipart/form-data\"",
        RequestEncoding::Json => "",
    };
    w.push(format!("<form id=\"{}\"{}>", kind.form_id(), enctype));
    for field in kind.fields() {
        write_field(w, kind, field);
    }
    w.push("<button type=\"submit\" class=\"btn btn-success\">Analyze</button></form>");

    w.push(format!("<div id=\"{}\" class=\"mt-3\"></div>", kind.result_id()));
    w.push(format!(
        "<div id=\"{}\" class=\"mt-3\" style=\"height: 320px;\"></div>",
        kind.chart_id()
    ));
    w.push("</div></div></section>");
}

fn write_field(w: &mut Html, kind: FormKind, field: &FieldSpec) {
    let id = format!("{}-{}", kind.form_id(), field.name);
    w.push("<div class=\"mb-2\">");
    w.push(format!(
        "<label class=\"form-label\" for=\"{}\">{}</label>",
        esc(&id),
        esc(field.label)
    ));

    let common_attrs = format!(
        "id=\"{}\" name=\"{}\" class=\"form-control\"",
        esc(&id),
        esc(field.name)
    );
    let placeholder = esc(field.placeholder);
    match field.kind {
        FieldKind::Number => w.push(format!(
            "<input type=\"number\" step=\"any\" {} placeholder=\"{}\" required>",
            common_attrs, placeholder
        )),
        FieldKind::Text => w.push(format!(
            "<input type=\"text\" {} placeholder=\"{}\">",
            common_attrs, placeholder
        )),
        FieldKind::TextArea => w.push(format!(
            "<textarea rows=\"3\" {} placeholder=\"{}\"></textarea>",
            common_attrs, placeholder
        )),
        FieldKind::File => {
            let accept: Vec<String> = ALLOWED_IMAGE_EXTENSIONS
                .iter()
                .map(|ext| format!(".{}", ext))
                .collect();
            w.push(format!(
                "<input type=\"file\" {} accept=\"{}\">",
                common_attrs,
                accept.join(",")
            ));
        }
    }
    w.push("</div>");
}

/// Minimal HTML escaping for text and attribute values.
fn esc<S: AsRef<str>>(s: S) -> String {
    let mut out = String::with_capacity(s.as_ref().len() + 8);
    for ch in s.as_ref().chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_carries_every_dom_id() {
        let page = render_dashboard("");
        for kind in FormKind::ALL {
            assert!(page.contains(&format!("id=\"{}\"", kind.form_id())));
            assert!(page.contains(&format!("id=\"{}\"", kind.result_id())));
            assert!(page.contains(&format!("id=\"{}\"", kind.chart_id())));
            for field in kind.fields() {
                assert!(page.contains(&format!("name=\"{}\"", field.name)));
            }
        }
    }

    #[test]
    fn only_pest_form_is_multipart() {
        let page = render_dashboard("");
        assert_eq!(page.matches("multipart/form-data").count(), 1);
        assert!(page.contains("<form id=\"pestDetectionForm\" enctype=\"multipart/form-data\">"));
        assert!(page.contains("accept=\".png,.jpg,.jpeg,.gif\""));
    }

    #[test]
    fn api_base_is_escaped_into_body() {
        let page = render_dashboard("http://x\"><script>");
        assert!(page.contains("<body data-api-base=\"http://x&quot;&gt;&lt;script&gt;\">"));
    }

    #[test]
    fn esc_handles_all_special_characters() {
        assert_eq!(esc("a&b<c>d\"e'f"), "a&amp;b&lt;c&gt;d&quot;e&#39;f");
        assert_eq!(esc("plain"), "plain");
    }
}
