use maud::{html, Markup, DOCTYPE};

/// Bare A4 page meant for "print to PDF".
pub fn print_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style {
                    "@page { size: A4; margin: 20mm; }"
                    "body { font-family: Helvetica, Arial, sans-serif; color: #111; max-width: 170mm; margin: 0 auto; }"
                    "h1 { font-size: 24pt; margin: 0 0 4mm; }"
                    ".code { color: #646464; font-size: 12pt; margin-bottom: 10mm; }"
                    "h2 { font-size: 14pt; margin: 8mm 0 4mm; }"
                    "ul.details { list-style: none; padding: 0; font-size: 11pt; line-height: 1.6; }"
                    "img.hero { width: 100%; max-height: 150mm; object-fit: cover; }"
                    ".muted { color: #969696; font-size: 10pt; }"
                    "@media print { .no-print { display: none; } }"
                }
            }
            body {
                (content)
            }
        }
    }
}
