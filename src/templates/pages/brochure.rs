use crate::listings::Brochure;
use crate::templates::print_layout;
use maud::{html, Markup};

pub fn brochure_page(brochure: &Brochure) -> Markup {
    let content = html! {
        h1 { (brochure.title) }
        p class="code" { "Código: " (brochure.code) }

        h2 { "Información de la Propiedad" }
        ul class="details" {
            @for line in &brochure.details {
                li { (line) }
            }
        }

        h2 { "Imágenes" }
        @if let Some(url) = &brochure.image_url {
            img class="hero" src=(url) alt=(brochure.title);
        } @else {
            p class="muted" { "(Imagen no disponible)" }
        }

        @if let Some(video) = &brochure.video_url {
            p class="no-print" {
                a href=(video) target="_blank" rel="noopener" { "Ver vídeo" }
            }
        }

        p class="no-print" {
            button type="button" onclick="window.print()" { "Descargar PDF" }
        }
    };

    print_layout(&brochure.filename, content)
}
