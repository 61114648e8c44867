//! HTML page rendering
//!
//! Assembles the gallery page: header, one `article.thumb` block per
//! resolved image, and the social-link footer. Every interpolated value is
//! escaped for HTML attribute context.

use crate::models::{Config, GalleryImage};
use chrono::{Datelike, Local};

/// Escape a value for HTML attribute (and text) context.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

fn thumb_block(image: &GalleryImage) -> String {
    let url = escape_attr(&image.url);
    format!(
        r#"                        <article class="thumb">
                            <a href="{url}" class="image"><img src="{url}" loading="lazy" /></a>
                            <h2>Magna feugiat lorem</h2>
                            <p>Nunc blandit nisi ligula magna sodales lectus elementum non. Integer id venenatis velit.</p>
                        </article>
"#
    )
}

fn social_item(href: &str, icon: &str, label: &str) -> String {
    format!(
        r#"                                <li><a href="{}" class="icon {}"><span class="label">{}</span></a></li>
"#,
        escape_attr(href),
        icon,
        label
    )
}

/// Render the complete gallery page.
///
/// `images` holds only successfully resolved entries; unresolved keys must
/// already have been dropped by the caller.
pub fn render_page(config: &Config, images: &[GalleryImage]) -> String {
    let title = escape_attr(&config.title);
    let thumbs: String = images.iter().map(thumb_block).collect();
    let year = Local::now().year();

    let socials: String = [
        (config.social.telegram.as_str(), "fa-telegram", "Telegram"),
        (config.social.twitter.as_str(), "fa-twitter", "Twitter"),
        (config.social.facebook.as_str(), "fa-facebook", "Facebook"),
        (config.social.instagram.as_str(), "fa-instagram", "Instagram"),
        (config.social.github.as_str(), "fa-github", "GitHub"),
        (config.social.dribbble.as_str(), "fa-dribbble", "Dribbble"),
        (config.social.linkedin.as_str(), "fa-linkedin", "LinkedIn"),
        (
            config.social.mastodon.as_str(),
            "fa-brands fa-mastodon",
            "Mastodon",
        ),
    ]
    .iter()
    .map(|(href, icon, label)| social_item(href, icon, label))
    .collect();

    format!(
        r##"<!DOCTYPE HTML>
<html>
    <head>
        <title>{title}</title>
        <meta charset="utf-8" />
        <meta name="viewport" content="width=device-width, initial-scale=1, user-scalable=no" />
        <link rel="stylesheet" href="assets/css/main.css" />
    </head>
    <body>
        <!-- Wrapper -->
        <div id="wrapper">
            <!-- Header -->
            <header id="header">
                <h1><a href="/"><strong>HOME</strong></a></h1>
                <nav>
                    <ul>
                        <li><a href="#footer" class="icon fa-info-circle">About</a></li>
                    </ul>
                </nav>
            </header>

            <!-- Main -->
            <div id="main">
{thumbs}            </div>

            <!-- Footer -->
            <footer id="footer" class="panel">
                <div class="inner split">
                    <div>
                        <section>
                            <h2>{title}</h2>
                            <p>{section_description}</p>
                        </section>
                        <section>
                            <h2>Follow me on ...</h2>
                            <ul class="icons">
{socials}                            </ul>
                        </section>
                        <p class="copyright">
                            &copy; {year} {title}
                        </p>
                    </div>
                    <div>
                        <section>
                            <h2>{footer_title}</h2>
                            <p>{footer_text}</p>
                        </section>
                    </div>
                </div>
            </footer>
        </div>
        <!-- Scripts -->
        <script src="assets/js/jquery.min.js"></script>
        <script src="assets/js/jquery.poptrox.min.js"></script>
        <script src="assets/js/skel.min.js"></script>
        <script src="assets/js/util.js"></script>
        <script src="assets/js/main.js"></script>
    </body>
</html>
"##,
        section_description = escape_attr(&config.section_description),
        footer_title = escape_attr(&config.footer_title),
        footer_text = escape_attr(&config.footer_text),
    )
}
