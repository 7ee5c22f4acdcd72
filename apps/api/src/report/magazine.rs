//! The personalized "special edition" magazine page.
//!
//! Layout: cover header, hero image, headline with skin type and objective,
//! editorial letter, three-step routine timeline, product grid.

use handlebars::html_escape;
use uuid::Uuid;

use super::pages::document;
use super::Report;
use crate::catalog::{CatalogEntry, Category};

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1596462502278-27bfdd403348?q=80&w=1000&auto=format&fit=crop";

/// Routine steps: (time, title, sentence template). `{product}` is replaced
/// by the escaped product name.
const ROUTINE: [(&str, &str, &str); 3] = [
    (
        "08:00",
        "The Radiant Wake-Up",
        "Cleanse your face with <strong>{product}</strong> to remove the night's impurities. A healthy base is essential.",
    ),
    (
        "08:15",
        "Hydration",
        "Apply the <strong>{product}</strong> serum, then seal in the hydration. Don't forget your SPF!",
    ),
    (
        "22:00",
        "The Restorative Evening",
        "The key moment. Use <strong>{product}</strong> to repair your skin while you sleep.",
    ),
];

/// "COMBINATION-DEHYDRATED" → "combination dehydrated"
fn prose(label: &str) -> String {
    label.to_lowercase().replace('-', " ")
}

fn timeline(entries: [&CatalogEntry; 3]) -> String {
    ROUTINE
        .iter()
        .zip(entries)
        .map(|((time, title, template), entry)| {
            format!(
                r#"<div class="timeline-item">
                <div class="timeline-time">{time}</div>
                <div class="timeline-content">
                    <h3 class="timeline-title">{title}</h3>
                    <p>{text}</p>
                </div>
            </div>"#,
                text = template.replace("{product}", &html_escape(&entry.name)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ")
}

fn product_card(category: Category, entry: &CatalogEntry) -> String {
    format!(
        r#"<div class="product-card">
                <img src="{image}" alt="{name}">
                <div class="product-name">{name}</div>
                <div class="product-price">{price}</div>
                <div class="product-ingredients">{ingredients}</div>
                <div class="product-desc">{description}</div>
            </div>"#,
        image = category.image_url(),
        name = html_escape(&entry.name),
        price = html_escape(&entry.price),
        ingredients = html_escape(&entry.ingredients),
        description = html_escape(&entry.description),
    )
}

/// Shown above the magazine when the reader asks for a download.
pub const PDF_NOTICE: &str =
    "PDF download is not available yet. Your edition stays on this page; use your browser's print dialog to keep a copy.";

/// Renders the full magazine document for a report, with an optional notice
/// banner above the cover.
pub fn render_magazine(report: &Report, session_id: Uuid, notice: Option<&str>) -> String {
    let entries = report.selection.entries();
    let skin_type = report.profile.skin_type.label();
    let concern = report.profile.concern.label();
    let reader = html_escape(&report.reader);

    let cards = Category::ALL
        .into_iter()
        .zip(entries)
        .map(|(category, entry)| product_card(category, entry))
        .collect::<Vec<_>>()
        .join("\n            ");

    let notice_html = notice
        .map(|msg| format!(r#"<div class="notice" role="status">{}</div>"#, html_escape(msg)))
        .unwrap_or_default();

    let body = format!(
        r#"{notice_html}
    <div class="magazine-container">
        <div class="cover-header">
            <h1 class="brand-title">GLOW</h1>
            <div class="issue-details">
                <span>SPECIAL EDITION &bull; AGE {age}</span>
                <span>{issue}</span>
                <span>VOL. 1</span>
            </div>
        </div>

        <div class="cover-hero">
            <img src="{hero}" alt="">
        </div>

        <div class="headline-overlay">
            <div class="sub-headline">ARTIFICIAL INTELLIGENCE REVEALS</div>
            <div class="main-headline">YOUR IDEAL ROUTINE<br>FOR {skin_type} SKIN</div>
            <div class="rule"></div>
            <p><em>Objective: {concern}</em></p>
        </div>

        <div class="editorial-section">
            <h2 class="center">A WORD FROM THE EXPERT</h2>
            <div class="editorial-layout">
                <p><span class="drop-cap">H</span>ello {reader},</p>
                <p>At {age}, your skin has precise needs. Our analysis shows that you have <strong>{skin_prose}</strong> skin.</p>
                <p>What this means: your skin needs help managing its balance. Your priority is <strong>{concern_prose}</strong>.</p>
                <p>We have selected 3 exceptional products for you. Here is your detailed routine.</p>
                <p class="signature">Your Beauty Coach</p>
            </div>
        </div>

        <div class="timeline-section">
            <h2 class="center">YOUR BEAUTY SCHEDULE</h2>
            {timeline}
        </div>

        <div class="product-grid">
            <div class="grid-heading">
                <h2>YOUR PERSONALIZED SELECTION</h2>
                <p>THE PRODUCTS IN YOUR ROUTINE</p>
            </div>
            {cards}
        </div>
    </div>

    <div class="actions">
        <a class="button secondary" href="/sessions/{session_id}/magazine/pdf">DOWNLOAD (PDF)</a>
        <form method="post" action="/sessions/{session_id}/reset">
            <button type="submit" class="button">NEW DIAGNOSIS</button>
        </form>
    </div>"#,
        age = report.age,
        issue = html_escape(&report.issue),
        hero = HERO_IMAGE,
        skin_prose = prose(skin_type),
        concern_prose = prose(concern),
        timeline = timeline(entries),
    );

    document(&format!("GLOW · {}", report.reader), &body)
}
