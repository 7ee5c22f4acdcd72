/// Shared stylesheet for all GLOW pages (burgundy on blush, serif headings).
pub const CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Playfair+Display:ital,wght@0,400;0,700;1,400&family=Lato:wght@300;400;700&display=swap');
body { margin: 0; background: #fff7f9; color: #5e1223; font-family: 'Lato', sans-serif; }
h1, h2, h3 { font-family: 'Playfair Display', serif; }
.page { max-width: 900px; margin: 0 auto; padding: 40px 20px; }
.brand-hero { text-align: center; font-size: 6rem; margin: 50px 0 0; letter-spacing: 0.1em; }
.tagline { text-align: center; font-size: 1.2rem; margin-bottom: 50px; letter-spacing: 0.2em; }
.button { display: inline-block; background: #5e1223; color: #fff; border: none; padding: 14px 32px; letter-spacing: 0.15em; text-decoration: none; cursor: pointer; font-size: 0.9rem; }
.button.secondary { background: transparent; color: #5e1223; border: 1px solid #5e1223; }
.center { text-align: center; }
.intro { background: #ffdce5; padding: 20px; border-radius: 5px; margin-bottom: 30px; border-left: 3px solid #5e1223; font-style: italic; }
.error { background: #fdecea; color: #8a1c1c; padding: 12px 16px; border-left: 3px solid #8a1c1c; margin-bottom: 20px; }
.notice { max-width: 900px; margin: 20px auto 0; background: #f4efe6; color: #3a3a3a; padding: 12px 16px; border-left: 3px solid #b08d57; }
form .row { display: grid; grid-template-columns: 1fr 1fr; gap: 20px; }
form label { display: block; margin: 18px 0 6px; font-weight: 700; }
form input[type=text], form input[type=number], form select { width: 100%; padding: 8px; border: 1px solid #d9b3bd; background: #fff; }
form input[type=range] { width: 100%; accent-color: #5e1223; }
.caption { font-size: 0.8rem; color: #8c5a66; }
.magazine-container { max-width: 900px; margin: 0 auto; background: #fff; box-shadow: 0 10px 40px rgba(94, 18, 35, 0.15); }
.cover-header { text-align: center; padding: 30px 20px 10px; border-bottom: 1px solid #5e1223; }
.brand-title { font-size: 5rem; margin: 0; letter-spacing: 0.12em; }
.issue-details { display: flex; justify-content: space-between; font-size: 0.8rem; letter-spacing: 0.2em; padding: 10px 0; }
.cover-hero img { width: 100%; max-height: 520px; object-fit: cover; display: block; }
.headline-overlay { text-align: center; padding: 40px 20px; }
.sub-headline { letter-spacing: 0.3em; font-size: 0.85rem; }
.main-headline { font-family: 'Playfair Display', serif; font-size: 2.6rem; line-height: 1.2; margin-top: 10px; }
.rule { width: 50px; height: 1px; background: #5e1223; margin: 20px auto; }
.editorial-section { padding: 40px 60px; background: #fff7f9; }
.editorial-layout { column-count: 2; column-gap: 40px; }
.drop-cap { float: left; font-family: 'Playfair Display', serif; font-size: 3.5rem; line-height: 0.8; padding-right: 8px; }
.signature { text-align: right; margin-top: 20px; font-weight: bold; }
.timeline-section { padding: 50px 60px; }
.timeline-item { display: flex; gap: 30px; margin-bottom: 30px; border-left: 2px solid #ffdce5; padding-left: 20px; }
.timeline-time { font-family: 'Playfair Display', serif; font-size: 1.5rem; min-width: 80px; }
.timeline-title { margin: 0 0 6px; }
.product-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px; padding: 40px 60px 60px; }
.product-grid .grid-heading { grid-column: 1 / -1; text-align: center; margin-bottom: 20px; }
.product-card { text-align: center; }
.product-card img { width: 100%; height: 220px; object-fit: cover; }
.product-name { font-family: 'Playfair Display', serif; font-size: 1.2rem; margin-top: 12px; }
.product-price { font-weight: 700; margin: 6px 0; }
.product-ingredients { font-size: 0.8rem; font-style: italic; color: #888; margin-bottom: 10px; }
.product-desc { font-size: 0.9rem; }
.actions { display: flex; justify-content: center; gap: 20px; margin: 40px 0; }
"#;
