//! Extract → render → extract on a full bilingual page.

use lex_core::MenuEntry;
use lex_parser::{extract_menu, read_page_content, replace_nav};
use pretty_assertions::assert_eq;

const HOME_HE: &str = r#"<!DOCTYPE html>
<html lang="he" dir="rtl">
<head>
  <meta charset="utf-8">
  <title>כהן ושות׳ &ndash; משרד עורכי דין</title>
  <script>var nav = "<ul id='main-menu'></ul>";</script>
</head>
<body>
  <header>
    <nav>
      <ul id="main-menu">
        <li id="home"><a href="/he/index.html">בית</a></li>
        <li id="areas"><a href="/he/areas.html">תחומי עיסוק</a>
          <ul class="sub-menu">
            <li id="labor"><a href="/he/areas/labor.html">דיני עבודה</a></li>
          </ul>
        </li>
        <li id="booking"><a href="https://calendly.com/cohen">קביעת פגישה</a></li>
      </ul>
    </nav>
  </header>
  <main><h1>ברוכים הבאים</h1></main>
</body>
</html>
"#;

#[test]
fn extracts_rtl_navigation() {
    let menu = extract_menu(HOME_HE, "main-menu").unwrap();
    assert_eq!(
        menu,
        vec![
            MenuEntry::new("home", "בית", "/he/", 1),
            MenuEntry::new("areas", "תחומי עיסוק", "/he/areas/", 2).with_children(vec![
                MenuEntry::new("labor", "דיני עבודה", "/he/areas/labor/", 1),
            ]),
            MenuEntry::new("booking", "קביעת פגישה", "https://calendly.com/cohen", 3),
        ]
    );
}

#[test]
fn regenerated_nav_keeps_page_intact() {
    let mut menu = extract_menu(HOME_HE, "main-menu").unwrap();
    menu.truncate(2);

    let updated = replace_nav(HOME_HE, "main-menu", &menu).unwrap();
    assert_eq!(extract_menu(&updated, "main-menu").unwrap(), menu);
    assert!(updated.contains(r#"<script>var nav = "<ul id='main-menu'></ul>";</script>"#));
    assert!(updated.contains("<main><h1>ברוכים הבאים</h1></main>"));
    assert!(!updated.contains("calendly"));

    let content = read_page_content(&updated);
    assert_eq!(content.title, "כהן ושות׳ – משרד עורכי דין");
    assert_eq!(content.h1, "ברוכים הבאים");
}
