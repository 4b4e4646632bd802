#![cfg(feature = "html")]
#![allow(clippy::unwrap_used, reason = "Fine in tests")]
use kuchikikiki::NodeRef;
use simpletoc::{
  ListType,
  TocError,
  html::{
    ListOptions,
    TocOptions,
    element_id,
    generate_toc,
    insert_toc,
    outer_html,
    render_list,
  },
  tree::Node,
};
use tendril::TendrilSink;

fn heading(html: &str) -> NodeRef {
  kuchikikiki::parse_html()
    .one(html)
    .select_first("h1, h2, h3, h4, h5, h6")
    .unwrap()
    .as_node()
    .clone()
}

const DOCUMENT: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Guide</title></head>
  <body>
    <nav simpletoc><p>old content</p></nav>
    <h1>Getting Started</h1>
    <h2 id="install">Installation</h2>
    <h3>From   source</h3>
    <h2>Configuration</h2>
    <h1>Reference</h1>
  </body>
</html>"#;

#[test]
fn test_render_nested_list_with_existing_ids() {
  let forest = vec![
    Node::with_children(heading(r#"<h1 id="1">First</h1>"#), vec![
      Node::leaf(heading(r#"<h2 id="2">Second</h2>"#)),
    ]),
    Node::leaf(heading(r#"<h1 id="3">Third</h1>"#)),
  ];

  let expected = concat!(
    r##"<ol class="simpletoc">"##,
    r##"<li><a href="#1">First</a>"##,
    r##"<ol class="simpletoc"><li><a href="#2">Second</a></li></ol>"##,
    r##"</li>"##,
    r##"<li><a href="#3">Third</a></li>"##,
    r##"</ol>"##,
  );

  let list = render_list(&forest, &ListOptions::default());
  assert_eq!(outer_html(&list), expected);
}

#[test]
fn test_render_assigns_ids_from_text() {
  let forest = vec![
    Node::leaf(heading("<h1>First</h1>")),
    Node::leaf(heading("<h2>Second</h2>")),
    Node::leaf(heading("<h1>Third</h1>")),
  ];

  let expected = concat!(
    r##"<ol class="simpletoc">"##,
    r##"<li><a href="#first">First</a></li>"##,
    r##"<li><a href="#second">Second</a></li>"##,
    r##"<li><a href="#third">Third</a></li>"##,
    r##"</ol>"##,
  );

  let list = render_list(&forest, &ListOptions::default());
  assert_eq!(outer_html(&list), expected);

  let ids: Vec<Option<String>> =
    forest.iter().map(|node| element_id(&node.value)).collect();
  assert_eq!(ids, vec![
    Some("first".to_string()),
    Some("second".to_string()),
    Some("third".to_string())
  ]);
}

#[test]
fn test_render_multiple_classes_and_custom_hooks() {
  let forest = vec![Node::leaf(heading("<h2>Overview</h2>"))];
  let options = ListOptions::default()
    .with_list_type(ListType::Unordered)
    .with_class_names(["toc", "toc-small"])
    .with_id(|element, _| format!("sec-{}", element.text_contents().len()));

  let list = render_list(&forest, &options);

  assert_eq!(
    outer_html(&list),
    r##"<ul class="toc toc-small"><li><a href="#sec-8">Overview</a></li></ul>"##
  );
  assert_eq!(element_id(&forest[0].value), Some("sec-8".to_string()));
}

#[test]
fn test_insert_toc_into_document() {
  let document = kuchikikiki::parse_html().one(DOCUMENT);
  let list = insert_toc(&document, &TocOptions::default()).unwrap();

  let nav = document.select_first("[simpletoc]").unwrap();
  let nav = nav.as_node();

  // previous children are gone, the list is the only child
  assert!(nav.select_first("p").is_err());
  assert_eq!(nav.children().count(), 1);
  assert!(nav.first_child().is_some_and(|child| child == list));

  let hrefs: Vec<String> = nav
    .select("a[href]")
    .unwrap()
    .map(|a| {
      a.attributes
        .borrow()
        .get("href")
        .unwrap_or_default()
        .to_string()
    })
    .collect();
  assert_eq!(hrefs, vec![
    "#getting-started",
    "#install",
    "#from-source",
    "#configuration",
    "#reference",
  ]);

  // top level: two h1 entries
  assert_eq!(nav.select(".simpletoc").unwrap().count(), 3);
  let top_items = list.children().count();
  assert_eq!(top_items, 2);

  // ids were written back onto the headings
  let h3 = document.select_first("h3").unwrap();
  assert_eq!(element_id(h3.as_node()), Some("from-source".to_string()));
}

#[test]
fn test_generate_toc_from_string() {
  let html = generate_toc(DOCUMENT, &TocOptions::default()).unwrap();

  assert!(html.contains(r##"<nav simpletoc=""><ol class="simpletoc">"##));
  assert!(html.contains(r#"<h1 id="getting-started">Getting Started</h1>"#));
  assert!(html.contains(r#"<h2 id="install">Installation</h2>"#));
  assert!(!html.contains("old content"));
}

#[test]
fn test_missing_target_is_reported() {
  let options = TocOptions::default().with_target("#toc");
  let err = generate_toc("<h1>A</h1>", &options).unwrap_err();

  assert!(matches!(err, TocError::MissingElement(ref s) if s == "#toc"));
}

#[test]
fn test_invalid_selector_leaves_document_untouched() {
  let document = kuchikikiki::parse_html()
    .one("<div simpletoc><p>keep</p></div><h1>A</h1>");
  let options = TocOptions::default().with_selector("h1[");

  let err = insert_toc(&document, &options).unwrap_err();
  assert!(matches!(err, TocError::InvalidSelector(_)));
  assert!(document.select_first("[simpletoc] p").is_ok());
}

#[test]
fn test_document_without_headings_gets_empty_list() {
  let html =
    generate_toc("<div simpletoc></div><p>text</p>", &TocOptions::default())
      .unwrap();
  assert!(html.contains(r#"<div simpletoc=""><ol class="simpletoc"></ol></div>"#));
}

#[test]
fn test_headings_inside_target_are_not_listed() {
  let html = generate_toc(
    "<div simpletoc><h2>Stale</h2></div><h1>Real</h1>",
    &TocOptions::default(),
  )
  .unwrap();

  assert!(html.contains(r##"<li><a href="#real">Real</a></li>"##));
  assert!(!html.contains("Stale"));
}

#[test]
fn test_target_heading_itself_is_listed() {
  let html = generate_toc(
    "<h1 simpletoc>Contents</h1><h2>Body</h2>",
    &TocOptions::default(),
  )
  .unwrap();

  assert!(html.contains(r##"<a href="#contents">Contents</a>"##));
  assert!(html.contains(r##"<a href="#body">Body</a>"##));
}
