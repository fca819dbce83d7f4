//! Rendering Integration Tests
//!
//! End-to-end tests for element trees rendered to markup.
//!
//! Test Categories:
//! - Category 1: Native elements and attributes
//! - Category 2: Form controls
//! - Category 3: Components and context
//! - Category 4: Render cache
//! - Category 5: Properties

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use prerender_ssr::{
	RenderCache, RenderError, RenderOptions, Renderer, element_to_string, render_to_string,
};
use prerender_types::{BoxError, Component, Context, Element, PropValue, Props};
use proptest::prelude::*;
use rstest::{fixture, rstest};

/// Cache that records every store.
#[derive(Default)]
struct RecordingCache {
	entries: Mutex<HashMap<String, String>>,
	sets: AtomicUsize,
}

impl RecordingCache {
	fn len(&self) -> usize {
		self.entries.lock().len()
	}

	fn sets(&self) -> usize {
		self.sets.load(Ordering::SeqCst)
	}

	fn keys(&self) -> Vec<String> {
		self.entries.lock().keys().cloned().collect()
	}
}

impl RenderCache for RecordingCache {
	fn has(&self, key: &str) -> bool {
		self.entries.lock().contains_key(key)
	}

	fn get(&self, key: &str) -> Option<String> {
		self.entries.lock().get(key).cloned()
	}

	fn set(&self, key: &str, html: String) {
		self.sets.fetch_add(1, Ordering::SeqCst);
		self.entries.lock().insert(key.to_string(), html);
	}
}

#[fixture]
fn cache() -> Arc<RecordingCache> {
	Arc::new(RecordingCache::default())
}

fn render(element: &Element) -> String {
	render_to_string(element).expect("render should succeed")
}

fn render_with(element: &Element, options: &RenderOptions) -> String {
	element_to_string(Some(element), options).expect("render should succeed")
}

fn prop_text(props: &Props, key: &str) -> String {
	props
		.get(key)
		.and_then(PropValue::to_text)
		.map(|text| text.into_owned())
		.unwrap_or_default()
}

// ============================================================================
// Category 1: Native elements and attributes
// ============================================================================

#[rstest]
fn test_absent_element_renders_empty() {
	assert_eq!(element_to_string(None, &RenderOptions::default()).ok().as_deref(), Some(""));
}

#[rstest]
fn test_bare_tag() {
	assert_eq!(render(&Element::tag("div")), "<div></div>");
}

#[rstest]
fn test_boolean_attribute_renders_bare() {
	// Arrange
	let input = Element::tag("input")
		.prop("type", "password")
		.prop("value", "pass")
		.prop("readOnly", true);

	// Act & Assert
	assert_eq!(render(&input), r#"<input type="password" value="pass" readOnly />"#);
}

#[rstest]
fn test_style_mapping_with_children() {
	// Arrange
	let div = Element::tag("div")
		.prop(
			"style",
			Props::new()
				.prop("backgroundColor", "red")
				.prop("borderBottomWidth", "10px"),
		)
		.child("Stylish");

	// Act & Assert
	assert_eq!(
		render(&div),
		r#"<div style="background-color: red;border-bottom-width: 10px;">Stylish</div>"#
	);
}

#[rstest]
fn test_link_attributes() {
	// Arrange
	let link = Element::tag("a")
		.prop("href", "//ya.ru")
		.prop("className", "link")
		.prop("id", "link-1")
		.prop("target", "_blank")
		.prop("title", "Link will be open in new tab")
		.prop("data-custom", 1)
		.prop("data-boolean", true)
		.prop("aria-label", "label")
		.prop("aria-hidden", false)
		.prop("onClick", PropValue::callback(|_| PropValue::Null))
		.child("Link");

	// Act & Assert
	assert_eq!(
		render(&link),
		concat!(
			r#"<a href="//ya.ru" class="link" id="link-1" target="_blank" "#,
			r#"title="Link will be open in new tab" data-custom="1" data-boolean="true" "#,
			r#"aria-label="label" aria-hidden="false">Link</a>"#,
		)
	);
}

#[rstest]
fn test_label_and_input_form() {
	// Arrange
	let form = Element::tag("div")
		.prop("className", "password")
		.child(Element::tag("label").prop("htmlFor", "pass").child("Password"))
		.child(
			Element::tag("input")
				.prop("type", "password")
				.prop("value", "pass")
				.prop("maxLength", 1)
				.prop("readOnly", false)
				.child("Content"),
		);

	// Act & Assert
	assert_eq!(
		render(&form),
		concat!(
			r#"<div class="password"><label for="pass">Password</label>"#,
			r#"<input type="password" value="pass" maxLength="1" />Content</div>"#,
		)
	);
}

#[rstest]
fn test_zero_attribute_is_kept() {
	assert_eq!(render(&Element::tag("div").prop("value", 0)), r#"<div value="0"></div>"#);
}

#[rstest]
fn test_nested_children_are_escaped() {
	// Arrange
	let div = Element::tag("div")
		.child(Element::tag("hr"))
		.child(Element::tag("p").child("<br />Paragraph"));

	// Act & Assert
	assert_eq!(render(&div), "<div><hr /><p>&lt;br /&gt;Paragraph</p></div>");
}

#[rstest]
fn test_dangerously_set_inner_html_wins_over_children() {
	// Arrange
	let div = Element::tag("div")
		.prop("dangerouslySetInnerHTML", Props::new().prop("__html", "<i>raw</i>"))
		.child("<b>escaped</b>");

	// Act & Assert
	assert_eq!(render(&div), "<div><i>raw</i></div>");
}

#[rstest]
fn test_key_and_functions_never_render() {
	// Arrange
	let list = Element::tag("ul").children((0..3).map(|i| {
		Element::tag("li")
			.prop("key", i)
			.child(i)
			.child(PropValue::callback(|_| PropValue::from("Function does not render.")))
	}));

	// Act & Assert
	assert_eq!(render(&list), "<ul><li>0</li><li>1</li><li>2</li></ul>");
}

// ============================================================================
// Category 2: Form controls
// ============================================================================

#[rstest]
fn test_select_single_value() {
	// Arrange
	let select = Element::tag("select").prop("value", 2).children([
		Element::tag("option").prop("value", 1).child("One"),
		Element::tag("option").prop("value", 2).child("Two"),
	]);

	// Act & Assert
	assert_eq!(
		render(&select),
		r#"<select><option value="1">One</option><option value="2" selected>Two</option></select>"#
	);
}

// Same markup as the upstream "should render multiple select correctly" case:
// `multiple` stays on the tag as a bare attribute.
#[rstest]
fn test_select_multiple_marks_every_value() {
	// Arrange
	let select = Element::tag("select")
		.prop("value", vec![1, 2])
		.prop("multiple", true)
		.children([
			Element::tag("option").prop("value", 1),
			Element::tag("option").prop("value", 2),
			Element::tag("option").prop("value", 3),
		]);

	// Act & Assert
	assert_eq!(
		render(&select),
		concat!(
			"<select multiple>",
			r#"<option value="1" selected></option>"#,
			r#"<option value="2" selected></option>"#,
			r#"<option value="3"></option>"#,
			"</select>",
		)
	);
}

#[rstest]
fn test_select_default_value_and_optgroup() {
	// Arrange
	let select = Element::tag("select")
		.prop("defaultValue", "b")
		.child(Element::tag("option").prop("value", "a"))
		.child(
			Element::tag("optgroup")
				.prop("label", "More")
				.children([Element::tag("option").prop("value", "b")]),
		);

	// Act & Assert
	assert_eq!(
		render(&select),
		concat!(
			r#"<select><option value="a"></option>"#,
			r#"<optgroup label="More"><option value="b" selected></option></optgroup>"#,
			"</select>",
		)
	);
}

#[rstest]
fn test_select_does_not_modify_input_tree() {
	// Arrange
	let option = Element::tag("option").prop("value", 1);
	let select = Element::tag("select").prop("value", 1).child(option.clone());

	// Act
	render(&select);

	// Assert
	let children = select.props().children().map(PropValue::as_sequence).unwrap_or_default();
	assert_eq!(children, [PropValue::Element(option)]);
}

#[rstest]
fn test_select_multiple_with_scalar_value_fails() {
	// Arrange
	let select = Element::tag("select")
		.prop("value", 1)
		.prop("multiple", true)
		.child(Element::tag("option").prop("value", 1));

	// Act
	let result = render_to_string(&select);

	// Assert
	assert!(matches!(result, Err(RenderError::MalformedProps { ref tag, .. }) if tag == "select"));
}

#[rstest]
fn test_textarea_value_renders_as_text() {
	// Arrange
	let textarea = Element::tag("textarea").prop("value", "text<br />");

	// Act & Assert
	assert_eq!(render(&textarea), "<textarea>text&lt;br /&gt;</textarea>");
}

// ============================================================================
// Category 3: Components and context
// ============================================================================

struct NameTag {
	name: String,
}

impl Component for NameTag {
	fn create(_props: &Props, context: &Context) -> Self {
		NameTag {
			name: context.get_str("name").unwrap_or_default().to_string(),
		}
	}

	fn render(&self) -> Option<Element> {
		Some(
			Element::tag("span")
				.prop("className", "name")
				.child(format!("Name: {}", self.name)),
		)
	}
}

struct NameProvider;

impl Component for NameProvider {
	fn create(_props: &Props, _context: &Context) -> Self {
		NameProvider
	}

	fn render(&self) -> Option<Element> {
		Some(Element::tag("div").child(Element::component::<NameTag>()))
	}

	fn child_context(&self) -> Option<Context> {
		Some(Context::new().with("name", "Aeron"))
	}
}

struct Mounted {
	text: String,
}

impl Component for Mounted {
	fn create(_props: &Props, _context: &Context) -> Self {
		Mounted { text: String::new() }
	}

	fn render(&self) -> Option<Element> {
		Some(Element::tag("span").child(self.text.clone()))
	}

	fn will_mount(&mut self) {
		self.text = "text".to_string();
	}
}

#[rstest]
fn test_child_context_reaches_descendants() {
	assert_eq!(
		render(&Element::component::<NameProvider>()),
		r#"<div><span class="name">Name: Aeron</span></div>"#
	);
}

#[rstest]
fn test_child_context_overrides_root_context() {
	// Arrange
	let options = RenderOptions::new()
		.with_context(Context::new().with("name", "Root").with("theme", "dark"));

	// Act
	let html = render_with(&Element::component::<NameProvider>(), &options);

	// Assert
	assert_eq!(html, r#"<div><span class="name">Name: Aeron</span></div>"#);
}

#[rstest]
fn test_context_does_not_leak_to_siblings() {
	// Arrange
	let tree = Element::tag("div")
		.child(Element::component::<NameProvider>())
		.child(Element::component::<NameTag>());

	// Act & Assert
	assert_eq!(
		render(&tree),
		concat!(
			r#"<div><div><span class="name">Name: Aeron</span></div>"#,
			r#"<span class="name">Name: </span></div>"#,
		)
	);
}

#[rstest]
fn test_will_mount_runs_before_render() {
	assert_eq!(render(&Element::component::<Mounted>()), "<span>text</span>");
}

// The function-component case drops the caller's context and cache.
#[rstest]
fn test_function_component_omits_context(cache: Arc<RecordingCache>) {
	// Arrange
	let options = RenderOptions::new()
		.with_cache(cache.clone())
		.with_context(Context::new().with("name", "Root"));
	let tree = Element::function(|_props: &Props| {
		Some(
			Element::tag("p")
				.child(Element::component::<NameTag>())
				.child(Element::component::<Badge>().prop("label", "inside")),
		)
	});

	// Act
	let html = render_with(&tree, &options);

	// Assert
	assert_eq!(
		html,
		r#"<p><span class="name">Name: </span><small>inside</small></p>"#
	);
	assert_eq!(cache.len(), 0);
	assert_eq!(cache.sets(), 0);
}

#[rstest]
fn test_renderer_reuses_options() {
	// Arrange
	let renderer =
		Renderer::with_options(RenderOptions::new().with_context(Context::new().with("name", "Reused")));

	// Act
	let first = renderer.render(&Element::component::<NameTag>());
	let second = renderer.render(&Element::component::<NameTag>());

	// Assert
	assert_eq!(first.ok(), second.ok());
}

// ============================================================================
// Category 4: Render cache
// ============================================================================

static CARD_MOUNTS: AtomicUsize = AtomicUsize::new(0);

/// Card keyed by its `id` prop.
struct Card {
	id: String,
	title: String,
}

impl Component for Card {
	fn create(props: &Props, _context: &Context) -> Self {
		Card {
			id: prop_text(props, "id"),
			title: prop_text(props, "title"),
		}
	}

	fn render(&self) -> Option<Element> {
		Some(Element::tag("article").child(self.title.clone()))
	}

	fn display_name() -> Option<&'static str> {
		Some("Card")
	}

	fn cache_key(&self) -> Result<Option<String>, BoxError> {
		Ok(Some(self.id.clone()))
	}

	fn will_mount(&mut self) {
		CARD_MOUNTS.fetch_add(1, Ordering::SeqCst);
	}
}

/// Badge keyed by its `label` prop.
struct Badge {
	label: String,
}

impl Component for Badge {
	fn create(props: &Props, _context: &Context) -> Self {
		Badge {
			label: prop_text(props, "label"),
		}
	}

	fn render(&self) -> Option<Element> {
		Some(Element::tag("small").child(self.label.clone()))
	}

	fn display_name() -> Option<&'static str> {
		Some("Badge")
	}

	fn cache_key(&self) -> Result<Option<String>, BoxError> {
		Ok(Some(self.label.clone()))
	}
}

static THEME_CONTEXT_CALLS: AtomicUsize = AtomicUsize::new(0);

/// Cacheable provider that counts its child-context computations.
struct ThemeProvider;

impl Component for ThemeProvider {
	fn create(_props: &Props, _context: &Context) -> Self {
		ThemeProvider
	}

	fn render(&self) -> Option<Element> {
		Some(Element::tag("section").child(Element::component::<NameTag>()))
	}

	fn display_name() -> Option<&'static str> {
		Some("ThemeProvider")
	}

	fn cache_key(&self) -> Result<Option<String>, BoxError> {
		Ok(Some("dark".to_string()))
	}

	fn child_context(&self) -> Option<Context> {
		THEME_CONTEXT_CALLS.fetch_add(1, Ordering::SeqCst);
		Some(Context::new().with("name", "Theme"))
	}
}

/// Cacheable component without a display name.
struct Anonymous;

impl Component for Anonymous {
	fn create(_props: &Props, _context: &Context) -> Self {
		Anonymous
	}

	fn render(&self) -> Option<Element> {
		Some(Element::tag("em").child("anonymous"))
	}

	fn cache_key(&self) -> Result<Option<String>, BoxError> {
		Ok(Some("only".to_string()))
	}
}

/// Component whose key computation fails.
struct Broken;

impl Component for Broken {
	fn create(_props: &Props, _context: &Context) -> Self {
		Broken
	}

	fn render(&self) -> Option<Element> {
		Some(Element::tag("div"))
	}

	fn cache_key(&self) -> Result<Option<String>, BoxError> {
		Err("no key".into())
	}
}

/// Component that could be cached but opts out.
struct Uncached;

impl Component for Uncached {
	fn create(_props: &Props, _context: &Context) -> Self {
		Uncached
	}

	fn render(&self) -> Option<Element> {
		Some(Element::tag("b").child("fresh"))
	}
}

#[rstest]
fn test_cache_stores_and_serves_markup(cache: Arc<RecordingCache>) {
	// Arrange
	let options = RenderOptions::new().with_cache(cache.clone());
	let first_card = Element::component::<Card>().prop("id", "same").prop("title", "First");
	let second_card = Element::component::<Card>().prop("id", "same").prop("title", "Second");
	let mounts_before = CARD_MOUNTS.load(Ordering::SeqCst);

	// Act
	let first = render_with(&first_card, &options);
	let second = render_with(&second_card, &options);

	// Assert
	assert_eq!(first, "<article>First</article>");
	assert_eq!(second, first);
	assert_eq!(cache.len(), 1);
	assert_eq!(cache.sets(), 1);
	assert_eq!(cache.keys(), vec!["Cardsame".to_string()]);
	assert_eq!(CARD_MOUNTS.load(Ordering::SeqCst) - mounts_before, 1);
}

#[rstest]
fn test_cache_hit_skips_child_context(cache: Arc<RecordingCache>) {
	// Arrange
	let options = RenderOptions::new().with_cache(cache.clone());
	let element = Element::component::<ThemeProvider>();

	// Act
	let first = render_with(&element, &options);
	let second = render_with(&element, &options);

	// Assert
	assert_eq!(first, r#"<section><span class="name">Name: Theme</span></section>"#);
	assert_eq!(second, first);
	assert_eq!(THEME_CONTEXT_CALLS.load(Ordering::SeqCst), 1);
	assert_eq!(cache.sets(), 1);
}

#[rstest]
fn test_cache_entry_without_display_name(cache: Arc<RecordingCache>) {
	// Arrange
	let options = RenderOptions::new().with_cache(cache.clone());
	let element = Element::component::<Anonymous>();

	// Act
	let first = render_with(&element, &options);
	let second = render_with(&element, &options);

	// Assert
	assert_eq!(first, second);
	assert_eq!(cache.len(), 1);
	let key = cache.keys().remove(0);
	assert!(key.ends_with("only"));
	assert_eq!(key.len(), 36 + "only".len());
}

#[rstest]
fn test_component_without_key_is_not_cached(cache: Arc<RecordingCache>) {
	// Arrange
	let options = RenderOptions::new().with_cache(cache.clone());

	// Act
	let html = render_with(&Element::component::<Uncached>(), &options);

	// Assert
	assert_eq!(html, "<b>fresh</b>");
	assert_eq!(cache.len(), 0);
}

#[rstest]
fn test_nested_cached_components_each_store(cache: Arc<RecordingCache>) {
	// Arrange
	let options = RenderOptions::new().with_cache(cache.clone());
	let page = Element::tag("main")
		.child(Element::component::<Badge>().prop("label", "One"))
		.child(Element::tag("p").child(Element::component::<Badge>().prop("label", "Two")));

	// Act
	let html = render_with(&page, &options);

	// Assert
	assert_eq!(html, "<main><small>One</small><p><small>Two</small></p></main>");
	assert_eq!(cache.len(), 2);
	assert_eq!(cache.get("BadgeTwo").as_deref(), Some("<small>Two</small>"));
}

#[rstest]
fn test_cache_key_is_ignored_without_cache() {
	assert_eq!(render(&Element::component::<Broken>()), "<div></div>");
}

#[rstest]
fn test_cache_key_failure_is_fatal(cache: Arc<RecordingCache>) {
	// Arrange
	let options = RenderOptions::new().with_cache(cache.clone());
	let tree = Element::tag("div").child(Element::component::<Broken>());

	// Act
	let result = element_to_string(Some(&tree), &options);

	// Assert
	match result {
		Err(RenderError::CacheKey { component, source }) => {
			assert!(component.ends_with("Broken"));
			assert_eq!(source.to_string(), "no key");
		}
		other => panic!("expected cache key error, got {other:?}"),
	}
	assert_eq!(cache.len(), 0);
}

// ============================================================================
// Category 5: Properties
// ============================================================================

proptest! {
	#[test]
	fn prop_text_children_never_inject_markup(text in ".*") {
		let html = render(&Element::tag("p").child(text));
		prop_assert!(html.starts_with("<p>"));
		prop_assert!(html.ends_with("</p>"));
		let inner = &html["<p>".len()..html.len() - "</p>".len()];
		prop_assert!(!inner.contains('<'));
		prop_assert!(!inner.contains('>'));
	}

	#[test]
	fn prop_rendering_is_idempotent(
		attrs in proptest::collection::vec(("[a-z]{1,8}", any::<i32>()), 0..6),
		text in ".*",
	) {
		let element = attrs
			.into_iter()
			.fold(Element::tag("div"), |el, (key, value)| el.prop(format!("x{key}"), value))
			.child(text);
		prop_assert_eq!(render(&element), render(&element));
	}

	#[test]
	fn prop_attribute_values_stay_quoted(value in ".*") {
		let html = render(&Element::tag("div").prop("title", value));
		prop_assert_eq!(html.matches('"').count(), 2);
	}
}
