//! End-to-end session tests driving `handle_event` against an in-memory document.

use std::cell::Cell;

use varexport::app::{SessionState, UiUpdate};
use varexport::domain::{Collection, Mode, ResolvedType, Rgba, Variable, VariableValue};
use varexport::host::VariableSource;
use varexport::{handle_event, Action, Event, ExportError, GenerateOptions, Session, Target};

/// In-memory document that counts host lookups.
struct Document {
    variables: Vec<Variable>,
    collections: Vec<Collection>,
    lookups: Cell<usize>,
}

impl VariableSource for Document {
    fn local_variables(&self) -> varexport::Result<Vec<Variable>> {
        Ok(self.variables.clone())
    }

    fn collection_by_id(&self, id: &str) -> varexport::Result<Option<Collection>> {
        self.lookups.set(self.lookups.get() + 1);
        Ok(self.collections.iter().find(|c| c.id == id).cloned())
    }
}

fn mode(id: &str, name: &str) -> Mode {
    Mode {
        mode_id: id.to_string(),
        name: name.to_string(),
    }
}

fn simple_document() -> Document {
    Document {
        variables: vec![
            Variable::new("v2", "Spacing/Small", ResolvedType::Float, "c1")
                .with_value("mode1", VariableValue::Number(8.0)),
            Variable::new("v1", "Colors/Primary", ResolvedType::Color, "c1")
                .with_value("mode1", VariableValue::Color(Rgba::new(1.0, 0.0, 0.0, 1.0))),
        ],
        collections: vec![Collection {
            id: "c1".to_string(),
            name: "Tokens".to_string(),
            modes: vec![mode("mode1", "Default")],
        }],
        lookups: Cell::new(0),
    }
}

fn themed_document() -> Document {
    Document {
        variables: vec![
            Variable::new("p1", "Blue/500", ResolvedType::Color, "prims")
                .with_value("base", VariableValue::Color(Rgba::new(0.0, 0.0, 1.0, 1.0))),
            Variable::new("t1", "Surface/Background", ResolvedType::Color, "theme")
                .with_value("light", VariableValue::Color(Rgba::new(1.0, 1.0, 1.0, 1.0)))
                .with_value("dark", VariableValue::Color(Rgba::new(0.0, 0.0, 0.0, 1.0))),
            Variable::new("t2", "Surface/Accent", ResolvedType::Color, "theme")
                .with_value("light", VariableValue::alias("p1"))
                .with_value("dark", VariableValue::alias("t1")),
            Variable::new("t3", "Radius/Card", ResolvedType::Float, "theme")
                .with_value("light", VariableValue::Number(12.0)),
            Variable::new("t4", "Label/Title", ResolvedType::String, "theme")
                .with_value("light", VariableValue::Text("Hello".to_string())),
        ],
        collections: vec![
            Collection {
                id: "prims".to_string(),
                name: "Primitives".to_string(),
                modes: vec![mode("base", "Base")],
            },
            Collection {
                id: "theme".to_string(),
                name: "Theme".to_string(),
                modes: vec![mode("light", "Light"), mode("dark", "Dark")],
            },
        ],
        lookups: Cell::new(0),
    }
}

fn single_update(actions: Vec<Action>) -> UiUpdate {
    match actions.as_slice() {
        [Action::PostUiUpdate(update)] => update.clone(),
        other => panic!("expected a single ui update, got {other:?}"),
    }
}

#[test]
fn init_renders_all_four_documents_in_name_order() {
    let document = simple_document();
    let mut session = Session::default();

    let update = single_update(handle_event(&mut session, &document, &Event::Init).unwrap());

    assert_eq!(
        update.css_file,
        ":root {\n  --colors-primary: #FF0000FF;\n  --spacing-small: 8px;\n}"
    );
    assert_eq!(
        update.js_file,
        "export const colorsPrimary = '#FF0000FF';\nexport const spacingSmall = '8px';\n"
    );
    assert_eq!(
        update.compose_file,
        "object Variables {\n  val ColorsPrimary: Color = Color(0xFFFF0000)\n  val SpacingSmall: Dp = 8.dp\n}"
    );
    assert_eq!(
        update.swiftui_file,
        "struct Constants {\n  static let ColorsPrimary: Color = Color(red: 1.00, green: 0.00, blue: 0.00)\n  static let SpacingSmall: CGFloat = 8\n}"
    );
    assert_eq!(update.collections.get("c1").map(String::as_str), Some("Tokens"));
    assert_eq!(update.modes.get("mode1").map(String::as_str), Some("Default"));
}

#[test]
fn init_selects_first_collection_and_mode() {
    let document = themed_document();
    let mut session = Session::default();

    let update = single_update(handle_event(&mut session, &document, &Event::Init).unwrap());

    let collection_ids: Vec<&str> = update.collections.keys().map(String::as_str).collect();
    assert_eq!(collection_ids, vec!["prims", "theme"]);
    assert_eq!(update.css_file, ":root {\n  --blue-500: #0000FFFF;\n}");

    let selection = session.selection().unwrap();
    assert_eq!(selection.collection(), Some("prims"));
    assert_eq!(selection.mode(), Some("base"));
}

#[test]
fn collection_and_mode_selection_regenerate() {
    let document = themed_document();
    let mut session = Session::default();
    handle_event(&mut session, &document, &Event::Init).unwrap();

    let light = single_update(
        handle_event(
            &mut session,
            &document,
            &Event::CollectionSelected(Some("theme".to_string())),
        )
        .unwrap(),
    );
    let mode_ids: Vec<&str> = light.modes.keys().map(String::as_str).collect();
    assert_eq!(mode_ids, vec!["light", "dark"]);
    assert_eq!(
        light.css_file,
        ":root {\n  --radius-card: 12px;\n  --surface-accent: var(--blue-500);\n  --surface-background: #FFFFFFFF;\n}"
    );
    assert!(light.compose_file.contains("  val SurfaceAccent: Color = Variables.Blue500\n"));
    assert!(light.js_file.contains("export const surfaceAccent = blue500;\n"));
    assert!(!light.css_file.contains("label"));

    let dark = single_update(
        handle_event(&mut session, &document, &Event::ModeSelected("dark".to_string())).unwrap(),
    );
    assert_eq!(
        dark.css_file,
        ":root {\n  --surface-accent: var(--surface-background);\n  --surface-background: #000000FF;\n}"
    );
    assert!(dark
        .swiftui_file
        .contains("  static let SurfaceAccent: Color = Constants.SurfaceBackground\n"));
    assert_eq!(session.selection().and_then(|s| s.mode()), Some("dark"));
}

#[test]
fn null_collection_is_rejected_without_regeneration() {
    let document = simple_document();
    let mut session = Session::default();
    handle_event(&mut session, &document, &Event::Init).unwrap();
    let before = session.state().clone();
    let lookups = document.lookups.get();

    for value in [None, Some(String::new())] {
        let result = handle_event(&mut session, &document, &Event::CollectionSelected(value));
        assert!(matches!(result, Err(ExportError::NoCollectionSelected)));
    }

    assert_eq!(session.state(), &before);
    assert_eq!(document.lookups.get(), lookups);
}

#[test]
fn unknown_ids_keep_previous_selection() {
    let document = themed_document();
    let mut session = Session::default();
    handle_event(&mut session, &document, &Event::Init).unwrap();
    let before = session.state().clone();

    let result = handle_event(&mut session, &document, &Event::ModeSelected("dark".to_string()));
    assert!(matches!(result, Err(ExportError::UnknownMode { .. })));

    let result = handle_event(
        &mut session,
        &document,
        &Event::CollectionSelected(Some("missing".to_string())),
    );
    assert!(matches!(result, Err(ExportError::UnknownCollection(_))));

    assert_eq!(session.state(), &before);
}

#[test]
fn unknown_collection_is_rejected_before_host_lookup() {
    let document = themed_document();
    let mut session = Session::default();
    handle_event(&mut session, &document, &Event::Init).unwrap();
    let lookups = document.lookups.get();

    let result = handle_event(
        &mut session,
        &document,
        &Event::CollectionSelected(Some("missing".to_string())),
    );
    assert!(matches!(result, Err(ExportError::UnknownCollection(id)) if id == "missing"));
    assert_eq!(document.lookups.get(), lookups);
}

#[test]
fn selection_before_init_fails() {
    let document = simple_document();
    let mut session = Session::default();

    let result = handle_event(&mut session, &document, &Event::ModeSelected("mode1".to_string()));
    assert!(matches!(result, Err(ExportError::NotInitialized)));
    assert_eq!(session.state(), &SessionState::Uninitialized);
}

#[test]
fn copy_acknowledgements_only_notify() {
    let document = simple_document();
    let mut session = Session::default();
    handle_event(&mut session, &document, &Event::Init).unwrap();
    let before = session.state().clone();

    for target in Target::ALL {
        let actions = handle_event(&mut session, &document, &Event::CodeCopied(target)).unwrap();
        assert_eq!(
            actions,
            vec![Action::Notify(format!(
                "{} variables successfully copied to clipboard",
                target.label()
            ))]
        );
    }
    assert_eq!(session.state(), &before);
}

#[test]
fn dangling_alias_fails_the_pass_and_publishes_nothing() {
    let mut document = simple_document();
    document.variables.push(
        Variable::new("v3", "Colors/Broken", ResolvedType::Color, "c1")
            .with_value("mode1", VariableValue::alias("nowhere")),
    );
    let mut session = Session::default();

    let result = handle_event(&mut session, &document, &Event::Init);
    assert!(matches!(result, Err(ExportError::DanglingAliasReference { .. })));
    assert_eq!(session.state(), &SessionState::Uninitialized);
}

#[test]
fn inline_aliases_render_literal_values() {
    let mut document = themed_document();
    let mut session = Session::new(GenerateOptions { inline_aliases: true });
    handle_event(&mut session, &document, &Event::Init).unwrap();
    let before = session.state().clone();

    // Switching resets the mode to "light", where the accent aliases a primitive
    // that only defines "base".
    let result = handle_event(
        &mut session,
        &document,
        &Event::CollectionSelected(Some("theme".to_string())),
    );
    assert!(matches!(result, Err(ExportError::UnresolvedAlias { .. })));
    assert_eq!(session.state(), &before);

    document.variables[2] = Variable::new("t2", "Surface/Accent", ResolvedType::Color, "theme")
        .with_value("light", VariableValue::alias("t1"))
        .with_value("dark", VariableValue::alias("t1"));
    handle_event(&mut session, &document, &Event::Init).unwrap();

    let light = single_update(
        handle_event(
            &mut session,
            &document,
            &Event::CollectionSelected(Some("theme".to_string())),
        )
        .unwrap(),
    );
    assert!(light.css_file.contains("  --surface-accent: #FFFFFFFF;\n"));

    let dark = single_update(
        handle_event(&mut session, &document, &Event::ModeSelected("dark".to_string())).unwrap(),
    );
    assert!(dark.css_file.contains("  --surface-accent: #000000FF;\n"));
    assert!(dark.compose_file.contains("  val SurfaceAccent: Color = Color(0xFF000000)\n"));
}

#[test]
fn empty_document_produces_empty_documents() {
    let document = Document {
        variables: vec![],
        collections: vec![],
        lookups: Cell::new(0),
    };
    let mut session = Session::default();

    let update = single_update(handle_event(&mut session, &document, &Event::Init).unwrap());
    assert_eq!(update.css_file, ":root {\n}");
    assert_eq!(update.js_file, "");
    assert_eq!(update.compose_file, "object Variables {\n}");
    assert_eq!(update.swiftui_file, "struct Constants {\n}");
    assert!(update.collections.is_empty());
    assert!(update.modes.is_empty());
}
