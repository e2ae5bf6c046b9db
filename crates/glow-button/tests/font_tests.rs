//! Integration tests for label font loading and the sans-serif fallback.

use std::io::Write;
use std::path::PathBuf;

use glow_button::prelude::*;
use glow_button::{FontConfig, FontRegistry, FontSource, ResourceLoadError, ResourceManager};

fn no_system_fonts() -> FontConfig {
    FontConfig::new().load_system_fonts(false)
}

/// A standalone `.ttf` installed on this machine and the family names
/// `fontdb` reads from it.
fn system_ttf() -> Option<(PathBuf, Vec<String>)> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    db.faces().find_map(|face| match &face.source {
        fontdb::Source::File(path)
            if face.index == 0
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("ttf")) =>
        {
            let families = face.families.iter().map(|(name, _)| name.clone()).collect();
            Some((path.clone(), families))
        }
        _ => None,
    })
}

#[test]
fn valid_font_is_registered_and_cached() {
    let Some((path, families)) = system_ttf() else {
        // No TrueType fonts installed; nothing to load.
        return;
    };
    let dir = path.parent().unwrap();
    let file_name = path.file_name().unwrap().to_string_lossy().into_owned();

    ResourceManager::global().register_filesystem_root("font-tests-system", dir);
    let font_path = format!("font-tests-system:/{file_name}");
    let config = ButtonConfig::new()
        .font_path(font_path.clone())
        .font_config(no_system_fonts());

    let button = ButtonWidget::try_with_config("Go", 14, 200, 60, config.clone()).unwrap();
    let font = button.font().clone();

    assert!(!font.is_fallback());
    assert_eq!(font.source(), &FontSource::Resource(font_path.clone()));
    assert!(font.face_id().is_some());
    assert_eq!(font.size(), 14.0);
    assert!(
        families.iter().any(|name| name == font.family()),
        "{} not in {families:?}",
        font.family()
    );
    assert!(FontRegistry::global().has_family(font.family()));
    assert!(button.font_load_error().is_none());
    assert_eq!(button.control().font(), Some(&font));

    // The second load reuses the registered face at the new size.
    let face_count = FontRegistry::global().face_count();
    let button = ButtonWidget::try_with_config("Go", 20, 200, 60, config).unwrap();

    assert_eq!(button.font().size(), 20.0);
    assert_eq!(button.font().family(), font.family());
    assert_eq!(button.font().face_id(), font.face_id());
    assert_eq!(FontRegistry::global().face_count(), face_count);

    ResourceManager::global().unregister_filesystem_root("font-tests-system");
}

#[test]
fn missing_font_fails_strict_construction() {
    let config = ButtonConfig::new()
        .font_path(":/fonts/DoesNotExist.ttf")
        .font_config(no_system_fonts());

    let err = ButtonWidget::try_with_config("Go", 14, 200, 60, config).unwrap_err();
    match err {
        ResourceLoadError::NotFound { path } => assert_eq!(path, ":/fonts/DoesNotExist.ttf"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn garbage_font_file_is_invalid() {
    let mut file = tempfile::Builder::new().suffix(".ttf").tempfile().unwrap();
    file.write_all(b"definitely not a TrueType font").unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let config = ButtonConfig::new()
        .font_path(path.clone())
        .font_config(no_system_fonts());

    let err = ButtonWidget::try_with_config("Go", 14, 200, 60, config).unwrap_err();
    assert!(matches!(err, ResourceLoadError::InvalidFont { .. }));
    assert_eq!(err.path(), path);
}

#[test]
fn font_under_registered_root_is_read_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("fonts")).unwrap();
    std::fs::write(dir.path().join("fonts/Broken.ttf"), b"\0\x01\0\0garbage").unwrap();

    ResourceManager::global().register_filesystem_root("font-tests", dir.path());

    let config = ButtonConfig::new()
        .font_path("font-tests:/fonts/Broken.ttf")
        .font_config(no_system_fonts());
    let err = ButtonWidget::try_with_config("Go", 14, 200, 60, config).unwrap_err();
    assert!(matches!(err, ResourceLoadError::InvalidFont { .. }));

    let config = ButtonConfig::new()
        .font_path("font-tests:/fonts/Absent.ttf")
        .font_config(no_system_fonts());
    let err = ButtonWidget::try_with_config("Go", 14, 200, 60, config).unwrap_err();
    assert!(matches!(err, ResourceLoadError::NotFound { .. }));

    ResourceManager::global().unregister_filesystem_root("font-tests");
}

#[test]
fn recovering_constructor_falls_back_to_sans_serif() {
    let config = ButtonConfig::new()
        .font_path(":/fonts/DoesNotExist.ttf")
        .font_config(no_system_fonts());

    let button = ButtonWidget::with_config("Go", 14, 200, 60, config);

    assert!(button.font().is_fallback());
    assert_eq!(button.font().source(), &FontSource::SystemFallback);
    assert_eq!(button.font().size(), 14.0);
    assert!(!button.font().family().is_empty());
    assert!(matches!(
        button.font_load_error(),
        Some(ResourceLoadError::NotFound { .. })
    ));

    // A fallback button is otherwise fully functional.
    assert_eq!(button.state(), Interaction::Idle);
    assert_eq!(button.control().font(), Some(button.font()));
}

#[test]
fn fallback_button_still_transitions() {
    let config = ButtonConfig::new()
        .font_path(":/fonts/DoesNotExist.ttf")
        .font_config(no_system_fonts());
    let mut button = ButtonWidget::with_config("Go", 14, 200, 60, config);

    button.handle_event(&mut PointerEvent::enter(Point::new(1.0, 1.0)));
    assert_eq!(button.state(), Interaction::Hovered);
    assert_eq!(button.glow().level, 0.2);
}

#[test]
fn error_messages_name_the_path() {
    let err = ResourceLoadError::not_found(":/fonts/X.ttf");
    assert!(err.to_string().contains(":/fonts/X.ttf"));

    let err = ResourceLoadError::invalid_font("/tmp/x.ttf", "unknown magic");
    let message = err.to_string();
    assert!(message.contains("/tmp/x.ttf"));
    assert!(message.contains("unknown magic"));
}
