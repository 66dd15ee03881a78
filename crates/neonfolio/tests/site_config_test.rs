//! Site config loading and validation.

use std::io::Write;
use std::time::Duration;

use neonfolio::effects::{ConfigError, EdgeBehavior};
use neonfolio::shared::Vec2;
use neonfolio::ui::MenuState;
use neonfolio::{SiteConfig, SiteError};

const SITE: &str = r##"
[site]
name = "Andre Junior"
tagline = "Frontend developer"

[[navbar]]
label = "Home"
href = "/"

[[navbar]]
label = "Projects"
href = "/Project"

[[navbar]]
label = "About"
href = "/About"

[[social]]
name = "GitHub"
url = "https://github.com/example"

[[projects]]
id = 1
title = "Website RT 14"
subtitle = "Documentation recap and announcements"
image = "/web1.png"
link = "https://rt14perumkorpri.vercel.app/"

[[projects]]
id = 2
title = "Weather Dashboard"
subtitle = "Forecasts from a public API"
image = "/web2.png"
href = "https://weather.example.com/"

[[projects]]
id = 3
title = "Sketchbook"
subtitle = "Unreleased experiments"
image = "/web3.png"

[background]
attraction_radius = 200.0
edge = "bounce"
palette = ["#ff2bb3", "#29ffe3"]

[preview]
swap_delay = 150
leave_delay = 300
"##;

#[test]
fn test_full_site_parses() {
    let config = SiteConfig::from_toml_str(SITE).unwrap();

    assert_eq!(config.site.name, "Andre Junior");
    assert_eq!(config.site.tagline.as_deref(), Some("Frontend developer"));
    assert_eq!(config.navbar.len(), 3);
    assert_eq!(config.social[0].name, "GitHub");

    assert_eq!(config.projects.len(), 3);
    assert_eq!(
        config.projects[0].link.as_deref(),
        Some("https://rt14perumkorpri.vercel.app/")
    );
    // `href` is accepted as an alias for `link`
    assert_eq!(
        config.projects[1].link.as_deref(),
        Some("https://weather.example.com/")
    );
    assert_eq!(config.projects[2].link, None);

    assert_eq!(config.background.attraction_radius, 200.0);
    assert_eq!(config.background.edge, EdgeBehavior::Bounce);
    assert_eq!(config.background.palette.len(), 2);
    // Unnamed keys keep their defaults
    assert_eq!(config.background.max_velocity, 1.0);

    assert_eq!(config.preview.swap_delay, Duration::from_millis(150));
    assert_eq!(config.preview.leave_delay, Duration::from_millis(300));
}

#[test]
fn test_active_nav() {
    let config = SiteConfig::from_toml_str(SITE).unwrap();

    assert_eq!(config.active_nav("/").map(|n| n.label.as_str()), Some("Home"));
    assert_eq!(
        config.active_nav("/Project/2").map(|n| n.label.as_str()),
        Some("Projects")
    );
    assert!(config.active_nav("/Blog").is_none());
}

#[test]
fn test_duplicate_project_rejected() {
    let text = r#"
        [[projects]]
        id = 7
        title = "A"
        subtitle = ""
        image = "/a.png"

        [[projects]]
        id = 7
        title = "B"
        subtitle = ""
        image = "/b.png"
    "#;

    let err = SiteConfig::from_toml_str(text).unwrap_err();
    assert!(matches!(err, SiteError::DuplicateProject(7)));
}

#[test]
fn test_incomplete_nav_rejected() {
    let text = r#"
        [[navbar]]
        label = "Home"
        href = "/"

        [[navbar]]
        label = "  "
        href = "/About"
    "#;

    let err = SiteConfig::from_toml_str(text).unwrap_err();
    assert!(matches!(err, SiteError::IncompleteNavEntry(1)));
}

#[test]
fn test_bad_background_rejected() {
    let err = SiteConfig::from_toml_str("[background]\nattraction_radius = 0.0\n").unwrap_err();
    assert!(matches!(
        err,
        SiteError::Background(ConfigError::ZeroAttractionRadius(_))
    ));

    let err = SiteConfig::from_toml_str("[background]\npalette = []\n").unwrap_err();
    assert!(matches!(err, SiteError::Background(ConfigError::EmptyPalette)));

    let err =
        SiteConfig::from_toml_str("[background]\ncount = { fixed = 1000000 }\n").unwrap_err();
    assert!(matches!(
        err,
        SiteError::Background(ConfigError::OutOfRange { field: "count", .. })
    ));
}

#[test]
fn test_schema_mismatch_is_toml_error() {
    let err = SiteConfig::from_toml_str("[background]\npalette = [\"not-a-color\"]\n").unwrap_err();
    assert!(matches!(err, SiteError::Toml(_)));

    let err = SiteConfig::from_toml_str("[preview]\nswap_delay = \"fast\"\n").unwrap_err();
    assert!(matches!(err, SiteError::Toml(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SITE.as_bytes()).unwrap();

    let config = SiteConfig::load(file.path()).unwrap();
    assert_eq!(config.projects.len(), 3);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.toml");

    let err = SiteConfig::load(&path).unwrap_err();
    match err {
        SiteError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_preview_menu_uses_configured_delays() {
    let config = SiteConfig::from_toml_str(SITE).unwrap();
    let mut menu = config.preview_menu();
    assert_eq!(menu.items().len(), 3);

    let start = Duration::from_secs(1);
    menu.enter(0, Vec2::new(10.0, 10.0), start);
    menu.enter(1, Vec2::new(10.0, 60.0), start);
    assert_eq!(menu.next_deadline(), Some(start + Duration::from_millis(150)));

    assert!(menu.tick(start + Duration::from_millis(150)));
    assert_eq!(menu.state(), MenuState::Showing { item: 1 });

    let left = Duration::from_secs(2);
    menu.leave(left);
    assert_eq!(menu.next_deadline(), Some(left + Duration::from_millis(300)));
    assert!(!menu.tick(left + Duration::from_millis(299)));
    assert!(menu.tick(left + Duration::from_millis(300)));
    assert_eq!(menu.state(), MenuState::Idle);
}

#[test]
fn test_demo_site_config_is_valid() {
    let config = SiteConfig::from_toml_str(include_str!("../../../demos/site.toml")).unwrap();

    assert_eq!(config.navbar.len(), 3);
    assert_eq!(config.social.len(), 2);
    assert_eq!(config.background, neonfolio::NetworkConfig::default());
    assert_eq!(config.preview, neonfolio::PreviewMenuConfig::default());
}
