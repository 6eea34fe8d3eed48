//! Section navigation, project detail and link behavior through `App`

use crate::common::{RecordingOpener, TestFixture};
use folio::app::{ModalState, Section};
use folio::catalog::{PROJECTS, project_by_title};
use folio::links::LinkKind;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(Section::Home)]
#[case(Section::About)]
#[case(Section::Projects)]
#[case(Section::Blog)]
fn test_navigate_to_each_section(#[case] section: Section) -> Result<(), std::io::Error> {
    let fixture = TestFixture::new()?;
    let mut view = fixture.controller(None);

    view.navigate_to(section);

    assert_eq!(view.section(), section);
    assert!(view.take_scroll_reset());
    assert!(!view.take_scroll_reset());
    Ok(())
}

#[test]
fn test_navigate_to_current_section_still_resets_scroll() -> Result<(), std::io::Error> {
    let fixture = TestFixture::new()?;
    let mut app = fixture.app(RecordingOpener::default());
    app.ui.content_scroll = 40;

    app.navigate_to(Section::Home);

    assert_eq!(app.view.section(), Section::Home);
    assert_eq!(app.ui.content_scroll, 0);
    Ok(())
}

#[test]
fn test_navigation_leaves_theme_alone() -> Result<(), std::io::Error> {
    let fixture = TestFixture::new()?;
    let mut view = fixture.controller(Some(true));
    let (theme, _) = view.snapshot();

    view.navigate_to(Section::Blog);

    assert_eq!(view.snapshot(), (theme, Section::Blog));
    Ok(())
}

#[rstest]
#[case("Setram Ticketing System", false)]
#[case("Tahalile", false)]
#[case("Coding Game API", true)]
#[case("E-Commerce Platform", true)]
#[case("AI-Based Food Ingredient Prediction", true)]
fn test_has_links(#[case] title: &str, #[case] expected: bool) {
    let project = project_by_title(title);
    assert!(project.is_some(), "{title} missing from catalog");
    assert_eq!(project.map(folio::Project::has_links), Some(expected));
}

#[test]
fn test_has_links_matches_fields_for_whole_catalog() {
    for project in PROJECTS {
        assert_eq!(
            project.has_links(),
            project.github.is_some() || project.demo.is_some(),
            "{}",
            project.title
        );
    }
}

#[test]
fn test_open_close_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    let mut view = fixture.controller(None);
    let setram = project_by_title("Setram Ticketing System").ok_or("Setram missing")?;

    view.open_project_detail(setram);
    assert!(view.modal().is_open());
    assert_eq!(view.modal().selected_project(), Some(setram));

    view.close_project_detail();
    assert_eq!(*view.modal(), ModalState::closed());
    assert!(view.modal().selected_project().is_none());
    Ok(())
}

#[test]
fn test_close_when_already_closed_is_noop() -> Result<(), std::io::Error> {
    let fixture = TestFixture::new()?;
    let mut view = fixture.controller(None);
    view.close_project_detail();
    assert_eq!(*view.modal(), ModalState::closed());
    Ok(())
}

#[test]
fn test_open_replaces_selection() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    let mut view = fixture.controller(None);
    let setram = project_by_title("Setram Ticketing System").ok_or("Setram missing")?;
    let tahalile = project_by_title("Tahalile").ok_or("Tahalile missing")?;

    view.open_project_detail(setram);
    view.open_project_detail(tahalile);

    assert!(view.modal().is_open());
    assert_eq!(view.modal().selected_project(), Some(tahalile));
    Ok(())
}

#[test]
fn test_modal_survives_section_change() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    let mut view = fixture.controller(None);
    let tahalile = project_by_title("Tahalile").ok_or("Tahalile missing")?;

    view.open_project_detail(tahalile);
    view.navigate_to(Section::About);

    assert_eq!(view.modal().selected_project(), Some(tahalile));
    Ok(())
}

#[test]
fn test_tahalile_gallery_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    let mut view = fixture.controller(None);
    let tahalile = project_by_title("Tahalile").ok_or("Tahalile missing")?;

    view.open_project_detail(tahalile);
    let images = view.modal().selected_project().map(|p| p.images.to_vec());

    assert_eq!(
        images,
        Some(vec!["/tahalile.png", "/tahalile2.png", "/tahalile3.png"])
    );
    Ok(())
}

#[test]
fn test_links_open_from_modal() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    let opener = RecordingOpener::default();
    let mut app = fixture.app(opener.clone());
    let food = project_by_title("AI-Based Food Ingredient Prediction").ok_or("missing")?;

    // Outside Projects the modal is the only link target.
    app.open_project_detail(food);
    assert!(app.open_link(LinkKind::Source));

    assert_eq!(
        *opener.opened.borrow(),
        vec!["https://example.com/code/food-ingredient-prediction".to_string()]
    );
    Ok(())
}
