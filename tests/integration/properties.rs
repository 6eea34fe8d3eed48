//! Property tests for theme toggling and section navigation

use folio::app::{Section, ViewStateController};
use folio::storage::MemoryThemeStore;
use folio::theme::{FixedColorScheme, ThemeMode};
use proptest::prelude::*;

fn theme_strategy() -> impl Strategy<Value = ThemeMode> {
    prop_oneof![Just(ThemeMode::Light), Just(ThemeMode::Dark)]
}

fn section_strategy() -> impl Strategy<Value = Section> {
    (0usize..Section::ALL.len()).prop_map(Section::from_index)
}

fn controller(stored: Option<ThemeMode>) -> ViewStateController {
    ViewStateController::initialize(
        Box::new(MemoryThemeStore::new(stored)),
        &FixedColorScheme(None),
    )
}

proptest! {
    #[test]
    fn toggle_parity(initial in theme_strategy(), count in 0usize..64) {
        let mut view = controller(Some(initial));
        for _ in 0..count {
            view.toggle_theme();
        }
        let expected = if count % 2 == 0 { initial } else { initial.toggled() };
        prop_assert_eq!(view.theme(), expected);
    }

    #[test]
    fn navigate_lands_on_target(path in prop::collection::vec(section_strategy(), 1..32)) {
        let mut view = controller(None);
        for &section in &path {
            view.navigate_to(section);
            prop_assert_eq!(view.section(), section);
        }
        prop_assert_eq!(view.theme(), ThemeMode::Light);
    }

    #[test]
    fn next_then_prev_is_identity(section in section_strategy()) {
        prop_assert_eq!(section.next().prev(), section);
        prop_assert_eq!(section.prev().next(), section);
    }
}
