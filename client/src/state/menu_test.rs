use super::*;

#[test]
fn menu_starts_closed() {
    assert!(!MenuState::default().is_open());
}

#[test]
fn toggle_opens_then_closes() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(menu.is_open());
    menu.toggle();
    assert!(!menu.is_open());
}

#[test]
fn toggle_parity_determines_visibility() {
    for presses in 0..8 {
        let mut menu = MenuState::default();
        for _ in 0..presses {
            menu.toggle();
        }
        assert_eq!(menu.is_open(), presses % 2 == 1, "after {presses} presses");
    }
}

#[test]
fn close_forces_closed_from_either_state() {
    let mut menu = MenuState::default();
    menu.close();
    assert!(!menu.is_open());
    menu.toggle();
    menu.close();
    assert!(!menu.is_open());
}
