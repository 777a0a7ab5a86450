use super::*;

#[test]
fn modal_state_default_is_hidden_and_empty() {
    let modal = ModalState::default();
    assert!(!modal.open);
    assert!(modal.title.is_empty());
    assert!(modal.message.is_empty());
    assert_eq!(modal.display(), "none");
}

#[test]
fn show_sets_slots_and_opens_as_flex() {
    let mut modal = ModalState::default();
    modal.show("Erreur", "Veuillez remplir tous les champs.");
    assert!(modal.open);
    assert_eq!(modal.title, "Erreur");
    assert_eq!(modal.message, "Veuillez remplir tous les champs.");
    assert_eq!(modal.display(), "flex");
}

#[test]
fn show_overwrites_previous_content() {
    let mut modal = ModalState::default();
    modal.show("first", "one");
    modal.show("second", "two");
    assert_eq!(modal.title, "second");
    assert_eq!(modal.message, "two");
}

#[test]
fn hide_closes_without_clearing_text() {
    let mut modal = ModalState::default();
    modal.show("t", "m");
    modal.hide();
    assert!(!modal.open);
    assert_eq!(modal.display(), "none");
    assert_eq!(modal.title, "t");
}
