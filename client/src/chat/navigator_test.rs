use std::cell::RefCell;

use super::*;
use crate::chat::replies::SideEffect;

#[derive(Default)]
struct RecordingNavigator {
    external: RefCell<Vec<String>>,
    internal: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn open_external(&self, url: &str) {
        self.external.borrow_mut().push(url.to_owned());
    }

    fn navigate_internal(&self, path: &str) {
        self.internal.borrow_mut().push(path.to_owned());
    }
}

#[test]
fn internal_effect_navigates_the_document() {
    let nav = RecordingNavigator::default();
    let effect = SideEffect::NavigateInternal("/contato".to_owned());
    apply_side_effect(&nav, Some(&effect));
    assert_eq!(*nav.internal.borrow(), vec!["/contato".to_owned()]);
    assert!(nav.external.borrow().is_empty());
}

#[test]
fn external_effect_opens_a_new_tab() {
    let nav = RecordingNavigator::default();
    let effect = SideEffect::NavigateExternal("https://loja.vetorti.com.br".to_owned());
    apply_side_effect(&nav, Some(&effect));
    assert_eq!(*nav.external.borrow(), vec!["https://loja.vetorti.com.br".to_owned()]);
    assert!(nav.internal.borrow().is_empty());
}

#[test]
fn no_effect_is_a_noop() {
    let nav = RecordingNavigator::default();
    apply_side_effect(&nav, None);
    assert!(nav.external.borrow().is_empty());
    assert!(nav.internal.borrow().is_empty());
}
