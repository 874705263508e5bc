//! Property-based tests for the pending-selection slot and catalog ordering

use std::sync::Arc;

use cascade_completion::{
    ChildEntry, ChildSuggestionSource, ParentEntry, ParentSuggestionSource, Position,
    SelectionSlot, SnippetCatalog, SuggestionContext, SuggestionSource,
};
use proptest::prelude::*;

/// Strategy for generating valid entry labels
fn label_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,12}"
}

/// Strategy for generating child entries
fn child_strategy() -> impl Strategy<Value = ChildEntry> {
    (label_strategy(), any::<bool>()).prop_map(|(label, with_code)| ChildEntry {
        instance_label: label.clone(),
        description: format!("{label} description"),
        preview_image_url: format!("http://images.test/{label}.png"),
        demo_code: with_code.then(|| format!("{label}()")),
    })
}

/// Strategy for generating parent entries
fn parent_strategy() -> impl Strategy<Value = ParentEntry> {
    (label_strategy(), prop::collection::vec(child_strategy(), 0..5)).prop_map(
        |(label, children)| ParentEntry {
            command_key: label.clone(),
            label,
            children,
        },
    )
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

proptest! {
    /// Property: a slot always hands back exactly the last value written
    #[test]
    fn prop_slot_last_write_wins(keys in prop::collection::vec(label_strategy(), 1..10)) {
        let slot = SelectionSlot::new();
        for key in &keys {
            slot.set(key.clone());
        }
        prop_assert_eq!(slot.take(), keys.last().cloned());
    }

    /// Property: consumption is one-shot; a second take sees nothing
    #[test]
    fn prop_slot_take_clears(key in label_strategy()) {
        let slot = SelectionSlot::new();
        slot.set(key);
        prop_assert!(slot.take().is_some());
        prop_assert!(slot.take().is_none());
        prop_assert!(!slot.is_set());
    }

    /// Property: a trigger request yields one suggestion per parent, in
    /// catalog order, labeled with the parent label
    #[test]
    fn prop_parent_pass_matches_catalog(parents in prop::collection::vec(parent_strategy(), 0..10)) {
        let catalog = Arc::new(SnippetCatalog::from_entries(parents.clone()));
        let source = ParentSuggestionSource::new(catalog, '@', "cascade.selectParent");
        let ctx = SuggestionContext::character(Position::new(0, 1), '@');

        let suggestions = block_on(source.provide_suggestions(&ctx)).unwrap();

        prop_assert_eq!(suggestions.len(), parents.len());
        for (suggestion, parent) in suggestions.iter().zip(&parents) {
            prop_assert_eq!(&suggestion.label, &parent.label);
            let command = suggestion.command.as_ref().unwrap();
            prop_assert_eq!(&command.arguments, &vec![parent.command_key.clone()]);
        }
    }

    /// Property: after selecting any parent, the child pass yields one
    /// suggestion per child labeled `{parent}-{instance}` and clears the slot
    #[test]
    fn prop_child_pass_labels_and_consumption(parents in prop::collection::vec(parent_strategy(), 1..8)) {
        let catalog = Arc::new(SnippetCatalog::from_entries(parents.clone()));
        let slot = SelectionSlot::new();
        let source = ChildSuggestionSource::new(catalog.clone(), slot.clone());
        let ctx = SuggestionContext::invoked(Position::new(0, 0));

        // The selected label resolves to the first entry carrying it.
        let selected = parents.last().unwrap().label.clone();
        let resolved = catalog.find_by_label(&selected).unwrap().clone();

        slot.set(selected);
        let suggestions = block_on(source.provide_suggestions(&ctx)).unwrap();

        prop_assert_eq!(suggestions.len(), resolved.children.len());
        for (suggestion, child) in suggestions.iter().zip(&resolved.children) {
            prop_assert_eq!(
                suggestion.label.clone(),
                format!("{}-{}", resolved.label, child.instance_label)
            );
            prop_assert_eq!(
                suggestion.insert_text.clone(),
                child.demo_code.clone().unwrap_or_default()
            );
        }
        prop_assert!(!slot.is_set());

        // The follow-up request always comes up empty.
        let after = block_on(source.provide_suggestions(&ctx)).unwrap();
        prop_assert!(after.is_empty());
    }
}
