use chipbox::domain::{
    dispatch, filter_candidates, CandidateItem, CandidateList, Combobox, HighlightedLabel, Key, WidgetEvent,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const LABELS: [&str; 10] = [
    "Zepto",
    "Linear",
    "Elon Musk",
    "Apple",
    "BMW",
    "Pot",
    "Node",
    "İstanbul",
    "Crème brûlée",
    "ΟΔΟΣ",
];

fn catalog() -> CandidateList {
    CandidateList::new(
        LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| CandidateItem::new((i + 1).to_string(), *label))
            .collect(),
    )
    .unwrap()
}

fn random_query(rng: &mut StdRng) -> String {
    const ALPHABET: &[char] = &[
        'a', 'A', 'e', 'E', 'l', 'L', 'n', 'N', 'o', 'O', 'p', 'P', 't', 'T', 'z', 'Z', ' ', 'm', 'M', 'k', 'K',
        'i', 'I', 'İ', 's', 'è', 'È', 'û', 'Û', 'δ', 'Δ', 'ο', 'Ο', 'σ', 'ς', 'Σ',
    ];
    let len = rng.gen_range(0..4);
    (0..len).map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())]).collect()
}

fn random_selection(rng: &mut StdRng, catalog: &CandidateList) -> Vec<CandidateItem> {
    let mut items: Vec<CandidateItem> = catalog.iter().cloned().collect();
    items.shuffle(rng);
    let keep = rng.gen_range(0..=items.len());
    items.truncate(keep);
    items
}

#[test]
fn test_listed_iff_label_contains_query() {
    let mut rng = StdRng::seed_from_u64(7);
    let catalog = catalog();

    for _ in 0..2000 {
        let query = random_query(&mut rng);
        let selected = random_selection(&mut rng, &catalog);
        let filtered = filter_candidates(catalog.as_slice(), &selected, &query);

        for candidate in catalog.iter() {
            let is_selected = selected.iter().any(|s| s.id == candidate.id);
            let listed = filtered.iter().any(|f| f.candidate.id == candidate.id);
            let expected =
                !is_selected && candidate.label.to_lowercase().contains(&query.to_lowercase());
            assert_eq!(listed, expected, "query {:?}, label {:?}", query, candidate.label);
        }

        // Catalog order is preserved
        let positions: Vec<usize> = filtered
            .iter()
            .map(|f| catalog.iter().position(|c| c.id == f.candidate.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        // Spans sit on char boundaries and cover the folded query
        for f in &filtered {
            let label = &f.candidate.label;
            let matched = label
                .get(f.span.start..f.span.end)
                .unwrap_or_else(|| panic!("span {:?} splits {:?}", f.span, label));
            if !query.is_empty() && !matches!(query.chars().last(), Some('ς' | 'σ' | 'Σ')) {
                assert!(
                    matched.to_lowercase().contains(&query.to_lowercase()),
                    "query {:?}, matched {:?}",
                    query,
                    matched
                );
            }
        }
    }
}

#[test]
fn test_partial_char_fold_is_listed() {
    let catalog = catalog();
    let filtered = filter_candidates(catalog.as_slice(), &[], "i");
    let labels: Vec<&str> = filtered.iter().map(|f| f.candidate.label.as_str()).collect();
    assert!(labels.contains(&"İstanbul"));
    assert!(labels.contains(&"Linear"));

    let istanbul = filtered.iter().find(|f| f.candidate.id == "8").unwrap();
    assert_eq!(&istanbul.candidate.label[istanbul.span.start..istanbul.span.end], "İ");
}

#[test]
fn test_selected_ids_never_listed_during_random_sessions() {
    let mut rng = StdRng::seed_from_u64(42);
    let catalog = catalog();

    for _ in 0..50 {
        let mut combo = Combobox::new(catalog.clone());
        for _ in 0..40 {
            let event = match rng.gen_range(0..6) {
                0 => WidgetEvent::RootClick,
                1 => WidgetEvent::Input {
                    text: random_query(&mut rng),
                },
                2 => WidgetEvent::CandidateClick {
                    id: rng.gen_range(1..=LABELS.len()).to_string(),
                },
                3 => WidgetEvent::KeyDown { key: Key::Backspace },
                4 => WidgetEvent::ChipClick {
                    index: rng.gen_range(0..LABELS.len()),
                },
                _ => WidgetEvent::OutsidePointer,
            };
            dispatch(&mut combo, &event);

            let selected_ids = combo.selected_ids();
            assert!(combo
                .filtered()
                .iter()
                .all(|f| !selected_ids.contains(&f.candidate.id)));

            let mut unique = selected_ids.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), selected_ids.len());

            if let Some(index) = combo.focused_chip() {
                assert!(index < combo.selected().len());
            }
            if combo.is_exhausted() {
                assert!(!combo.is_open());
            }
        }
    }
}

#[test]
fn test_select_then_delete_restores_selection() {
    let mut combo = Combobox::new(catalog());
    combo.select_item("2");
    combo.select_item("5");
    let before = combo.selected().to_vec();

    combo.select_item("3");
    combo.delete_item("3");

    assert_eq!(combo.selected(), before.as_slice());
}

#[test]
fn test_backspace_walkthrough() {
    let mut combo = Combobox::new(catalog());
    for id in ["1", "2", "3"] {
        combo.select_item(id);
    }

    combo.handle_key_down(&Key::Backspace);
    assert_eq!(combo.focused_chip(), Some(2));
    assert_eq!(combo.selected()[2].label, "Elon Musk");

    combo.handle_key_down(&Key::Backspace);
    assert_eq!(combo.selected_ids(), vec!["1", "2"]);
    assert!(combo.focused_chip().is_none());
}

#[test]
fn test_zep_highlight() {
    let catalog = catalog();
    let filtered = filter_candidates(catalog.as_slice(), &[], "zep");
    assert_eq!(filtered.len(), 1);
    assert_eq!((filtered[0].span.start, filtered[0].span.end), (0, 3));

    let label = HighlightedLabel::new(&filtered[0].candidate.label, Some(filtered[0].span));
    assert_eq!(
        label,
        HighlightedLabel::Emphasized {
            before: String::new(),
            matched: "Zep".to_string(),
            after: "to".to_string(),
        }
    );
}

#[test]
fn test_all_selected_forces_closed_with_text() {
    let mut combo = Combobox::new(catalog());
    for i in 1..=LABELS.len() {
        combo.select_item(&i.to_string());
    }

    combo.set_search_text("zep");
    assert_eq!(combo.search_text(), "zep");
    assert!(!combo.is_open());
    assert!(combo.view().dropdown.is_none());
}

#[test]
fn test_outside_pointer_always_closes() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..100 {
        let mut combo = Combobox::new(catalog());
        for _ in 0..rng.gen_range(0..5) {
            combo.select_item(&rng.gen_range(1..=LABELS.len()).to_string());
        }
        if rng.gen_bool(0.5) {
            combo.toggle_open();
        }
        combo.set_search_text(random_query(&mut rng));
        if !combo.selected().is_empty() {
            combo.focus_chip(rng.gen_range(0..combo.selected().len()));
        }

        dispatch(&mut combo, &WidgetEvent::OutsidePointer);
        assert!(!combo.is_open());
        assert!(combo.focused_chip().is_none());
    }
}
