use tabletop_core::{Card, Component, Deck, Dice, Face, PcgSource, Registry, Step, Steps, Tool};

fn fate() -> Dice {
    Dice::builder("fate")
        .count(2)
        .sides(3)
        .mapping([
            (1, Face::Number(-1)),
            (2, Face::Number(0)),
            (3, Face::Number(1)),
        ])
        .build()
        .unwrap()
}

#[test]
fn schedule_serializes_in_pop_order() {
    let mut steps = Steps::new();
    steps.push(&Step::new("b", 2).unwrap());
    steps.push(&Step::new("a", 1).unwrap());

    let text = ron::to_string(&steps).unwrap();
    assert_eq!(
        text,
        r#"(current:[{"id":"a","priority":1},{"id":"b","priority":2}],last:None)"#
    );
}

#[test]
fn deck_serializes_cards_without_counters() {
    let mut deck = Deck::new();
    deck.append(&Card::new("ace").unwrap()).unwrap();
    deck.append(&Card::new("king").unwrap()).unwrap();
    deck.get_mut(0).unwrap().counter_mut().add("marked", 1);
    deck.pop().unwrap();

    let text = ron::to_string(&deck).unwrap();
    assert!(text.starts_with("(current:["), "{text}");
    assert!(text.contains(r#""id":"ace""#), "{text}");
    assert!(text.contains(r#"last:Some({"id":"king""#), "{text}");
    for field in ["\"is_revealed\"", "\"is_active\"", "\"side\""] {
        assert!(text.contains(field), "{field} missing from {text}");
    }
    assert!(!text.contains("counter"), "{text}");
    assert!(!text.contains("marked"), "{text}");
}

#[test]
fn registry_serializes_as_a_keyed_map() {
    let mut registry = Registry::new();
    registry.add(fate(), None).unwrap();
    registry.add(Dice::new("d6", 6).unwrap(), None).unwrap();

    let text = ron::to_string(&registry).unwrap();
    assert!(text.starts_with(r#"{"fate":{"id":"fate""#), "{text}");
    assert!(text.contains(r#""d6":{"id":"d6""#), "{text}");
    assert!(text.find("\"fate\"") < text.find("\"d6\""));
}

#[test]
fn mapped_dice_serialize_both_rolls() {
    let mut dice = fate();
    dice.counter_mut().add("rerolls", 1);
    dice.roll_mapped(&mut PcgSource::new(42));

    let text = ron::to_string(&dice).unwrap();
    assert!(text.contains(r#""sides":3"#), "{text}");
    assert!(text.contains(r#""mapping":{1:-1,2:0,3:1}"#), "{text}");
    assert!(text.contains(r#""last_roll":["#), "{text}");
    assert!(text.contains(r#""last_roll_mapped":["#), "{text}");
    assert!(!text.contains("counter"), "{text}");

    let plain = ron::to_string(&Dice::new("d6", 6).unwrap()).unwrap();
    assert!(!plain.contains("mapping"), "{plain}");
}
