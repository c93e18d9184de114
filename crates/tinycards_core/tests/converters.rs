use serde_json::{json, Value};
use tinycards_core::{
    card_to_json, deck_to_json, fact_to_json, favorite_to_json, json_to_card, json_to_deck,
    json_to_decks, json_to_fact, json_to_favorite, json_to_searchable, json_to_side,
    json_to_trendable, json_to_trendables, json_to_user, side_to_json, trendable_to_json,
    user_to_json, ConvertError, Deck, DeckPayloadOptions, Fact, Visibility,
};

fn side_json(id: &str, text: &str) -> Value {
    json!({
        "id": id,
        "concepts": [{
            "id": format!("concept-{id}"),
            "createdAt": 1_600_000_000_000_i64,
            "updatedAt": 1_600_000_100_000_i64,
            "noteFacts": [],
            "fact": {"id": format!("fact-{id}"), "type": "TEXT", "text": text}
        }]
    })
}

fn card_json(id: &str, front: &str, back: &str) -> Value {
    json!({
        "id": id,
        "sides": [side_json(&format!("{id}-front"), front), side_json(&format!("{id}-back"), back)]
    })
}

fn deck_json() -> Value {
    json!({
        "id": "deck-1",
        "name": "Spanish basics",
        "description": "First words",
        "compactId": "abc",
        "slug": "spanish-basics",
        "imageUrl": "https://img.example/cover.png",
        "private": true,
        "shareable": true,
        "cards": [card_json("k1", "hello", "hola"), card_json("k2", "bye", "adios")]
    })
}

fn trendable_json() -> Value {
    json!({
        "id": "trend-1",
        "type": "DECK",
        "data": {
            "blacklistedQuestionTypes": [],
            "blacklistedSideIndices": [1],
            "cardCount": 12,
            "compactId": "xyz",
            "coverImageUrl": "https://img.example/cover.png",
            "createdAt": 1_500_000_000.5,
            "deckGroups": [{"id": "g1"}],
            "description": "Numbers 1-12",
            "enabled": true,
            "favoriteCount": 40,
            "fromLanguage": "en",
            "gradingModes": ["TYPING"],
            "hashes": {"cover": "f00"},
            "id": "deck-9",
            "imageUrl": null,
            "name": "Numbers",
            "picture": "https://img.example/avatar.png",
            "private": false,
            "shareable": false,
            "slug": "numbers",
            "tagIds": ["t1"],
            "ttsLanguages": ["es"],
            "uiLanguage": "en",
            "updatedAt": 1_500_000_100.0,
            "userId": "user-3",
            "username": "duo"
        }
    })
}

fn searchable_json() -> Value {
    json!({
        "id": "search-1",
        "type": "DECK",
        "data": {
            "id": "deck-4",
            "name": "Colors",
            "description": null,
            "averageFreshness": 0.75
        }
    })
}

#[test]
fn fact_read_and_write_follow_wire_example() {
    let fact = json_to_fact(&json!({"id": "f1", "type": "text", "text": "hola"})).unwrap();

    assert_eq!(
        fact,
        Fact {
            id: Some("f1".to_string()),
            kind: "text".to_string(),
            text: Some("hola".to_string()),
            image_url: None,
            tts_url: None,
        }
    );
    assert_eq!(fact_to_json(&fact), json!({"text": "hola", "type": "text"}));
}

#[test]
fn fact_reads_media_urls() {
    let fact = json_to_fact(&json!({
        "id": "f2",
        "type": "IMAGE",
        "imageUrl": "https://img.example/cat.png",
        "ttsUrl": "https://tts.example/cat.mp3"
    }))
    .unwrap();

    assert_eq!(fact.text, None);
    assert_eq!(fact.image_url.as_deref(), Some("https://img.example/cat.png"));
    assert_eq!(fact.tts_url.as_deref(), Some("https://tts.example/cat.mp3"));
}

#[test]
fn fact_requires_id_and_type() {
    let err = json_to_fact(&json!({"type": "TEXT"})).unwrap_err();
    assert!(matches!(err, ConvertError::MissingField(name) if name == "id"));

    let err = json_to_fact(&json!({"id": "f1"})).unwrap_err();
    assert!(matches!(err, ConvertError::MissingField(name) if name == "type"));
}

#[test]
fn side_write_omits_id_and_concept_identity() {
    let side = json_to_side(&side_json("s1", "hello")).unwrap();
    assert_eq!(side.id.as_deref(), Some("s1"));
    assert_eq!(side.concepts[0].creation_timestamp, Some(1_600_000_000_000));

    assert_eq!(
        side_to_json(&side),
        json!({"concepts": [{"fact": {"text": "hello", "type": "TEXT"}}]})
    );
}

#[test]
fn card_sides_map_index_zero_to_front() {
    let card = json_to_card(&card_json("k1", "hello", "hola")).unwrap();

    assert_eq!(card.id.as_deref(), Some("k1"));
    assert_eq!(card.front.first_text(), Some("hello"));
    assert_eq!(card.back.first_text(), Some("hola"));

    let written = card_to_json(&card);
    assert_eq!(written["sides"][0]["concepts"][0]["fact"]["text"], "hello");
    assert_eq!(written["sides"][1]["concepts"][0]["fact"]["text"], "hola");
    assert!(written.get("id").is_none());
}

#[test]
fn card_requires_sides_and_id() {
    let err = json_to_card(&json!({"id": "k1"})).unwrap_err();
    assert!(matches!(err, ConvertError::MissingField(name) if name == "sides"));

    let mut value = card_json("k1", "a", "b");
    if let Some(object) = value.as_object_mut() {
        object.remove("id");
    }
    let err = json_to_card(&value).unwrap_err();
    assert!(matches!(err, ConvertError::MissingField(name) if name == "id"));
}

#[test]
fn deck_read_maps_wire_names() {
    let deck = json_to_deck(&deck_json()).unwrap();

    assert_eq!(deck.id.as_deref(), Some("deck-1"));
    assert_eq!(deck.title, "Spanish basics");
    assert_eq!(deck.description.as_deref(), Some("First words"));
    assert_eq!(deck.cover.as_deref(), Some("https://img.example/cover.png"));
    assert_eq!(deck.visibility, Visibility::Shareable);
    assert_eq!(deck.cards.len(), 2);
    assert_eq!(
        deck.shareable_link(),
        "https://tiny.cards/decks/abc/spanish-basics"
    );
}

#[test]
fn deck_read_reports_each_missing_required_key() {
    for key in [
        "name",
        "description",
        "id",
        "compactId",
        "slug",
        "imageUrl",
        "private",
        "shareable",
    ] {
        let mut value = deck_json();
        if let Some(object) = value.as_object_mut() {
            object.remove(key);
        }
        let err = json_to_deck(&value).unwrap_err();
        assert!(
            matches!(&err, ConvertError::MissingField(name) if name == key),
            "expected missing `{key}`, got {err}"
        );
    }
}

#[test]
fn deck_write_emits_service_schema_with_placeholders() {
    let mut deck = Deck::with_flags("Travel", true, false).unwrap();
    deck.description = Some("Phrases".to_string());
    deck.cover = Some("/tmp/cover.png".to_string());
    deck.front_language = Some("de".to_string());
    deck.add_card(("train", "Zug"));

    let payload = deck_to_json(&deck, &DeckPayloadOptions::default()).unwrap();
    let mut keys: Vec<_> = payload
        .as_object()
        .map(|object| object.keys().cloned().collect())
        .unwrap_or_default();
    keys.sort();

    assert_eq!(
        keys,
        vec![
            "blacklistedQuestionTypes",
            "blacklistedSideIndices",
            "cards",
            "description",
            "fromLanguage",
            "gradingModes",
            "imageFile",
            "name",
            "private",
            "shareable",
            "ttsLanguages",
        ]
    );
    assert_eq!(payload["name"], "Travel");
    assert_eq!(payload["private"], true);
    assert_eq!(payload["shareable"], false);
    assert_eq!(payload["fromLanguage"], "en");
    assert_eq!(payload["imageFile"], "/tmp/cover.png");
    assert_eq!(payload["ttsLanguages"], json!([]));
    assert_eq!(payload["gradingModes"], json!([]));
    assert_eq!(payload["cards"][0]["sides"][1]["concepts"][0]["fact"]["text"], "Zug");
}

#[test]
fn deck_round_trip_preserves_content() {
    let original = deck_json();
    let deck = json_to_deck(&original).unwrap();
    let payload = deck_to_json(&deck, &DeckPayloadOptions::default()).unwrap();
    let reread = json_to_deck(&json!({
        "id": "deck-1",
        "name": payload["name"],
        "description": payload["description"],
        "compactId": "abc",
        "slug": "spanish-basics",
        "imageUrl": payload["imageFile"],
        "private": payload["private"],
        "shareable": payload["shareable"],
    }))
    .unwrap();

    assert_eq!(reread.title, deck.title);
    assert_eq!(reread.description, deck.description);
    assert_eq!(reread.visibility, deck.visibility);

    let cards = payload["cards"].as_array().cloned().unwrap_or_default();
    assert_eq!(cards.len(), 2);
    for (written, card) in cards.iter().zip(&deck.cards) {
        assert_eq!(
            written["sides"][0]["concepts"][0]["fact"]["text"],
            card.front.first_text().unwrap_or_default()
        );
        assert_eq!(
            written["sides"][1]["concepts"][0]["fact"]["text"],
            card.back.first_text().unwrap_or_default()
        );
    }
}

#[test]
fn deck_list_fails_on_first_bad_element() {
    let mut broken = deck_json();
    if let Some(object) = broken.as_object_mut() {
        object.remove("slug");
    }

    let decks = json_to_decks(&json!([deck_json(), deck_json()])).unwrap();
    assert_eq!(decks.len(), 2);

    let err = json_to_decks(&json!([deck_json(), broken])).unwrap_err();
    assert!(matches!(err, ConvertError::MissingField(name) if name == "slug"));

    let err = json_to_decks(&deck_json()).unwrap_err();
    assert!(matches!(err, ConvertError::StructuralMismatch { .. }));
}

#[test]
fn trendable_without_data_is_missing_field() {
    let err = json_to_trendable(&json!({"id": "t1", "type": "DECK"})).unwrap_err();
    assert!(matches!(err, ConvertError::MissingField(name) if name == "data"));
}

#[test]
fn trendable_requires_every_payload_attribute_but_fullname() {
    let value = trendable_json();
    let keys: Vec<String> = value["data"]
        .as_object()
        .map(|data| data.keys().cloned().collect())
        .unwrap_or_default();
    assert_eq!(keys.len(), 26);

    for key in keys {
        let mut broken = trendable_json();
        if let Some(data) = broken["data"].as_object_mut() {
            data.remove(&key);
        }
        let err = json_to_trendable(&broken).unwrap_err();
        assert!(
            matches!(&err, ConvertError::MissingField(name) if *name == key),
            "expected missing `{key}`, got {err}"
        );
    }
}

#[test]
fn trendable_round_trip_preserves_payload_keys() {
    let mut value = trendable_json();
    let trendable = json_to_trendable(&value).unwrap();
    assert_eq!(trendable.trendable_data().map(|data| data.card_count), Some(12));
    assert_eq!(
        trendable.trendable_data().and_then(|data| data.fullname.clone()),
        None
    );
    assert_eq!(trendable_to_json(&trendable).unwrap(), value);

    value["data"]["fullname"] = json!("Duo Lingo");
    let trendable = json_to_trendable(&value).unwrap();
    assert_eq!(trendable_to_json(&trendable).unwrap(), value);
}

#[test]
fn trendable_integer_timestamps_stay_integers() {
    let mut value = trendable_json();
    value["data"]["createdAt"] = json!(1500000000);
    value["data"]["updatedAt"] = json!(1500000100);

    let out = trendable_to_json(&json_to_trendable(&value).unwrap()).unwrap();
    assert!(out["data"]["createdAt"].is_i64());
    assert!(out["data"]["updatedAt"].is_i64());
    assert_eq!(out, value);
}

#[test]
fn trendable_flags_accept_numeric_values() {
    let mut value = trendable_json();
    value["data"]["enabled"] = json!(1);
    value["data"]["private"] = json!(0);
    value["data"]["shareable"] = json!(0);

    let trendable = json_to_trendable(&value).unwrap();
    let data = trendable.trendable_data().expect("expected trending payload");
    assert!(data.enabled);
    assert!(!data.private);
    assert!(!data.shareable);

    let trendables = json_to_trendables(&json!([trendable_json(), value])).unwrap();
    assert_eq!(trendables.len(), 2);
}

#[test]
fn listing_envelope_requires_id_and_type() {
    for key in ["id", "type"] {
        let mut broken = trendable_json();
        if let Some(envelope) = broken.as_object_mut() {
            envelope.remove(key);
        }
        let err = json_to_trendable(&broken).unwrap_err();
        assert!(
            matches!(&err, ConvertError::MissingField(name) if name == key),
            "expected missing `{key}`, got {err}"
        );

        let mut broken = searchable_json();
        if let Some(envelope) = broken.as_object_mut() {
            envelope.remove(key);
        }
        let err = json_to_searchable(&broken).unwrap_err();
        assert!(
            matches!(&err, ConvertError::MissingField(name) if name == key),
            "expected missing `{key}`, got {err}"
        );
    }
}

#[test]
fn searchable_requires_every_payload_attribute_but_freshness() {
    for key in ["id", "name", "description"] {
        let mut broken = searchable_json();
        if let Some(data) = broken["data"].as_object_mut() {
            data.remove(key);
        }
        let err = json_to_searchable(&broken).unwrap_err();
        assert!(
            matches!(&err, ConvertError::MissingField(name) if name == key),
            "expected missing `{key}`, got {err}"
        );
    }

    let mut without_freshness = searchable_json();
    if let Some(data) = without_freshness["data"].as_object_mut() {
        data.remove("averageFreshness");
    }
    assert!(json_to_searchable(&without_freshness).is_ok());
}

#[test]
fn trendable_list_decodes_each_entry() {
    let trendables = json_to_trendables(&json!([trendable_json(), trendable_json()])).unwrap();
    assert_eq!(trendables.len(), 2);
    assert_eq!(trendables[1].kind, "DECK");
}

#[test]
fn favorite_recurses_into_deck() {
    let favorite = json_to_favorite(&json!({"id": "fav-1", "deck": deck_json()})).unwrap();
    assert_eq!(favorite.id, "fav-1");
    assert_eq!(favorite.deck.title, "Spanish basics");

    let written = favorite_to_json(&favorite).unwrap();
    assert_eq!(written["id"], "fav-1");
    assert_eq!(written["deck"]["name"], "Spanish basics");
    assert_eq!(written["deck"]["fromLanguage"], "en");
    assert_eq!(written["deck"]["cards"].as_array().map(Vec::len), Some(2));
}

#[test]
fn favorite_requires_deck() {
    let err = json_to_favorite(&json!({"id": "fav-1"})).unwrap_err();
    assert!(matches!(err, ConvertError::MissingField(name) if name == "deck"));
}

#[test]
fn user_maps_picture_to_picture_url() {
    let value = json!({
        "id": 42,
        "creationDate": 1_480_000_000,
        "email": "learner@example.com",
        "fullname": "Learner",
        "learningLanguage": "fr",
        "picture": "https://img.example/me.png",
        "subscribed": true,
        "subscriberCount": 10,
        "subscriptionCount": 2,
        "uiLanguage": "en",
        "username": "learner"
    });

    let user = json_to_user(&value).unwrap();
    assert_eq!(user.id, 42);
    assert_eq!(user.picture_url, "https://img.example/me.png");
    assert_eq!(user.subscriber_count, 10);
    assert_eq!(user_to_json(&user), value);
}

#[test]
fn converters_do_not_mutate_input() {
    let value = deck_json();
    let snapshot = value.clone();
    json_to_deck(&value).unwrap();
    assert_eq!(value, snapshot);
}
