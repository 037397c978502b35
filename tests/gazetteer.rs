use std::fs;

use sehat::entities::{LocalizedName, Village};
use sehat::gazetteer::{Gazetteer, ProvincesAndCities};
use sehat::locale::Language;

// Trimmed copy of the published dataset shape, quirks included: the
// "tahasil" spelling, the capitalized "Gram Panchayat" key, explicit nulls.
const STATES_JSON: &str = r#"{
    "states": [
        {
            "state": "Madhya Pradesh",
            "state-hi": "मध्य प्रदेश",
            "districts": [
                {
                    "name": "Bhopal",
                    "name-hi": "भोपाल",
                    "tahasil": ["Huzur", "Berasia"],
                    "block": [
                        {
                            "name": "Phanda",
                            "name-hi": "फंदा",
                            "Gram Panchayat": [
                                {
                                    "name": "Bilkhiria",
                                    "name-hi": "बिलखिरिया",
                                    "village": [
                                        {"name": "Bilkhiria Khurd", "name-hi": "बिलखिरिया खुर्द"},
                                        {"name": "Kalara Bila"}
                                    ]
                                }
                            ]
                        }
                    ],
                    "block-hi": [
                        {"name": "फंदा", "Gram Panchayat": null}
                    ]
                },
                {
                    "name": "Indore",
                    "tahasil": null,
                    "block": null,
                    "block-hi": null
                }
            ]
        },
        {
            "state": "Tripura",
            "state-hi": null,
            "districts": null
        }
    ]
}"#;

#[test]
fn test_parse_states_document() {
    let gazetteer = Gazetteer::from_json(STATES_JSON).unwrap();

    assert_eq!(gazetteer.states.len(), 2);
    assert_eq!(gazetteer.states[0].districts.len(), 2);
    assert_eq!(gazetteer.states[1].districts.len(), 0); // null reads as empty
}

#[test]
fn test_lookup_chain() {
    let gazetteer = Gazetteer::from_json(STATES_JSON).unwrap();

    let village = gazetteer
        .state("Madhya Pradesh")
        .and_then(|state| state.district("Bhopal"))
        .and_then(|district| district.block("Phanda"))
        .and_then(|block| block.gram_panchayat("Bilkhiria"))
        .and_then(|panchayat| panchayat.village("Bilkhiria Khurd"));
    assert!(village.is_some());

    assert!(gazetteer.state("Rajasthan").is_none());
    let bhopal = gazetteer.state("Madhya Pradesh").unwrap().district("Bhopal").unwrap();
    assert!(bhopal.block("Nowhere").is_none());
}

#[test]
fn test_tehsils() {
    let gazetteer = Gazetteer::from_json(STATES_JSON).unwrap();
    let bhopal = gazetteer.state("Madhya Pradesh").unwrap().district("Bhopal").unwrap();

    assert_eq!(bhopal.tehsils, vec!["Huzur", "Berasia"]);
    assert!(bhopal.has_tehsil("Huzur"));
    assert!(!bhopal.has_tehsil("Nowhere"));
}

#[test]
fn test_null_lists_read_as_empty() {
    let gazetteer = Gazetteer::from_json(STATES_JSON).unwrap();
    let madhya_pradesh = gazetteer.state("Madhya Pradesh").unwrap();

    let indore = madhya_pradesh.district("Indore").unwrap();
    assert!(indore.tehsils.is_empty());
    assert!(indore.blocks.is_empty());
    assert!(indore.blocks_hindi.is_empty());

    let bhopal = madhya_pradesh.district("Bhopal").unwrap();
    assert!(bhopal.blocks_hindi[0].gram_panchayats.is_empty());
}

#[test]
fn test_display_name_resolution() {
    let gazetteer = Gazetteer::from_json(STATES_JSON).unwrap();
    let english = Language::english();
    let hindi = Language::hindi();

    let madhya_pradesh = gazetteer.state("Madhya Pradesh").unwrap();
    assert_eq!(madhya_pradesh.display_name(&english), "Madhya Pradesh");
    assert_eq!(madhya_pradesh.display_name(&hindi), "मध्य प्रदेश");

    // Hindi falls back to the English name when the Hindi side is missing
    let tripura = gazetteer.state("Tripura").unwrap();
    assert_eq!(tripura.display_name(&hindi), "Tripura");

    // Other languages never pick the Hindi side
    assert_eq!(madhya_pradesh.display_name(&Language::new("ta")), "Madhya Pradesh");

    let kalara = gazetteer
        .state("Madhya Pradesh")
        .unwrap()
        .district("Bhopal")
        .unwrap()
        .block("Phanda")
        .unwrap()
        .gram_panchayat("Bilkhiria")
        .unwrap()
        .village("Kalara Bila")
        .unwrap();
    assert_eq!(kalara.display_name(&hindi), "Kalara Bila");

    // A record with no names resolves to an empty string
    assert_eq!(Village::default().display_name(&english), "");
    assert_eq!(Village::default().display_name(&hindi), "");
}

#[test]
fn test_provinces_and_cities() {
    let dataset = ProvincesAndCities::from_json(
        r#"{"provinces": ["Almaty Region", "Turkistan Region"], "cities": ["Almaty", "Astana"]}"#,
    )
    .unwrap();

    assert_eq!(dataset.province("Almaty Region"), Some("Almaty Region"));
    assert_eq!(dataset.city("Astana"), Some("Astana"));
    assert_eq!(dataset.city("Karaganda"), None);
}

#[test]
fn test_provinces_and_cities_tolerate_null_and_missing() {
    let nulled = ProvincesAndCities::from_json(r#"{"provinces": null, "cities": null}"#).unwrap();
    assert!(nulled.provinces.is_empty());
    assert!(nulled.cities.is_empty());

    let empty = ProvincesAndCities::from_json("{}").unwrap();
    assert!(empty.provinces.is_empty());
    assert!(empty.cities.is_empty());
}

#[test]
fn test_load_from_file() {
    let dir = std::env::temp_dir().join("sehat_test_gazetteer_load");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("state_district_tehsil.json");
    fs::write(&path, STATES_JSON).unwrap();

    let gazetteer = Gazetteer::load_from_file(&path).unwrap();
    assert!(gazetteer.state("Madhya Pradesh").is_some());

    // Clean up
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_load_from_file_errors() {
    let dir = std::env::temp_dir().join("sehat_test_gazetteer_errors");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    let missing = Gazetteer::load_from_file(dir.join("absent.json"));
    assert!(missing.is_err());
    assert!(format!("{:#}", missing.unwrap_err()).contains("Failed to read"));

    let malformed_path = dir.join("broken.json");
    fs::write(&malformed_path, "{ states: oops").unwrap();
    let malformed = Gazetteer::load_from_file(&malformed_path);
    assert!(malformed.is_err());
    assert!(format!("{:#}", malformed.unwrap_err()).contains("Failed to parse"));

    // Clean up
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_empty_states_document() {
    let gazetteer = Gazetteer::from_json("{}").unwrap();
    assert!(gazetteer.states.is_empty());
    assert!(gazetteer.state("Madhya Pradesh").is_none());
}
