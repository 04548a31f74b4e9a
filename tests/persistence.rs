#![cfg(feature = "serde")]

use std::fs;

use tempfile::TempDir;
use unistroke_recognizer::{
    alphabet, GestureTemplate, Point, Recognizer, RecognizerConfig, RonDirectoryRepository,
    TemplateRepository, TemplateStore,
};

fn store_in(dir: &TempDir) -> TemplateStore {
    TemplateStore::new(
        RecognizerConfig::default(),
        Box::new(RonDirectoryRepository::new(dir.path().join("gestures"))),
    )
    .unwrap()
}

#[test]
fn trained_templates_survive_a_restart() {
    env_logger::builder().is_test(true).try_init().ok();
    let dir = TempDir::new().unwrap();

    let mut recognizer = Recognizer::new(store_in(&dir));
    let keys: Vec<String> = ["L", "V", "L"]
        .iter()
        .map(|name| {
            let added = recognizer
                .train(name, &alphabet::stroke(name).unwrap())
                .unwrap();
            added.persisted.unwrap()
        })
        .collect();
    assert_eq!(keys, ["L_1", "V_1", "L_2"]);

    let mut restarted = Recognizer::new(store_in(&dir));
    assert_eq!(restarted.store_mut().reload().unwrap(), 3);
    let names: Vec<&str> = restarted
        .store()
        .templates()
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, ["L", "L", "V"]);
    assert_eq!(
        restarted.store().templates()[0],
        recognizer.store().templates()[0]
    );

    let candidate: Vec<Point> = alphabet::stroke("V")
        .unwrap()
        .iter()
        .map(|p| Point::new(p.x * 3.0, p.y * 3.0))
        .collect();
    assert_eq!(restarted.recognize(&candidate).unwrap().label(), Some("V"));
}

#[test]
fn malformed_records_are_skipped_on_reload() {
    let dir = TempDir::new().unwrap();
    let mut repository = RonDirectoryRepository::new(dir.path());
    let good = GestureTemplate::new("L", &alphabet::stroke("L").unwrap()).unwrap();
    repository.save(&good).unwrap();
    repository
        .save(&GestureTemplate::from_normalized("short", good.points[..5].to_vec()))
        .unwrap();
    repository
        .save(&GestureTemplate::from_normalized("", good.points.clone()))
        .unwrap();
    fs::write(dir.path().join("junk_1.ron"), "[1, 2").unwrap();

    let mut store = TemplateStore::new(RecognizerConfig::default(), Box::new(repository)).unwrap();
    assert_eq!(store.reload().unwrap(), 1);
    assert_eq!(store.templates(), &[good]);
}
