use approx::assert_abs_diff_eq;
use unistroke_recognizer::{
    alphabet, cloud_match,
    geometry::{self, BoundingBox},
    normalize, Point, Recognition, Recognizer, RecognizerError, TemplateStore,
};

fn init() {
    env_logger::builder().is_test(true).try_init().ok();
}

fn l_stroke() -> Vec<Point> {
    vec![
        Point::new(0.0, 100.0),
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
    ]
}

/// An irregular open curve with no symmetry
fn squiggle() -> Vec<Point> {
    (0..50)
        .map(|i| {
            let t = i as f32 / 49.0 * 6.0;
            Point::new(t * 30.0 + (t * 2.3).cos() * 15.0, (t * 1.1).sin() * 60.0 + t * t * 2.0)
        })
        .collect()
}

fn transform(points: &[Point], scale: f32, degrees: f32, offset: Point) -> Vec<Point> {
    let c = geometry::centroid(points);
    geometry::rotate_around(points, &c, degrees.to_radians())
        .iter()
        .map(|p| Point::new(p.x * scale + offset.x, p.y * scale + offset.y))
        .collect()
}

fn seeded() -> Recognizer {
    let mut recognizer = Recognizer::new(TemplateStore::in_memory());
    recognizer.seed_alphabet().unwrap();
    recognizer
}

#[test]
fn scaled_and_rotated_l_is_recognized() {
    init();
    let mut recognizer = Recognizer::new(TemplateStore::in_memory());
    recognizer.train("L", &l_stroke()).unwrap();
    let candidate = transform(&l_stroke(), 2.0, 10.0, Point::new(30.0, -12.0));
    assert_eq!(recognizer.recognize(&candidate).unwrap().label(), Some("L"));

    // still wins with the whole alphabet to choose from
    let recognizer = seeded();
    assert_eq!(recognizer.recognize(&candidate).unwrap().label(), Some("L"));
}

#[test]
fn empty_store_reports_no_templates() {
    init();
    let recognizer = Recognizer::new(TemplateStore::in_memory());
    assert_eq!(
        recognizer.recognize(&squiggle()).unwrap(),
        Recognition::NoTemplates
    );
}

#[test]
fn closer_template_has_strictly_smaller_distance() {
    init();
    let mut recognizer = Recognizer::new(TemplateStore::in_memory());
    recognizer.train("A", &alphabet::stroke("A").unwrap()).unwrap();
    recognizer.train("B", &alphabet::stroke("B").unwrap()).unwrap();

    let wobbly_b: Vec<Point> = alphabet::stroke("B")
        .unwrap()
        .iter()
        .enumerate()
        .map(|(i, p)| Point::new(p.x + (i % 2) as f32 * 3.0, p.y - (i % 3) as f32 * 2.0))
        .collect();

    let recognition = recognizer.recognize(&wobbly_b).unwrap();
    assert_eq!(recognition.label(), Some("B"));

    let ranked = recognizer.rank(&wobbly_b).unwrap();
    assert_eq!(ranked[0].name, "B");
    assert_eq!(ranked[1].name, "A");
    assert!(ranked[0].distance < ranked[1].distance);
    match recognition {
        Recognition::Match(m) => assert_eq!(m.distance, ranked[0].distance),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn repeated_single_point_is_rejected_consistently() {
    init();
    let recognizer = seeded();
    let dot = vec![Point::new(42.0, 42.0); 12];
    for _ in 0..2 {
        assert!(matches!(
            recognizer.recognize(&dot),
            Err(RecognizerError::DegenerateInput { points: 12, .. })
        ));
    }
}

#[test]
fn normalized_strokes_have_fixed_size_and_center() {
    for scale in [0.01, 1.0, 7.5, 300.0] {
        let points = normalize(&transform(&squiggle(), scale, 0.0, Point::new(-500.0, 80.0))).unwrap();
        assert_eq!(points.len(), 64);
        let bbox = BoundingBox::of(&points).unwrap();
        assert_abs_diff_eq!(bbox.width(), 200.0, epsilon = 1e-2);
        assert_abs_diff_eq!(bbox.height(), 200.0, epsilon = 1e-2);
        let c = geometry::centroid(&points);
        assert_abs_diff_eq!(c.x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(c.y, 0.0, epsilon = 1e-3);
    }
}

#[test]
fn resampling_ignores_input_density() {
    for len in [2usize, 3, 5, 17, 400] {
        let raw: Vec<Point> = (0..len)
            .map(|i| {
                let t = i as f32 / (len - 1) as f32;
                Point::new(t * 80.0, (t * 3.0).sin() * 25.0)
            })
            .collect();
        assert_eq!(normalize(&raw).unwrap().len(), 64, "{} raw points", len);
    }
}

#[test]
fn rotation_barely_moves_the_distance() {
    let base = normalize(&squiggle()).unwrap();
    let other = normalize(&alphabet::stroke("S").unwrap()).unwrap();
    let unrelated = cloud_match(&base, &other);
    for degrees in [15.0, 90.0, 135.0, 180.0, 270.0] {
        let rotated = normalize(&transform(&squiggle(), 1.0, degrees, Point::ORIGIN)).unwrap();
        let d = cloud_match(&base, &rotated);
        assert!(d < 1.0, "{} degrees: {}", degrees, d);
        assert!(d < unrelated / 10.0);
    }
}

#[test]
fn self_match_is_zero() {
    for (name, _) in alphabet::LETTERS {
        let points = normalize(&alphabet::stroke(name).unwrap()).unwrap();
        assert_eq!(cloud_match(&points, &points), 0.0, "{}", name);
    }
    let points = normalize(&squiggle()).unwrap();
    assert_eq!(cloud_match(&points, &points), 0.0);
}

#[test]
fn recognition_is_deterministic() {
    let recognizer = seeded();
    let candidate = transform(&squiggle(), 1.3, 20.0, Point::new(5.0, 5.0));
    let first = recognizer.recognize(&candidate).unwrap();
    let second = recognizer.recognize(&candidate).unwrap();
    assert_eq!(first, second);
}

#[test]
fn raw_candidate_is_left_untouched() {
    let recognizer = seeded();
    let candidate = squiggle();
    recognizer.recognize(&candidate).unwrap();
    assert_eq!(candidate, squiggle());
}
