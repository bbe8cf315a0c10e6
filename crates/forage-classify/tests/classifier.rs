use forage_classify::{Classifier, FnScorer, LabelledSet, Prediction, Scorer};
use forage_core::{Category, Depiction, Sample, SampleShape};

const SHAPE: SampleShape = SampleShape::new(2, 2, 3);

/// Scores class `i` by how close the sample mean is to `i / 10`.
fn mean_scorer() -> impl Scorer {
    FnScorer::new(SHAPE, |sample: &Sample| {
        let mean = sample.mean();
        Prediction::new((0..5).map(|i| -(mean - i as f32 / 10.0).abs()).collect())
    })
}

#[test]
fn argmax_breaks_ties_by_lowest_ordinal() {
    assert_eq!(Prediction::new(vec![0.2, 0.9, 0.9]).predicted_class(), Category(1));
    assert_eq!(Prediction::new(vec![0.5, 0.5]).predicted_class(), Category(0));
}

#[test]
fn argmax_skips_nan_and_rejects_empty_scores() {
    assert_eq!(Prediction::new(vec![f32::NAN, 0.1]).predicted_class(), Category(1));
    assert_eq!(Prediction::new(vec![f32::NAN]).predicted_class(), Category::INVALID);
    assert_eq!(Prediction::default().predicted_class(), Category::INVALID);
}

#[test]
fn wrong_shape_maps_to_invalid_without_scoring() {
    let classifier = Classifier::new(mean_scorer());
    let wrong = Sample::filled(SampleShape::new(4, 4, 3), 0.2);
    let short = Sample::new(SHAPE, vec![0.2; 3]);

    assert_eq!(classifier.classify(&wrong), Category::INVALID);
    assert_eq!(classifier.classify(&short), Category::INVALID);
    assert_eq!(classifier.classify(&Sample::filled(SHAPE, 0.2)), Category(2));
}

#[test]
fn batch_with_malformed_samples_still_aggregates() {
    let classifier = Classifier::new(mean_scorer());
    let samples = vec![
        Sample::filled(SHAPE, 0.3),
        Sample::filled(SampleShape::new(1, 1, 1), 0.3),
        Sample::filled(SHAPE, 0.31),
        Sample::filled(SHAPE, 0.1),
    ];

    assert_eq!(
        classifier.classify_batch(&samples),
        vec![Category(3), Category::INVALID, Category(3), Category(1)]
    );
    let leaders = classifier.classify_depiction(&Depiction::new(samples));
    assert_eq!(leaders.primary(), Some(Category(3)));
    assert_eq!(leaders.count(), 2);
}

#[test]
fn calibrate_reports_leaders_per_label() {
    let classifier = Classifier::new(mean_scorer());
    let sets = vec![
        LabelledSet::new("low", vec![Sample::filled(SHAPE, 0.0), Sample::filled(SHAPE, 0.01)]),
        LabelledSet::new("high", vec![Sample::filled(SHAPE, 0.4)]),
    ];

    let reports = classifier.calibrate(&sets);
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].name, "low");
    assert_eq!(reports[0].leaders.primary(), Some(Category(0)));
    assert_eq!(reports[1].leaders.primary(), Some(Category(4)));
}
