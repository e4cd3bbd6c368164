use super::metrics::{mae, r2, rmse, EvaluationResult};
use super::trainer::select_best;
use super::*;
use ndarray::{Array1, Array2};

/// y = 2*x0 - 1.5*x1 + 4, no noise
fn linear_data(n: usize) -> (Array2<f64>, Array1<f64>) {
    let mut flat = Vec::with_capacity(n * 2);
    let mut y = Vec::with_capacity(n);
    for i in 0..n {
        let x0 = i as f64 / 10.0;
        let x1 = ((i * 7) % 13) as f64;
        flat.push(x0);
        flat.push(x1);
        y.push(2.0 * x0 - 1.5 * x1 + 4.0);
    }
    (
        Array2::from_shape_vec((n, 2), flat).unwrap(),
        Array1::from_vec(y),
    )
}

/// Step function of x0: easy for trees, hard for a line
fn step_data(n: usize) -> (Array2<f64>, Array1<f64>) {
    let mut flat = Vec::with_capacity(n * 2);
    let mut y = Vec::with_capacity(n);
    for i in 0..n {
        let x0 = i as f64;
        flat.push(x0);
        flat.push((i % 5) as f64);
        y.push(if x0 < n as f64 / 2.0 { 10.0 } else { 50.0 });
    }
    (
        Array2::from_shape_vec((n, 2), flat).unwrap(),
        Array1::from_vec(y),
    )
}

#[test]
fn test_linear_recovers_coefficients() {
    let (x, y) = linear_data(100);
    let mut model = LinearRegression::new();
    model.fit(x.view(), y.view());

    assert!((model.weights()[0] - 2.0).abs() < 1e-6);
    assert!((model.weights()[1] + 1.5).abs() < 1e-6);
    assert!((model.intercept() - 4.0).abs() < 1e-6);

    let preds = model.predict(x.view());
    assert!(rmse(&y.to_vec(), &preds.to_vec()) < 1e-6);
}

#[test]
fn test_forest_fits_step_function() {
    let (x, y) = step_data(80);
    let mut model = RandomForest::with_params(30, 6, 42);
    model.fit(x.view(), y.view());
    assert_eq!(model.n_trees(), 30);

    let preds = model.predict(x.view());
    assert!(r2(&y.to_vec(), &preds.to_vec()) > 0.9);
}

#[test]
fn test_forest_fit_is_reproducible() {
    let (x, y) = step_data(60);
    let mut a = RandomForest::with_params(10, 6, 7);
    let mut b = RandomForest::with_params(10, 6, 7);
    a.fit(x.view(), y.view());
    b.fit(x.view(), y.view());
    assert_eq!(a.predict(x.view()), b.predict(x.view()));
}

#[test]
fn test_boosting_fits_step_function() {
    let (x, y) = step_data(80);
    let mut model = GradientBoosting::with_params(50, 3, 0.2);
    model.fit(x.view(), y.view());
    assert_eq!(model.n_rounds_fitted(), 50);

    let preds = model.predict(x.view());
    assert!(r2(&y.to_vec(), &preds.to_vec()) > 0.95);
}

#[test]
fn test_metrics_on_perfect_prediction() {
    let actual = vec![1.0, 2.0, 3.0];
    assert_eq!(rmse(&actual, &actual), 0.0);
    assert_eq!(mae(&actual, &actual), 0.0);
    assert_eq!(r2(&actual, &actual), 1.0);
}

#[test]
fn test_metrics_known_values() {
    let actual = vec![1.0, 2.0, 3.0, 4.0];
    let predicted = vec![1.0, 2.0, 3.0, 0.0];
    assert_eq!(mae(&actual, &predicted), 1.0);
    assert_eq!(rmse(&actual, &predicted), 2.0);
    // ss_res = 16, ss_tot = 5
    assert!((r2(&actual, &predicted) - (1.0 - 16.0 / 5.0)).abs() < 1e-12);
}

#[test]
fn test_r2_constant_target() {
    let actual = vec![3.0, 3.0, 3.0];
    assert_eq!(r2(&actual, &[3.0, 3.0, 3.0]), 1.0);
    assert_eq!(r2(&actual, &[1.0, 2.0, 3.0]), 0.0);
}

#[test]
fn test_selection_picks_highest_r2() {
    let results: Vec<EvaluationResult> = [("A", 0.7), ("B", 0.9), ("C", 0.5)]
        .iter()
        .map(|(name, r2)| EvaluationResult {
            model: name.to_string(),
            rmse: 0.0,
            r2: *r2,
            mae: 0.0,
        })
        .collect();
    assert_eq!(select_best(&results), Some(1));
}

#[test]
fn test_selection_tie_goes_to_first() {
    let results: Vec<EvaluationResult> = [("A", 0.8), ("B", 0.8)]
        .iter()
        .map(|(name, r2)| EvaluationResult {
            model: name.to_string(),
            rmse: 0.0,
            r2: *r2,
            mae: 0.0,
        })
        .collect();
    assert_eq!(select_best(&results), Some(0));
}

#[test]
fn test_selection_ignores_nan() {
    let results = vec![
        EvaluationResult {
            model: "A".to_string(),
            rmse: 0.0,
            r2: f64::NAN,
            mae: 0.0,
        },
        EvaluationResult {
            model: "B".to_string(),
            rmse: 0.0,
            r2: 0.1,
            mae: 0.0,
        },
    ];
    assert_eq!(select_best(&results), Some(1));
    assert_eq!(select_best(&[]), None);
}

#[test]
fn test_log_target_round_trip() {
    for v in [0.0f64, 1.0, 42.0, 1_000_000.0, 987_654_321.0] {
        let back = v.ln_1p().exp_m1();
        assert!((back - v).abs() < 1e-6 * v.max(1.0));
    }
}

#[test]
fn test_trainer_runs_all_candidates_and_captures_contract() {
    let (x, y) = linear_data(100);
    // Targets must look like view counts: non-negative
    let y = y.mapv(|v| (v * 100.0).abs());
    let names = vec!["f0".to_string(), "f1".to_string()];
    let train = Dataset {
        feature_names: names.clone(),
        x: x.slice(ndarray::s![..80, ..]).to_owned(),
        y: y.slice(ndarray::s![..80]).to_owned(),
    };
    let test = Dataset {
        feature_names: names.clone(),
        x: x.slice(ndarray::s![80.., ..]).to_owned(),
        y: y.slice(ndarray::s![80..]).to_owned(),
    };

    let mut trainer = ModelTrainer::new();
    let results = trainer.train_and_evaluate(&train, &test).unwrap().to_vec();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].model, "LinearRegression");
    assert_eq!(results[1].model, "RandomForest");
    assert_eq!(results[2].model, "GradientBoosting");

    assert!(trainer.best_model().is_some());
    assert_eq!(trainer.feature_names(), names.as_slice());

    let ranked = trainer.results_ranked();
    assert!(ranked.windows(2).all(|w| w[0].r2 >= w[1].r2));
}

#[test]
fn test_trainer_rejects_mismatched_schemas() {
    let (x, y) = linear_data(20);
    let train = Dataset {
        feature_names: vec!["a".to_string(), "b".to_string()],
        x: x.clone(),
        y: y.clone(),
    };
    let test = Dataset {
        feature_names: vec!["a".to_string(), "c".to_string()],
        x,
        y,
    };
    let mut trainer = ModelTrainer::new();
    assert!(trainer.train_and_evaluate(&train, &test).is_err());
}

#[test]
fn test_save_before_training_fails() {
    let trainer = ModelTrainer::new();
    let dir = tempfile::tempdir().unwrap();
    let err = trainer
        .save(dir.path().join("m.json"), &crate::cleaner::CategoryEncoder::new())
        .unwrap_err();
    assert!(matches!(err, crate::error::PredictorError::NoModelTrained));
}

#[test]
fn test_candidate_model_serialization_preserves_predictions() {
    let (x, y) = step_data(60);
    let mut model = CandidateModel::Boosting(GradientBoosting::with_params(20, 3, 0.2));
    model.fit(x.view(), y.view());
    let before = model.predict(x.view());

    let json = serde_json::to_string(&model).unwrap();
    let restored: CandidateModel = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.predict(x.view()), before);
}

#[test]
fn test_dataset_drops_rows_with_missing_time_features() {
    use crate::types::FeatureVector;
    let complete = FeatureVector {
        video_id: "a".to_string(),
        category_code: 0.0,
        view_count: 100.0,
        like_count: 1.0,
        comment_count: 1.0,
        title_length: 5.0,
        description_length: 0.0,
        tag_count: 1.0,
        publish_hour: Some(12.0),
        publish_dayofweek: Some(0.0),
        is_weekend: Some(0.0),
        is_prime_time: Some(0.0),
        title_sentiment: 0.0,
        desc_sentiment: 0.0,
    };
    let mut partial = complete.clone();
    partial.publish_hour = None;

    let ds = Dataset::from_features(&[complete, partial]).unwrap();
    assert_eq!(ds.n_rows(), 1);
    assert_eq!(ds.feature_names.len(), 12);
    assert_eq!(ds.y[0], 100.0);
}
