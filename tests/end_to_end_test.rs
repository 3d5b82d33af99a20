// tests/end_to_end_test.rs

use approx::assert_abs_diff_eq;
use std::io::Write;

use parallel_plot_render::data_analysis::aligned_layout::{compute_aligned_layout, AlignedOptions};
use parallel_plot_render::data_analysis::curve_builder::{build_curve, CurveMode, RecordCurve};
use parallel_plot_render::data_analysis::range_normalizer::compute_ranges;
use parallel_plot_render::data_analysis::rescale::rescale_columns;
use parallel_plot_render::data_input::csv_input::read_dataset;
use parallel_plot_render::types::AxisRange;
use parallel_plot_render::{aligned_parallel, parallel, Dataset, ParallelOptions, PlotError};

#[test]
fn test_two_columns_rescale_onto_first_axis() {
    let data = Dataset::from_columns(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]], Some(&["a", "b"][..]))
        .unwrap();
    let ranges = compute_ranges(data.values(), None, 0.0).unwrap();
    assert_eq!(ranges, vec![AxisRange::new(1.0, 3.0), AxisRange::new(4.0, 6.0)]);

    let rescaled = rescale_columns(data.values(), &ranges).unwrap();
    assert_abs_diff_eq!(rescaled[[1, 1]], 2.0, epsilon = 1e-12);
}

#[test]
fn test_three_axis_bezier_control_points() {
    let RecordCurve::Bezier(path) = build_curve(&[0.0, 1.0, 2.0], CurveMode::Bezier).unwrap() else {
        panic!("expected a Bezier curve");
    };
    let xs: Vec<f64> = path.vertices.iter().map(|(x, _)| *x).collect();
    let ys: Vec<f64> = path.vertices.iter().map(|(_, y)| *y).collect();
    assert_eq!(path.vertices.len(), 7);
    for (x, expected) in xs.iter().zip([0.0, 0.333, 0.667, 1.0, 1.333, 1.667, 2.0]) {
        assert_abs_diff_eq!(*x, expected, epsilon = 1e-3);
    }
    assert_eq!(ys, vec![0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0]);
}

#[test]
fn test_shared_limits_give_global_ticks() {
    let data = Dataset::from_pairs([("first", vec![0.0, 10.0]), ("second", vec![5.0, 20.0])]).unwrap();
    let options = AlignedOptions {
        sharelimits: true,
        ..Default::default()
    };
    let layout = compute_aligned_layout(&data, &[0.0, 1.0], &options).unwrap();
    assert_eq!(layout.panels[0].x_ticks, [0.0, 20.0]);
    assert_eq!(layout.panels[1].x_ticks, [0.0, 20.0]);
}

#[test]
fn test_csv_to_parallel_svg() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("records.csv");
    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "mass,length,cost").unwrap();
    writeln!(file, "1.0,20,300").unwrap();
    writeln!(file, "2.5,15,250").unwrap();
    writeln!(file, "4.0,bad,100").unwrap();
    writeln!(file, "3.0,10,400").unwrap();
    drop(file);

    let data = read_dataset(&csv_path).unwrap();
    assert_eq!(data.n_records(), 3);

    let output = dir.path().join("records.svg");
    let figure = parallel(&data, &ParallelOptions::default(), &output)
        .unwrap()
        .unwrap();
    assert_eq!(figure.labels, ["mass", "length", "cost"]);
    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("length"));
}

#[test]
fn test_csv_to_aligned_svg_with_slider() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("profile.csv");
    std::fs::write(
        &csv_path,
        "depth,stress,strain\n-1.0,10,0.1\n0.0,12,0.3\n1.0,9,0.2\n",
    )
    .unwrap();

    let mut data = read_dataset(&csv_path).unwrap();
    let depth = data.take_column("depth").unwrap();
    let options = AlignedOptions {
        slider: true,
        slider_label: Some("depth".into()),
        yticks: Some(vec![-1.0, 1.0]),
        ..Default::default()
    };
    let output = dir.path().join("profile.svg");
    let figure = aligned_parallel(&data, &depth, &options, &output)
        .unwrap()
        .unwrap();
    assert_eq!(figure.layout.panels.len(), 2);
    assert_eq!(figure.layout.panels[0].readout.text, "12.0");
    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains("0.000"), "slider value text is drawn");
}

#[test]
fn test_png_output_through_bitmap_backend() {
    let dir = tempfile::tempdir().unwrap();
    let data = Dataset::from_pairs([("a", vec![1.0, 2.0, 3.0]), ("b", vec![3.0, 1.0, 2.0])]).unwrap();
    let parallel_png = dir.path().join("parallel.png");
    let aligned_png = dir.path().join("aligned.png");
    let options = AlignedOptions {
        slider: true,
        ..Default::default()
    };

    // Bitmap text needs a system sans-serif font; without one the backend
    // reports a render error instead of writing the file.
    let results = [
        (parallel(&data, &ParallelOptions::default(), &parallel_png).map(|_| ()), parallel_png),
        (aligned_parallel(&data, &[0.0, 1.0, 2.0], &options, &aligned_png).map(|_| ()), aligned_png),
    ];
    for (result, path) in results {
        match result {
            Ok(()) => {
                let bytes = std::fs::read(&path).unwrap();
                assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
            }
            Err(PlotError::Render(message)) => eprintln!("bitmap render unavailable: {message}"),
            Err(other) => panic!("unexpected error for {}: {other}", path.display()),
        }
    }
}

#[test]
fn test_validation_errors_surface_as_plot_errors() {
    let data = Dataset::from_pairs([("only", vec![1.0, 2.0])]).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let result = parallel(&data, &ParallelOptions::default(), &dir.path().join("one.svg"));
    assert!(matches!(result, Err(PlotError::InvalidValue(_))));

    let missing = Dataset::from_columns::<&str>(vec![vec![1.0]], None);
    assert!(matches!(missing, Err(PlotError::MissingLabels(_))));
}

// tests/end_to_end_test.rs
