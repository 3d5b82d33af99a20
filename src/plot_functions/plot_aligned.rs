// src/plot_functions/plot_aligned.rs

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use ndarray::Array1;
use tracing::{debug, info};

use crate::data_analysis::aligned_layout::{compute_aligned_layout, AlignedLayout, AlignedOptions};
use crate::data_input::dataset::Dataset;
use crate::error::{PlotError, Result};
use crate::plot_framework::draw_aligned_plot;
use crate::readout::{apply_readout, compute_readout, InteractiveFigure, RedrawRequest};
use crate::types::AxisRange;

/// A computed aligned-panel figure with its readout at the initial position.
#[derive(Debug, Clone)]
pub struct AlignedFigure {
    pub layout: AlignedLayout,
}

impl AlignedFigure {
    pub fn save(&self, output: &Path) -> Result<()> {
        draw_aligned_plot(
            output,
            &self.layout,
            &self.layout.panels,
            self.layout.initial_position,
        )
    }

    /// Makes the figure live. `redraw` is called once right away and then
    /// once after every readout change.
    pub fn interactive<F>(&self, redraw: F) -> InteractiveFigure
    where
        F: FnMut(&RedrawRequest<'_>) + 'static,
    {
        InteractiveFigure::new(&self.layout, redraw)
    }

    /// Moves the readout through `steps` evenly spaced positions and writes
    /// one frame per redraw, starting with the initial position. Frames are
    /// named after `output` as `<stem>_NNN.<ext>`.
    pub fn sweep(&self, output: &Path, steps: usize) -> Result<Vec<PathBuf>> {
        let written = Rc::new(RefCell::new(Vec::new()));
        let failure: Rc<RefCell<Option<PlotError>>> = Rc::new(RefCell::new(None));

        let frames = Rc::clone(&written);
        let first_error = Rc::clone(&failure);
        let layout = self.layout.clone();
        let base = output.to_path_buf();
        let mut live = self.interactive(move |request: &RedrawRequest<'_>| {
            if first_error.borrow().is_some() {
                return;
            }
            let path = frame_path(&base, frames.borrow().len());
            match draw_aligned_plot(&path, &layout, request.panels, request.position) {
                Ok(()) => frames.borrow_mut().push(path),
                Err(err) => *first_error.borrow_mut() = Some(err),
            }
        });

        for y in sweep_positions(self.layout.positions, steps) {
            live.set_position(y);
        }
        drop(live);

        if let Some(err) = failure.borrow_mut().take() {
            return Err(err);
        }
        let frames = std::mem::take(&mut *written.borrow_mut());
        info!("Wrote {} readout frames.", frames.len());
        Ok(frames)
    }
}

/// Draws `data` as side-by-side panels sharing the vertical position axis
/// `datapos`, with a readout at the initial position. Returns the figure when
/// `options.return_figure` is set.
pub fn aligned_parallel(
    data: &Dataset,
    datapos: &[f64],
    options: &AlignedOptions,
    output: &Path,
) -> Result<Option<AlignedFigure>> {
    let mut layout = compute_aligned_layout(data, datapos, options)?;
    let updates = compute_readout(&layout.panels, layout.initial_position);
    apply_readout(&mut layout.panels, &updates);
    debug!(
        "Aligned plot: {} panels, readout at {}",
        layout.panels.len(),
        layout.initial_position
    );

    let figure = AlignedFigure { layout };
    figure.save(output)?;
    Ok(options.return_figure.then_some(figure))
}

/// `<stem>_NNN.<ext>` next to `output`.
pub fn frame_path(output: &Path, index: usize) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    let name = match output.extension() {
        Some(ext) => format!("{stem}_{index:03}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{index:03}"),
    };
    output.with_file_name(name)
}

/// Evenly spaced positions across `range`, both ends included.
pub fn sweep_positions(range: AxisRange, steps: usize) -> Vec<f64> {
    Array1::linspace(range.min, range.max, steps).to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::cell::Cell;

    fn shared_limit_data() -> (Dataset, Vec<f64>) {
        let data = Dataset::from_pairs([
            ("p", vec![0.0, 10.0, 4.0]),
            ("q", vec![5.0, 20.0, 12.0]),
        ])
        .unwrap();
        (data, vec![0.0, 1.0, 2.0])
    }

    #[test]
    fn test_shared_limits_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("aligned.svg");
        let (data, datapos) = shared_limit_data();
        let options = AlignedOptions {
            sharelimits: true,
            yticks: Some(vec![0.0, 2.0]),
            suptitle: Some("Shared".into()),
            ..Default::default()
        };
        let figure = aligned_parallel(&data, &datapos, &options, &output)
            .unwrap()
            .unwrap();
        for panel in &figure.layout.panels {
            assert_eq!(panel.x_ticks, [0.0, 20.0]);
        }
        assert!(std::fs::read_to_string(&output).unwrap().contains("<svg"));
    }

    #[test]
    fn test_initial_readout_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let (data, datapos) = shared_limit_data();
        let options = AlignedOptions {
            y: Some(0.5),
            ..Default::default()
        };
        let figure = aligned_parallel(&data, &datapos, &options, &dir.path().join("a.svg"))
            .unwrap()
            .unwrap();
        let readout = &figure.layout.panels[0].readout;
        assert!(readout.visible);
        assert_eq!(readout.position, 0.5);
        assert_abs_diff_eq!(readout.value, 5.0, epsilon = 1e-12);
        assert_eq!(figure.layout.panels[1].readout.text, "12.5");
    }

    #[test]
    fn test_return_figure_false_still_renders() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("quiet.svg");
        let (data, datapos) = shared_limit_data();
        let options = AlignedOptions {
            return_figure: false,
            slider: true,
            ..Default::default()
        };
        assert!(aligned_parallel(&data, &datapos, &options, &output)
            .unwrap()
            .is_none());
        assert!(output.exists());
    }

    #[test]
    fn test_missing_label_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("never.svg");
        let (data, datapos) = shared_limit_data();
        let options = AlignedOptions {
            labels: Some(vec!["nope".into()]),
            ..Default::default()
        };
        let result = aligned_parallel(&data, &datapos, &options, &output);
        assert!(matches!(result, Err(PlotError::MissingLabel(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_interactive_redraws_from_initial_position() {
        let dir = tempfile::tempdir().unwrap();
        let (data, datapos) = shared_limit_data();
        let figure = aligned_parallel(
            &data,
            &datapos,
            &AlignedOptions::default(),
            &dir.path().join("live.svg"),
        )
        .unwrap()
        .unwrap();
        let redraws = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&redraws);
        let mut live = figure.interactive(move |_request: &RedrawRequest<'_>| {
            counter.set(counter.get() + 1)
        });
        assert_eq!(redraws.get(), 1);
        live.set_position(2.0);
        assert_eq!(redraws.get(), 2);
        assert_eq!(live.panels()[0].readout.text, "4.0");
    }

    #[test]
    fn test_sweep_writes_one_frame_per_redraw() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("sweep.svg");
        let (data, datapos) = shared_limit_data();
        let options = AlignedOptions {
            slider: true,
            slider_label: Some("depth".into()),
            ..Default::default()
        };
        let figure = aligned_parallel(&data, &datapos, &options, &output)
            .unwrap()
            .unwrap();
        let frames = figure.sweep(&output, 3).unwrap();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0], dir.path().join("sweep_000.svg"));
        assert!(frames.iter().all(|frame| frame.exists()));
    }

    #[test]
    fn test_frame_path_naming() {
        assert_eq!(
            frame_path(Path::new("out/plot.png"), 7),
            PathBuf::from("out/plot_007.png")
        );
        assert_eq!(frame_path(Path::new("plot"), 12), PathBuf::from("plot_012"));
    }

    #[test]
    fn test_sweep_positions_cover_range() {
        let positions = sweep_positions(AxisRange::new(-1.0, 1.0), 5);
        assert_eq!(positions, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        assert!(sweep_positions(AxisRange::new(0.0, 1.0), 0).is_empty());
    }
}

// src/plot_functions/plot_aligned.rs
