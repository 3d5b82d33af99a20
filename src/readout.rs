// src/readout.rs

// Interactive cross-hair readout for aligned panels.
//
// Everything here is single-threaded: the slider fires its callbacks
// synchronously and each change is processed to completion (all panels
// updated, then one redraw request) before the next one is accepted.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use tracing::trace;

use crate::constants::READOUT_SIG_DIGITS;
use crate::data_analysis::aligned_layout::{AlignedLayout, Panel};
use crate::data_analysis::interpolation::interp;
use crate::formatting::{float_to_str_sig, format_slider_value};
use crate::types::AxisRange;

/// New readout state of one panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadoutUpdate {
    pub label: String,
    /// Vertical position of the marker line.
    pub position: f64,
    pub value: f64,
    pub text: String,
}

/// Handed to the redraw callback once every panel has been updated.
#[derive(Debug)]
pub struct RedrawRequest<'a> {
    pub position: f64,
    pub updates: &'a [ReadoutUpdate],
    pub panels: &'a [Panel],
}

/// Value of a panel's curve at vertical position `y`.
///
/// The curve is used as a lookup table from position to value. Positions are
/// expected to increase; for non-monotonic positions the result is undefined.
pub fn interpolate_at(panel: &Panel, y: f64) -> f64 {
    let (values, positions): (Vec<f64>, Vec<f64>) = panel.curve.iter().copied().unzip();
    interp(y, &positions, &values)
}

/// Readout of every panel at `y`, in panel order.
pub fn compute_readout(panels: &[Panel], y: f64) -> Vec<ReadoutUpdate> {
    panels
        .iter()
        .map(|panel| {
            let value = interpolate_at(panel, y);
            ReadoutUpdate {
                label: panel.label.clone(),
                position: y,
                value,
                text: float_to_str_sig(value, READOUT_SIG_DIGITS),
            }
        })
        .collect()
}

/// Moves every panel's marker and label to its update.
pub fn apply_readout(panels: &mut [Panel], updates: &[ReadoutUpdate]) {
    for (panel, update) in panels.iter_mut().zip(updates) {
        debug_assert_eq!(panel.label, update.label);
        panel.readout.position = update.position;
        panel.readout.value = update.value;
        panel.readout.text = update.text.clone();
        panel.readout.visible = true;
    }
}

pub type CallbackId = usize;

/// A vertical slider whose value lies in a closed range.
pub struct Slider {
    label: String,
    range: AxisRange,
    value: f64,
    next_id: CallbackId,
    callbacks: Vec<(CallbackId, Box<dyn FnMut(f64)>)>,
}

impl Slider {
    pub fn new(label: impl Into<String>, range: AxisRange, initial: f64) -> Self {
        Self {
            label: label.into(),
            range,
            value: clamp_to(range, initial).unwrap_or(range.min),
            next_id: 0,
            callbacks: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn range(&self) -> AxisRange {
        self.range
    }

    pub fn val(&self) -> f64 {
        self.value
    }

    /// Current value as displayed next to the slider.
    pub fn value_text(&self) -> String {
        format_slider_value(self.value)
    }

    /// Fraction of the track below the current value, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        let span = self.range.span();
        if span.abs() < f64::EPSILON {
            0.0
        } else {
            ((self.value - self.range.min) / span).clamp(0.0, 1.0)
        }
    }

    /// Registers a callback fired with the new value on every change.
    pub fn on_changed<F>(&mut self, callback: F) -> CallbackId
    where
        F: FnMut(f64) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Removes a callback. Returns false if the id was not registered.
    pub fn disconnect(&mut self, id: CallbackId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(cid, _)| *cid != id);
        self.callbacks.len() != before
    }

    /// Sets the value, clamped to the range, and fires every callback in
    /// registration order. NaN is ignored.
    pub fn set_val(&mut self, value: f64) {
        let Some(value) = clamp_to(self.range, value) else {
            return;
        };
        self.value = value;
        for (_, callback) in self.callbacks.iter_mut() {
            callback(value);
        }
    }
}

impl std::fmt::Debug for Slider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("label", &self.label)
            .field("range", &self.range)
            .field("value", &self.value)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

fn clamp_to(range: AxisRange, value: f64) -> Option<f64> {
    if value.is_nan() {
        None
    } else {
        Some(value.clamp(range.min.min(range.max), range.max.max(range.min)))
    }
}

type RedrawCallback = Rc<RefCell<Box<dyn FnMut(&RedrawRequest<'_>)>>>;

/// A live aligned-panel figure: shared panel state, an optional slider and
/// the redraw hook of whoever displays it. Dropping it releases everything.
pub struct InteractiveFigure {
    panels: Rc<RefCell<Vec<Panel>>>,
    position: Rc<Cell<f64>>,
    redraw: RedrawCallback,
    slider: Option<Slider>,
}

impl InteractiveFigure {
    /// Builds the live figure and shows the readout at the layout's initial
    /// position, which issues the first redraw request.
    ///
    /// The initial position is used as given, even outside the position
    /// range; only the slider's own value is clamped.
    pub fn new<F>(layout: &AlignedLayout, redraw: F) -> Self
    where
        F: FnMut(&RedrawRequest<'_>) + 'static,
    {
        let redraw: Box<dyn FnMut(&RedrawRequest<'_>)> = Box::new(redraw);
        let redraw: RedrawCallback = Rc::new(RefCell::new(redraw));
        let mut figure = Self {
            panels: Rc::new(RefCell::new(layout.panels.clone())),
            position: Rc::new(Cell::new(layout.initial_position)),
            redraw,
            slider: None,
        };
        if let Some(spec) = &layout.slider {
            let mut slider = Slider::new(spec.label.clone(), spec.range, layout.initial_position);
            figure.connect_readout(&mut slider);
            figure.slider = Some(slider);
        }
        update_position(
            &figure.panels,
            &figure.position,
            &figure.redraw,
            layout.initial_position,
        );
        figure
    }

    /// Registers the readout update on `slider` as a closure over the shared
    /// panel handle.
    pub fn connect_readout(&self, slider: &mut Slider) -> CallbackId {
        let panels = Rc::clone(&self.panels);
        let position = Rc::clone(&self.position);
        let redraw = Rc::clone(&self.redraw);
        slider.on_changed(move |y| update_position(&panels, &position, &redraw, y))
    }

    /// Moves the readout to `y`. With a slider the change goes through the
    /// slider, so its value and callbacks stay in sync.
    pub fn set_position(&mut self, y: f64) {
        match self.slider.as_mut() {
            Some(slider) => slider.set_val(y),
            None => update_position(&self.panels, &self.position, &self.redraw, y),
        }
    }

    pub fn position(&self) -> f64 {
        self.position.get()
    }

    pub fn panels(&self) -> Ref<'_, Vec<Panel>> {
        self.panels.borrow()
    }

    pub fn slider(&self) -> Option<&Slider> {
        self.slider.as_ref()
    }

    /// Access for the host UI to forward drag events.
    pub fn slider_mut(&mut self) -> Option<&mut Slider> {
        self.slider.as_mut()
    }
}

fn update_position(
    panels: &RefCell<Vec<Panel>>,
    position: &Cell<f64>,
    redraw: &RefCell<Box<dyn FnMut(&RedrawRequest<'_>)>>,
    y: f64,
) {
    let updates = compute_readout(&panels.borrow(), y);
    apply_readout(&mut panels.borrow_mut(), &updates);
    position.set(y);
    trace!("Readout moved to {y}");

    let panels = panels.borrow();
    let request = RedrawRequest {
        position: y,
        updates: &updates,
        panels: &panels,
    };
    let mut redraw = redraw.borrow_mut();
    (*redraw)(&request);
}


// src/readout.rs
