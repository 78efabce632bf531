use ndarray::Array4;

use xrfalign_core::align::{AlignmentObserver, Cursor};
use xrfalign_core::dataset::Dataset;
use xrfalign_core::stack::ProjectionStack;

/// Build a synthetic dataset with distinct pixel values.
///
/// Pixel `[e, p, r, c]` = `e*1000 + p*100 + r*10 + c`, so any shift or
/// removal is detectable by value. Thetas step by 30 degrees, file names
/// are `proj_000.h5`, `proj_001.h5`, ...
#[allow(dead_code)]
pub fn make_dataset(elements: usize, projections: usize, rows: usize, cols: usize) -> Dataset {
    let data = Array4::from_shape_fn((elements, projections, rows, cols), |(e, p, r, c)| {
        (e * 1000 + p * 100 + r * 10 + c) as f32
    });
    let element_names = (0..elements).map(|e| format!("El{}", e)).collect();
    let thetas = (0..projections).map(|p| p as f64 * 30.0).collect();
    let fnames = (0..projections).map(|p| format!("proj_{:03}.h5", p)).collect();

    Dataset::unaligned(ProjectionStack::new(data), element_names, thetas, fnames)
        .expect("parallel lengths match")
}

/// Which notification fired, in order, with enough payload to assert on.
#[derive(Clone, Debug, PartialEq)]
#[allow(dead_code)]
pub enum Event {
    Data { projections: usize },
    Theta(Vec<f64>),
    SliderRange { cursor: Cursor, projections: usize },
    FileNames { fnames: Vec<String>, cursor: Cursor },
    Alignment { x: Vec<i32>, y: Vec<i32> },
    Cursor { element: usize, projection: usize },
}

/// Observer that records every notification for ordering assertions.
#[derive(Default)]
pub struct RecordingObserver {
    pub events: Vec<Event>,
}

#[allow(dead_code)]
impl RecordingObserver {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// The discriminant names, in emission order.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.events
            .iter()
            .map(|e| match e {
                Event::Data { .. } => "data",
                Event::Theta(_) => "theta",
                Event::SliderRange { .. } => "slider_range",
                Event::FileNames { .. } => "file_names",
                Event::Alignment { .. } => "alignment",
                Event::Cursor { .. } => "cursor",
            })
            .collect()
    }
}

impl AlignmentObserver for RecordingObserver {
    fn on_data_changed(&mut self, stack: &ProjectionStack) {
        self.events.push(Event::Data {
            projections: stack.num_projections(),
        });
    }

    fn on_theta_changed(&mut self, thetas: &[f64]) {
        self.events.push(Event::Theta(thetas.to_vec()));
    }

    fn on_slider_range_changed(&mut self, cursor: Cursor, stack: &ProjectionStack, _thetas: &[f64]) {
        self.events.push(Event::SliderRange {
            cursor,
            projections: stack.num_projections(),
        });
    }

    fn on_file_names_changed(&mut self, fnames: &[String], cursor: Cursor) {
        self.events.push(Event::FileNames {
            fnames: fnames.to_vec(),
            cursor,
        });
    }

    fn on_alignment_changed(&mut self, x_shifts: &[i32], y_shifts: &[i32], _centers: &[f64]) {
        self.events.push(Event::Alignment {
            x: x_shifts.to_vec(),
            y: y_shifts.to_vec(),
        });
    }

    fn on_cursor_changed(&mut self, element: usize, projection: usize) {
        self.events.push(Event::Cursor {
            element,
            projection,
        });
    }
}
