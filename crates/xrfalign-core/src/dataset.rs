use crate::error::{Result, XrfError};
use crate::stack::ProjectionStack;

/// Everything the loader hands over for one dataset.
///
/// The five per-projection sequences (projection axis of `stack`, `thetas`,
/// `fnames`, `x_shifts`/`y_shifts`, `centers`) are parallel and must keep
/// identical length through every mutation; [`Dataset::new`] validates this
/// once and the alignment controller maintains it transactionally.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub stack: ProjectionStack,
    /// One label per element channel (e.g. "Fe", "Ti").
    pub element_names: Vec<String>,
    /// Rotation angle per projection, degrees.
    pub thetas: Vec<f64>,
    /// Source file name per projection.
    pub fnames: Vec<String>,
    /// Cumulative horizontal pixel shift applied to each projection.
    pub x_shifts: Vec<i32>,
    /// Cumulative vertical pixel shift applied to each projection.
    pub y_shifts: Vec<i32>,
    /// Per-projection rotation-center estimates (pass-through).
    pub centers: Vec<f64>,
}

impl Dataset {
    pub fn new(
        stack: ProjectionStack,
        element_names: Vec<String>,
        thetas: Vec<f64>,
        fnames: Vec<String>,
        x_shifts: Vec<i32>,
        y_shifts: Vec<i32>,
        centers: Vec<f64>,
    ) -> Result<Self> {
        let n = stack.num_projections();
        check_len("element names", stack.num_elements(), element_names.len())?;
        check_len("thetas", n, thetas.len())?;
        check_len("fnames", n, fnames.len())?;
        check_len("x_shifts", n, x_shifts.len())?;
        check_len("y_shifts", n, y_shifts.len())?;
        check_len("centers", n, centers.len())?;

        Ok(Self {
            stack,
            element_names,
            thetas,
            fnames,
            x_shifts,
            y_shifts,
            centers,
        })
    }

    /// Fresh dataset with all shifts zeroed and centers at the image middle.
    pub fn unaligned(
        stack: ProjectionStack,
        element_names: Vec<String>,
        thetas: Vec<f64>,
        fnames: Vec<String>,
    ) -> Result<Self> {
        let n = stack.num_projections();
        let center = stack.cols() as f64 / 2.0;
        Self::new(
            stack,
            element_names,
            thetas,
            fnames,
            vec![0; n],
            vec![0; n],
            vec![center; n],
        )
    }

    pub fn num_projections(&self) -> usize {
        self.stack.num_projections()
    }

    pub fn num_elements(&self) -> usize {
        self.stack.num_elements()
    }

    /// Remove projection `index` from every parallel sequence.
    ///
    /// Validates up front so either all sequences shrink or none do.
    pub fn remove_projection(&mut self, index: usize) -> Result<()> {
        let n = self.num_projections();
        if index >= n {
            return Err(XrfError::IndexOutOfRange { index, total: n });
        }
        self.stack.remove_projection(index)?;
        self.thetas.remove(index);
        self.fnames.remove(index);
        self.x_shifts.remove(index);
        self.y_shifts.remove(index);
        self.centers.remove(index);
        debug_assert!(self.lengths_consistent());
        Ok(())
    }

    /// Parallel-sequence invariant; must hold after every transaction.
    pub fn lengths_consistent(&self) -> bool {
        let n = self.stack.num_projections();
        self.thetas.len() == n
            && self.fnames.len() == n
            && self.x_shifts.len() == n
            && self.y_shifts.len() == n
            && self.centers.len() == n
    }
}

fn check_len(what: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(XrfError::LengthMismatch {
            what,
            expected,
            got,
        });
    }
    Ok(())
}
