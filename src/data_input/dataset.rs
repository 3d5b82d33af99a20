// src/data_input/dataset.rs

use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use crate::error::{PlotError, Result};

/// Ordered named columns of equal length.
///
/// Values are stored record-major as an N×M matrix: one row per record
/// (plotted line), one column per named axis or series.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    labels: Vec<String>,
    values: Array2<f64>,
}

impl Dataset {
    /// Builds a dataset from an ordered mapping of label to column values.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let (labels, columns): (Vec<String>, Vec<Vec<f64>>) = pairs
            .into_iter()
            .map(|(label, column)| (label.into(), column))
            .unzip();
        Self::from_column_vecs(labels, columns)
    }

    /// Builds a dataset from a list of columns and a parallel label list.
    ///
    /// Labels are mandatory for list input.
    pub fn from_columns<S: AsRef<str>>(columns: Vec<Vec<f64>>, labels: Option<&[S]>) -> Result<Self> {
        let labels = labels.ok_or(PlotError::MissingLabels("column list"))?;
        let labels = labels.iter().map(|l| l.as_ref().to_string()).collect();
        Self::from_column_vecs(labels, columns)
    }

    /// Builds a dataset from an N×M array (records × columns) and its labels.
    ///
    /// Labels are mandatory for array input.
    pub fn from_array<S: AsRef<str>>(values: Array2<f64>, labels: Option<&[S]>) -> Result<Self> {
        let labels = labels.ok_or(PlotError::MissingLabels("array"))?;
        let labels = labels.iter().map(|l| l.as_ref().to_string()).collect();
        Self::new(labels, values)
    }

    /// Builds a dataset from an N×M array, labelling the columns `"0"`, `"1"`, ...
    /// when no labels are given.
    pub fn from_array_default_labels<S: AsRef<str>>(
        values: Array2<f64>,
        labels: Option<&[S]>,
    ) -> Result<Self> {
        let labels = match labels {
            Some(labels) => labels.iter().map(|l| l.as_ref().to_string()).collect(),
            None => (0..values.ncols()).map(|i| i.to_string()).collect(),
        };
        Self::new(labels, values)
    }

    fn from_column_vecs(labels: Vec<String>, columns: Vec<Vec<f64>>) -> Result<Self> {
        let n_columns = columns.len();
        if n_columns == 0 {
            return Err(PlotError::Shape("at least one column is required".into()));
        }
        let n_records = columns[0].len();
        if let Some((index, column)) = columns
            .iter()
            .enumerate()
            .find(|(_, column)| column.len() != n_records)
        {
            return Err(PlotError::Shape(format!(
                "column {index} has {} values, expected {n_records}",
                column.len()
            )));
        }

        let mut values = Array2::<f64>::zeros((n_records, n_columns));
        for (mut target, column) in values.axis_iter_mut(Axis(1)).zip(&columns) {
            target.assign(&ArrayView1::from(column.as_slice()));
        }
        Self::new(labels, values)
    }

    fn new(labels: Vec<String>, values: Array2<f64>) -> Result<Self> {
        let (n_records, n_columns) = values.dim();
        if n_columns == 0 {
            return Err(PlotError::Shape("at least one column is required".into()));
        }
        if n_records == 0 {
            return Err(PlotError::Shape("at least one record is required".into()));
        }
        if labels.len() != n_columns {
            return Err(PlotError::Shape(format!(
                "{} labels given for {n_columns} columns",
                labels.len()
            )));
        }
        Ok(Self { labels, values })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// N×M view of the data, one row per record.
    pub fn values(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    pub fn n_records(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_columns(&self) -> usize {
        self.values.ncols()
    }

    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn column(&self, label: &str) -> Option<ArrayView1<'_, f64>> {
        self.column_index(label)
            .map(|index| self.values.column(index))
    }

    /// Removes a column and returns its values, e.g. to split off a position column.
    pub fn take_column(&mut self, label: &str) -> Result<Vec<f64>> {
        let index = self
            .column_index(label)
            .ok_or_else(|| PlotError::MissingLabel(label.to_string()))?;
        if self.n_columns() == 1 {
            return Err(PlotError::Shape(format!(
                "cannot remove '{label}', it is the only column"
            )));
        }
        let taken = self.values.column(index).to_vec();
        let keep: Vec<usize> = (0..self.n_columns()).filter(|&i| i != index).collect();
        self.values = self.values.select(Axis(1), &keep);
        self.labels.remove(index);
        Ok(taken)
    }
}


// src/data_input/dataset.rs
