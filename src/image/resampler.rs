use std::{
    cmp,
    ops::Range,
    sync::{mpsc, Arc},
};

use threadpool::ThreadPool;

use super::{normalizer::round_and_clip, transformer::GreyscaleTransform, GreyscaleImage, Image};
use crate::{error::Error, logger, Result};

mod footprint;

use footprint::AxisFootprints;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeSpec {
    width: usize,
    height: usize,
}

impl ResizeSpec {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidResizeSpec { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

/// Resizes greyscale images by averaging, for every destination pixel, the
/// source pixels under its footprint weighted by the covered area.
#[derive(Clone, Copy, Debug)]
pub struct AreaResampler {
    spec: ResizeSpec,
}

struct Footprints {
    rows: AxisFootprints,
    columns: AxisFootprints,
}

impl Footprints {
    fn new<T>(source: &Image<T>, spec: ResizeSpec) -> Self {
        Self {
            rows: AxisFootprints::new(source.height(), spec.height()),
            columns: AxisFootprints::new(source.width(), spec.width()),
        }
    }

    fn raw_value<T>(&self, source: &Image<T>, row: usize, column: usize) -> f64
    where
        T: Copy + Into<f64>,
    {
        let row_footprint = self.rows.get(row);
        let column_footprint = self.columns.get(column);
        let mut sum = 0.0;
        for (source_row, row_weight) in row_footprint.cells() {
            for (source_column, column_weight) in column_footprint.cells() {
                let value: f64 = source.dot(source_row, source_column).into();
                sum += row_weight * column_weight * value;
            }
        }
        sum / (row_footprint.extent() * column_footprint.extent())
    }

    fn raw_rows<T>(&self, source: &Image<T>, rows: Range<usize>) -> Vec<f64>
    where
        T: Copy + Into<f64>,
    {
        let number_of_columns = self.columns.target_length();
        rows.flat_map(|row| {
            (0..number_of_columns).map(move |column| self.raw_value(source, row, column))
        })
        .collect()
    }
}

impl AreaResampler {
    pub fn new(spec: ResizeSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> ResizeSpec {
        self.spec
    }

    pub fn resample<T>(&self, source: &Image<T>) -> Result<GreyscaleImage<u8>>
    where
        T: Copy + Into<f64>,
    {
        source.validate()?;
        self.log_resampling(source);
        let footprints = Footprints::new(source, self.spec);
        let raw = footprints.raw_rows(source, 0..self.spec.height);
        round_and_clip(&raw, self.spec.width, self.spec.height)
    }

    /// Same result as [`AreaResampler::resample`], with the destination rows
    /// split into bands that are computed on the threadpool.
    pub fn resample_in_threadpool<T>(
        &self,
        source: Arc<Image<T>>,
        threadpool: &ThreadPool,
    ) -> Result<GreyscaleImage<u8>>
    where
        T: Copy + Into<f64> + Send + Sync + 'static,
    {
        source.validate()?;
        self.log_resampling(&source);
        let footprints = Arc::new(Footprints::new(&source, self.spec));
        let bands = split_into_bands(self.spec.height, threadpool.max_count());
        let (sender, receiver) = mpsc::channel();
        for (band_index, rows) in bands.iter().cloned().enumerate() {
            let sender = sender.clone();
            let source = Arc::clone(&source);
            let footprints = Arc::clone(&footprints);
            threadpool.execute(move || {
                log::debug!("Resampling rows {:?}", rows);
                let raw = footprints.raw_rows(&source, rows);
                let _ = sender.send((band_index, raw));
            });
        }
        drop(sender);

        let row_length = self.spec.width;
        let mut raw = vec![0.0; row_length * self.spec.height];
        let mut number_of_received_bands = 0;
        for (band_index, band) in receiver.iter() {
            let start = bands[band_index].start * row_length;
            raw[start..start + band.len()].copy_from_slice(&band);
            number_of_received_bands += 1;
        }
        if number_of_received_bands != bands.len() {
            log::warn!(
                "Only {} of {} row bands were delivered",
                number_of_received_bands,
                bands.len()
            );
            return Err(Error::WorkerAborted("row band"));
        }
        round_and_clip(&raw, self.spec.width, self.spec.height)
    }

    fn log_resampling<T>(&self, source: &Image<T>) {
        logger::log_dimensions(
            "Resampling",
            (source.width(), source.height()),
            (self.spec.width, self.spec.height),
        );
    }
}

impl GreyscaleTransform for AreaResampler {
    fn apply(&self, image: &GreyscaleImage<u8>) -> Result<GreyscaleImage<u8>> {
        self.resample(image)
    }
}

fn split_into_bands(number_of_rows: usize, number_of_workers: usize) -> Vec<Range<usize>> {
    let number_of_bands = number_of_workers.clamp(1, number_of_rows);
    let band_height = number_of_rows.div_ceil(number_of_bands);
    (0..number_of_rows)
        .step_by(band_height)
        .map(|start| start..cmp::min(start + band_height, number_of_rows))
        .collect()
}
