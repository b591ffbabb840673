/// The run of source cells one destination cell covers along a single axis,
/// together with the weight of every cell in the run.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisFootprint {
    first_cell: usize,
    weights: Vec<f64>,
    extent: f64,
}

impl AxisFootprint {
    pub fn new(source_length: usize, target_length: usize, target_index: usize) -> Self {
        let start = (source_length * target_index) as f64 / target_length as f64;
        let end = (source_length * (target_index + 1)) as f64 / target_length as f64;
        let first_cell = start.floor() as usize;
        let last_cell = end.floor() as usize;
        let weights = (first_cell..source_length)
            .take_while(|&cell| (cell as f64) < end)
            .map(|cell| {
                let mut weight = 1.0;
                if cell == first_cell {
                    weight -= start - start.floor();
                }
                // Applies to the same cell as above when the run is one cell long.
                if cell == last_cell {
                    weight -= end.ceil() - end;
                }
                weight
            })
            .collect();
        Self {
            first_cell,
            weights,
            extent: end - start,
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .map(move |(offset, &weight)| (self.first_cell + offset, weight))
    }

    /// Length of the destination cell in source units.
    pub fn extent(&self) -> f64 {
        self.extent
    }
}

/// Footprints of all destination cells along one axis.
#[derive(Debug, Clone)]
pub struct AxisFootprints {
    footprints: Vec<AxisFootprint>,
}

impl AxisFootprints {
    pub fn new(source_length: usize, target_length: usize) -> Self {
        let footprints = (0..target_length)
            .map(|target_index| AxisFootprint::new(source_length, target_length, target_index))
            .collect();
        Self { footprints }
    }

    pub fn get(&self, target_index: usize) -> &AxisFootprint {
        &self.footprints[target_index]
    }

    pub fn target_length(&self) -> usize {
        self.footprints.len()
    }
}
