//! Chroma-key configuration types

/// Neighborhood used when growing the background mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// Edge neighbors only (cross-shaped structuring element)
    #[default]
    Four,
    /// Edge and corner neighbors (3x3 square)
    Eight,
}

impl Connectivity {
    pub(crate) fn offsets(self) -> &'static [(i64, i64)] {
        const FOUR: [(i64, i64); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
        const EIGHT: [(i64, i64); 8] = [
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ];

        match self {
            Connectivity::Four => &FOUR,
            Connectivity::Eight => &EIGHT,
        }
    }
}

/// Parameters for chroma-key background detection
#[derive(Debug, Clone, PartialEq)]
pub struct ChromaKeyParams {
    /// Key hue in degrees
    pub hue_center: f32,
    /// Maximum circular hue distance (exclusive) for a background pixel
    pub hue_tolerance: f32,
    /// Saturation floor in percent (exclusive)
    pub min_saturation: f32,
    /// Value floor in percent (exclusive)
    pub min_value: f32,
    /// Number of dilation passes applied to the background mask
    pub dilation_iterations: u32,
    /// Neighborhood used by each dilation pass
    pub connectivity: Connectivity,
}

impl Default for ChromaKeyParams {
    fn default() -> Self {
        Self {
            hue_center: 120.0,
            hue_tolerance: 35.0,
            min_saturation: 50.0,
            min_value: 50.0,
            dilation_iterations: 2,
            connectivity: Connectivity::Four,
        }
    }
}

impl ChromaKeyParams {
    pub fn builder() -> ChromaKeyParamsBuilder {
        ChromaKeyParamsBuilder::default()
    }
}

/// Builder for ChromaKeyParams
#[derive(Default)]
pub struct ChromaKeyParamsBuilder {
    hue_center: Option<f32>,
    hue_tolerance: Option<f32>,
    min_saturation: Option<f32>,
    min_value: Option<f32>,
    dilation_iterations: Option<u32>,
    connectivity: Option<Connectivity>,
}

impl ChromaKeyParamsBuilder {
    pub fn hue_center(mut self, degrees: f32) -> Self {
        self.hue_center = Some(degrees);
        self
    }

    pub fn hue_tolerance(mut self, degrees: f32) -> Self {
        self.hue_tolerance = Some(degrees);
        self
    }

    pub fn min_saturation(mut self, percent: f32) -> Self {
        self.min_saturation = Some(percent);
        self
    }

    pub fn min_value(mut self, percent: f32) -> Self {
        self.min_value = Some(percent);
        self
    }

    pub fn dilation_iterations(mut self, iterations: u32) -> Self {
        self.dilation_iterations = Some(iterations);
        self
    }

    pub fn connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = Some(connectivity);
        self
    }

    pub fn build(self) -> ChromaKeyParams {
        let default = ChromaKeyParams::default();
        ChromaKeyParams {
            hue_center: self.hue_center.unwrap_or(default.hue_center),
            hue_tolerance: self.hue_tolerance.unwrap_or(default.hue_tolerance),
            min_saturation: self.min_saturation.unwrap_or(default.min_saturation),
            min_value: self.min_value.unwrap_or(default.min_value),
            dilation_iterations: self.dilation_iterations.unwrap_or(default.dilation_iterations),
            connectivity: self.connectivity.unwrap_or(default.connectivity),
        }
    }
}
