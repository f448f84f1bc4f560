use super::ValueScale;

#[derive(Clone, Debug)]
pub struct LinearValueScaleConfig {
    pub domain: (f32, f32),
    pub range: (f32, f32),
    pub clamp: bool,
    pub range_offset: Option<f32>,
    pub round: bool,
    pub horizontal: bool,
    pub stacked: Option<bool>,
}

impl Default for LinearValueScaleConfig {
    fn default() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            clamp: false,
            range_offset: None,
            round: false,
            horizontal: false,
            stacked: None,
        }
    }
}

/// A linear value axis mapping data values to pixel positions. Supports
/// output clamping, pixel rounding, and a constant range offset.
#[derive(Clone, Debug)]
pub struct LinearValueScale {
    domain_start: f32,
    domain_end: f32,
    range_start: f32,
    range_end: f32,
    clamp: bool,
    range_offset: Option<f32>,
    round: bool,
    horizontal: bool,
    stacked: Option<bool>,
}

impl LinearValueScale {
    pub fn new(config: &LinearValueScaleConfig) -> Self {
        Self {
            domain_start: config.domain.0,
            domain_end: config.domain.1,
            range_start: config.range.0,
            range_end: config.range.1,
            clamp: config.clamp,
            range_offset: config.range_offset,
            round: config.round,
            horizontal: config.horizontal,
            stacked: config.stacked,
        }
    }

    pub fn with_domain(mut self, domain: (f32, f32)) -> Self {
        self.domain_start = domain.0;
        self.domain_end = domain.1;
        self
    }

    pub fn with_range(mut self, range: (f32, f32)) -> Self {
        self.range_start = range.0;
        self.range_end = range.1;
        self
    }

    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn with_range_offset(mut self, range_offset: Option<f32>) -> Self {
        self.range_offset = range_offset;
        self
    }

    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    pub fn with_stacked(mut self, stacked: Option<bool>) -> Self {
        self.stacked = stacked;
        self
    }

    pub fn get_domain(&self) -> (f32, f32) {
        (self.domain_start, self.domain_end)
    }

    pub fn get_range(&self) -> (f32, f32) {
        (self.range_start, self.range_end)
    }

    fn degenerate(&self) -> bool {
        self.domain_start == self.domain_end
            || self.range_start == self.range_end
            || self.domain_start.is_nan()
            || self.domain_end.is_nan()
            || self.range_start.is_nan()
            || self.range_end.is_nan()
    }
}

impl ValueScale for LinearValueScale {
    fn is_horizontal(&self) -> bool {
        self.horizontal
    }

    fn stacked(&self) -> Option<bool> {
        self.stacked
    }

    fn pixel_for_value(&self, value: f32) -> f32 {
        if self.degenerate() {
            return self.range_start;
        }

        let domain_span = self.domain_end - self.domain_start;
        let scale = (self.range_end - self.range_start) / domain_span;
        let range_offset = self.range_offset.unwrap_or(0.0);
        let offset = self.range_start - scale * self.domain_start + range_offset;

        let mut pixel = scale * value + offset;
        if self.clamp {
            let (range_min, range_max) = if self.range_start <= self.range_end {
                (self.range_start, self.range_end)
            } else {
                (self.range_end, self.range_start)
            };
            pixel = pixel.clamp(range_min, range_max);
        }
        if self.round {
            pixel = pixel.round();
        }
        pixel
    }

    fn value_for_pixel(&self, pixel: f32) -> f32 {
        if self.degenerate() {
            return self.domain_start;
        }

        let scale = (self.domain_end - self.domain_start) / (self.range_end - self.range_start);
        let range_offset = self.range_offset.unwrap_or(0.0);
        let offset = self.domain_start - scale * self.range_start;

        let mut pixel = pixel - range_offset;
        if self.clamp {
            let (range_min, range_max) = if self.range_start <= self.range_end {
                (self.range_start, self.range_end)
            } else {
                (self.range_end, self.range_start)
            };
            pixel = pixel.clamp(range_min, range_max);
        }
        scale * pixel + offset
    }
}
